//! Can Chi: the Vietnamese heavenly stem / earthly branch year cycle.
//!
//! Stems cycle every 10 years and branches every 12, so a stem-branch pair
//! repeats every 60 years. Both tables are indexed directly by the CE year:
//! `year mod 10` selects the stem (Canh at 0) and `year mod 12` selects the
//! branch (Thân at 0). The year's element is the stem's element, never the
//! branch's.

use std::fmt::{Display, Formatter};

use crate::date::BirthDate;
use crate::error::CipherError;

/// The five elements (ngũ hành) carried by the stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Metal,
    Water,
    Wood,
    Fire,
    Earth,
}

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Water => "Water",
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }
}

/// The 10 heavenly stems (thiên can), in year-mod-10 order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Canh,
    Tan,
    Nham,
    Quy,
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
}

/// All 10 stems in order (index 0 = Canh, years ending in 0).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Canh,
    Stem::Tan,
    Stem::Nham,
    Stem::Quy,
    Stem::Giap,
    Stem::At,
    Stem::Binh,
    Stem::Dinh,
    Stem::Mau,
    Stem::Ky,
];

impl Stem {
    /// Vietnamese name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
        }
    }

    /// Element carried by the stem. Stems pair up on each element.
    pub const fn element(self) -> Element {
        match self {
            Self::Canh | Self::Tan => Element::Metal,
            Self::Nham | Self::Quy => Element::Water,
            Self::Giap | Self::At => Element::Wood,
            Self::Binh | Self::Dinh => Element::Fire,
            Self::Mau | Self::Ky => Element::Earth,
        }
    }

    /// 0-based index (Canh=0 .. Kỷ=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Canh => 0,
            Self::Tan => 1,
            Self::Nham => 2,
            Self::Quy => 3,
            Self::Giap => 4,
            Self::At => 5,
            Self::Binh => 6,
            Self::Dinh => 7,
            Self::Mau => 8,
            Self::Ky => 9,
        }
    }
}

/// The 12 earthly branches (địa chi), in year-mod-12 order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Than,
    Dau,
    Tuat,
    Hoi,
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
}

/// All 12 branches in order (index 0 = Thân, years divisible by 12).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Than,
    Branch::Dau,
    Branch::Tuat,
    Branch::Hoi,
    Branch::Ty,
    Branch::Suu,
    Branch::Dan,
    Branch::Mao,
    Branch::Thin,
    Branch::Ti,
    Branch::Ngo,
    Branch::Mui,
];

/// Display strings for one branch table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchNames {
    /// Vietnamese branch name.
    pub native: &'static str,
    /// English animal label.
    pub animal: &'static str,
}

const BRANCH_NAMES: [BranchNames; 12] = [
    BranchNames { native: "Thân", animal: "Monkey" },
    BranchNames { native: "Dậu", animal: "Rooster" },
    BranchNames { native: "Tuất", animal: "Dog" },
    BranchNames { native: "Hợi", animal: "Pig" },
    BranchNames { native: "Tý", animal: "Rat" },
    BranchNames { native: "Sửu", animal: "Buffalo" },
    BranchNames { native: "Dần", animal: "Tiger" },
    BranchNames { native: "Mão", animal: "Cat" },
    BranchNames { native: "Thìn", animal: "Dragon" },
    BranchNames { native: "Tỵ", animal: "Snake" },
    BranchNames { native: "Ngọ", animal: "Horse" },
    BranchNames { native: "Mùi", animal: "Goat" },
];

impl Branch {
    /// Vietnamese name of the branch.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize].native
    }

    /// English animal label of the branch.
    pub const fn animal(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize].animal
    }

    /// Both display strings of the branch.
    pub const fn names(self) -> BranchNames {
        BRANCH_NAMES[self.index() as usize]
    }

    /// 0-based index (Thân=0 .. Mùi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Than => 0,
            Self::Dau => 1,
            Self::Tuat => 2,
            Self::Hoi => 3,
            Self::Ty => 4,
            Self::Suu => 5,
            Self::Dan => 6,
            Self::Mao => 7,
            Self::Thin => 8,
            Self::Ti => 9,
            Self::Ngo => 10,
            Self::Mui => 11,
        }
    }
}

/// Stem-branch assignment for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanChi {
    pub stem: Stem,
    pub branch: Branch,
    /// Always `stem.element()`.
    pub element: Element,
}

impl CanChi {
    /// English animal label of the branch.
    pub const fn animal(&self) -> &'static str {
        self.branch.animal()
    }

    /// Combined name, e.g. "Canh Ngọ".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.stem.name(), self.branch.name())
    }
}

impl Display for CanChi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (The {} {})",
            self.stem.name(),
            self.branch.name(),
            self.element.name(),
            self.animal()
        )
    }
}

fn from_indices(stem_index: usize, branch_index: usize) -> CanChi {
    let stem = ALL_STEMS[stem_index];
    CanChi {
        stem,
        branch: ALL_BRANCHES[branch_index],
        element: stem.element(),
    }
}

/// Can Chi for a CE year.
pub fn can_chi_from_year(year: i32) -> CanChi {
    from_indices(year.rem_euclid(10) as usize, year.rem_euclid(12) as usize)
}

/// Can Chi for a birth date (only the year is used).
pub fn can_chi(birth: &BirthDate) -> CanChi {
    let year = birth.year();
    from_indices((year % 10) as usize, (year % 12) as usize)
}

/// Can Chi from a `YYYY-MM-DD` birth date string.
pub fn can_chi_from_str(dob: &str) -> Result<CanChi, CipherError> {
    let birth: BirthDate = dob.parse()?;
    Ok(can_chi(&birth))
}
