//! The authoritative bundle of computed values for one birth date.

use crate::can_chi::{CanChi, can_chi};
use crate::cycles::{PersonalCycles, personal_cycles};
use crate::date::{BirthDate, ReferenceDate};
use crate::error::CipherError;
use crate::life_path::life_path;
use crate::reduce::Digit;

/// Every value the engine computes for a birth date and reference date.
///
/// Narrative text may describe these values but never replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputedFacts {
    pub birth: BirthDate,
    pub reference: ReferenceDate,
    pub life_path: Digit,
    pub cycles: PersonalCycles,
    pub zodiac: CanChi,
}

impl ComputedFacts {
    /// Compute all facts for a parsed birth date.
    pub fn compute(birth: &BirthDate, reference: &ReferenceDate) -> Self {
        Self {
            birth: *birth,
            reference: *reference,
            life_path: life_path(birth),
            cycles: personal_cycles(birth, reference),
            zodiac: can_chi(birth),
        }
    }

    /// Compute all facts from a `YYYY-MM-DD` birth date string.
    pub fn from_dob(dob: &str, reference: &ReferenceDate) -> Result<Self, CipherError> {
        let birth: BirthDate = dob.parse()?;
        Ok(Self::compute(&birth, reference))
    }

    /// Plain-text fact lines for embedding in a narrative request.
    pub fn source_of_truth(&self) -> String {
        format!(
            "- Life Path: {}\n- Personal Year/Month/Day: {} / {} / {}\n- Vietnamese Zodiac: {}",
            self.life_path,
            self.cycles.personal_year,
            self.cycles.personal_month,
            self.cycles.personal_day,
            self.zodiac,
        )
    }
}
