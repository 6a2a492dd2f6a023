//! Calendar-cipher arithmetic: numerology reductions and the Can Chi cycle.
//!
//! This crate provides:
//! - Digit reduction with master-number (11, 22, 33) preservation
//! - Life path number from a birth date
//! - Personal year/month/day cycles against an explicit reference date
//! - Stem/branch/animal/element assignment for a birth year
//!
//! Everything here is pure: no I/O, no clock, no shared state.

pub mod can_chi;
pub mod cycles;
pub mod date;
pub mod error;
pub mod facts;
pub mod life_path;
pub mod reduce;

pub use can_chi::{
    ALL_BRANCHES, ALL_STEMS, Branch, BranchNames, CanChi, Element, Stem, can_chi,
    can_chi_from_str, can_chi_from_year,
};
pub use cycles::{PersonalCycles, personal_cycles, personal_cycles_from_str};
pub use date::{BirthDate, CalendarDate, ReferenceDate, days_in_month, is_leap_year};
pub use error::CipherError;
pub use facts::ComputedFacts;
pub use life_path::{life_path, life_path_from_str};
pub use reduce::{Digit, MASTER_NUMBERS, reduce_to_single_digit};
