//! Personal year, month and day cycles.
//!
//! The cycles are a strict pipeline over the birth month/day and an explicit
//! reference date. No stage grants a master-number exception.

use crate::date::{BirthDate, ReferenceDate};
use crate::error::CipherError;
use crate::reduce::{Digit, reduce};

/// Personal cycle digits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonalCycles {
    pub personal_year: Digit,
    pub personal_month: Digit,
    pub personal_day: Digit,
}

/// Compute personal cycles for `birth` as of `reference`.
pub fn personal_cycles(birth: &BirthDate, reference: &ReferenceDate) -> PersonalCycles {
    let birth_month = reduce(u64::from(birth.month()), false);
    let birth_day = reduce(u64::from(birth.day()), false);
    let ref_year = reduce(u64::from(reference.year()), false);

    let personal_year = reduce(
        u64::from(birth_month.value()) + u64::from(birth_day.value()) + u64::from(ref_year.value()),
        false,
    );
    let personal_month = reduce(
        u64::from(personal_year.value()) + u64::from(reference.month()),
        false,
    );
    let personal_day = reduce(
        u64::from(personal_month.value()) + u64::from(reference.day()),
        false,
    );

    PersonalCycles {
        personal_year,
        personal_month,
        personal_day,
    }
}

/// Compute personal cycles from a `YYYY-MM-DD` birth date string.
pub fn personal_cycles_from_str(
    dob: &str,
    reference: &ReferenceDate,
) -> Result<PersonalCycles, CipherError> {
    let birth: BirthDate = dob.parse()?;
    Ok(personal_cycles(&birth, reference))
}
