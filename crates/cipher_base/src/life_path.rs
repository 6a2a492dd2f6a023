//! Life path number from a birth date.
//!
//! Year, month and day are each reduced without master exceptions, then
//! their sum is reduced with master numbers preserved.

use crate::date::BirthDate;
use crate::error::CipherError;
use crate::reduce::{Digit, reduce};

/// Life path number for a parsed birth date.
pub fn life_path(birth: &BirthDate) -> Digit {
    let year = reduce(u64::from(birth.year()), false);
    let month = reduce(u64::from(birth.month()), false);
    let day = reduce(u64::from(birth.day()), false);
    let sum = u64::from(year.value()) + u64::from(month.value()) + u64::from(day.value());
    reduce(sum, true)
}

/// Life path number for a `YYYY-MM-DD` string.
pub fn life_path_from_str(dob: &str) -> Result<Digit, CipherError> {
    let birth: BirthDate = dob.parse()?;
    Ok(life_path(&birth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_1990_07_16() {
        // 1990 → 19 → 10 → 1; 7; 16 → 7; 1+7+7 = 15 → 6
        assert_eq!(life_path_from_str("1990-07-16").unwrap().value(), 6);
    }

    #[test]
    fn master_eleven_preserved() {
        // 1990 → 1; 1; 9 → 11
        let d = life_path_from_str("1990-01-09").unwrap();
        assert_eq!(d.value(), 11);
        assert!(d.is_master());
    }

    #[test]
    fn master_twenty_two_preserved() {
        // 1998 → 27 → 9; 9; 4 → 22
        assert_eq!(life_path_from_str("1998-09-04").unwrap().value(), 22);
    }

    #[test]
    fn components_reduced_without_master() {
        // month 11 → 2, day 29 → 11 → 2, year 2000 → 2; sum 6
        assert_eq!(life_path_from_str("2000-11-29").unwrap().value(), 6);
    }

    #[test]
    fn malformed_rejected() {
        assert!(matches!(
            life_path_from_str("1990-07"),
            Err(CipherError::InvalidInput(_))
        ));
        assert!(life_path_from_str("").is_err());
        assert!(life_path_from_str("abcd-ef-gh").is_err());
    }
}
