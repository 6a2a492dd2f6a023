//! Gregorian calendar dates as consumed by the cipher engine.
//!
//! Birth dates arrive as `YYYY-MM-DD` strings. The three-component shape is
//! checked before any component is parsed, and a component that cannot be
//! parsed is an error rather than a zero.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CipherError;

/// A Gregorian calendar date with no time-of-day or timezone.
///
/// Only [`CalendarDate::new`] and [`FromStr`] construct one, so every value
/// has a non-negative year and an in-range month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: u32,
    month: u32,
    day: u32,
}

/// The user's date of birth.
pub type BirthDate = CalendarDate;

/// The date personal cycles are evaluated against (usually "today").
pub type ReferenceDate = CalendarDate;

impl CalendarDate {
    /// Build a date, validating month and day against the Gregorian calendar.
    ///
    /// Years before CE 0 are rejected; digit reduction is undefined for them.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CipherError> {
        let year = u32::try_from(year)
            .map_err(|_| CipherError::InvalidInput(format!("negative year {year}")))?;
        if !(1..=12).contains(&month) {
            return Err(CipherError::InvalidInput(format!(
                "month {month} outside 1..=12"
            )));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(CipherError::InvalidInput(format!(
                "day {day} outside 1..={max_day} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub const fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn parse_component<T: FromStr>(raw: &str, what: &str, input: &str) -> Result<T, CipherError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::InvalidInput(format!(
            "non-numeric {what} component {raw:?} in {input:?}"
        )));
    }
    raw.parse()
        .map_err(|_| CipherError::InvalidInput(format!("{what} out of range in {input:?}")))
}

impl FromStr for CalendarDate {
    type Err = CipherError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(CipherError::InvalidInput(format!(
                "expected YYYY-MM-DD, got {s:?}"
            )));
        }
        let year: i32 = parse_component(parts[0], "year", s)?;
        let month: u32 = parse_component(parts[1], "month", s)?;
        let day: u32 = parse_component(parts[2], "day", s)?;
        Self::new(year, month, day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let d: CalendarDate = "1990-07-16".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 7, 16));
    }

    #[test]
    fn parse_trims_whitespace() {
        let d: CalendarDate = " 2024-02-29\n".parse().unwrap();
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn missing_component_rejected() {
        assert!(matches!(
            "1990-07".parse::<CalendarDate>(),
            Err(CipherError::InvalidInput(_))
        ));
    }

    #[test]
    fn extra_component_rejected() {
        assert!("1990-07-16-01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn non_numeric_rejected() {
        assert!("1990-Jul-16".parse::<CalendarDate>().is_err());
        assert!("1990-07-1x".parse::<CalendarDate>().is_err());
        assert!("1990--16".parse::<CalendarDate>().is_err());
        assert!("+1990-07-16".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!("1990-13-01".parse::<CalendarDate>().is_err());
        assert!("1990-00-01".parse::<CalendarDate>().is_err());
        assert!("1990-04-31".parse::<CalendarDate>().is_err());
        assert!("2023-02-29".parse::<CalendarDate>().is_err());
        assert!("1990-01-00".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn negative_year_rejected() {
        assert!(matches!(
            CalendarDate::new(-44, 3, 15),
            Err(CipherError::InvalidInput(_))
        ));
        assert!(CalendarDate::new(-1990, 7, 16).is_err());
    }

    #[test]
    fn zero_month_and_day_rejected() {
        assert!(CalendarDate::new(2024, 0, 0).is_err());
        assert!(CalendarDate::new(2024, 10, 0).is_err());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn display_zero_pads() {
        let d = CalendarDate::new(987, 3, 5).unwrap();
        assert_eq!(d.to_string(), "0987-03-05");
    }
}
