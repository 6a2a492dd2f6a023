//! Numerological digit reduction.
//!
//! A compound number is reduced by summing its decimal digits until a single
//! digit remains. When master numbers are allowed, 11, 22 and 33 stop the
//! reduction wherever they appear, including as an intermediate sum.

use std::fmt::{Display, Formatter};

use crate::error::CipherError;

/// The three master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

/// A reduced numerology value: 0..=9 or one of the master numbers.
///
/// Only produced by reduction; there is no public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The numeric value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this is a master number (11, 22, 33).
    pub const fn is_master(self) -> bool {
        matches!(self.0, 11 | 22 | 33)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce a non-negative number. Infallible core used by the date pipelines.
pub(crate) fn reduce(n: u64, allow_master: bool) -> Digit {
    let mut current = n;
    while current > 9 {
        if allow_master && matches!(current, 11 | 22 | 33) {
            break;
        }
        current = digit_sum(current);
    }
    // current <= 33 here
    Digit(current as u8)
}

/// Reduce `n` to a single digit, optionally preserving master numbers.
///
/// `0` is already reduced and returns `0`. Negative input is rejected.
pub fn reduce_to_single_digit(n: i64, allow_master: bool) -> Result<Digit, CipherError> {
    let n = u64::try_from(n).map_err(|_| {
        CipherError::InvalidInput(format!("cannot reduce negative number {n}"))
    })?;
    Ok(reduce(n, allow_master))
}
