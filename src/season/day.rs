//! Year-agnostic calendar day.

use std::fmt;
use std::str::FromStr;

use super::KeyError;

/// A month/day pair without a year.
///
/// Ordered by `(month, day)`, which matches the lexicographic order of the
/// `MMDD` token form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear {
    month: u8,
    day: u8,
}

impl DayOfYear {
    pub const NEW_YEAR: Self = Self { month: 1, day: 1 };

    /// Build a day, accepting anything that exists in a leap year.
    pub fn new(month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > max_days(month) {
            return None;
        }
        Some(Self { month, day })
    }

    /// Quote-book form: `MM-DD`.
    pub fn dashed(self) -> String {
        format!("{:02}-{:02}", self.month, self.day)
    }

    /// Parse the `MM-DD` form used by quote-book keys.
    pub fn parse_dashed(s: &str) -> Option<Self> {
        let (month, day) = s.split_once('-')?;
        Self::new(parse_two_digits(month)?, parse_two_digits(day)?)
    }

    /// The day with month and day swapped, if that is a real day.
    ///
    /// Used to suggest `0422` for a key written as `2204`.
    pub fn parse_swapped(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        Self::new(parse_two_digits(&s[2..4])?, parse_two_digits(&s[0..2])?)
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl FromStr for DayOfYear {
    type Err = KeyError;

    /// Parse the `MMDD` form used by mapping keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(KeyError::Format(s.to_string()));
        }
        let month = parse_two_digits(&s[0..2]).ok_or_else(|| KeyError::Format(s.to_string()))?;
        let day = parse_two_digits(&s[2..4]).ok_or_else(|| KeyError::Format(s.to_string()))?;
        Self::new(month, day).ok_or_else(|| KeyError::NoSuchDay(s.to_string()))
    }
}

/// Longest possible month length (February counts 29).
const fn max_days(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

/// Parse a 2-digit ASCII number
#[inline]
fn parse_two_digits(s: &str) -> Option<u8> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}
