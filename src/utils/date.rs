//! Calendar dates without timezone dependencies.
//!
//! Provides a lightweight `CivilDate` for picking "today":
//!
//! - Current date from `SystemTime`, shifted by a fixed UTC offset
//! - `YYYY-MM-DD` parsing for the `--date` override
//! - Validation with clear error messages
//! - Leap year handling
//!
//! # Examples
//!
//! ```ignore
//! let today = CivilDate::today(330);            // UTC+05:30
//! let date = CivilDate::parse("2024-12-25").unwrap();
//! assert_eq!(date.day_of_year().to_string(), "1225");
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, bail};

use crate::season::DayOfYear;

const SECONDS_PER_DAY: i64 = 86_400;

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Today's date at a fixed offset from UTC.
    pub fn today(utc_offset_minutes: i32) -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
            .unwrap_or(0);
        Self::from_unix(secs.saturating_add(i64::from(utc_offset_minutes) * 60))
    }

    /// Date containing the given Unix timestamp.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix(secs: i64) -> Self {
        // Days-to-civil conversion on 400-year eras, shifted so that the
        // year starts on March 1st.
        let z = secs.div_euclid(SECONDS_PER_DAY) + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(year.clamp(0, i64::from(u16::MAX)) as u16, month as u8, day as u8)
    }

    /// Parse from "YYYY-MM-DD" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let date = Self::new(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );
        date.validate().ok()?;
        Some(date)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    /// The year-agnostic part used for seasonal lookups.
    pub fn day_of_year(self) -> DayOfYear {
        // A validated date is always a valid day of some year.
        DayOfYear::new(self.month, self.day).unwrap_or(DayOfYear::NEW_YEAR)
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// clap value parser for `--date`.
pub fn parse_date_arg(s: &str) -> Result<CivilDate, String> {
    CivilDate::parse(s).ok_or_else(|| format!("expected a date as YYYY-MM-DD, got `{s}`"))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
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

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = CivilDate::parse("2024-06-15").unwrap();
        assert_eq!(date, CivilDate::new(2024, 6, 15));
        assert_eq!(date.to_string(), "2024-06-15");
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(CivilDate::parse("2024-6-15"), None);
        assert_eq!(CivilDate::parse("2024/06/15"), None);
        assert_eq!(CivilDate::parse("2024-06-15T00:00:00Z"), None);
        assert_eq!(CivilDate::parse("2024-13-01"), None);
        assert_eq!(CivilDate::parse("2023-02-29"), None);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(CivilDate::new(2024, 2, 29).validate().is_ok());
        assert!(CivilDate::new(2000, 2, 29).validate().is_ok()); // divisible by 400
        assert!(CivilDate::new(2023, 2, 29).validate().is_err());
        assert!(CivilDate::new(1900, 2, 29).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(CivilDate::new(2024, 6, 0).validate().is_err());
        assert!(CivilDate::new(2024, 1, 32).validate().is_err());
        assert!(CivilDate::new(2024, 4, 31).validate().is_err());
    }

    #[test]
    fn test_from_unix() {
        assert_eq!(CivilDate::from_unix(0), CivilDate::new(1970, 1, 1));
        assert_eq!(CivilDate::from_unix(-1), CivilDate::new(1969, 12, 31));
        assert_eq!(CivilDate::from_unix(951_782_400), CivilDate::new(2000, 2, 29));
        assert_eq!(CivilDate::from_unix(1_700_000_000), CivilDate::new(2023, 11, 14));
    }

    #[test]
    fn test_from_unix_year_boundary() {
        // 2024-12-31T23:59:59Z and one second later
        assert_eq!(CivilDate::from_unix(1_735_689_599), CivilDate::new(2024, 12, 31));
        assert_eq!(CivilDate::from_unix(1_735_689_600), CivilDate::new(2025, 1, 1));
    }

    #[test]
    fn test_today_is_valid() {
        assert!(CivilDate::today(0).validate().is_ok());
        assert!(CivilDate::today(14 * 60).validate().is_ok());
        assert!(CivilDate::today(-14 * 60).validate().is_ok());
    }

    #[test]
    fn test_day_of_year() {
        let date = CivilDate::new(2024, 12, 25);
        assert_eq!(date.day_of_year().to_string(), "1225");
        assert_eq!(date.day_of_year().dashed(), "12-25");
    }

    #[test]
    fn test_parse_date_arg_message() {
        let err = parse_date_arg("tomorrow").unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
        assert!(parse_date_arg("2025-01-01").is_ok());
    }
}
