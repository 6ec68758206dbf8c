//! Calendar keys: `MMDD` or `MMDD-MMDD`.

use std::fmt;
use std::str::FromStr;

use super::{DayOfYear, KeyError};

/// A day-of-year token that triggers a seasonal asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKey {
    /// A single day, checked before any range.
    Exact(DayOfYear),
    /// Inclusive span. `start > end` wraps over the year end.
    Range { start: DayOfYear, end: DayOfYear },
}

impl CalendarKey {
    /// Whether `today` falls inside a range key.
    ///
    /// Exact keys never match here; they are looked up separately so that
    /// they win over every range.
    pub fn range_contains(&self, today: DayOfYear) -> bool {
        match *self {
            Self::Exact(_) => false,
            Self::Range { start, end } if start <= end => start <= today && today <= end,
            Self::Range { start, end } => today >= start || today <= end,
        }
    }

    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Whether two range keys share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (Self::Range { start: a, end: b }, Self::Range { start: c, end: d }) = (*self, *other)
        else {
            return false;
        };
        self.range_contains(c)
            || self.range_contains(d)
            || other.range_contains(a)
            || other.range_contains(b)
    }
}

impl fmt::Display for CalendarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(day) => write!(f, "{day}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl FromStr for CalendarKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('-') {
            Some((start, end)) => Ok(Self::Range {
                start: start.parse()?,
                end: end.parse()?,
            }),
            None => Ok(Self::Exact(s.parse()?)),
        }
    }
}
