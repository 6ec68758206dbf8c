//! Seasonal asset resolution.
//!
//! Maps today's day of year to an asset name through an ordered table of
//! calendar keys:
//!
//! ```text
//! "1031"      exact day       checked first, always wins
//! "1201-1225" plain range     start <= today <= end
//! "1231-0101" wrapping range  today >= start || today <= end
//! ```
//!
//! Ranges are scanned in declaration order and the first hit wins. When two
//! ranges overlap, the earlier one shadows the later one on shared days.

mod day;
mod key;
mod mapping;

pub use day::DayOfYear;
pub use key::CalendarKey;
pub use mapping::AssetMapping;

use thiserror::Error;

/// Calendar key parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("`{0}` is not in MMDD or MMDD-MMDD form")]
    Format(String),

    #[error("`{0}` is not a day of the year")]
    NoSuchDay(String),
}

/// Pick the asset for `today`, or `default` when nothing matches.
pub fn resolve<'a>(today: DayOfYear, mapping: &'a AssetMapping, default: &'a str) -> &'a str {
    mapping
        .exact(today)
        .or_else(|| mapping.first_range(today))
        .unwrap_or(default)
}
