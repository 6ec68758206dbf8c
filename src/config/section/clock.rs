//! `[clock]` section configuration.
//!
//! ```toml
//! [clock]
//! utc_offset_minutes = 330   # UTC+05:30
//! ```

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Widest offset in use (UTC+14:00, Line Islands).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// How "today" is derived from the system clock.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed offset from UTC in minutes.
    pub utc_offset_minutes: i32,
}

impl ClockConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            diag.error(
                FieldPath::new("clock.utc_offset_minutes"),
                format!(
                    "{} is outside -{MAX_OFFSET_MINUTES}..={MAX_OFFSET_MINUTES}",
                    self.utc_offset_minutes
                ),
            );
        }
    }
}
