//! `[seasonal]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [seasonal]
//! default = "header.png"
//!
//! [seasonal.images]              # first matching range wins
//! "1031" = "halloween.png"
//! "1201-1224" = "christmas.png"
//! "1231-0101" = "newyear.png"
//! ```

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::season::{AssetMapping, DayOfYear, KeyError};

/// Seasonal header image settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    /// Image used when no key matches today.
    pub default: String,

    /// Calendar keys to image names, in priority order for ranges.
    pub images: AssetMapping,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            default: "header.png".to_string(),
            images: AssetMapping::from_pairs([
                ("1031", "halloween.png"),
                ("0908", "birthday.png"),
                ("0422", "earthday.png"),
                ("0701", "programmersday.png"),
                ("1225", "christmas.png"),
                ("1231-0101", "newyear.png"),
            ]),
        }
    }
}

impl SeasonalConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default.trim().is_empty() {
            diag.error(FieldPath::new("seasonal.default"), "must not be empty");
        }

        for rejected in self.images.rejected() {
            let field = FieldPath::key("seasonal.images", &rejected.raw);
            match swapped_hint(&rejected.raw, &rejected.error) {
                Some(hint) => diag.error_with_hint(field, rejected.error.to_string(), hint),
                None => diag.error(field, rejected.error.to_string()),
            }
        }

        for (key, asset) in self.images.entries() {
            if asset.trim().is_empty() {
                diag.error(
                    FieldPath::key("seasonal.images", &key.to_string()),
                    "image name must not be empty",
                );
            }
        }

        if self.images.is_empty() && self.images.rejected().is_empty() {
            diag.warn(
                FieldPath::new("seasonal.images"),
                "no seasonal images, the default is always used",
            );
        }

        for (first, second) in self.images.overlapping_ranges() {
            diag.warn(
                FieldPath::key("seasonal.images", &second.to_string()),
                format!("overlaps \"{first}\", which is declared earlier and wins on shared days"),
            );
        }
    }
}

/// Suggest the day-month swap for keys like `2204` or `3112-0101`.
fn swapped_hint(raw: &str, error: &KeyError) -> Option<String> {
    if !matches!(error, KeyError::NoSuchDay(_)) {
        return None;
    }

    let fix = |part: &str| match part.parse::<DayOfYear>() {
        Ok(day) => Some(day),
        Err(_) => DayOfYear::parse_swapped(part),
    };

    let suggestion = match raw.split_once('-') {
        Some((start, end)) => format!("{}-{}", fix(start)?, fix(end)?),
        None => DayOfYear::parse_swapped(raw)?.to_string(),
    };
    Some(format!("keys are MMDD, did you mean \"{suggestion}\"?"))
}
