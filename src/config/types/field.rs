//! Config field path.

use std::borrow::Cow;
use std::fmt;

use owo_colors::Style;

use crate::logger::paint;

/// Dotted path of a config field, used to point diagnostics at the
/// offending entry.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("readme.header_line"), "must be at least 1");
/// diag.error(FieldPath::key("seasonal.images", "2204"), "not a day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a quoted key inside a table, e.g. `seasonal.images."2204"`.
    pub fn key(table: &str, key: &str) -> Self {
        Self(Cow::Owned(format!("{table}.\"{key}\"")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        f.write_str(&paint(&quoted, Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_key() {
        assert_eq!(FieldPath::new("readme.path").as_str(), "readme.path");
        assert_eq!(
            FieldPath::key("seasonal.images", "2204").as_str(),
            "seasonal.images.\"2204\""
        );
    }

    #[test]
    fn test_field_path_display_without_color() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("clock.utc_offset_minutes").to_string(), "`clock.utc_offset_minutes`");
    }
}
