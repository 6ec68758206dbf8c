//! `[readme]` section configuration.
//!
//! Describes the file to rewrite and how.
//!
//! # Example
//!
//! ```toml
//! [readme]
//! path = "README.md"
//! strategy = "lines"          # "lines" or "substitute"
//! header_line = 1             # 1-based line holding the header image
//! quote_line = 6              # 1-based line holding the quote
//! image_url = "https://github.com/me/me/blob/main/dependencies/{image}?raw=true"
//! header_alt = "HEADER"
//! placeholder = "header.png"  # substitute strategy only
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::readme::IMAGE_VAR;

/// How the README is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceStrategy {
    /// Replace the header and quote lines by number.
    #[default]
    Lines,
    /// Replace every occurrence of `placeholder` with the image name.
    Substitute,
}

/// Target README settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    /// README path, relative to the project root.
    pub path: PathBuf,

    pub strategy: SpliceStrategy,

    /// 1-based line replaced by the header image.
    pub header_line: usize,

    /// 1-based line replaced by the quote.
    pub quote_line: usize,

    /// Image URL template; `{image}` is replaced by the asset name.
    pub image_url: String,

    /// Alt text of the header image.
    pub header_alt: String,

    /// Image name replaced by the substitute strategy.
    pub placeholder: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            strategy: SpliceStrategy::Lines,
            header_line: 1,
            quote_line: 6,
            image_url: "dependencies/{image}?raw=true".to_string(),
            header_alt: "HEADER".to_string(),
            placeholder: "header.png".to_string(),
        }
    }
}

impl ReadmeConfig {
    /// Highest line number the lines strategy touches.
    pub fn last_line(&self) -> usize {
        self.header_line.max(self.quote_line)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.strategy {
            SpliceStrategy::Lines => self.validate_lines(diag),
            SpliceStrategy::Substitute => {
                if self.placeholder.is_empty() {
                    diag.error(
                        FieldPath::new("readme.placeholder"),
                        "must not be empty with the substitute strategy",
                    );
                }
            }
        }
    }

    fn validate_lines(&self, diag: &mut ConfigDiagnostics) {
        if self.header_line == 0 {
            diag.error(FieldPath::new("readme.header_line"), "line numbers start at 1");
        }
        if self.quote_line == 0 {
            diag.error(FieldPath::new("readme.quote_line"), "line numbers start at 1");
        }
        if self.header_line != 0 && self.header_line == self.quote_line {
            diag.error(
                FieldPath::new("readme.quote_line"),
                format!("same line as `readme.header_line` ({})", self.header_line),
            );
        }

        if !self.image_url.contains(IMAGE_VAR) {
            diag.error_with_hint(
                FieldPath::new("readme.image_url"),
                format!("missing the `{IMAGE_VAR}` variable"),
                format!("e.g. \"dependencies/{IMAGE_VAR}?raw=true\""),
            );
            return;
        }

        let sample = self.image_url.replace(IMAGE_VAR, "header.png");
        match url::Url::parse(&sample) {
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(err) => diag.error(
                FieldPath::new("readme.image_url"),
                format!("not a valid URL: {err}"),
            ),
        }
    }
}
