//! `[quotes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [quotes]
//! path = "scripts/data/quotes.json"
//! fallback = "Welcome to my profile!"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Quote of the day settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    /// Quotes JSON file, relative to the project root.
    pub path: PathBuf,

    /// Used when the quotes file is missing, broken, or has nothing for today.
    pub fallback: String,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("scripts/data/quotes.json"),
            fallback: "Welcome to my profile!".to_string(),
        }
    }
}

impl QuotesConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.fallback.trim().is_empty() {
            diag.error(FieldPath::new("quotes.fallback"), "must not be empty");
        }
    }
}
