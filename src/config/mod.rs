//! Profile configuration management for `readme.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── clock      # [clock]
//! │   ├── quotes     # [quotes]
//! │   ├── readme     # [readme]
//! │   └── seasonal   # [seasonal] and [seasonal.images]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProfileConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                   |
//! |----------------------|-------------------------------------------|
//! | `[readme]`           | README path, rewrite strategy, lines, URL |
//! | `[seasonal]`         | Default header image                      |
//! | `[seasonal.images]`  | Calendar keys to header images (ordered)  |
//! | `[quotes]`           | Quotes JSON path and fallback quote       |
//! | `[clock]`            | UTC offset used to compute "today"        |
//!
//! The config file is optional: without one, built-in defaults apply and
//! the working directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{ClockConfig, QuotesConfig, ReadmeConfig, SeasonalConfig, SpliceStrategy};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::{normalize_path, resolve_under},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "readme.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing readme.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub readme: ReadmeConfig,

    pub seasonal: SeasonalConfig,

    pub quotes: QuotesConfig,

    pub clock: ClockConfig,
}

impl ProfileConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. An explicit `--config`
    /// must exist; the default name may be absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if the process ran in `cwd`.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

        let (mut config, root) = match find_config_file(&name, cwd) {
            Some(path) => {
                let path = normalize_path(&path);
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                (config, root)
            }
            None if cli.config.is_some() => {
                let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found");
                return Err(ConfigError::Io(name, err).into());
            }
            None => {
                debug!("config"; "no {} found, using built-in defaults", DEFAULT_CONFIG_NAME);
                (Self::default(), normalize_path(cwd))
            }
        };

        config.finalize(&root, cli);
        config.warn_rejected_keys();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Mapping keys that will never match are worth a warning on every run;
    /// `check` reports them in detail.
    fn warn_rejected_keys(&self) {
        for rejected in self.seasonal.images.rejected() {
            log!("warning"; "ignoring seasonal image key for {}: {}", rejected.asset, rejected.error);
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.set_root(root);

        if let Commands::Update { args } = &cli.command
            && let Some(readme) = &args.readme
        {
            self.readme.path = readme.clone();
        }

        self.readme.path = resolve_under(&self.readme.path, root);
        self.quotes.path = resolve_under(&self.quotes.path, root);
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.readme.validate(&mut diag);
        self.seasonal.validate(&mut diag);
        self.quotes.validate(&mut diag);
        self.clock.validate(&mut diag);
        diag
    }

    /// Validate before acting on the config: print warnings, fail on errors.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProfileConfig {
    let (parsed, ignored) = ProfileConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
