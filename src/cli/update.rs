//! `update` command: rewrite the README for the selected day.

use anyhow::{Context, Result};

use crate::cli::UpdateArgs;
use crate::cli::common::{Selection, select};
use crate::config::ProfileConfig;
use crate::logger::status_success;
use crate::{debug, log, readme};

/// Outcome of an update, for reporting and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub selection: Selection,
    /// The README content differs from what was on disk.
    pub changed: bool,
    /// The README was written.
    pub written: bool,
}

/// Rewrite the configured README.
///
/// An invalid config is rejected before the README is read.
pub fn update_readme(config: &ProfileConfig, args: &UpdateArgs) -> Result<UpdateReport> {
    config.validate()?;

    let path = &config.readme.path;
    let display = config.root_relative(path);

    let selection = select(config, &args.day);
    debug!("update"; "image {} for {}", selection.image, selection.date);

    let content = readme::read(path)?;
    let splice = readme::rewrite(
        &content,
        &config.readme,
        &selection.image,
        selection.quote.as_deref().unwrap_or_default(),
    )
    .with_context(|| format!("failed to update {}", display.display()))?;

    let written = if args.dry_run {
        log!("update"; "dry run, {} left untouched", display.display());
        false
    } else if splice.changed {
        readme::write(path, &splice.content)?;
        true
    } else {
        log!("update"; "{} already up to date", display.display());
        false
    };

    Ok(UpdateReport {
        selection,
        changed: splice.changed,
        written,
    })
}

/// Run `update` and print the outcome lines.
pub fn run_update(config: &ProfileConfig, args: &UpdateArgs) -> Result<()> {
    let report = update_readme(config, args)?;
    debug!("update"; "changed: {}, written: {}", report.changed, report.written);
    let verb = if args.dry_run { "Would update" } else { "Updated" };

    status_success(&format!(
        "{verb} README with image: {}",
        report.selection.image
    ));
    if let Some(quote) = &report.selection.quote {
        status_success(&format!("{verb} quote to: {quote}"));
    }
    Ok(())
}
