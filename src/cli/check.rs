//! `check` command: validate config, README and quotes file together.

use anyhow::Result;

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath, ProfileConfig, SpliceStrategy};
use crate::logger::status_success;
use crate::quote::QuoteBook;
use crate::readme::ReadmeError;
use crate::{log, readme};

/// Collect every diagnostic: config sections plus the files they point to.
pub fn collect_diagnostics(config: &ProfileConfig) -> ConfigDiagnostics {
    let mut diag = config.diagnostics();
    check_readme_file(config, &mut diag);
    check_quotes_file(config, &mut diag);
    diag
}

pub fn run_check(config: &ProfileConfig) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("check"; "using {}", path.display()),
        None => log!("check"; "no config file, using built-in defaults"),
    }

    let diag = collect_diagnostics(config);
    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    status_success(&format!(
        "config is valid ({} seasonal image key(s))",
        config.seasonal.images.len()
    ));
    Ok(())
}

fn check_readme_file(config: &ProfileConfig, diag: &mut ConfigDiagnostics) {
    let field = FieldPath::new("readme.path");
    let display = config.root_relative(&config.readme.path);

    let content = match readme::read(&config.readme.path) {
        Ok(content) => content,
        Err(ReadmeError::Read(_, cause)) => {
            diag.error(field, format!("cannot read {}: {cause}", display.display()));
            return;
        }
        Err(err) => {
            diag.error(field, err.to_string());
            return;
        }
    };

    match config.readme.strategy {
        SpliceStrategy::Lines => {
            let lines = readme::line_count(&content);
            let needed = config.readme.last_line();
            if lines < needed {
                diag.error(
                    field,
                    format!(
                        "{} has {lines} line(s), line {needed} must exist",
                        display.display()
                    ),
                );
            }
        }
        SpliceStrategy::Substitute => {
            if !content.contains(&config.readme.placeholder) {
                diag.warn(
                    FieldPath::new("readme.placeholder"),
                    format!(
                        "`{}` does not occur in {}, nothing will change",
                        config.readme.placeholder,
                        display.display()
                    ),
                );
            }
        }
    }
}

fn check_quotes_file(config: &ProfileConfig, diag: &mut ConfigDiagnostics) {
    if config.readme.strategy == SpliceStrategy::Substitute {
        return;
    }

    let field = FieldPath::new("quotes.path");
    let display = config.root_relative(&config.quotes.path);

    if !config.quotes.path.exists() {
        diag.warn(
            field,
            format!(
                "{} not found, the fallback quote will be used",
                display.display()
            ),
        );
        return;
    }

    let book = match QuoteBook::load(&config.quotes.path) {
        Ok(book) => book,
        Err(err) => {
            diag.error(field, format!("{:#}", anyhow::Error::new(err)));
            return;
        }
    };

    for key in book.invalid_special_keys() {
        diag.error_with_hint(
            FieldPath::key("special_days", key),
            format!("special day key in {} is not a date", display.display()),
            "special day keys are MM-DD, e.g. \"10-31\"",
        );
    }

    if book.random_quotes.is_empty() {
        diag.warn(
            field.clone(),
            "random_quotes is empty, ordinary days get the fallback quote",
        );
    }

    let multiline = book.multiline_quotes();
    if multiline > 0 {
        diag.warn(
            field,
            format!("{multiline} quote(s) span several lines and are joined into one line"),
        );
    }
}
