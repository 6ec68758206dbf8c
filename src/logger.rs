//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `status_success` / `status_error` for the final one-line outcome
//!
//! # Example
//!
//! ```ignore
//! log!("update"; "README unchanged");
//! debug!("season"; "today is {}", today);
//! status_success("Updated README with image: halloween.png");
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "update" => Style::new().bright_blue().bold(),
        "check" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    paint(&prefix, style)
}

/// Style text for stdout, honoring `--color` and TTY detection.
pub fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

// ============================================================================
// Status lines
// ============================================================================

/// Outcome line with a success marker (✓, green).
pub fn status_success(message: &str) {
    println!("{} {}", paint("✓", Style::new().green()), message);
}

/// Outcome line with a failure marker (✗, red) and optional detail.
pub fn status_error(summary: &str, detail: &str) {
    println!("{}", format_error(summary, detail));
}

fn format_error(summary: &str, detail: &str) -> String {
    let marker = paint("✗", Style::new().red());
    if detail.is_empty() {
        format!("{marker} {summary}")
    } else {
        format!("{marker} {summary}\n{detail}")
    }
}

// ============================================================================
// Tests
// ============================================================================
