//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_under` - config-relative paths with `~` expansion

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a config path against the project root.
///
/// `~` is expanded to the home directory; absolute results are kept,
/// relative ones are joined to `root`.
///
/// # Example
/// ```ignore
/// resolve_under(Path::new("README.md"), root)      // root/README.md
/// resolve_under(Path::new("~/quotes.json"), root)  // $HOME/quotes.json
/// ```
pub fn resolve_under(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    };
    normalize_path(&full)
}
