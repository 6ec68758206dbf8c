//! README rewriting.
//!
//! Two strategies:
//!
//! - `lines`: replace the header line and the quote line by number
//! - `substitute`: replace every occurrence of a placeholder image name
//!
//! Untouched lines are kept byte-for-byte, including their line endings.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ReadmeConfig, SpliceStrategy};

/// Template variable replaced by the image name in `readme.image_url`.
pub const IMAGE_VAR: &str = "{image}";

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("README has {lines} line(s) but line {needed} must be replaced")]
    TooShort { lines: usize, needed: usize },

    #[error("line numbers start at 1")]
    LineZero,
}

/// Result of rewriting README content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: String,
    pub changed: bool,
}

impl Splice {
    fn new(original: &str, content: String) -> Self {
        let changed = content != original;
        Self { content, changed }
    }
}

/// Markdown image line for the header.
pub fn header_markdown(template: &str, alt: &str, image: &str) -> String {
    format!("![{alt}]({})", template.replace(IMAGE_VAR, image))
}

/// Markdown blockquote line for the quote.
///
/// Line breaks are joined with spaces so the quote occupies exactly one
/// README line.
pub fn quote_markdown(quote: &str) -> String {
    let text = quote
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("> {text}")
}

/// Replace whole lines by 1-based number.
///
/// Each replaced line keeps its original terminator. Later edits to the
/// same line win.
pub fn splice_lines(content: &str, edits: &[(usize, &str)]) -> Result<Splice, ReadmeError> {
    let mut lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut owned: Vec<(usize, String)> = Vec::with_capacity(edits.len());

    for &(number, text) in edits {
        if number == 0 {
            return Err(ReadmeError::LineZero);
        }
        let Some(line) = lines.get(number - 1) else {
            return Err(ReadmeError::TooShort {
                lines: lines.len(),
                needed: number,
            });
        };
        owned.push((number - 1, format!("{text}{}", line_ending(line))));
    }

    for (index, line) in &owned {
        lines[*index] = line.as_str();
    }

    Ok(Splice::new(content, lines.concat()))
}

/// Replace every occurrence of `placeholder` with `image`.
pub fn substitute(content: &str, placeholder: &str, image: &str) -> Splice {
    if placeholder.is_empty() {
        return Splice::new(content, content.to_string());
    }
    Splice::new(content, content.replace(placeholder, image))
}

/// Rewrite README content according to the configured strategy.
///
/// `quote` is ignored by the substitute strategy.
pub fn rewrite(
    content: &str,
    config: &ReadmeConfig,
    image: &str,
    quote: &str,
) -> Result<Splice, ReadmeError> {
    match config.strategy {
        SpliceStrategy::Lines => {
            let header = header_markdown(&config.image_url, &config.header_alt, image);
            let quote = quote_markdown(quote);
            splice_lines(
                content,
                &[
                    (config.header_line, header.as_str()),
                    (config.quote_line, quote.as_str()),
                ],
            )
        }
        SpliceStrategy::Substitute => Ok(substitute(content, &config.placeholder, image)),
    }
}

pub fn read(path: &Path) -> Result<String, ReadmeError> {
    fs::read_to_string(path).map_err(|err| ReadmeError::Read(path.to_path_buf(), err))
}

pub fn write(path: &Path, content: &str) -> Result<(), ReadmeError> {
    fs::write(path, content).map_err(|err| ReadmeError::Write(path.to_path_buf(), err))
}

/// Number of lines as counted by the splicer.
pub fn line_count(content: &str) -> usize {
    content.split_inclusive('\n').count()
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const README: &str = "![HEADER](dependencies/header.png?raw=true)\n\
                          \n\
                          # Hi there\n\
                          \n\
                          ## Quote of the day\n\
                          > old quote\n\
                          \n\
                          footer\n";

    fn lines_config() -> ReadmeConfig {
        ReadmeConfig {
            image_url: "dependencies/{image}?raw=true".to_string(),
            ..ReadmeConfig::default()
        }
    }

    #[test]
    fn test_header_and_quote_markdown() {
        assert_eq!(
            header_markdown("https://x.dev/{image}?raw=true", "HEADER", "xmas.png"),
            "![HEADER](https://x.dev/xmas.png?raw=true)"
        );
        assert_eq!(quote_markdown("Ship it."), "> Ship it.");
    }

    #[test]
    fn test_multiline_quote_stays_on_one_line() {
        assert_eq!(quote_markdown("Stay hungry.\r\n\nStay foolish.\n"), "> Stay hungry. Stay foolish.");

        let splice = rewrite(README, &lines_config(), "header.png", "one\ntwo").unwrap();
        assert_eq!(line_count(&splice.content), line_count(README));
        assert_eq!(splice.content.lines().nth(5), Some("> one two"));

        // A second run replaces the same line and leaves nothing behind
        let again = rewrite(&splice.content, &lines_config(), "header.png", "three").unwrap();
        assert_eq!(line_count(&again.content), line_count(README));
        assert_eq!(again.content.lines().nth(5), Some("> three"));
    }

    #[test]
    fn test_rewrite_lines() {
        let splice = rewrite(README, &lines_config(), "halloween.png", "Boo!").unwrap();
        assert!(splice.changed);

        let lines: Vec<_> = splice.content.lines().collect();
        assert_eq!(lines[0], "![HEADER](dependencies/halloween.png?raw=true)");
        assert_eq!(lines[5], "> Boo!");
        assert_eq!(lines[2], "# Hi there");
        assert_eq!(lines[7], "footer");
        assert!(splice.content.ends_with("footer\n"));
    }

    #[test]
    fn test_rewrite_lines_unchanged() {
        let splice = rewrite(README, &lines_config(), "header.png", "old quote").unwrap();
        assert!(!splice.changed);
        assert_eq!(splice.content, README);
    }

    #[test]
    fn test_splice_keeps_crlf() {
        let content = "a\r\nb\r\nc";
        let splice = splice_lines(content, &[(2, "B"), (3, "C")]).unwrap();
        assert_eq!(splice.content, "a\r\nB\r\nC");
    }

    #[test]
    fn test_splice_too_short() {
        let err = splice_lines("one\ntwo\n", &[(1, "x"), (6, "y")]).unwrap_err();
        assert!(matches!(err, ReadmeError::TooShort { lines: 2, needed: 6 }));

        let err = splice_lines("", &[(1, "x")]).unwrap_err();
        assert!(matches!(err, ReadmeError::TooShort { lines: 0, needed: 1 }));
    }

    #[test]
    fn test_splice_line_zero() {
        assert!(matches!(
            splice_lines("one\n", &[(0, "x")]),
            Err(ReadmeError::LineZero)
        ));
    }

    #[test]
    fn test_substitute() {
        let config = ReadmeConfig {
            strategy: SpliceStrategy::Substitute,
            ..ReadmeConfig::default()
        };
        let content = "<img src=\"dependencies/header.png\">\nheader.png again\n";
        let splice = rewrite(content, &config, "christmas.png", "ignored").unwrap();
        assert!(splice.changed);
        assert_eq!(
            splice.content,
            "<img src=\"dependencies/christmas.png\">\nchristmas.png again\n"
        );
    }

    #[test]
    fn test_substitute_empty_placeholder() {
        let splice = substitute("abc", "", "x.png");
        assert!(!splice.changed);
        assert_eq!(splice.content, "abc");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb\n"), 2);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn test_read_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");

        assert!(matches!(read(&path), Err(ReadmeError::Read(..))));

        write(&path, README).unwrap();
        assert_eq!(read(&path).unwrap(), README);
    }
}
