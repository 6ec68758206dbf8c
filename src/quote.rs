//! Quote of the day.
//!
//! Quotes live in a JSON file next to the profile:
//!
//! ```json
//! {
//!   "special_days": { "10-31": "Boo!" },
//!   "random_quotes": ["Stay hungry.", "Ship it."]
//! }
//! ```
//!
//! A special-day entry for today wins over the random pool.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use thiserror::Error;

use crate::{debug, log, season::DayOfYear};

/// Quote book loading errors
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid quotes file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// Special-day quotes plus a pool for ordinary days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuoteBook {
    /// `MM-DD` to quote.
    pub special_days: HashMap<String, String>,
    pub random_quotes: Vec<String>,
}

impl QuoteBook {
    pub fn load(path: &Path) -> Result<Self, QuoteError> {
        let content =
            fs::read_to_string(path).map_err(|err| QuoteError::Io(path.to_path_buf(), err))?;
        serde_json::from_str(&content).map_err(|err| QuoteError::Json(path.to_path_buf(), err))
    }

    /// Today's quote, or `None` when there is no special entry and the
    /// pool is empty.
    pub fn pick<R: Rng + ?Sized>(&self, today: DayOfYear, rng: &mut R) -> Option<&str> {
        if let Some(quote) = self.special_days.get(&today.dashed()) {
            return Some(quote.as_str());
        }
        self.random_quotes.choose(rng).map(String::as_str)
    }

    /// Number of quotes containing a line break.
    pub fn multiline_quotes(&self) -> usize {
        self.special_days
            .values()
            .chain(&self.random_quotes)
            .filter(|quote| quote.contains(['\n', '\r']))
            .count()
    }

    /// Special-day keys that are not `MM-DD` dates, sorted.
    pub fn invalid_special_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self
            .special_days
            .keys()
            .filter(|key| DayOfYear::parse_dashed(key).is_none())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

/// Load the quote book and pick today's quote, falling back on any failure.
pub fn daily_quote<R: Rng + ?Sized>(
    path: &Path,
    today: DayOfYear,
    fallback: &str,
    rng: &mut R,
) -> String {
    let book = match QuoteBook::load(path) {
        Ok(book) => book,
        Err(err) => {
            log!("quote"; "{:#}", anyhow::Error::new(err));
            return fallback.to_string();
        }
    };

    match book.pick(today, rng) {
        Some(quote) => quote.to_string(),
        None => {
            debug!("quote"; "no quote for {} and the pool is empty", today.dashed());
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    const FALLBACK: &str = "Welcome to my profile!";

    fn day(s: &str) -> DayOfYear {
        s.parse().unwrap()
    }

    fn book(json: &str) -> QuoteBook {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_special_day_wins() {
        let book = book(r#"{"special_days": {"10-31": "Boo!"}, "random_quotes": ["a", "b"]}"#);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(book.pick(day("1031"), &mut rng), Some("Boo!"));
        }
    }

    #[test]
    fn test_special_day_without_pool() {
        let book = book(r#"{"special_days": {"01-01": "Happy new year"}}"#);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(book.pick(day("0101"), &mut rng), Some("Happy new year"));
    }

    #[test]
    fn test_random_pick_from_pool() {
        let book = book(r#"{"special_days": {}, "random_quotes": ["a", "b", "c"]}"#);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let quote = book.pick(day("0615"), &mut rng).unwrap();
            assert!(["a", "b", "c"].contains(&quote));
        }
    }

    #[test]
    fn test_seeded_pick_is_deterministic() {
        let book = book(r#"{"random_quotes": ["a", "b", "c", "d", "e"]}"#);
        let first = book.pick(day("0615"), &mut StdRng::seed_from_u64(3));
        let second = book.pick(day("0615"), &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_pool_is_none() {
        let book = book("{}");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(book.pick(day("0615"), &mut rng), None);
    }

    #[test]
    fn test_invalid_special_keys() {
        let book = book(r#"{"special_days": {"10-31": "x", "1031": "y", "31-10": "z"}}"#);
        assert_eq!(book.invalid_special_keys(), ["1031", "31-10"]);
    }

    #[test]
    fn test_multiline_quotes() {
        let book = book(r#"{"special_days": {"10-31": "a\r\nb"}, "random_quotes": ["c", "d\ne"]}"#);
        assert_eq!(book.multiline_quotes(), 2);
    }

    #[test]
    fn test_daily_quote_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(
            &path,
            r#"{"special_days": {"09-08": "Birthday!"}, "random_quotes": ["only"]}"#,
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(daily_quote(&path, day("0908"), FALLBACK, &mut rng), "Birthday!");
        assert_eq!(daily_quote(&path, day("0909"), FALLBACK, &mut rng), "only");
    }

    #[test]
    fn test_daily_quote_fallbacks() {
        let dir = TempDir::new().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        // Missing file
        let missing = dir.path().join("missing.json");
        assert_eq!(daily_quote(&missing, day("0101"), FALLBACK, &mut rng), FALLBACK);

        // Malformed JSON
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(daily_quote(&broken, day("0101"), FALLBACK, &mut rng), FALLBACK);

        // Empty pool
        let empty = dir.path().join("empty.json");
        fs::write(&empty, r#"{"special_days": {}, "random_quotes": []}"#).unwrap();
        assert_eq!(daily_quote(&empty, day("0101"), FALLBACK, &mut rng), FALLBACK);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(QuoteBook::load(&missing), Err(QuoteError::Io(..))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[1, 2]").unwrap();
        let err = QuoteBook::load(&broken).unwrap_err();
        assert!(matches!(err, QuoteError::Json(..)));
        assert!(err.to_string().contains("broken.json"));
    }
}
