//! Ordered calendar key to asset mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::{CalendarKey, DayOfYear, KeyError};

/// A mapping key that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedKey {
    pub raw: String,
    pub asset: String,
    pub error: KeyError,
}

/// Asset mapping in declaration order.
///
/// Keys that do not parse are kept aside in `rejected` instead of failing
/// the whole load; they never match during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMapping {
    entries: Vec<(CalendarKey, String)>,
    rejected: Vec<RejectedKey>,
}

impl AssetMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(key, asset)` pairs, keeping their order.
    pub fn from_pairs<K, A>(pairs: impl IntoIterator<Item = (K, A)>) -> Self
    where
        K: AsRef<str>,
        A: Into<String>,
    {
        let mut mapping = Self::new();
        for (key, asset) in pairs {
            mapping.push_raw(key.as_ref(), asset.into());
        }
        mapping
    }

    /// Parse and append one entry.
    pub fn push_raw(&mut self, raw: &str, asset: String) {
        match raw.parse::<CalendarKey>() {
            Ok(key) => self.entries.push((key, asset)),
            Err(error) => self.rejected.push(RejectedKey {
                raw: raw.to_string(),
                asset,
                error,
            }),
        }
    }

    pub fn entries(&self) -> &[(CalendarKey, String)] {
        &self.entries
    }

    pub fn rejected(&self) -> &[RejectedKey] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset of an exact key equal to `today`.
    pub fn exact(&self, today: DayOfYear) -> Option<&str> {
        self.entries.iter().find_map(|(key, asset)| match key {
            CalendarKey::Exact(day) if *day == today => Some(asset.as_str()),
            _ => None,
        })
    }

    /// Asset of the first range key containing `today`.
    pub fn first_range(&self, today: DayOfYear) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.range_contains(today))
            .map(|(_, asset)| asset.as_str())
    }

    /// Pairs of range keys that share days, in declaration order.
    pub fn overlapping_ranges(&self) -> Vec<(CalendarKey, CalendarKey)> {
        let ranges: Vec<_> = self
            .entries
            .iter()
            .map(|(key, _)| *key)
            .filter(CalendarKey::is_range)
            .collect();

        let mut pairs = Vec::new();
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}

// ============================================================================
// serde
// ============================================================================

impl<'de> Deserialize<'de> for AssetMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = AssetMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of \"MMDD\" or \"MMDD-MMDD\" keys to asset names")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut mapping = AssetMapping::new();
                while let Some((key, asset)) = access.next_entry::<String, String>()? {
                    mapping.push_raw(&key, asset);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
