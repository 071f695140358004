//! Override Table
//!
//! Curated exception rules that pre-empt the country directory for tokens
//! the directory resolves incorrectly or not at all. The table is an ordered
//! list of case-insensitive exact-match rules, defined once at startup and
//! read-only afterwards. New rules are added as data, not control flow:
//! the builtin set can be replaced by a JSON file at startup.

use serde::{Deserialize, Serialize};
use std::io::Read;

/// Normalize a token for table/directory matching: trim and lowercase.
pub fn fold_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// What a matched override rule appends to the parsed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideEffect {
    /// Append one country code
    Country(String),
    /// Append one country code and one region name
    CountryWithRegion { country: String, region: String },
    /// Append two country codes
    Countries(String, String),
    /// Append one region name and no country
    Region(String),
    /// Append nothing; the token is discarded
    Discard,
}

impl OverrideEffect {
    /// Country codes this effect appends, in order.
    pub fn countries(&self) -> Vec<&str> {
        match self {
            Self::Country(code) => vec![code],
            Self::CountryWithRegion { country, .. } => vec![country],
            Self::Countries(first, second) => vec![first, second],
            Self::Region(_) | Self::Discard => Vec::new(),
        }
    }

    /// Region name this effect appends, if any.
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::CountryWithRegion { region, .. } => Some(region),
            Self::Region(region) => Some(region),
            _ => None,
        }
    }
}

/// One `(lowercase key, effect)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub key: String,
    pub effect: OverrideEffect,
}

impl OverrideRule {
    pub fn new(key: impl Into<String>, effect: OverrideEffect) -> Self {
        Self {
            key: fold_key(&key.into()),
            effect,
        }
    }
}

/// Ordered, case-insensitive exact-match exception table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    rules: Vec<OverrideRule>,
}

impl OverrideTable {
    /// Build a table from explicit rules. Keys are normalized on entry.
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| OverrideRule::new(r.key, r.effect))
            .collect();
        Self { rules }
    }

    /// The hand-curated rules observed to be wrong or missing in the
    /// directory (historical names, abbreviations, compound references).
    pub fn builtin() -> Self {
        use OverrideEffect::*;

        let country = |key: &str, code: &str| OverrideRule::new(key, Country(code.to_string()));
        let country_region = |key: &str, code: &str, region: &str| {
            OverrideRule::new(
                key,
                CountryWithRegion {
                    country: code.to_string(),
                    region: region.to_string(),
                },
            )
        };
        let two_countries = |key: &str, first: &str, second: &str| {
            OverrideRule::new(key, Countries(first.to_string(), second.to_string()))
        };

        Self::new(vec![
            country("laos", "LA"),
            country("usa", "US"),
            country("taiwan", "TW"),
            country_region("u.k., england", "GB", "England"),
            country("u.k.", "GB"),
            country("u.k., british", "GB"),
            country("great britain", "GB"),
            OverrideRule::new("england", Region("England".to_string())),
            country_region("malacca", "MY", "Malacca"),
            country_region("penang", "MY", "Penang"),
            country("north vietnam", "VN"),
            two_countries("singapore/uk", "SG", "GB"),
            two_countries("singapore, great britain", "SG", "GB"),
            two_countries("singapore, malaya", "SG", "MY"),
            OverrideRule::new("british", Discard),
            country("malaya", "MY"),
            country("brunei", "BN"),
            country("burma", "MM"),
        ])
    }

    /// Load a rule list from JSON (an ordered array of rules).
    pub fn from_json_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let rules: Vec<OverrideRule> = serde_json::from_reader(reader)?;
        Ok(Self::new(rules))
    }

    /// Case-insensitive exact match against the full token text.
    ///
    /// Rules are tried in order; the first key equal to the folded token
    /// wins. This is deliberately not the directory's lookup - overrides
    /// match literally so curated answers stay predictable.
    pub fn lookup(&self, token: &str) -> Option<&OverrideEffect> {
        let key = fold_key(token);
        self.rules
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| &rule.effect)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
