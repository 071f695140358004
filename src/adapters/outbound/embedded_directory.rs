//! Embedded Country Directory
//!
//! Implements CountryDirectory over an ISO 3166-1 reference table.

use crate::domain::ports::CountryDirectory;
use crate::domain::services::override_table::fold_key;
use std::collections::HashMap;
use std::io::Read;

/// Embedded ISO 3166-1 reference table (compiled into binary).
const EMBEDDED_COUNTRIES: &str = include_str!("../../../data/countries.csv");

/// Directory adapter backed by a name/alias table.
///
/// Each row of the backing table carries an alpha-2 code, an alpha-3 code,
/// the common English name and optional pipe-separated aliases. Lookup keys
/// are folded once at load time; both codes are also valid lookup names, so
/// "SG", "SGP" and "Singapore" all resolve to SG.
pub struct EmbeddedCountryDirectory {
    codes_by_name: HashMap<String, String>,
    alpha3_by_alpha2: HashMap<String, String>,
}

impl EmbeddedCountryDirectory {
    /// Load the embedded reference table from the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_reader(EMBEDDED_COUNTRIES.as_bytes())
    }

    /// Load a reference table from a CSV file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a reference table from any reader.
    ///
    /// Expected columns: `alpha2,alpha3,name,aliases`. On duplicate keys the
    /// first row wins, matching the ordered-rule convention used elsewhere.
    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut codes_by_name = HashMap::new();
        let mut alpha3_by_alpha2 = HashMap::new();

        for result in csv_reader.records() {
            let record = result?;
            let alpha2 = record.get(0).unwrap_or_default().trim();
            let alpha3 = record.get(1).unwrap_or_default().trim();
            let name = record.get(2).unwrap_or_default().trim();
            let aliases = record.get(3).unwrap_or_default();

            if alpha2.is_empty() || name.is_empty() {
                anyhow::bail!("reference table row missing code or name: {:?}", record);
            }

            let code = alpha2.to_uppercase();
            alpha3_by_alpha2
                .entry(fold_key(alpha2))
                .or_insert_with(|| alpha3.to_uppercase());

            let mut keys = vec![fold_key(name), fold_key(alpha2), fold_key(alpha3)];
            keys.extend(
                aliases
                    .split('|')
                    .map(fold_key)
                    .filter(|alias| !alias.is_empty()),
            );
            for key in keys.into_iter().filter(|key| !key.is_empty()) {
                codes_by_name.entry(key).or_insert_with(|| code.clone());
            }
        }

        Ok(Self {
            codes_by_name,
            alpha3_by_alpha2,
        })
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.codes_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes_by_name.is_empty()
    }
}

impl CountryDirectory for EmbeddedCountryDirectory {
    fn lookup(&self, name: &str) -> Option<String> {
        self.codes_by_name.get(&fold_key(name)).cloned()
    }

    fn alpha3(&self, alpha2: &str) -> Option<String> {
        self.alpha3_by_alpha2.get(&fold_key(alpha2)).cloned()
    }
}
