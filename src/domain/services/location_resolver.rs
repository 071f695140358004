//! Location Resolver
//!
//! Resolves a tokenized geographic reference against the override table and
//! the country directory, then runs the region-to-country promotion pass.
//! The resolver is a pure function of its input plus the two read-only
//! lookup structures; it holds no locks and performs no I/O, so calls are
//! safe to run concurrently.

use crate::domain::entities::ParsedLocation;
use crate::domain::ports::CountryDirectory;
use crate::domain::services::override_table::{fold_key, OverrideTable};
use crate::domain::services::tokenizer::tokenize;
use std::sync::Arc;

/// Directory hits on this code always carry the matching region name too:
/// the catalog records Hong Kong as both a country-level and a city-level
/// provenance.
const HONG_KONG_ALPHA2: &str = "HK";
const HONG_KONG_REGION: &str = "Hong Kong";

/// What one token resolved to. `None` from [`LocationResolver::lookup_token`]
/// means the token stays a region/city candidate.
struct Resolved {
    countries: Vec<String>,
    regions: Vec<String>,
}

/// Resolver for geographic reference strings.
///
/// Lookup order per token:
/// 1. Override table, case-insensitive exact match on the full token.
///    The table pre-empts the directory so curated corrections win over
///    known-bad directory answers.
/// 2. Directory lookup on the normalized token.
/// 3. Otherwise the token is kept, verbatim, as a region/city name.
pub struct LocationResolver {
    overrides: OverrideTable,
    directory: Arc<dyn CountryDirectory>,
}

impl LocationResolver {
    pub fn new(overrides: OverrideTable, directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            overrides,
            directory,
        }
    }

    /// Resolve a raw geographic reference into countries and regions.
    ///
    /// Absent input yields two empty sequences. Every token lands in
    /// exactly one of {country append, country+region append, region-only
    /// append, discard}; there are no error outcomes.
    pub fn resolve(&self, raw: Option<&str>) -> ParsedLocation {
        let mut location = ParsedLocation::default();

        for token in tokenize(raw) {
            match self.lookup_token(&token) {
                Some(resolved) => {
                    location.countries.extend(resolved.countries);
                    location.regions.extend(resolved.regions);
                }
                None => location.regions.push(token),
            }
        }

        self.promote_regions(&mut location);
        location
    }

    /// Two-stage lookup: override table, then directory.
    ///
    /// Returns `None` when neither stage recognizes the token. A matched
    /// override with an empty effect (the "british" no-op) returns an empty
    /// `Resolved`, which drops the token entirely.
    fn lookup_token(&self, token: &str) -> Option<Resolved> {
        if let Some(effect) = self.overrides.lookup(token) {
            return Some(Resolved {
                countries: effect.countries().iter().map(|c| c.to_string()).collect(),
                regions: effect.region().iter().map(|r| r.to_string()).collect(),
            });
        }

        let code = self.directory.lookup(&fold_key(token))?;
        let regions = if code == HONG_KONG_ALPHA2 {
            vec![HONG_KONG_REGION.to_string()]
        } else {
            Vec::new()
        };
        Some(Resolved {
            countries: vec![code],
            regions,
        })
    }

    /// Second-stage fix-up: when tokenization produced zero countries but
    /// some region candidates, retry each candidate as a country and promote
    /// the ones that resolve.
    ///
    /// The candidate list is snapshotted before the loop; the final region
    /// sequence is rebuilt so removal never skips adjacent entries. A
    /// candidate whose lookup yields no country code (unresolvable, or a
    /// region-only override) is retained verbatim in its original position.
    /// The pass runs at most once per resolution.
    fn promote_regions(&self, location: &mut ParsedLocation) {
        if !location.countries.is_empty() || location.regions.is_empty() {
            return;
        }

        let candidates = std::mem::take(&mut location.regions);
        for candidate in candidates {
            match self.lookup_token(&candidate) {
                Some(resolved) if !resolved.countries.is_empty() => {
                    location.countries.extend(resolved.countries);
                    location.regions.extend(resolved.regions);
                }
                _ => location.regions.push(candidate),
            }
        }
    }
}
