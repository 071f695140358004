//! Enrichment Service - Main application use case
//!
//! Orchestrates per-record enrichment: resolving geographic references,
//! classifying rights values, and aggregating per-country counts. This is
//! the primary interface for the inbound pipeline adapter.

use crate::domain::entities::{ParsedLocation, RightsSummary};
use crate::domain::ports::CountryDirectory;
use crate::domain::services::rights_mapper::classify_rights;
use crate::domain::services::{LocationResolver, OverrideTable};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Aggregate statistics for one pipeline run, surfaced via logs by the
/// batch tooling. The resolver core itself never reports errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Rows processed
    pub rows: usize,
    /// Rows whose reference resolved to zero countries
    pub rows_without_country: usize,
}

/// Application service for catalog enrichment.
///
/// Holds the read-only lookup structures built once in the composition
/// root; every per-record operation is stateless across calls and safe to
/// run from parallel workers.
pub struct EnrichmentService {
    resolver: LocationResolver,
    directory: Arc<dyn CountryDirectory>,
}

impl EnrichmentService {
    pub fn new(overrides: OverrideTable, directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            resolver: LocationResolver::new(overrides, directory.clone()),
            directory,
        }
    }

    /// Resolve one geographic reference cell into countries and regions.
    pub fn resolve_geo_reference(&self, raw: Option<&str>) -> ParsedLocation {
        self.resolver.resolve(raw)
    }

    /// Classify one rights cell.
    pub fn classify_rights(&self, raw: Option<&str>) -> RightsSummary {
        classify_rights(raw)
    }

    /// Count occurrences per country, keyed by alpha-3 code.
    ///
    /// Takes the alpha-2 codes of every enriched row (duplicates included:
    /// each occurrence is one attribution) and converts them through the
    /// directory. Codes the directory cannot map are logged and skipped.
    /// The map is built and returned locally, never shared or cached.
    pub fn country_counts<'a, I>(&self, alpha2_codes: I) -> BTreeMap<String, u64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = BTreeMap::new();
        for code in alpha2_codes {
            match self.directory.alpha3(code) {
                Some(alpha3) => *counts.entry(alpha3).or_insert(0) += 1,
                None => {
                    tracing::warn!("skipping unmappable country code {:?}", code);
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ===== Test Helpers =====

    struct StubDirectory {
        codes: HashMap<String, String>,
        alpha3: HashMap<String, String>,
    }

    impl StubDirectory {
        fn new() -> Self {
            let pairs = [("singapore", "SG", "SGP"), ("france", "FR", "FRA")];
            Self {
                codes: pairs
                    .iter()
                    .map(|(name, a2, _)| (name.to_string(), a2.to_string()))
                    .collect(),
                alpha3: pairs
                    .iter()
                    .map(|(_, a2, a3)| (a2.to_lowercase(), a3.to_string()))
                    .collect(),
            }
        }
    }

    impl CountryDirectory for StubDirectory {
        fn lookup(&self, name: &str) -> Option<String> {
            self.codes.get(name).cloned()
        }

        fn alpha3(&self, alpha2: &str) -> Option<String> {
            self.alpha3.get(&alpha2.to_lowercase()).cloned()
        }
    }

    fn service() -> EnrichmentService {
        EnrichmentService::new(OverrideTable::builtin(), Arc::new(StubDirectory::new()))
    }

    // ===== Geo Resolution Tests =====

    #[test]
    fn test_resolve_geo_reference() {
        let loc = service().resolve_geo_reference(Some("France and Singapore"));

        assert_eq!(loc.countries, vec!["FR", "SG"]);
        assert!(loc.regions.is_empty());
    }

    #[test]
    fn test_resolve_absent_reference() {
        let loc = service().resolve_geo_reference(None);

        assert!(loc.countries.is_empty());
        assert!(loc.regions.is_empty());
    }

    // ===== Rights Tests =====

    #[test]
    fn test_classify_rights_delegates_to_mapper() {
        use crate::domain::value_objects::RightsStatus;

        let summary = service().classify_rights(Some("CF"));

        assert_eq!(summary.status, RightsStatus::AllPermissions);
    }

    // ===== Aggregation Tests =====

    #[test]
    fn test_country_counts_by_alpha3() {
        let counts = service().country_counts(vec!["SG", "FR", "SG"]);

        assert_eq!(counts.get("SGP"), Some(&2));
        assert_eq!(counts.get("FRA"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_country_counts_skips_unknown_codes() {
        let counts = service().country_counts(vec!["SG", "XX"]);

        assert_eq!(counts.get("SGP"), Some(&1));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_country_counts_empty_input() {
        let counts = service().country_counts(Vec::new());

        assert!(counts.is_empty());
    }

    #[test]
    fn test_country_counts_map_is_fresh_per_call() {
        let service = service();

        let first = service.country_counts(vec!["SG"]);
        let second = service.country_counts(vec!["FR"]);

        assert_eq!(first.get("SGP"), Some(&1));
        assert!(first.get("FRA").is_none());
        assert_eq!(second.get("FRA"), Some(&1));
        assert!(second.get("SGP").is_none());
    }
}
