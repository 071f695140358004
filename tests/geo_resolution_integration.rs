//! Integration tests for geographic reference resolution
//!
//! Runs the full resolver (builtin override table + embedded country
//! directory) against the acceptance scenarios observed in the catalog.

use catalog_enrich::domain::services::{OverrideEffect, OverrideRule};
use catalog_enrich::{
    EmbeddedCountryDirectory, EnrichmentService, LocationResolver, OverrideTable, ParsedLocation,
};
use std::sync::Arc;

fn resolver() -> LocationResolver {
    let directory = Arc::new(EmbeddedCountryDirectory::embedded().unwrap());
    LocationResolver::new(OverrideTable::builtin(), directory)
}

fn parsed(countries: &[&str], regions: &[&str]) -> ParsedLocation {
    ParsedLocation::new(
        countries.iter().map(|c| c.to_string()).collect(),
        regions.iter().map(|r| r.to_string()).collect(),
    )
}

/// The acceptance table for catalog provenance strings.
#[test]
fn test_acceptance_scenarios() {
    let resolver = resolver();

    let cases = vec![
        ("Singapore", parsed(&["SG"], &[])),
        ("Bali, Indonesia", parsed(&["ID"], &["Bali"])),
        ("France and Singapore", parsed(&["FR", "SG"], &[])),
        ("U.K., England", parsed(&["GB"], &["England"])),
        ("Singapore and Penang", parsed(&["SG", "MY"], &["Penang"])),
        ("U.K., British", parsed(&["GB"], &[])),
        ("Singapore, Great Britain", parsed(&["SG", "GB"], &[])),
        ("Singapore, Malaya", parsed(&["SG", "MY"], &[])),
        ("Malacca", parsed(&["MY"], &["Malacca"])),
        ("Penang", parsed(&["MY"], &["Penang"])),
        ("North Vietnam", parsed(&["VN"], &[])),
        ("Hong Kong", parsed(&["HK"], &["Hong Kong"])),
        ("Laos", parsed(&["LA"], &[])),
        ("USA", parsed(&["US"], &[])),
        ("Taiwan", parsed(&["TW"], &[])),
    ];

    for (input, expected) in cases {
        assert_eq!(
            resolver.resolve(Some(input)),
            expected,
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_absent_reference_yields_empty_location() {
    assert_eq!(resolver().resolve(None), ParsedLocation::default());
}

#[test]
fn test_historical_names_map_to_present_day_codes() {
    let resolver = resolver();

    assert_eq!(resolver.resolve(Some("Burma")), parsed(&["MM"], &[]));
    assert_eq!(resolver.resolve(Some("Malaya")), parsed(&["MY"], &[]));
    assert_eq!(resolver.resolve(Some("North Vietnam")), parsed(&["VN"], &[]));
}

#[test]
fn test_unresolved_tokens_survive_verbatim() {
    let loc = resolver().resolve(Some("Kampong Glam, Singapore and Chinatown"));

    assert_eq!(loc.countries, vec!["SG"]);
    assert_eq!(loc.regions, vec!["Kampong Glam", "Chinatown"]);
}

#[test]
fn test_resolution_is_idempotent_end_to_end() {
    let resolver = resolver();
    let input = "Singapore and Penang, U.K., Hong Kong";

    let first = resolver.resolve(Some(input));
    let second = resolver.resolve(Some(input));

    assert_eq!(first, second);
}

#[test]
fn test_promotion_moves_candidate_out_of_regions() {
    // A custom rule file can map a nickname to a region whose name the
    // directory resolves; the promotion pass then lifts it to a country.
    let table = OverrideTable::new(vec![OverrideRule::new(
        "temasek",
        OverrideEffect::Region("Singapore".to_string()),
    )]);
    let directory = Arc::new(EmbeddedCountryDirectory::embedded().unwrap());
    let resolver = LocationResolver::new(table, directory);

    let loc = resolver.resolve(Some("Temasek"));

    assert_eq!(loc.countries, vec!["SG"]);
    assert!(loc.regions.is_empty());
}

#[test]
fn test_service_exposes_resolution() {
    let directory = Arc::new(EmbeddedCountryDirectory::embedded().unwrap());
    let service = EnrichmentService::new(OverrideTable::builtin(), directory);

    let loc = service.resolve_geo_reference(Some("Singapore and Penang"));

    assert_eq!(loc.countries, vec!["SG", "MY"]);
    assert_eq!(loc.regions, vec!["Penang"]);
}
