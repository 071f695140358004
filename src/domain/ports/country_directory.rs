//! Country Directory Port
//!
//! Defines the interface for looking up country names against a reference
//! dataset of ISO 3166-1 codes.

/// Lookup service for country names and aliases.
///
/// This is an outbound port that abstracts the reference dataset.
/// Implementations may use an embedded ISO 3166 table, a file on disk,
/// or a remote gazetteer.
///
/// The directory fails closed: any name it cannot match yields `None`,
/// never an error. Callers are responsible for case normalization;
/// implementations receive the name already trimmed and lowercased.
pub trait CountryDirectory: Send + Sync {
    /// Resolve a country name or alias to its ISO 3166-1 alpha-2 code.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Convert an alpha-2 code to its alpha-3 form.
    ///
    /// Used by the aggregation step, which keys per-country counts by
    /// alpha-3 for the mapping tooling downstream.
    fn alpha3(&self, alpha2: &str) -> Option<String>;
}
