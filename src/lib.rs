//! catalog-enrich Library
//!
//! This module exposes the catalog enrichment components for use in
//! integration tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::{CsvPipeline, PipelineError};
pub use adapters::outbound::EmbeddedCountryDirectory;
pub use application::{EnrichmentService, EnrichmentStats};
pub use domain::entities::{ParsedLocation, RightsSummary};
pub use domain::ports::CountryDirectory;
pub use domain::services::{LocationResolver, OverrideTable};
pub use domain::value_objects::{RightsStatus, UsePermission};
