//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the catalog enrichment
//! domain. They have no external dependencies and contain only business logic.

use crate::domain::value_objects::{RightsStatus, UsePermission};
use serde::{Deserialize, Serialize};

/// The structured result of resolving one geographic reference string.
///
/// Countries are ISO 3166-1 alpha-2 codes in first-resolved order
/// (duplicates permitted). Regions keep the original casing of the input
/// token they came from. Neither sequence ever contains an empty or
/// whitespace-only element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocation {
    /// Resolved country codes (ISO 3166-1 alpha-2), left-to-right
    pub countries: Vec<String>,
    /// Residual sub-national region/city names, left-to-right
    pub regions: Vec<String>,
}

impl ParsedLocation {
    pub fn new(countries: Vec<String>, regions: Vec<String>) -> Self {
        Self { countries, regions }
    }

    /// True when the reference yielded no country at all.
    pub fn has_no_country(&self) -> bool {
        self.countries.is_empty()
    }
}

/// The structured result of classifying one free-text rights value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightsSummary {
    /// Cleaned copyright status
    pub status: RightsStatus,
    /// Whether educational reproduction is permitted
    pub educational_use: UsePermission,
    /// Whether marketing/publicity reproduction is permitted
    pub marketing_use: UsePermission,
    /// Whether commercial reproduction is permitted
    pub commercial_use: UsePermission,
    /// Whether sublicensing is permitted
    pub sublicensing_use: UsePermission,
    /// Free-text explanation attached to the classification
    pub notes: String,
}

impl RightsSummary {
    /// Summary with every permission granted.
    pub fn all_permitted(status: RightsStatus, notes: impl Into<String>) -> Self {
        Self {
            status,
            educational_use: UsePermission::Yes,
            marketing_use: UsePermission::Yes,
            commercial_use: UsePermission::Yes,
            sublicensing_use: UsePermission::Yes,
            notes: notes.into(),
        }
    }

    /// Summary with every permission withheld.
    pub fn none_permitted(status: RightsStatus, notes: impl Into<String>) -> Self {
        Self {
            status,
            educational_use: UsePermission::No,
            marketing_use: UsePermission::No,
            commercial_use: UsePermission::No,
            sublicensing_use: UsePermission::No,
            notes: notes.into(),
        }
    }
}
