//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Cleaned copyright status assigned by the rights rule table.
///
/// The string forms are the exact values written to the enriched
/// "Cleaned Copyright Status" column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightsStatus {
    /// Every reproduction use is allowed
    AllPermissions,
    /// Most reproductions allowed, commercial use restricted
    LimitedPermissions,
    /// No license on file; each request is reviewed individually
    CaseByCaseReview,
    /// Rights holder denied all use
    Denied,
    /// A license exists; permissions are spelled out in SCMS notes
    PerScmsNotes,
    /// No license and no usable Rights value
    NotAvailable,
    /// A Record of Effort form exists instead of a license
    RecordOfEffort,
    /// Unrecognized Rights value, carried through in the notes
    Other,
}

impl RightsStatus {
    /// Convert to the column string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllPermissions => "All permissions",
            Self::LimitedPermissions => "Limited permissions",
            Self::CaseByCaseReview => "Case-by-case review",
            Self::Denied => "Denied",
            Self::PerScmsNotes => "As per SCMS notes",
            Self::NotAvailable => "Not available",
            Self::RecordOfEffort => "RoE",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for RightsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a particular kind of reproduction is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsePermission {
    Yes,
    No,
    /// Allowed with restrictions (usually non-commercial only)
    Restricted,
}

impl UsePermission {
    /// Convert to the column string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Restricted => "Restricted",
        }
    }
}

impl Default for UsePermission {
    fn default() -> Self {
        Self::No
    }
}

impl std::fmt::Display for UsePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
