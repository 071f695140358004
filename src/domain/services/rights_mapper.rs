//! Rights Mapper
//!
//! Classifies the free-text "Rights" field of a catalog record into a
//! cleaned status and per-use permissions. The mapping is an ordered rule
//! table: each rule carries the substrings that select it, and the first
//! rule with a match wins. Matching is case-sensitive because the rights
//! codes ("CF", "CL", "NC", ...) are uppercase by convention and lowercase
//! letters appear inside ordinary words.

use crate::domain::entities::RightsSummary;
use crate::domain::value_objects::{RightsStatus, UsePermission};

struct RightsRule {
    /// Any of these substrings selects the rule
    patterns: &'static [&'static str],
    status: RightsStatus,
    educational: UsePermission,
    marketing: UsePermission,
    commercial: UsePermission,
    sublicensing: UsePermission,
    notes: &'static str,
}

const Y: UsePermission = UsePermission::Yes;
const N: UsePermission = UsePermission::No;

/// Rule order is load-bearing: "CF" must beat the bare "CL" and "D"
/// checks, and the license-form rules come after the code checks.
static RULES: &[RightsRule] = &[
    RightsRule {
        patterns: &["CF"],
        status: RightsStatus::AllPermissions,
        educational: Y,
        marketing: Y,
        commercial: Y,
        sublicensing: Y,
        notes: "Rights owner signed a license that allows all reproductions.",
    },
    RightsRule {
        patterns: &["CL"],
        status: RightsStatus::LimitedPermissions,
        educational: Y,
        marketing: Y,
        commercial: UsePermission::Restricted,
        sublicensing: N,
        notes: "Rights owner signed a license that allows most reproductions \
                (usually restricted to non-commercial uses only).",
    },
    RightsRule {
        patterns: &["CE", "Out of IP protection"],
        status: RightsStatus::AllPermissions,
        educational: Y,
        marketing: Y,
        commercial: Y,
        sublicensing: Y,
        notes: "Copyright is expired.",
    },
    RightsRule {
        patterns: &["NC", "N1", "N2", "Processing"],
        status: RightsStatus::CaseByCaseReview,
        educational: N,
        marketing: N,
        commercial: N,
        sublicensing: N,
        notes: "Usually there is no licence deed signed as we couldn't \
                contact/find the rights owner, or they did not respond.",
    },
    RightsRule {
        patterns: &["D", "DP"],
        status: RightsStatus::Denied,
        educational: N,
        marketing: N,
        commercial: N,
        sublicensing: N,
        notes: "Copyright holder has denied the use of artwork image for any Gallery use.",
    },
    RightsRule {
        patterns: &["Full transfer of rights"],
        status: RightsStatus::AllPermissions,
        educational: Y,
        marketing: Y,
        commercial: Y,
        sublicensing: Y,
        notes: "In the past, rights owners sometimes transferred their rights \
                to the copyright to NHB.",
    },
    RightsRule {
        patterns: &["Non-Exclusive license", "Exclusive license"],
        status: RightsStatus::PerScmsNotes,
        educational: N,
        marketing: N,
        commercial: N,
        sublicensing: N,
        notes: "A license was signed (via NHB). Specific permissions are \
                determined by SCMS notes.",
    },
    RightsRule {
        patterns: &["Record of Effort (RoE)"],
        status: RightsStatus::RecordOfEffort,
        educational: N,
        marketing: N,
        commercial: N,
        sublicensing: N,
        notes: "You may find references to a 'Record of Effort' (ROE) form \
                in the Remarks field.",
    },
];

/// Classify one raw rights value.
///
/// Absent or blank values short-circuit to `Not available`; a value no rule
/// recognizes becomes `Other` with the raw value carried in the notes so
/// nothing is silently lost.
pub fn classify_rights(raw: Option<&str>) -> RightsSummary {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return RightsSummary::none_permitted(
            RightsStatus::NotAvailable,
            "We don't have a license, or the 'Rights' field has not been updated.",
        );
    };

    for rule in RULES {
        if rule.patterns.iter().any(|pattern| raw.contains(pattern)) {
            return RightsSummary {
                status: rule.status.clone(),
                educational_use: rule.educational,
                marketing_use: rule.marketing,
                commercial_use: rule.commercial,
                sublicensing_use: rule.sublicensing,
                notes: rule.notes.to_string(),
            };
        }
    }

    RightsSummary {
        status: RightsStatus::Other,
        educational_use: N,
        marketing_use: N,
        commercial_use: N,
        sublicensing_use: N,
        notes: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Rule Selection Tests =====

    #[test]
    fn test_cf_grants_all_permissions() {
        let summary = classify_rights(Some("CF - signed 2019"));

        assert_eq!(summary.status, RightsStatus::AllPermissions);
        assert_eq!(summary.educational_use, UsePermission::Yes);
        assert_eq!(summary.commercial_use, UsePermission::Yes);
        assert_eq!(summary.sublicensing_use, UsePermission::Yes);
    }

    #[test]
    fn test_cl_restricts_commercial_use() {
        let summary = classify_rights(Some("CL"));

        assert_eq!(summary.status, RightsStatus::LimitedPermissions);
        assert_eq!(summary.educational_use, UsePermission::Yes);
        assert_eq!(summary.marketing_use, UsePermission::Yes);
        assert_eq!(summary.commercial_use, UsePermission::Restricted);
        assert_eq!(summary.sublicensing_use, UsePermission::No);
    }

    #[test]
    fn test_expired_copyright() {
        for value in ["CE", "Out of IP protection"] {
            let summary = classify_rights(Some(value));
            assert_eq!(
                summary.status,
                RightsStatus::AllPermissions,
                "Failed for {}",
                value
            );
            assert_eq!(summary.notes, "Copyright is expired.");
        }
    }

    #[test]
    fn test_case_by_case_review() {
        for value in ["NC", "N1", "N2", "Processing"] {
            let summary = classify_rights(Some(value));
            assert_eq!(
                summary.status,
                RightsStatus::CaseByCaseReview,
                "Failed for {}",
                value
            );
            assert_eq!(summary.educational_use, UsePermission::No);
        }
    }

    #[test]
    fn test_denied() {
        let summary = classify_rights(Some("DP"));

        assert_eq!(summary.status, RightsStatus::Denied);
        assert_eq!(summary.commercial_use, UsePermission::No);
    }

    #[test]
    fn test_full_transfer() {
        let summary = classify_rights(Some("Full transfer of rights"));

        assert_eq!(summary.status, RightsStatus::AllPermissions);
    }

    #[test]
    fn test_license_forms_defer_to_scms_notes() {
        for value in ["Non-Exclusive license", "Exclusive license"] {
            let summary = classify_rights(Some(value));
            assert_eq!(summary.status, RightsStatus::PerScmsNotes, "Failed for {}", value);
        }
    }

    #[test]
    fn test_record_of_effort() {
        let summary = classify_rights(Some("Record of Effort (RoE)"));

        assert_eq!(summary.status, RightsStatus::RecordOfEffort);
    }

    // ===== Precedence Tests =====

    #[test]
    fn test_cf_beats_cl() {
        // A value containing both codes takes the first rule.
        let summary = classify_rights(Some("CF/CL"));

        assert_eq!(summary.status, RightsStatus::AllPermissions);
    }

    #[test]
    fn test_ce_beats_denied() {
        // "CE" is checked before the bare "D" rule.
        let summary = classify_rights(Some("CE - Deed on file"));

        assert_eq!(summary.status, RightsStatus::AllPermissions);
    }

    #[test]
    fn test_bare_d_anywhere_means_denied() {
        // The "D" pattern is a substring check, faithful to the curated
        // table: any uppercase D not already captured by an earlier rule
        // classifies as denied.
        let summary = classify_rights(Some("Denied by estate"));

        assert_eq!(summary.status, RightsStatus::Denied);
    }

    // ===== Fallback Tests =====

    #[test]
    fn test_absent_value() {
        let summary = classify_rights(None);

        assert_eq!(summary.status, RightsStatus::NotAvailable);
        assert_eq!(summary.educational_use, UsePermission::No);
    }

    #[test]
    fn test_blank_value() {
        let summary = classify_rights(Some("   "));

        assert_eq!(summary.status, RightsStatus::NotAvailable);
    }

    #[test]
    fn test_unrecognized_value_carried_in_notes() {
        let summary = classify_rights(Some("see curator"));

        assert_eq!(summary.status, RightsStatus::Other);
        assert_eq!(summary.notes, "see curator");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = classify_rights(Some("NC, awaiting response"));
        let second = classify_rights(Some("NC, awaiting response"));

        assert_eq!(first, second);
    }
}
