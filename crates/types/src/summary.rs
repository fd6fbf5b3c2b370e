//! Executive summary wire model.
//!
//! `executive-summary.json` carries the patient header, the three ring
//! scores, the grouped audit findings and the admission timeline. An
//! optional free-form narrative object may be attached; it has no fixed
//! schema and is carried opaquely.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::score::RingScores;

/// Display status attached to an individual audit finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Missing,
    Late,
    Incomplete,
    Empty,
    Upload,
    Compliant,
}

/// Coarse classification of an audit category, used for display grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategorySeverity {
    Critical,
    Warning,
    Admin,
    Good,
}

/// A single audit finding within a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Absent for categories that do not track per-item status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
}

/// An ordered grouping of audit findings with a severity tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditCategory {
    pub id: String,
    pub title: String,
    pub severity: CategorySeverity,
    pub items: Vec<AuditItem>,
}

/// Outcome tag on a timeline event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Success,
    Fail,
}

/// One event within a timeline group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEvent {
    pub title: String,
    pub status: TimelineStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A labelled group of timeline events, e.g. `"Day 0: Admission (12/04)"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineGroup {
    pub label: String,
    pub events: Vec<TimelineEvent>,
}

/// The full executive summary document for one patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummaryData {
    pub patient_id: String,
    pub name: String,
    pub mr_number: String,
    pub care_type: String,
    pub admit_date: String,
    pub rings: RingScores,
    pub categories: Vec<AuditCategory>,
    pub timeline: Vec<TimelineGroup>,
    /// Optional pre-generated narrative. Free-form; the generator has used
    /// several shapes over time, so it is carried as opaque JSON.
    #[serde(
        default,
        rename = "perspectives_reclaim",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Object>)]
    pub perspectives_reclaim: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_json() -> &'static str {
        r#"{
            "patientId": "137766",
            "name": "Jessica Hull",
            "mrNumber": "2025-127",
            "careType": "Residential",
            "admitDate": "12/04",
            "rings": {"compliance": 42, "process": 61, "data": 88},
            "categories": [
                {
                    "id": "critical",
                    "title": "Critical Actions",
                    "severity": "critical",
                    "items": [
                        {
                            "id": "mtp",
                            "title": "Master Treatment Plan",
                            "description": "Document completely absent.",
                            "status": "missing"
                        }
                    ]
                }
            ],
            "timeline": [
                {
                    "label": "Day 0: Admission (12/04)",
                    "events": [
                        {"title": "Admission Consents", "description": "All legal consents signed.", "status": "success"},
                        {"title": "Initial Tx Plan", "status": "fail"}
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn parses_full_summary() {
        let summary: ExecutiveSummaryData =
            serde_json::from_str(summary_json()).expect("summary should parse");

        assert_eq!(summary.name, "Jessica Hull");
        assert_eq!(summary.rings.compliance.get(), 42);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].severity, CategorySeverity::Critical);
        assert_eq!(
            summary.categories[0].items[0].status,
            Some(AuditStatus::Missing)
        );
        assert_eq!(summary.timeline[0].events[1].status, TimelineStatus::Fail);
        assert!(summary.perspectives_reclaim.is_none());
    }

    #[test]
    fn narrative_object_is_carried_opaquely() {
        let json = r#"{
            "patientId": "1", "name": "A", "mrNumber": "m", "careType": "c",
            "admitDate": "d",
            "rings": {"compliance": 1, "process": 2, "data": 3},
            "categories": [], "timeline": [],
            "perspectives_reclaim": {"clinical_insight": "stable"}
        }"#;
        let summary: ExecutiveSummaryData =
            serde_json::from_str(json).expect("summary should parse");
        let narrative = summary
            .perspectives_reclaim
            .expect("narrative should be present");
        assert_eq!(narrative["clinical_insight"], "stable");
    }

    #[test]
    fn rejects_unknown_severity() {
        let result: Result<CategorySeverity, _> = serde_json::from_str(r#""fatal""#);
        assert!(result.is_err(), "unknown severity should be rejected");
    }
}
