//! Detailed audit wire model.
//!
//! `audit-details.json` is the page-linked Q&A view: ordered categories of
//! question/answer items, each referencing a page in the casefile PDF.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Answer to a detailed audit question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DetailedAnswer {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// One page-referenced question/answer pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailedAuditItem {
    pub id: String,
    pub question: String,
    pub answer: DetailedAnswer,
    /// 1-based page in the casefile PDF the answer was sourced from.
    #[schema(value_type = u32, minimum = 1)]
    pub page: NonZeroU32,
}

/// An ordered group of detailed audit items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailedAuditCategory {
    pub title: String,
    pub items: Vec<DetailedAuditItem>,
}

/// The full detailed audit document for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetailsData {
    pub patient_id: String,
    pub categories: Vec<DetailedAuditCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_audit_details() {
        let json = r#"{
            "patientId": "137766",
            "categories": [
                {
                    "title": "Admission Documents",
                    "items": [
                        {"id": "q1", "question": "Consent on file?", "answer": "YES", "page": 12},
                        {"id": "q2", "question": "MTP signed?", "answer": "NO", "page": 47},
                        {"id": "q3", "question": "Detox protocol?", "answer": "N/A", "page": 3}
                    ]
                }
            ]
        }"#;
        let details: AuditDetailsData = serde_json::from_str(json).expect("details should parse");
        let items = &details.categories[0].items;
        assert_eq!(items[0].answer, DetailedAnswer::Yes);
        assert_eq!(items[1].answer, DetailedAnswer::No);
        assert_eq!(items[2].answer, DetailedAnswer::NotApplicable);
        assert_eq!(items[0].page.get(), 12);
    }

    #[test]
    fn rejects_page_zero() {
        let json = r#"{"id": "q1", "question": "?", "answer": "YES", "page": 0}"#;
        let result: Result<DetailedAuditItem, _> = serde_json::from_str(json);
        assert!(result.is_err(), "page 0 should be rejected");
    }

    #[test]
    fn answers_serialise_with_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&DetailedAnswer::NotApplicable).expect("serialise"),
            r#""N/A""#
        );
    }
}
