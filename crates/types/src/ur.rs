//! Utilization review wire model.
//!
//! `ur-analysis.json` carries the payer context, the clinical review cycle,
//! the per-review authorisation records and the structured clinical
//! assessment used by utilization review staff.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authorisation outcome of a utilization review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReviewStatus {
    Approved,
    Denied,
    Pending,
}

/// Summary of the current clinical review cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalCycle {
    pub current_cycle: String,
    pub next_review_date: String,
    pub notes_summary: Vec<String>,
    pub barriers_to_step_down: String,
    pub reasons_for_step_down: String,
    pub remedies: String,
}

/// One utilization review record with its authorisation outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationReview {
    pub id: String,
    #[serde(rename = "type")]
    pub review_type: String,
    pub date: String,
    pub reviewer: String,
    pub status: ReviewStatus,
    /// Number of days covered by this review.
    pub days: u32,
    pub clinical_notes: String,
    pub criteria_met: Vec<String>,
    pub dates_authorized: String,
    pub auth_number: String,
}

/// Mental status examination fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MentalStatus {
    pub appearance: String,
    pub mood: String,
    pub affect: String,
    pub risk: String,
    pub judgement: String,
    pub orientation: String,
}

/// Trauma history flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TraumaHistory {
    pub physical: bool,
    pub sexual: bool,
    pub emotional: bool,
}

/// Psychosocial stressor fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PsychosocialStressors {
    pub housing: String,
    pub financial: String,
    pub employment: String,
    pub relationships: String,
    pub legal: String,
}

/// The structured clinical assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub diagnoses: Vec<String>,
    pub precipitating_event: String,
    pub mental_status: MentalStatus,
    pub biomedical_conditions: String,
    pub medications: String,
    pub substance_use_history: String,
    pub treatment_history: String,
    pub trauma_history: TraumaHistory,
    pub psychosocial_stressors: PsychosocialStressors,
    pub mood_symptoms: String,
    pub barriers_to_discharge: String,
    pub treatment_plan_goals: String,
    pub discharge_plan: String,
}

/// The full utilization review document for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct URAnalysisData {
    pub patient_id: String,
    pub payer: String,
    pub plan_type: String,
    pub deductible_met: String,
    pub oop_max: String,
    pub clinical_cycle: ClinicalCycle,
    pub reviews: Vec<UtilizationReview>,
    pub assessment: Assessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_review_record() {
        let json = r#"{
            "id": "r1",
            "type": "Concurrent",
            "date": "12/11",
            "reviewer": "Dr. Patel",
            "status": "Approved",
            "days": 7,
            "clinicalNotes": "Continued stay justified.",
            "criteriaMet": ["Severity of illness", "Intensity of service"],
            "datesAuthorized": "12/11-12/18",
            "authNumber": "A-99281"
        }"#;
        let review: UtilizationReview = serde_json::from_str(json).expect("review should parse");
        assert_eq!(review.review_type, "Concurrent");
        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.days, 7);
    }

    #[test]
    fn rejects_unknown_review_status() {
        let result: Result<ReviewStatus, _> = serde_json::from_str(r#""Appealed""#);
        assert!(result.is_err(), "unknown status should be rejected");
    }

    #[test]
    fn review_type_uses_wire_key() {
        let review = UtilizationReview {
            id: "r1".into(),
            review_type: "Initial".into(),
            date: "12/04".into(),
            reviewer: "Dr. Patel".into(),
            status: ReviewStatus::Pending,
            days: 3,
            clinical_notes: String::new(),
            criteria_met: vec![],
            dates_authorized: String::new(),
            auth_number: String::new(),
        };
        let json = serde_json::to_value(&review).expect("serialise");
        assert_eq!(json["type"], "Initial");
        assert!(json.get("reviewType").is_none());
    }
}
