//! Wire models for pre-generated clinical audit documents.
//!
//! This crate defines the read-only data model of the CRA system: the patient
//! manifest, the three per-patient JSON documents (executive summary, audit
//! details, utilization review analysis) and the aggregate assembled from
//! them. Every type mirrors the JSON written by the offline generator —
//! camelCase field names on the wire, closed vocabularies as Rust enums.
//!
//! This crate contains **no I/O** and no loading policy; it is purely
//! serialisation/deserialisation plus validated scalar types.

pub mod aggregate;
pub mod audit;
pub mod manifest;
pub mod score;
pub mod summary;
pub mod ur;

pub use aggregate::PatientDataComplete;
pub use audit::{AuditDetailsData, DetailedAnswer, DetailedAuditCategory, DetailedAuditItem};
pub use manifest::PatientMetadata;
pub use score::{RingScore, RingScores, ScoreError};
pub use summary::{
    AuditCategory, AuditItem, AuditStatus, CategorySeverity, ExecutiveSummaryData, TimelineEvent,
    TimelineGroup, TimelineStatus,
};
pub use ur::{
    Assessment, ClinicalCycle, MentalStatus, PsychosocialStressors, ReviewStatus, TraumaHistory,
    URAnalysisData, UtilizationReview,
};
