//! cra-insight
//!
//! Generative narrative for the executive summary, treated as a fully
//! opaque collaborator: a prompt built from the three ring scores goes out,
//! a short narrative comes back, and any failure whatsoever is replaced by
//! a fixed fallback string. No retry, no rate limiting.

pub mod client;
pub mod error;

pub use client::{insight_or_fallback, HttpInsightClient, InsightClient, FALLBACK_INSIGHT};
pub use error::InsightError;
