//! The assembled per-patient aggregate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::audit::AuditDetailsData;
use crate::summary::ExecutiveSummaryData;
use crate::ur::URAnalysisData;

/// All three per-patient documents plus the resolved casefile path.
///
/// Assembled by the loader only when every document loaded successfully;
/// a partially loaded record is never represented. Held in memory for the
/// currently selected patient only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDataComplete {
    pub executive_summary: ExecutiveSummaryData,
    pub audit_details: AuditDetailsData,
    pub ur_analysis: URAnalysisData,
    /// Reference to the casefile PDF, e.g.
    /// `/patient-data/137766-jessica-hull/casefile.pdf`. The PDF itself is
    /// never parsed; rendering is the viewer's responsibility.
    pub pdf_path: String,
}
