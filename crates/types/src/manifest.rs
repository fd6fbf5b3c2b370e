//! Patient manifest entries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry per patient in `patients-manifest.json`.
///
/// Created by the offline generator, read once at discovery time, never
/// modified at runtime. Identity key is `patient_id`; `folder_path` names
/// the per-patient directory holding the three JSON documents and the
/// casefile PDF.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientMetadata {
    /// Externally assigned patient identifier, e.g. `"137766"`.
    pub patient_id: String,
    /// Display name, e.g. `"Jessica Hull"`.
    pub name: String,
    /// Directory name under the data base, e.g. `"137766-jessica-hull"`.
    pub folder_path: String,
}
