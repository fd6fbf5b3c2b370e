//! Resource path definitions for the patient data tree.
//!
//! This module defines the fixed filenames of the manifest and the
//! per-patient documents, plus relative path construction. It contains
//! **no I/O logic** - only typed path construction.

/// Patient manifest filename, at the root of the data tree.
pub struct ManifestFile;

impl ManifestFile {
    pub const NAME: &'static str = "patients-manifest.json";
}

/// Executive summary document filename.
pub struct ExecutiveSummaryFile;

impl ExecutiveSummaryFile {
    pub const NAME: &'static str = "executive-summary.json";
}

/// Detailed audit document filename.
pub struct AuditDetailsFile;

impl AuditDetailsFile {
    pub const NAME: &'static str = "audit-details.json";
}

/// Utilization review document filename.
pub struct UrAnalysisFile;

impl UrAnalysisFile {
    pub const NAME: &'static str = "ur-analysis.json";
}

/// Casefile PDF filename.
pub struct CasefileFile;

impl CasefileFile {
    pub const NAME: &'static str = "casefile.pdf";
}

/// Builds the path of a named document within a patient folder, relative to
/// the data base.
pub fn patient_document(folder_path: &str, file_name: &str) -> String {
    format!("{folder_path}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_relative_document_paths() {
        assert_eq!(
            patient_document("137766-jessica-hull", ExecutiveSummaryFile::NAME),
            "137766-jessica-hull/executive-summary.json"
        );
        assert_eq!(
            patient_document("137766-jessica-hull", CasefileFile::NAME),
            "137766-jessica-hull/casefile.pdf"
        );
    }
}
