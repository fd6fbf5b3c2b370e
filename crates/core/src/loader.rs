//! Patient discovery and document loading.
//!
//! This module translates a patient identifier and folder name into a
//! fully-populated [`PatientDataComplete`], and enumerates which patients
//! exist. All audit content is pre-generated offline; the loader only
//! fetches, parses and assembles.
//!
//! ## Error handling policy
//!
//! Every retrieval failure - not-found, transport error, malformed content -
//! is caught at its source, logged, and converted to an absence signal.
//! Callers only ever observe "data present" or "data absent"; no error
//! escapes the loader. A missing manifest degrades to an empty patient list
//! so the consuming UI can show a no-data state rather than crash.
//!
//! ## All-or-nothing aggregates
//!
//! A patient is usable only if all three documents load. The three fetches
//! in [`PatientDataService::load_patient_data`] run concurrently and are all
//! driven to completion even when one of them fails early; any absence then
//! fails the whole aggregate.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use cra_types::{
    AuditDetailsData, ExecutiveSummaryData, PatientDataComplete, PatientMetadata, URAnalysisData,
};

use crate::config::CoreConfig;
use crate::error::{LoaderError, LoaderResult};
use crate::paths::{
    patient_document, AuditDetailsFile, CasefileFile, ExecutiveSummaryFile, ManifestFile,
    UrAnalysisFile,
};
use crate::store::DocumentStore;

/// Loads pre-generated patient audit records from a document store.
#[derive(Clone)]
pub struct PatientDataService {
    cfg: Arc<CoreConfig>,
    store: Arc<dyn DocumentStore>,
}

impl PatientDataService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn DocumentStore>) -> Self {
        Self { cfg, store }
    }

    /// Discovers all patients listed in the manifest, in manifest order.
    ///
    /// An unavailable or unparsable manifest degrades to an empty list; the
    /// cause is logged and never propagated.
    pub async fn discover_patients(&self) -> Vec<PatientMetadata> {
        match self.fetch_json::<Vec<PatientMetadata>>(ManifestFile::NAME).await {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!("no usable patients manifest, falling back to empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Loads the executive summary document for a patient.
    pub async fn load_executive_summary(
        &self,
        patient_id: &str,
        folder_path: &str,
    ) -> Option<ExecutiveSummaryData> {
        let path = patient_document(folder_path, ExecutiveSummaryFile::NAME);
        match self.fetch_json(&path).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::error!("failed to load executive summary for {}: {}", patient_id, e);
                None
            }
        }
    }

    /// Loads the detailed audit document for a patient.
    pub async fn load_audit_details(
        &self,
        patient_id: &str,
        folder_path: &str,
    ) -> Option<AuditDetailsData> {
        let path = patient_document(folder_path, AuditDetailsFile::NAME);
        match self.fetch_json(&path).await {
            Ok(details) => Some(details),
            Err(e) => {
                tracing::error!("failed to load audit details for {}: {}", patient_id, e);
                None
            }
        }
    }

    /// Loads the utilization review document for a patient.
    pub async fn load_ur_analysis(
        &self,
        patient_id: &str,
        folder_path: &str,
    ) -> Option<URAnalysisData> {
        let path = patient_document(folder_path, UrAnalysisFile::NAME);
        match self.fetch_json(&path).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                tracing::error!("failed to load UR analysis for {}: {}", patient_id, e);
                None
            }
        }
    }

    /// Returns the casefile PDF reference for a patient folder.
    ///
    /// Pure path construction under the configured data base; no I/O and no
    /// check that the file exists.
    pub fn casefile_path(&self, folder_path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.cfg.data_base(),
            folder_path,
            CasefileFile::NAME
        )
    }

    /// Loads the complete record for a patient: all three documents plus the
    /// casefile reference.
    ///
    /// The three fetches run concurrently and all of them are driven to
    /// completion even if one fails early. If any document is absent the
    /// whole aggregate is absent.
    pub async fn load_patient_data(
        &self,
        patient_id: &str,
        folder_path: &str,
    ) -> Option<PatientDataComplete> {
        let (summary, details, analysis) = tokio::join!(
            self.load_executive_summary(patient_id, folder_path),
            self.load_audit_details(patient_id, folder_path),
            self.load_ur_analysis(patient_id, folder_path),
        );

        match (summary, details, analysis) {
            (Some(executive_summary), Some(audit_details), Some(ur_analysis)) => {
                Some(PatientDataComplete {
                    executive_summary,
                    audit_details,
                    ur_analysis,
                    pdf_path: self.casefile_path(folder_path),
                })
            }
            _ => {
                tracing::error!(
                    "incomplete document set for {}; treating record as absent",
                    patient_id
                );
                None
            }
        }
    }

    /// Fetches one document and deserialises it, keeping the failure cause
    /// distinguishable for logging.
    async fn fetch_json<T: DeserializeOwned>(&self, relative_path: &str) -> LoaderResult<T> {
        let body = self.store.fetch(relative_path).await?;
        serde_json::from_slice(&body).map_err(LoaderError::Deserialization)
    }
}
