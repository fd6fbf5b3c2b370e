//! Constants used throughout the CRA core crate.
//!
//! Filename constants live in [`crate::paths`] as typed path definitions;
//! this module holds the remaining path defaults.

/// Default public base path for the patient data tree, as seen by consumers
/// of loaded records (the casefile PDF reference is built under this base).
pub const DEFAULT_PATIENT_DATA_BASE: &str = "/patient-data";

/// Default on-disk directory for patient data when no explicit directory is
/// configured.
pub const DEFAULT_PATIENT_DATA_DIR: &str = "patient-data";
