//! # CRA Core
//!
//! Core loading logic for the CRA clinical-record audit system.
//!
//! This crate contains the patient data loader and its supporting pieces:
//! - Patient discovery from `patients-manifest.json`
//! - Per-document loading with presence/absence semantics
//! - A transport-agnostic document store (filesystem or HTTP)
//! - Stale-load guarding for rapid patient switching
//!
//! **No API concerns**: HTTP endpoints, OpenAPI documentation, or service
//! interfaces belong in the `cra-run` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod paths;
pub mod session;
pub mod store;

pub use config::CoreConfig;
pub use error::{LoaderError, LoaderResult};
pub use loader::PatientDataService;
pub use session::{LoadSession, LoadTicket};
pub use store::{DocumentStore, FsStore, HttpStore, StoreError};
