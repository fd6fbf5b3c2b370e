//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to avoid
//! reading process-wide environment variables during request handling, which
//! can lead to inconsistent behaviour in multi-threaded runtimes and test
//! harnesses. Environment variables are read only in the binaries.

use crate::error::{LoaderError, LoaderResult};

/// Core configuration resolved at startup.
///
/// `data_base` is the public base under which the patient data tree is
/// addressed by consumers - a URL path like `/patient-data` for the REST
/// deployment, or a full base URL when the loader targets a remote static
/// host. Casefile PDF references are constructed under this base.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_base: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// A trailing slash on `data_base` is stripped so path construction
    /// yields exactly one separator between segments.
    pub fn new(data_base: impl Into<String>) -> LoaderResult<Self> {
        let data_base = data_base.into();
        if data_base.trim().is_empty() {
            return Err(LoaderError::InvalidInput(
                "data_base cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_base: data_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn data_base(&self) -> &str {
        &self.data_base
    }
}
