//! Transport-agnostic document retrieval.
//!
//! The loader only requires "fetch by path, return body or failure"; this
//! module provides that seam. [`FsStore`] serves a local directory tree the
//! way the REST deployment lays it out; [`HttpStore`] targets any static
//! host serving the same tree. The loader never knows which one it holds.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

/// Errors raised by a document store.
///
/// Not-found, transport and I/O failures stay distinguishable here so logs
/// carry the real cause; the loader collapses all of them to absence at its
/// public boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found: {path}")]
    NotFound { path: String },
    #[error("invalid document path: {path}")]
    InvalidPath { path: String },
    #[error("failed to read document: {0}")]
    Read(std::io::Error),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {status} for {path}")]
    Status { status: u16, path: String },
}

/// Retrieval of raw document bodies by path relative to the data base.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, StoreError>;
}

/// Document store backed by a local directory tree.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`. The directory does not need to
    /// exist yet; a missing tree simply yields not-found on every fetch.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Rejects paths that would escape the store root.
    ///
    /// Manifest content is external input; a folder name like `../secrets`
    /// must not be able to address files outside the data tree.
    fn validate(relative_path: &str) -> Result<&Path, StoreError> {
        let path = Path::new(relative_path);
        let safe = !relative_path.is_empty()
            && path.components().all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StoreError::InvalidPath {
                path: relative_path.to_string(),
            });
        }
        Ok(path)
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, StoreError> {
        let path = Self::validate(relative_path)?;
        match tokio::fs::read(self.root.join(path)).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
                path: relative_path.to_string(),
            }),
            Err(e) => Err(StoreError::Read(e)),
        }
    }
}

/// Document store backed by an HTTP static host.
#[derive(Debug)]
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    /// Creates a store fetching under `base_url`, e.g.
    /// `https://records.example.org/patient-data`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, StoreError> {
        let url = format!("{}/{}", self.base_url, relative_path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                path: relative_path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                path: relative_path.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn fs_store_reads_existing_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let folder = temp_dir.path().join("137766-jessica-hull");
        fs::create_dir_all(&folder).expect("should create patient folder");
        fs::write(folder.join("executive-summary.json"), b"{}").expect("should write document");

        let store = FsStore::new(temp_dir.path());
        let body = store
            .fetch("137766-jessica-hull/executive-summary.json")
            .await
            .expect("fetch should succeed");
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn fs_store_reports_not_found() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FsStore::new(temp_dir.path());

        let err = store
            .fetch("missing/executive-summary.json")
            .await
            .expect_err("fetch should fail");
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn fs_store_rejects_traversal() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FsStore::new(temp_dir.path());

        let err = store
            .fetch("../outside/secrets.json")
            .await
            .expect_err("traversal should be rejected");
        assert!(matches!(err, StoreError::InvalidPath { .. }));

        let err = store
            .fetch("/etc/passwd")
            .await
            .expect_err("absolute path should be rejected");
        assert!(matches!(err, StoreError::InvalidPath { .. }));
    }

    #[test]
    fn http_store_normalises_base_url() {
        let store = HttpStore::new("https://records.example.org/patient-data/");
        assert_eq!(store.base_url, "https://records.example.org/patient-data");
    }
}
