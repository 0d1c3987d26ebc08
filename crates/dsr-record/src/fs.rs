//! Filesystem-backed template and document stores
//!
//! Templates are plain files under a template directory; rendered documents
//! land in one folder per show, overwriting the previous output. Both
//! stores re-read the filesystem on every call; nothing is cached between
//! renders.

use crate::error::{StoreError, StoreResult};
use crate::store::{DocumentStore, TemplateStore};
use async_trait::async_trait;
use std::path::PathBuf;

/// File name of the rendered document inside a show's folder
pub const DOCUMENT_FILE_NAME: &str = "dsr.json";

/// Template store reading from a directory
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    dir: PathBuf,
}

impl FsTemplateStore {
    /// Create a store rooted at the given template directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn load(&self, name: &str) -> StoreResult<Vec<u8>> {
        let path = self.dir.join(name);
        tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::template_unavailable(name, e.to_string()))
    }
}

/// Document store writing one folder per show
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    dir: PathBuf,
}

impl FsDocumentStore {
    /// Create a store rooted at the given output directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output path for a show's rendered document
    #[must_use]
    pub fn document_path(&self, id: &str) -> PathBuf {
        self.dir.join(id).join(DOCUMENT_FILE_NAME)
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn save(&self, id: &str, bytes: &[u8]) -> StoreResult<PathBuf> {
        let folder = self.dir.join(id);
        tokio::fs::create_dir_all(&folder)
            .await
            .map_err(|e| StoreError::persist_failure(&folder, e))?;

        let path = self.document_path(id);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::persist_failure(&path, e))?;

        tracing::info!(show_id = id, path = %path.display(), "saved rendered document");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn template_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dsr_template"), b"{\"pages\":[]}").unwrap();

        let store = FsTemplateStore::new(dir.path());
        let bytes = store.load("dsr_template").await.unwrap();
        assert_eq!(bytes, b"{\"pages\":[]}");
    }

    #[tokio::test]
    async fn template_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTemplateStore::new(dir.path());

        let err = store.load("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::TemplateUnavailable { name, .. } if name == "nope"));
    }

    #[tokio::test]
    async fn document_save_creates_show_folder() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        let path = store.save("SH1001", b"document bytes").await.unwrap();
        assert_eq!(path, dir.path().join("SH1001").join(DOCUMENT_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), b"document bytes");
    }

    #[tokio::test]
    async fn document_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());

        store.save("SH1001", b"first").await.unwrap();
        let path = store.save("SH1001", b"second").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
