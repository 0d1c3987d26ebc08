//! Store seams consumed by the DSR core
//!
//! The core never assumes a serialization format: the surrounding
//! application provides these traits (the original tool backed them with
//! whole-file CSV). In-memory implementations live here for tests and
//! embedding.
//!
//! None of the stores lock across calls; concurrent writers to the same
//! record are last-writer-wins, acceptable at this tool's write volume.

use crate::equipment::EquipmentCatalogEntry;
use crate::error::{StoreError, StoreResult};
use crate::show::ShowRecord;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;

/// Show record catalog access
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch one record by identifier
    ///
    /// # Errors
    /// `StoreError::RecordNotFound` if no record has the identifier
    async fn get(&self, id: &str) -> StoreResult<ShowRecord>;

    /// Fetch every record in catalog order
    async fn get_all(&self) -> StoreResult<Vec<ShowRecord>>;

    /// Set or clear one record's regeneration flag
    ///
    /// # Errors
    /// `StoreError::RecordNotFound` if no record has the identifier
    async fn set_regeneration_flag(&self, id: &str, flag: bool) -> StoreResult<()>;

    /// Replace the whole catalog
    ///
    /// Every incoming record's regeneration flag is set conservatively (no
    /// diffing against the previous version), so every show gets a fresh
    /// document on the next sweep.
    async fn replace_all(&self, records: Vec<ShowRecord>) -> StoreResult<()>;
}

/// Read-only equipment catalog access
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch every catalog entry in source order
    ///
    /// # Errors
    /// `StoreError::CatalogUnavailable` if the catalog cannot be loaded
    async fn get_all(&self) -> StoreResult<Vec<EquipmentCatalogEntry>>;
}

/// Template byte access
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Load template bytes by name
    ///
    /// # Errors
    /// `StoreError::TemplateUnavailable` if the template is missing or
    /// unreadable
    async fn load(&self, name: &str) -> StoreResult<Vec<u8>>;
}

/// Rendered document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist the rendered document for a show, overwriting any prior one
    ///
    /// # Errors
    /// `StoreError::PersistFailure` if the document cannot be written
    async fn save(&self, id: &str, bytes: &[u8]) -> StoreResult<PathBuf>;
}

/// In-memory show record store
///
/// Records keep their insertion order, matching row order in a file-backed
/// store.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<ShowRecord>>,
}

impl MemoryRecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records
    #[must_use]
    pub fn with_records(records: Vec<ShowRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append one record
    pub fn insert(&self, record: ShowRecord) {
        self.records.write().push(record);
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, id: &str) -> StoreResult<ShowRecord> {
        self.records
            .read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::record_not_found(id))
    }

    async fn get_all(&self) -> StoreResult<Vec<ShowRecord>> {
        Ok(self.records.read().clone())
    }

    async fn set_regeneration_flag(&self, id: &str, flag: bool) -> StoreResult<()> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::record_not_found(id))?;
        record.needs_regeneration = flag;
        Ok(())
    }

    async fn replace_all(&self, mut records: Vec<ShowRecord>) -> StoreResult<()> {
        for record in &mut records {
            record.needs_regeneration = true;
        }
        tracing::debug!(count = records.len(), "replaced show catalog");
        *self.records.write() = records;
        Ok(())
    }
}

/// In-memory equipment catalog store
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    entries: RwLock<Vec<EquipmentCatalogEntry>>,
}

impl MemoryCatalogStore {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with entries
    #[must_use]
    pub fn with_entries(entries: Vec<EquipmentCatalogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn get_all(&self) -> StoreResult<Vec<EquipmentCatalogEntry>> {
        Ok(self.entries.read().clone())
    }
}

/// In-memory template store keyed by template name
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryTemplateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register template bytes under a name
    pub fn insert(&self, name: impl Into<String>, bytes: Vec<u8>) {
        self.templates.write().insert(name.into(), bytes);
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn load(&self, name: &str) -> StoreResult<Vec<u8>> {
        self.templates
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::template_unavailable(name, "not registered"))
    }
}

/// In-memory document store keyed by show identifier
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a previously saved document
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Vec<u8>> {
        self.documents.read().get(id).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save(&self, id: &str, bytes: &[u8]) -> StoreResult<PathBuf> {
        self.documents.write().insert(id.to_string(), bytes.to_vec());
        Ok(PathBuf::from(format!("memory/{id}/dsr.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn record_store_get_and_missing() {
        let store = MemoryRecordStore::with_records(vec![ShowRecord::new("SH1")]);

        let record = store.get("SH1").await.unwrap();
        assert_eq!(record.id, "SH1");

        let err = store.get("SH2").await.unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound(id) if id == "SH2"));
    }

    #[tokio::test]
    async fn record_store_flag_roundtrip() {
        let store = MemoryRecordStore::with_records(vec![ShowRecord::new("SH1")]);

        store.set_regeneration_flag("SH1", true).await.unwrap();
        assert!(store.get("SH1").await.unwrap().needs_regeneration);

        store.set_regeneration_flag("SH1", false).await.unwrap();
        assert!(!store.get("SH1").await.unwrap().needs_regeneration);
    }

    #[tokio::test]
    async fn replace_all_flags_every_record() {
        let store = MemoryRecordStore::new();
        store
            .replace_all(vec![ShowRecord::new("SH1"), ShowRecord::new("SH2")])
            .await
            .unwrap();

        let records = store.get_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.needs_regeneration));
    }

    #[tokio::test]
    async fn catalog_store_preserves_order() {
        let store = MemoryCatalogStore::with_entries(vec![
            EquipmentCatalogEntry::new("ClubMax", "1800 RGB"),
            EquipmentCatalogEntry::new("ClubMax", "3000 RGB"),
        ]);

        let entries = store.get_all().await.unwrap();
        assert_eq!(entries[0].model, "1800 RGB");
        assert_eq!(entries[1].model, "3000 RGB");
    }

    #[tokio::test]
    async fn template_store_missing_name() {
        let store = MemoryTemplateStore::new();
        store.insert("dsr_template", b"{}".to_vec());

        assert!(store.load("dsr_template").await.is_ok());

        let err = store.load("other").await.unwrap_err();
        assert!(matches!(err, StoreError::TemplateUnavailable { name, .. } if name == "other"));
    }

    #[tokio::test]
    async fn document_store_overwrites() {
        let store = MemoryDocumentStore::new();
        store.save("SH1", b"first").await.unwrap();
        let path = store.save("SH1", b"second").await.unwrap();

        assert_eq!(store.get("SH1").unwrap(), b"second");
        assert_eq!(path, PathBuf::from("memory/SH1/dsr.json"));
    }
}
