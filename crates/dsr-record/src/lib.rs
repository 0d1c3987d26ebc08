//! DSR Record - Data model and store seams
//!
//! Defines the show catalog record, the reference equipment catalog, and
//! the store traits the DSR core consumes:
//! - [`RecordStore`] for show records and their regeneration flags
//! - [`CatalogStore`] for the read-only equipment catalog
//! - [`TemplateStore`] / [`DocumentStore`] for template bytes and rendered
//!   output
//!
//! In-memory implementations back the test suite and small embeddings;
//! filesystem-backed template/document stores back real deployments. The
//! surrounding application's persistence format (whole-file CSV in the
//! original tool) stays behind these seams.

#![warn(unreachable_pub)]

pub mod equipment;
pub mod error;
pub mod fs;
pub mod show;
pub mod store;

pub use equipment::{EquipmentCatalogEntry, ParsedEquipmentLine, Resolution};
pub use error::{StoreError, StoreResult};
pub use fs::{FsDocumentStore, FsTemplateStore};
pub use show::{ShowRecord, YesNo};
pub use store::{
    CatalogStore, DocumentStore, MemoryCatalogStore, MemoryDocumentStore, MemoryRecordStore,
    MemoryTemplateStore, RecordStore, TemplateStore,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
