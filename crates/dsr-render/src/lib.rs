//! DSR Render - Form renderer for Display Safety Records
//!
//! Takes a show record, expands its equipment list when needed, and stamps
//! every present field onto a fixed multi-page template at
//! layout-descriptor coordinates, producing the finished record document:
//! - [`Layout`] maps record fields to (page, x, y, size) placements and is
//!   plain data, loadable from JSON
//! - [`Template`] / [`RenderedDocument`] model the page geometry and the
//!   stamped output
//! - [`ShowDocumentRenderer`] runs the per-show pipeline and the
//!   regeneration sweep
//!
//! # Example
//!
//! ```rust,ignore
//! use dsr_render::{RenderConfig, ShowDocumentRenderer};
//!
//! # async fn example(
//! #     records: std::sync::Arc<dyn dsr_record::RecordStore>,
//! #     catalog: std::sync::Arc<dyn dsr_record::CatalogStore>,
//! #     templates: std::sync::Arc<dyn dsr_record::TemplateStore>,
//! #     documents: std::sync::Arc<dyn dsr_record::DocumentStore>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = ShowDocumentRenderer::new(
//!     records, catalog, templates, documents,
//!     RenderConfig::new(),
//! );
//! let path = renderer.render_show_document("SH1001").await?;
//! println!("document at {}", path.display());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod layout;
pub mod render;
pub mod sweep;
pub mod template;

pub use error::{RenderError, RenderResult};
pub use layout::{default_dsr_layout, EquipmentRegion, Field, Layout, Placement};
pub use render::{RenderConfig, ShowDocumentRenderer};
pub use sweep::SweepOutcome;
pub use template::{PageSpec, RenderedDocument, RenderedPage, Template, TextStamp};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for rendering show documents
    pub use crate::{
        Layout, RenderConfig, RenderError, RenderedDocument, ShowDocumentRenderer, SweepOutcome,
        Template,
    };
    pub use dsr_equipment::{format_equipment_lines, EquipmentExpander};
    pub use dsr_record::{
        CatalogStore, DocumentStore, EquipmentCatalogEntry, RecordStore, ShowRecord,
        TemplateStore, YesNo,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
