//! Template and rendered-document model
//!
//! A template is a fixed-page-count document; rendering overlays text
//! stamps at layout coordinates and serializes the result wholesale on
//! every call. The byte format is JSON with a fixed field order, so the
//! same record and template always produce identical output bytes.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};

/// Geometry of one template page, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
}

impl PageSpec {
    /// US Letter, the standard DSR page size
    pub const US_LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
    };
}

/// A fixed-layout document template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub pages: Vec<PageSpec>,
}

impl Template {
    /// The standard three-page DSR template
    #[must_use]
    pub fn standard_dsr() -> Self {
        Self {
            pages: vec![PageSpec::US_LETTER; 3],
        }
    }

    /// Parse a template from stored bytes
    ///
    /// # Errors
    /// `RenderError::TemplateUnavailable` if the bytes do not parse; the
    /// error carries the template name for the failure report
    pub fn from_bytes(name: &str, bytes: &[u8]) -> RenderResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| RenderError::template_unavailable(name, e))
    }

    /// Serialize for storage in a template store
    ///
    /// # Errors
    /// `RenderError::SerializeFailed` if serialization fails
    pub fn to_bytes(&self) -> RenderResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(RenderError::SerializeFailed)
    }

    /// Number of pages in the template
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One piece of text placed at absolute coordinates
///
/// `y` is in the document's native bottom-left origin, already converted
/// from the layout's top-edge offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStamp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
}

/// One output page: template geometry plus ordered stamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub width: f32,
    pub height: f32,
    pub stamps: Vec<TextStamp>,
}

/// The finished record document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub pages: Vec<RenderedPage>,
}

impl RenderedDocument {
    /// Start an empty document over a template's pages
    #[must_use]
    pub fn from_template(template: &Template) -> Self {
        Self {
            pages: template
                .pages
                .iter()
                .map(|p| RenderedPage {
                    width: p.width,
                    height: p.height,
                    stamps: Vec::new(),
                })
                .collect(),
        }
    }

    /// Place text on a page; out-of-range pages are ignored
    pub fn stamp(&mut self, page: usize, x: f32, y: f32, size: f32, text: impl Into<String>) {
        if let Some(page) = self.pages.get_mut(page) {
            page.stamps.push(TextStamp {
                x,
                y,
                size,
                text: text.into(),
            });
        }
    }

    /// Serialize the finished document
    ///
    /// # Errors
    /// `RenderError::SerializeFailed` if serialization fails
    pub fn to_bytes(&self) -> RenderResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(RenderError::SerializeFailed)
    }

    /// Parse a previously serialized document
    ///
    /// # Errors
    /// `RenderError::SerializeFailed` if the bytes do not parse
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        serde_json::from_slice(bytes).map_err(RenderError::SerializeFailed)
    }

    /// All stamps across all pages, for inspection
    pub fn all_stamps(&self) -> impl Iterator<Item = &TextStamp> {
        self.pages.iter().flat_map(|p| p.stamps.iter())
    }

    /// Find a stamp by its exact text
    #[must_use]
    pub fn find_stamp(&self, text: &str) -> Option<&TextStamp> {
        self.all_stamps().find(|s| s.text == text)
    }
}
