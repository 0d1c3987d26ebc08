//! Error types for document rendering
//!
//! Store-level conditions pass through unchanged; rendering adds the cases
//! where bytes were readable but not a valid template or layout. Any
//! failure aborts the whole render; partial documents are never persisted.

use dsr_equipment::ExpandError;
use dsr_record::StoreError;

/// Errors during a render call
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Store-level failure (record, catalog, template or persist)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Equipment expansion failed at the catalog level
    #[error(transparent)]
    Expand(#[from] ExpandError),

    /// Template bytes did not parse as a template document
    #[error("template unavailable: '{name}': {source}")]
    TemplateUnavailable {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Layout descriptor bytes did not parse
    #[error("invalid layout descriptor: {0}")]
    InvalidLayout(#[source] serde_json::Error),

    /// Rendered document failed to serialize
    #[error("document serialization failed: {0}")]
    SerializeFailed(#[source] serde_json::Error),
}

impl RenderError {
    /// Create template-unavailable error for corrupt template bytes
    pub fn template_unavailable(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::TemplateUnavailable {
            name: name.into(),
            source,
        }
    }
}

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_passes_through() {
        let err: RenderError = StoreError::record_not_found("SH1001").into();
        assert_eq!(err.to_string(), "show record not found: SH1001");
    }

    #[test]
    fn corrupt_template_display() {
        let source = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let err = RenderError::template_unavailable("dsr_template", source);
        assert!(err.to_string().contains("template unavailable"));
        assert!(err.to_string().contains("dsr_template"));
    }
}
