//! Store error taxonomy
//!
//! The failure conditions a render or expansion can surface from its store
//! seams. `CatalogUnavailable` and `TemplateUnavailable` abort the current
//! operation entirely; per-item equipment failures never reach this level.

use std::path::PathBuf;

/// Errors raised by the store seams
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No show record with the requested identifier
    #[error("show record not found: {0}")]
    RecordNotFound(String),

    /// Equipment catalog could not be loaded
    #[error("equipment catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Template missing or unreadable
    #[error("template unavailable: '{name}': {message}")]
    TemplateUnavailable { name: String, message: String },

    /// Rendered document could not be written
    #[error("persist failure at {path}: {source}")]
    PersistFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create record-not-found error for id
    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound(id.into())
    }

    /// Create catalog-unavailable error with cause description
    pub fn catalog_unavailable(message: impl Into<String>) -> Self {
        Self::CatalogUnavailable(message.into())
    }

    /// Create template-unavailable error for template name
    pub fn template_unavailable(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateUnavailable {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create persist-failure error for output path
    pub fn persist_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PersistFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_display() {
        let err = StoreError::record_not_found("SH1001");
        assert_eq!(err.to_string(), "show record not found: SH1001");
    }

    #[test]
    fn template_unavailable_display() {
        let err = StoreError::template_unavailable("dsr_template", "no such file");
        assert!(err.to_string().contains("template unavailable"));
        assert!(err.to_string().contains("dsr_template"));
    }

    #[test]
    fn persist_failure_has_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = StoreError::persist_failure("/out/dsr.json", io);
        assert!(err.source().is_some());
    }
}
