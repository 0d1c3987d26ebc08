//! Error types for equipment expansion
//!
//! Only a catalog-level failure aborts an expansion; per-item failures are
//! downgraded to flagged line items and never propagate.

use dsr_record::StoreError;

/// Errors during equipment-list expansion
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// The equipment catalog could not be loaded
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[from] StoreError),
}

/// Result type alias for expansion operations
pub type ExpandResult<T> = Result<T, ExpandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_store_error() {
        let err: ExpandError = StoreError::catalog_unavailable("equipment.csv missing").into();
        assert!(err.to_string().contains("catalog unavailable"));
        assert!(err.to_string().contains("equipment.csv missing"));
    }
}
