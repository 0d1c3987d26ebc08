//! Equipment-list expansion
//!
//! Parses a free-text equipment-list field into `<quantity> x <description>`
//! tokens and resolves each against the reference catalog through three
//! tiers, first qualifying entry in catalog order wins:
//! 1. exact: `"<brand> <model>"` equals the description, case-insensitive
//! 2. brand + partial model: the description contains the brand and either
//!    contains the model or the model contains the description with the
//!    brand stripped
//! 3. substring containment either direction between `"<brand> <model>"`
//!    and the description
//!
//! Segments that do not match the token pattern are silently skipped.
//! Per-item failures are downgraded to flagged line items; only a catalog
//! load failure aborts the batch.

use crate::error::ExpandResult;
use dsr_record::{CatalogStore, EquipmentCatalogEntry, ParsedEquipmentLine};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

static ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*x\s*([^;]+)").expect("item pattern is valid"));

/// Which matching tier resolved an item; diagnostic only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    BrandPartialModel,
    Substring,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::BrandPartialModel => "brand+partial-model",
            Self::Substring => "substring",
        };
        f.write_str(name)
    }
}

/// One raw `<quantity> x <description>` token
///
/// `quantity` is `None` when the digits overflow the quantity type; such
/// tokens become unparseable line items rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub(crate) quantity: Option<u32>,
    pub(crate) digits: String,
    pub(crate) description: String,
}

/// Tokenize an equipment-list string
///
/// Segments not matching the `<quantity> x <description>` pattern are
/// skipped without diagnostics, matching the source tool's behavior.
pub(crate) fn tokenize(raw: &str) -> Vec<RawToken> {
    ITEM_PATTERN
        .captures_iter(raw)
        .map(|cap| {
            let digits = cap[1].to_string();
            RawToken {
                quantity: digits.parse().ok(),
                digits,
                description: cap[2].trim().to_string(),
            }
        })
        .collect()
}

/// Find the first catalog entry satisfying a matching tier
fn find_match<'a>(
    entries: &'a [EquipmentCatalogEntry],
    description: &str,
) -> Option<(&'a EquipmentCatalogEntry, MatchTier)> {
    let desc = description.to_lowercase();

    if let Some(entry) = entries
        .iter()
        .find(|e| e.full_name().to_lowercase() == desc)
    {
        return Some((entry, MatchTier::Exact));
    }

    for entry in entries {
        let brand = entry.brand.to_lowercase();
        let model = entry.model.to_lowercase();
        if desc.contains(&brand) {
            let remainder = desc.replacen(&brand, "", 1);
            if desc.contains(&model) || model.contains(remainder.trim()) {
                return Some((entry, MatchTier::BrandPartialModel));
            }
        }
    }

    for entry in entries {
        let full_name = entry.full_name().to_lowercase();
        if full_name.contains(&desc) || desc.contains(&full_name) {
            return Some((entry, MatchTier::Substring));
        }
    }

    None
}

fn resolve_token(entries: &[EquipmentCatalogEntry], token: RawToken) -> ParsedEquipmentLine {
    let Some(quantity) = token.quantity else {
        tracing::warn!(digits = %token.digits, "equipment quantity out of range");
        return ParsedEquipmentLine::unparseable(
            0,
            token.description,
            format!("quantity out of range: {}", token.digits),
        );
    };

    match find_match(entries, &token.description) {
        Some((entry, tier)) => {
            tracing::debug!(
                description = %token.description,
                brand = %entry.brand,
                model = %entry.model,
                tier = %tier,
                "resolved equipment item",
            );
            ParsedEquipmentLine::resolved(quantity, token.description, entry.clone())
        }
        None => {
            tracing::debug!(
                description = %token.description,
                "no catalog match for equipment item",
            );
            ParsedEquipmentLine::not_found(quantity, token.description)
        }
    }
}

/// Resolves equipment-list strings against the reference catalog
///
/// The catalog is re-read on every call; nothing is cached between
/// expansions.
pub struct EquipmentExpander {
    catalog: Arc<dyn CatalogStore>,
}

impl EquipmentExpander {
    /// Create an expander over a catalog store
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Expand a raw equipment-list string into resolved line items
    ///
    /// Empty or blank input yields an empty list, not an error. Output
    /// order matches token order. An empty catalog resolves every item as
    /// not-found.
    ///
    /// # Errors
    /// `ExpandError::CatalogUnavailable` if the catalog store fails; this
    /// aborts the whole expansion.
    pub async fn expand(&self, raw: &str) -> ExpandResult<Vec<ParsedEquipmentLine>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.catalog.get_all().await?;
        let tokens = tokenize(raw);
        tracing::debug!(
            items = tokens.len(),
            catalog_entries = entries.len(),
            "expanding equipment list",
        );

        Ok(tokens
            .into_iter()
            .map(|token| resolve_token(&entries, token))
            .collect())
    }
}
