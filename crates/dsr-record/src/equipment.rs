//! Equipment catalog entries and parsed equipment lines
//!
//! Catalog entries are read-only reference data maintained outside the
//! core. Brand+model pairs are human-distinguishable but not guaranteed
//! unique, so resolution against them is heuristic rather than key lookup.

use serde::{Deserialize, Serialize};

/// One reference item of the equipment catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentCatalogEntry {
    pub brand: String,
    pub model: String,
    /// Equipment type, e.g. "RGB laser projector"
    pub kind: Option<String>,
    /// Rated power in milliwatts
    pub power_mw: Option<u32>,
    /// Emission wavelengths, e.g. `["638nm", "520nm", "450nm"]`
    pub wavelengths: Vec<String>,
    /// Nominal Ocular Hazard Distance in metres
    pub nohd_m: Option<String>,
    pub beam_divergence: Option<String>,
}

impl EquipmentCatalogEntry {
    /// Create an entry with brand and model only
    #[must_use]
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// With rated power in milliwatts
    #[must_use]
    pub fn with_power_mw(mut self, power_mw: u32) -> Self {
        self.power_mw = Some(power_mw);
        self
    }

    /// With NOHD in metres
    #[must_use]
    pub fn with_nohd_m(mut self, nohd_m: impl Into<String>) -> Self {
        self.nohd_m = Some(nohd_m.into());
        self
    }

    /// With emission wavelengths
    #[must_use]
    pub fn with_wavelengths<I, S>(mut self, wavelengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wavelengths = wavelengths.into_iter().map(Into::into).collect();
        self
    }

    /// The `"<brand> <model>"` display name matching runs against
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Resolution outcome for one equipment-list token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A catalog entry satisfied one of the matching tiers
    Resolved(EquipmentCatalogEntry),
    /// No catalog entry matched by any tier
    NotFound,
    /// The token could not be processed; carries the failure description
    Unparseable(String),
}

/// One token of an equipment-list string with its resolution outcome
///
/// Transient: created during expansion, consumed by the formatter, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEquipmentLine {
    /// Requested quantity from the `<n> x` prefix
    pub quantity: u32,
    /// Free-text description up to the next `;`
    pub description: String,
    pub resolution: Resolution,
}

impl ParsedEquipmentLine {
    /// Line resolved against a catalog entry
    #[must_use]
    pub fn resolved(
        quantity: u32,
        description: impl Into<String>,
        entry: EquipmentCatalogEntry,
    ) -> Self {
        Self {
            quantity,
            description: description.into(),
            resolution: Resolution::Resolved(entry),
        }
    }

    /// Line with no catalog match; quantity and description preserved
    #[must_use]
    pub fn not_found(quantity: u32, description: impl Into<String>) -> Self {
        Self {
            quantity,
            description: description.into(),
            resolution: Resolution::NotFound,
        }
    }

    /// Line that failed processing; never aborts the batch
    #[must_use]
    pub fn unparseable(
        quantity: u32,
        description: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            description: description.into(),
            resolution: Resolution::Unparseable(error.into()),
        }
    }

    /// The resolved catalog entry, if any
    #[must_use]
    pub fn entry(&self) -> Option<&EquipmentCatalogEntry> {
        match &self.resolution {
            Resolution::Resolved(entry) => Some(entry),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }

    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.resolution, Resolution::NotFound)
    }

    #[inline]
    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        matches!(self.resolution, Resolution::Unparseable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_brand_and_model() {
        let entry = EquipmentCatalogEntry::new("ClubMax", "1800 RGB");
        assert_eq!(entry.full_name(), "ClubMax 1800 RGB");
    }

    #[test]
    fn entry_builders() {
        let entry = EquipmentCatalogEntry::new("ClubMax", "1800 RGB")
            .with_power_mw(1800)
            .with_nohd_m("3")
            .with_wavelengths(["638nm", "520nm", "450nm"]);

        assert_eq!(entry.power_mw, Some(1800));
        assert_eq!(entry.nohd_m.as_deref(), Some("3"));
        assert_eq!(entry.wavelengths.len(), 3);
    }

    #[test]
    fn line_outcome_predicates() {
        let entry = EquipmentCatalogEntry::new("ClubMax", "1800 RGB");
        let resolved = ParsedEquipmentLine::resolved(2, "clubmax 1800 rgb", entry.clone());
        assert!(resolved.is_resolved());
        assert_eq!(resolved.entry(), Some(&entry));

        let missing = ParsedEquipmentLine::not_found(3, "Unknown Brand Widget");
        assert!(missing.is_not_found());
        assert_eq!(missing.quantity, 3);
        assert_eq!(missing.description, "Unknown Brand Widget");
        assert!(missing.entry().is_none());

        let broken = ParsedEquipmentLine::unparseable(0, "9999999999 x Thing", "quantity out of range");
        assert!(broken.is_unparseable());
    }

    #[test]
    fn entry_deserializes_partial_rows() {
        let entry: EquipmentCatalogEntry =
            serde_json::from_str(r#"{"brand":"ClubMax","model":"1800 RGB"}"#).unwrap();
        assert_eq!(entry.brand, "ClubMax");
        assert!(entry.power_mw.is_none());
        assert!(entry.wavelengths.is_empty());
    }
}
