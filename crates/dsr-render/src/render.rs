//! Show document renderer
//!
//! Per-call pipeline: load template → resolve equipment → stamp fields →
//! serialize → persist → clear the regeneration flag. No state is retained
//! between calls; the same record and template produce identical bytes.
//!
//! Clearing the regeneration flag is a separate store write after the
//! document is persisted, so a crash in between leaves the flag set and the
//! show is re-rendered on the next sweep: regeneration is at-least-once.

use crate::error::{RenderError, RenderResult};
use crate::layout::{Field, Layout};
use crate::template::{RenderedDocument, Template};
use dsr_equipment::{format_equipment_lines, EquipmentExpander};
use dsr_record::{CatalogStore, DocumentStore, RecordStore, ShowRecord, TemplateStore, YesNo};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Name the template store resolves
    pub template_name: String,
    /// Field and equipment-block placements
    pub layout: Layout,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With template name
    #[must_use]
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// With layout descriptor
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_name: "dsr_template".to_string(),
            layout: Layout::default(),
        }
    }
}

/// Renders finished record documents for shows
///
/// Holds the four store seams and the equipment expander; every call is
/// independent and re-reads catalog and template.
pub struct ShowDocumentRenderer {
    records: Arc<dyn RecordStore>,
    templates: Arc<dyn TemplateStore>,
    documents: Arc<dyn DocumentStore>,
    expander: EquipmentExpander,
    config: RenderConfig,
}

impl ShowDocumentRenderer {
    /// Create a renderer over the store seams
    #[must_use]
    pub fn new(
        records: Arc<dyn RecordStore>,
        catalog: Arc<dyn CatalogStore>,
        templates: Arc<dyn TemplateStore>,
        documents: Arc<dyn DocumentStore>,
        config: RenderConfig,
    ) -> Self {
        Self {
            records,
            templates,
            documents,
            expander: EquipmentExpander::new(catalog),
            config,
        }
    }

    /// Record store handle, shared with the sweep
    pub(crate) fn records(&self) -> &dyn RecordStore {
        self.records.as_ref()
    }

    /// Render the document for one show and clear its regeneration flag
    ///
    /// # Errors
    /// - `StoreError::RecordNotFound` if the show does not exist
    /// - `StoreError::CatalogUnavailable` if equipment expansion cannot
    ///   load the catalog
    /// - `StoreError::TemplateUnavailable` / `RenderError::TemplateUnavailable`
    ///   if the template is missing or corrupt
    /// - `StoreError::PersistFailure` if the output cannot be written
    pub async fn render_show_document(&self, show_id: &str) -> RenderResult<PathBuf> {
        tracing::info!(show_id, "rendering show document");

        let record = self.records.get(show_id).await?;
        let template_bytes = self.templates.load(&self.config.template_name).await?;
        let template = Template::from_bytes(&self.config.template_name, &template_bytes)?;

        let formatted = self.formatted_equipment(&record).await?;
        let document = self.stamp_fields(&template, &record, formatted.as_deref());
        let bytes = document.to_bytes()?;

        let path = self.documents.save(show_id, &bytes).await?;
        self.records.set_regeneration_flag(show_id, false).await?;

        tracing::info!(show_id, path = %path.display(), "show document rendered");
        Ok(path)
    }

    /// The display block for the equipment region
    ///
    /// A pre-computed block on the record wins; otherwise the raw
    /// equipment-list field is expanded and formatted. Returns `None` when
    /// there is nothing to display.
    async fn formatted_equipment(&self, record: &ShowRecord) -> RenderResult<Option<String>> {
        if let Some(block) = &record.formatted_equipment_list {
            if !block.is_empty() {
                return Ok(Some(block.clone()));
            }
        }

        match record.equipment_list.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let items = self.expander.expand(raw).await?;
                let block = format_equipment_lines(&items);
                Ok(if block.is_empty() { None } else { Some(block) })
            }
            _ => Ok(None),
        }
    }

    /// Stamp every present field onto the template pages
    ///
    /// Absent fields leave the template's blank exactly as-is. Placements
    /// whose page index exceeds the template's page count are skipped.
    fn stamp_fields(
        &self,
        template: &Template,
        record: &ShowRecord,
        formatted_equipment: Option<&str>,
    ) -> RenderedDocument {
        let mut document = RenderedDocument::from_template(template);

        for placement in &self.config.layout.placements {
            let Some(page) = template.pages.get(placement.page) else {
                continue;
            };
            let Some(value) = field_value(record, placement.field) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            document.stamp(
                placement.page,
                placement.x,
                page.height - placement.y,
                placement.size,
                value,
            );
        }

        let region = &self.config.layout.equipment;
        if let Some(page) = template.pages.get(region.page) {
            if let Some(block) = formatted_equipment {
                let shown = block.lines().take(region.max_lines);
                for (index, line) in shown.enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let offset = region.line_height * index as f32;
                    document.stamp(
                        region.page,
                        region.x,
                        page.height - region.y - offset,
                        region.size,
                        line,
                    );
                }
            } else if let Some(raw) = record.equipment_list.as_deref() {
                // expansion produced nothing displayable; stamp the raw
                // field as a single line rather than leaving the region
                // blank
                if !raw.is_empty() {
                    document.stamp(
                        region.page,
                        region.x,
                        page.height - region.y,
                        region.size,
                        raw,
                    );
                }
            }
        }

        document
    }
}

fn flag(value: Option<YesNo>) -> Option<String> {
    // unset flags are skipped entirely; "Yes"/"No" is stamped only when the
    // source set the flag explicitly
    value.map(|v| v.as_str().to_string())
}

fn field_value(record: &ShowRecord, field: Field) -> Option<String> {
    match field {
        Field::Id => Some(record.id.clone()),
        Field::Name => record.name.clone(),
        Field::Date => record.date.clone(),
        Field::Status => record.status.clone(),
        Field::ShowTimes => record.show_times.clone(),
        Field::Venue => record.venue.clone(),
        Field::VenuePhone => record.venue_phone.clone(),
        Field::VenueAddress => record.venue_address.clone(),
        Field::VenueConsulted => flag(record.venue_consulted),
        Field::LaserAreaSigned => flag(record.laser_area_signed),
        Field::VenueConsultedNotes => record.venue_consulted_notes.clone(),
        Field::Client => record.client.clone(),
        Field::ClientEmail => record.client_email.clone(),
        Field::ClientPhone => record.client_phone.clone(),
        Field::LsoName => record.lso_name.clone(),
        Field::LsoContact => record.lso_contact.clone(),
        Field::LsoEmail => record.lso_email.clone(),
        Field::OperatorName => record.operator_name.clone(),
        Field::OperatorContact => record.operator_contact.clone(),
        Field::Crew => record.crew.clone(),
        Field::AviationNeeded => flag(record.aviation_needed),
        Field::NotamIssued => flag(record.notam_issued),
        Field::NotamNotes => record.notam_notes.clone(),
        Field::LasersSecurelyMounted => flag(record.lasers_securely_mounted),
        Field::CrewBriefed => flag(record.crew_briefed),
        Field::EmergencyStopsTested => flag(record.emergency_stops_tested),
        Field::EStopTestingNotes => record.e_stop_testing_notes.clone(),
        Field::LasersFocused => flag(record.lasers_focused),
        Field::BeamPathsVerified => flag(record.beam_paths_verified),
        Field::BeamsWithinZones => flag(record.beams_within_zones),
        Field::ShowNotes => record.show_notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_dsr_layout;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.template_name, "dsr_template");
        assert_eq!(config.layout, default_dsr_layout());
    }

    #[test]
    fn config_builders() {
        let config = RenderConfig::new().with_template_name("custom_template");
        assert_eq!(config.template_name, "custom_template");
    }

    #[test]
    fn config_json_roundtrip() {
        let config = RenderConfig::new().with_template_name("custom");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_config_json_uses_defaults() {
        let parsed: RenderConfig = serde_json::from_str(r#"{"template_name":"t"}"#).unwrap();
        assert_eq!(parsed.template_name, "t");
        assert_eq!(parsed.layout, Layout::default());
    }

    #[test]
    fn field_value_skips_unset_flags() {
        let record = ShowRecord::new("SH1");
        assert_eq!(field_value(&record, Field::AviationNeeded), None);

        let mut record = record;
        record.aviation_needed = Some(YesNo::No);
        assert_eq!(
            field_value(&record, Field::AviationNeeded).as_deref(),
            Some("No")
        );
    }

    #[test]
    fn field_value_reads_strings() {
        let record = ShowRecord::new("SH1").with_name("Harbor Lights");
        assert_eq!(field_value(&record, Field::Id).as_deref(), Some("SH1"));
        assert_eq!(
            field_value(&record, Field::Name).as_deref(),
            Some("Harbor Lights")
        );
        assert_eq!(field_value(&record, Field::Venue), None);
    }
}
