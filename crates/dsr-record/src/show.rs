//! Show catalog records
//!
//! One [`ShowRecord`] per show. Most fields are free-form strings sourced
//! from the surrounding application; safety-checklist flags carry an
//! explicit [`YesNo`] once set and are skipped entirely at render time when
//! unset.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Normalized display value for a safety-checklist flag
///
/// Source data is loose: flags arrive as `true`, `"true"` or `"Yes"`, and
/// any other explicitly-set value means no. An unset flag is represented as
/// `Option::<YesNo>::None` and never stamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Normalize a loose source value
    #[must_use]
    pub fn from_loose(raw: &str) -> Self {
        if raw == "true" || raw == "Yes" {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// The literal display string stamped onto the document
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Check for an affirmative flag
    #[inline]
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for YesNo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LooseVisitor;

        impl Visitor<'_> for LooseVisitor {
            type Value = YesNo;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or a yes/no string")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<YesNo, E> {
                Ok(YesNo::from(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<YesNo, E> {
                Ok(YesNo::from_loose(value))
            }
        }

        deserializer.deserialize_any(LooseVisitor)
    }
}

/// One row of the show catalog
///
/// The identifier is unique within the catalog. `needs_regeneration` is
/// true whenever any field changes and false immediately after a document
/// is produced; it is the only field the render core itself mutates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowRecord {
    pub id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    /// Free status string: Planning / Preshow Done / Setup Done /
    /// Completed / Canceled / Void
    pub status: Option<String>,
    pub show_times: Option<String>,

    // Venue
    pub venue: Option<String>,
    pub venue_address: Option<String>,
    pub venue_phone: Option<String>,

    // Client
    pub client: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,

    // Laser safety officer
    pub lso_name: Option<String>,
    pub lso_contact: Option<String>,
    pub lso_email: Option<String>,

    // Operator and crew
    pub operator_name: Option<String>,
    pub operator_contact: Option<String>,
    pub crew: Option<String>,

    // Equipment
    /// Raw equipment-list field, e.g. `"2 x Brand Model; 1 x Other Model"`
    pub equipment_list: Option<String>,
    /// Pre-computed display block; when present the renderer uses it
    /// instead of re-expanding `equipment_list`
    pub formatted_equipment_list: Option<String>,

    // Safety checklist
    pub aviation_needed: Option<YesNo>,
    pub notam_issued: Option<YesNo>,
    pub venue_consulted: Option<YesNo>,
    pub laser_area_signed: Option<YesNo>,
    pub lasers_securely_mounted: Option<YesNo>,
    pub crew_briefed: Option<YesNo>,
    pub emergency_stops_tested: Option<YesNo>,
    pub lasers_focused: Option<YesNo>,
    pub beam_paths_verified: Option<YesNo>,
    pub beams_within_zones: Option<YesNo>,

    // Notes
    pub venue_consulted_notes: Option<String>,
    pub notam_notes: Option<String>,
    pub e_stop_testing_notes: Option<String>,
    pub show_notes: Option<String>,

    /// Regeneration flag: the rendered document is stale
    pub needs_regeneration: bool,
}

impl ShowRecord {
    /// Create an empty record with the given identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// With show name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With raw equipment-list string
    #[must_use]
    pub fn with_equipment_list(mut self, raw: impl Into<String>) -> Self {
        self.equipment_list = Some(raw.into());
        self
    }

    /// With regeneration flag set
    #[must_use]
    pub fn needing_regeneration(mut self) -> Self {
        self.needs_regeneration = true;
        self
    }

    /// Set every safety-checklist flag from one loose source value
    pub fn set_all_checklist_flags(&mut self, raw: &str) {
        let flag = Some(YesNo::from_loose(raw));
        self.aviation_needed = flag;
        self.notam_issued = flag;
        self.venue_consulted = flag;
        self.laser_area_signed = flag;
        self.lasers_securely_mounted = flag;
        self.crew_briefed = flag;
        self.emergency_stops_tested = flag;
        self.lasers_focused = flag;
        self.beam_paths_verified = flag;
        self.beams_within_zones = flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_from_loose() {
        assert_eq!(YesNo::from_loose("true"), YesNo::Yes);
        assert_eq!(YesNo::from_loose("Yes"), YesNo::Yes);
        assert_eq!(YesNo::from_loose("false"), YesNo::No);
        assert_eq!(YesNo::from_loose("no"), YesNo::No);
        assert_eq!(YesNo::from_loose(""), YesNo::No);
        // normalization is deliberately case-sensitive, like the source data
        assert_eq!(YesNo::from_loose("TRUE"), YesNo::No);
    }

    #[test]
    fn yes_no_display() {
        assert_eq!(YesNo::Yes.to_string(), "Yes");
        assert_eq!(YesNo::No.to_string(), "No");
    }

    #[test]
    fn yes_no_deserializes_bool_and_string() {
        let from_bool: YesNo = serde_json::from_str("true").unwrap();
        assert_eq!(from_bool, YesNo::Yes);

        let from_str: YesNo = serde_json::from_str("\"Yes\"").unwrap();
        assert_eq!(from_str, YesNo::Yes);

        let negative: YesNo = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(negative, YesNo::No);
    }

    #[test]
    fn record_builder() {
        let record = ShowRecord::new("SH1001")
            .with_name("Harbor Lights")
            .with_equipment_list("1 x ClubMax 1800 RGB;")
            .needing_regeneration();

        assert_eq!(record.id, "SH1001");
        assert_eq!(record.name.as_deref(), Some("Harbor Lights"));
        assert!(record.needs_regeneration);
    }

    #[test]
    fn record_deserializes_partial_rows() {
        let record: ShowRecord =
            serde_json::from_str(r#"{"id":"SH7","venue_consulted":"true"}"#).unwrap();
        assert_eq!(record.id, "SH7");
        assert_eq!(record.venue_consulted, Some(YesNo::Yes));
        assert!(record.name.is_none());
        assert!(!record.needs_regeneration);
    }

    #[test]
    fn set_all_checklist_flags() {
        let mut record = ShowRecord::new("SH1");
        record.set_all_checklist_flags("false");
        assert_eq!(record.beams_within_zones, Some(YesNo::No));
        assert_eq!(record.aviation_needed, Some(YesNo::No));

        record.set_all_checklist_flags("Yes");
        assert_eq!(record.crew_briefed, Some(YesNo::Yes));
    }
}
