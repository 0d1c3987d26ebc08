//! Layout descriptor
//!
//! The field-to-position mapping for the DSR template, kept as plain data
//! so layout changes never require code changes. Coordinates: `x` from the
//! left edge, `y` from the *top* edge of the page; stamping converts to the
//! document's bottom-left origin using the actual page height. The built-in
//! default mirrors the standard two-content-page DSR geometry.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};

/// A stampable field of the show record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Name,
    Date,
    Status,
    ShowTimes,
    Venue,
    VenuePhone,
    VenueAddress,
    VenueConsulted,
    LaserAreaSigned,
    VenueConsultedNotes,
    Client,
    ClientEmail,
    ClientPhone,
    LsoName,
    LsoContact,
    LsoEmail,
    OperatorName,
    OperatorContact,
    Crew,
    AviationNeeded,
    NotamIssued,
    NotamNotes,
    LasersSecurelyMounted,
    CrewBriefed,
    EmergencyStopsTested,
    EStopTestingNotes,
    LasersFocused,
    BeamPathsVerified,
    BeamsWithinZones,
    ShowNotes,
}

/// One field placement on the template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub field: Field,
    /// Zero-based page index; placements beyond the template's page count
    /// are skipped
    pub page: usize,
    pub x: f32,
    /// Offset from the top edge of the page
    pub y: f32,
    pub size: f32,
}

/// Multi-line region reserved for the formatted equipment block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRegion {
    pub page: usize,
    pub x: f32,
    /// Offset from the top edge for the first line
    pub y: f32,
    pub size: f32,
    /// Vertical step between lines
    pub line_height: f32,
    /// Display lines beyond this count are silently dropped
    pub max_lines: usize,
}

/// Complete layout: field placements plus the equipment block region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub equipment: EquipmentRegion,
}

impl Layout {
    /// Parse a layout descriptor from JSON bytes
    ///
    /// # Errors
    /// `RenderError::InvalidLayout` if the bytes do not parse
    pub fn from_json(bytes: &[u8]) -> RenderResult<Self> {
        serde_json::from_slice(bytes).map_err(RenderError::InvalidLayout)
    }

    /// Placement for a field, if the layout has one
    #[must_use]
    pub fn placement(&self, field: Field) -> Option<&Placement> {
        self.placements.iter().find(|p| p.field == field)
    }
}

impl Default for Layout {
    fn default() -> Self {
        default_dsr_layout()
    }
}

const MARGIN: f32 = 50.0;
const FIELD_SIZE: f32 = 10.0;

fn place(field: Field, page: usize, x: f32, y: f32) -> Placement {
    Placement {
        field,
        page,
        x: MARGIN + x,
        y: MARGIN + y,
        size: FIELD_SIZE,
    }
}

/// The standard DSR layout
///
/// Page 0 carries show, venue, client, LSO and operator details; page 1
/// carries the safety checklist and the equipment block.
#[must_use]
pub fn default_dsr_layout() -> Layout {
    use Field::{
        AviationNeeded, BeamPathsVerified, BeamsWithinZones, Client, ClientEmail, ClientPhone,
        Crew, CrewBriefed, Date, EStopTestingNotes, EmergencyStopsTested, Id, LaserAreaSigned,
        LasersFocused, LasersSecurelyMounted, LsoContact, LsoEmail, LsoName, Name, NotamIssued,
        NotamNotes, OperatorContact, OperatorName, ShowNotes, ShowTimes, Status, Venue,
        VenueAddress, VenueConsulted, VenueConsultedNotes, VenuePhone,
    };

    Layout {
        placements: vec![
            // Page 1: show details
            place(Id, 0, 100.0, 85.0),
            place(Name, 0, 380.0, 85.0),
            place(Date, 0, 100.0, 120.0),
            place(Status, 0, 380.0, 120.0),
            place(ShowTimes, 0, 100.0, 155.0),
            place(Venue, 0, 100.0, 190.0),
            place(VenuePhone, 0, 380.0, 190.0),
            place(VenueAddress, 0, 100.0, 225.0),
            place(VenueConsulted, 0, 100.0, 260.0),
            place(LaserAreaSigned, 0, 350.0, 260.0),
            place(VenueConsultedNotes, 0, 100.0, 295.0),
            // Page 1: client information
            place(Client, 0, 100.0, 355.0),
            place(ClientEmail, 0, 100.0, 390.0),
            place(ClientPhone, 0, 380.0, 390.0),
            // Page 1: LSO information
            place(LsoName, 0, 100.0, 465.0),
            place(LsoContact, 0, 100.0, 500.0),
            place(LsoEmail, 0, 100.0, 535.0),
            // Page 1: operator information
            place(OperatorName, 0, 100.0, 595.0),
            place(OperatorContact, 0, 100.0, 630.0),
            place(Crew, 0, 100.0, 665.0),
            // Page 2: safety checklist
            place(AviationNeeded, 1, 200.0, 95.0),
            place(NotamIssued, 1, 200.0, 120.0),
            place(NotamNotes, 1, 100.0, 145.0),
            place(LasersSecurelyMounted, 1, 200.0, 170.0),
            place(CrewBriefed, 1, 200.0, 195.0),
            place(EmergencyStopsTested, 1, 200.0, 220.0),
            place(EStopTestingNotes, 1, 100.0, 245.0),
            place(LasersFocused, 1, 200.0, 270.0),
            place(BeamPathsVerified, 1, 200.0, 295.0),
            place(BeamsWithinZones, 1, 200.0, 320.0),
            place(ShowNotes, 1, 100.0, 350.0),
        ],
        equipment: EquipmentRegion {
            page: 1,
            x: MARGIN + 100.0,
            y: MARGIN + 445.0,
            size: 9.0,
            line_height: 15.0,
            max_lines: 6,
        },
    }
}
