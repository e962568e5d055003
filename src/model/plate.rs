//! Multi-well plates, screens, and their contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::primitives::{Color, Length, NamingConvention};

/// A multi-well plate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plate {
    /// Plate ID (`Plate:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Plate status in the screening workflow
    pub status: Option<String>,
    /// External plate identifier (barcode)
    pub external_identifier: Option<String>,
    /// Number of rows
    pub rows: Option<u32>,
    /// Number of columns
    pub columns: Option<u32>,
    /// How rows are labelled
    pub row_naming_convention: Option<NamingConvention>,
    /// How columns are labelled
    pub column_naming_convention: Option<NamingConvention>,
    /// Origin offset X of well A1
    pub well_origin_x: Option<Length>,
    /// Origin offset Y of well A1
    pub well_origin_y: Option<Length>,
    /// Index of the field to display by default
    pub field_index: Option<u32>,
    /// The wells
    pub wells: Vec<Well>,
    /// Acquisition passes over this plate
    pub plate_acquisitions: Vec<PlateAcquisition>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Plate {
    /// Create a plate with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Find the well at a row/column position.
    pub fn well_at(&self, row: u32, column: u32) -> Option<&Well> {
        self.wells
            .iter()
            .find(|w| w.row == row && w.column == column)
    }
}

/// A single well of a plate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Well {
    /// Well ID (`Well:n:m`)
    pub id: String,
    /// Row position, 0-based
    pub row: u32,
    /// Column position, 0-based
    pub column: u32,
    /// External well identifier
    pub external_identifier: Option<String>,
    /// Well type (e.g. control designation)
    pub well_type: Option<String>,
    /// Display color
    pub color: Option<Color>,
    /// Reagent applied to this well
    pub reagent_ref: Option<String>,
    /// Fields imaged within this well
    pub well_samples: Vec<WellSample>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// One imaged field within a well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellSample {
    /// WellSample ID (`WellSample:n:m:k`)
    pub id: String,
    /// Position within the acquisition sequence
    pub index: Option<u32>,
    /// Stage position X of the field
    pub position_x: Option<Length>,
    /// Stage position Y of the field
    pub position_y: Option<Length>,
    /// Timestamp of the field acquisition
    pub timepoint: Option<DateTime<Utc>>,
    /// Image acquired at this field
    pub image_ref: Option<String>,
}

/// One acquisition pass over a plate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlateAcquisition {
    /// PlateAcquisition ID (`PlateAcquisition:n:m`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// When the pass started
    pub start_time: Option<DateTime<Utc>>,
    /// When the pass ended
    pub end_time: Option<DateTime<Utc>>,
    /// Maximum number of fields per well in this pass
    pub maximum_field_count: Option<u32>,
    /// Fields acquired during this pass
    pub well_sample_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// A screen grouping plates under a common protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Screen {
    /// Screen ID (`Screen:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Screen type description
    pub screen_type: Option<String>,
    /// Protocol name
    pub protocol_identifier: Option<String>,
    /// Protocol description
    pub protocol_description: Option<String>,
    /// Reagent set name
    pub reagent_set_identifier: Option<String>,
    /// Reagent set description
    pub reagent_set_description: Option<String>,
    /// Reagents used in the screen
    pub reagents: Vec<Reagent>,
    /// Plates belonging to the screen
    pub plate_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Screen {
    /// Create a screen with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A reagent applied during a screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reagent {
    /// Reagent ID (`Reagent:n:m`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Reagent catalogue identifier
    pub reagent_identifier: Option<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}
