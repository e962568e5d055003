//! The OME 2016-06 object tree.
//!
//! Every node is a plain mutable record: scalar fields are `Option` unless
//! the schema makes them mandatory, child elements are `Vec`s, and
//! cross-references (`AnnotationRef`, `ImageRef`, ...) are stored as the
//! target's string ID. Linking IDs to objects is the job of
//! [`crate::graph`]; nothing in this module chases references.
//!
//! All nodes derive serde so a document can be dumped as JSON for quick
//! inspection alongside its canonical XML form.

mod annotation;
mod experiment;
mod image;
mod instrument;
mod plate;
mod project;
mod roi;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use annotation::{Annotation, AnnotationValue, BinaryFile, MapPair, StructuredAnnotations};
pub use experiment::{Experiment, MicrobeamManipulation};
pub use image::{
    Channel, DetectorSettings, Image, ImagingEnvironment, LightPath, LightSourceSettings,
    ObjectiveSettings, Pixels, Plane, StageLabel, TiffData, TiffDataUuid,
};
pub use instrument::{
    Detector, Dichroic, Filter, FilterSet, Instrument, LightSource, LightSourceKind, Microscope,
    Objective, TransmittanceRange,
};
pub use plate::{Plate, PlateAcquisition, Reagent, Screen, Well, WellSample};
pub use project::{Dataset, Experimenter, ExperimenterGroup, Project};
pub use roi::{parse_points, AffineTransform, Roi, Shape, ShapeGeometry};

/// Root of an OME document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ome {
    /// Document UUID (`urn:uuid:...`), identifying this exact file
    pub uuid: Option<String>,
    /// Name of the software that wrote the document
    pub creator: Option<String>,
    /// Projects grouping datasets
    pub projects: Vec<Project>,
    /// Datasets grouping images
    pub datasets: Vec<Dataset>,
    /// Experiment descriptions
    pub experiments: Vec<Experiment>,
    /// People involved in the acquisitions
    pub experimenters: Vec<Experimenter>,
    /// Groups of experimenters
    pub experimenter_groups: Vec<ExperimenterGroup>,
    /// Instruments the images were acquired on
    pub instruments: Vec<Instrument>,
    /// Acquired images
    pub images: Vec<Image>,
    /// Multi-well plates
    pub plates: Vec<Plate>,
    /// Screens grouping plates
    pub screens: Vec<Screen>,
    /// Regions of interest
    pub rois: Vec<Roi>,
    /// Structured annotation block
    pub structured_annotations: StructuredAnnotations,
}

impl Ome {
    /// Create an empty document root.
    pub fn new() -> Self {
        Self::default()
    }
}
