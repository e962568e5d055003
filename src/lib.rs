//! # omexml - An OME-XML Metadata Model and Store
//!
//! `omexml` is an in-memory implementation of the OME (Open Microscopy
//! Environment) 2016-06 metadata schema: the object tree describing images,
//! pixel geometry, instruments, regions of interest, screening plates, and
//! structured annotations, together with a metadata store exposing a
//! uniform accessor surface over that tree.
//!
//! ## Key Features
//!
//! - **Typed object model**: every schema node is a plain Rust struct with
//!   typed scalars, schema enumerations, and unit-carrying quantities.
//!
//! - **Uniform metadata store**: indexed setters auto-create the ancestor
//!   chain down to the addressed node, getters navigate without side
//!   effects, counters report child collection sizes.
//!
//! - **ID-based reference graph**: cross-references stay ID-valued; the
//!   store registers every object and queued link so a resolution pass can
//!   report dangling references and duplicate IDs.
//!
//! - **Direct OME-XML I/O**: a streaming quick-xml parser and a canonical
//!   writer for the fixed schema, with no binding framework in between.
//!
//! - **Document validation**: link-graph, ID, pixel-geometry, and
//!   plate-grid checks with a printable report.
//!
//! ## Quick Start
//!
//! ```rust
//! use omexml::prelude::*;
//!
//! // Build a document through the store
//! let mut store = OmeXmlMetadata::new();
//! store.set_image_id("Image:0", 0);
//! store.set_image_name("embryo_t01", 0);
//! store.set_pixels_id("Pixels:0", 0);
//! store.set_pixels_size_x(512, 0);
//! store.set_pixels_size_y(512, 0);
//! store.set_pixels_physical_size_x(Length::micrometers(0.65), 0);
//! store.set_channel_id("Channel:0:0", 0, 0);
//! store.set_channel_name("DAPI", 0, 0);
//!
//! // Every reference must land on a registered ID
//! assert!(store.resolve_references().is_clean());
//!
//! // Serialize and parse back
//! let xml = store.to_xml()?;
//! let restored = OmeXmlMetadata::from_xml(&xml)?;
//! assert_eq!(restored.image_name(0), Some("embryo_t01"));
//! # Ok::<(), omexml::xml::OmeXmlError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`primitives`]: unit vocabularies, quantities, schema enumerations,
//!   colors, and ID helpers
//! - [`model`]: the OME object tree as plain mutable records
//! - [`graph`]: ID registry and reference resolution
//! - [`store`]: the uniform accessor surface with auto-vivification
//! - [`xml`]: OME-XML reader and writer
//! - [`validator`]: document-level checks

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
// Indexed accessors routinely take several indices
#![allow(clippy::too_many_arguments)]

pub mod graph;
pub mod model;
pub mod primitives;
pub mod store;
pub mod validator;
pub mod xml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::graph::{ObjectRegistry, PendingReference, Resolution};
    pub use crate::model::{
        Annotation, AnnotationValue, Channel, Dataset, Image, Instrument, LightSource,
        LightSourceKind, MapPair, Ome, Pixels, Plane, Plate, Project, Roi, Screen, Shape,
        ShapeGeometry, StructuredAnnotations, Well,
    };
    pub use crate::primitives::{
        lsid, new_uuid_urn, Color, DimensionOrder, ElectricPotential, Frequency, Length,
        PixelType, Power, Pressure, Temperature, Time, UnitsElectricPotential, UnitsFrequency,
        UnitsLength, UnitsPower, UnitsPressure, UnitsTemperature, UnitsTime,
    };
    pub use crate::store::OmeXmlMetadata;
    pub use crate::validator::{validate_store, ValidationReport};
    pub use crate::xml::{read_document, read_document_str, write_document, OmeXmlError};
}
