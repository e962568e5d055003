//! Instrument hardware: microscope stand, light sources, detectors,
//! objectives, and the filter tree.

use serde::{Deserialize, Serialize};

use crate::primitives::{
    ArcType, Correction, DetectorType, ElectricPotential, FilamentType, FilterType, Frequency,
    Immersion, LaserMedium, LaserType, Length, MicroscopeType, Power, Pulse,
};

/// A microscope with its attached hardware.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instrument {
    /// Instrument ID (`Instrument:n`)
    pub id: String,
    /// The stand itself
    pub microscope: Option<Microscope>,
    /// Attached light sources
    pub light_sources: Vec<LightSource>,
    /// Attached detectors
    pub detectors: Vec<Detector>,
    /// Available objectives
    pub objectives: Vec<Objective>,
    /// Individual filters
    pub filters: Vec<Filter>,
    /// Matched filter sets
    pub filter_sets: Vec<FilterSet>,
    /// Dichroic mirrors
    pub dichroics: Vec<Dichroic>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Instrument {
    /// Create an instrument with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Look up a light source by ID.
    pub fn light_source(&self, id: &str) -> Option<&LightSource> {
        self.light_sources.iter().find(|ls| ls.id == id)
    }

    /// Look up a detector by ID.
    pub fn detector(&self, id: &str) -> Option<&Detector> {
        self.detectors.iter().find(|d| d.id == id)
    }
}

/// The microscope stand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Microscope {
    /// Stand configuration
    pub microscope_type: Option<MicroscopeType>,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
}

/// A light source of any kind.
///
/// The schema models lasers, arcs, filaments, LEDs, and generic excitation
/// sources as subtypes sharing one set of base attributes; here the base
/// lives on the struct and the subtype payload in [`LightSourceKind`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightSource {
    /// LightSource ID (`LightSource:n:m`)
    pub id: String,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Nominal output power
    pub power: Option<Power>,
    /// Subtype payload
    pub kind: LightSourceKind,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl LightSource {
    /// Create a light source with the given ID and subtype.
    pub fn new(id: impl Into<String>, kind: LightSourceKind) -> Self {
        Self {
            id: id.into(),
            manufacturer: None,
            model: None,
            serial_number: None,
            lot_number: None,
            power: None,
            kind,
            annotation_refs: Vec::new(),
        }
    }
}

/// Subtype payload of a light source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LightSourceKind {
    /// A laser
    Laser {
        /// Kind of laser
        laser_type: Option<LaserType>,
        /// Lasing medium
        laser_medium: Option<LaserMedium>,
        /// Principal emission wavelength
        wavelength: Option<Length>,
        /// Harmonic multiplication factor
        frequency_multiplication: Option<u32>,
        /// Whether the laser is tuneable
        tuneable: Option<bool>,
        /// Pulsing behavior
        pulse: Option<Pulse>,
        /// Whether a Pockels cell is fitted
        pockel_cell: Option<bool>,
        /// Pulse repetition rate
        repetition_rate: Option<Frequency>,
        /// Pump source for this laser
        pump_ref: Option<String>,
    },
    /// An arc lamp
    Arc {
        /// Lamp type
        arc_type: Option<ArcType>,
    },
    /// A filament lamp
    Filament {
        /// Lamp type
        filament_type: Option<FilamentType>,
    },
    /// A light-emitting diode
    LightEmittingDiode,
    /// An excitation source outside the fixed subtypes
    GenericExcitationSource {
        /// Free-form key/value description
        map: Vec<(String, String)>,
    },
}

impl Default for LightSourceKind {
    fn default() -> Self {
        LightSourceKind::LightEmittingDiode
    }
}

impl LightSourceKind {
    /// Schema element name of this subtype.
    pub fn element_name(&self) -> &'static str {
        match self {
            LightSourceKind::Laser { .. } => "Laser",
            LightSourceKind::Arc { .. } => "Arc",
            LightSourceKind::Filament { .. } => "Filament",
            LightSourceKind::LightEmittingDiode => "LightEmittingDiode",
            LightSourceKind::GenericExcitationSource { .. } => "GenericExcitationSource",
        }
    }

    /// An empty laser payload.
    pub fn laser() -> Self {
        LightSourceKind::Laser {
            laser_type: None,
            laser_medium: None,
            wavelength: None,
            frequency_multiplication: None,
            tuneable: None,
            pulse: None,
            pockel_cell: None,
            repetition_rate: None,
            pump_ref: None,
        }
    }
}

/// A detector attached to an instrument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Detector {
    /// Detector ID (`Detector:n:m`)
    pub id: String,
    /// Detector technology
    pub detector_type: Option<DetectorType>,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Nominal gain
    pub gain: Option<f64>,
    /// Nominal supply voltage
    pub voltage: Option<ElectricPotential>,
    /// Signal offset
    pub offset: Option<f64>,
    /// Optical zoom
    pub zoom: Option<f64>,
    /// Gain applied by the amplifier
    pub amplification_gain: Option<f64>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// An objective lens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Objective {
    /// Objective ID (`Objective:n:m`)
    pub id: String,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Optical correction
    pub correction: Option<Correction>,
    /// Designed immersion medium
    pub immersion: Option<Immersion>,
    /// Numerical aperture
    pub lens_na: Option<f64>,
    /// Nominal magnification
    pub nominal_magnification: Option<f64>,
    /// Calibrated magnification
    pub calibrated_magnification: Option<f64>,
    /// Working distance
    pub working_distance: Option<Length>,
    /// Whether an iris is fitted
    pub iris: Option<bool>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// A single optical filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filter {
    /// Filter ID (`Filter:n:m`)
    pub id: String,
    /// Optical role
    pub filter_type: Option<FilterType>,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Position in a filter wheel, when mounted in one
    pub filter_wheel: Option<String>,
    /// Passband description
    pub transmittance_range: Option<TransmittanceRange>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// Passband of a filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransmittanceRange {
    /// Wavelength where transmittance rises past 50%
    pub cut_in: Option<Length>,
    /// Tolerance on `cut_in`
    pub cut_in_tolerance: Option<Length>,
    /// Wavelength where transmittance falls past 50%
    pub cut_out: Option<Length>,
    /// Tolerance on `cut_out`
    pub cut_out_tolerance: Option<Length>,
    /// Peak transmittance, 0.0..=1.0
    pub transmittance: Option<f64>,
}

/// A matched excitation/dichroic/emission filter combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSet {
    /// FilterSet ID (`FilterSet:n:m`)
    pub id: String,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Excitation filters in the set
    pub excitation_filter_refs: Vec<String>,
    /// Dichroic in the set
    pub dichroic_ref: Option<String>,
    /// Emission filters in the set
    pub emission_filter_refs: Vec<String>,
}

/// A dichroic mirror.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dichroic {
    /// Dichroic ID (`Dichroic:n:m`)
    pub id: String,
    /// Manufacturer name
    pub manufacturer: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Serial number
    pub serial_number: Option<String>,
    /// Lot number
    pub lot_number: Option<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}
