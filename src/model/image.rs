//! Image, its pixel block, and the per-plane records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::primitives::{
    AcquisitionMode, Binning, Color, ContrastMethod, DimensionOrder, ElectricPotential,
    IlluminationType, Length, Medium, PixelType, Pressure, Temperature, Time, UnitsLength,
};

/// A single acquired image with its pixel geometry and acquisition context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    /// Image ID (`Image:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Acquisition timestamp
    pub acquisition_date: Option<DateTime<Utc>>,
    /// Instrument the image was acquired on
    pub instrument_ref: Option<String>,
    /// Experiment this image belongs to
    pub experiment_ref: Option<String>,
    /// Experimenter who acquired it
    pub experimenter_ref: Option<String>,
    /// Group owning the image
    pub experimenter_group_ref: Option<String>,
    /// Objective settings in effect during acquisition
    pub objective_settings: Option<ObjectiveSettings>,
    /// Environmental conditions during acquisition
    pub imaging_environment: Option<ImagingEnvironment>,
    /// Stage position label
    pub stage_label: Option<StageLabel>,
    /// The pixel block
    pub pixels: Pixels,
    /// Linked regions of interest
    pub roi_refs: Vec<String>,
    /// Linked microbeam manipulations
    pub microbeam_manipulation_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Image {
    /// Create an image with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// The 5D pixel block of an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pixels {
    /// Pixels ID (`Pixels:n`)
    pub id: String,
    /// Plane storage order
    pub dimension_order: DimensionOrder,
    /// Sample storage type
    pub pixel_type: PixelType,
    /// Size along X in pixels
    pub size_x: u32,
    /// Size along Y in pixels
    pub size_y: u32,
    /// Number of focal planes
    pub size_z: u32,
    /// Number of channels
    pub size_c: u32,
    /// Number of time points
    pub size_t: u32,
    /// Physical size of one pixel along X
    pub physical_size_x: Option<Length>,
    /// Physical size of one pixel along Y
    pub physical_size_y: Option<Length>,
    /// Physical spacing between focal planes
    pub physical_size_z: Option<Length>,
    /// Nominal time between successive time points
    pub time_increment: Option<Time>,
    /// Significant bits per sample, when less than the storage width
    pub significant_bits: Option<u32>,
    /// Whether samples are stored big-endian
    pub big_endian: Option<bool>,
    /// Whether planes are interleaved by channel
    pub interleaved: Option<bool>,
    /// Per-channel metadata
    pub channels: Vec<Channel>,
    /// Per-plane metadata
    pub planes: Vec<Plane>,
    /// TIFF block mapping
    pub tiff_data: Vec<TiffData>,
}

impl Default for Pixels {
    fn default() -> Self {
        Self {
            id: String::new(),
            dimension_order: DimensionOrder::Xyzct,
            pixel_type: PixelType::Uint16,
            size_x: 1,
            size_y: 1,
            size_z: 1,
            size_c: 1,
            size_t: 1,
            physical_size_x: None,
            physical_size_y: None,
            physical_size_z: None,
            time_increment: None,
            significant_bits: None,
            big_endian: None,
            interleaved: None,
            channels: Vec::new(),
            planes: Vec::new(),
            tiff_data: Vec::new(),
        }
    }
}

impl Pixels {
    /// Total number of planes implied by the dimension sizes.
    pub fn plane_count(&self) -> u64 {
        u64::from(self.size_z) * u64::from(self.size_c) * u64::from(self.size_t)
    }

    /// Uncompressed size in bytes of the full pixel block.
    pub fn byte_count(&self) -> u64 {
        self.plane_count()
            * u64::from(self.size_x)
            * u64::from(self.size_y)
            * self.pixel_type.bytes_per_pixel() as u64
    }
}

/// One channel of a pixel block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID (`Channel:n:c`)
    pub id: String,
    /// Channel name
    pub name: Option<String>,
    /// Samples per pixel for this channel
    pub samples_per_pixel: Option<u32>,
    /// Display color
    pub color: Option<Color>,
    /// Acquisition technique
    pub acquisition_mode: Option<AcquisitionMode>,
    /// Illumination path
    pub illumination_type: Option<IlluminationType>,
    /// Contrast technique
    pub contrast_method: Option<ContrastMethod>,
    /// Excitation wavelength
    pub excitation_wavelength: Option<Length>,
    /// Emission wavelength
    pub emission_wavelength: Option<Length>,
    /// Fluorophore name
    pub fluor: Option<String>,
    /// Neutral-density attenuation exponent
    pub nd_filter: Option<f64>,
    /// Pinhole diameter
    pub pinhole_size: Option<Length>,
    /// Pockel cell setting
    pub pockel_cell_setting: Option<i32>,
    /// Light source used for this channel
    pub light_source_settings: Option<LightSourceSettings>,
    /// Detector used for this channel
    pub detector_settings: Option<DetectorSettings>,
    /// Filters and dichroic in the light path
    pub light_path: Option<LightPath>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// Reference to a light source plus the settings it was used with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightSourceSettings {
    /// ID of the light source
    pub id: String,
    /// Fraction of power removed by attenuation, 0.0..=1.0
    pub attenuation: Option<f64>,
    /// Wavelength the source was tuned to
    pub wavelength: Option<Length>,
}

/// Reference to a detector plus the settings it was used with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectorSettings {
    /// ID of the detector
    pub id: String,
    /// Signal offset
    pub offset: Option<f64>,
    /// Amplification gain
    pub gain: Option<f64>,
    /// Supply voltage
    pub voltage: Option<ElectricPotential>,
    /// Optical zoom
    pub zoom: Option<f64>,
    /// Readout binning
    pub binning: Option<Binning>,
    /// Integration count
    pub integration: Option<u32>,
    /// Readout rate in MHz
    pub read_out_rate: Option<f64>,
}

/// Filters and dichroic between light source and detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightPath {
    /// Excitation filters, in beam order
    pub excitation_filter_refs: Vec<String>,
    /// Dichroic mirror
    pub dichroic_ref: Option<String>,
    /// Emission filters, in beam order
    pub emission_filter_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// Per-plane acquisition record, addressed by (Z, C, T).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plane {
    /// Focal plane index
    pub the_z: u32,
    /// Channel index
    pub the_c: u32,
    /// Time point index
    pub the_t: u32,
    /// Time since the start of the acquisition
    pub delta_t: Option<Time>,
    /// Exposure time for this plane
    pub exposure_time: Option<Time>,
    /// Absolute stage position X
    pub position_x: Option<Length>,
    /// Absolute stage position Y
    pub position_y: Option<Length>,
    /// Absolute stage position Z
    pub position_z: Option<Length>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// Maps a contiguous run of planes onto IFDs of a TIFF file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiffData {
    /// First IFD of the run
    pub ifd: Option<u32>,
    /// Z index of the first plane in the run
    pub first_z: Option<u32>,
    /// C index of the first plane in the run
    pub first_c: Option<u32>,
    /// T index of the first plane in the run
    pub first_t: Option<u32>,
    /// Number of planes in the run
    pub plane_count: Option<u32>,
    /// File the IFDs live in, when not the current file
    pub uuid: Option<TiffDataUuid>,
}

/// UUID element of a TiffData block, naming the containing file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiffDataUuid {
    /// Target file's UUID (`urn:uuid:...`)
    pub value: String,
    /// Target file's name
    pub file_name: Option<String>,
}

/// Objective settings in effect for one image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectiveSettings {
    /// ID of the objective
    pub id: String,
    /// Correction collar position
    pub correction_collar: Option<f64>,
    /// Medium between objective and sample
    pub medium: Option<Medium>,
    /// Refractive index of that medium
    pub refractive_index: Option<f64>,
}

/// Environmental conditions during acquisition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagingEnvironment {
    /// Chamber temperature
    pub temperature: Option<Temperature>,
    /// Air pressure
    pub air_pressure: Option<Pressure>,
    /// Relative humidity, 0.0..=1.0
    pub humidity: Option<f64>,
    /// CO2 fraction, 0.0..=1.0
    pub co2_percent: Option<f64>,
}

/// Named stage position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageLabel {
    /// Label name
    pub name: String,
    /// Stage X coordinate
    pub x: Option<Length>,
    /// Stage Y coordinate
    pub y: Option<Length>,
    /// Stage Z coordinate
    pub z: Option<Length>,
}

impl StageLabel {
    /// A label at the stage origin, positions in the reference frame.
    pub fn at_origin(name: impl Into<String>) -> Self {
        let zero = Length::new(0.0, UnitsLength::ReferenceFrame);
        Self {
            name: name.into(),
            x: Some(zero),
            y: Some(zero),
            z: Some(zero),
        }
    }
}
