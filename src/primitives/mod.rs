//! Primitive value types shared by every node of the OME data model.
//!
//! OME-XML attributes are either plain scalars, schema enumerations with a
//! fixed token vocabulary, packed colors, or physical quantities carrying an
//! explicit unit. This module provides type-safe Rust counterparts for all of
//! them, with `Display`/`FromStr` implementations that speak the exact token
//! vocabulary of the 2016-06 schema.

mod color;
mod enums;
mod lsid;
mod units;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use enums::{
    AcquisitionMode, ArcType, Binning, ContrastMethod, Correction, DetectorType, DimensionOrder,
    ExperimentType, FilamentType, FillRule, FilterType, FontFamily, FontStyle, IlluminationType,
    Immersion,
    LaserMedium, LaserType, Marker, Medium, MicroscopeType, NamingConvention, PixelType, Pulse,
};
pub use lsid::{lsid, lsid2, lsid3, new_uuid_urn};
pub use units::{
    ElectricPotential, Frequency, Length, Power, Pressure, Temperature, Time,
    UnitsElectricPotential, UnitsFrequency, UnitsLength, UnitsPower, UnitsPressure,
    UnitsTemperature, UnitsTime,
};

/// Error raised when an OME schema token (enumeration value or unit symbol)
/// does not belong to the vocabulary of the type being parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} token: {token:?}")]
pub struct InvalidToken {
    /// Name of the schema type being parsed (e.g. "PixelType")
    pub kind: &'static str,
    /// The offending input token
    pub token: String,
}

impl InvalidToken {
    pub(crate) fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}
