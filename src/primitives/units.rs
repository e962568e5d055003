//! Physical quantities and the OME unit vocabulary.
//!
//! Every dimensioned attribute in OME-XML is written as a pair of attributes:
//! the numeric value (`PhysicalSizeX="0.65"`) and its unit
//! (`PhysicalSizeXUnit="µm"`). The unit tokens come from a fixed schema
//! vocabulary, reproduced here per dimension. Quantities convert between
//! units of the same dimension where a linear scale exists; `pixel` and
//! `reference frame` lengths are opaque and do not convert.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidToken;

/// Unit vocabulary for lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsLength {
    /// kilometre
    #[serde(rename = "km")]
    Kilometer,
    /// metre
    #[serde(rename = "m")]
    Meter,
    /// centimetre
    #[serde(rename = "cm")]
    Centimeter,
    /// millimetre
    #[serde(rename = "mm")]
    Millimeter,
    /// micrometre, the working unit of light microscopy
    #[default]
    #[serde(rename = "µm")]
    Micrometer,
    /// nanometre
    #[serde(rename = "nm")]
    Nanometer,
    /// picometre
    #[serde(rename = "pm")]
    Picometer,
    /// ångström
    #[serde(rename = "Å")]
    Angstrom,
    /// imperial inch
    #[serde(rename = "in")]
    Inch,
    /// detector pixel, dimensionless until calibrated
    #[serde(rename = "pixel")]
    Pixel,
    /// stage reference frame, an instrument-local coordinate
    #[serde(rename = "reference frame")]
    ReferenceFrame,
}

impl UnitsLength {
    /// All length units, in schema order.
    pub fn values() -> &'static [UnitsLength] {
        &[
            UnitsLength::Kilometer,
            UnitsLength::Meter,
            UnitsLength::Centimeter,
            UnitsLength::Millimeter,
            UnitsLength::Micrometer,
            UnitsLength::Nanometer,
            UnitsLength::Picometer,
            UnitsLength::Angstrom,
            UnitsLength::Inch,
            UnitsLength::Pixel,
            UnitsLength::ReferenceFrame,
        ]
    }

    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsLength::Kilometer => "km",
            UnitsLength::Meter => "m",
            UnitsLength::Centimeter => "cm",
            UnitsLength::Millimeter => "mm",
            UnitsLength::Micrometer => "µm",
            UnitsLength::Nanometer => "nm",
            UnitsLength::Picometer => "pm",
            UnitsLength::Angstrom => "Å",
            UnitsLength::Inch => "in",
            UnitsLength::Pixel => "pixel",
            UnitsLength::ReferenceFrame => "reference frame",
        }
    }

    /// Scale factor to metres, if this unit is convertible.
    ///
    /// `pixel` and `reference frame` have no physical scale.
    pub fn meters(&self) -> Option<f64> {
        match self {
            UnitsLength::Kilometer => Some(1e3),
            UnitsLength::Meter => Some(1.0),
            UnitsLength::Centimeter => Some(1e-2),
            UnitsLength::Millimeter => Some(1e-3),
            UnitsLength::Micrometer => Some(1e-6),
            UnitsLength::Nanometer => Some(1e-9),
            UnitsLength::Picometer => Some(1e-12),
            UnitsLength::Angstrom => Some(1e-10),
            UnitsLength::Inch => Some(0.0254),
            UnitsLength::Pixel | UnitsLength::ReferenceFrame => None,
        }
    }
}

impl fmt::Display for UnitsLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsLength {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(UnitsLength::Kilometer),
            "m" => Ok(UnitsLength::Meter),
            "cm" => Ok(UnitsLength::Centimeter),
            "mm" => Ok(UnitsLength::Millimeter),
            "µm" | "um" => Ok(UnitsLength::Micrometer),
            "nm" => Ok(UnitsLength::Nanometer),
            "pm" => Ok(UnitsLength::Picometer),
            "Å" | "angstrom" => Ok(UnitsLength::Angstrom),
            "in" => Ok(UnitsLength::Inch),
            "pixel" => Ok(UnitsLength::Pixel),
            "reference frame" => Ok(UnitsLength::ReferenceFrame),
            _ => Err(InvalidToken::new("UnitsLength", s)),
        }
    }
}

/// Unit vocabulary for time intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsTime {
    /// second
    #[default]
    #[serde(rename = "s")]
    Second,
    /// millisecond
    #[serde(rename = "ms")]
    Millisecond,
    /// microsecond
    #[serde(rename = "µs")]
    Microsecond,
    /// nanosecond
    #[serde(rename = "ns")]
    Nanosecond,
    /// minute
    #[serde(rename = "min")]
    Minute,
    /// hour
    #[serde(rename = "h")]
    Hour,
    /// day
    #[serde(rename = "d")]
    Day,
}

impl UnitsTime {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsTime::Second => "s",
            UnitsTime::Millisecond => "ms",
            UnitsTime::Microsecond => "µs",
            UnitsTime::Nanosecond => "ns",
            UnitsTime::Minute => "min",
            UnitsTime::Hour => "h",
            UnitsTime::Day => "d",
        }
    }

    /// Scale factor to seconds.
    pub fn seconds(&self) -> f64 {
        match self {
            UnitsTime::Second => 1.0,
            UnitsTime::Millisecond => 1e-3,
            UnitsTime::Microsecond => 1e-6,
            UnitsTime::Nanosecond => 1e-9,
            UnitsTime::Minute => 60.0,
            UnitsTime::Hour => 3600.0,
            UnitsTime::Day => 86_400.0,
        }
    }
}

impl fmt::Display for UnitsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsTime {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(UnitsTime::Second),
            "ms" => Ok(UnitsTime::Millisecond),
            "µs" | "us" => Ok(UnitsTime::Microsecond),
            "ns" => Ok(UnitsTime::Nanosecond),
            "min" => Ok(UnitsTime::Minute),
            "h" => Ok(UnitsTime::Hour),
            "d" => Ok(UnitsTime::Day),
            _ => Err(InvalidToken::new("UnitsTime", s)),
        }
    }
}

/// Unit vocabulary for frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsFrequency {
    /// hertz
    #[default]
    #[serde(rename = "Hz")]
    Hertz,
    /// kilohertz
    #[serde(rename = "kHz")]
    Kilohertz,
    /// megahertz
    #[serde(rename = "MHz")]
    Megahertz,
    /// gigahertz
    #[serde(rename = "GHz")]
    Gigahertz,
}

impl UnitsFrequency {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsFrequency::Hertz => "Hz",
            UnitsFrequency::Kilohertz => "kHz",
            UnitsFrequency::Megahertz => "MHz",
            UnitsFrequency::Gigahertz => "GHz",
        }
    }

    /// Scale factor to hertz.
    pub fn hertz(&self) -> f64 {
        match self {
            UnitsFrequency::Hertz => 1.0,
            UnitsFrequency::Kilohertz => 1e3,
            UnitsFrequency::Megahertz => 1e6,
            UnitsFrequency::Gigahertz => 1e9,
        }
    }
}

impl fmt::Display for UnitsFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsFrequency {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hz" => Ok(UnitsFrequency::Hertz),
            "kHz" => Ok(UnitsFrequency::Kilohertz),
            "MHz" => Ok(UnitsFrequency::Megahertz),
            "GHz" => Ok(UnitsFrequency::Gigahertz),
            _ => Err(InvalidToken::new("UnitsFrequency", s)),
        }
    }
}

/// Unit vocabulary for pressures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsPressure {
    /// pascal
    #[default]
    #[serde(rename = "Pa")]
    Pascal,
    /// kilopascal
    #[serde(rename = "kPa")]
    Kilopascal,
    /// megapascal
    #[serde(rename = "MPa")]
    Megapascal,
    /// millibar
    #[serde(rename = "mbar")]
    Millibar,
    /// standard atmosphere
    #[serde(rename = "atm")]
    Atmosphere,
    /// millimetre of mercury
    #[serde(rename = "mm Hg")]
    MillimeterOfMercury,
    /// torr
    #[serde(rename = "Torr")]
    Torr,
    /// pound-force per square inch
    #[serde(rename = "psi")]
    Psi,
}

impl UnitsPressure {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsPressure::Pascal => "Pa",
            UnitsPressure::Kilopascal => "kPa",
            UnitsPressure::Megapascal => "MPa",
            UnitsPressure::Millibar => "mbar",
            UnitsPressure::Atmosphere => "atm",
            UnitsPressure::MillimeterOfMercury => "mm Hg",
            UnitsPressure::Torr => "Torr",
            UnitsPressure::Psi => "psi",
        }
    }

    /// Scale factor to pascals.
    pub fn pascals(&self) -> f64 {
        match self {
            UnitsPressure::Pascal => 1.0,
            UnitsPressure::Kilopascal => 1e3,
            UnitsPressure::Megapascal => 1e6,
            UnitsPressure::Millibar => 100.0,
            UnitsPressure::Atmosphere => 101_325.0,
            UnitsPressure::MillimeterOfMercury => 133.322_387_415,
            UnitsPressure::Torr => 101_325.0 / 760.0,
            UnitsPressure::Psi => 6_894.757_293_168,
        }
    }
}

impl fmt::Display for UnitsPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsPressure {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pa" => Ok(UnitsPressure::Pascal),
            "kPa" => Ok(UnitsPressure::Kilopascal),
            "MPa" => Ok(UnitsPressure::Megapascal),
            "mbar" => Ok(UnitsPressure::Millibar),
            "atm" => Ok(UnitsPressure::Atmosphere),
            "mm Hg" | "mmHg" => Ok(UnitsPressure::MillimeterOfMercury),
            "Torr" => Ok(UnitsPressure::Torr),
            "psi" => Ok(UnitsPressure::Psi),
            _ => Err(InvalidToken::new("UnitsPressure", s)),
        }
    }
}

/// Unit vocabulary for temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsTemperature {
    /// degree Celsius
    #[default]
    #[serde(rename = "°C")]
    Celsius,
    /// degree Fahrenheit
    #[serde(rename = "°F")]
    Fahrenheit,
    /// kelvin
    #[serde(rename = "K")]
    Kelvin,
}

impl UnitsTemperature {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsTemperature::Celsius => "°C",
            UnitsTemperature::Fahrenheit => "°F",
            UnitsTemperature::Kelvin => "K",
        }
    }

    fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            UnitsTemperature::Celsius => value + 273.15,
            UnitsTemperature::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
            UnitsTemperature::Kelvin => value,
        }
    }

    fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            UnitsTemperature::Celsius => kelvin - 273.15,
            UnitsTemperature::Fahrenheit => (kelvin - 273.15) * 9.0 / 5.0 + 32.0,
            UnitsTemperature::Kelvin => kelvin,
        }
    }
}

impl fmt::Display for UnitsTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsTemperature {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "°C" | "C" => Ok(UnitsTemperature::Celsius),
            "°F" | "F" => Ok(UnitsTemperature::Fahrenheit),
            "K" => Ok(UnitsTemperature::Kelvin),
            _ => Err(InvalidToken::new("UnitsTemperature", s)),
        }
    }
}

/// Unit vocabulary for powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsPower {
    /// watt
    #[serde(rename = "W")]
    Watt,
    /// milliwatt, the working unit for laser power
    #[default]
    #[serde(rename = "mW")]
    Milliwatt,
    /// microwatt
    #[serde(rename = "µW")]
    Microwatt,
}

impl UnitsPower {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsPower::Watt => "W",
            UnitsPower::Milliwatt => "mW",
            UnitsPower::Microwatt => "µW",
        }
    }

    /// Scale factor to watts.
    pub fn watts(&self) -> f64 {
        match self {
            UnitsPower::Watt => 1.0,
            UnitsPower::Milliwatt => 1e-3,
            UnitsPower::Microwatt => 1e-6,
        }
    }
}

impl fmt::Display for UnitsPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsPower {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(UnitsPower::Watt),
            "mW" => Ok(UnitsPower::Milliwatt),
            "µW" | "uW" => Ok(UnitsPower::Microwatt),
            _ => Err(InvalidToken::new("UnitsPower", s)),
        }
    }
}

/// Unit vocabulary for electric potentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitsElectricPotential {
    /// volt
    #[default]
    #[serde(rename = "V")]
    Volt,
    /// millivolt
    #[serde(rename = "mV")]
    Millivolt,
    /// kilovolt
    #[serde(rename = "kV")]
    Kilovolt,
}

impl UnitsElectricPotential {
    /// The schema token for this unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnitsElectricPotential::Volt => "V",
            UnitsElectricPotential::Millivolt => "mV",
            UnitsElectricPotential::Kilovolt => "kV",
        }
    }

    /// Scale factor to volts.
    pub fn volts(&self) -> f64 {
        match self {
            UnitsElectricPotential::Volt => 1.0,
            UnitsElectricPotential::Millivolt => 1e-3,
            UnitsElectricPotential::Kilovolt => 1e3,
        }
    }
}

impl fmt::Display for UnitsElectricPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitsElectricPotential {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" => Ok(UnitsElectricPotential::Volt),
            "mV" => Ok(UnitsElectricPotential::Millivolt),
            "kV" => Ok(UnitsElectricPotential::Kilovolt),
            _ => Err(InvalidToken::new("UnitsElectricPotential", s)),
        }
    }
}

/// A length value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Length {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsLength,
}

impl Length {
    /// Create a length from a value and unit.
    pub fn new(value: f64, unit: UnitsLength) -> Self {
        Self { value, unit }
    }

    /// Convenience constructor for micrometres.
    pub fn micrometers(value: f64) -> Self {
        Self::new(value, UnitsLength::Micrometer)
    }

    /// Convert to another length unit.
    ///
    /// Returns `None` when either unit has no physical scale (`pixel`,
    /// `reference frame`).
    pub fn convert_to(&self, unit: UnitsLength) -> Option<Length> {
        let meters = self.value * self.unit.meters()?;
        Some(Length::new(meters / unit.meters()?, unit))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A time interval with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Time {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsTime,
}

impl Time {
    /// Create a time interval from a value and unit.
    pub fn new(value: f64, unit: UnitsTime) -> Self {
        Self { value, unit }
    }

    /// Convenience constructor for seconds.
    pub fn seconds(value: f64) -> Self {
        Self::new(value, UnitsTime::Second)
    }

    /// Convert to another time unit.
    pub fn convert_to(&self, unit: UnitsTime) -> Time {
        Time::new(self.value * self.unit.seconds() / unit.seconds(), unit)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A frequency with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frequency {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsFrequency,
}

impl Frequency {
    /// Create a frequency from a value and unit.
    pub fn new(value: f64, unit: UnitsFrequency) -> Self {
        Self { value, unit }
    }

    /// Convert to another frequency unit.
    pub fn convert_to(&self, unit: UnitsFrequency) -> Frequency {
        Frequency::new(self.value * self.unit.hertz() / unit.hertz(), unit)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A pressure with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pressure {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsPressure,
}

impl Pressure {
    /// Create a pressure from a value and unit.
    pub fn new(value: f64, unit: UnitsPressure) -> Self {
        Self { value, unit }
    }

    /// Convert to another pressure unit.
    pub fn convert_to(&self, unit: UnitsPressure) -> Pressure {
        Pressure::new(self.value * self.unit.pascals() / unit.pascals(), unit)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A temperature with its unit.
///
/// Temperature conversion is affine, not a pure scale, so it is handled
/// separately from the linear quantities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Temperature {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsTemperature,
}

impl Temperature {
    /// Create a temperature from a value and unit.
    pub fn new(value: f64, unit: UnitsTemperature) -> Self {
        Self { value, unit }
    }

    /// Convert to another temperature unit.
    pub fn convert_to(&self, unit: UnitsTemperature) -> Temperature {
        let kelvin = self.unit.to_kelvin(self.value);
        Temperature::new(unit.from_kelvin(kelvin), unit)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A power with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Power {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsPower,
}

impl Power {
    /// Create a power from a value and unit.
    pub fn new(value: f64, unit: UnitsPower) -> Self {
        Self { value, unit }
    }

    /// Convert to another power unit.
    pub fn convert_to(&self, unit: UnitsPower) -> Power {
        Power::new(self.value * self.unit.watts() / unit.watts(), unit)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// An electric potential with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectricPotential {
    /// Numeric value in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: UnitsElectricPotential,
}

impl ElectricPotential {
    /// Create an electric potential from a value and unit.
    pub fn new(value: f64, unit: UnitsElectricPotential) -> Self {
        Self { value, unit }
    }

    /// Convert to another potential unit.
    pub fn convert_to(&self, unit: UnitsElectricPotential) -> ElectricPotential {
        ElectricPotential::new(self.value * self.unit.volts() / unit.volts(), unit)
    }
}

impl fmt::Display for ElectricPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
