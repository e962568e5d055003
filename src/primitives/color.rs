//! Packed RGBA color as OME-XML stores it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A color packed into a signed 32-bit integer, RGBA byte order.
///
/// OME-XML writes colors as the signed decimal rendering of the packed
/// value, so an opaque white is `-1` and an opaque red is `-16776961`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(
    /// The packed RGBA value
    pub i32,
);

impl Color {
    /// Build a color from its four components.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(i32::from_be_bytes([r, g, b, a]))
    }

    /// Red component.
    pub fn red(&self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Green component.
    pub fn green(&self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Blue component.
    pub fn blue(&self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Alpha component; 255 is opaque.
    pub fn alpha(&self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl Default for Color {
    /// Opaque white, the schema default.
    fn default() -> Self {
        Color(-1)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Color)
    }
}
