//! Regions of interest and their shape union.

use serde::{Deserialize, Serialize};

use crate::primitives::{Color, FillRule, FontFamily, FontStyle, Length, Marker};

/// A region of interest: a union of shapes plus identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roi {
    /// ROI ID (`ROI:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// The shapes making up this region
    pub union: Vec<Shape>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Roi {
    /// Create a region with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One shape within an ROI union.
///
/// Presentation and placement attributes are shared by every geometry; the
/// geometry itself is the variant payload. Variant access is checked: a
/// rectangle addressed as an ellipse is simply not there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Shape ID (`Shape:n:m`)
    pub id: String,
    /// Fill color
    pub fill_color: Option<Color>,
    /// Fill rule
    pub fill_rule: Option<FillRule>,
    /// Stroke color
    pub stroke_color: Option<Color>,
    /// Stroke width
    pub stroke_width: Option<Length>,
    /// Stroke dash pattern, as the SVG-style attribute text
    pub stroke_dash_array: Option<String>,
    /// Font family for text rendering
    pub font_family: Option<FontFamily>,
    /// Font size for text rendering
    pub font_size: Option<Length>,
    /// Font style for text rendering
    pub font_style: Option<FontStyle>,
    /// Text carried by the shape
    pub text: Option<String>,
    /// Focal plane the shape applies to; absent means all
    pub the_z: Option<u32>,
    /// Channel the shape applies to; absent means all
    pub the_c: Option<u32>,
    /// Time point the shape applies to; absent means all
    pub the_t: Option<u32>,
    /// Whether the shape is locked against editing
    pub locked: Option<bool>,
    /// Affine transform applied to the geometry
    pub transform: Option<AffineTransform>,
    /// The geometry itself
    pub geometry: ShapeGeometry,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Shape {
    /// Create a shape with the given ID and geometry.
    pub fn new(id: impl Into<String>, geometry: ShapeGeometry) -> Self {
        Self {
            id: id.into(),
            geometry,
            ..Self::default()
        }
    }
}

/// Geometry payload of a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeGeometry {
    /// A single point
    Point {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
    /// A straight line segment
    Line {
        /// Start X
        x1: f64,
        /// Start Y
        y1: f64,
        /// End X
        x2: f64,
        /// End Y
        y2: f64,
        /// Marker at the start
        marker_start: Option<Marker>,
        /// Marker at the end
        marker_end: Option<Marker>,
    },
    /// An axis-aligned rectangle
    Rectangle {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
    },
    /// An axis-aligned ellipse
    Ellipse {
        /// Center X
        x: f64,
        /// Center Y
        y: f64,
        /// Radius along X
        radius_x: f64,
        /// Radius along Y
        radius_y: f64,
    },
    /// A closed polygon
    Polygon {
        /// Vertices as the schema's `Points` attribute text (`"x1,y1 x2,y2 ..."`)
        points: String,
    },
    /// An open polyline
    Polyline {
        /// Vertices as the schema's `Points` attribute text
        points: String,
        /// Marker at the start
        marker_start: Option<Marker>,
        /// Marker at the end
        marker_end: Option<Marker>,
    },
    /// A text label anchored at a point
    Label {
        /// Anchor X
        x: f64,
        /// Anchor Y
        y: f64,
    },
    /// A bitmask over a rectangular region
    Mask {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Packed mask bits, base64 text as stored in the document
        bin_data: Option<String>,
    },
}

impl Default for ShapeGeometry {
    fn default() -> Self {
        ShapeGeometry::Point { x: 0.0, y: 0.0 }
    }
}

impl ShapeGeometry {
    /// Schema element name of this geometry.
    pub fn element_name(&self) -> &'static str {
        match self {
            ShapeGeometry::Point { .. } => "Point",
            ShapeGeometry::Line { .. } => "Line",
            ShapeGeometry::Rectangle { .. } => "Rectangle",
            ShapeGeometry::Ellipse { .. } => "Ellipse",
            ShapeGeometry::Polygon { .. } => "Polygon",
            ShapeGeometry::Polyline { .. } => "Polyline",
            ShapeGeometry::Label { .. } => "Label",
            ShapeGeometry::Mask { .. } => "Mask",
        }
    }
}

/// Parse a schema `Points` attribute into coordinate pairs.
///
/// Malformed pairs are skipped rather than failing the whole attribute,
/// matching how permissive readers treat hand-edited documents.
pub fn parse_points(points: &str) -> Vec<(f64, f64)> {
    points
        .split_whitespace()
        .filter_map(|pair| {
            let (x, y) = pair.split_once(',')?;
            Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

/// A 2D affine transform in row-major order.
///
/// Maps `(x, y)` to `(a00*x + a01*y + a02, a10*x + a11*y + a12)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Row 0, column 0
    pub a00: f64,
    /// Row 0, column 1
    pub a01: f64,
    /// Row 0, column 2 (X translation)
    pub a02: f64,
    /// Row 1, column 0
    pub a10: f64,
    /// Row 1, column 1
    pub a11: f64,
    /// Row 1, column 2 (Y translation)
    pub a12: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a00: 1.0,
            a01: 0.0,
            a02: 0.0,
            a10: 0.0,
            a11: 1.0,
            a12: 0.0,
        }
    }

    /// A pure translation.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            a02: dx,
            a12: dy,
            ..Self::identity()
        }
    }

    /// Apply the transform to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a00 * x + self.a01 * y + self.a02,
            self.a10 * x + self.a11 * y + self.a12,
        )
    }
}
