//! Accessors for ROIs and their shape unions.
//!
//! A shape slot's geometry is established by the `set_<geometry>_id`
//! setter; geometry-specific accessors are checked and leave a slot of a
//! different geometry untouched. Presentation and placement attributes are
//! shared by every geometry and addressed through the `shape_*` accessors.

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{AffineTransform, Roi, Shape, ShapeGeometry};
use crate::primitives::{Color, FillRule, FontFamily, FontStyle, Length, Marker};

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn roi(&self, roi_index: usize) -> Option<&Roi> {
        self.root.rois.get(roi_index)
    }

    fn roi_mut(&mut self, roi_index: usize) -> &mut Roi {
        vivify(&mut self.root.rois, roi_index)
    }

    fn shape(&self, roi_index: usize, shape_index: usize) -> Option<&Shape> {
        self.roi(roi_index)?.union.get(shape_index)
    }

    fn shape_mut(&mut self, roi_index: usize, shape_index: usize) -> &mut Shape {
        vivify(&mut self.roi_mut(roi_index).union, shape_index)
    }

    // -- ROI ------------------------------------------------------------

    /// ROI ID.
    pub fn roi_id(&self, roi_index: usize) -> Option<&str> {
        self.roi(roi_index).map(|roi| roi.id.as_str())
    }

    /// Set the ROI ID and register it.
    pub fn set_roi_id(&mut self, id: &str, roi_index: usize) {
        self.roi_mut(roi_index).id = id.to_string();
        self.registry.register(id, "ROI");
    }

    /// ROI name.
    pub fn roi_name(&self, roi_index: usize) -> Option<&str> {
        self.roi(roi_index)?.name.as_deref()
    }

    /// Set the ROI name.
    pub fn set_roi_name(&mut self, name: impl Into<String>, roi_index: usize) {
        self.roi_mut(roi_index).name = Some(name.into());
    }

    /// ROI description.
    pub fn roi_description(&self, roi_index: usize) -> Option<&str> {
        self.roi(roi_index)?.description.as_deref()
    }

    /// Set the ROI description.
    pub fn set_roi_description(&mut self, description: impl Into<String>, roi_index: usize) {
        self.roi_mut(roi_index).description = Some(description.into());
    }

    /// Annotation linked to the ROI at `annotation_ref_index`.
    pub fn roi_annotation_ref(
        &self,
        roi_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.roi(roi_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to the ROI.
    pub fn set_roi_annotation_ref(
        &mut self,
        annotation: &str,
        roi_index: usize,
        annotation_ref_index: usize,
    ) {
        let roi = self.roi_mut(roi_index);
        set_ref(&mut roi.annotation_refs, annotation_ref_index, annotation);
        let source = source_id(&roi.id, "ROI", roi_index);
        self.registry
            .add_reference(&source, annotation, "AnnotationRef");
    }

    /// Number of shapes in the ROI union.
    pub fn shape_count(&self, roi_index: usize) -> usize {
        self.roi(roi_index).map_or(0, |roi| roi.union.len())
    }

    // -- Shape common ---------------------------------------------------

    /// Shape ID.
    pub fn shape_id(&self, roi_index: usize, shape_index: usize) -> Option<&str> {
        self.shape(roi_index, shape_index).map(|shape| shape.id.as_str())
    }

    /// Schema element name of the geometry at the slot.
    pub fn shape_type(&self, roi_index: usize, shape_index: usize) -> Option<&'static str> {
        self.shape(roi_index, shape_index)
            .map(|shape| shape.geometry.element_name())
    }

    /// Fill color of the shape.
    pub fn shape_fill_color(&self, roi_index: usize, shape_index: usize) -> Option<Color> {
        self.shape(roi_index, shape_index)?.fill_color
    }

    /// Set the fill color.
    pub fn set_shape_fill_color(&mut self, color: Color, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).fill_color = Some(color);
    }

    /// Fill rule of the shape.
    pub fn shape_fill_rule(&self, roi_index: usize, shape_index: usize) -> Option<FillRule> {
        self.shape(roi_index, shape_index)?.fill_rule
    }

    /// Set the fill rule.
    pub fn set_shape_fill_rule(
        &mut self,
        fill_rule: FillRule,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).fill_rule = Some(fill_rule);
    }

    /// Stroke color of the shape.
    pub fn shape_stroke_color(&self, roi_index: usize, shape_index: usize) -> Option<Color> {
        self.shape(roi_index, shape_index)?.stroke_color
    }

    /// Set the stroke color.
    pub fn set_shape_stroke_color(
        &mut self,
        color: Color,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).stroke_color = Some(color);
    }

    /// Stroke width of the shape.
    pub fn shape_stroke_width(&self, roi_index: usize, shape_index: usize) -> Option<Length> {
        self.shape(roi_index, shape_index)?.stroke_width
    }

    /// Set the stroke width.
    pub fn set_shape_stroke_width(
        &mut self,
        width: Length,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).stroke_width = Some(width);
    }

    /// Stroke dash pattern of the shape.
    pub fn shape_stroke_dash_array(
        &self,
        roi_index: usize,
        shape_index: usize,
    ) -> Option<&str> {
        self.shape(roi_index, shape_index)?.stroke_dash_array.as_deref()
    }

    /// Set the stroke dash pattern.
    pub fn set_shape_stroke_dash_array(
        &mut self,
        dash_array: impl Into<String>,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).stroke_dash_array = Some(dash_array.into());
    }

    /// Text carried by the shape.
    pub fn shape_text(&self, roi_index: usize, shape_index: usize) -> Option<&str> {
        self.shape(roi_index, shape_index)?.text.as_deref()
    }

    /// Set the text carried by the shape.
    pub fn set_shape_text(
        &mut self,
        text: impl Into<String>,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).text = Some(text.into());
    }

    /// Font family of the shape text.
    pub fn shape_font_family(
        &self,
        roi_index: usize,
        shape_index: usize,
    ) -> Option<FontFamily> {
        self.shape(roi_index, shape_index)?.font_family
    }

    /// Set the font family.
    pub fn set_shape_font_family(
        &mut self,
        family: FontFamily,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).font_family = Some(family);
    }

    /// Font size of the shape text.
    pub fn shape_font_size(&self, roi_index: usize, shape_index: usize) -> Option<Length> {
        self.shape(roi_index, shape_index)?.font_size
    }

    /// Set the font size.
    pub fn set_shape_font_size(&mut self, size: Length, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).font_size = Some(size);
    }

    /// Font style of the shape text.
    pub fn shape_font_style(&self, roi_index: usize, shape_index: usize) -> Option<FontStyle> {
        self.shape(roi_index, shape_index)?.font_style
    }

    /// Set the font style.
    pub fn set_shape_font_style(
        &mut self,
        style: FontStyle,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).font_style = Some(style);
    }

    /// Focal plane the shape applies to.
    pub fn shape_the_z(&self, roi_index: usize, shape_index: usize) -> Option<u32> {
        self.shape(roi_index, shape_index)?.the_z
    }

    /// Restrict the shape to a focal plane.
    pub fn set_shape_the_z(&mut self, the_z: u32, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).the_z = Some(the_z);
    }

    /// Channel the shape applies to.
    pub fn shape_the_c(&self, roi_index: usize, shape_index: usize) -> Option<u32> {
        self.shape(roi_index, shape_index)?.the_c
    }

    /// Restrict the shape to a channel.
    pub fn set_shape_the_c(&mut self, the_c: u32, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).the_c = Some(the_c);
    }

    /// Time point the shape applies to.
    pub fn shape_the_t(&self, roi_index: usize, shape_index: usize) -> Option<u32> {
        self.shape(roi_index, shape_index)?.the_t
    }

    /// Restrict the shape to a time point.
    pub fn set_shape_the_t(&mut self, the_t: u32, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).the_t = Some(the_t);
    }

    /// Whether the shape is locked against editing.
    pub fn shape_locked(&self, roi_index: usize, shape_index: usize) -> Option<bool> {
        self.shape(roi_index, shape_index)?.locked
    }

    /// Lock or unlock the shape.
    pub fn set_shape_locked(&mut self, locked: bool, roi_index: usize, shape_index: usize) {
        self.shape_mut(roi_index, shape_index).locked = Some(locked);
    }

    /// Affine transform applied to the geometry.
    pub fn shape_transform(
        &self,
        roi_index: usize,
        shape_index: usize,
    ) -> Option<AffineTransform> {
        self.shape(roi_index, shape_index)?.transform
    }

    /// Set the affine transform.
    pub fn set_shape_transform(
        &mut self,
        transform: AffineTransform,
        roi_index: usize,
        shape_index: usize,
    ) {
        self.shape_mut(roi_index, shape_index).transform = Some(transform);
    }

    /// Annotation linked to the shape at `annotation_ref_index`.
    pub fn shape_annotation_ref(
        &self,
        roi_index: usize,
        shape_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.shape(roi_index, shape_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to the shape.
    pub fn set_shape_annotation_ref(
        &mut self,
        annotation: &str,
        roi_index: usize,
        shape_index: usize,
        annotation_ref_index: usize,
    ) {
        let shape = self.shape_mut(roi_index, shape_index);
        set_ref(&mut shape.annotation_refs, annotation_ref_index, annotation);
        let source = source_id(&shape.id, "Shape", format!("{roi_index}:{shape_index}"));
        self.registry
            .add_reference(&source, annotation, "AnnotationRef");
    }

    // -- geometry establishment -----------------------------------------

    fn set_shape_geometry(
        &mut self,
        id: &str,
        roi_index: usize,
        shape_index: usize,
        geometry: ShapeGeometry,
    ) {
        let shape = self.shape_mut(roi_index, shape_index);
        shape.id = id.to_string();
        // establishing a different geometry replaces the old payload
        if std::mem::discriminant(&shape.geometry) != std::mem::discriminant(&geometry) {
            shape.geometry = geometry;
        }
        self.registry.register(id, "Shape");
    }

    /// Declare the shape slot to be a point and set its ID.
    pub fn set_point_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Point { x: 0.0, y: 0.0 },
        );
    }

    /// Declare the shape slot to be a line and set its ID.
    pub fn set_line_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 0.0,
                marker_start: None,
                marker_end: None,
            },
        );
    }

    /// Declare the shape slot to be a rectangle and set its ID.
    pub fn set_rectangle_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        );
    }

    /// Declare the shape slot to be an ellipse and set its ID.
    pub fn set_ellipse_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Ellipse {
                x: 0.0,
                y: 0.0,
                radius_x: 0.0,
                radius_y: 0.0,
            },
        );
    }

    /// Declare the shape slot to be a polygon and set its ID.
    pub fn set_polygon_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Polygon {
                points: String::new(),
            },
        );
    }

    /// Declare the shape slot to be a polyline and set its ID.
    pub fn set_polyline_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Polyline {
                points: String::new(),
                marker_start: None,
                marker_end: None,
            },
        );
    }

    /// Declare the shape slot to be a label and set its ID.
    pub fn set_label_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Label { x: 0.0, y: 0.0 },
        );
    }

    /// Declare the shape slot to be a mask and set its ID.
    pub fn set_mask_id(&mut self, id: &str, roi_index: usize, shape_index: usize) {
        self.set_shape_geometry(
            id,
            roi_index,
            shape_index,
            ShapeGeometry::Mask {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                bin_data: None,
            },
        );
    }

    // -- Point ----------------------------------------------------------

    /// X coordinate, when the slot holds a point.
    pub fn point_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Point { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Set the X coordinate. No-op unless the slot holds a point.
    pub fn set_point_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Point { x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x = value;
        }
    }

    /// Y coordinate, when the slot holds a point.
    pub fn point_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Point { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Set the Y coordinate. No-op unless the slot holds a point.
    pub fn set_point_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Point { y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y = value;
        }
    }

    // -- Line -----------------------------------------------------------

    /// Start X, when the slot holds a line.
    pub fn line_x1(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { x1, .. } => Some(x1),
            _ => None,
        }
    }

    /// Set the start X. No-op unless the slot holds a line.
    pub fn set_line_x1(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Line { x1, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x1 = value;
        }
    }

    /// Start Y, when the slot holds a line.
    pub fn line_y1(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { y1, .. } => Some(y1),
            _ => None,
        }
    }

    /// Set the start Y. No-op unless the slot holds a line.
    pub fn set_line_y1(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Line { y1, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y1 = value;
        }
    }

    /// End X, when the slot holds a line.
    pub fn line_x2(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { x2, .. } => Some(x2),
            _ => None,
        }
    }

    /// Set the end X. No-op unless the slot holds a line.
    pub fn set_line_x2(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Line { x2, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x2 = value;
        }
    }

    /// End Y, when the slot holds a line.
    pub fn line_y2(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { y2, .. } => Some(y2),
            _ => None,
        }
    }

    /// Set the end Y. No-op unless the slot holds a line.
    pub fn set_line_y2(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Line { y2, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y2 = value;
        }
    }

    /// Start marker, when the slot holds a line.
    pub fn line_marker_start(&self, roi_index: usize, shape_index: usize) -> Option<Marker> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { marker_start, .. } => marker_start,
            _ => None,
        }
    }

    /// Set the start marker. No-op unless the slot holds a line.
    pub fn set_line_marker_start(
        &mut self,
        marker: Marker,
        roi_index: usize,
        shape_index: usize,
    ) {
        if let ShapeGeometry::Line { marker_start, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *marker_start = Some(marker);
        }
    }

    /// End marker, when the slot holds a line.
    pub fn line_marker_end(&self, roi_index: usize, shape_index: usize) -> Option<Marker> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Line { marker_end, .. } => marker_end,
            _ => None,
        }
    }

    /// Set the end marker. No-op unless the slot holds a line.
    pub fn set_line_marker_end(
        &mut self,
        marker: Marker,
        roi_index: usize,
        shape_index: usize,
    ) {
        if let ShapeGeometry::Line { marker_end, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *marker_end = Some(marker);
        }
    }

    // -- Rectangle ------------------------------------------------------

    /// Left edge, when the slot holds a rectangle.
    pub fn rectangle_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Rectangle { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Set the left edge. No-op unless the slot holds a rectangle.
    pub fn set_rectangle_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Rectangle { x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x = value;
        }
    }

    /// Top edge, when the slot holds a rectangle.
    pub fn rectangle_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Rectangle { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Set the top edge. No-op unless the slot holds a rectangle.
    pub fn set_rectangle_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Rectangle { y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y = value;
        }
    }

    /// Width, when the slot holds a rectangle.
    pub fn rectangle_width(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Rectangle { width, .. } => Some(width),
            _ => None,
        }
    }

    /// Set the width. No-op unless the slot holds a rectangle.
    pub fn set_rectangle_width(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Rectangle { width, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *width = value;
        }
    }

    /// Height, when the slot holds a rectangle.
    pub fn rectangle_height(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Rectangle { height, .. } => Some(height),
            _ => None,
        }
    }

    /// Set the height. No-op unless the slot holds a rectangle.
    pub fn set_rectangle_height(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Rectangle { height, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *height = value;
        }
    }

    // -- Ellipse --------------------------------------------------------

    /// Center X, when the slot holds an ellipse.
    pub fn ellipse_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Ellipse { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Set the center X. No-op unless the slot holds an ellipse.
    pub fn set_ellipse_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Ellipse { x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x = value;
        }
    }

    /// Center Y, when the slot holds an ellipse.
    pub fn ellipse_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Ellipse { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Set the center Y. No-op unless the slot holds an ellipse.
    pub fn set_ellipse_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Ellipse { y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y = value;
        }
    }

    /// Radius along X, when the slot holds an ellipse.
    pub fn ellipse_radius_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Ellipse { radius_x, .. } => Some(radius_x),
            _ => None,
        }
    }

    /// Set the radius along X. No-op unless the slot holds an ellipse.
    pub fn set_ellipse_radius_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Ellipse { radius_x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *radius_x = value;
        }
    }

    /// Radius along Y, when the slot holds an ellipse.
    pub fn ellipse_radius_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Ellipse { radius_y, .. } => Some(radius_y),
            _ => None,
        }
    }

    /// Set the radius along Y. No-op unless the slot holds an ellipse.
    pub fn set_ellipse_radius_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Ellipse { radius_y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *radius_y = value;
        }
    }

    // -- Polygon / Polyline ---------------------------------------------

    /// Vertex list, when the slot holds a polygon.
    pub fn polygon_points(&self, roi_index: usize, shape_index: usize) -> Option<&str> {
        match &self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Polygon { points } => Some(points.as_str()),
            _ => None,
        }
    }

    /// Set the vertex list. No-op unless the slot holds a polygon.
    pub fn set_polygon_points(
        &mut self,
        value: impl Into<String>,
        roi_index: usize,
        shape_index: usize,
    ) {
        if let ShapeGeometry::Polygon { points } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *points = value.into();
        }
    }

    /// Vertex list, when the slot holds a polyline.
    pub fn polyline_points(&self, roi_index: usize, shape_index: usize) -> Option<&str> {
        match &self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Polyline { points, .. } => Some(points.as_str()),
            _ => None,
        }
    }

    /// Set the vertex list. No-op unless the slot holds a polyline.
    pub fn set_polyline_points(
        &mut self,
        value: impl Into<String>,
        roi_index: usize,
        shape_index: usize,
    ) {
        if let ShapeGeometry::Polyline { points, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *points = value.into();
        }
    }

    // -- Label ----------------------------------------------------------

    /// Anchor X, when the slot holds a label.
    pub fn label_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Label { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Set the anchor X. No-op unless the slot holds a label.
    pub fn set_label_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Label { x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x = value;
        }
    }

    /// Anchor Y, when the slot holds a label.
    pub fn label_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Label { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Set the anchor Y. No-op unless the slot holds a label.
    pub fn set_label_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Label { y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y = value;
        }
    }

    // -- Mask -----------------------------------------------------------

    /// Left edge, when the slot holds a mask.
    pub fn mask_x(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Mask { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Set the left edge. No-op unless the slot holds a mask.
    pub fn set_mask_x(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Mask { x, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *x = value;
        }
    }

    /// Top edge, when the slot holds a mask.
    pub fn mask_y(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Mask { y, .. } => Some(y),
            _ => None,
        }
    }

    /// Set the top edge. No-op unless the slot holds a mask.
    pub fn set_mask_y(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Mask { y, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *y = value;
        }
    }

    /// Width, when the slot holds a mask.
    pub fn mask_width(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Mask { width, .. } => Some(width),
            _ => None,
        }
    }

    /// Set the width. No-op unless the slot holds a mask.
    pub fn set_mask_width(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Mask { width, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *width = value;
        }
    }

    /// Height, when the slot holds a mask.
    pub fn mask_height(&self, roi_index: usize, shape_index: usize) -> Option<f64> {
        match self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Mask { height, .. } => Some(height),
            _ => None,
        }
    }

    /// Set the height. No-op unless the slot holds a mask.
    pub fn set_mask_height(&mut self, value: f64, roi_index: usize, shape_index: usize) {
        if let ShapeGeometry::Mask { height, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *height = value;
        }
    }

    /// Packed mask bits, when the slot holds a mask.
    pub fn mask_bin_data(&self, roi_index: usize, shape_index: usize) -> Option<&str> {
        match &self.shape(roi_index, shape_index)?.geometry {
            ShapeGeometry::Mask { bin_data, .. } => bin_data.as_deref(),
            _ => None,
        }
    }

    /// Set the packed mask bits. No-op unless the slot holds a mask.
    pub fn set_mask_bin_data(
        &mut self,
        value: impl Into<String>,
        roi_index: usize,
        shape_index: usize,
    ) {
        if let ShapeGeometry::Mask { bin_data, .. } =
            &mut self.shape_mut(roi_index, shape_index).geometry
        {
            *bin_data = Some(value.into());
        }
    }
}
