use super::*;
use crate::model::roi::parse_points;
use crate::primitives::PixelType;

#[test]
fn test_pixels_plane_and_byte_counts() {
    let mut pixels = Pixels::default();
    pixels.size_x = 512;
    pixels.size_y = 512;
    pixels.size_z = 10;
    pixels.size_c = 3;
    pixels.size_t = 2;
    pixels.pixel_type = PixelType::Uint16;

    assert_eq!(pixels.plane_count(), 60);
    assert_eq!(pixels.byte_count(), 60 * 512 * 512 * 2);
}

#[test]
fn test_plate_well_lookup() {
    let mut plate = Plate::new("Plate:0");
    let mut well = Well::default();
    well.id = "Well:0:0".to_string();
    well.row = 1;
    well.column = 3;
    plate.wells.push(well);

    assert!(plate.well_at(1, 3).is_some());
    assert!(plate.well_at(3, 1).is_none());
}

#[test]
fn test_instrument_component_lookup() {
    let mut instrument = Instrument::new("Instrument:0");
    instrument
        .light_sources
        .push(LightSource::new("LightSource:0:0", LightSourceKind::laser()));
    let mut detector = Detector::default();
    detector.id = "Detector:0:0".to_string();
    instrument.detectors.push(detector);

    assert!(instrument.light_source("LightSource:0:0").is_some());
    assert!(instrument.light_source("LightSource:0:1").is_none());
    assert!(instrument.detector("Detector:0:0").is_some());
}

#[test]
fn test_parse_points_skips_malformed_pairs() {
    let points = parse_points("1,2 3.5,4.5 garbage 7,");
    assert_eq!(points, vec![(1.0, 2.0), (3.5, 4.5)]);
}

#[test]
fn test_affine_transform_apply() {
    let t = AffineTransform::translation(10.0, -5.0);
    assert_eq!(t.apply(1.0, 2.0), (11.0, -3.0));
    let id = AffineTransform::identity();
    assert_eq!(id.apply(3.0, 4.0), (3.0, 4.0));
}

#[test]
fn test_shape_geometry_element_names() {
    let rect = ShapeGeometry::Rectangle {
        x: 0.0,
        y: 0.0,
        width: 5.0,
        height: 5.0,
    };
    assert_eq!(rect.element_name(), "Rectangle");
    assert_eq!(ShapeGeometry::default().element_name(), "Point");
}

#[test]
fn test_annotation_element_names() {
    let a = Annotation::new("Annotation:0", AnnotationValue::Long(42));
    assert_eq!(a.element_name(), "LongAnnotation");
    let m = Annotation::new(
        "Annotation:1",
        AnnotationValue::Map(vec![MapPair::new("stain", "DAPI")]),
    );
    assert_eq!(m.element_name(), "MapAnnotation");
}

#[test]
fn test_structured_annotations_lookup() {
    let mut sa = StructuredAnnotations::default();
    assert!(sa.is_empty());
    sa.annotations
        .push(Annotation::new("Annotation:0", AnnotationValue::Boolean(true)));
    assert_eq!(sa.len(), 1);
    assert!(sa.by_id("Annotation:0").is_some());
    assert!(sa.by_id("Annotation:9").is_none());
}

#[test]
fn test_ome_json_roundtrip() {
    let mut ome = Ome::new();
    ome.creator = Some("omexml tests".to_string());
    ome.images.push(Image::new("Image:0"));

    let json = serde_json::to_string(&ome).unwrap();
    let restored: Ome = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.creator.as_deref(), Some("omexml tests"));
    assert_eq!(restored.images.len(), 1);
    assert_eq!(restored.images[0].id, "Image:0");
}
