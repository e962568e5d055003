use chrono::{TimeZone, Utc};

use super::*;
use crate::model::MapPair;
use crate::primitives::{
    Binning, Color, DimensionOrder, LaserType, Length, PixelType, Temperature, UnitsLength,
    UnitsTemperature,
};

#[test]
fn test_set_then_get_scalar() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_name("embryo_t01", 0);
    assert_eq!(store.image_name(0), Some("embryo_t01"));
}

#[test]
fn test_vivification_creates_exactly_needed_ancestors() {
    let mut store = OmeXmlMetadata::new();
    store.set_channel_name("DAPI", 0, 2);

    assert_eq!(store.image_count(), 1);
    assert_eq!(store.channel_count(0), 3);
    assert_eq!(store.channel_name(0, 2), Some("DAPI"));
    // intermediate slots exist but carry no data
    assert_eq!(store.channel_name(0, 0), None);
    assert_eq!(store.channel_name(0, 1), None);
}

#[test]
fn test_vivification_never_duplicates_existing_nodes() {
    let mut store = OmeXmlMetadata::new();
    store.set_channel_name("DAPI", 0, 2);
    store.set_channel_name("GFP", 0, 1);

    assert_eq!(store.image_count(), 1);
    assert_eq!(store.channel_count(0), 3);
    assert_eq!(store.channel_name(0, 2), Some("DAPI"));
    assert_eq!(store.channel_name(0, 1), Some("GFP"));
}

#[test]
fn test_getters_never_vivify() {
    let store = OmeXmlMetadata::new();
    assert_eq!(store.image_name(5), None);
    assert_eq!(store.channel_count(5), 0);
    assert_eq!(store.plane_the_z(0, 0), None);
    assert_eq!(store.image_count(), 0);
}

#[test]
fn test_pixels_accessors() {
    let mut store = OmeXmlMetadata::new();
    store.set_pixels_id("Pixels:0", 0);
    store.set_pixels_dimension_order(DimensionOrder::Xyczt, 0);
    store.set_pixels_type(PixelType::Uint8, 0);
    store.set_pixels_size_x(1024, 0);
    store.set_pixels_size_y(1024, 0);
    store.set_pixels_physical_size_x(Length::micrometers(0.65), 0);

    assert_eq!(store.pixels_id(0), Some("Pixels:0"));
    assert_eq!(store.pixels_dimension_order(0), Some(DimensionOrder::Xyczt));
    assert_eq!(store.pixels_type(0), Some(PixelType::Uint8));
    assert_eq!(store.pixels_size_x(0), Some(1024));
    let physical = store.pixels_physical_size_x(0).unwrap();
    assert_eq!(physical.unit, UnitsLength::Micrometer);
    assert!((physical.value - 0.65).abs() < f64::EPSILON);
}

#[test]
fn test_id_setters_register_objects() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_id("Image:0", 0);
    store.set_roi_id("ROI:0", 0);

    assert!(store.registry().contains("Image:0"));
    assert_eq!(store.registry().kind_of("ROI:0"), Some("ROI"));
}

#[test]
fn test_reference_resolution_clean_and_dangling() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_id("Image:0", 0);
    store.set_roi_id("ROI:0", 0);
    store.set_image_roi_ref("ROI:0", 0, 0);
    assert_eq!(store.resolve_references().unresolved_count(), 0);

    store.set_image_roi_ref("ROI:1", 0, 1);
    let resolution = store.resolve_references();
    assert_eq!(resolution.unresolved_count(), 1);
    assert_eq!(resolution.unresolved[0].target, "ROI:1");

    // resolution is idempotent
    assert_eq!(store.resolve_references().unresolved_count(), 1);

    // registering the target later heals the reference
    store.set_roi_id("ROI:1", 1);
    assert_eq!(store.resolve_references().unresolved_count(), 0);
}

#[test]
fn test_imaging_environment_accessors() {
    let mut store = OmeXmlMetadata::new();
    let temp = Temperature::new(37.0, UnitsTemperature::Celsius);
    store.set_imaging_environment_temperature(temp, 0);
    store.set_imaging_environment_co2_percent(0.05, 0);

    assert_eq!(store.imaging_environment_temperature(0), Some(temp));
    assert_eq!(store.imaging_environment_co2_percent(0), Some(0.05));
    assert_eq!(store.imaging_environment_humidity(0), None);
}

#[test]
fn test_laser_subtype_establishment() {
    let mut store = OmeXmlMetadata::new();
    store.set_laser_id("LightSource:0:0", 0, 0);
    store.set_laser_type(LaserType::SolidState, 0, 0);
    store.set_laser_wavelength(Length::new(488.0, UnitsLength::Nanometer), 0, 0);

    assert_eq!(store.light_source_type(0, 0), Some("Laser"));
    assert_eq!(store.laser_type(0, 0), Some(LaserType::SolidState));
    assert_eq!(
        store.laser_wavelength(0, 0).map(|w| w.value),
        Some(488.0)
    );
}

#[test]
fn test_subtype_accessors_are_checked() {
    let mut store = OmeXmlMetadata::new();
    store.set_arc_id("LightSource:0:0", 0, 0);
    // laser accessors on an arc slot do nothing
    store.set_laser_type(LaserType::Gas, 0, 0);
    assert_eq!(store.laser_type(0, 0), None);
    assert_eq!(store.light_source_type(0, 0), Some("Arc"));
}

#[test]
fn test_subtype_reestablishment_replaces_payload() {
    let mut store = OmeXmlMetadata::new();
    store.set_laser_id("LightSource:0:0", 0, 0);
    store.set_laser_type(LaserType::Gas, 0, 0);
    store.set_arc_id("LightSource:0:0", 0, 0);
    assert_eq!(store.light_source_type(0, 0), Some("Arc"));
    assert_eq!(store.laser_type(0, 0), None);
    // re-declaring the same subtype keeps its payload
    store.set_laser_id("LightSource:0:1", 0, 1);
    store.set_laser_type(LaserType::Dye, 0, 1);
    store.set_laser_id("LightSource:0:1", 0, 1);
    assert_eq!(store.laser_type(0, 1), Some(LaserType::Dye));
}

#[test]
fn test_shape_geometry_accessors_are_checked() {
    let mut store = OmeXmlMetadata::new();
    store.set_rectangle_id("Shape:0:0", 0, 0);
    store.set_rectangle_x(10.0, 0, 0);
    store.set_rectangle_width(64.0, 0, 0);

    assert_eq!(store.shape_type(0, 0), Some("Rectangle"));
    assert_eq!(store.rectangle_x(0, 0), Some(10.0));
    assert_eq!(store.rectangle_width(0, 0), Some(64.0));
    // ellipse accessors see nothing at a rectangle slot
    assert_eq!(store.ellipse_radius_x(0, 0), None);
    store.set_ellipse_radius_x(5.0, 0, 0);
    assert_eq!(store.shape_type(0, 0), Some("Rectangle"));
}

#[test]
fn test_shape_common_attributes() {
    let mut store = OmeXmlMetadata::new();
    store.set_ellipse_id("Shape:0:0", 0, 0);
    store.set_shape_stroke_color(Color::new(0, 255, 0, 255), 0, 0);
    store.set_shape_the_z(3, 0, 0);
    store.set_shape_text("nucleus", 0, 0);

    assert_eq!(store.shape_stroke_color(0, 0), Some(Color::new(0, 255, 0, 255)));
    assert_eq!(store.shape_the_z(0, 0), Some(3));
    assert_eq!(store.shape_text(0, 0), Some("nucleus"));
}

#[test]
fn test_plate_well_accessors() {
    let mut store = OmeXmlMetadata::new();
    store.set_plate_id("Plate:0", 0);
    store.set_plate_rows(8, 0);
    store.set_plate_columns(12, 0);
    store.set_well_id("Well:0:0", 0, 0);
    store.set_well_row(0, 0, 0);
    store.set_well_column(3, 0, 0);
    store.set_well_sample_id("WellSample:0:0:0", 0, 0, 0);
    store.set_well_sample_image_ref("Image:0", 0, 0, 0);

    assert_eq!(store.well_count(0), 1);
    assert_eq!(store.well_sample_count(0, 0), 1);
    assert_eq!(store.well_column(0, 0), Some(3));
    assert_eq!(store.well_sample_image_ref(0, 0, 0), Some("Image:0"));
    // the image is not declared, so the reference dangles
    assert_eq!(store.resolve_references().unresolved_count(), 1);
}

#[test]
fn test_annotation_kind_establishment() {
    let mut store = OmeXmlMetadata::new();
    store.set_long_annotation_id("Annotation:0", 0);
    store.set_long_annotation_value(42, 0);
    store.set_map_annotation_id("Annotation:1", 1);
    store.add_map_annotation_pair("stain", "DAPI", 1);
    store.add_map_annotation_pair("stain", "GFP", 1);

    assert_eq!(store.annotation_count(), 2);
    assert_eq!(store.long_annotation_value(0), Some(42));
    assert_eq!(store.annotation_kind(1), Some("MapAnnotation"));
    let pairs = store.map_annotation_value(1).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], MapPair::new("stain", "DAPI"));
    // checked access: a long slot has no map payload
    assert_eq!(store.map_annotation_value(0), None);
}

#[test]
fn test_detector_settings_vivify_through_channel() {
    let mut store = OmeXmlMetadata::new();
    store.set_channel_detector_settings_id("Detector:0:0", 0, 1);
    store.set_channel_detector_settings_binning(Binning::TwoByTwo, 0, 1);

    assert_eq!(store.channel_count(0), 2);
    assert_eq!(store.channel_detector_settings_id(0, 1), Some("Detector:0:0"));
    assert_eq!(
        store.channel_detector_settings_binning(0, 1),
        Some(Binning::TwoByTwo)
    );
}

#[test]
fn test_set_root_reindexes() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_id("Image:0", 0);
    store.set_image_annotation_ref("Annotation:0", 0, 0);
    store.set_comment_annotation_id("Annotation:0", 0);
    store.set_comment_annotation_value("hand-checked", 0);

    let root = store.root().clone();
    let mut replacement = OmeXmlMetadata::new();
    replacement.set_root(root);

    let resolution = replacement.resolve_references();
    assert!(resolution.is_clean());
    assert_eq!(resolution.resolved, 1);
    assert_eq!(replacement.comment_annotation_value(0), Some("hand-checked"));
}

#[test]
fn test_create_root_resets_everything() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_id("Image:0", 0);
    store.create_root();

    assert_eq!(store.image_count(), 0);
    assert!(store.registry().is_empty());
}

#[test]
fn test_json_roundtrip_preserves_registry() {
    let mut store = OmeXmlMetadata::new();
    store.set_image_id("Image:0", 0);
    store.set_dataset_id("Dataset:0", 0);
    store.set_dataset_image_ref("Image:0", 0, 0);
    store.set_image_acquisition_date(Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap(), 0);

    let json = store.to_json().unwrap();
    let restored = OmeXmlMetadata::from_json(&json).unwrap();

    assert_eq!(restored.image_count(), 1);
    assert_eq!(restored.dataset_image_ref(0, 0), Some("Image:0"));
    assert!(restored.resolve_references().is_clean());
    assert_eq!(
        restored.image_acquisition_date(0),
        Some(Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap())
    );
}
