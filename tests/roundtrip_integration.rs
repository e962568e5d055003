//! End-to-end tests: build a document through the store, write it to disk,
//! read it back, and check the tree and its link graph survived.

use omexml::prelude::*;
use omexml::primitives::{
    AcquisitionMode, LaserType, NamingConvention, UnitsLength, UnitsTime,
};
use omexml::validator::validate_store;

fn build_screening_document() -> OmeXmlMetadata {
    let mut store = OmeXmlMetadata::new();
    store.set_uuid("urn:uuid:aa0bd2a7-3f5c-4f0e-9932-7a6ea5287a11");
    store.set_creator("omexml integration tests");

    // instrument
    store.set_instrument_id("Instrument:0", 0);
    store.set_microscope_model("CellVoyager 8000", 0);
    store.set_laser_id("LightSource:0:0", 0, 0);
    store.set_laser_type(LaserType::SolidState, 0, 0);
    store.set_laser_wavelength(Length::new(405.0, UnitsLength::Nanometer), 0, 0);
    store.set_detector_id("Detector:0:0", 0, 0);
    store.set_objective_id("Objective:0:0", 0, 0);
    store.set_objective_lens_na(1.2, 0, 0);

    // two images acquired from the plate
    for image in 0..2 {
        store.set_image_id(&lsid("Image", image), image);
        store.set_image_name(format!("field_{image}"), image);
        store.set_image_instrument_ref("Instrument:0", image);
        store.set_pixels_id(&lsid("Pixels", image), image);
        store.set_pixels_size_x(1024, image);
        store.set_pixels_size_y(1024, image);
        store.set_pixels_size_c(2, image);
        store.set_pixels_physical_size_x(Length::micrometers(0.325), image);
        for channel in 0..2 {
            store.set_channel_id(&lsid("Channel", format!("{image}:{channel}")), image, channel);
            store.set_channel_acquisition_mode(
                AcquisitionMode::SpinningDiskConfocal,
                image,
                channel,
            );
            store.set_channel_light_source_settings_id("LightSource:0:0", image, channel);
            store.set_channel_detector_settings_id("Detector:0:0", image, channel);
        }
        store.set_plane_the_c(1, image, 0);
        store.set_plane_exposure_time(Time::new(50.0, UnitsTime::Millisecond), image, 0);
    }

    // plate with two wells, one field each
    store.set_plate_id("Plate:0", 0);
    store.set_plate_name("assay_plate_01", 0);
    store.set_plate_rows(8, 0);
    store.set_plate_columns(12, 0);
    store.set_plate_row_naming_convention(NamingConvention::Letter, 0);
    store.set_plate_column_naming_convention(NamingConvention::Number, 0);
    for well in 0..2 {
        store.set_well_id(&lsid("Well", format!("0:{well}")), 0, well);
        store.set_well_row(0, 0, well);
        store.set_well_column(well as u32, 0, well);
        store.set_well_sample_id(&lsid("WellSample", format!("0:{well}:0")), 0, well, 0);
        store.set_well_sample_image_ref(&lsid("Image", well), 0, well, 0);
    }
    store.set_screen_id("Screen:0", 0);
    store.set_screen_name("kinase inhibitors", 0);
    store.set_screen_plate_ref("Plate:0", 0, 0);

    // annotations
    store.set_map_annotation_id("Annotation:0", 0);
    store.add_map_annotation_pair("cell-line", "HeLa", 0);
    store.add_map_annotation_pair("passage", "17", 0);
    store.set_plate_annotation_ref("Annotation:0", 0, 0);

    store
}

#[test]
fn test_screening_document_roundtrips_through_disk() {
    let store = build_screening_document();
    assert!(store.resolve_references().is_clean());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("assay.ome.xml");
    std::fs::write(&path, store.to_xml().expect("serialize")).expect("write");

    let xml = std::fs::read_to_string(&path).expect("read");
    let restored = OmeXmlMetadata::from_xml(&xml).expect("parse");

    assert_eq!(restored.image_count(), 2);
    assert_eq!(restored.plate_count(), 1);
    assert_eq!(restored.screen_count(), 1);
    assert_eq!(restored.image_name(1), Some("field_1"));
    assert_eq!(restored.channel_count(0), 2);
    assert_eq!(
        restored.channel_acquisition_mode(0, 1),
        Some(AcquisitionMode::SpinningDiskConfocal)
    );
    assert_eq!(restored.well_count(0), 2);
    assert_eq!(restored.well_sample_image_ref(0, 1, 0), Some("Image:1"));
    assert_eq!(restored.screen_plate_ref(0, 0), Some("Plate:0"));
    assert_eq!(
        restored.map_annotation_value(0).map(|pairs| pairs.len()),
        Some(2)
    );

    // the rebuilt registry sees the same graph
    let resolution = restored.resolve_references();
    assert!(resolution.is_clean(), "unresolved: {resolution}");
}

#[test]
fn test_validator_accepts_roundtripped_document() {
    let store = build_screening_document();
    let xml = store.to_xml().expect("serialize");
    let restored = OmeXmlMetadata::from_xml(&xml).expect("parse");

    let report = validate_store(&restored);
    assert!(report.passed(), "validation failed:\n{report}");
}

#[test]
fn test_roundtrip_is_stable() {
    // writing the parsed form again yields byte-identical output
    let store = build_screening_document();
    let first = store.to_xml().expect("first serialize");
    let reparsed = OmeXmlMetadata::from_xml(&first).expect("parse");
    let second = reparsed.to_xml().expect("second serialize");
    assert_eq!(first, second);
}

#[test]
fn test_dangling_reference_survives_roundtrip_and_is_reported() {
    let mut store = build_screening_document();
    store.set_image_roi_ref("ROI:404", 0, 0);

    let xml = store.to_xml().expect("serialize");
    let restored = OmeXmlMetadata::from_xml(&xml).expect("parse");

    let resolution = restored.resolve_references();
    assert_eq!(resolution.unresolved_count(), 1);
    assert_eq!(resolution.unresolved[0].target, "ROI:404");

    let report = validate_store(&restored);
    assert!(!report.passed());
}
