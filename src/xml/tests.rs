use chrono::{TimeZone, Utc};

use super::*;
use crate::model::{
    Annotation, AnnotationValue, Image, LightSource, LightSourceKind, MapPair, Ome, Roi, Shape,
    ShapeGeometry,
};
use crate::primitives::{
    Color, DimensionOrder, LaserType, Length, PixelType, Power, Temperature, UnitsLength,
    UnitsPower, UnitsTemperature,
};

fn roundtrip(ome: &Ome) -> Ome {
    let xml = write_document(ome).expect("write");
    read_document_str(&xml).expect("read")
}

#[test]
fn test_minimal_document_roundtrip() {
    let mut ome = Ome::new();
    ome.uuid = Some("urn:uuid:00000000-0000-0000-0000-000000000001".to_string());
    ome.creator = Some("omexml tests".to_string());

    let restored = roundtrip(&ome);
    assert_eq!(restored.uuid, ome.uuid);
    assert_eq!(restored.creator, ome.creator);
}

#[test]
fn test_image_roundtrip_preserves_pixels_geometry() {
    let mut ome = Ome::new();
    let mut image = Image::new("Image:0");
    image.name = Some("embryo <stack>".to_string());
    image.description = Some("first & second run".to_string());
    image.acquisition_date = Some(Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap());
    image.pixels.id = "Pixels:0".to_string();
    image.pixels.dimension_order = DimensionOrder::Xyczt;
    image.pixels.pixel_type = PixelType::Uint16;
    image.pixels.size_x = 512;
    image.pixels.size_y = 512;
    image.pixels.size_z = 12;
    image.pixels.size_c = 2;
    image.pixels.size_t = 5;
    image.pixels.physical_size_x = Some(Length::micrometers(0.65));
    image.pixels.physical_size_y = Some(Length::micrometers(0.65));
    ome.images.push(image);

    let restored = roundtrip(&ome);
    assert_eq!(restored.images.len(), 1);
    let image = &restored.images[0];
    // escaped characters survive the trip
    assert_eq!(image.name.as_deref(), Some("embryo <stack>"));
    assert_eq!(image.description.as_deref(), Some("first & second run"));
    assert_eq!(
        image.acquisition_date,
        Some(Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap())
    );
    assert_eq!(image.pixels.dimension_order, DimensionOrder::Xyczt);
    assert_eq!(image.pixels.size_z, 12);
    assert_eq!(image.pixels.physical_size_x, Some(Length::micrometers(0.65)));
}

#[test]
fn test_channel_and_plane_roundtrip() {
    let mut ome = Ome::new();
    let mut image = Image::new("Image:0");
    image.pixels.id = "Pixels:0".to_string();
    let mut channel = crate::model::Channel::default();
    channel.id = "Channel:0:0".to_string();
    channel.name = Some("DAPI".to_string());
    channel.color = Some(Color::new(0, 0, 255, 255));
    channel.excitation_wavelength = Some(Length::new(358.0, UnitsLength::Nanometer));
    image.pixels.channels.push(channel);
    let mut plane = crate::model::Plane::default();
    plane.the_z = 3;
    plane.the_c = 0;
    plane.the_t = 7;
    plane.exposure_time = Some(crate::primitives::Time::new(
        120.0,
        crate::primitives::UnitsTime::Millisecond,
    ));
    image.pixels.planes.push(plane);
    ome.images.push(image);

    let restored = roundtrip(&ome);
    let pixels = &restored.images[0].pixels;
    assert_eq!(pixels.channels[0].name.as_deref(), Some("DAPI"));
    assert_eq!(pixels.channels[0].color, Some(Color::new(0, 0, 255, 255)));
    assert_eq!(
        pixels.channels[0].excitation_wavelength,
        Some(Length::new(358.0, UnitsLength::Nanometer))
    );
    assert_eq!(pixels.planes[0].the_t, 7);
    assert_eq!(
        pixels.planes[0].exposure_time.map(|t| t.value),
        Some(120.0)
    );
}

#[test]
fn test_instrument_roundtrip_preserves_light_source_subtype() {
    let mut ome = Ome::new();
    let mut instrument = crate::model::Instrument::new("Instrument:0");
    let mut laser = LightSource::new(
        "LightSource:0:0",
        LightSourceKind::Laser {
            laser_type: Some(LaserType::SolidState),
            laser_medium: None,
            wavelength: Some(Length::new(488.0, UnitsLength::Nanometer)),
            frequency_multiplication: Some(2),
            tuneable: Some(false),
            pulse: None,
            pockel_cell: None,
            repetition_rate: None,
            pump_ref: Some("LightSource:0:1".to_string()),
        },
    );
    laser.model = Some("Sapphire 488".to_string());
    laser.power = Some(Power::new(100.0, UnitsPower::Milliwatt));
    instrument.light_sources.push(laser);
    instrument.light_sources.push(LightSource::new(
        "LightSource:0:1",
        LightSourceKind::LightEmittingDiode,
    ));
    ome.instruments.push(instrument);

    let restored = roundtrip(&ome);
    let sources = &restored.instruments[0].light_sources;
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].kind.element_name(), "Laser");
    assert_eq!(sources[0].model.as_deref(), Some("Sapphire 488"));
    assert_eq!(sources[0].power, Some(Power::new(100.0, UnitsPower::Milliwatt)));
    match &sources[0].kind {
        LightSourceKind::Laser {
            laser_type,
            wavelength,
            frequency_multiplication,
            pump_ref,
            ..
        } => {
            assert_eq!(*laser_type, Some(LaserType::SolidState));
            assert_eq!(*wavelength, Some(Length::new(488.0, UnitsLength::Nanometer)));
            assert_eq!(*frequency_multiplication, Some(2));
            assert_eq!(pump_ref.as_deref(), Some("LightSource:0:1"));
        }
        other => panic!("expected a laser, got {}", other.element_name()),
    }
    assert_eq!(sources[1].kind.element_name(), "LightEmittingDiode");
}

#[test]
fn test_imaging_environment_units_roundtrip() {
    let mut ome = Ome::new();
    let mut image = Image::new("Image:0");
    image.imaging_environment = Some(crate::model::ImagingEnvironment {
        temperature: Some(Temperature::new(310.15, UnitsTemperature::Kelvin)),
        air_pressure: None,
        humidity: Some(0.45),
        co2_percent: None,
    });
    ome.images.push(image);

    let restored = roundtrip(&ome);
    let environment = restored.images[0].imaging_environment.as_ref().unwrap();
    // the unit token is preserved, not normalized
    assert_eq!(
        environment.temperature,
        Some(Temperature::new(310.15, UnitsTemperature::Kelvin))
    );
    assert_eq!(environment.humidity, Some(0.45));
}

#[test]
fn test_roi_shape_roundtrip() {
    let mut ome = Ome::new();
    let mut roi = Roi::new("ROI:0");
    let mut rect = Shape::new(
        "Shape:0:0",
        ShapeGeometry::Rectangle {
            x: 10.0,
            y: 20.0,
            width: 64.0,
            height: 32.0,
        },
    );
    rect.stroke_color = Some(Color::new(255, 0, 0, 255));
    rect.the_z = Some(4);
    rect.transform = Some(crate::model::AffineTransform::translation(5.0, -5.0));
    roi.union.push(rect);
    roi.union.push(Shape::new(
        "Shape:0:1",
        ShapeGeometry::Polygon {
            points: "0,0 10,0 10,10".to_string(),
        },
    ));
    ome.rois.push(roi);

    let restored = roundtrip(&ome);
    let union = &restored.rois[0].union;
    assert_eq!(union.len(), 2);
    assert_eq!(union[0].geometry.element_name(), "Rectangle");
    match union[0].geometry {
        ShapeGeometry::Rectangle { width, .. } => assert_eq!(width, 64.0),
        _ => panic!("expected a rectangle"),
    }
    assert_eq!(union[0].the_z, Some(4));
    assert_eq!(
        union[0].transform,
        Some(crate::model::AffineTransform::translation(5.0, -5.0))
    );
    match &union[1].geometry {
        ShapeGeometry::Polygon { points } => assert_eq!(points, "0,0 10,0 10,10"),
        _ => panic!("expected a polygon"),
    }
}

#[test]
fn test_annotation_roundtrip_all_kinds() {
    let mut ome = Ome::new();
    let annotations = &mut ome.structured_annotations.annotations;
    annotations.push(Annotation::new("Annotation:0", AnnotationValue::Boolean(true)));
    annotations.push(Annotation::new(
        "Annotation:1",
        AnnotationValue::Comment("checked by hand".to_string()),
    ));
    annotations.push(Annotation::new("Annotation:2", AnnotationValue::Double(1.25)));
    annotations.push(Annotation::new("Annotation:3", AnnotationValue::Long(-7)));
    annotations.push(Annotation::new(
        "Annotation:4",
        AnnotationValue::Timestamp(Utc.with_ymd_and_hms(2022, 12, 24, 18, 0, 0).unwrap()),
    ));
    annotations.push(Annotation::new(
        "Annotation:5",
        AnnotationValue::Map(vec![
            MapPair::new("stain", "DAPI"),
            MapPair::new("stain", "GFP"),
        ]),
    ));
    let mut tagged = Annotation::new("Annotation:6", AnnotationValue::Tag("control".to_string()));
    tagged.namespace = Some("example.org/tags".to_string());
    annotations.push(tagged);

    let restored = roundtrip(&ome);
    let annotations = &restored.structured_annotations.annotations;
    assert_eq!(annotations.len(), 7);
    assert!(matches!(annotations[0].value, AnnotationValue::Boolean(true)));
    match &annotations[1].value {
        AnnotationValue::Comment(text) => assert_eq!(text, "checked by hand"),
        _ => panic!("expected a comment"),
    }
    assert!(matches!(annotations[2].value, AnnotationValue::Double(v) if v == 1.25));
    assert!(matches!(annotations[3].value, AnnotationValue::Long(-7)));
    match &annotations[5].value {
        AnnotationValue::Map(pairs) => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[1], MapPair::new("stain", "GFP"));
        }
        _ => panic!("expected a map"),
    }
    assert_eq!(annotations[6].namespace.as_deref(), Some("example.org/tags"));
}

#[test]
fn test_reference_elements_roundtrip() {
    let mut ome = Ome::new();
    let mut image = Image::new("Image:0");
    image.instrument_ref = Some("Instrument:0".to_string());
    image.roi_refs.push("ROI:0".to_string());
    image.annotation_refs.push("Annotation:0".to_string());
    image.annotation_refs.push("Annotation:1".to_string());
    ome.images.push(image);

    let restored = roundtrip(&ome);
    let image = &restored.images[0];
    assert_eq!(image.instrument_ref.as_deref(), Some("Instrument:0"));
    assert_eq!(image.roi_refs, vec!["ROI:0"]);
    assert_eq!(image.annotation_refs.len(), 2);
}

#[test]
fn test_unknown_elements_are_skipped() {
    let xml = r#"<?xml version="1.0"?>
<OME xmlns="http://www.openmicroscopy.org/Schemas/OME/2016-06">
  <FutureElement><Nested attr="1">text</Nested></FutureElement>
  <Image ID="Image:0">
    <Pixels ID="Pixels:0" DimensionOrder="XYZCT" Type="uint8"
            SizeX="4" SizeY="4" SizeZ="1" SizeC="1" SizeT="1"/>
  </Image>
</OME>"#;
    let ome = read_document_str(xml).expect("parse");
    assert_eq!(ome.images.len(), 1);
    assert_eq!(ome.images[0].pixels.pixel_type, PixelType::Uint8);
}

#[test]
fn test_prefixed_document_parses() {
    let xml = r#"<?xml version="1.0"?>
<ome:OME xmlns:ome="http://www.openmicroscopy.org/Schemas/OME/2016-06">
  <ome:Image ID="Image:0">
    <ome:Pixels ID="Pixels:0" DimensionOrder="XYZCT" Type="uint16"
                SizeX="2" SizeY="2" SizeZ="1" SizeC="1" SizeT="1"/>
  </ome:Image>
</ome:OME>"#;
    let ome = read_document_str(xml).expect("parse");
    assert_eq!(ome.images.len(), 1);
    assert_eq!(ome.images[0].id, "Image:0");
}

#[test]
fn test_wrong_root_is_rejected() {
    let err = read_document_str("<NotOME/>").unwrap_err();
    match err {
        OmeXmlError::UnexpectedRoot(name) => assert_eq!(name, "NotOME"),
        other => panic!("expected UnexpectedRoot, got {other}"),
    }
}

#[test]
fn test_missing_required_attribute_is_reported() {
    let xml = r#"<OME><Image Name="unnamed"></Image></OME>"#;
    let err = read_document_str(xml).unwrap_err();
    match err {
        OmeXmlError::MissingAttribute { element, attribute } => {
            assert_eq!(element, "Image");
            assert_eq!(attribute, "ID");
        }
        other => panic!("expected MissingAttribute, got {other}"),
    }
}

#[test]
fn test_invalid_enum_token_is_reported() {
    let xml = r#"<OME>
  <Image ID="Image:0">
    <Pixels ID="Pixels:0" DimensionOrder="XYZCT" Type="uint128"
            SizeX="1" SizeY="1" SizeZ="1" SizeC="1" SizeT="1"/>
  </Image>
</OME>"#;
    assert!(read_document_str(xml).is_err());
}

#[test]
fn test_naive_timestamp_is_taken_as_utc() {
    let xml = r#"<OME>
  <Image ID="Image:0">
    <AcquisitionDate>2021-06-01T12:00:00</AcquisitionDate>
    <Pixels ID="Pixels:0" DimensionOrder="XYZCT" Type="uint8"
            SizeX="1" SizeY="1" SizeZ="1" SizeC="1" SizeT="1"/>
  </Image>
</OME>"#;
    let ome = read_document_str(xml).expect("parse");
    assert_eq!(
        ome.images[0].acquisition_date,
        Some(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap())
    );
}
