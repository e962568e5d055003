use std::str::FromStr;

use super::*;

#[test]
fn test_length_conversion() {
    let l = Length::micrometers(1.5);
    let nm = l.convert_to(UnitsLength::Nanometer).unwrap();
    assert!((nm.value - 1500.0).abs() < 1e-9);
    assert_eq!(nm.unit, UnitsLength::Nanometer);
}

#[test]
fn test_pixel_length_does_not_convert() {
    let l = Length::new(512.0, UnitsLength::Pixel);
    assert!(l.convert_to(UnitsLength::Micrometer).is_none());
    assert!(Length::micrometers(1.0)
        .convert_to(UnitsLength::ReferenceFrame)
        .is_none());
}

#[test]
fn test_temperature_conversion_is_affine() {
    let t = Temperature::new(37.0, UnitsTemperature::Celsius);
    let k = t.convert_to(UnitsTemperature::Kelvin);
    assert!((k.value - 310.15).abs() < 1e-9);
    let f = t.convert_to(UnitsTemperature::Fahrenheit);
    assert!((f.value - 98.6).abs() < 1e-9);
}

#[test]
fn test_time_display_uses_symbol() {
    let t = Time::new(12.5, UnitsTime::Millisecond);
    assert_eq!(t.to_string(), "12.5 ms");
}

#[test]
fn test_unit_token_roundtrip() {
    assert_eq!(UnitsLength::from_str("µm").unwrap(), UnitsLength::Micrometer);
    // ASCII fallback accepted on input, canonical symbol on output
    assert_eq!(UnitsLength::from_str("um").unwrap(), UnitsLength::Micrometer);
    assert_eq!(UnitsLength::Micrometer.to_string(), "µm");
    assert_eq!(
        UnitsLength::from_str("reference frame").unwrap(),
        UnitsLength::ReferenceFrame
    );
}

#[test]
fn test_unknown_unit_token_is_an_error() {
    let err = UnitsLength::from_str("furlong").unwrap_err();
    assert_eq!(err.kind, "UnitsLength");
    assert_eq!(err.token, "furlong");
}

#[test]
fn test_pixel_type_properties() {
    let t = PixelType::from_str("uint16").unwrap();
    assert_eq!(t.bytes_per_pixel(), 2);
    assert!(!t.is_signed());
    assert!(!t.is_float());
    assert!(PixelType::Double.is_float());
    assert_eq!(PixelType::DoubleComplex.bytes_per_pixel(), 16);
}

#[test]
fn test_schema_enum_roundtrip_all_values() {
    for v in DimensionOrder::values() {
        assert_eq!(&DimensionOrder::from_str(v.token()).unwrap(), v);
    }
    for v in LaserMedium::values() {
        assert_eq!(&LaserMedium::from_str(v.token()).unwrap(), v);
    }
    for v in Binning::values() {
        assert_eq!(&Binning::from_str(v.token()).unwrap(), v);
    }
}

#[test]
fn test_enum_other_only_from_other() {
    assert!(DetectorType::from_str("SuperCamera").is_err());
    assert_eq!(DetectorType::from_str("Other").unwrap(), DetectorType::Other);
}

#[test]
fn test_color_packing() {
    let c = Color::new(255, 0, 0, 255);
    assert_eq!(c.red(), 255);
    assert_eq!(c.green(), 0);
    assert_eq!(c.alpha(), 255);
    assert_eq!(c.to_string(), "-16776961");
    assert_eq!(Color::from_str("-16776961").unwrap(), c);
    assert_eq!(Color::default(), Color::new(255, 255, 255, 255));
}

#[test]
fn test_lsid_forms() {
    assert_eq!(lsid("Image", 0), "Image:0");
    assert_eq!(lsid2("Pixels", 0, 3), "Pixels:0:3");
    assert_eq!(lsid3("WellSample", 0, 1, 2), "WellSample:0:1:2");
    let urn = new_uuid_urn();
    assert!(urn.starts_with("urn:uuid:"));
    assert_ne!(urn, new_uuid_urn());
}
