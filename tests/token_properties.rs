//! Property tests over token and value round-trips.

use std::str::FromStr;

use proptest::prelude::*;

use omexml::primitives::{Color, Length, Temperature, UnitsLength, UnitsTemperature};

proptest! {
    #[test]
    fn color_display_parse_roundtrip(packed in any::<i32>()) {
        let color = Color(packed);
        let parsed = Color::from_str(&color.to_string()).expect("parse");
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn color_components_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = Color::new(r, g, b, a);
        prop_assert_eq!(color.red(), r);
        prop_assert_eq!(color.green(), g);
        prop_assert_eq!(color.blue(), b);
        prop_assert_eq!(color.alpha(), a);
    }

    #[test]
    fn length_conversion_roundtrips(value in -1.0e9f64..1.0e9) {
        let micrometers = Length::micrometers(value);
        let nanometers = micrometers.convert_to(UnitsLength::Nanometer).expect("convert");
        let back = nanometers.convert_to(UnitsLength::Micrometer).expect("convert");
        let tolerance = value.abs().max(1.0) * 1e-12;
        prop_assert!((back.value - value).abs() <= tolerance);
    }

    #[test]
    fn temperature_conversion_roundtrips(value in -200.0f64..1000.0) {
        let celsius = Temperature::new(value, UnitsTemperature::Celsius);
        let fahrenheit = celsius.convert_to(UnitsTemperature::Fahrenheit);
        let back = fahrenheit.convert_to(UnitsTemperature::Celsius);
        prop_assert!((back.value - value).abs() < 1e-9);
    }

    #[test]
    fn unit_symbols_roundtrip(index in 0usize..11) {
        let unit = UnitsLength::values()[index % UnitsLength::values().len()];
        prop_assert_eq!(UnitsLength::from_str(unit.symbol()).expect("parse"), unit);
    }
}
