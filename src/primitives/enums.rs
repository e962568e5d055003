//! Schema enumerations of the OME 2016-06 vocabulary.
//!
//! Each enumeration parses from and prints as the exact token the schema
//! uses in XML attributes. Unknown tokens are an error carrying the
//! offending input, never a silent fallback: `Other` is only produced when
//! the document itself says `Other`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidToken;

/// Defines a schema enumeration with its fixed attribute-token vocabulary
/// and the `Display`/`FromStr`/serde plumbing every one of them shares.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("Schema token `", $token, "`")]
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// The schema token for this value.
            pub fn token(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }

            /// All values of this enumeration, in schema order.
            pub fn values() -> &'static [$name] {
                &[ $( $name::$variant, )+ ]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $name {
            type Err = InvalidToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err(InvalidToken::new(stringify!($name), s)),
                }
            }
        }
    };
}

schema_enum! {
    /// Order in which planes are stored within a pixel block.
    DimensionOrder {
        Xyzct => "XYZCT",
        Xyztc => "XYZTC",
        Xyctz => "XYCTZ",
        Xyczt => "XYCZT",
        Xytcz => "XYTCZ",
        Xytzc => "XYTZC",
    }
}

schema_enum! {
    /// Storage type of a single sample within a plane.
    PixelType {
        Int8 => "int8",
        Int16 => "int16",
        Int32 => "int32",
        Uint8 => "uint8",
        Uint16 => "uint16",
        Uint32 => "uint32",
        Float => "float",
        Double => "double",
        Complex => "complex",
        DoubleComplex => "double-complex",
        Bit => "bit",
    }
}

impl PixelType {
    /// Storage size of one sample in bytes. `bit` reports 1.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelType::Int8 | PixelType::Uint8 | PixelType::Bit => 1,
            PixelType::Int16 | PixelType::Uint16 => 2,
            PixelType::Int32 | PixelType::Uint32 | PixelType::Float => 4,
            PixelType::Double | PixelType::Complex => 8,
            PixelType::DoubleComplex => 16,
        }
    }

    /// Whether samples of this type carry a sign.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            PixelType::Int8
                | PixelType::Int16
                | PixelType::Int32
                | PixelType::Float
                | PixelType::Double
                | PixelType::Complex
                | PixelType::DoubleComplex
        )
    }

    /// Whether samples of this type are floating point.
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            PixelType::Float | PixelType::Double | PixelType::Complex | PixelType::DoubleComplex
        )
    }
}

schema_enum! {
    /// Acquisition technique used for a channel.
    AcquisitionMode {
        WideField => "WideField",
        LaserScanningConfocalMicroscopy => "LaserScanningConfocalMicroscopy",
        SpinningDiskConfocal => "SpinningDiskConfocal",
        SlitScanConfocal => "SlitScanConfocal",
        MultiPhotonMicroscopy => "MultiPhotonMicroscopy",
        StructuredIllumination => "StructuredIllumination",
        SingleMoleculeImaging => "SingleMoleculeImaging",
        TotalInternalReflection => "TotalInternalReflection",
        FluorescenceLifetime => "FluorescenceLifetime",
        SpectralImaging => "SpectralImaging",
        FluorescenceCorrelationSpectroscopy => "FluorescenceCorrelationSpectroscopy",
        NearFieldScanningOpticalMicroscopy => "NearFieldScanningOpticalMicroscopy",
        SecondHarmonicGenerationImaging => "SecondHarmonicGenerationImaging",
        Palm => "PALM",
        Storm => "STORM",
        Sted => "STED",
        Tirf => "TIRF",
        Fsm => "FSM",
        Lcm => "LCM",
        BrightField => "BrightField",
        SweptFieldConfocal => "SweptFieldConfocal",
        Spim => "SPIM",
        Other => "Other",
    }
}

schema_enum! {
    /// Contrast technique applied to a channel.
    ContrastMethod {
        Brightfield => "Brightfield",
        Phase => "Phase",
        Dic => "DIC",
        HoffmanModulation => "HoffmanModulation",
        ObliqueIllumination => "ObliqueIllumination",
        PolarizedLight => "PolarizedLight",
        Darkfield => "Darkfield",
        Fluorescence => "Fluorescence",
        Other => "Other",
    }
}

schema_enum! {
    /// How a channel was illuminated.
    IlluminationType {
        Transmitted => "Transmitted",
        Epifluorescence => "Epifluorescence",
        Oblique => "Oblique",
        NonLinear => "NonLinear",
        Other => "Other",
    }
}

schema_enum! {
    /// Detector binning applied during readout.
    Binning {
        OneByOne => "1x1",
        TwoByTwo => "2x2",
        FourByFour => "4x4",
        EightByEight => "8x8",
        Other => "Other",
    }
}

schema_enum! {
    /// Kind of detector attached to an instrument.
    DetectorType {
        Ccd => "CCD",
        IntensifiedCcd => "IntensifiedCCD",
        AnalogVideo => "AnalogVideo",
        Pmt => "PMT",
        Photodiode => "Photodiode",
        Spectroscopy => "Spectroscopy",
        LifetimeImaging => "LifetimeImaging",
        CorrelationSpectroscopy => "CorrelationSpectroscopy",
        Ftir => "FTIR",
        EmCcd => "EMCCD",
        Apd => "APD",
        Cmos => "CMOS",
        EbCcd => "EBCCD",
        Other => "Other",
    }
}

schema_enum! {
    /// Kind of laser.
    LaserType {
        Excimer => "Excimer",
        Gas => "Gas",
        MetalVapor => "MetalVapor",
        SolidState => "SolidState",
        Dye => "Dye",
        Semiconductor => "Semiconductor",
        FreeElectron => "FreeElectron",
        Other => "Other",
    }
}

schema_enum! {
    /// Lasing medium of a laser.
    LaserMedium {
        Cu => "Cu",
        Ag => "Ag",
        ArFl => "ArFl",
        ArCl => "ArCl",
        KrFl => "KrFl",
        KrCl => "KrCl",
        XeFl => "XeFl",
        XeCl => "XeCl",
        XeBr => "XeBr",
        N => "N",
        Ar => "Ar",
        Kr => "Kr",
        Xe => "Xe",
        HeNe => "HeNe",
        HeCd => "HeCd",
        CO => "CO",
        CO2 => "CO2",
        H2O => "H2O",
        HFl => "HFl",
        NdGlass => "NdGlass",
        NdYag => "NdYAG",
        ErGlass => "ErGlass",
        ErYag => "ErYAG",
        HoYlf => "HoYLF",
        HoYag => "HoYAG",
        Ruby => "Ruby",
        TiSapphire => "TiSapphire",
        Alexandrite => "Alexandrite",
        Rhodamine6G => "Rhodamine6G",
        CoumarinC30 => "CoumarinC30",
        GaAs => "GaAs",
        GaAlAs => "GaAlAs",
        EMinus => "EMinus",
        Other => "Other",
    }
}

schema_enum! {
    /// Pulsing behavior of a laser.
    Pulse {
        Cw => "CW",
        Single => "Single",
        QSwitched => "QSwitched",
        Repetitive => "Repetitive",
        ModeLocked => "ModeLocked",
        Other => "Other",
    }
}

schema_enum! {
    /// Lamp type of an arc light source.
    ArcType {
        Hg => "Hg",
        Xe => "Xe",
        HgXe => "HgXe",
        Other => "Other",
    }
}

schema_enum! {
    /// Lamp type of a filament light source.
    FilamentType {
        Incandescent => "Incandescent",
        Halogen => "Halogen",
        Other => "Other",
    }
}

schema_enum! {
    /// Optical role of a filter.
    FilterType {
        Dichroic => "Dichroic",
        LongPass => "LongPass",
        ShortPass => "ShortPass",
        BandPass => "BandPass",
        MultiPass => "MultiPass",
        NeutralDensity => "NeutralDensity",
        Tuneable => "Tuneable",
        Other => "Other",
    }
}

schema_enum! {
    /// Optical correction of an objective.
    Correction {
        Uv => "UV",
        PlanApo => "PlanApo",
        PlanFluor => "PlanFluor",
        SuperFluor => "SuperFluor",
        VioletCorrected => "VioletCorrected",
        Achro => "Achro",
        Achromat => "Achromat",
        Fluor => "Fluor",
        Fl => "Fl",
        Fluar => "Fluar",
        Neofluar => "Neofluar",
        Fluotar => "Fluotar",
        Apo => "Apo",
        PlanNeofluar => "PlanNeofluar",
        Other => "Other",
    }
}

schema_enum! {
    /// Immersion medium an objective is designed for.
    Immersion {
        Oil => "Oil",
        Water => "Water",
        WaterDipping => "WaterDipping",
        Air => "Air",
        Multi => "Multi",
        Glycerol => "Glycerol",
        Other => "Other",
    }
}

schema_enum! {
    /// Medium actually present between objective and sample.
    Medium {
        Air => "Air",
        Oil => "Oil",
        Water => "Water",
        Glycerol => "Glycerol",
        Other => "Other",
    }
}

schema_enum! {
    /// Physical configuration of a microscope stand.
    MicroscopeType {
        Upright => "Upright",
        Inverted => "Inverted",
        Dissection => "Dissection",
        Electrophysiology => "Electrophysiology",
        Other => "Other",
    }
}

schema_enum! {
    /// Kind of experiment an acquisition belongs to.
    ExperimentType {
        Fp => "FP",
        Fret => "FRET",
        TimeLapse => "TimeLapse",
        FourDPlus => "FourDPlus",
        Screen => "Screen",
        Immunocytochemistry => "Immunocytochemistry",
        Immunofluorescence => "Immunofluorescence",
        Fish => "FISH",
        Electrophysiology => "Electrophysiology",
        IonImaging => "IonImaging",
        Colocalization => "Colocalization",
        PgiDocumentation => "PGIDocumentation",
        FluorescenceLifetime => "FluorescenceLifetime",
        SpectralImaging => "SpectralImaging",
        Photobleaching => "Photobleaching",
        SpimExperiment => "SPIM",
        Other => "Other",
    }
}

schema_enum! {
    /// How plate rows or columns are labelled.
    NamingConvention {
        Letter => "letter",
        Number => "number",
    }
}

schema_enum! {
    /// Fill rule used when rasterizing a shape.
    FillRule {
        EvenOdd => "EvenOdd",
        NonZero => "NonZero",
    }
}

schema_enum! {
    /// Font family used by a text shape.
    FontFamily {
        Serif => "serif",
        SansSerif => "sans-serif",
        Cursive => "cursive",
        Fantasy => "fantasy",
        Monospace => "monospace",
    }
}

schema_enum! {
    /// Font style used by a text shape.
    FontStyle {
        Bold => "Bold",
        BoldItalic => "BoldItalic",
        Italic => "Italic",
        Normal => "Normal",
    }
}

schema_enum! {
    /// Line-end marker of a line or polyline shape.
    Marker {
        Arrow => "Arrow",
    }
}
