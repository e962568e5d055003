//! Streaming OME-XML parser using quick-xml.
//!
//! Pull-based: each element parser consumes events up to its own closing
//! tag. Unknown elements are skipped with their whole subtree, and element
//! names are matched on the local part so prefixed documents parse too.

use std::io::BufRead;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::OmeXmlError;
use crate::model::{
    Annotation, AnnotationValue, BinaryFile, Channel, Dataset, Detector, DetectorSettings,
    Dichroic, Experiment, Experimenter, ExperimenterGroup, Filter, FilterSet, Image,
    ImagingEnvironment, Instrument, LightPath, LightSource, LightSourceKind, LightSourceSettings,
    MapPair, MicrobeamManipulation, Microscope, Objective, ObjectiveSettings, Ome, Pixels, Plane,
    Plate, PlateAcquisition, Project, Reagent, Roi, Screen, Shape, ShapeGeometry, StageLabel,
    TiffData, TiffDataUuid, TransmittanceRange, Well, WellSample,
};
use crate::model::AffineTransform;
use crate::primitives::{
    ElectricPotential, Frequency, Length, Power, Pressure, Temperature, Time,
    UnitsElectricPotential, UnitsFrequency, UnitsLength, UnitsPower, UnitsPressure,
    UnitsTemperature, UnitsTime,
};

/// Parse a document from a string.
pub fn read_document_str(xml: &str) -> Result<Ome, OmeXmlError> {
    read_document(xml.as_bytes())
}

/// Parse a document from a buffered reader.
pub fn read_document<R: BufRead>(source: R) -> Result<Ome, OmeXmlError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if e.local_name().as_ref() == b"OME" {
                    return parse_ome(&mut reader, e);
                }
                return Err(OmeXmlError::UnexpectedRoot(
                    String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                ));
            }
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"OME" {
                    let mut ome = Ome::new();
                    ome.uuid = attr(e, "UUID")?;
                    ome.creator = attr(e, "Creator")?;
                    return Ok(ome);
                }
                return Err(OmeXmlError::UnexpectedRoot(
                    String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                ));
            }
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
}

// -- low-level helpers ----------------------------------------------------

/// Look up an attribute by local name.
fn attr(e: &BytesStart, name: &str) -> Result<Option<String>, OmeXmlError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| OmeXmlError::Xml(quick_xml::Error::from(err)))?;
        if attribute.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(std::str::from_utf8(&attribute.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Look up a mandatory attribute.
fn require_attr(e: &BytesStart, element: &str, name: &str) -> Result<String, OmeXmlError> {
    attr(e, name)?.ok_or_else(|| OmeXmlError::MissingAttribute {
        element: element.to_string(),
        attribute: name.to_string(),
    })
}

/// The mandatory `ID` attribute of a reference element.
fn require_id(e: &BytesStart) -> Result<String, OmeXmlError> {
    require_attr(e, &String::from_utf8_lossy(e.local_name().as_ref()), "ID")
}

/// Parse an attribute through `FromStr`.
fn parse_attr<T>(e: &BytesStart, name: &str) -> Result<Option<T>, OmeXmlError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match attr(e, name)? {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|err: T::Err| OmeXmlError::InvalidValue {
                attribute: name.to_string(),
                message: format!("{err} (got {value:?})"),
            }),
        None => Ok(None),
    }
}

/// Parse a boolean attribute, accepting the xsd `1`/`0` forms too.
fn bool_attr(e: &BytesStart, name: &str) -> Result<Option<bool>, OmeXmlError> {
    match attr(e, name)?.as_deref() {
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(other) => Err(OmeXmlError::InvalidValue {
            attribute: name.to_string(),
            message: format!("expected boolean, got {other:?}"),
        }),
        None => Ok(None),
    }
}

/// Parse an `xsd:dateTime`; naive timestamps are taken as UTC.
fn timestamp(attribute: &str, value: &str) -> Result<DateTime<Utc>, OmeXmlError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| OmeXmlError::InvalidValue {
            attribute: attribute.to_string(),
            message: err.to_string(),
        })
}

fn timestamp_attr(e: &BytesStart, name: &str) -> Result<Option<DateTime<Utc>>, OmeXmlError> {
    match attr(e, name)? {
        Some(value) => timestamp(name, &value).map(Some),
        None => Ok(None),
    }
}

/// Defines a reader for a value/unit attribute pair, falling back to the
/// schema default unit when the unit attribute is absent.
macro_rules! quantity_attr_fn {
    ($name:ident, $qty:ident, $unit:ty) => {
        fn $name(
            e: &BytesStart,
            value_name: &str,
            unit_name: &str,
        ) -> Result<Option<$qty>, OmeXmlError> {
            let Some(value) = parse_attr::<f64>(e, value_name)? else {
                return Ok(None);
            };
            let unit = match attr(e, unit_name)? {
                Some(token) => token.parse::<$unit>()?,
                None => <$unit>::default(),
            };
            Ok(Some($qty::new(value, unit)))
        }
    };
}

quantity_attr_fn!(length_attr, Length, UnitsLength);
quantity_attr_fn!(time_attr, Time, UnitsTime);
quantity_attr_fn!(frequency_attr, Frequency, UnitsFrequency);
quantity_attr_fn!(pressure_attr, Pressure, UnitsPressure);
quantity_attr_fn!(temperature_attr, Temperature, UnitsTemperature);
quantity_attr_fn!(power_attr, Power, UnitsPower);
quantity_attr_fn!(potential_attr, ElectricPotential, UnitsElectricPotential);

/// Skip the remainder of the element whose `Start` event was just read.
fn skip_element<R: BufRead>(reader: &mut Reader<R>) -> Result<(), OmeXmlError> {
    let mut depth = 1usize;
    let mut buf = Vec::new();
    while depth > 0 {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Collect the text content of the element whose `Start` event was just
/// read, up to its closing tag. Nested markup contributes its text only.
fn read_text<R: BufRead>(reader: &mut Reader<R>) -> Result<String, OmeXmlError> {
    let mut depth = 1usize;
    let mut buf = Vec::new();
    let mut text = String::new();
    while depth > 0 {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(text)
}

// -- document root --------------------------------------------------------

fn parse_ome<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Ome, OmeXmlError> {
    let mut ome = Ome::new();
    ome.uuid = attr(start, "UUID")?;
    ome.creator = attr(start, "Creator")?;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Project" => ome.projects.push(parse_project(reader, e, false)?),
                b"Dataset" => ome.datasets.push(parse_dataset(reader, e, false)?),
                b"Experiment" => ome.experiments.push(parse_experiment(reader, e, false)?),
                b"Experimenter" => ome.experimenters.push(parse_experimenter(reader, e, false)?),
                b"ExperimenterGroup" => ome
                    .experimenter_groups
                    .push(parse_experimenter_group(reader, e, false)?),
                b"Instrument" => ome.instruments.push(parse_instrument(reader, e, false)?),
                b"Image" => ome.images.push(parse_image(reader, e)?),
                b"Plate" => ome.plates.push(parse_plate(reader, e, false)?),
                b"Screen" => ome.screens.push(parse_screen(reader, e, false)?),
                b"ROI" => ome.rois.push(parse_roi(reader, e)?),
                b"StructuredAnnotations" => {
                    parse_structured_annotations(reader, &mut ome)?;
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Project" => ome.projects.push(parse_project(reader, e, true)?),
                b"Dataset" => ome.datasets.push(parse_dataset(reader, e, true)?),
                b"Experiment" => ome.experiments.push(parse_experiment(reader, e, true)?),
                b"Experimenter" => ome.experimenters.push(parse_experimenter(reader, e, true)?),
                b"ExperimenterGroup" => ome
                    .experimenter_groups
                    .push(parse_experimenter_group(reader, e, true)?),
                b"Instrument" => ome.instruments.push(parse_instrument(reader, e, true)?),
                b"Plate" => ome.plates.push(parse_plate(reader, e, true)?),
                b"Screen" => ome.screens.push(parse_screen(reader, e, true)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(ome)
}

// -- organizational elements ----------------------------------------------

fn parse_project<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Project, OmeXmlError> {
    let mut project = Project::new(require_attr(start, "Project", "ID")?);
    project.name = attr(start, "Name")?;
    if empty {
        return Ok(project);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => project.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExperimenterRef" => project.experimenter_ref = Some(require_id(e)?),
                b"ExperimenterGroupRef" => project.experimenter_group_ref = Some(require_id(e)?),
                b"DatasetRef" => project.dataset_refs.push(require_id(e)?),
                b"AnnotationRef" => project.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(project)
}

fn parse_dataset<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Dataset, OmeXmlError> {
    let mut dataset = Dataset::new(require_attr(start, "Dataset", "ID")?);
    dataset.name = attr(start, "Name")?;
    if empty {
        return Ok(dataset);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => dataset.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExperimenterRef" => dataset.experimenter_ref = Some(require_id(e)?),
                b"ExperimenterGroupRef" => dataset.experimenter_group_ref = Some(require_id(e)?),
                b"ImageRef" => dataset.image_refs.push(require_id(e)?),
                b"AnnotationRef" => dataset.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(dataset)
}

fn parse_experiment<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Experiment, OmeXmlError> {
    let mut experiment = Experiment::new(require_attr(start, "Experiment", "ID")?);
    if let Some(types) = attr(start, "Type")? {
        for token in types.split_whitespace() {
            experiment.experiment_types.push(token.parse()?);
        }
    }
    if empty {
        return Ok(experiment);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => experiment.description = Some(read_text(reader)?),
                b"MicrobeamManipulation" => experiment
                    .microbeam_manipulations
                    .push(parse_microbeam_manipulation(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExperimenterRef" => experiment.experimenter_ref = Some(require_id(e)?),
                b"MicrobeamManipulation" => experiment
                    .microbeam_manipulations
                    .push(parse_microbeam_manipulation(reader, e, true)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(experiment)
}

fn parse_microbeam_manipulation<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<MicrobeamManipulation, OmeXmlError> {
    let mut manipulation = MicrobeamManipulation {
        id: require_attr(start, "MicrobeamManipulation", "ID")?,
        ..MicrobeamManipulation::default()
    };
    if let Some(types) = attr(start, "Type")? {
        manipulation.manipulation_types =
            types.split_whitespace().map(str::to_string).collect();
    }
    if empty {
        return Ok(manipulation);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => manipulation.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ROIRef" => manipulation.roi_refs.push(require_id(e)?),
                b"ExperimenterRef" => manipulation.experimenter_ref = Some(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(manipulation)
}

fn parse_experimenter<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Experimenter, OmeXmlError> {
    let mut experimenter = Experimenter {
        id: require_attr(start, "Experimenter", "ID")?,
        ..Experimenter::default()
    };
    experimenter.first_name = attr(start, "FirstName")?;
    experimenter.middle_name = attr(start, "MiddleName")?;
    experimenter.last_name = attr(start, "LastName")?;
    experimenter.email = attr(start, "Email")?;
    experimenter.institution = attr(start, "Institution")?;
    experimenter.user_name = attr(start, "UserName")?;
    if empty {
        return Ok(experimenter);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => skip_element(reader)?,
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"AnnotationRef" {
                    experimenter.annotation_refs.push(require_id(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(experimenter)
}

fn parse_experimenter_group<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<ExperimenterGroup, OmeXmlError> {
    let mut group = ExperimenterGroup {
        id: require_attr(start, "ExperimenterGroup", "ID")?,
        ..ExperimenterGroup::default()
    };
    group.name = attr(start, "Name")?;
    if empty {
        return Ok(group);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => group.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExperimenterRef" => group.experimenter_refs.push(require_id(e)?),
                b"Leader" => group.leaders.push(require_id(e)?),
                b"AnnotationRef" => group.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(group)
}

// -- instrument elements --------------------------------------------------

fn parse_instrument<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Instrument, OmeXmlError> {
    let mut instrument = Instrument::new(require_attr(start, "Instrument", "ID")?);
    if empty {
        return Ok(instrument);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Laser" | b"Arc" | b"Filament" | b"LightEmittingDiode"
                | b"GenericExcitationSource" => instrument
                    .light_sources
                    .push(parse_light_source(reader, e, false)?),
                b"Microscope" => {
                    instrument.microscope = Some(parse_microscope(e)?);
                    skip_element(reader)?;
                }
                b"Detector" => instrument.detectors.push(parse_detector(reader, e, false)?),
                b"Objective" => instrument
                    .objectives
                    .push(parse_objective(reader, e, false)?),
                b"Filter" => instrument.filters.push(parse_filter(reader, e, false)?),
                b"FilterSet" => instrument
                    .filter_sets
                    .push(parse_filter_set(reader, e, false)?),
                b"Dichroic" => instrument
                    .dichroics
                    .push(parse_dichroic(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Microscope" => instrument.microscope = Some(parse_microscope(e)?),
                b"Laser" | b"Arc" | b"Filament" | b"LightEmittingDiode"
                | b"GenericExcitationSource" => instrument
                    .light_sources
                    .push(parse_light_source(reader, e, true)?),
                b"Detector" => instrument.detectors.push(parse_detector(reader, e, true)?),
                b"Objective" => instrument.objectives.push(parse_objective(reader, e, true)?),
                b"Filter" => instrument.filters.push(parse_filter(reader, e, true)?),
                b"FilterSet" => instrument
                    .filter_sets
                    .push(parse_filter_set(reader, e, true)?),
                b"Dichroic" => instrument.dichroics.push(parse_dichroic(reader, e, true)?),
                b"AnnotationRef" => instrument.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(instrument)
}

fn parse_microscope(e: &BytesStart) -> Result<Microscope, OmeXmlError> {
    Ok(Microscope {
        microscope_type: parse_attr(e, "Type")?,
        manufacturer: attr(e, "Manufacturer")?,
        model: attr(e, "Model")?,
        serial_number: attr(e, "SerialNumber")?,
        lot_number: attr(e, "LotNumber")?,
    })
}

fn parse_light_source<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<LightSource, OmeXmlError> {
    let element = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let kind = match element.as_str() {
        "Laser" => LightSourceKind::Laser {
            laser_type: parse_attr(start, "Type")?,
            laser_medium: parse_attr(start, "LaserMedium")?,
            wavelength: length_attr(start, "Wavelength", "WavelengthUnit")?,
            frequency_multiplication: parse_attr(start, "FrequencyMultiplication")?,
            tuneable: bool_attr(start, "Tuneable")?,
            pulse: parse_attr(start, "Pulse")?,
            pockel_cell: bool_attr(start, "PockelCell")?,
            repetition_rate: frequency_attr(start, "RepetitionRate", "RepetitionRateUnit")?,
            pump_ref: None,
        },
        "Arc" => LightSourceKind::Arc {
            arc_type: parse_attr(start, "Type")?,
        },
        "Filament" => LightSourceKind::Filament {
            filament_type: parse_attr(start, "Type")?,
        },
        "GenericExcitationSource" => LightSourceKind::GenericExcitationSource { map: Vec::new() },
        _ => LightSourceKind::LightEmittingDiode,
    };
    let mut light_source = LightSource::new(require_attr(start, &element, "ID")?, kind);
    light_source.manufacturer = attr(start, "Manufacturer")?;
    light_source.model = attr(start, "Model")?;
    light_source.serial_number = attr(start, "SerialNumber")?;
    light_source.lot_number = attr(start, "LotNumber")?;
    light_source.power = power_attr(start, "Power", "PowerUnit")?;
    if empty {
        return Ok(light_source);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Map" => {
                    let pairs = parse_map(reader)?;
                    if let LightSourceKind::GenericExcitationSource { map } =
                        &mut light_source.kind
                    {
                        *map = pairs.into_iter().map(|p| (p.key, p.value)).collect();
                    }
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Pump" => {
                    let id = require_id(e)?;
                    if let LightSourceKind::Laser { pump_ref, .. } = &mut light_source.kind {
                        *pump_ref = Some(id);
                    }
                }
                b"AnnotationRef" => light_source.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(light_source)
}

/// Parse the `M` children of a `Map` element whose `Start` was just read.
fn parse_map<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<MapPair>, OmeXmlError> {
    let mut pairs = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if e.local_name().as_ref() == b"M" {
                    let key = attr(e, "K")?.unwrap_or_default();
                    let value = read_text(reader)?;
                    pairs.push(MapPair::new(key, value));
                } else {
                    skip_element(reader)?;
                }
            }
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"M" {
                    pairs.push(MapPair::new(attr(e, "K")?.unwrap_or_default(), ""));
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(pairs)
}

fn parse_detector<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Detector, OmeXmlError> {
    let mut detector = Detector {
        id: require_attr(start, "Detector", "ID")?,
        ..Detector::default()
    };
    detector.detector_type = parse_attr(start, "Type")?;
    detector.manufacturer = attr(start, "Manufacturer")?;
    detector.model = attr(start, "Model")?;
    detector.serial_number = attr(start, "SerialNumber")?;
    detector.lot_number = attr(start, "LotNumber")?;
    detector.gain = parse_attr(start, "Gain")?;
    detector.voltage = potential_attr(start, "Voltage", "VoltageUnit")?;
    detector.offset = parse_attr(start, "Offset")?;
    detector.zoom = parse_attr(start, "Zoom")?;
    detector.amplification_gain = parse_attr(start, "AmplificationGain")?;
    if !empty {
        collect_annotation_refs(reader, &mut detector.annotation_refs)?;
    }
    Ok(detector)
}

fn parse_objective<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Objective, OmeXmlError> {
    let mut objective = Objective {
        id: require_attr(start, "Objective", "ID")?,
        ..Objective::default()
    };
    objective.manufacturer = attr(start, "Manufacturer")?;
    objective.model = attr(start, "Model")?;
    objective.serial_number = attr(start, "SerialNumber")?;
    objective.lot_number = attr(start, "LotNumber")?;
    objective.correction = parse_attr(start, "Correction")?;
    objective.immersion = parse_attr(start, "Immersion")?;
    objective.lens_na = parse_attr(start, "LensNA")?;
    objective.nominal_magnification = parse_attr(start, "NominalMagnification")?;
    objective.calibrated_magnification = parse_attr(start, "CalibratedMagnification")?;
    objective.working_distance = length_attr(start, "WorkingDistance", "WorkingDistanceUnit")?;
    objective.iris = bool_attr(start, "Iris")?;
    if !empty {
        collect_annotation_refs(reader, &mut objective.annotation_refs)?;
    }
    Ok(objective)
}

/// Consume the remaining children of a leaf-like element, keeping only its
/// `AnnotationRef` links.
fn collect_annotation_refs<R: BufRead>(
    reader: &mut Reader<R>,
    refs: &mut Vec<String>,
) -> Result<(), OmeXmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => skip_element(reader)?,
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"AnnotationRef" {
                    refs.push(require_id(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

fn parse_filter<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Filter, OmeXmlError> {
    let mut filter = Filter {
        id: require_attr(start, "Filter", "ID")?,
        ..Filter::default()
    };
    filter.filter_type = parse_attr(start, "Type")?;
    filter.manufacturer = attr(start, "Manufacturer")?;
    filter.model = attr(start, "Model")?;
    filter.serial_number = attr(start, "SerialNumber")?;
    filter.lot_number = attr(start, "LotNumber")?;
    filter.filter_wheel = attr(start, "FilterWheel")?;
    if empty {
        return Ok(filter);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"TransmittanceRange" => {
                    filter.transmittance_range = Some(parse_transmittance_range(e)?);
                    skip_element(reader)?;
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"TransmittanceRange" => {
                    filter.transmittance_range = Some(parse_transmittance_range(e)?)
                }
                b"AnnotationRef" => filter.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(filter)
}

fn parse_transmittance_range(e: &BytesStart) -> Result<TransmittanceRange, OmeXmlError> {
    Ok(TransmittanceRange {
        cut_in: length_attr(e, "CutIn", "CutInUnit")?,
        cut_in_tolerance: length_attr(e, "CutInTolerance", "CutInToleranceUnit")?,
        cut_out: length_attr(e, "CutOut", "CutOutUnit")?,
        cut_out_tolerance: length_attr(e, "CutOutTolerance", "CutOutToleranceUnit")?,
        transmittance: parse_attr(e, "Transmittance")?,
    })
}

fn parse_filter_set<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<FilterSet, OmeXmlError> {
    let mut filter_set = FilterSet {
        id: require_attr(start, "FilterSet", "ID")?,
        ..FilterSet::default()
    };
    filter_set.manufacturer = attr(start, "Manufacturer")?;
    filter_set.model = attr(start, "Model")?;
    filter_set.serial_number = attr(start, "SerialNumber")?;
    filter_set.lot_number = attr(start, "LotNumber")?;
    if empty {
        return Ok(filter_set);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => skip_element(reader)?,
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExcitationFilterRef" => {
                    filter_set.excitation_filter_refs.push(require_id(e)?)
                }
                b"DichroicRef" => filter_set.dichroic_ref = Some(require_id(e)?),
                b"EmissionFilterRef" => filter_set.emission_filter_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(filter_set)
}

fn parse_dichroic<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Dichroic, OmeXmlError> {
    let mut dichroic = Dichroic {
        id: require_attr(start, "Dichroic", "ID")?,
        ..Dichroic::default()
    };
    dichroic.manufacturer = attr(start, "Manufacturer")?;
    dichroic.model = attr(start, "Model")?;
    dichroic.serial_number = attr(start, "SerialNumber")?;
    dichroic.lot_number = attr(start, "LotNumber")?;
    if !empty {
        collect_annotation_refs(reader, &mut dichroic.annotation_refs)?;
    }
    Ok(dichroic)
}

// -- image elements -------------------------------------------------------

fn parse_image<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
) -> Result<Image, OmeXmlError> {
    let mut image = Image::new(require_attr(start, "Image", "ID")?);
    image.name = attr(start, "Name")?;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"AcquisitionDate" => {
                    let text = read_text(reader)?;
                    image.acquisition_date = Some(timestamp("AcquisitionDate", text.trim())?);
                }
                b"Description" => image.description = Some(read_text(reader)?),
                b"Pixels" => image.pixels = parse_pixels(reader, e)?,
                b"ObjectiveSettings" => {
                    image.objective_settings = Some(parse_objective_settings(e)?);
                    skip_element(reader)?;
                }
                b"ImagingEnvironment" => {
                    image.imaging_environment = Some(parse_imaging_environment(e)?);
                    skip_element(reader)?;
                }
                b"StageLabel" => {
                    image.stage_label = Some(parse_stage_label(e)?);
                    skip_element(reader)?;
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExperimenterRef" => image.experimenter_ref = Some(require_id(e)?),
                b"ExperimentRef" => image.experiment_ref = Some(require_id(e)?),
                b"ExperimenterGroupRef" => image.experimenter_group_ref = Some(require_id(e)?),
                b"InstrumentRef" => image.instrument_ref = Some(require_id(e)?),
                b"ObjectiveSettings" => {
                    image.objective_settings = Some(parse_objective_settings(e)?)
                }
                b"ImagingEnvironment" => {
                    image.imaging_environment = Some(parse_imaging_environment(e)?)
                }
                b"StageLabel" => image.stage_label = Some(parse_stage_label(e)?),
                b"ROIRef" => image.roi_refs.push(require_id(e)?),
                b"MicrobeamManipulationRef" => {
                    image.microbeam_manipulation_refs.push(require_id(e)?)
                }
                b"AnnotationRef" => image.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(image)
}

fn parse_objective_settings(e: &BytesStart) -> Result<ObjectiveSettings, OmeXmlError> {
    Ok(ObjectiveSettings {
        id: require_attr(e, "ObjectiveSettings", "ID")?,
        correction_collar: parse_attr(e, "CorrectionCollar")?,
        medium: parse_attr(e, "Medium")?,
        refractive_index: parse_attr(e, "RefractiveIndex")?,
    })
}

fn parse_imaging_environment(e: &BytesStart) -> Result<ImagingEnvironment, OmeXmlError> {
    Ok(ImagingEnvironment {
        temperature: temperature_attr(e, "Temperature", "TemperatureUnit")?,
        air_pressure: pressure_attr(e, "AirPressure", "AirPressureUnit")?,
        humidity: parse_attr(e, "Humidity")?,
        co2_percent: parse_attr(e, "CO2Percent")?,
    })
}

fn parse_stage_label(e: &BytesStart) -> Result<StageLabel, OmeXmlError> {
    Ok(StageLabel {
        name: require_attr(e, "StageLabel", "Name")?,
        x: length_attr(e, "X", "XUnit")?,
        y: length_attr(e, "Y", "YUnit")?,
        z: length_attr(e, "Z", "ZUnit")?,
    })
}

fn parse_pixels<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
) -> Result<Pixels, OmeXmlError> {
    let mut pixels = Pixels {
        id: require_attr(start, "Pixels", "ID")?,
        ..Pixels::default()
    };
    pixels.dimension_order = require_attr(start, "Pixels", "DimensionOrder")?.parse()?;
    pixels.pixel_type = require_attr(start, "Pixels", "Type")?.parse()?;
    pixels.size_x = parse_attr(start, "SizeX")?.unwrap_or(1);
    pixels.size_y = parse_attr(start, "SizeY")?.unwrap_or(1);
    pixels.size_z = parse_attr(start, "SizeZ")?.unwrap_or(1);
    pixels.size_c = parse_attr(start, "SizeC")?.unwrap_or(1);
    pixels.size_t = parse_attr(start, "SizeT")?.unwrap_or(1);
    pixels.physical_size_x = length_attr(start, "PhysicalSizeX", "PhysicalSizeXUnit")?;
    pixels.physical_size_y = length_attr(start, "PhysicalSizeY", "PhysicalSizeYUnit")?;
    pixels.physical_size_z = length_attr(start, "PhysicalSizeZ", "PhysicalSizeZUnit")?;
    pixels.time_increment = time_attr(start, "TimeIncrement", "TimeIncrementUnit")?;
    pixels.significant_bits = parse_attr(start, "SignificantBits")?;
    pixels.big_endian = bool_attr(start, "BigEndian")?;
    pixels.interleaved = bool_attr(start, "Interleaved")?;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Channel" => pixels.channels.push(parse_channel(reader, e, false)?),
                b"Plane" => pixels.planes.push(parse_plane(reader, e, false)?),
                b"TiffData" => pixels.tiff_data.push(parse_tiff_data(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Channel" => pixels.channels.push(parse_channel(reader, e, true)?),
                b"Plane" => pixels.planes.push(parse_plane(reader, e, true)?),
                b"TiffData" => pixels.tiff_data.push(parse_tiff_data(reader, e, true)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(pixels)
}

fn parse_channel<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Channel, OmeXmlError> {
    let mut channel = Channel {
        id: require_attr(start, "Channel", "ID")?,
        ..Channel::default()
    };
    channel.name = attr(start, "Name")?;
    channel.samples_per_pixel = parse_attr(start, "SamplesPerPixel")?;
    channel.color = parse_attr(start, "Color")?;
    channel.acquisition_mode = parse_attr(start, "AcquisitionMode")?;
    channel.illumination_type = parse_attr(start, "IlluminationType")?;
    channel.contrast_method = parse_attr(start, "ContrastMethod")?;
    channel.excitation_wavelength =
        length_attr(start, "ExcitationWavelength", "ExcitationWavelengthUnit")?;
    channel.emission_wavelength =
        length_attr(start, "EmissionWavelength", "EmissionWavelengthUnit")?;
    channel.fluor = attr(start, "Fluor")?;
    channel.nd_filter = parse_attr(start, "NDFilter")?;
    channel.pinhole_size = length_attr(start, "PinholeSize", "PinholeSizeUnit")?;
    channel.pockel_cell_setting = parse_attr(start, "PockelCellSetting")?;
    if empty {
        return Ok(channel);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"LightPath" => channel.light_path = Some(parse_light_path(reader)?),
                b"LightSourceSettings" => {
                    channel.light_source_settings = Some(parse_light_source_settings(e)?);
                    skip_element(reader)?;
                }
                b"DetectorSettings" => {
                    channel.detector_settings = Some(parse_detector_settings(e)?);
                    skip_element(reader)?;
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"LightSourceSettings" => {
                    channel.light_source_settings = Some(parse_light_source_settings(e)?)
                }
                b"DetectorSettings" => {
                    channel.detector_settings = Some(parse_detector_settings(e)?)
                }
                b"AnnotationRef" => channel.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(channel)
}

fn parse_light_source_settings(e: &BytesStart) -> Result<LightSourceSettings, OmeXmlError> {
    Ok(LightSourceSettings {
        id: require_attr(e, "LightSourceSettings", "ID")?,
        attenuation: parse_attr(e, "Attenuation")?,
        wavelength: length_attr(e, "Wavelength", "WavelengthUnit")?,
    })
}

fn parse_detector_settings(e: &BytesStart) -> Result<DetectorSettings, OmeXmlError> {
    Ok(DetectorSettings {
        id: require_attr(e, "DetectorSettings", "ID")?,
        offset: parse_attr(e, "Offset")?,
        gain: parse_attr(e, "Gain")?,
        voltage: potential_attr(e, "Voltage", "VoltageUnit")?,
        zoom: parse_attr(e, "Zoom")?,
        binning: parse_attr(e, "Binning")?,
        integration: parse_attr(e, "Integration")?,
        read_out_rate: parse_attr(e, "ReadOutRate")?,
    })
}

fn parse_light_path<R: BufRead>(reader: &mut Reader<R>) -> Result<LightPath, OmeXmlError> {
    let mut light_path = LightPath::default();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => skip_element(reader)?,
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"ExcitationFilterRef" => {
                    light_path.excitation_filter_refs.push(require_id(e)?)
                }
                b"DichroicRef" => light_path.dichroic_ref = Some(require_id(e)?),
                b"EmissionFilterRef" => light_path.emission_filter_refs.push(require_id(e)?),
                b"AnnotationRef" => light_path.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(light_path)
}

fn parse_plane<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Plane, OmeXmlError> {
    let mut plane = Plane::default();
    plane.the_z = parse_attr(start, "TheZ")?.unwrap_or(0);
    plane.the_c = parse_attr(start, "TheC")?.unwrap_or(0);
    plane.the_t = parse_attr(start, "TheT")?.unwrap_or(0);
    plane.delta_t = time_attr(start, "DeltaT", "DeltaTUnit")?;
    plane.exposure_time = time_attr(start, "ExposureTime", "ExposureTimeUnit")?;
    plane.position_x = length_attr(start, "PositionX", "PositionXUnit")?;
    plane.position_y = length_attr(start, "PositionY", "PositionYUnit")?;
    plane.position_z = length_attr(start, "PositionZ", "PositionZUnit")?;
    if !empty {
        collect_annotation_refs(reader, &mut plane.annotation_refs)?;
    }
    Ok(plane)
}

fn parse_tiff_data<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<TiffData, OmeXmlError> {
    let mut tiff_data = TiffData {
        ifd: parse_attr(start, "IFD")?,
        first_z: parse_attr(start, "FirstZ")?,
        first_c: parse_attr(start, "FirstC")?,
        first_t: parse_attr(start, "FirstT")?,
        plane_count: parse_attr(start, "PlaneCount")?,
        uuid: None,
    };
    if empty {
        return Ok(tiff_data);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if e.local_name().as_ref() == b"UUID" {
                    let file_name = attr(e, "FileName")?;
                    let value = read_text(reader)?;
                    tiff_data.uuid = Some(TiffDataUuid {
                        value: value.trim().to_string(),
                        file_name,
                    });
                } else {
                    skip_element(reader)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(tiff_data)
}

// -- screening elements ---------------------------------------------------

fn parse_plate<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Plate, OmeXmlError> {
    let mut plate = Plate::new(require_attr(start, "Plate", "ID")?);
    plate.name = attr(start, "Name")?;
    plate.status = attr(start, "Status")?;
    plate.external_identifier = attr(start, "ExternalIdentifier")?;
    plate.rows = parse_attr(start, "Rows")?;
    plate.columns = parse_attr(start, "Columns")?;
    plate.row_naming_convention = parse_attr(start, "RowNamingConvention")?;
    plate.column_naming_convention = parse_attr(start, "ColumnNamingConvention")?;
    plate.well_origin_x = length_attr(start, "WellOriginX", "WellOriginXUnit")?;
    plate.well_origin_y = length_attr(start, "WellOriginY", "WellOriginYUnit")?;
    plate.field_index = parse_attr(start, "FieldIndex")?;
    if empty {
        return Ok(plate);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => plate.description = Some(read_text(reader)?),
                b"Well" => plate.wells.push(parse_well(reader, e, false)?),
                b"PlateAcquisition" => plate
                    .plate_acquisitions
                    .push(parse_plate_acquisition(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Well" => plate.wells.push(parse_well(reader, e, true)?),
                b"PlateAcquisition" => plate
                    .plate_acquisitions
                    .push(parse_plate_acquisition(reader, e, true)?),
                b"AnnotationRef" => plate.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(plate)
}

fn parse_well<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Well, OmeXmlError> {
    let mut well = Well {
        id: require_attr(start, "Well", "ID")?,
        ..Well::default()
    };
    well.row = parse_attr(start, "Row")?.unwrap_or(0);
    well.column = parse_attr(start, "Column")?.unwrap_or(0);
    well.external_identifier = attr(start, "ExternalIdentifier")?;
    well.well_type = attr(start, "Type")?;
    well.color = parse_attr(start, "Color")?;
    if empty {
        return Ok(well);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"WellSample" => well.well_samples.push(parse_well_sample(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"WellSample" => well.well_samples.push(parse_well_sample(reader, e, true)?),
                b"ReagentRef" => well.reagent_ref = Some(require_id(e)?),
                b"AnnotationRef" => well.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(well)
}

fn parse_well_sample<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<WellSample, OmeXmlError> {
    let mut sample = WellSample {
        id: require_attr(start, "WellSample", "ID")?,
        ..WellSample::default()
    };
    sample.index = parse_attr(start, "Index")?;
    sample.position_x = length_attr(start, "PositionX", "PositionXUnit")?;
    sample.position_y = length_attr(start, "PositionY", "PositionYUnit")?;
    sample.timepoint = timestamp_attr(start, "Timepoint")?;
    if empty {
        return Ok(sample);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => skip_element(reader)?,
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"ImageRef" {
                    sample.image_ref = Some(require_id(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(sample)
}

fn parse_plate_acquisition<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<PlateAcquisition, OmeXmlError> {
    let mut acquisition = PlateAcquisition {
        id: require_attr(start, "PlateAcquisition", "ID")?,
        ..PlateAcquisition::default()
    };
    acquisition.name = attr(start, "Name")?;
    acquisition.start_time = timestamp_attr(start, "StartTime")?;
    acquisition.end_time = timestamp_attr(start, "EndTime")?;
    acquisition.maximum_field_count = parse_attr(start, "MaximumFieldCount")?;
    if empty {
        return Ok(acquisition);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => acquisition.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"WellSampleRef" => acquisition.well_sample_refs.push(require_id(e)?),
                b"AnnotationRef" => acquisition.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(acquisition)
}

fn parse_screen<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Screen, OmeXmlError> {
    let mut screen = Screen::new(require_attr(start, "Screen", "ID")?);
    screen.name = attr(start, "Name")?;
    screen.screen_type = attr(start, "Type")?;
    screen.protocol_identifier = attr(start, "ProtocolIdentifier")?;
    screen.protocol_description = attr(start, "ProtocolDescription")?;
    screen.reagent_set_identifier = attr(start, "ReagentSetIdentifier")?;
    screen.reagent_set_description = attr(start, "ReagentSetDescription")?;
    if empty {
        return Ok(screen);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => screen.description = Some(read_text(reader)?),
                b"Reagent" => screen.reagents.push(parse_reagent(reader, e, false)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Reagent" => screen.reagents.push(parse_reagent(reader, e, true)?),
                b"PlateRef" => screen.plate_refs.push(require_id(e)?),
                b"AnnotationRef" => screen.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(screen)
}

fn parse_reagent<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    empty: bool,
) -> Result<Reagent, OmeXmlError> {
    let mut reagent = Reagent {
        id: require_attr(start, "Reagent", "ID")?,
        ..Reagent::default()
    };
    reagent.name = attr(start, "Name")?;
    reagent.reagent_identifier = attr(start, "ReagentIdentifier")?;
    if empty {
        return Ok(reagent);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => reagent.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"AnnotationRef" {
                    reagent.annotation_refs.push(require_id(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(reagent)
}

// -- ROI elements ---------------------------------------------------------

fn parse_roi<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Roi, OmeXmlError> {
    let mut roi = Roi::new(require_attr(start, "ROI", "ID")?);
    roi.name = attr(start, "Name")?;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Union" => parse_union(reader, &mut roi)?,
                b"Description" => roi.description = Some(read_text(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"AnnotationRef" {
                    roi.annotation_refs.push(require_id(e)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(roi)
}

fn parse_union<R: BufRead>(reader: &mut Reader<R>, roi: &mut Roi) -> Result<(), OmeXmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match shape_geometry_from_attrs(e)? {
                Some(geometry) => roi.union.push(parse_shape(reader, e, geometry, false)?),
                None => skip_element(reader)?,
            },
            Event::Empty(ref e) => {
                if let Some(geometry) = shape_geometry_from_attrs(e)? {
                    roi.union.push(parse_shape(reader, e, geometry, true)?);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Build the geometry payload for a shape element, or `None` for an element
/// that is not a shape.
fn shape_geometry_from_attrs(e: &BytesStart) -> Result<Option<ShapeGeometry>, OmeXmlError> {
    let geometry = match e.local_name().as_ref() {
        b"Point" => ShapeGeometry::Point {
            x: parse_attr(e, "X")?.unwrap_or(0.0),
            y: parse_attr(e, "Y")?.unwrap_or(0.0),
        },
        b"Label" => ShapeGeometry::Label {
            x: parse_attr(e, "X")?.unwrap_or(0.0),
            y: parse_attr(e, "Y")?.unwrap_or(0.0),
        },
        b"Line" => ShapeGeometry::Line {
            x1: parse_attr(e, "X1")?.unwrap_or(0.0),
            y1: parse_attr(e, "Y1")?.unwrap_or(0.0),
            x2: parse_attr(e, "X2")?.unwrap_or(0.0),
            y2: parse_attr(e, "Y2")?.unwrap_or(0.0),
            marker_start: parse_attr(e, "MarkerStart")?,
            marker_end: parse_attr(e, "MarkerEnd")?,
        },
        b"Rectangle" => ShapeGeometry::Rectangle {
            x: parse_attr(e, "X")?.unwrap_or(0.0),
            y: parse_attr(e, "Y")?.unwrap_or(0.0),
            width: parse_attr(e, "Width")?.unwrap_or(0.0),
            height: parse_attr(e, "Height")?.unwrap_or(0.0),
        },
        b"Ellipse" => ShapeGeometry::Ellipse {
            x: parse_attr(e, "X")?.unwrap_or(0.0),
            y: parse_attr(e, "Y")?.unwrap_or(0.0),
            radius_x: parse_attr(e, "RadiusX")?.unwrap_or(0.0),
            radius_y: parse_attr(e, "RadiusY")?.unwrap_or(0.0),
        },
        b"Polygon" => ShapeGeometry::Polygon {
            points: attr(e, "Points")?.unwrap_or_default(),
        },
        b"Polyline" => ShapeGeometry::Polyline {
            points: attr(e, "Points")?.unwrap_or_default(),
            marker_start: parse_attr(e, "MarkerStart")?,
            marker_end: parse_attr(e, "MarkerEnd")?,
        },
        b"Mask" => ShapeGeometry::Mask {
            x: parse_attr(e, "X")?.unwrap_or(0.0),
            y: parse_attr(e, "Y")?.unwrap_or(0.0),
            width: parse_attr(e, "Width")?.unwrap_or(0.0),
            height: parse_attr(e, "Height")?.unwrap_or(0.0),
            bin_data: None,
        },
        _ => return Ok(None),
    };
    Ok(Some(geometry))
}

fn parse_shape<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart,
    geometry: ShapeGeometry,
    empty: bool,
) -> Result<Shape, OmeXmlError> {
    let element = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut shape = Shape::new(require_attr(start, &element, "ID")?, geometry);
    shape.fill_color = parse_attr(start, "FillColor")?;
    shape.fill_rule = parse_attr(start, "FillRule")?;
    shape.stroke_color = parse_attr(start, "StrokeColor")?;
    shape.stroke_width = length_attr(start, "StrokeWidth", "StrokeWidthUnit")?;
    shape.stroke_dash_array = attr(start, "StrokeDashArray")?;
    shape.font_family = parse_attr(start, "FontFamily")?;
    shape.font_size = length_attr(start, "FontSize", "FontSizeUnit")?;
    shape.font_style = parse_attr(start, "FontStyle")?;
    shape.text = attr(start, "Text")?;
    shape.the_z = parse_attr(start, "TheZ")?;
    shape.the_c = parse_attr(start, "TheC")?;
    shape.the_t = parse_attr(start, "TheT")?;
    shape.locked = bool_attr(start, "Locked")?;
    if empty {
        return Ok(shape);
    }
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"BinData" => {
                    let data = read_text(reader)?;
                    if let ShapeGeometry::Mask { bin_data, .. } = &mut shape.geometry {
                        *bin_data = Some(data.trim().to_string());
                    }
                }
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"Transform" => shape.transform = Some(parse_transform(e)?),
                b"AnnotationRef" => shape.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(shape)
}

fn parse_transform(e: &BytesStart) -> Result<AffineTransform, OmeXmlError> {
    Ok(AffineTransform {
        a00: parse_attr(e, "A00")?.unwrap_or(1.0),
        a01: parse_attr(e, "A01")?.unwrap_or(0.0),
        a02: parse_attr(e, "A02")?.unwrap_or(0.0),
        a10: parse_attr(e, "A10")?.unwrap_or(0.0),
        a11: parse_attr(e, "A11")?.unwrap_or(1.0),
        a12: parse_attr(e, "A12")?.unwrap_or(0.0),
    })
}

// -- annotation elements --------------------------------------------------

fn parse_structured_annotations<R: BufRead>(
    reader: &mut Reader<R>,
    ome: &mut Ome,
) -> Result<(), OmeXmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match annotation_seed(e)? {
                Some(annotation) => {
                    let parsed = parse_annotation(reader, annotation)?;
                    ome.structured_annotations.annotations.push(parsed);
                }
                None => skip_element(reader)?,
            },
            Event::Empty(ref e) => {
                if let Some(annotation) = annotation_seed(e)? {
                    ome.structured_annotations.annotations.push(annotation);
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Build an annotation with its kind's empty payload from the element name,
/// or `None` for an element that is not an annotation.
fn annotation_seed(e: &BytesStart) -> Result<Option<Annotation>, OmeXmlError> {
    let value = match e.local_name().as_ref() {
        b"BooleanAnnotation" => AnnotationValue::Boolean(false),
        b"CommentAnnotation" => AnnotationValue::Comment(String::new()),
        b"DoubleAnnotation" => AnnotationValue::Double(0.0),
        b"LongAnnotation" => AnnotationValue::Long(0),
        b"TagAnnotation" => AnnotationValue::Tag(String::new()),
        b"TermAnnotation" => AnnotationValue::Term(String::new()),
        b"TimestampAnnotation" => AnnotationValue::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
        b"XMLAnnotation" => AnnotationValue::Xml(String::new()),
        b"MapAnnotation" => AnnotationValue::Map(Vec::new()),
        b"FileAnnotation" => AnnotationValue::File(BinaryFile::default()),
        _ => return Ok(None),
    };
    let element = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut annotation = Annotation::new(require_attr(e, &element, "ID")?, value);
    annotation.namespace = attr(e, "Namespace")?;
    annotation.annotator = attr(e, "Annotator")?;
    Ok(Some(annotation))
}

fn parse_annotation<R: BufRead>(
    reader: &mut Reader<R>,
    mut annotation: Annotation,
) -> Result<Annotation, OmeXmlError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Description" => annotation.description = Some(read_text(reader)?),
                b"Value" => match &mut annotation.value {
                    AnnotationValue::Map(pairs) => *pairs = parse_map(reader)?,
                    value => {
                        let text = read_text(reader)?;
                        apply_annotation_text(value, text.trim())?;
                    }
                },
                _ => skip_element(reader)?,
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"BinaryFile" => {
                    if let AnnotationValue::File(file) = &mut annotation.value {
                        file.file_name = require_attr(e, "BinaryFile", "FileName")?;
                        file.size = parse_attr(e, "Size")?.unwrap_or(0);
                        file.mime_type = attr(e, "MIMEType")?;
                    }
                }
                b"AnnotationRef" => annotation.annotation_refs.push(require_id(e)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(OmeXmlError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }
    Ok(annotation)
}

/// Store a `Value` element's text into the matching annotation payload.
fn apply_annotation_text(value: &mut AnnotationValue, text: &str) -> Result<(), OmeXmlError> {
    match value {
        AnnotationValue::Boolean(payload) => {
            *payload = match text {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(OmeXmlError::InvalidValue {
                        attribute: "Value".to_string(),
                        message: format!("expected boolean, got {other:?}"),
                    })
                }
            };
        }
        AnnotationValue::Double(payload) => {
            *payload = text.parse().map_err(|err| OmeXmlError::InvalidValue {
                attribute: "Value".to_string(),
                message: format!("{err}"),
            })?;
        }
        AnnotationValue::Long(payload) => {
            *payload = text.parse().map_err(|err| OmeXmlError::InvalidValue {
                attribute: "Value".to_string(),
                message: format!("{err}"),
            })?;
        }
        AnnotationValue::Timestamp(payload) => *payload = timestamp("Value", text)?,
        AnnotationValue::Comment(payload)
        | AnnotationValue::Tag(payload)
        | AnnotationValue::Term(payload)
        | AnnotationValue::Xml(payload) => *payload = text.to_string(),
        AnnotationValue::Map(_) | AnnotationValue::File(_) => {}
    }
    Ok(())
}
