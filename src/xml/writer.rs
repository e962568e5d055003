//! OME-XML serialization.
//!
//! Emits the canonical namespaced 2016-06 form: dimensioned attributes are
//! written as value/unit pairs, references as `ID`-attribute leaf elements,
//! timestamps as RFC 3339 text.

use std::fmt::Display;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{OmeXmlError, OME_NAMESPACE, SCHEMA_LOCATION, XSI_NAMESPACE};
use crate::model::{
    Annotation, AnnotationValue, Channel, Dataset, Detector, Dichroic, Experiment, Experimenter,
    ExperimenterGroup, Filter, FilterSet, Image, Instrument, LightSource, LightSourceKind,
    Objective, Ome, Pixels, Plane, Plate, PlateAcquisition, Project, Reagent, Roi, Screen, Shape,
    ShapeGeometry, TiffData, Well, WellSample,
};
use crate::primitives::{
    ElectricPotential, Frequency, Length, Power, Pressure, Temperature, Time,
};

/// Serialize a document to a UTF-8 string.
pub fn write_document(root: &Ome) -> Result<String, OmeXmlError> {
    let mut out = Vec::new();
    write_document_to(&mut out, root)?;
    String::from_utf8(out).map_err(|e| OmeXmlError::Utf8(e.utf8_error()))
}

/// Serialize a document to an arbitrary writer.
pub fn write_document_to<W: Write>(sink: W, root: &Ome) -> Result<(), OmeXmlError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut ome = BytesStart::new("OME");
    ome.push_attribute(("xmlns", OME_NAMESPACE));
    ome.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    ome.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
    opt_attr(&mut ome, "UUID", &root.uuid);
    opt_attr(&mut ome, "Creator", &root.creator);
    writer.write_event(Event::Start(ome))?;

    for project in &root.projects {
        write_project(&mut writer, project)?;
    }
    for dataset in &root.datasets {
        write_dataset(&mut writer, dataset)?;
    }
    for experiment in &root.experiments {
        write_experiment(&mut writer, experiment)?;
    }
    for plate in &root.plates {
        write_plate(&mut writer, plate)?;
    }
    for screen in &root.screens {
        write_screen(&mut writer, screen)?;
    }
    for experimenter in &root.experimenters {
        write_experimenter(&mut writer, experimenter)?;
    }
    for group in &root.experimenter_groups {
        write_experimenter_group(&mut writer, group)?;
    }
    for instrument in &root.instruments {
        write_instrument(&mut writer, instrument)?;
    }
    for image in &root.images {
        write_image(&mut writer, image)?;
    }
    if !root.structured_annotations.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("StructuredAnnotations")))?;
        for annotation in &root.structured_annotations.annotations {
            write_annotation(&mut writer, annotation)?;
        }
        writer.write_event(Event::End(BytesEnd::new("StructuredAnnotations")))?;
    }
    for roi in &root.rois {
        write_roi(&mut writer, roi)?;
    }

    writer.write_event(Event::End(BytesEnd::new("OME")))?;
    Ok(())
}

// -- attribute helpers ----------------------------------------------------

fn opt_attr(el: &mut BytesStart, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        el.push_attribute((name, value.as_str()));
    }
}

fn opt_display<T: Display>(el: &mut BytesStart, name: &str, value: &Option<T>) {
    if let Some(value) = value {
        el.push_attribute((name, value.to_string().as_str()));
    }
}

/// A physical quantity that serializes as a value/unit attribute pair.
trait QuantityAttr {
    fn split(&self) -> (f64, String);
}

macro_rules! quantity_attr_impl {
    ($($ty:ty),+) => {
        $(impl QuantityAttr for $ty {
            fn split(&self) -> (f64, String) {
                (self.value, self.unit.to_string())
            }
        })+
    };
}

quantity_attr_impl!(Length, Time, Frequency, Pressure, Temperature, Power, ElectricPotential);

fn opt_quantity<T: QuantityAttr>(
    el: &mut BytesStart,
    name: &str,
    unit_name: &str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        let (magnitude, unit) = value.split();
        el.push_attribute((name, magnitude.to_string().as_str()));
        el.push_attribute((unit_name, unit.as_str()));
    }
}

// -- element helpers ------------------------------------------------------

fn write_ref<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    id: &str,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new(element);
    el.push_attribute(("ID", id));
    writer.write_event(Event::Empty(el))?;
    Ok(())
}

fn write_refs<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    ids: &[String],
) -> Result<(), OmeXmlError> {
    for id in ids {
        write_ref(writer, element, id)?;
    }
    Ok(())
}

fn write_opt_ref<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    id: &Option<String>,
) -> Result<(), OmeXmlError> {
    if let Some(id) = id {
        write_ref(writer, element, id)?;
    }
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    text: &str,
) -> Result<(), OmeXmlError> {
    writer.write_event(Event::Start(BytesStart::new(element)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

fn write_opt_description<W: Write>(
    writer: &mut Writer<W>,
    description: &Option<String>,
) -> Result<(), OmeXmlError> {
    if let Some(description) = description {
        write_text_element(writer, "Description", description)?;
    }
    Ok(())
}

// -- organizational elements ----------------------------------------------

fn write_project<W: Write>(writer: &mut Writer<W>, project: &Project) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Project");
    el.push_attribute(("ID", project.id.as_str()));
    opt_attr(&mut el, "Name", &project.name);
    writer.write_event(Event::Start(el))?;
    write_opt_description(writer, &project.description)?;
    write_opt_ref(writer, "ExperimenterRef", &project.experimenter_ref)?;
    write_opt_ref(writer, "ExperimenterGroupRef", &project.experimenter_group_ref)?;
    write_refs(writer, "DatasetRef", &project.dataset_refs)?;
    write_refs(writer, "AnnotationRef", &project.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new("Project")))?;
    Ok(())
}

fn write_dataset<W: Write>(writer: &mut Writer<W>, dataset: &Dataset) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Dataset");
    el.push_attribute(("ID", dataset.id.as_str()));
    opt_attr(&mut el, "Name", &dataset.name);
    writer.write_event(Event::Start(el))?;
    write_opt_description(writer, &dataset.description)?;
    write_opt_ref(writer, "ExperimenterRef", &dataset.experimenter_ref)?;
    write_opt_ref(writer, "ExperimenterGroupRef", &dataset.experimenter_group_ref)?;
    write_refs(writer, "ImageRef", &dataset.image_refs)?;
    write_refs(writer, "AnnotationRef", &dataset.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new("Dataset")))?;
    Ok(())
}

fn write_experiment<W: Write>(
    writer: &mut Writer<W>,
    experiment: &Experiment,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Experiment");
    el.push_attribute(("ID", experiment.id.as_str()));
    if !experiment.experiment_types.is_empty() {
        let types = experiment
            .experiment_types
            .iter()
            .map(|t| t.token())
            .collect::<Vec<_>>()
            .join(" ");
        el.push_attribute(("Type", types.as_str()));
    }
    writer.write_event(Event::Start(el))?;
    write_opt_description(writer, &experiment.description)?;
    write_opt_ref(writer, "ExperimenterRef", &experiment.experimenter_ref)?;
    for manipulation in &experiment.microbeam_manipulations {
        let mut el = BytesStart::new("MicrobeamManipulation");
        el.push_attribute(("ID", manipulation.id.as_str()));
        if !manipulation.manipulation_types.is_empty() {
            el.push_attribute(("Type", manipulation.manipulation_types.join(" ").as_str()));
        }
        writer.write_event(Event::Start(el))?;
        write_opt_description(writer, &manipulation.description)?;
        write_refs(writer, "ROIRef", &manipulation.roi_refs)?;
        write_opt_ref(writer, "ExperimenterRef", &manipulation.experimenter_ref)?;
        writer.write_event(Event::End(BytesEnd::new("MicrobeamManipulation")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Experiment")))?;
    Ok(())
}

fn write_experimenter<W: Write>(
    writer: &mut Writer<W>,
    experimenter: &Experimenter,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Experimenter");
    el.push_attribute(("ID", experimenter.id.as_str()));
    opt_attr(&mut el, "FirstName", &experimenter.first_name);
    opt_attr(&mut el, "MiddleName", &experimenter.middle_name);
    opt_attr(&mut el, "LastName", &experimenter.last_name);
    opt_attr(&mut el, "Email", &experimenter.email);
    opt_attr(&mut el, "Institution", &experimenter.institution);
    opt_attr(&mut el, "UserName", &experimenter.user_name);
    if experimenter.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", &experimenter.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("Experimenter")))?;
    }
    Ok(())
}

fn write_experimenter_group<W: Write>(
    writer: &mut Writer<W>,
    group: &ExperimenterGroup,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("ExperimenterGroup");
    el.push_attribute(("ID", group.id.as_str()));
    opt_attr(&mut el, "Name", &group.name);
    writer.write_event(Event::Start(el))?;
    write_opt_description(writer, &group.description)?;
    write_refs(writer, "ExperimenterRef", &group.experimenter_refs)?;
    write_refs(writer, "Leader", &group.leaders)?;
    write_refs(writer, "AnnotationRef", &group.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new("ExperimenterGroup")))?;
    Ok(())
}

// -- instrument elements --------------------------------------------------

fn write_instrument<W: Write>(
    writer: &mut Writer<W>,
    instrument: &Instrument,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Instrument");
    el.push_attribute(("ID", instrument.id.as_str()));
    writer.write_event(Event::Start(el))?;

    if let Some(microscope) = &instrument.microscope {
        let mut el = BytesStart::new("Microscope");
        opt_display(&mut el, "Type", &microscope.microscope_type);
        opt_attr(&mut el, "Manufacturer", &microscope.manufacturer);
        opt_attr(&mut el, "Model", &microscope.model);
        opt_attr(&mut el, "SerialNumber", &microscope.serial_number);
        opt_attr(&mut el, "LotNumber", &microscope.lot_number);
        writer.write_event(Event::Empty(el))?;
    }
    for light_source in &instrument.light_sources {
        write_light_source(writer, light_source)?;
    }
    for detector in &instrument.detectors {
        write_detector(writer, detector)?;
    }
    for objective in &instrument.objectives {
        write_objective(writer, objective)?;
    }
    for filter in &instrument.filters {
        write_filter(writer, filter)?;
    }
    for filter_set in &instrument.filter_sets {
        write_filter_set(writer, filter_set)?;
    }
    for dichroic in &instrument.dichroics {
        write_dichroic(writer, dichroic)?;
    }
    write_refs(writer, "AnnotationRef", &instrument.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Instrument")))?;
    Ok(())
}

fn write_light_source<W: Write>(
    writer: &mut Writer<W>,
    light_source: &LightSource,
) -> Result<(), OmeXmlError> {
    let element = light_source.kind.element_name();
    let mut el = BytesStart::new(element);
    el.push_attribute(("ID", light_source.id.as_str()));
    opt_attr(&mut el, "Manufacturer", &light_source.manufacturer);
    opt_attr(&mut el, "Model", &light_source.model);
    opt_attr(&mut el, "SerialNumber", &light_source.serial_number);
    opt_attr(&mut el, "LotNumber", &light_source.lot_number);
    opt_quantity(&mut el, "Power", "PowerUnit", &light_source.power);

    match &light_source.kind {
        LightSourceKind::Laser {
            laser_type,
            laser_medium,
            wavelength,
            frequency_multiplication,
            tuneable,
            pulse,
            pockel_cell,
            repetition_rate,
            pump_ref,
        } => {
            opt_display(&mut el, "Type", laser_type);
            opt_display(&mut el, "LaserMedium", laser_medium);
            opt_quantity(&mut el, "Wavelength", "WavelengthUnit", wavelength);
            opt_display(&mut el, "FrequencyMultiplication", frequency_multiplication);
            opt_display(&mut el, "Tuneable", tuneable);
            opt_display(&mut el, "Pulse", pulse);
            opt_display(&mut el, "PockelCell", pockel_cell);
            opt_quantity(&mut el, "RepetitionRate", "RepetitionRateUnit", repetition_rate);
            if pump_ref.is_some() || !light_source.annotation_refs.is_empty() {
                writer.write_event(Event::Start(el))?;
                write_opt_ref(writer, "Pump", pump_ref)?;
                write_refs(writer, "AnnotationRef", &light_source.annotation_refs)?;
                writer.write_event(Event::End(BytesEnd::new(element)))?;
            } else {
                writer.write_event(Event::Empty(el))?;
            }
        }
        LightSourceKind::Arc { arc_type } => {
            opt_display(&mut el, "Type", arc_type);
            write_light_source_tail(writer, el, element, &light_source.annotation_refs)?;
        }
        LightSourceKind::Filament { filament_type } => {
            opt_display(&mut el, "Type", filament_type);
            write_light_source_tail(writer, el, element, &light_source.annotation_refs)?;
        }
        LightSourceKind::LightEmittingDiode => {
            write_light_source_tail(writer, el, element, &light_source.annotation_refs)?;
        }
        LightSourceKind::GenericExcitationSource { map } => {
            writer.write_event(Event::Start(el))?;
            if !map.is_empty() {
                writer.write_event(Event::Start(BytesStart::new("Map")))?;
                for (key, value) in map {
                    let mut m = BytesStart::new("M");
                    m.push_attribute(("K", key.as_str()));
                    writer.write_event(Event::Start(m))?;
                    writer.write_event(Event::Text(BytesText::new(value)))?;
                    writer.write_event(Event::End(BytesEnd::new("M")))?;
                }
                writer.write_event(Event::End(BytesEnd::new("Map")))?;
            }
            write_refs(writer, "AnnotationRef", &light_source.annotation_refs)?;
            writer.write_event(Event::End(BytesEnd::new(element)))?;
        }
    }
    Ok(())
}

fn write_light_source_tail<W: Write>(
    writer: &mut Writer<W>,
    el: BytesStart,
    element: &str,
    annotation_refs: &[String],
) -> Result<(), OmeXmlError> {
    if annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new(element)))?;
    }
    Ok(())
}

fn write_detector<W: Write>(
    writer: &mut Writer<W>,
    detector: &Detector,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Detector");
    el.push_attribute(("ID", detector.id.as_str()));
    opt_display(&mut el, "Type", &detector.detector_type);
    opt_attr(&mut el, "Manufacturer", &detector.manufacturer);
    opt_attr(&mut el, "Model", &detector.model);
    opt_attr(&mut el, "SerialNumber", &detector.serial_number);
    opt_attr(&mut el, "LotNumber", &detector.lot_number);
    opt_display(&mut el, "Gain", &detector.gain);
    opt_quantity(&mut el, "Voltage", "VoltageUnit", &detector.voltage);
    opt_display(&mut el, "Offset", &detector.offset);
    opt_display(&mut el, "Zoom", &detector.zoom);
    opt_display(&mut el, "AmplificationGain", &detector.amplification_gain);
    if detector.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", &detector.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("Detector")))?;
    }
    Ok(())
}

fn write_objective<W: Write>(
    writer: &mut Writer<W>,
    objective: &Objective,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Objective");
    el.push_attribute(("ID", objective.id.as_str()));
    opt_attr(&mut el, "Manufacturer", &objective.manufacturer);
    opt_attr(&mut el, "Model", &objective.model);
    opt_attr(&mut el, "SerialNumber", &objective.serial_number);
    opt_attr(&mut el, "LotNumber", &objective.lot_number);
    opt_display(&mut el, "Correction", &objective.correction);
    opt_display(&mut el, "Immersion", &objective.immersion);
    opt_display(&mut el, "LensNA", &objective.lens_na);
    opt_display(&mut el, "NominalMagnification", &objective.nominal_magnification);
    opt_display(
        &mut el,
        "CalibratedMagnification",
        &objective.calibrated_magnification,
    );
    opt_quantity(
        &mut el,
        "WorkingDistance",
        "WorkingDistanceUnit",
        &objective.working_distance,
    );
    opt_display(&mut el, "Iris", &objective.iris);
    if objective.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", &objective.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("Objective")))?;
    }
    Ok(())
}

fn write_filter<W: Write>(writer: &mut Writer<W>, filter: &Filter) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Filter");
    el.push_attribute(("ID", filter.id.as_str()));
    opt_display(&mut el, "Type", &filter.filter_type);
    opt_attr(&mut el, "Manufacturer", &filter.manufacturer);
    opt_attr(&mut el, "Model", &filter.model);
    opt_attr(&mut el, "SerialNumber", &filter.serial_number);
    opt_attr(&mut el, "LotNumber", &filter.lot_number);
    opt_attr(&mut el, "FilterWheel", &filter.filter_wheel);
    if filter.transmittance_range.is_none() && filter.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
        return Ok(());
    }
    writer.write_event(Event::Start(el))?;
    if let Some(range) = &filter.transmittance_range {
        let mut el = BytesStart::new("TransmittanceRange");
        opt_quantity(&mut el, "CutIn", "CutInUnit", &range.cut_in);
        opt_quantity(&mut el, "CutInTolerance", "CutInToleranceUnit", &range.cut_in_tolerance);
        opt_quantity(&mut el, "CutOut", "CutOutUnit", &range.cut_out);
        opt_quantity(
            &mut el,
            "CutOutTolerance",
            "CutOutToleranceUnit",
            &range.cut_out_tolerance,
        );
        opt_display(&mut el, "Transmittance", &range.transmittance);
        writer.write_event(Event::Empty(el))?;
    }
    write_refs(writer, "AnnotationRef", &filter.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new("Filter")))?;
    Ok(())
}

fn write_filter_set<W: Write>(
    writer: &mut Writer<W>,
    filter_set: &FilterSet,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("FilterSet");
    el.push_attribute(("ID", filter_set.id.as_str()));
    opt_attr(&mut el, "Manufacturer", &filter_set.manufacturer);
    opt_attr(&mut el, "Model", &filter_set.model);
    opt_attr(&mut el, "SerialNumber", &filter_set.serial_number);
    opt_attr(&mut el, "LotNumber", &filter_set.lot_number);
    writer.write_event(Event::Start(el))?;
    write_refs(writer, "ExcitationFilterRef", &filter_set.excitation_filter_refs)?;
    write_opt_ref(writer, "DichroicRef", &filter_set.dichroic_ref)?;
    write_refs(writer, "EmissionFilterRef", &filter_set.emission_filter_refs)?;
    writer.write_event(Event::End(BytesEnd::new("FilterSet")))?;
    Ok(())
}

fn write_dichroic<W: Write>(
    writer: &mut Writer<W>,
    dichroic: &Dichroic,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Dichroic");
    el.push_attribute(("ID", dichroic.id.as_str()));
    opt_attr(&mut el, "Manufacturer", &dichroic.manufacturer);
    opt_attr(&mut el, "Model", &dichroic.model);
    opt_attr(&mut el, "SerialNumber", &dichroic.serial_number);
    opt_attr(&mut el, "LotNumber", &dichroic.lot_number);
    if dichroic.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", &dichroic.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("Dichroic")))?;
    }
    Ok(())
}

// -- image elements -------------------------------------------------------

fn write_image<W: Write>(writer: &mut Writer<W>, image: &Image) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Image");
    el.push_attribute(("ID", image.id.as_str()));
    opt_attr(&mut el, "Name", &image.name);
    writer.write_event(Event::Start(el))?;

    if let Some(date) = &image.acquisition_date {
        write_text_element(writer, "AcquisitionDate", &date.to_rfc3339())?;
    }
    write_opt_ref(writer, "ExperimenterRef", &image.experimenter_ref)?;
    write_opt_description(writer, &image.description)?;
    write_opt_ref(writer, "ExperimentRef", &image.experiment_ref)?;
    write_opt_ref(writer, "ExperimenterGroupRef", &image.experimenter_group_ref)?;
    write_opt_ref(writer, "InstrumentRef", &image.instrument_ref)?;
    if let Some(settings) = &image.objective_settings {
        let mut el = BytesStart::new("ObjectiveSettings");
        el.push_attribute(("ID", settings.id.as_str()));
        opt_display(&mut el, "CorrectionCollar", &settings.correction_collar);
        opt_display(&mut el, "Medium", &settings.medium);
        opt_display(&mut el, "RefractiveIndex", &settings.refractive_index);
        writer.write_event(Event::Empty(el))?;
    }
    if let Some(environment) = &image.imaging_environment {
        let mut el = BytesStart::new("ImagingEnvironment");
        opt_quantity(&mut el, "Temperature", "TemperatureUnit", &environment.temperature);
        opt_quantity(&mut el, "AirPressure", "AirPressureUnit", &environment.air_pressure);
        opt_display(&mut el, "Humidity", &environment.humidity);
        opt_display(&mut el, "CO2Percent", &environment.co2_percent);
        writer.write_event(Event::Empty(el))?;
    }
    if let Some(label) = &image.stage_label {
        let mut el = BytesStart::new("StageLabel");
        el.push_attribute(("Name", label.name.as_str()));
        opt_quantity(&mut el, "X", "XUnit", &label.x);
        opt_quantity(&mut el, "Y", "YUnit", &label.y);
        opt_quantity(&mut el, "Z", "ZUnit", &label.z);
        writer.write_event(Event::Empty(el))?;
    }
    write_pixels(writer, &image.pixels)?;
    write_refs(writer, "ROIRef", &image.roi_refs)?;
    write_refs(
        writer,
        "MicrobeamManipulationRef",
        &image.microbeam_manipulation_refs,
    )?;
    write_refs(writer, "AnnotationRef", &image.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Image")))?;
    Ok(())
}

fn write_pixels<W: Write>(writer: &mut Writer<W>, pixels: &Pixels) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Pixels");
    el.push_attribute(("ID", pixels.id.as_str()));
    el.push_attribute(("DimensionOrder", pixels.dimension_order.token()));
    el.push_attribute(("Type", pixels.pixel_type.token()));
    el.push_attribute(("SizeX", pixels.size_x.to_string().as_str()));
    el.push_attribute(("SizeY", pixels.size_y.to_string().as_str()));
    el.push_attribute(("SizeZ", pixels.size_z.to_string().as_str()));
    el.push_attribute(("SizeC", pixels.size_c.to_string().as_str()));
    el.push_attribute(("SizeT", pixels.size_t.to_string().as_str()));
    opt_quantity(&mut el, "PhysicalSizeX", "PhysicalSizeXUnit", &pixels.physical_size_x);
    opt_quantity(&mut el, "PhysicalSizeY", "PhysicalSizeYUnit", &pixels.physical_size_y);
    opt_quantity(&mut el, "PhysicalSizeZ", "PhysicalSizeZUnit", &pixels.physical_size_z);
    opt_quantity(&mut el, "TimeIncrement", "TimeIncrementUnit", &pixels.time_increment);
    opt_display(&mut el, "SignificantBits", &pixels.significant_bits);
    opt_display(&mut el, "BigEndian", &pixels.big_endian);
    opt_display(&mut el, "Interleaved", &pixels.interleaved);
    writer.write_event(Event::Start(el))?;

    for channel in &pixels.channels {
        write_channel(writer, channel)?;
    }
    for tiff_data in &pixels.tiff_data {
        write_tiff_data(writer, tiff_data)?;
    }
    for plane in &pixels.planes {
        write_plane(writer, plane)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Pixels")))?;
    Ok(())
}

fn write_channel<W: Write>(writer: &mut Writer<W>, channel: &Channel) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Channel");
    el.push_attribute(("ID", channel.id.as_str()));
    opt_attr(&mut el, "Name", &channel.name);
    opt_display(&mut el, "SamplesPerPixel", &channel.samples_per_pixel);
    opt_display(&mut el, "Color", &channel.color);
    opt_display(&mut el, "AcquisitionMode", &channel.acquisition_mode);
    opt_display(&mut el, "IlluminationType", &channel.illumination_type);
    opt_display(&mut el, "ContrastMethod", &channel.contrast_method);
    opt_quantity(
        &mut el,
        "ExcitationWavelength",
        "ExcitationWavelengthUnit",
        &channel.excitation_wavelength,
    );
    opt_quantity(
        &mut el,
        "EmissionWavelength",
        "EmissionWavelengthUnit",
        &channel.emission_wavelength,
    );
    opt_attr(&mut el, "Fluor", &channel.fluor);
    opt_display(&mut el, "NDFilter", &channel.nd_filter);
    opt_quantity(&mut el, "PinholeSize", "PinholeSizeUnit", &channel.pinhole_size);
    opt_display(&mut el, "PockelCellSetting", &channel.pockel_cell_setting);

    let empty = channel.light_source_settings.is_none()
        && channel.detector_settings.is_none()
        && channel.light_path.is_none()
        && channel.annotation_refs.is_empty();
    if empty {
        writer.write_event(Event::Empty(el))?;
        return Ok(());
    }
    writer.write_event(Event::Start(el))?;

    if let Some(settings) = &channel.light_source_settings {
        let mut el = BytesStart::new("LightSourceSettings");
        el.push_attribute(("ID", settings.id.as_str()));
        opt_display(&mut el, "Attenuation", &settings.attenuation);
        opt_quantity(&mut el, "Wavelength", "WavelengthUnit", &settings.wavelength);
        writer.write_event(Event::Empty(el))?;
    }
    if let Some(settings) = &channel.detector_settings {
        let mut el = BytesStart::new("DetectorSettings");
        el.push_attribute(("ID", settings.id.as_str()));
        opt_display(&mut el, "Offset", &settings.offset);
        opt_display(&mut el, "Gain", &settings.gain);
        opt_quantity(&mut el, "Voltage", "VoltageUnit", &settings.voltage);
        opt_display(&mut el, "Zoom", &settings.zoom);
        opt_display(&mut el, "Binning", &settings.binning);
        opt_display(&mut el, "Integration", &settings.integration);
        opt_display(&mut el, "ReadOutRate", &settings.read_out_rate);
        writer.write_event(Event::Empty(el))?;
    }
    if let Some(light_path) = &channel.light_path {
        writer.write_event(Event::Start(BytesStart::new("LightPath")))?;
        write_refs(writer, "ExcitationFilterRef", &light_path.excitation_filter_refs)?;
        write_opt_ref(writer, "DichroicRef", &light_path.dichroic_ref)?;
        write_refs(writer, "EmissionFilterRef", &light_path.emission_filter_refs)?;
        write_refs(writer, "AnnotationRef", &light_path.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("LightPath")))?;
    }
    write_refs(writer, "AnnotationRef", &channel.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Channel")))?;
    Ok(())
}

fn write_tiff_data<W: Write>(
    writer: &mut Writer<W>,
    tiff_data: &TiffData,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("TiffData");
    opt_display(&mut el, "IFD", &tiff_data.ifd);
    opt_display(&mut el, "FirstZ", &tiff_data.first_z);
    opt_display(&mut el, "FirstC", &tiff_data.first_c);
    opt_display(&mut el, "FirstT", &tiff_data.first_t);
    opt_display(&mut el, "PlaneCount", &tiff_data.plane_count);
    match &tiff_data.uuid {
        Some(uuid) => {
            writer.write_event(Event::Start(el))?;
            let mut uuid_el = BytesStart::new("UUID");
            opt_attr(&mut uuid_el, "FileName", &uuid.file_name);
            writer.write_event(Event::Start(uuid_el))?;
            writer.write_event(Event::Text(BytesText::new(&uuid.value)))?;
            writer.write_event(Event::End(BytesEnd::new("UUID")))?;
            writer.write_event(Event::End(BytesEnd::new("TiffData")))?;
        }
        None => writer.write_event(Event::Empty(el))?,
    }
    Ok(())
}

fn write_plane<W: Write>(writer: &mut Writer<W>, plane: &Plane) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Plane");
    el.push_attribute(("TheZ", plane.the_z.to_string().as_str()));
    el.push_attribute(("TheT", plane.the_t.to_string().as_str()));
    el.push_attribute(("TheC", plane.the_c.to_string().as_str()));
    opt_quantity(&mut el, "DeltaT", "DeltaTUnit", &plane.delta_t);
    opt_quantity(&mut el, "ExposureTime", "ExposureTimeUnit", &plane.exposure_time);
    opt_quantity(&mut el, "PositionX", "PositionXUnit", &plane.position_x);
    opt_quantity(&mut el, "PositionY", "PositionYUnit", &plane.position_y);
    opt_quantity(&mut el, "PositionZ", "PositionZUnit", &plane.position_z);
    if plane.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
    } else {
        writer.write_event(Event::Start(el))?;
        write_refs(writer, "AnnotationRef", &plane.annotation_refs)?;
        writer.write_event(Event::End(BytesEnd::new("Plane")))?;
    }
    Ok(())
}

// -- screening elements ---------------------------------------------------

fn write_plate<W: Write>(writer: &mut Writer<W>, plate: &Plate) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Plate");
    el.push_attribute(("ID", plate.id.as_str()));
    opt_attr(&mut el, "Name", &plate.name);
    opt_attr(&mut el, "Status", &plate.status);
    opt_attr(&mut el, "ExternalIdentifier", &plate.external_identifier);
    opt_display(&mut el, "Rows", &plate.rows);
    opt_display(&mut el, "Columns", &plate.columns);
    opt_display(&mut el, "RowNamingConvention", &plate.row_naming_convention);
    opt_display(&mut el, "ColumnNamingConvention", &plate.column_naming_convention);
    opt_quantity(&mut el, "WellOriginX", "WellOriginXUnit", &plate.well_origin_x);
    opt_quantity(&mut el, "WellOriginY", "WellOriginYUnit", &plate.well_origin_y);
    opt_display(&mut el, "FieldIndex", &plate.field_index);
    writer.write_event(Event::Start(el))?;

    write_opt_description(writer, &plate.description)?;
    for well in &plate.wells {
        write_well(writer, well)?;
    }
    for acquisition in &plate.plate_acquisitions {
        write_plate_acquisition(writer, acquisition)?;
    }
    write_refs(writer, "AnnotationRef", &plate.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Plate")))?;
    Ok(())
}

fn write_well<W: Write>(writer: &mut Writer<W>, well: &Well) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Well");
    el.push_attribute(("ID", well.id.as_str()));
    el.push_attribute(("Row", well.row.to_string().as_str()));
    el.push_attribute(("Column", well.column.to_string().as_str()));
    opt_attr(&mut el, "ExternalIdentifier", &well.external_identifier);
    opt_attr(&mut el, "Type", &well.well_type);
    opt_display(&mut el, "Color", &well.color);
    writer.write_event(Event::Start(el))?;

    write_opt_ref(writer, "ReagentRef", &well.reagent_ref)?;
    for sample in &well.well_samples {
        write_well_sample(writer, sample)?;
    }
    write_refs(writer, "AnnotationRef", &well.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Well")))?;
    Ok(())
}

fn write_well_sample<W: Write>(
    writer: &mut Writer<W>,
    sample: &WellSample,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("WellSample");
    el.push_attribute(("ID", sample.id.as_str()));
    opt_display(&mut el, "Index", &sample.index);
    opt_quantity(&mut el, "PositionX", "PositionXUnit", &sample.position_x);
    opt_quantity(&mut el, "PositionY", "PositionYUnit", &sample.position_y);
    if let Some(timepoint) = &sample.timepoint {
        el.push_attribute(("Timepoint", timepoint.to_rfc3339().as_str()));
    }
    match &sample.image_ref {
        Some(image_ref) => {
            writer.write_event(Event::Start(el))?;
            write_ref(writer, "ImageRef", image_ref)?;
            writer.write_event(Event::End(BytesEnd::new("WellSample")))?;
        }
        None => writer.write_event(Event::Empty(el))?,
    }
    Ok(())
}

fn write_plate_acquisition<W: Write>(
    writer: &mut Writer<W>,
    acquisition: &PlateAcquisition,
) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("PlateAcquisition");
    el.push_attribute(("ID", acquisition.id.as_str()));
    opt_attr(&mut el, "Name", &acquisition.name);
    if let Some(start) = &acquisition.start_time {
        el.push_attribute(("StartTime", start.to_rfc3339().as_str()));
    }
    if let Some(end) = &acquisition.end_time {
        el.push_attribute(("EndTime", end.to_rfc3339().as_str()));
    }
    opt_display(&mut el, "MaximumFieldCount", &acquisition.maximum_field_count);
    writer.write_event(Event::Start(el))?;

    write_opt_description(writer, &acquisition.description)?;
    write_refs(writer, "WellSampleRef", &acquisition.well_sample_refs)?;
    write_refs(writer, "AnnotationRef", &acquisition.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("PlateAcquisition")))?;
    Ok(())
}

fn write_screen<W: Write>(writer: &mut Writer<W>, screen: &Screen) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Screen");
    el.push_attribute(("ID", screen.id.as_str()));
    opt_attr(&mut el, "Name", &screen.name);
    opt_attr(&mut el, "Type", &screen.screen_type);
    opt_attr(&mut el, "ProtocolIdentifier", &screen.protocol_identifier);
    opt_attr(&mut el, "ProtocolDescription", &screen.protocol_description);
    opt_attr(&mut el, "ReagentSetIdentifier", &screen.reagent_set_identifier);
    opt_attr(&mut el, "ReagentSetDescription", &screen.reagent_set_description);
    writer.write_event(Event::Start(el))?;

    write_opt_description(writer, &screen.description)?;
    for reagent in &screen.reagents {
        write_reagent(writer, reagent)?;
    }
    write_refs(writer, "PlateRef", &screen.plate_refs)?;
    write_refs(writer, "AnnotationRef", &screen.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("Screen")))?;
    Ok(())
}

fn write_reagent<W: Write>(writer: &mut Writer<W>, reagent: &Reagent) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("Reagent");
    el.push_attribute(("ID", reagent.id.as_str()));
    opt_attr(&mut el, "Name", &reagent.name);
    opt_attr(&mut el, "ReagentIdentifier", &reagent.reagent_identifier);
    if reagent.description.is_none() && reagent.annotation_refs.is_empty() {
        writer.write_event(Event::Empty(el))?;
        return Ok(());
    }
    writer.write_event(Event::Start(el))?;
    write_opt_description(writer, &reagent.description)?;
    write_refs(writer, "AnnotationRef", &reagent.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new("Reagent")))?;
    Ok(())
}

// -- ROI elements ---------------------------------------------------------

fn write_roi<W: Write>(writer: &mut Writer<W>, roi: &Roi) -> Result<(), OmeXmlError> {
    let mut el = BytesStart::new("ROI");
    el.push_attribute(("ID", roi.id.as_str()));
    opt_attr(&mut el, "Name", &roi.name);
    writer.write_event(Event::Start(el))?;

    writer.write_event(Event::Start(BytesStart::new("Union")))?;
    for shape in &roi.union {
        write_shape(writer, shape)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Union")))?;
    write_opt_description(writer, &roi.description)?;
    write_refs(writer, "AnnotationRef", &roi.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new("ROI")))?;
    Ok(())
}

fn write_shape<W: Write>(writer: &mut Writer<W>, shape: &Shape) -> Result<(), OmeXmlError> {
    let element = shape.geometry.element_name();
    let mut el = BytesStart::new(element);
    el.push_attribute(("ID", shape.id.as_str()));
    opt_display(&mut el, "FillColor", &shape.fill_color);
    opt_display(&mut el, "FillRule", &shape.fill_rule);
    opt_display(&mut el, "StrokeColor", &shape.stroke_color);
    opt_quantity(&mut el, "StrokeWidth", "StrokeWidthUnit", &shape.stroke_width);
    opt_attr(&mut el, "StrokeDashArray", &shape.stroke_dash_array);
    opt_display(&mut el, "FontFamily", &shape.font_family);
    opt_quantity(&mut el, "FontSize", "FontSizeUnit", &shape.font_size);
    opt_display(&mut el, "FontStyle", &shape.font_style);
    opt_attr(&mut el, "Text", &shape.text);
    opt_display(&mut el, "TheZ", &shape.the_z);
    opt_display(&mut el, "TheC", &shape.the_c);
    opt_display(&mut el, "TheT", &shape.the_t);
    opt_display(&mut el, "Locked", &shape.locked);

    let mut mask_bin_data: Option<&str> = None;
    match &shape.geometry {
        ShapeGeometry::Point { x, y } | ShapeGeometry::Label { x, y } => {
            el.push_attribute(("X", x.to_string().as_str()));
            el.push_attribute(("Y", y.to_string().as_str()));
        }
        ShapeGeometry::Line {
            x1,
            y1,
            x2,
            y2,
            marker_start,
            marker_end,
        } => {
            el.push_attribute(("X1", x1.to_string().as_str()));
            el.push_attribute(("Y1", y1.to_string().as_str()));
            el.push_attribute(("X2", x2.to_string().as_str()));
            el.push_attribute(("Y2", y2.to_string().as_str()));
            opt_display(&mut el, "MarkerStart", marker_start);
            opt_display(&mut el, "MarkerEnd", marker_end);
        }
        ShapeGeometry::Rectangle {
            x,
            y,
            width,
            height,
        } => {
            el.push_attribute(("X", x.to_string().as_str()));
            el.push_attribute(("Y", y.to_string().as_str()));
            el.push_attribute(("Width", width.to_string().as_str()));
            el.push_attribute(("Height", height.to_string().as_str()));
        }
        ShapeGeometry::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
        } => {
            el.push_attribute(("X", x.to_string().as_str()));
            el.push_attribute(("Y", y.to_string().as_str()));
            el.push_attribute(("RadiusX", radius_x.to_string().as_str()));
            el.push_attribute(("RadiusY", radius_y.to_string().as_str()));
        }
        ShapeGeometry::Polygon { points } => {
            el.push_attribute(("Points", points.as_str()));
        }
        ShapeGeometry::Polyline {
            points,
            marker_start,
            marker_end,
        } => {
            el.push_attribute(("Points", points.as_str()));
            opt_display(&mut el, "MarkerStart", marker_start);
            opt_display(&mut el, "MarkerEnd", marker_end);
        }
        ShapeGeometry::Mask {
            x,
            y,
            width,
            height,
            bin_data,
        } => {
            el.push_attribute(("X", x.to_string().as_str()));
            el.push_attribute(("Y", y.to_string().as_str()));
            el.push_attribute(("Width", width.to_string().as_str()));
            el.push_attribute(("Height", height.to_string().as_str()));
            mask_bin_data = bin_data.as_deref();
        }
    }

    let empty = shape.transform.is_none()
        && shape.annotation_refs.is_empty()
        && mask_bin_data.is_none();
    if empty {
        writer.write_event(Event::Empty(el))?;
        return Ok(());
    }
    writer.write_event(Event::Start(el))?;
    if let Some(transform) = &shape.transform {
        let mut el = BytesStart::new("Transform");
        el.push_attribute(("A00", transform.a00.to_string().as_str()));
        el.push_attribute(("A10", transform.a10.to_string().as_str()));
        el.push_attribute(("A01", transform.a01.to_string().as_str()));
        el.push_attribute(("A11", transform.a11.to_string().as_str()));
        el.push_attribute(("A02", transform.a02.to_string().as_str()));
        el.push_attribute(("A12", transform.a12.to_string().as_str()));
        writer.write_event(Event::Empty(el))?;
    }
    if let Some(bin_data) = mask_bin_data {
        write_text_element(writer, "BinData", bin_data)?;
    }
    write_refs(writer, "AnnotationRef", &shape.annotation_refs)?;
    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

// -- annotation elements --------------------------------------------------

fn write_annotation<W: Write>(
    writer: &mut Writer<W>,
    annotation: &Annotation,
) -> Result<(), OmeXmlError> {
    let element = annotation.element_name();
    let mut el = BytesStart::new(element);
    el.push_attribute(("ID", annotation.id.as_str()));
    opt_attr(&mut el, "Namespace", &annotation.namespace);
    opt_attr(&mut el, "Annotator", &annotation.annotator);
    writer.write_event(Event::Start(el))?;

    write_opt_description(writer, &annotation.description)?;
    match &annotation.value {
        AnnotationValue::Boolean(value) => {
            write_text_element(writer, "Value", if *value { "true" } else { "false" })?;
        }
        AnnotationValue::Comment(value)
        | AnnotationValue::Tag(value)
        | AnnotationValue::Term(value)
        | AnnotationValue::Xml(value) => {
            write_text_element(writer, "Value", value)?;
        }
        AnnotationValue::Double(value) => {
            write_text_element(writer, "Value", &value.to_string())?;
        }
        AnnotationValue::Long(value) => {
            write_text_element(writer, "Value", &value.to_string())?;
        }
        AnnotationValue::Timestamp(value) => {
            write_text_element(writer, "Value", &value.to_rfc3339())?;
        }
        AnnotationValue::Map(pairs) => {
            writer.write_event(Event::Start(BytesStart::new("Value")))?;
            for pair in pairs {
                let mut m = BytesStart::new("M");
                m.push_attribute(("K", pair.key.as_str()));
                writer.write_event(Event::Start(m))?;
                writer.write_event(Event::Text(BytesText::new(&pair.value)))?;
                writer.write_event(Event::End(BytesEnd::new("M")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("Value")))?;
        }
        AnnotationValue::File(file) => {
            let mut el = BytesStart::new("BinaryFile");
            el.push_attribute(("FileName", file.file_name.as_str()));
            el.push_attribute(("Size", file.size.to_string().as_str()));
            opt_attr(&mut el, "MIMEType", &file.mime_type);
            writer.write_event(Event::Empty(el))?;
        }
    }
    write_refs(writer, "AnnotationRef", &annotation.annotation_refs)?;

    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}
