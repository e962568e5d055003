//! Accessors for instruments and their hardware components.
//!
//! Light sources are subtyped. The `set_laser_id` / `set_arc_id` /
//! `set_filament_id` / `set_light_emitting_diode_id` setters establish the
//! subtype of the addressed slot; the other subtype-specific accessors are
//! checked and leave a slot of a different subtype untouched.

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{
    Detector, Dichroic, Filter, FilterSet, Instrument, LightSource, LightSourceKind, Microscope,
    Objective, TransmittanceRange,
};
use crate::primitives::{
    ArcType, Correction, DetectorType, ElectricPotential, FilamentType, FilterType, Frequency,
    Immersion, LaserMedium, LaserType, Length, MicroscopeType, Power, Pulse,
};

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn instrument(&self, instrument_index: usize) -> Option<&Instrument> {
        self.root.instruments.get(instrument_index)
    }

    fn instrument_mut(&mut self, instrument_index: usize) -> &mut Instrument {
        vivify(&mut self.root.instruments, instrument_index)
    }

    fn light_source(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&LightSource> {
        self.instrument(instrument_index)?
            .light_sources
            .get(light_source_index)
    }

    fn light_source_mut(
        &mut self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> &mut LightSource {
        vivify(
            &mut self.instrument_mut(instrument_index).light_sources,
            light_source_index,
        )
    }

    fn detector(&self, instrument_index: usize, detector_index: usize) -> Option<&Detector> {
        self.instrument(instrument_index)?.detectors.get(detector_index)
    }

    fn detector_mut(&mut self, instrument_index: usize, detector_index: usize) -> &mut Detector {
        vivify(
            &mut self.instrument_mut(instrument_index).detectors,
            detector_index,
        )
    }

    fn objective(&self, instrument_index: usize, objective_index: usize) -> Option<&Objective> {
        self.instrument(instrument_index)?.objectives.get(objective_index)
    }

    fn objective_mut(
        &mut self,
        instrument_index: usize,
        objective_index: usize,
    ) -> &mut Objective {
        vivify(
            &mut self.instrument_mut(instrument_index).objectives,
            objective_index,
        )
    }

    fn filter(&self, instrument_index: usize, filter_index: usize) -> Option<&Filter> {
        self.instrument(instrument_index)?.filters.get(filter_index)
    }

    fn filter_mut(&mut self, instrument_index: usize, filter_index: usize) -> &mut Filter {
        vivify(&mut self.instrument_mut(instrument_index).filters, filter_index)
    }

    fn filter_set(&self, instrument_index: usize, filter_set_index: usize) -> Option<&FilterSet> {
        self.instrument(instrument_index)?
            .filter_sets
            .get(filter_set_index)
    }

    fn filter_set_mut(
        &mut self,
        instrument_index: usize,
        filter_set_index: usize,
    ) -> &mut FilterSet {
        vivify(
            &mut self.instrument_mut(instrument_index).filter_sets,
            filter_set_index,
        )
    }

    fn dichroic(&self, instrument_index: usize, dichroic_index: usize) -> Option<&Dichroic> {
        self.instrument(instrument_index)?.dichroics.get(dichroic_index)
    }

    fn dichroic_mut(&mut self, instrument_index: usize, dichroic_index: usize) -> &mut Dichroic {
        vivify(
            &mut self.instrument_mut(instrument_index).dichroics,
            dichroic_index,
        )
    }

    // -- Instrument -----------------------------------------------------

    /// Instrument ID.
    pub fn instrument_id(&self, instrument_index: usize) -> Option<&str> {
        self.instrument(instrument_index)
            .map(|instrument| instrument.id.as_str())
    }

    /// Set the instrument ID and register it.
    pub fn set_instrument_id(&mut self, id: &str, instrument_index: usize) {
        self.instrument_mut(instrument_index).id = id.to_string();
        self.registry.register(id, "Instrument");
    }

    /// Number of light sources on the instrument.
    pub fn light_source_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.light_sources.len())
    }

    /// Number of detectors on the instrument.
    pub fn detector_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.detectors.len())
    }

    /// Number of objectives on the instrument.
    pub fn objective_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.objectives.len())
    }

    /// Number of filters on the instrument.
    pub fn filter_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.filters.len())
    }

    /// Number of filter sets on the instrument.
    pub fn filter_set_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.filter_sets.len())
    }

    /// Number of dichroics on the instrument.
    pub fn dichroic_count(&self, instrument_index: usize) -> usize {
        self.instrument(instrument_index)
            .map_or(0, |instrument| instrument.dichroics.len())
    }

    // -- Microscope -----------------------------------------------------

    fn microscope_mut(&mut self, instrument_index: usize) -> &mut Microscope {
        self.instrument_mut(instrument_index)
            .microscope
            .get_or_insert_with(Microscope::default)
    }

    /// Microscope stand configuration.
    pub fn microscope_type(&self, instrument_index: usize) -> Option<MicroscopeType> {
        self.instrument(instrument_index)?
            .microscope
            .as_ref()?
            .microscope_type
    }

    /// Set the microscope stand configuration.
    pub fn set_microscope_type(&mut self, microscope_type: MicroscopeType, instrument_index: usize) {
        self.microscope_mut(instrument_index).microscope_type = Some(microscope_type);
    }

    /// Microscope manufacturer.
    pub fn microscope_manufacturer(&self, instrument_index: usize) -> Option<&str> {
        self.instrument(instrument_index)?
            .microscope
            .as_ref()?
            .manufacturer
            .as_deref()
    }

    /// Set the microscope manufacturer.
    pub fn set_microscope_manufacturer(
        &mut self,
        manufacturer: impl Into<String>,
        instrument_index: usize,
    ) {
        self.microscope_mut(instrument_index).manufacturer = Some(manufacturer.into());
    }

    /// Microscope model.
    pub fn microscope_model(&self, instrument_index: usize) -> Option<&str> {
        self.instrument(instrument_index)?
            .microscope
            .as_ref()?
            .model
            .as_deref()
    }

    /// Set the microscope model.
    pub fn set_microscope_model(&mut self, model: impl Into<String>, instrument_index: usize) {
        self.microscope_mut(instrument_index).model = Some(model.into());
    }

    /// Microscope serial number.
    pub fn microscope_serial_number(&self, instrument_index: usize) -> Option<&str> {
        self.instrument(instrument_index)?
            .microscope
            .as_ref()?
            .serial_number
            .as_deref()
    }

    /// Set the microscope serial number.
    pub fn set_microscope_serial_number(
        &mut self,
        serial_number: impl Into<String>,
        instrument_index: usize,
    ) {
        self.microscope_mut(instrument_index).serial_number = Some(serial_number.into());
    }

    // -- LightSource shared fields --------------------------------------

    /// Light source ID.
    pub fn light_source_id(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&str> {
        self.light_source(instrument_index, light_source_index)
            .map(|light_source| light_source.id.as_str())
    }

    /// Schema element name of the light source subtype at the slot.
    pub fn light_source_type(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&'static str> {
        self.light_source(instrument_index, light_source_index)
            .map(|light_source| light_source.kind.element_name())
    }

    /// Light source model.
    pub fn light_source_model(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&str> {
        self.light_source(instrument_index, light_source_index)?
            .model
            .as_deref()
    }

    /// Set the light source model.
    pub fn set_light_source_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.light_source_mut(instrument_index, light_source_index).model = Some(model.into());
    }

    /// Light source manufacturer.
    pub fn light_source_manufacturer(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&str> {
        self.light_source(instrument_index, light_source_index)?
            .manufacturer
            .as_deref()
    }

    /// Set the light source manufacturer.
    pub fn set_light_source_manufacturer(
        &mut self,
        manufacturer: impl Into<String>,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.light_source_mut(instrument_index, light_source_index).manufacturer =
            Some(manufacturer.into());
    }

    /// Light source serial number.
    pub fn light_source_serial_number(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&str> {
        self.light_source(instrument_index, light_source_index)?
            .serial_number
            .as_deref()
    }

    /// Set the light source serial number.
    pub fn set_light_source_serial_number(
        &mut self,
        serial_number: impl Into<String>,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.light_source_mut(instrument_index, light_source_index).serial_number =
            Some(serial_number.into());
    }

    /// Nominal output power.
    pub fn light_source_power(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<Power> {
        self.light_source(instrument_index, light_source_index)?.power
    }

    /// Set the nominal output power.
    pub fn set_light_source_power(
        &mut self,
        power: Power,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.light_source_mut(instrument_index, light_source_index).power = Some(power);
    }

    // -- Laser ----------------------------------------------------------

    fn set_light_source_subtype(
        &mut self,
        id: &str,
        instrument_index: usize,
        light_source_index: usize,
        kind: LightSourceKind,
    ) {
        let light_source = self.light_source_mut(instrument_index, light_source_index);
        light_source.id = id.to_string();
        // establishing a different subtype replaces the old payload
        if std::mem::discriminant(&light_source.kind) != std::mem::discriminant(&kind) {
            light_source.kind = kind;
        }
        self.registry.register(id, "LightSource");
    }

    /// Declare the light source slot to be a laser and set its ID.
    pub fn set_laser_id(&mut self, id: &str, instrument_index: usize, light_source_index: usize) {
        self.set_light_source_subtype(
            id,
            instrument_index,
            light_source_index,
            LightSourceKind::laser(),
        );
    }

    /// Declare the light source slot to be an arc lamp and set its ID.
    pub fn set_arc_id(&mut self, id: &str, instrument_index: usize, light_source_index: usize) {
        self.set_light_source_subtype(
            id,
            instrument_index,
            light_source_index,
            LightSourceKind::Arc { arc_type: None },
        );
    }

    /// Declare the light source slot to be a filament lamp and set its ID.
    pub fn set_filament_id(
        &mut self,
        id: &str,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.set_light_source_subtype(
            id,
            instrument_index,
            light_source_index,
            LightSourceKind::Filament { filament_type: None },
        );
    }

    /// Declare the light source slot to be an LED and set its ID.
    pub fn set_light_emitting_diode_id(
        &mut self,
        id: &str,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.set_light_source_subtype(
            id,
            instrument_index,
            light_source_index,
            LightSourceKind::LightEmittingDiode,
        );
    }

    /// Declare the light source slot to be a generic excitation source and
    /// set its ID.
    pub fn set_generic_excitation_source_id(
        &mut self,
        id: &str,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        self.set_light_source_subtype(
            id,
            instrument_index,
            light_source_index,
            LightSourceKind::GenericExcitationSource { map: Vec::new() },
        );
    }

    /// Kind of laser, when the slot holds a laser.
    pub fn laser_type(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<LaserType> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { laser_type, .. } => laser_type,
            _ => None,
        }
    }

    /// Set the kind of laser. No-op unless the slot holds a laser.
    pub fn set_laser_type(
        &mut self,
        value: LaserType,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { laser_type, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *laser_type = Some(value);
        }
    }

    /// Lasing medium, when the slot holds a laser.
    pub fn laser_medium(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<LaserMedium> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { laser_medium, .. } => laser_medium,
            _ => None,
        }
    }

    /// Set the lasing medium. No-op unless the slot holds a laser.
    pub fn set_laser_medium(
        &mut self,
        value: LaserMedium,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { laser_medium, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *laser_medium = Some(value);
        }
    }

    /// Principal emission wavelength, when the slot holds a laser.
    pub fn laser_wavelength(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<Length> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { wavelength, .. } => wavelength,
            _ => None,
        }
    }

    /// Set the emission wavelength. No-op unless the slot holds a laser.
    pub fn set_laser_wavelength(
        &mut self,
        value: Length,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { wavelength, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *wavelength = Some(value);
        }
    }

    /// Harmonic multiplication factor, when the slot holds a laser.
    pub fn laser_frequency_multiplication(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<u32> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser {
                frequency_multiplication,
                ..
            } => frequency_multiplication,
            _ => None,
        }
    }

    /// Set the harmonic multiplication factor. No-op unless a laser.
    pub fn set_laser_frequency_multiplication(
        &mut self,
        value: u32,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser {
            frequency_multiplication,
            ..
        } = &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *frequency_multiplication = Some(value);
        }
    }

    /// Whether the laser is tuneable, when the slot holds a laser.
    pub fn laser_tuneable(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<bool> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { tuneable, .. } => tuneable,
            _ => None,
        }
    }

    /// Set laser tuneability. No-op unless the slot holds a laser.
    pub fn set_laser_tuneable(
        &mut self,
        value: bool,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { tuneable, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *tuneable = Some(value);
        }
    }

    /// Pulsing behavior, when the slot holds a laser.
    pub fn laser_pulse(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<Pulse> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { pulse, .. } => pulse,
            _ => None,
        }
    }

    /// Set the pulsing behavior. No-op unless the slot holds a laser.
    pub fn set_laser_pulse(
        &mut self,
        value: Pulse,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { pulse, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *pulse = Some(value);
        }
    }

    /// Pulse repetition rate, when the slot holds a laser.
    pub fn laser_repetition_rate(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<Frequency> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { repetition_rate, .. } => repetition_rate,
            _ => None,
        }
    }

    /// Set the pulse repetition rate. No-op unless the slot holds a laser.
    pub fn set_laser_repetition_rate(
        &mut self,
        value: Frequency,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Laser { repetition_rate, .. } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *repetition_rate = Some(value);
        }
    }

    /// Pump source ID, when the slot holds a laser.
    pub fn laser_pump_ref(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<&str> {
        match &self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Laser { pump_ref, .. } => pump_ref.as_deref(),
            _ => None,
        }
    }

    /// Link the laser to its pump source. No-op unless the slot holds a
    /// laser.
    pub fn set_laser_pump_ref(
        &mut self,
        pump: &str,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        let light_source = self.light_source_mut(instrument_index, light_source_index);
        if let LightSourceKind::Laser { pump_ref, .. } = &mut light_source.kind {
            *pump_ref = Some(pump.to_string());
            let source = source_id(
                &light_source.id,
                "LightSource",
                format!("{instrument_index}:{light_source_index}"),
            );
            self.registry.add_reference(&source, pump, "Pump");
        }
    }

    /// Arc lamp type, when the slot holds an arc.
    pub fn arc_type(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<ArcType> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Arc { arc_type } => arc_type,
            _ => None,
        }
    }

    /// Set the arc lamp type. No-op unless the slot holds an arc.
    pub fn set_arc_type(
        &mut self,
        value: ArcType,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Arc { arc_type } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *arc_type = Some(value);
        }
    }

    /// Filament lamp type, when the slot holds a filament.
    pub fn filament_type(
        &self,
        instrument_index: usize,
        light_source_index: usize,
    ) -> Option<FilamentType> {
        match self.light_source(instrument_index, light_source_index)?.kind {
            LightSourceKind::Filament { filament_type } => filament_type,
            _ => None,
        }
    }

    /// Set the filament lamp type. No-op unless the slot holds a filament.
    pub fn set_filament_type(
        &mut self,
        value: FilamentType,
        instrument_index: usize,
        light_source_index: usize,
    ) {
        if let LightSourceKind::Filament { filament_type } =
            &mut self.light_source_mut(instrument_index, light_source_index).kind
        {
            *filament_type = Some(value);
        }
    }

    // -- Detector -------------------------------------------------------

    /// Detector ID.
    pub fn detector_id(&self, instrument_index: usize, detector_index: usize) -> Option<&str> {
        self.detector(instrument_index, detector_index)
            .map(|detector| detector.id.as_str())
    }

    /// Set the detector ID and register it.
    pub fn set_detector_id(&mut self, id: &str, instrument_index: usize, detector_index: usize) {
        self.detector_mut(instrument_index, detector_index).id = id.to_string();
        self.registry.register(id, "Detector");
    }

    /// Detector technology.
    pub fn detector_type(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<DetectorType> {
        self.detector(instrument_index, detector_index)?.detector_type
    }

    /// Set the detector technology.
    pub fn set_detector_type(
        &mut self,
        detector_type: DetectorType,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).detector_type = Some(detector_type);
    }

    /// Detector manufacturer.
    pub fn detector_manufacturer(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<&str> {
        self.detector(instrument_index, detector_index)?
            .manufacturer
            .as_deref()
    }

    /// Set the detector manufacturer.
    pub fn set_detector_manufacturer(
        &mut self,
        manufacturer: impl Into<String>,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).manufacturer =
            Some(manufacturer.into());
    }

    /// Detector model.
    pub fn detector_model(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<&str> {
        self.detector(instrument_index, detector_index)?.model.as_deref()
    }

    /// Set the detector model.
    pub fn set_detector_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).model = Some(model.into());
    }

    /// Detector serial number.
    pub fn detector_serial_number(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<&str> {
        self.detector(instrument_index, detector_index)?
            .serial_number
            .as_deref()
    }

    /// Set the detector serial number.
    pub fn set_detector_serial_number(
        &mut self,
        serial_number: impl Into<String>,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).serial_number =
            Some(serial_number.into());
    }

    /// Nominal detector gain.
    pub fn detector_gain(&self, instrument_index: usize, detector_index: usize) -> Option<f64> {
        self.detector(instrument_index, detector_index)?.gain
    }

    /// Set the nominal detector gain.
    pub fn set_detector_gain(
        &mut self,
        gain: f64,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).gain = Some(gain);
    }

    /// Nominal detector supply voltage.
    pub fn detector_voltage(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<ElectricPotential> {
        self.detector(instrument_index, detector_index)?.voltage
    }

    /// Set the nominal detector supply voltage.
    pub fn set_detector_voltage(
        &mut self,
        voltage: ElectricPotential,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).voltage = Some(voltage);
    }

    /// Detector signal offset.
    pub fn detector_offset(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<f64> {
        self.detector(instrument_index, detector_index)?.offset
    }

    /// Set the detector signal offset.
    pub fn set_detector_offset(
        &mut self,
        offset: f64,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).offset = Some(offset);
    }

    /// Detector zoom.
    pub fn detector_zoom(&self, instrument_index: usize, detector_index: usize) -> Option<f64> {
        self.detector(instrument_index, detector_index)?.zoom
    }

    /// Set the detector zoom.
    pub fn set_detector_zoom(
        &mut self,
        zoom: f64,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).zoom = Some(zoom);
    }

    /// Detector amplification gain.
    pub fn detector_amplification_gain(
        &self,
        instrument_index: usize,
        detector_index: usize,
    ) -> Option<f64> {
        self.detector(instrument_index, detector_index)?.amplification_gain
    }

    /// Set the detector amplification gain.
    pub fn set_detector_amplification_gain(
        &mut self,
        gain: f64,
        instrument_index: usize,
        detector_index: usize,
    ) {
        self.detector_mut(instrument_index, detector_index).amplification_gain = Some(gain);
    }

    // -- Objective ------------------------------------------------------

    /// Objective ID.
    pub fn objective_id(&self, instrument_index: usize, objective_index: usize) -> Option<&str> {
        self.objective(instrument_index, objective_index)
            .map(|objective| objective.id.as_str())
    }

    /// Set the objective ID and register it.
    pub fn set_objective_id(
        &mut self,
        id: &str,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).id = id.to_string();
        self.registry.register(id, "Objective");
    }

    /// Objective manufacturer.
    pub fn objective_manufacturer(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<&str> {
        self.objective(instrument_index, objective_index)?
            .manufacturer
            .as_deref()
    }

    /// Set the objective manufacturer.
    pub fn set_objective_manufacturer(
        &mut self,
        manufacturer: impl Into<String>,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).manufacturer =
            Some(manufacturer.into());
    }

    /// Objective model.
    pub fn objective_model(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<&str> {
        self.objective(instrument_index, objective_index)?.model.as_deref()
    }

    /// Set the objective model.
    pub fn set_objective_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).model = Some(model.into());
    }

    /// Optical correction.
    pub fn objective_correction(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<Correction> {
        self.objective(instrument_index, objective_index)?.correction
    }

    /// Set the optical correction.
    pub fn set_objective_correction(
        &mut self,
        correction: Correction,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).correction = Some(correction);
    }

    /// Designed immersion medium.
    pub fn objective_immersion(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<Immersion> {
        self.objective(instrument_index, objective_index)?.immersion
    }

    /// Set the designed immersion medium.
    pub fn set_objective_immersion(
        &mut self,
        immersion: Immersion,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).immersion = Some(immersion);
    }

    /// Numerical aperture.
    pub fn objective_lens_na(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<f64> {
        self.objective(instrument_index, objective_index)?.lens_na
    }

    /// Set the numerical aperture.
    pub fn set_objective_lens_na(
        &mut self,
        lens_na: f64,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).lens_na = Some(lens_na);
    }

    /// Nominal magnification.
    pub fn objective_nominal_magnification(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<f64> {
        self.objective(instrument_index, objective_index)?.nominal_magnification
    }

    /// Set the nominal magnification.
    pub fn set_objective_nominal_magnification(
        &mut self,
        magnification: f64,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).nominal_magnification =
            Some(magnification);
    }

    /// Calibrated magnification.
    pub fn objective_calibrated_magnification(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<f64> {
        self.objective(instrument_index, objective_index)?.calibrated_magnification
    }

    /// Set the calibrated magnification.
    pub fn set_objective_calibrated_magnification(
        &mut self,
        magnification: f64,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).calibrated_magnification =
            Some(magnification);
    }

    /// Working distance.
    pub fn objective_working_distance(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<Length> {
        self.objective(instrument_index, objective_index)?.working_distance
    }

    /// Set the working distance.
    pub fn set_objective_working_distance(
        &mut self,
        distance: Length,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).working_distance = Some(distance);
    }

    /// Whether the objective has an iris.
    pub fn objective_iris(
        &self,
        instrument_index: usize,
        objective_index: usize,
    ) -> Option<bool> {
        self.objective(instrument_index, objective_index)?.iris
    }

    /// Set whether the objective has an iris.
    pub fn set_objective_iris(
        &mut self,
        iris: bool,
        instrument_index: usize,
        objective_index: usize,
    ) {
        self.objective_mut(instrument_index, objective_index).iris = Some(iris);
    }

    // -- Filter ---------------------------------------------------------

    /// Filter ID.
    pub fn filter_id(&self, instrument_index: usize, filter_index: usize) -> Option<&str> {
        self.filter(instrument_index, filter_index)
            .map(|filter| filter.id.as_str())
    }

    /// Set the filter ID and register it.
    pub fn set_filter_id(&mut self, id: &str, instrument_index: usize, filter_index: usize) {
        self.filter_mut(instrument_index, filter_index).id = id.to_string();
        self.registry.register(id, "Filter");
    }

    /// Optical role of the filter.
    pub fn filter_type(
        &self,
        instrument_index: usize,
        filter_index: usize,
    ) -> Option<FilterType> {
        self.filter(instrument_index, filter_index)?.filter_type
    }

    /// Set the optical role of the filter.
    pub fn set_filter_type(
        &mut self,
        filter_type: FilterType,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.filter_mut(instrument_index, filter_index).filter_type = Some(filter_type);
    }

    /// Filter model.
    pub fn filter_model(&self, instrument_index: usize, filter_index: usize) -> Option<&str> {
        self.filter(instrument_index, filter_index)?.model.as_deref()
    }

    /// Set the filter model.
    pub fn set_filter_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.filter_mut(instrument_index, filter_index).model = Some(model.into());
    }

    /// Filter wheel position description.
    pub fn filter_filter_wheel(
        &self,
        instrument_index: usize,
        filter_index: usize,
    ) -> Option<&str> {
        self.filter(instrument_index, filter_index)?.filter_wheel.as_deref()
    }

    /// Set the filter wheel position description.
    pub fn set_filter_filter_wheel(
        &mut self,
        filter_wheel: impl Into<String>,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.filter_mut(instrument_index, filter_index).filter_wheel =
            Some(filter_wheel.into());
    }

    fn transmittance_range_mut(
        &mut self,
        instrument_index: usize,
        filter_index: usize,
    ) -> &mut TransmittanceRange {
        self.filter_mut(instrument_index, filter_index)
            .transmittance_range
            .get_or_insert_with(TransmittanceRange::default)
    }

    /// Cut-in wavelength of the filter passband.
    pub fn transmittance_range_cut_in(
        &self,
        instrument_index: usize,
        filter_index: usize,
    ) -> Option<Length> {
        self.filter(instrument_index, filter_index)?
            .transmittance_range
            .as_ref()?
            .cut_in
    }

    /// Set the cut-in wavelength.
    pub fn set_transmittance_range_cut_in(
        &mut self,
        cut_in: Length,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.transmittance_range_mut(instrument_index, filter_index).cut_in = Some(cut_in);
    }

    /// Cut-out wavelength of the filter passband.
    pub fn transmittance_range_cut_out(
        &self,
        instrument_index: usize,
        filter_index: usize,
    ) -> Option<Length> {
        self.filter(instrument_index, filter_index)?
            .transmittance_range
            .as_ref()?
            .cut_out
    }

    /// Set the cut-out wavelength.
    pub fn set_transmittance_range_cut_out(
        &mut self,
        cut_out: Length,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.transmittance_range_mut(instrument_index, filter_index).cut_out = Some(cut_out);
    }

    /// Peak transmittance of the filter.
    pub fn transmittance_range_transmittance(
        &self,
        instrument_index: usize,
        filter_index: usize,
    ) -> Option<f64> {
        self.filter(instrument_index, filter_index)?
            .transmittance_range
            .as_ref()?
            .transmittance
    }

    /// Set the peak transmittance.
    pub fn set_transmittance_range_transmittance(
        &mut self,
        transmittance: f64,
        instrument_index: usize,
        filter_index: usize,
    ) {
        self.transmittance_range_mut(instrument_index, filter_index).transmittance =
            Some(transmittance);
    }

    // -- FilterSet ------------------------------------------------------

    /// Filter set ID.
    pub fn filter_set_id(
        &self,
        instrument_index: usize,
        filter_set_index: usize,
    ) -> Option<&str> {
        self.filter_set(instrument_index, filter_set_index)
            .map(|filter_set| filter_set.id.as_str())
    }

    /// Set the filter set ID and register it.
    pub fn set_filter_set_id(
        &mut self,
        id: &str,
        instrument_index: usize,
        filter_set_index: usize,
    ) {
        self.filter_set_mut(instrument_index, filter_set_index).id = id.to_string();
        self.registry.register(id, "FilterSet");
    }

    /// Filter set model.
    pub fn filter_set_model(
        &self,
        instrument_index: usize,
        filter_set_index: usize,
    ) -> Option<&str> {
        self.filter_set(instrument_index, filter_set_index)?.model.as_deref()
    }

    /// Set the filter set model.
    pub fn set_filter_set_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        filter_set_index: usize,
    ) {
        self.filter_set_mut(instrument_index, filter_set_index).model = Some(model.into());
    }

    /// Dichroic of the filter set.
    pub fn filter_set_dichroic_ref(
        &self,
        instrument_index: usize,
        filter_set_index: usize,
    ) -> Option<&str> {
        self.filter_set(instrument_index, filter_set_index)?
            .dichroic_ref
            .as_deref()
    }

    /// Link the filter set to its dichroic.
    pub fn set_filter_set_dichroic_ref(
        &mut self,
        dichroic: &str,
        instrument_index: usize,
        filter_set_index: usize,
    ) {
        let filter_set = self.filter_set_mut(instrument_index, filter_set_index);
        filter_set.dichroic_ref = Some(dichroic.to_string());
        let source = source_id(
            &filter_set.id,
            "FilterSet",
            format!("{instrument_index}:{filter_set_index}"),
        );
        self.registry.add_reference(&source, dichroic, "DichroicRef");
    }

    /// Excitation filter at `filter_ref_index` of the filter set.
    pub fn filter_set_excitation_filter_ref(
        &self,
        instrument_index: usize,
        filter_set_index: usize,
        filter_ref_index: usize,
    ) -> Option<&str> {
        self.filter_set(instrument_index, filter_set_index)?
            .excitation_filter_refs
            .get(filter_ref_index)
            .map(String::as_str)
    }

    /// Add an excitation filter to the filter set.
    pub fn set_filter_set_excitation_filter_ref(
        &mut self,
        filter: &str,
        instrument_index: usize,
        filter_set_index: usize,
        filter_ref_index: usize,
    ) {
        let filter_set = self.filter_set_mut(instrument_index, filter_set_index);
        set_ref(&mut filter_set.excitation_filter_refs, filter_ref_index, filter);
        let source = source_id(
            &filter_set.id,
            "FilterSet",
            format!("{instrument_index}:{filter_set_index}"),
        );
        self.registry
            .add_reference(&source, filter, "ExcitationFilterRef");
    }

    /// Emission filter at `filter_ref_index` of the filter set.
    pub fn filter_set_emission_filter_ref(
        &self,
        instrument_index: usize,
        filter_set_index: usize,
        filter_ref_index: usize,
    ) -> Option<&str> {
        self.filter_set(instrument_index, filter_set_index)?
            .emission_filter_refs
            .get(filter_ref_index)
            .map(String::as_str)
    }

    /// Add an emission filter to the filter set.
    pub fn set_filter_set_emission_filter_ref(
        &mut self,
        filter: &str,
        instrument_index: usize,
        filter_set_index: usize,
        filter_ref_index: usize,
    ) {
        let filter_set = self.filter_set_mut(instrument_index, filter_set_index);
        set_ref(&mut filter_set.emission_filter_refs, filter_ref_index, filter);
        let source = source_id(
            &filter_set.id,
            "FilterSet",
            format!("{instrument_index}:{filter_set_index}"),
        );
        self.registry
            .add_reference(&source, filter, "EmissionFilterRef");
    }

    // -- Dichroic -------------------------------------------------------

    /// Dichroic ID.
    pub fn dichroic_id(&self, instrument_index: usize, dichroic_index: usize) -> Option<&str> {
        self.dichroic(instrument_index, dichroic_index)
            .map(|dichroic| dichroic.id.as_str())
    }

    /// Set the dichroic ID and register it.
    pub fn set_dichroic_id(&mut self, id: &str, instrument_index: usize, dichroic_index: usize) {
        self.dichroic_mut(instrument_index, dichroic_index).id = id.to_string();
        self.registry.register(id, "Dichroic");
    }

    /// Dichroic model.
    pub fn dichroic_model(
        &self,
        instrument_index: usize,
        dichroic_index: usize,
    ) -> Option<&str> {
        self.dichroic(instrument_index, dichroic_index)?.model.as_deref()
    }

    /// Set the dichroic model.
    pub fn set_dichroic_model(
        &mut self,
        model: impl Into<String>,
        instrument_index: usize,
        dichroic_index: usize,
    ) {
        self.dichroic_mut(instrument_index, dichroic_index).model = Some(model.into());
    }
}
