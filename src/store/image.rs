//! Accessors for images, pixel blocks, channels, planes, and TIFF mapping.

use chrono::{DateTime, Utc};

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{
    Channel, DetectorSettings, Image, ImagingEnvironment, LightPath, LightSourceSettings,
    ObjectiveSettings, Pixels, Plane, StageLabel, TiffData, TiffDataUuid,
};
use crate::primitives::{
    AcquisitionMode, Binning, Color, ContrastMethod, DimensionOrder, IlluminationType, Length,
    Medium, PixelType, Pressure, Temperature, Time,
};

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn image(&self, image_index: usize) -> Option<&Image> {
        self.root.images.get(image_index)
    }

    fn image_mut(&mut self, image_index: usize) -> &mut Image {
        vivify(&mut self.root.images, image_index)
    }

    fn pixels(&self, image_index: usize) -> Option<&Pixels> {
        self.image(image_index).map(|image| &image.pixels)
    }

    fn pixels_mut(&mut self, image_index: usize) -> &mut Pixels {
        &mut self.image_mut(image_index).pixels
    }

    fn channel(&self, image_index: usize, channel_index: usize) -> Option<&Channel> {
        self.pixels(image_index)?.channels.get(channel_index)
    }

    fn channel_mut(&mut self, image_index: usize, channel_index: usize) -> &mut Channel {
        vivify(&mut self.pixels_mut(image_index).channels, channel_index)
    }

    fn plane(&self, image_index: usize, plane_index: usize) -> Option<&Plane> {
        self.pixels(image_index)?.planes.get(plane_index)
    }

    fn plane_mut(&mut self, image_index: usize, plane_index: usize) -> &mut Plane {
        vivify(&mut self.pixels_mut(image_index).planes, plane_index)
    }

    fn tiff_data(&self, image_index: usize, tiff_data_index: usize) -> Option<&TiffData> {
        self.pixels(image_index)?.tiff_data.get(tiff_data_index)
    }

    fn tiff_data_mut(&mut self, image_index: usize, tiff_data_index: usize) -> &mut TiffData {
        vivify(&mut self.pixels_mut(image_index).tiff_data, tiff_data_index)
    }

    // -- Image ----------------------------------------------------------

    /// Image ID.
    pub fn image_id(&self, image_index: usize) -> Option<&str> {
        self.image(image_index).map(|image| image.id.as_str())
    }

    /// Set the image ID and register it.
    pub fn set_image_id(&mut self, id: &str, image_index: usize) {
        self.image_mut(image_index).id = id.to_string();
        self.registry.register(id, "Image");
    }

    /// Image name.
    pub fn image_name(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.name.as_deref()
    }

    /// Set the image name.
    pub fn set_image_name(&mut self, name: impl Into<String>, image_index: usize) {
        self.image_mut(image_index).name = Some(name.into());
    }

    /// Image description.
    pub fn image_description(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.description.as_deref()
    }

    /// Set the image description.
    pub fn set_image_description(&mut self, description: impl Into<String>, image_index: usize) {
        self.image_mut(image_index).description = Some(description.into());
    }

    /// Acquisition timestamp.
    pub fn image_acquisition_date(&self, image_index: usize) -> Option<DateTime<Utc>> {
        self.image(image_index)?.acquisition_date
    }

    /// Set the acquisition timestamp.
    pub fn set_image_acquisition_date(&mut self, date: DateTime<Utc>, image_index: usize) {
        self.image_mut(image_index).acquisition_date = Some(date);
    }

    /// Linked instrument ID.
    pub fn image_instrument_ref(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.instrument_ref.as_deref()
    }

    /// Link the image to an instrument.
    pub fn set_image_instrument_ref(&mut self, instrument: &str, image_index: usize) {
        let image = self.image_mut(image_index);
        image.instrument_ref = Some(instrument.to_string());
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, instrument, "InstrumentRef");
    }

    /// Linked experiment ID.
    pub fn image_experiment_ref(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.experiment_ref.as_deref()
    }

    /// Link the image to an experiment.
    pub fn set_image_experiment_ref(&mut self, experiment: &str, image_index: usize) {
        let image = self.image_mut(image_index);
        image.experiment_ref = Some(experiment.to_string());
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, experiment, "ExperimentRef");
    }

    /// Linked experimenter ID.
    pub fn image_experimenter_ref(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.experimenter_ref.as_deref()
    }

    /// Link the image to an experimenter.
    pub fn set_image_experimenter_ref(&mut self, experimenter: &str, image_index: usize) {
        let image = self.image_mut(image_index);
        image.experimenter_ref = Some(experimenter.to_string());
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, experimenter, "ExperimenterRef");
    }

    /// Linked experimenter group ID.
    pub fn image_experimenter_group_ref(&self, image_index: usize) -> Option<&str> {
        self.image(image_index)?.experimenter_group_ref.as_deref()
    }

    /// Link the image to an experimenter group.
    pub fn set_image_experimenter_group_ref(&mut self, group: &str, image_index: usize) {
        let image = self.image_mut(image_index);
        image.experimenter_group_ref = Some(group.to_string());
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, group, "ExperimenterGroupRef");
    }

    /// ROI linked at `roi_ref_index`.
    pub fn image_roi_ref(&self, image_index: usize, roi_ref_index: usize) -> Option<&str> {
        self.image(image_index)?
            .roi_refs
            .get(roi_ref_index)
            .map(String::as_str)
    }

    /// Link an ROI to the image.
    pub fn set_image_roi_ref(&mut self, roi: &str, image_index: usize, roi_ref_index: usize) {
        let image = self.image_mut(image_index);
        set_ref(&mut image.roi_refs, roi_ref_index, roi);
        let source = source_id(&image.id, "Image", image_index);
        self.registry.add_reference(&source, roi, "ROIRef");
    }

    /// Number of ROIs linked to the image.
    pub fn image_roi_ref_count(&self, image_index: usize) -> usize {
        self.image(image_index)
            .map_or(0, |image| image.roi_refs.len())
    }

    /// Microbeam manipulation linked at `ref_index`.
    pub fn image_microbeam_manipulation_ref(
        &self,
        image_index: usize,
        ref_index: usize,
    ) -> Option<&str> {
        self.image(image_index)?
            .microbeam_manipulation_refs
            .get(ref_index)
            .map(String::as_str)
    }

    /// Link a microbeam manipulation to the image.
    pub fn set_image_microbeam_manipulation_ref(
        &mut self,
        manipulation: &str,
        image_index: usize,
        ref_index: usize,
    ) {
        let image = self.image_mut(image_index);
        set_ref(&mut image.microbeam_manipulation_refs, ref_index, manipulation);
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, manipulation, "MicrobeamManipulationRef");
    }

    /// Annotation linked at `annotation_ref_index`.
    pub fn image_annotation_ref(
        &self,
        image_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.image(image_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to the image.
    pub fn set_image_annotation_ref(
        &mut self,
        annotation: &str,
        image_index: usize,
        annotation_ref_index: usize,
    ) {
        let image = self.image_mut(image_index);
        set_ref(&mut image.annotation_refs, annotation_ref_index, annotation);
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, annotation, "AnnotationRef");
    }

    /// Number of annotations linked to the image.
    pub fn image_annotation_ref_count(&self, image_index: usize) -> usize {
        self.image(image_index)
            .map_or(0, |image| image.annotation_refs.len())
    }

    // -- ObjectiveSettings ----------------------------------------------

    fn objective_settings_mut(&mut self, image_index: usize) -> &mut ObjectiveSettings {
        self.image_mut(image_index)
            .objective_settings
            .get_or_insert_with(ObjectiveSettings::default)
    }

    /// ID of the objective used for the image.
    pub fn image_objective_settings_id(&self, image_index: usize) -> Option<&str> {
        Some(self.image(image_index)?.objective_settings.as_ref()?.id.as_str())
    }

    /// Record which objective the image was acquired with.
    pub fn set_image_objective_settings_id(&mut self, objective: &str, image_index: usize) {
        self.objective_settings_mut(image_index).id = objective.to_string();
        let image = self.image_mut(image_index);
        let source = source_id(&image.id, "Image", image_index);
        self.registry
            .add_reference(&source, objective, "ObjectiveSettings");
    }

    /// Correction collar position of the objective settings.
    pub fn image_objective_settings_correction_collar(&self, image_index: usize) -> Option<f64> {
        self.image(image_index)?
            .objective_settings
            .as_ref()?
            .correction_collar
    }

    /// Set the correction collar position.
    pub fn set_image_objective_settings_correction_collar(
        &mut self,
        correction_collar: f64,
        image_index: usize,
    ) {
        self.objective_settings_mut(image_index).correction_collar = Some(correction_collar);
    }

    /// Medium of the objective settings.
    pub fn image_objective_settings_medium(&self, image_index: usize) -> Option<Medium> {
        self.image(image_index)?.objective_settings.as_ref()?.medium
    }

    /// Set the objective settings medium.
    pub fn set_image_objective_settings_medium(&mut self, medium: Medium, image_index: usize) {
        self.objective_settings_mut(image_index).medium = Some(medium);
    }

    /// Refractive index of the objective settings.
    pub fn image_objective_settings_refractive_index(&self, image_index: usize) -> Option<f64> {
        self.image(image_index)?
            .objective_settings
            .as_ref()?
            .refractive_index
    }

    /// Set the refractive index.
    pub fn set_image_objective_settings_refractive_index(
        &mut self,
        refractive_index: f64,
        image_index: usize,
    ) {
        self.objective_settings_mut(image_index).refractive_index = Some(refractive_index);
    }

    // -- ImagingEnvironment ---------------------------------------------

    fn imaging_environment_mut(&mut self, image_index: usize) -> &mut ImagingEnvironment {
        self.image_mut(image_index)
            .imaging_environment
            .get_or_insert_with(ImagingEnvironment::default)
    }

    /// Chamber temperature during acquisition.
    pub fn imaging_environment_temperature(&self, image_index: usize) -> Option<Temperature> {
        self.image(image_index)?.imaging_environment.as_ref()?.temperature
    }

    /// Set the chamber temperature.
    pub fn set_imaging_environment_temperature(
        &mut self,
        temperature: Temperature,
        image_index: usize,
    ) {
        self.imaging_environment_mut(image_index).temperature = Some(temperature);
    }

    /// Air pressure during acquisition.
    pub fn imaging_environment_air_pressure(&self, image_index: usize) -> Option<Pressure> {
        self.image(image_index)?.imaging_environment.as_ref()?.air_pressure
    }

    /// Set the air pressure.
    pub fn set_imaging_environment_air_pressure(
        &mut self,
        air_pressure: Pressure,
        image_index: usize,
    ) {
        self.imaging_environment_mut(image_index).air_pressure = Some(air_pressure);
    }

    /// Relative humidity during acquisition.
    pub fn imaging_environment_humidity(&self, image_index: usize) -> Option<f64> {
        self.image(image_index)?.imaging_environment.as_ref()?.humidity
    }

    /// Set the relative humidity.
    pub fn set_imaging_environment_humidity(&mut self, humidity: f64, image_index: usize) {
        self.imaging_environment_mut(image_index).humidity = Some(humidity);
    }

    /// CO2 fraction during acquisition.
    pub fn imaging_environment_co2_percent(&self, image_index: usize) -> Option<f64> {
        self.image(image_index)?.imaging_environment.as_ref()?.co2_percent
    }

    /// Set the CO2 fraction.
    pub fn set_imaging_environment_co2_percent(&mut self, co2: f64, image_index: usize) {
        self.imaging_environment_mut(image_index).co2_percent = Some(co2);
    }

    // -- StageLabel -----------------------------------------------------

    fn stage_label_mut(&mut self, image_index: usize) -> &mut StageLabel {
        self.image_mut(image_index)
            .stage_label
            .get_or_insert_with(StageLabel::default)
    }

    /// Stage label name.
    pub fn stage_label_name(&self, image_index: usize) -> Option<&str> {
        Some(self.image(image_index)?.stage_label.as_ref()?.name.as_str())
    }

    /// Set the stage label name.
    pub fn set_stage_label_name(&mut self, name: impl Into<String>, image_index: usize) {
        self.stage_label_mut(image_index).name = name.into();
    }

    /// Stage label X coordinate.
    pub fn stage_label_x(&self, image_index: usize) -> Option<Length> {
        self.image(image_index)?.stage_label.as_ref()?.x
    }

    /// Set the stage label X coordinate.
    pub fn set_stage_label_x(&mut self, x: Length, image_index: usize) {
        self.stage_label_mut(image_index).x = Some(x);
    }

    /// Stage label Y coordinate.
    pub fn stage_label_y(&self, image_index: usize) -> Option<Length> {
        self.image(image_index)?.stage_label.as_ref()?.y
    }

    /// Set the stage label Y coordinate.
    pub fn set_stage_label_y(&mut self, y: Length, image_index: usize) {
        self.stage_label_mut(image_index).y = Some(y);
    }

    /// Stage label Z coordinate.
    pub fn stage_label_z(&self, image_index: usize) -> Option<Length> {
        self.image(image_index)?.stage_label.as_ref()?.z
    }

    /// Set the stage label Z coordinate.
    pub fn set_stage_label_z(&mut self, z: Length, image_index: usize) {
        self.stage_label_mut(image_index).z = Some(z);
    }

    // -- Pixels ---------------------------------------------------------

    /// Pixels ID.
    pub fn pixels_id(&self, image_index: usize) -> Option<&str> {
        self.pixels(image_index).map(|pixels| pixels.id.as_str())
    }

    /// Set the pixels ID and register it.
    pub fn set_pixels_id(&mut self, id: &str, image_index: usize) {
        self.pixels_mut(image_index).id = id.to_string();
        self.registry.register(id, "Pixels");
    }

    /// Plane storage order.
    pub fn pixels_dimension_order(&self, image_index: usize) -> Option<DimensionOrder> {
        self.pixels(image_index).map(|pixels| pixels.dimension_order)
    }

    /// Set the plane storage order.
    pub fn set_pixels_dimension_order(&mut self, order: DimensionOrder, image_index: usize) {
        self.pixels_mut(image_index).dimension_order = order;
    }

    /// Sample storage type.
    pub fn pixels_type(&self, image_index: usize) -> Option<PixelType> {
        self.pixels(image_index).map(|pixels| pixels.pixel_type)
    }

    /// Set the sample storage type.
    pub fn set_pixels_type(&mut self, pixel_type: PixelType, image_index: usize) {
        self.pixels_mut(image_index).pixel_type = pixel_type;
    }

    /// Size along X.
    pub fn pixels_size_x(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index).map(|pixels| pixels.size_x)
    }

    /// Set the size along X.
    pub fn set_pixels_size_x(&mut self, size_x: u32, image_index: usize) {
        self.pixels_mut(image_index).size_x = size_x;
    }

    /// Size along Y.
    pub fn pixels_size_y(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index).map(|pixels| pixels.size_y)
    }

    /// Set the size along Y.
    pub fn set_pixels_size_y(&mut self, size_y: u32, image_index: usize) {
        self.pixels_mut(image_index).size_y = size_y;
    }

    /// Number of focal planes.
    pub fn pixels_size_z(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index).map(|pixels| pixels.size_z)
    }

    /// Set the number of focal planes.
    pub fn set_pixels_size_z(&mut self, size_z: u32, image_index: usize) {
        self.pixels_mut(image_index).size_z = size_z;
    }

    /// Number of channels.
    pub fn pixels_size_c(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index).map(|pixels| pixels.size_c)
    }

    /// Set the number of channels.
    pub fn set_pixels_size_c(&mut self, size_c: u32, image_index: usize) {
        self.pixels_mut(image_index).size_c = size_c;
    }

    /// Number of time points.
    pub fn pixels_size_t(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index).map(|pixels| pixels.size_t)
    }

    /// Set the number of time points.
    pub fn set_pixels_size_t(&mut self, size_t: u32, image_index: usize) {
        self.pixels_mut(image_index).size_t = size_t;
    }

    /// Physical pixel size along X.
    pub fn pixels_physical_size_x(&self, image_index: usize) -> Option<Length> {
        self.pixels(image_index)?.physical_size_x
    }

    /// Set the physical pixel size along X.
    pub fn set_pixels_physical_size_x(&mut self, size: Length, image_index: usize) {
        self.pixels_mut(image_index).physical_size_x = Some(size);
    }

    /// Physical pixel size along Y.
    pub fn pixels_physical_size_y(&self, image_index: usize) -> Option<Length> {
        self.pixels(image_index)?.physical_size_y
    }

    /// Set the physical pixel size along Y.
    pub fn set_pixels_physical_size_y(&mut self, size: Length, image_index: usize) {
        self.pixels_mut(image_index).physical_size_y = Some(size);
    }

    /// Physical spacing between focal planes.
    pub fn pixels_physical_size_z(&self, image_index: usize) -> Option<Length> {
        self.pixels(image_index)?.physical_size_z
    }

    /// Set the physical spacing between focal planes.
    pub fn set_pixels_physical_size_z(&mut self, size: Length, image_index: usize) {
        self.pixels_mut(image_index).physical_size_z = Some(size);
    }

    /// Nominal time between successive time points.
    pub fn pixels_time_increment(&self, image_index: usize) -> Option<Time> {
        self.pixels(image_index)?.time_increment
    }

    /// Set the nominal time between time points.
    pub fn set_pixels_time_increment(&mut self, increment: Time, image_index: usize) {
        self.pixels_mut(image_index).time_increment = Some(increment);
    }

    /// Significant bits per sample.
    pub fn pixels_significant_bits(&self, image_index: usize) -> Option<u32> {
        self.pixels(image_index)?.significant_bits
    }

    /// Set the significant bits per sample.
    pub fn set_pixels_significant_bits(&mut self, bits: u32, image_index: usize) {
        self.pixels_mut(image_index).significant_bits = Some(bits);
    }

    /// Whether samples are stored big-endian.
    pub fn pixels_big_endian(&self, image_index: usize) -> Option<bool> {
        self.pixels(image_index)?.big_endian
    }

    /// Set the sample byte order.
    pub fn set_pixels_big_endian(&mut self, big_endian: bool, image_index: usize) {
        self.pixels_mut(image_index).big_endian = Some(big_endian);
    }

    /// Whether planes are interleaved by channel.
    pub fn pixels_interleaved(&self, image_index: usize) -> Option<bool> {
        self.pixels(image_index)?.interleaved
    }

    /// Set plane interleaving.
    pub fn set_pixels_interleaved(&mut self, interleaved: bool, image_index: usize) {
        self.pixels_mut(image_index).interleaved = Some(interleaved);
    }

    // -- Channel --------------------------------------------------------

    /// Number of channels declared under the image.
    pub fn channel_count(&self, image_index: usize) -> usize {
        self.pixels(image_index).map_or(0, |pixels| pixels.channels.len())
    }

    /// Channel ID.
    pub fn channel_id(&self, image_index: usize, channel_index: usize) -> Option<&str> {
        self.channel(image_index, channel_index)
            .map(|channel| channel.id.as_str())
    }

    /// Set the channel ID and register it.
    pub fn set_channel_id(&mut self, id: &str, image_index: usize, channel_index: usize) {
        self.channel_mut(image_index, channel_index).id = id.to_string();
        self.registry.register(id, "Channel");
    }

    /// Channel name.
    pub fn channel_name(&self, image_index: usize, channel_index: usize) -> Option<&str> {
        self.channel(image_index, channel_index)?.name.as_deref()
    }

    /// Set the channel name.
    pub fn set_channel_name(
        &mut self,
        name: impl Into<String>,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).name = Some(name.into());
    }

    /// Samples per pixel.
    pub fn channel_samples_per_pixel(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<u32> {
        self.channel(image_index, channel_index)?.samples_per_pixel
    }

    /// Set the samples per pixel.
    pub fn set_channel_samples_per_pixel(
        &mut self,
        samples: u32,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).samples_per_pixel = Some(samples);
    }

    /// Display color.
    pub fn channel_color(&self, image_index: usize, channel_index: usize) -> Option<Color> {
        self.channel(image_index, channel_index)?.color
    }

    /// Set the display color.
    pub fn set_channel_color(&mut self, color: Color, image_index: usize, channel_index: usize) {
        self.channel_mut(image_index, channel_index).color = Some(color);
    }

    /// Acquisition technique.
    pub fn channel_acquisition_mode(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<AcquisitionMode> {
        self.channel(image_index, channel_index)?.acquisition_mode
    }

    /// Set the acquisition technique.
    pub fn set_channel_acquisition_mode(
        &mut self,
        mode: AcquisitionMode,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).acquisition_mode = Some(mode);
    }

    /// Illumination path.
    pub fn channel_illumination_type(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<IlluminationType> {
        self.channel(image_index, channel_index)?.illumination_type
    }

    /// Set the illumination path.
    pub fn set_channel_illumination_type(
        &mut self,
        illumination: IlluminationType,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).illumination_type = Some(illumination);
    }

    /// Contrast technique.
    pub fn channel_contrast_method(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<ContrastMethod> {
        self.channel(image_index, channel_index)?.contrast_method
    }

    /// Set the contrast technique.
    pub fn set_channel_contrast_method(
        &mut self,
        method: ContrastMethod,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).contrast_method = Some(method);
    }

    /// Excitation wavelength.
    pub fn channel_excitation_wavelength(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<Length> {
        self.channel(image_index, channel_index)?.excitation_wavelength
    }

    /// Set the excitation wavelength.
    pub fn set_channel_excitation_wavelength(
        &mut self,
        wavelength: Length,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).excitation_wavelength = Some(wavelength);
    }

    /// Emission wavelength.
    pub fn channel_emission_wavelength(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<Length> {
        self.channel(image_index, channel_index)?.emission_wavelength
    }

    /// Set the emission wavelength.
    pub fn set_channel_emission_wavelength(
        &mut self,
        wavelength: Length,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).emission_wavelength = Some(wavelength);
    }

    /// Fluorophore name.
    pub fn channel_fluor(&self, image_index: usize, channel_index: usize) -> Option<&str> {
        self.channel(image_index, channel_index)?.fluor.as_deref()
    }

    /// Set the fluorophore name.
    pub fn set_channel_fluor(
        &mut self,
        fluor: impl Into<String>,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).fluor = Some(fluor.into());
    }

    /// Neutral-density attenuation exponent.
    pub fn channel_nd_filter(&self, image_index: usize, channel_index: usize) -> Option<f64> {
        self.channel(image_index, channel_index)?.nd_filter
    }

    /// Set the neutral-density attenuation.
    pub fn set_channel_nd_filter(
        &mut self,
        nd_filter: f64,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).nd_filter = Some(nd_filter);
    }

    /// Pinhole diameter.
    pub fn channel_pinhole_size(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<Length> {
        self.channel(image_index, channel_index)?.pinhole_size
    }

    /// Set the pinhole diameter.
    pub fn set_channel_pinhole_size(
        &mut self,
        size: Length,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).pinhole_size = Some(size);
    }

    /// Pockel cell setting.
    pub fn channel_pockel_cell_setting(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<i32> {
        self.channel(image_index, channel_index)?.pockel_cell_setting
    }

    /// Set the Pockel cell setting.
    pub fn set_channel_pockel_cell_setting(
        &mut self,
        setting: i32,
        image_index: usize,
        channel_index: usize,
    ) {
        self.channel_mut(image_index, channel_index).pockel_cell_setting = Some(setting);
    }

    /// Annotation linked to the channel at `annotation_ref_index`.
    pub fn channel_annotation_ref(
        &self,
        image_index: usize,
        channel_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.channel(image_index, channel_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to the channel.
    pub fn set_channel_annotation_ref(
        &mut self,
        annotation: &str,
        image_index: usize,
        channel_index: usize,
        annotation_ref_index: usize,
    ) {
        let channel = self.channel_mut(image_index, channel_index);
        set_ref(&mut channel.annotation_refs, annotation_ref_index, annotation);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry
            .add_reference(&source, annotation, "AnnotationRef");
    }

    // -- Channel light source settings ----------------------------------

    fn light_source_settings_mut(
        &mut self,
        image_index: usize,
        channel_index: usize,
    ) -> &mut LightSourceSettings {
        self.channel_mut(image_index, channel_index)
            .light_source_settings
            .get_or_insert_with(LightSourceSettings::default)
    }

    /// ID of the light source used for the channel.
    pub fn channel_light_source_settings_id(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<&str> {
        Some(
            self.channel(image_index, channel_index)?
                .light_source_settings
                .as_ref()?
                .id
                .as_str(),
        )
    }

    /// Record which light source the channel used.
    pub fn set_channel_light_source_settings_id(
        &mut self,
        light_source: &str,
        image_index: usize,
        channel_index: usize,
    ) {
        self.light_source_settings_mut(image_index, channel_index).id = light_source.to_string();
        let channel = self.channel_mut(image_index, channel_index);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry
            .add_reference(&source, light_source, "LightSourceSettings");
    }

    /// Attenuation of the channel's light source.
    pub fn channel_light_source_settings_attenuation(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<f64> {
        self.channel(image_index, channel_index)?
            .light_source_settings
            .as_ref()?
            .attenuation
    }

    /// Set the light source attenuation.
    pub fn set_channel_light_source_settings_attenuation(
        &mut self,
        attenuation: f64,
        image_index: usize,
        channel_index: usize,
    ) {
        self.light_source_settings_mut(image_index, channel_index).attenuation =
            Some(attenuation);
    }

    /// Wavelength the channel's light source was tuned to.
    pub fn channel_light_source_settings_wavelength(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<Length> {
        self.channel(image_index, channel_index)?
            .light_source_settings
            .as_ref()?
            .wavelength
    }

    /// Set the tuned wavelength.
    pub fn set_channel_light_source_settings_wavelength(
        &mut self,
        wavelength: Length,
        image_index: usize,
        channel_index: usize,
    ) {
        self.light_source_settings_mut(image_index, channel_index).wavelength = Some(wavelength);
    }

    // -- Channel detector settings --------------------------------------

    fn detector_settings_mut(
        &mut self,
        image_index: usize,
        channel_index: usize,
    ) -> &mut DetectorSettings {
        self.channel_mut(image_index, channel_index)
            .detector_settings
            .get_or_insert_with(DetectorSettings::default)
    }

    /// ID of the detector used for the channel.
    pub fn channel_detector_settings_id(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<&str> {
        Some(
            self.channel(image_index, channel_index)?
                .detector_settings
                .as_ref()?
                .id
                .as_str(),
        )
    }

    /// Record which detector the channel used.
    pub fn set_channel_detector_settings_id(
        &mut self,
        detector: &str,
        image_index: usize,
        channel_index: usize,
    ) {
        self.detector_settings_mut(image_index, channel_index).id = detector.to_string();
        let channel = self.channel_mut(image_index, channel_index);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry
            .add_reference(&source, detector, "DetectorSettings");
    }

    /// Detector gain for the channel.
    pub fn channel_detector_settings_gain(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<f64> {
        self.channel(image_index, channel_index)?
            .detector_settings
            .as_ref()?
            .gain
    }

    /// Set the detector gain.
    pub fn set_channel_detector_settings_gain(
        &mut self,
        gain: f64,
        image_index: usize,
        channel_index: usize,
    ) {
        self.detector_settings_mut(image_index, channel_index).gain = Some(gain);
    }

    /// Detector offset for the channel.
    pub fn channel_detector_settings_offset(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<f64> {
        self.channel(image_index, channel_index)?
            .detector_settings
            .as_ref()?
            .offset
    }

    /// Set the detector offset.
    pub fn set_channel_detector_settings_offset(
        &mut self,
        offset: f64,
        image_index: usize,
        channel_index: usize,
    ) {
        self.detector_settings_mut(image_index, channel_index).offset = Some(offset);
    }

    /// Detector binning for the channel.
    pub fn channel_detector_settings_binning(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<Binning> {
        self.channel(image_index, channel_index)?
            .detector_settings
            .as_ref()?
            .binning
    }

    /// Set the detector binning.
    pub fn set_channel_detector_settings_binning(
        &mut self,
        binning: Binning,
        image_index: usize,
        channel_index: usize,
    ) {
        self.detector_settings_mut(image_index, channel_index).binning = Some(binning);
    }

    // -- Channel light path ---------------------------------------------

    fn light_path_mut(&mut self, image_index: usize, channel_index: usize) -> &mut LightPath {
        self.channel_mut(image_index, channel_index)
            .light_path
            .get_or_insert_with(LightPath::default)
    }

    /// Dichroic in the channel's light path.
    pub fn channel_light_path_dichroic_ref(
        &self,
        image_index: usize,
        channel_index: usize,
    ) -> Option<&str> {
        self.channel(image_index, channel_index)?
            .light_path
            .as_ref()?
            .dichroic_ref
            .as_deref()
    }

    /// Set the dichroic in the channel's light path.
    pub fn set_channel_light_path_dichroic_ref(
        &mut self,
        dichroic: &str,
        image_index: usize,
        channel_index: usize,
    ) {
        self.light_path_mut(image_index, channel_index).dichroic_ref =
            Some(dichroic.to_string());
        let channel = self.channel_mut(image_index, channel_index);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry.add_reference(&source, dichroic, "DichroicRef");
    }

    /// Excitation filter at `filter_ref_index` of the channel's light path.
    pub fn channel_light_path_excitation_filter_ref(
        &self,
        image_index: usize,
        channel_index: usize,
        filter_ref_index: usize,
    ) -> Option<&str> {
        self.channel(image_index, channel_index)?
            .light_path
            .as_ref()?
            .excitation_filter_refs
            .get(filter_ref_index)
            .map(String::as_str)
    }

    /// Add an excitation filter to the channel's light path.
    pub fn set_channel_light_path_excitation_filter_ref(
        &mut self,
        filter: &str,
        image_index: usize,
        channel_index: usize,
        filter_ref_index: usize,
    ) {
        let light_path = self.light_path_mut(image_index, channel_index);
        set_ref(&mut light_path.excitation_filter_refs, filter_ref_index, filter);
        let channel = self.channel_mut(image_index, channel_index);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry
            .add_reference(&source, filter, "ExcitationFilterRef");
    }

    /// Emission filter at `filter_ref_index` of the channel's light path.
    pub fn channel_light_path_emission_filter_ref(
        &self,
        image_index: usize,
        channel_index: usize,
        filter_ref_index: usize,
    ) -> Option<&str> {
        self.channel(image_index, channel_index)?
            .light_path
            .as_ref()?
            .emission_filter_refs
            .get(filter_ref_index)
            .map(String::as_str)
    }

    /// Add an emission filter to the channel's light path.
    pub fn set_channel_light_path_emission_filter_ref(
        &mut self,
        filter: &str,
        image_index: usize,
        channel_index: usize,
        filter_ref_index: usize,
    ) {
        let light_path = self.light_path_mut(image_index, channel_index);
        set_ref(&mut light_path.emission_filter_refs, filter_ref_index, filter);
        let channel = self.channel_mut(image_index, channel_index);
        let source = source_id(&channel.id, "Channel", format!("{image_index}:{channel_index}"));
        self.registry
            .add_reference(&source, filter, "EmissionFilterRef");
    }

    // -- Plane ----------------------------------------------------------

    /// Number of plane records under the image.
    pub fn plane_count(&self, image_index: usize) -> usize {
        self.pixels(image_index).map_or(0, |pixels| pixels.planes.len())
    }

    /// Z index of the plane.
    pub fn plane_the_z(&self, image_index: usize, plane_index: usize) -> Option<u32> {
        self.plane(image_index, plane_index).map(|plane| plane.the_z)
    }

    /// Set the Z index of the plane.
    pub fn set_plane_the_z(&mut self, the_z: u32, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).the_z = the_z;
    }

    /// C index of the plane.
    pub fn plane_the_c(&self, image_index: usize, plane_index: usize) -> Option<u32> {
        self.plane(image_index, plane_index).map(|plane| plane.the_c)
    }

    /// Set the C index of the plane.
    pub fn set_plane_the_c(&mut self, the_c: u32, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).the_c = the_c;
    }

    /// T index of the plane.
    pub fn plane_the_t(&self, image_index: usize, plane_index: usize) -> Option<u32> {
        self.plane(image_index, plane_index).map(|plane| plane.the_t)
    }

    /// Set the T index of the plane.
    pub fn set_plane_the_t(&mut self, the_t: u32, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).the_t = the_t;
    }

    /// Time since acquisition start.
    pub fn plane_delta_t(&self, image_index: usize, plane_index: usize) -> Option<Time> {
        self.plane(image_index, plane_index)?.delta_t
    }

    /// Set the time since acquisition start.
    pub fn set_plane_delta_t(&mut self, delta_t: Time, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).delta_t = Some(delta_t);
    }

    /// Exposure time of the plane.
    pub fn plane_exposure_time(&self, image_index: usize, plane_index: usize) -> Option<Time> {
        self.plane(image_index, plane_index)?.exposure_time
    }

    /// Set the exposure time.
    pub fn set_plane_exposure_time(
        &mut self,
        exposure: Time,
        image_index: usize,
        plane_index: usize,
    ) {
        self.plane_mut(image_index, plane_index).exposure_time = Some(exposure);
    }

    /// Stage position X of the plane.
    pub fn plane_position_x(&self, image_index: usize, plane_index: usize) -> Option<Length> {
        self.plane(image_index, plane_index)?.position_x
    }

    /// Set the stage position X.
    pub fn set_plane_position_x(&mut self, x: Length, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).position_x = Some(x);
    }

    /// Stage position Y of the plane.
    pub fn plane_position_y(&self, image_index: usize, plane_index: usize) -> Option<Length> {
        self.plane(image_index, plane_index)?.position_y
    }

    /// Set the stage position Y.
    pub fn set_plane_position_y(&mut self, y: Length, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).position_y = Some(y);
    }

    /// Stage position Z of the plane.
    pub fn plane_position_z(&self, image_index: usize, plane_index: usize) -> Option<Length> {
        self.plane(image_index, plane_index)?.position_z
    }

    /// Set the stage position Z.
    pub fn set_plane_position_z(&mut self, z: Length, image_index: usize, plane_index: usize) {
        self.plane_mut(image_index, plane_index).position_z = Some(z);
    }

    // -- TiffData -------------------------------------------------------

    /// Number of TiffData blocks under the image.
    pub fn tiff_data_count(&self, image_index: usize) -> usize {
        self.pixels(image_index)
            .map_or(0, |pixels| pixels.tiff_data.len())
    }

    /// First IFD of the block.
    pub fn tiff_data_ifd(&self, image_index: usize, tiff_data_index: usize) -> Option<u32> {
        self.tiff_data(image_index, tiff_data_index)?.ifd
    }

    /// Set the first IFD of the block.
    pub fn set_tiff_data_ifd(&mut self, ifd: u32, image_index: usize, tiff_data_index: usize) {
        self.tiff_data_mut(image_index, tiff_data_index).ifd = Some(ifd);
    }

    /// First Z index covered by the block.
    pub fn tiff_data_first_z(&self, image_index: usize, tiff_data_index: usize) -> Option<u32> {
        self.tiff_data(image_index, tiff_data_index)?.first_z
    }

    /// Set the first Z index covered.
    pub fn set_tiff_data_first_z(
        &mut self,
        first_z: u32,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index).first_z = Some(first_z);
    }

    /// First C index covered by the block.
    pub fn tiff_data_first_c(&self, image_index: usize, tiff_data_index: usize) -> Option<u32> {
        self.tiff_data(image_index, tiff_data_index)?.first_c
    }

    /// Set the first C index covered.
    pub fn set_tiff_data_first_c(
        &mut self,
        first_c: u32,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index).first_c = Some(first_c);
    }

    /// First T index covered by the block.
    pub fn tiff_data_first_t(&self, image_index: usize, tiff_data_index: usize) -> Option<u32> {
        self.tiff_data(image_index, tiff_data_index)?.first_t
    }

    /// Set the first T index covered.
    pub fn set_tiff_data_first_t(
        &mut self,
        first_t: u32,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index).first_t = Some(first_t);
    }

    /// Number of planes in the block.
    pub fn tiff_data_plane_count(
        &self,
        image_index: usize,
        tiff_data_index: usize,
    ) -> Option<u32> {
        self.tiff_data(image_index, tiff_data_index)?.plane_count
    }

    /// Set the number of planes in the block.
    pub fn set_tiff_data_plane_count(
        &mut self,
        plane_count: u32,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index).plane_count = Some(plane_count);
    }

    /// UUID of the file holding the block.
    pub fn tiff_data_uuid_value(
        &self,
        image_index: usize,
        tiff_data_index: usize,
    ) -> Option<&str> {
        Some(
            self.tiff_data(image_index, tiff_data_index)?
                .uuid
                .as_ref()?
                .value
                .as_str(),
        )
    }

    /// Set the UUID of the file holding the block.
    pub fn set_tiff_data_uuid_value(
        &mut self,
        value: impl Into<String>,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index)
            .uuid
            .get_or_insert_with(TiffDataUuid::default)
            .value = value.into();
    }

    /// Name of the file holding the block.
    pub fn tiff_data_uuid_file_name(
        &self,
        image_index: usize,
        tiff_data_index: usize,
    ) -> Option<&str> {
        self.tiff_data(image_index, tiff_data_index)?
            .uuid
            .as_ref()?
            .file_name
            .as_deref()
    }

    /// Set the name of the file holding the block.
    pub fn set_tiff_data_uuid_file_name(
        &mut self,
        file_name: impl Into<String>,
        image_index: usize,
        tiff_data_index: usize,
    ) {
        self.tiff_data_mut(image_index, tiff_data_index)
            .uuid
            .get_or_insert_with(TiffDataUuid::default)
            .file_name = Some(file_name.into());
    }
}
