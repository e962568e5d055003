//! Accessors for plates, wells, well samples, plate acquisitions, screens,
//! and reagents.

use chrono::{DateTime, Utc};

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{Plate, PlateAcquisition, Reagent, Screen, Well, WellSample};
use crate::primitives::{Color, Length, NamingConvention};

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn plate(&self, plate_index: usize) -> Option<&Plate> {
        self.root.plates.get(plate_index)
    }

    fn plate_mut(&mut self, plate_index: usize) -> &mut Plate {
        vivify(&mut self.root.plates, plate_index)
    }

    fn well(&self, plate_index: usize, well_index: usize) -> Option<&Well> {
        self.plate(plate_index)?.wells.get(well_index)
    }

    fn well_mut(&mut self, plate_index: usize, well_index: usize) -> &mut Well {
        vivify(&mut self.plate_mut(plate_index).wells, well_index)
    }

    fn well_sample(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<&WellSample> {
        self.well(plate_index, well_index)?.well_samples.get(sample_index)
    }

    fn well_sample_mut(
        &mut self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> &mut WellSample {
        vivify(
            &mut self.well_mut(plate_index, well_index).well_samples,
            sample_index,
        )
    }

    fn plate_acquisition(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<&PlateAcquisition> {
        self.plate(plate_index)?.plate_acquisitions.get(acquisition_index)
    }

    fn plate_acquisition_mut(
        &mut self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> &mut PlateAcquisition {
        vivify(
            &mut self.plate_mut(plate_index).plate_acquisitions,
            acquisition_index,
        )
    }

    fn screen(&self, screen_index: usize) -> Option<&Screen> {
        self.root.screens.get(screen_index)
    }

    fn screen_mut(&mut self, screen_index: usize) -> &mut Screen {
        vivify(&mut self.root.screens, screen_index)
    }

    fn reagent(&self, screen_index: usize, reagent_index: usize) -> Option<&Reagent> {
        self.screen(screen_index)?.reagents.get(reagent_index)
    }

    fn reagent_mut(&mut self, screen_index: usize, reagent_index: usize) -> &mut Reagent {
        vivify(&mut self.screen_mut(screen_index).reagents, reagent_index)
    }

    // -- Plate ----------------------------------------------------------

    /// Plate ID.
    pub fn plate_id(&self, plate_index: usize) -> Option<&str> {
        self.plate(plate_index).map(|plate| plate.id.as_str())
    }

    /// Set the plate ID and register it.
    pub fn set_plate_id(&mut self, id: &str, plate_index: usize) {
        self.plate_mut(plate_index).id = id.to_string();
        self.registry.register(id, "Plate");
    }

    /// Plate name.
    pub fn plate_name(&self, plate_index: usize) -> Option<&str> {
        self.plate(plate_index)?.name.as_deref()
    }

    /// Set the plate name.
    pub fn set_plate_name(&mut self, name: impl Into<String>, plate_index: usize) {
        self.plate_mut(plate_index).name = Some(name.into());
    }

    /// Plate description.
    pub fn plate_description(&self, plate_index: usize) -> Option<&str> {
        self.plate(plate_index)?.description.as_deref()
    }

    /// Set the plate description.
    pub fn set_plate_description(&mut self, description: impl Into<String>, plate_index: usize) {
        self.plate_mut(plate_index).description = Some(description.into());
    }

    /// Plate status.
    pub fn plate_status(&self, plate_index: usize) -> Option<&str> {
        self.plate(plate_index)?.status.as_deref()
    }

    /// Set the plate status.
    pub fn set_plate_status(&mut self, status: impl Into<String>, plate_index: usize) {
        self.plate_mut(plate_index).status = Some(status.into());
    }

    /// External plate identifier.
    pub fn plate_external_identifier(&self, plate_index: usize) -> Option<&str> {
        self.plate(plate_index)?.external_identifier.as_deref()
    }

    /// Set the external plate identifier.
    pub fn set_plate_external_identifier(
        &mut self,
        identifier: impl Into<String>,
        plate_index: usize,
    ) {
        self.plate_mut(plate_index).external_identifier = Some(identifier.into());
    }

    /// Number of rows.
    pub fn plate_rows(&self, plate_index: usize) -> Option<u32> {
        self.plate(plate_index)?.rows
    }

    /// Set the number of rows.
    pub fn set_plate_rows(&mut self, rows: u32, plate_index: usize) {
        self.plate_mut(plate_index).rows = Some(rows);
    }

    /// Number of columns.
    pub fn plate_columns(&self, plate_index: usize) -> Option<u32> {
        self.plate(plate_index)?.columns
    }

    /// Set the number of columns.
    pub fn set_plate_columns(&mut self, columns: u32, plate_index: usize) {
        self.plate_mut(plate_index).columns = Some(columns);
    }

    /// Row naming convention.
    pub fn plate_row_naming_convention(&self, plate_index: usize) -> Option<NamingConvention> {
        self.plate(plate_index)?.row_naming_convention
    }

    /// Set the row naming convention.
    pub fn set_plate_row_naming_convention(
        &mut self,
        convention: NamingConvention,
        plate_index: usize,
    ) {
        self.plate_mut(plate_index).row_naming_convention = Some(convention);
    }

    /// Column naming convention.
    pub fn plate_column_naming_convention(
        &self,
        plate_index: usize,
    ) -> Option<NamingConvention> {
        self.plate(plate_index)?.column_naming_convention
    }

    /// Set the column naming convention.
    pub fn set_plate_column_naming_convention(
        &mut self,
        convention: NamingConvention,
        plate_index: usize,
    ) {
        self.plate_mut(plate_index).column_naming_convention = Some(convention);
    }

    /// Origin offset X of well A1.
    pub fn plate_well_origin_x(&self, plate_index: usize) -> Option<Length> {
        self.plate(plate_index)?.well_origin_x
    }

    /// Set the origin offset X of well A1.
    pub fn set_plate_well_origin_x(&mut self, origin: Length, plate_index: usize) {
        self.plate_mut(plate_index).well_origin_x = Some(origin);
    }

    /// Origin offset Y of well A1.
    pub fn plate_well_origin_y(&self, plate_index: usize) -> Option<Length> {
        self.plate(plate_index)?.well_origin_y
    }

    /// Set the origin offset Y of well A1.
    pub fn set_plate_well_origin_y(&mut self, origin: Length, plate_index: usize) {
        self.plate_mut(plate_index).well_origin_y = Some(origin);
    }

    /// Default display field index.
    pub fn plate_field_index(&self, plate_index: usize) -> Option<u32> {
        self.plate(plate_index)?.field_index
    }

    /// Set the default display field index.
    pub fn set_plate_field_index(&mut self, field_index: u32, plate_index: usize) {
        self.plate_mut(plate_index).field_index = Some(field_index);
    }

    /// Annotation linked to the plate at `annotation_ref_index`.
    pub fn plate_annotation_ref(
        &self,
        plate_index: usize,
        annotation_ref_index: usize,
    ) -> Option<&str> {
        self.plate(plate_index)?
            .annotation_refs
            .get(annotation_ref_index)
            .map(String::as_str)
    }

    /// Link an annotation to the plate.
    pub fn set_plate_annotation_ref(
        &mut self,
        annotation: &str,
        plate_index: usize,
        annotation_ref_index: usize,
    ) {
        let plate = self.plate_mut(plate_index);
        set_ref(&mut plate.annotation_refs, annotation_ref_index, annotation);
        let source = source_id(&plate.id, "Plate", plate_index);
        self.registry
            .add_reference(&source, annotation, "AnnotationRef");
    }

    /// Number of wells on the plate.
    pub fn well_count(&self, plate_index: usize) -> usize {
        self.plate(plate_index).map_or(0, |plate| plate.wells.len())
    }

    /// Number of acquisition passes over the plate.
    pub fn plate_acquisition_count(&self, plate_index: usize) -> usize {
        self.plate(plate_index)
            .map_or(0, |plate| plate.plate_acquisitions.len())
    }

    // -- Well -----------------------------------------------------------

    /// Well ID.
    pub fn well_id(&self, plate_index: usize, well_index: usize) -> Option<&str> {
        self.well(plate_index, well_index).map(|well| well.id.as_str())
    }

    /// Set the well ID and register it.
    pub fn set_well_id(&mut self, id: &str, plate_index: usize, well_index: usize) {
        self.well_mut(plate_index, well_index).id = id.to_string();
        self.registry.register(id, "Well");
    }

    /// Row position of the well.
    pub fn well_row(&self, plate_index: usize, well_index: usize) -> Option<u32> {
        self.well(plate_index, well_index).map(|well| well.row)
    }

    /// Set the row position.
    pub fn set_well_row(&mut self, row: u32, plate_index: usize, well_index: usize) {
        self.well_mut(plate_index, well_index).row = row;
    }

    /// Column position of the well.
    pub fn well_column(&self, plate_index: usize, well_index: usize) -> Option<u32> {
        self.well(plate_index, well_index).map(|well| well.column)
    }

    /// Set the column position.
    pub fn set_well_column(&mut self, column: u32, plate_index: usize, well_index: usize) {
        self.well_mut(plate_index, well_index).column = column;
    }

    /// External well identifier.
    pub fn well_external_identifier(
        &self,
        plate_index: usize,
        well_index: usize,
    ) -> Option<&str> {
        self.well(plate_index, well_index)?.external_identifier.as_deref()
    }

    /// Set the external well identifier.
    pub fn set_well_external_identifier(
        &mut self,
        identifier: impl Into<String>,
        plate_index: usize,
        well_index: usize,
    ) {
        self.well_mut(plate_index, well_index).external_identifier =
            Some(identifier.into());
    }

    /// Well type designation.
    pub fn well_type(&self, plate_index: usize, well_index: usize) -> Option<&str> {
        self.well(plate_index, well_index)?.well_type.as_deref()
    }

    /// Set the well type designation.
    pub fn set_well_type(
        &mut self,
        well_type: impl Into<String>,
        plate_index: usize,
        well_index: usize,
    ) {
        self.well_mut(plate_index, well_index).well_type = Some(well_type.into());
    }

    /// Display color of the well.
    pub fn well_color(&self, plate_index: usize, well_index: usize) -> Option<Color> {
        self.well(plate_index, well_index)?.color
    }

    /// Set the display color.
    pub fn set_well_color(&mut self, color: Color, plate_index: usize, well_index: usize) {
        self.well_mut(plate_index, well_index).color = Some(color);
    }

    /// Reagent applied to the well.
    pub fn well_reagent_ref(&self, plate_index: usize, well_index: usize) -> Option<&str> {
        self.well(plate_index, well_index)?.reagent_ref.as_deref()
    }

    /// Link a reagent to the well.
    pub fn set_well_reagent_ref(
        &mut self,
        reagent: &str,
        plate_index: usize,
        well_index: usize,
    ) {
        let well = self.well_mut(plate_index, well_index);
        well.reagent_ref = Some(reagent.to_string());
        let source = source_id(&well.id, "Well", format!("{plate_index}:{well_index}"));
        self.registry.add_reference(&source, reagent, "ReagentRef");
    }

    /// Number of fields imaged in the well.
    pub fn well_sample_count(&self, plate_index: usize, well_index: usize) -> usize {
        self.well(plate_index, well_index)
            .map_or(0, |well| well.well_samples.len())
    }

    // -- WellSample -----------------------------------------------------

    /// Well sample ID.
    pub fn well_sample_id(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<&str> {
        self.well_sample(plate_index, well_index, sample_index)
            .map(|sample| sample.id.as_str())
    }

    /// Set the well sample ID and register it.
    pub fn set_well_sample_id(
        &mut self,
        id: &str,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        self.well_sample_mut(plate_index, well_index, sample_index).id = id.to_string();
        self.registry.register(id, "WellSample");
    }

    /// Acquisition-sequence index of the field.
    pub fn well_sample_index(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<u32> {
        self.well_sample(plate_index, well_index, sample_index)?.index
    }

    /// Set the acquisition-sequence index.
    pub fn set_well_sample_index(
        &mut self,
        index: u32,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        self.well_sample_mut(plate_index, well_index, sample_index).index = Some(index);
    }

    /// Stage position X of the field.
    pub fn well_sample_position_x(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<Length> {
        self.well_sample(plate_index, well_index, sample_index)?.position_x
    }

    /// Set the stage position X.
    pub fn set_well_sample_position_x(
        &mut self,
        x: Length,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        self.well_sample_mut(plate_index, well_index, sample_index).position_x = Some(x);
    }

    /// Stage position Y of the field.
    pub fn well_sample_position_y(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<Length> {
        self.well_sample(plate_index, well_index, sample_index)?.position_y
    }

    /// Set the stage position Y.
    pub fn set_well_sample_position_y(
        &mut self,
        y: Length,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        self.well_sample_mut(plate_index, well_index, sample_index).position_y = Some(y);
    }

    /// Timestamp of the field acquisition.
    pub fn well_sample_timepoint(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<DateTime<Utc>> {
        self.well_sample(plate_index, well_index, sample_index)?.timepoint
    }

    /// Set the field acquisition timestamp.
    pub fn set_well_sample_timepoint(
        &mut self,
        timepoint: DateTime<Utc>,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        self.well_sample_mut(plate_index, well_index, sample_index).timepoint =
            Some(timepoint);
    }

    /// Image acquired at the field.
    pub fn well_sample_image_ref(
        &self,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) -> Option<&str> {
        self.well_sample(plate_index, well_index, sample_index)?
            .image_ref
            .as_deref()
    }

    /// Link the field to its image.
    pub fn set_well_sample_image_ref(
        &mut self,
        image: &str,
        plate_index: usize,
        well_index: usize,
        sample_index: usize,
    ) {
        let sample = self.well_sample_mut(plate_index, well_index, sample_index);
        sample.image_ref = Some(image.to_string());
        let source = source_id(
            &sample.id,
            "WellSample",
            format!("{plate_index}:{well_index}:{sample_index}"),
        );
        self.registry.add_reference(&source, image, "ImageRef");
    }

    // -- PlateAcquisition -----------------------------------------------

    /// Plate acquisition ID.
    pub fn plate_acquisition_id(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<&str> {
        self.plate_acquisition(plate_index, acquisition_index)
            .map(|acquisition| acquisition.id.as_str())
    }

    /// Set the plate acquisition ID and register it.
    pub fn set_plate_acquisition_id(
        &mut self,
        id: &str,
        plate_index: usize,
        acquisition_index: usize,
    ) {
        self.plate_acquisition_mut(plate_index, acquisition_index).id = id.to_string();
        self.registry.register(id, "PlateAcquisition");
    }

    /// Plate acquisition name.
    pub fn plate_acquisition_name(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<&str> {
        self.plate_acquisition(plate_index, acquisition_index)?.name.as_deref()
    }

    /// Set the plate acquisition name.
    pub fn set_plate_acquisition_name(
        &mut self,
        name: impl Into<String>,
        plate_index: usize,
        acquisition_index: usize,
    ) {
        self.plate_acquisition_mut(plate_index, acquisition_index).name = Some(name.into());
    }

    /// Start time of the acquisition pass.
    pub fn plate_acquisition_start_time(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<DateTime<Utc>> {
        self.plate_acquisition(plate_index, acquisition_index)?.start_time
    }

    /// Set the start time.
    pub fn set_plate_acquisition_start_time(
        &mut self,
        start: DateTime<Utc>,
        plate_index: usize,
        acquisition_index: usize,
    ) {
        self.plate_acquisition_mut(plate_index, acquisition_index).start_time = Some(start);
    }

    /// End time of the acquisition pass.
    pub fn plate_acquisition_end_time(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<DateTime<Utc>> {
        self.plate_acquisition(plate_index, acquisition_index)?.end_time
    }

    /// Set the end time.
    pub fn set_plate_acquisition_end_time(
        &mut self,
        end: DateTime<Utc>,
        plate_index: usize,
        acquisition_index: usize,
    ) {
        self.plate_acquisition_mut(plate_index, acquisition_index).end_time = Some(end);
    }

    /// Maximum number of fields per well in the pass.
    pub fn plate_acquisition_maximum_field_count(
        &self,
        plate_index: usize,
        acquisition_index: usize,
    ) -> Option<u32> {
        self.plate_acquisition(plate_index, acquisition_index)?.maximum_field_count
    }

    /// Set the maximum field count.
    pub fn set_plate_acquisition_maximum_field_count(
        &mut self,
        count: u32,
        plate_index: usize,
        acquisition_index: usize,
    ) {
        self.plate_acquisition_mut(plate_index, acquisition_index).maximum_field_count =
            Some(count);
    }

    /// Well sample linked to the pass at `ref_index`.
    pub fn plate_acquisition_well_sample_ref(
        &self,
        plate_index: usize,
        acquisition_index: usize,
        ref_index: usize,
    ) -> Option<&str> {
        self.plate_acquisition(plate_index, acquisition_index)?
            .well_sample_refs
            .get(ref_index)
            .map(String::as_str)
    }

    /// Link a well sample to the acquisition pass.
    pub fn set_plate_acquisition_well_sample_ref(
        &mut self,
        well_sample: &str,
        plate_index: usize,
        acquisition_index: usize,
        ref_index: usize,
    ) {
        let acquisition = self.plate_acquisition_mut(plate_index, acquisition_index);
        set_ref(&mut acquisition.well_sample_refs, ref_index, well_sample);
        let source = source_id(
            &acquisition.id,
            "PlateAcquisition",
            format!("{plate_index}:{acquisition_index}"),
        );
        self.registry
            .add_reference(&source, well_sample, "WellSampleRef");
    }

    // -- Screen ---------------------------------------------------------

    /// Screen ID.
    pub fn screen_id(&self, screen_index: usize) -> Option<&str> {
        self.screen(screen_index).map(|screen| screen.id.as_str())
    }

    /// Set the screen ID and register it.
    pub fn set_screen_id(&mut self, id: &str, screen_index: usize) {
        self.screen_mut(screen_index).id = id.to_string();
        self.registry.register(id, "Screen");
    }

    /// Screen name.
    pub fn screen_name(&self, screen_index: usize) -> Option<&str> {
        self.screen(screen_index)?.name.as_deref()
    }

    /// Set the screen name.
    pub fn set_screen_name(&mut self, name: impl Into<String>, screen_index: usize) {
        self.screen_mut(screen_index).name = Some(name.into());
    }

    /// Screen description.
    pub fn screen_description(&self, screen_index: usize) -> Option<&str> {
        self.screen(screen_index)?.description.as_deref()
    }

    /// Set the screen description.
    pub fn set_screen_description(
        &mut self,
        description: impl Into<String>,
        screen_index: usize,
    ) {
        self.screen_mut(screen_index).description = Some(description.into());
    }

    /// Protocol identifier.
    pub fn screen_protocol_identifier(&self, screen_index: usize) -> Option<&str> {
        self.screen(screen_index)?.protocol_identifier.as_deref()
    }

    /// Set the protocol identifier.
    pub fn set_screen_protocol_identifier(
        &mut self,
        identifier: impl Into<String>,
        screen_index: usize,
    ) {
        self.screen_mut(screen_index).protocol_identifier = Some(identifier.into());
    }

    /// Protocol description.
    pub fn screen_protocol_description(&self, screen_index: usize) -> Option<&str> {
        self.screen(screen_index)?.protocol_description.as_deref()
    }

    /// Set the protocol description.
    pub fn set_screen_protocol_description(
        &mut self,
        description: impl Into<String>,
        screen_index: usize,
    ) {
        self.screen_mut(screen_index).protocol_description = Some(description.into());
    }

    /// Plate linked to the screen at `plate_ref_index`.
    pub fn screen_plate_ref(&self, screen_index: usize, plate_ref_index: usize) -> Option<&str> {
        self.screen(screen_index)?
            .plate_refs
            .get(plate_ref_index)
            .map(String::as_str)
    }

    /// Link a plate to the screen.
    pub fn set_screen_plate_ref(
        &mut self,
        plate: &str,
        screen_index: usize,
        plate_ref_index: usize,
    ) {
        let screen = self.screen_mut(screen_index);
        set_ref(&mut screen.plate_refs, plate_ref_index, plate);
        let source = source_id(&screen.id, "Screen", screen_index);
        self.registry.add_reference(&source, plate, "PlateRef");
    }

    /// Number of plates linked to the screen.
    pub fn screen_plate_ref_count(&self, screen_index: usize) -> usize {
        self.screen(screen_index)
            .map_or(0, |screen| screen.plate_refs.len())
    }

    /// Number of reagents in the screen.
    pub fn reagent_count(&self, screen_index: usize) -> usize {
        self.screen(screen_index)
            .map_or(0, |screen| screen.reagents.len())
    }

    // -- Reagent --------------------------------------------------------

    /// Reagent ID.
    pub fn reagent_id(&self, screen_index: usize, reagent_index: usize) -> Option<&str> {
        self.reagent(screen_index, reagent_index)
            .map(|reagent| reagent.id.as_str())
    }

    /// Set the reagent ID and register it.
    pub fn set_reagent_id(&mut self, id: &str, screen_index: usize, reagent_index: usize) {
        self.reagent_mut(screen_index, reagent_index).id = id.to_string();
        self.registry.register(id, "Reagent");
    }

    /// Reagent name.
    pub fn reagent_name(&self, screen_index: usize, reagent_index: usize) -> Option<&str> {
        self.reagent(screen_index, reagent_index)?.name.as_deref()
    }

    /// Set the reagent name.
    pub fn set_reagent_name(
        &mut self,
        name: impl Into<String>,
        screen_index: usize,
        reagent_index: usize,
    ) {
        self.reagent_mut(screen_index, reagent_index).name = Some(name.into());
    }

    /// Reagent catalogue identifier.
    pub fn reagent_reagent_identifier(
        &self,
        screen_index: usize,
        reagent_index: usize,
    ) -> Option<&str> {
        self.reagent(screen_index, reagent_index)?
            .reagent_identifier
            .as_deref()
    }

    /// Set the reagent catalogue identifier.
    pub fn set_reagent_reagent_identifier(
        &mut self,
        identifier: impl Into<String>,
        screen_index: usize,
        reagent_index: usize,
    ) {
        self.reagent_mut(screen_index, reagent_index).reagent_identifier =
            Some(identifier.into());
    }
}
