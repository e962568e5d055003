//! The metadata store.
//!
//! [`OmeXmlMetadata`] owns a document root and an [`ObjectRegistry`] and
//! exposes a uniform accessor surface over the tree. Every accessor follows
//! one of four templates:
//!
//! * **set scalar**: extends ancestor collections with empty nodes down to
//!   the addressed index, then writes the field;
//! * **get scalar**: pure navigation, `None` when any ancestor is absent;
//! * **count children**: collection length, 0 through missing ancestors;
//! * **set reference**: writes the target ID into the model and queues it
//!   in the registry for resolution.
//!
//! Getters never create objects; setters never fail. ID setters also
//! register the object so [`OmeXmlMetadata::resolve_references`] can check
//! the document's link graph.

mod annotation;
mod image;
mod instrument;
mod organization;
mod plate;
mod roi;

#[cfg(test)]
mod tests;

use std::fmt::Display;

use log::debug;

use crate::graph::{ObjectRegistry, Resolution};
use crate::model::{LightSourceKind, Ome};
use crate::primitives::lsid;
use crate::xml::OmeXmlError;

/// Extend `vec` with default nodes so that `index` is addressable, and
/// return the node at `index`. Existing nodes are never replaced.
pub(crate) fn vivify<T: Default>(vec: &mut Vec<T>, index: usize) -> &mut T {
    if vec.len() <= index {
        vec.resize_with(index + 1, T::default);
    }
    &mut vec[index]
}

/// Extend a reference list with empty IDs so that `index` is addressable,
/// then write `id` there.
pub(crate) fn set_ref(refs: &mut Vec<String>, index: usize, id: &str) {
    *vivify(refs, index) = id.to_string();
}

/// Source ID used when queuing a reference: the object's own ID when set,
/// its canonical positional ID otherwise.
pub(crate) fn source_id(id: &str, kind: &str, index: impl Display) -> String {
    if id.is_empty() {
        lsid(kind, index)
    } else {
        id.to_string()
    }
}

/// An in-memory OME document with uniform accessors over its tree.
#[derive(Debug, Clone, Default)]
pub struct OmeXmlMetadata {
    pub(crate) root: Ome,
    pub(crate) registry: ObjectRegistry,
}

impl OmeXmlMetadata {
    /// Create a store holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document root, indexing its IDs and references.
    pub fn from_root(root: Ome) -> Self {
        let mut store = Self {
            root,
            registry: ObjectRegistry::new(),
        };
        store.reindex();
        store
    }

    /// The document root.
    pub fn root(&self) -> &Ome {
        &self.root
    }

    /// Mutable access to the document root.
    ///
    /// Direct edits bypass the registry; call [`Self::reindex`] afterwards
    /// if reference resolution should see them.
    pub fn root_mut(&mut self) -> &mut Ome {
        &mut self.root
    }

    /// Replace the document root, discarding the old one and rebuilding the
    /// registry from the new tree.
    pub fn set_root(&mut self, root: Ome) {
        self.root = root;
        self.reindex();
    }

    /// Consume the store, returning the document root.
    pub fn into_root(self) -> Ome {
        self.root
    }

    /// Reset to an empty document.
    pub fn create_root(&mut self) {
        self.root = Ome::new();
        self.registry.clear();
    }

    /// The ID registry behind this store.
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Check every queued reference against the registered IDs.
    pub fn resolve_references(&self) -> Resolution {
        self.registry.resolve()
    }

    /// Rebuild the registry by walking the whole tree.
    pub fn reindex(&mut self) {
        self.registry.clear();
        index_document(&self.root, &mut self.registry);
        debug!(
            "indexed document: {} IDs, {} references",
            self.registry.len(),
            self.registry.reference_count()
        );
    }

    /// Serialize the document as OME-XML.
    pub fn to_xml(&self) -> Result<String, OmeXmlError> {
        crate::xml::write_document(&self.root)
    }

    /// Build a store by parsing an OME-XML document.
    pub fn from_xml(xml: &str) -> Result<Self, OmeXmlError> {
        Ok(Self::from_root(crate::xml::read_document_str(xml)?))
    }

    /// Replace the root with a parsed OME-XML document.
    ///
    /// A document whose root element is not `OME` is rejected and the
    /// current root is left untouched.
    pub fn set_root_from_xml(&mut self, xml: &str) -> Result<(), OmeXmlError> {
        self.set_root(crate::xml::read_document_str(xml)?);
        Ok(())
    }

    /// Serialize the document to JSON for inspection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.root)
    }

    /// Build a store from a JSON dump produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_root(serde_json::from_str(json)?))
    }

    // -- document attributes --------------------------------------------

    /// Document UUID.
    pub fn uuid(&self) -> Option<&str> {
        self.root.uuid.as_deref()
    }

    /// Set the document UUID.
    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        self.root.uuid = Some(uuid.into());
    }

    /// Name of the software that wrote the document.
    pub fn creator(&self) -> Option<&str> {
        self.root.creator.as_deref()
    }

    /// Set the creator string.
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.root.creator = Some(creator.into());
    }

    // -- top-level counts -----------------------------------------------

    /// Number of images.
    pub fn image_count(&self) -> usize {
        self.root.images.len()
    }

    /// Number of instruments.
    pub fn instrument_count(&self) -> usize {
        self.root.instruments.len()
    }

    /// Number of ROIs.
    pub fn roi_count(&self) -> usize {
        self.root.rois.len()
    }

    /// Number of plates.
    pub fn plate_count(&self) -> usize {
        self.root.plates.len()
    }

    /// Number of screens.
    pub fn screen_count(&self) -> usize {
        self.root.screens.len()
    }

    /// Number of projects.
    pub fn project_count(&self) -> usize {
        self.root.projects.len()
    }

    /// Number of datasets.
    pub fn dataset_count(&self) -> usize {
        self.root.datasets.len()
    }

    /// Number of experimenters.
    pub fn experimenter_count(&self) -> usize {
        self.root.experimenters.len()
    }

    /// Number of experimenter groups.
    pub fn experimenter_group_count(&self) -> usize {
        self.root.experimenter_groups.len()
    }

    /// Number of experiments.
    pub fn experiment_count(&self) -> usize {
        self.root.experiments.len()
    }

    /// Number of structured annotations.
    pub fn annotation_count(&self) -> usize {
        self.root.structured_annotations.len()
    }
}

/// Walk a document tree, registering every ID-bearing object and queuing
/// every reference.
fn index_document(root: &Ome, registry: &mut ObjectRegistry) {
    for project in &root.projects {
        registry.register(&project.id, "Project");
        if let Some(target) = &project.experimenter_ref {
            registry.add_reference(&project.id, target, "ExperimenterRef");
        }
        if let Some(target) = &project.experimenter_group_ref {
            registry.add_reference(&project.id, target, "ExperimenterGroupRef");
        }
        for target in &project.dataset_refs {
            registry.add_reference(&project.id, target, "DatasetRef");
        }
        for target in &project.annotation_refs {
            registry.add_reference(&project.id, target, "AnnotationRef");
        }
    }

    for dataset in &root.datasets {
        registry.register(&dataset.id, "Dataset");
        if let Some(target) = &dataset.experimenter_ref {
            registry.add_reference(&dataset.id, target, "ExperimenterRef");
        }
        if let Some(target) = &dataset.experimenter_group_ref {
            registry.add_reference(&dataset.id, target, "ExperimenterGroupRef");
        }
        for target in &dataset.image_refs {
            registry.add_reference(&dataset.id, target, "ImageRef");
        }
        for target in &dataset.annotation_refs {
            registry.add_reference(&dataset.id, target, "AnnotationRef");
        }
    }

    for experiment in &root.experiments {
        registry.register(&experiment.id, "Experiment");
        if let Some(target) = &experiment.experimenter_ref {
            registry.add_reference(&experiment.id, target, "ExperimenterRef");
        }
        for manipulation in &experiment.microbeam_manipulations {
            registry.register(&manipulation.id, "MicrobeamManipulation");
            if let Some(target) = &manipulation.experimenter_ref {
                registry.add_reference(&manipulation.id, target, "ExperimenterRef");
            }
            for target in &manipulation.roi_refs {
                registry.add_reference(&manipulation.id, target, "ROIRef");
            }
        }
    }

    for experimenter in &root.experimenters {
        registry.register(&experimenter.id, "Experimenter");
        for target in &experimenter.annotation_refs {
            registry.add_reference(&experimenter.id, target, "AnnotationRef");
        }
    }

    for group in &root.experimenter_groups {
        registry.register(&group.id, "ExperimenterGroup");
        for target in &group.experimenter_refs {
            registry.add_reference(&group.id, target, "ExperimenterRef");
        }
        for target in &group.leaders {
            registry.add_reference(&group.id, target, "Leader");
        }
        for target in &group.annotation_refs {
            registry.add_reference(&group.id, target, "AnnotationRef");
        }
    }

    for instrument in &root.instruments {
        registry.register(&instrument.id, "Instrument");
        for light_source in &instrument.light_sources {
            registry.register(&light_source.id, "LightSource");
            if let LightSourceKind::Laser {
                pump_ref: Some(target),
                ..
            } = &light_source.kind
            {
                registry.add_reference(&light_source.id, target, "Pump");
            }
        }
        for detector in &instrument.detectors {
            registry.register(&detector.id, "Detector");
        }
        for objective in &instrument.objectives {
            registry.register(&objective.id, "Objective");
        }
        for filter in &instrument.filters {
            registry.register(&filter.id, "Filter");
        }
        for filter_set in &instrument.filter_sets {
            registry.register(&filter_set.id, "FilterSet");
            for target in &filter_set.excitation_filter_refs {
                registry.add_reference(&filter_set.id, target, "ExcitationFilterRef");
            }
            for target in &filter_set.emission_filter_refs {
                registry.add_reference(&filter_set.id, target, "EmissionFilterRef");
            }
            if let Some(target) = &filter_set.dichroic_ref {
                registry.add_reference(&filter_set.id, target, "DichroicRef");
            }
        }
        for dichroic in &instrument.dichroics {
            registry.register(&dichroic.id, "Dichroic");
        }
        for target in &instrument.annotation_refs {
            registry.add_reference(&instrument.id, target, "AnnotationRef");
        }
    }

    for image in &root.images {
        registry.register(&image.id, "Image");
        registry.register(&image.pixels.id, "Pixels");
        if let Some(target) = &image.instrument_ref {
            registry.add_reference(&image.id, target, "InstrumentRef");
        }
        if let Some(target) = &image.experiment_ref {
            registry.add_reference(&image.id, target, "ExperimentRef");
        }
        if let Some(target) = &image.experimenter_ref {
            registry.add_reference(&image.id, target, "ExperimenterRef");
        }
        if let Some(target) = &image.experimenter_group_ref {
            registry.add_reference(&image.id, target, "ExperimenterGroupRef");
        }
        if let Some(settings) = &image.objective_settings {
            registry.add_reference(&image.id, &settings.id, "ObjectiveSettings");
        }
        for channel in &image.pixels.channels {
            registry.register(&channel.id, "Channel");
            if let Some(settings) = &channel.light_source_settings {
                registry.add_reference(&channel.id, &settings.id, "LightSourceSettings");
            }
            if let Some(settings) = &channel.detector_settings {
                registry.add_reference(&channel.id, &settings.id, "DetectorSettings");
            }
            if let Some(light_path) = &channel.light_path {
                for target in &light_path.excitation_filter_refs {
                    registry.add_reference(&channel.id, target, "ExcitationFilterRef");
                }
                for target in &light_path.emission_filter_refs {
                    registry.add_reference(&channel.id, target, "EmissionFilterRef");
                }
                if let Some(target) = &light_path.dichroic_ref {
                    registry.add_reference(&channel.id, target, "DichroicRef");
                }
            }
            for target in &channel.annotation_refs {
                registry.add_reference(&channel.id, target, "AnnotationRef");
            }
        }
        for plane in &image.pixels.planes {
            for target in &plane.annotation_refs {
                registry.add_reference(&image.pixels.id, target, "AnnotationRef");
            }
        }
        for target in &image.roi_refs {
            registry.add_reference(&image.id, target, "ROIRef");
        }
        for target in &image.microbeam_manipulation_refs {
            registry.add_reference(&image.id, target, "MicrobeamManipulationRef");
        }
        for target in &image.annotation_refs {
            registry.add_reference(&image.id, target, "AnnotationRef");
        }
    }

    for plate in &root.plates {
        registry.register(&plate.id, "Plate");
        for well in &plate.wells {
            registry.register(&well.id, "Well");
            if let Some(target) = &well.reagent_ref {
                registry.add_reference(&well.id, target, "ReagentRef");
            }
            for sample in &well.well_samples {
                registry.register(&sample.id, "WellSample");
                if let Some(target) = &sample.image_ref {
                    registry.add_reference(&sample.id, target, "ImageRef");
                }
            }
            for target in &well.annotation_refs {
                registry.add_reference(&well.id, target, "AnnotationRef");
            }
        }
        for acquisition in &plate.plate_acquisitions {
            registry.register(&acquisition.id, "PlateAcquisition");
            for target in &acquisition.well_sample_refs {
                registry.add_reference(&acquisition.id, target, "WellSampleRef");
            }
            for target in &acquisition.annotation_refs {
                registry.add_reference(&acquisition.id, target, "AnnotationRef");
            }
        }
        for target in &plate.annotation_refs {
            registry.add_reference(&plate.id, target, "AnnotationRef");
        }
    }

    for screen in &root.screens {
        registry.register(&screen.id, "Screen");
        for reagent in &screen.reagents {
            registry.register(&reagent.id, "Reagent");
            for target in &reagent.annotation_refs {
                registry.add_reference(&reagent.id, target, "AnnotationRef");
            }
        }
        for target in &screen.plate_refs {
            registry.add_reference(&screen.id, target, "PlateRef");
        }
        for target in &screen.annotation_refs {
            registry.add_reference(&screen.id, target, "AnnotationRef");
        }
    }

    for roi in &root.rois {
        registry.register(&roi.id, "ROI");
        for shape in &roi.union {
            registry.register(&shape.id, "Shape");
            for target in &shape.annotation_refs {
                registry.add_reference(&shape.id, target, "AnnotationRef");
            }
        }
        for target in &roi.annotation_refs {
            registry.add_reference(&roi.id, target, "AnnotationRef");
        }
    }

    for annotation in &root.structured_annotations.annotations {
        registry.register(&annotation.id, "Annotation");
        for target in &annotation.annotation_refs {
            registry.add_reference(&annotation.id, target, "AnnotationRef");
        }
    }
}
