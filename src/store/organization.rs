//! Accessors for projects, datasets, experimenters, experimenter groups,
//! experiments, and microbeam manipulations.

use super::{set_ref, source_id, vivify, OmeXmlMetadata};
use crate::model::{
    Dataset, Experiment, Experimenter, ExperimenterGroup, MicrobeamManipulation, Project,
};
use crate::primitives::ExperimentType;

impl OmeXmlMetadata {
    // -- navigation -----------------------------------------------------

    fn project(&self, project_index: usize) -> Option<&Project> {
        self.root.projects.get(project_index)
    }

    fn project_mut(&mut self, project_index: usize) -> &mut Project {
        vivify(&mut self.root.projects, project_index)
    }

    fn dataset(&self, dataset_index: usize) -> Option<&Dataset> {
        self.root.datasets.get(dataset_index)
    }

    fn dataset_mut(&mut self, dataset_index: usize) -> &mut Dataset {
        vivify(&mut self.root.datasets, dataset_index)
    }

    fn experimenter(&self, experimenter_index: usize) -> Option<&Experimenter> {
        self.root.experimenters.get(experimenter_index)
    }

    fn experimenter_mut(&mut self, experimenter_index: usize) -> &mut Experimenter {
        vivify(&mut self.root.experimenters, experimenter_index)
    }

    fn experimenter_group(&self, group_index: usize) -> Option<&ExperimenterGroup> {
        self.root.experimenter_groups.get(group_index)
    }

    fn experimenter_group_mut(&mut self, group_index: usize) -> &mut ExperimenterGroup {
        vivify(&mut self.root.experimenter_groups, group_index)
    }

    fn experiment(&self, experiment_index: usize) -> Option<&Experiment> {
        self.root.experiments.get(experiment_index)
    }

    fn experiment_mut(&mut self, experiment_index: usize) -> &mut Experiment {
        vivify(&mut self.root.experiments, experiment_index)
    }

    fn microbeam_manipulation(
        &self,
        experiment_index: usize,
        manipulation_index: usize,
    ) -> Option<&MicrobeamManipulation> {
        self.experiment(experiment_index)?
            .microbeam_manipulations
            .get(manipulation_index)
    }

    fn microbeam_manipulation_mut(
        &mut self,
        experiment_index: usize,
        manipulation_index: usize,
    ) -> &mut MicrobeamManipulation {
        vivify(
            &mut self.experiment_mut(experiment_index).microbeam_manipulations,
            manipulation_index,
        )
    }

    // -- Project --------------------------------------------------------

    /// Project ID.
    pub fn project_id(&self, project_index: usize) -> Option<&str> {
        self.project(project_index).map(|project| project.id.as_str())
    }

    /// Set the project ID and register it.
    pub fn set_project_id(&mut self, id: &str, project_index: usize) {
        self.project_mut(project_index).id = id.to_string();
        self.registry.register(id, "Project");
    }

    /// Project name.
    pub fn project_name(&self, project_index: usize) -> Option<&str> {
        self.project(project_index)?.name.as_deref()
    }

    /// Set the project name.
    pub fn set_project_name(&mut self, name: impl Into<String>, project_index: usize) {
        self.project_mut(project_index).name = Some(name.into());
    }

    /// Project description.
    pub fn project_description(&self, project_index: usize) -> Option<&str> {
        self.project(project_index)?.description.as_deref()
    }

    /// Set the project description.
    pub fn set_project_description(
        &mut self,
        description: impl Into<String>,
        project_index: usize,
    ) {
        self.project_mut(project_index).description = Some(description.into());
    }

    /// Owning experimenter of the project.
    pub fn project_experimenter_ref(&self, project_index: usize) -> Option<&str> {
        self.project(project_index)?.experimenter_ref.as_deref()
    }

    /// Link the project to its owning experimenter.
    pub fn set_project_experimenter_ref(&mut self, experimenter: &str, project_index: usize) {
        let project = self.project_mut(project_index);
        project.experimenter_ref = Some(experimenter.to_string());
        let source = source_id(&project.id, "Project", project_index);
        self.registry
            .add_reference(&source, experimenter, "ExperimenterRef");
    }

    /// Dataset linked to the project at `dataset_ref_index`.
    pub fn project_dataset_ref(
        &self,
        project_index: usize,
        dataset_ref_index: usize,
    ) -> Option<&str> {
        self.project(project_index)?
            .dataset_refs
            .get(dataset_ref_index)
            .map(String::as_str)
    }

    /// Link a dataset to the project.
    pub fn set_project_dataset_ref(
        &mut self,
        dataset: &str,
        project_index: usize,
        dataset_ref_index: usize,
    ) {
        let project = self.project_mut(project_index);
        set_ref(&mut project.dataset_refs, dataset_ref_index, dataset);
        let source = source_id(&project.id, "Project", project_index);
        self.registry.add_reference(&source, dataset, "DatasetRef");
    }

    /// Number of datasets linked to the project.
    pub fn project_dataset_ref_count(&self, project_index: usize) -> usize {
        self.project(project_index)
            .map_or(0, |project| project.dataset_refs.len())
    }

    // -- Dataset --------------------------------------------------------

    /// Dataset ID.
    pub fn dataset_id(&self, dataset_index: usize) -> Option<&str> {
        self.dataset(dataset_index).map(|dataset| dataset.id.as_str())
    }

    /// Set the dataset ID and register it.
    pub fn set_dataset_id(&mut self, id: &str, dataset_index: usize) {
        self.dataset_mut(dataset_index).id = id.to_string();
        self.registry.register(id, "Dataset");
    }

    /// Dataset name.
    pub fn dataset_name(&self, dataset_index: usize) -> Option<&str> {
        self.dataset(dataset_index)?.name.as_deref()
    }

    /// Set the dataset name.
    pub fn set_dataset_name(&mut self, name: impl Into<String>, dataset_index: usize) {
        self.dataset_mut(dataset_index).name = Some(name.into());
    }

    /// Dataset description.
    pub fn dataset_description(&self, dataset_index: usize) -> Option<&str> {
        self.dataset(dataset_index)?.description.as_deref()
    }

    /// Set the dataset description.
    pub fn set_dataset_description(
        &mut self,
        description: impl Into<String>,
        dataset_index: usize,
    ) {
        self.dataset_mut(dataset_index).description = Some(description.into());
    }

    /// Image linked to the dataset at `image_ref_index`.
    pub fn dataset_image_ref(
        &self,
        dataset_index: usize,
        image_ref_index: usize,
    ) -> Option<&str> {
        self.dataset(dataset_index)?
            .image_refs
            .get(image_ref_index)
            .map(String::as_str)
    }

    /// Link an image to the dataset.
    pub fn set_dataset_image_ref(
        &mut self,
        image: &str,
        dataset_index: usize,
        image_ref_index: usize,
    ) {
        let dataset = self.dataset_mut(dataset_index);
        set_ref(&mut dataset.image_refs, image_ref_index, image);
        let source = source_id(&dataset.id, "Dataset", dataset_index);
        self.registry.add_reference(&source, image, "ImageRef");
    }

    /// Number of images linked to the dataset.
    pub fn dataset_image_ref_count(&self, dataset_index: usize) -> usize {
        self.dataset(dataset_index)
            .map_or(0, |dataset| dataset.image_refs.len())
    }

    // -- Experimenter ---------------------------------------------------

    /// Experimenter ID.
    pub fn experimenter_id(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)
            .map(|experimenter| experimenter.id.as_str())
    }

    /// Set the experimenter ID and register it.
    pub fn set_experimenter_id(&mut self, id: &str, experimenter_index: usize) {
        self.experimenter_mut(experimenter_index).id = id.to_string();
        self.registry.register(id, "Experimenter");
    }

    /// Given name.
    pub fn experimenter_first_name(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)?.first_name.as_deref()
    }

    /// Set the given name.
    pub fn set_experimenter_first_name(
        &mut self,
        first_name: impl Into<String>,
        experimenter_index: usize,
    ) {
        self.experimenter_mut(experimenter_index).first_name = Some(first_name.into());
    }

    /// Family name.
    pub fn experimenter_last_name(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)?.last_name.as_deref()
    }

    /// Set the family name.
    pub fn set_experimenter_last_name(
        &mut self,
        last_name: impl Into<String>,
        experimenter_index: usize,
    ) {
        self.experimenter_mut(experimenter_index).last_name = Some(last_name.into());
    }

    /// Email address.
    pub fn experimenter_email(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)?.email.as_deref()
    }

    /// Set the email address.
    pub fn set_experimenter_email(
        &mut self,
        email: impl Into<String>,
        experimenter_index: usize,
    ) {
        self.experimenter_mut(experimenter_index).email = Some(email.into());
    }

    /// Institution affiliation.
    pub fn experimenter_institution(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)?.institution.as_deref()
    }

    /// Set the institution affiliation.
    pub fn set_experimenter_institution(
        &mut self,
        institution: impl Into<String>,
        experimenter_index: usize,
    ) {
        self.experimenter_mut(experimenter_index).institution = Some(institution.into());
    }

    /// Login name.
    pub fn experimenter_user_name(&self, experimenter_index: usize) -> Option<&str> {
        self.experimenter(experimenter_index)?.user_name.as_deref()
    }

    /// Set the login name.
    pub fn set_experimenter_user_name(
        &mut self,
        user_name: impl Into<String>,
        experimenter_index: usize,
    ) {
        self.experimenter_mut(experimenter_index).user_name = Some(user_name.into());
    }

    // -- ExperimenterGroup ----------------------------------------------

    /// Experimenter group ID.
    pub fn experimenter_group_id(&self, group_index: usize) -> Option<&str> {
        self.experimenter_group(group_index).map(|group| group.id.as_str())
    }

    /// Set the experimenter group ID and register it.
    pub fn set_experimenter_group_id(&mut self, id: &str, group_index: usize) {
        self.experimenter_group_mut(group_index).id = id.to_string();
        self.registry.register(id, "ExperimenterGroup");
    }

    /// Group name.
    pub fn experimenter_group_name(&self, group_index: usize) -> Option<&str> {
        self.experimenter_group(group_index)?.name.as_deref()
    }

    /// Set the group name.
    pub fn set_experimenter_group_name(
        &mut self,
        name: impl Into<String>,
        group_index: usize,
    ) {
        self.experimenter_group_mut(group_index).name = Some(name.into());
    }

    /// Member linked to the group at `ref_index`.
    pub fn experimenter_group_experimenter_ref(
        &self,
        group_index: usize,
        ref_index: usize,
    ) -> Option<&str> {
        self.experimenter_group(group_index)?
            .experimenter_refs
            .get(ref_index)
            .map(String::as_str)
    }

    /// Link a member to the group.
    pub fn set_experimenter_group_experimenter_ref(
        &mut self,
        experimenter: &str,
        group_index: usize,
        ref_index: usize,
    ) {
        let group = self.experimenter_group_mut(group_index);
        set_ref(&mut group.experimenter_refs, ref_index, experimenter);
        let source = source_id(&group.id, "ExperimenterGroup", group_index);
        self.registry
            .add_reference(&source, experimenter, "ExperimenterRef");
    }

    /// Leader linked to the group at `leader_index`.
    pub fn experimenter_group_leader(
        &self,
        group_index: usize,
        leader_index: usize,
    ) -> Option<&str> {
        self.experimenter_group(group_index)?
            .leaders
            .get(leader_index)
            .map(String::as_str)
    }

    /// Link a leader to the group.
    pub fn set_experimenter_group_leader(
        &mut self,
        leader: &str,
        group_index: usize,
        leader_index: usize,
    ) {
        let group = self.experimenter_group_mut(group_index);
        set_ref(&mut group.leaders, leader_index, leader);
        let source = source_id(&group.id, "ExperimenterGroup", group_index);
        self.registry.add_reference(&source, leader, "Leader");
    }

    // -- Experiment -----------------------------------------------------

    /// Experiment ID.
    pub fn experiment_id(&self, experiment_index: usize) -> Option<&str> {
        self.experiment(experiment_index)
            .map(|experiment| experiment.id.as_str())
    }

    /// Set the experiment ID and register it.
    pub fn set_experiment_id(&mut self, id: &str, experiment_index: usize) {
        self.experiment_mut(experiment_index).id = id.to_string();
        self.registry.register(id, "Experiment");
    }

    /// Experiment kind at `type_index`.
    pub fn experiment_type(
        &self,
        experiment_index: usize,
        type_index: usize,
    ) -> Option<ExperimentType> {
        self.experiment(experiment_index)?
            .experiment_types
            .get(type_index)
            .copied()
    }

    /// Add an experiment kind.
    pub fn add_experiment_type(
        &mut self,
        experiment_type: ExperimentType,
        experiment_index: usize,
    ) {
        self.experiment_mut(experiment_index)
            .experiment_types
            .push(experiment_type);
    }

    /// Experiment description.
    pub fn experiment_description(&self, experiment_index: usize) -> Option<&str> {
        self.experiment(experiment_index)?.description.as_deref()
    }

    /// Set the experiment description.
    pub fn set_experiment_description(
        &mut self,
        description: impl Into<String>,
        experiment_index: usize,
    ) {
        self.experiment_mut(experiment_index).description = Some(description.into());
    }

    /// Experimenter who designed the experiment.
    pub fn experiment_experimenter_ref(&self, experiment_index: usize) -> Option<&str> {
        self.experiment(experiment_index)?.experimenter_ref.as_deref()
    }

    /// Link the experiment to its designer.
    pub fn set_experiment_experimenter_ref(
        &mut self,
        experimenter: &str,
        experiment_index: usize,
    ) {
        let experiment = self.experiment_mut(experiment_index);
        experiment.experimenter_ref = Some(experimenter.to_string());
        let source = source_id(&experiment.id, "Experiment", experiment_index);
        self.registry
            .add_reference(&source, experimenter, "ExperimenterRef");
    }

    /// Number of microbeam manipulations under the experiment.
    pub fn microbeam_manipulation_count(&self, experiment_index: usize) -> usize {
        self.experiment(experiment_index)
            .map_or(0, |experiment| experiment.microbeam_manipulations.len())
    }

    // -- MicrobeamManipulation ------------------------------------------

    /// Microbeam manipulation ID.
    pub fn microbeam_manipulation_id(
        &self,
        experiment_index: usize,
        manipulation_index: usize,
    ) -> Option<&str> {
        self.microbeam_manipulation(experiment_index, manipulation_index)
            .map(|manipulation| manipulation.id.as_str())
    }

    /// Set the microbeam manipulation ID and register it.
    pub fn set_microbeam_manipulation_id(
        &mut self,
        id: &str,
        experiment_index: usize,
        manipulation_index: usize,
    ) {
        self.microbeam_manipulation_mut(experiment_index, manipulation_index).id =
            id.to_string();
        self.registry.register(id, "MicrobeamManipulation");
    }

    /// ROI targeted by the manipulation at `roi_ref_index`.
    pub fn microbeam_manipulation_roi_ref(
        &self,
        experiment_index: usize,
        manipulation_index: usize,
        roi_ref_index: usize,
    ) -> Option<&str> {
        self.microbeam_manipulation(experiment_index, manipulation_index)?
            .roi_refs
            .get(roi_ref_index)
            .map(String::as_str)
    }

    /// Link an ROI target to the manipulation.
    pub fn set_microbeam_manipulation_roi_ref(
        &mut self,
        roi: &str,
        experiment_index: usize,
        manipulation_index: usize,
        roi_ref_index: usize,
    ) {
        let manipulation = self.microbeam_manipulation_mut(experiment_index, manipulation_index);
        set_ref(&mut manipulation.roi_refs, roi_ref_index, roi);
        let source = source_id(
            &manipulation.id,
            "MicrobeamManipulation",
            format!("{experiment_index}:{manipulation_index}"),
        );
        self.registry.add_reference(&source, roi, "ROIRef");
    }
}
