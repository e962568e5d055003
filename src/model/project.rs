//! Organizational containers: projects, datasets, and people.

use serde::{Deserialize, Serialize};

/// A project grouping datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project ID (`Project:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Owning experimenter
    pub experimenter_ref: Option<String>,
    /// Owning group
    pub experimenter_group_ref: Option<String>,
    /// Datasets in this project
    pub dataset_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Project {
    /// Create a project with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A dataset grouping images.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset ID (`Dataset:n`)
    pub id: String,
    /// Human-readable name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Owning experimenter
    pub experimenter_ref: Option<String>,
    /// Owning group
    pub experimenter_group_ref: Option<String>,
    /// Images in this dataset
    pub image_refs: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

impl Dataset {
    /// Create a dataset with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A person involved in acquisitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experimenter {
    /// Experimenter ID (`Experimenter:n`)
    pub id: String,
    /// Given name
    pub first_name: Option<String>,
    /// Middle name
    pub middle_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Institution affiliation
    pub institution: Option<String>,
    /// Login name
    pub user_name: Option<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}

/// A group of experimenters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimenterGroup {
    /// ExperimenterGroup ID (`ExperimenterGroup:n`)
    pub id: String,
    /// Group name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Members of the group
    pub experimenter_refs: Vec<String>,
    /// Group leaders
    pub leaders: Vec<String>,
    /// Linked annotations
    pub annotation_refs: Vec<String>,
}
