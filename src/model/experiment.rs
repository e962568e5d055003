//! Experiment descriptions and microbeam manipulations.

use serde::{Deserialize, Serialize};

use crate::primitives::ExperimentType;

/// Description of the experiment a set of images belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experiment {
    /// Experiment ID (`Experiment:n`)
    pub id: String,
    /// Experiment kinds; the schema allows several
    pub experiment_types: Vec<ExperimentType>,
    /// Free-text description
    pub description: Option<String>,
    /// Experimenter who designed the experiment
    pub experimenter_ref: Option<String>,
    /// Microbeam manipulations performed
    pub microbeam_manipulations: Vec<MicrobeamManipulation>,
}

impl Experiment {
    /// Create an experiment with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A targeted light manipulation (photobleaching, uncaging, ablation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicrobeamManipulation {
    /// MicrobeamManipulation ID (`MicrobeamManipulation:n:m`)
    pub id: String,
    /// Manipulation kind tokens (e.g. `FRAP`, `Photoablation`)
    pub manipulation_types: Vec<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Experimenter who performed the manipulation
    pub experimenter_ref: Option<String>,
    /// Regions targeted by the beam
    pub roi_refs: Vec<String>,
}
