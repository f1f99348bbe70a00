use std::path::Path;

use log::{debug, info};

use crate::artifact;
use crate::error::{ArtifactError, PredictError};
use crate::model::{Label, Predictor};
use crate::task::TaskKind;

/// The loaded predictors, one per task.
///
/// Built once at startup and handed out by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct ModelStore {
    /// Invariant: one predictor per task, in [`TaskKind::ALL`] order.
    models: Vec<Predictor>,
}

impl ModelStore {
    /// Wraps five already-built predictors, in [`TaskKind::ALL`] order.
    pub fn new(models: [Predictor; TaskKind::ALL.len()]) -> Self {
        Self {
            models: models.into(),
        }
    }

    /// Loads every task's artifact from `dir`.
    ///
    /// All-or-nothing: the first artifact that cannot be read, parsed or
    /// validated aborts the whole load.
    ///
    /// # Errors
    /// Returns an [`ArtifactError`] naming the offending file.
    pub fn load_all(dir: &Path) -> Result<Self, ArtifactError> {
        let mut models = Vec::with_capacity(TaskKind::ALL.len());
        for task in TaskKind::ALL {
            let path = dir.join(task.artifact_file());
            let spec = artifact::read(&path)?;
            let model = Predictor::build(spec, task).map_err(|reason| {
                ArtifactError::Incompatible {
                    path: path.clone(),
                    reason,
                }
            })?;
            info!(
                "loaded {} model from {} ({} features)",
                task.id(),
                path.display(),
                model.input_dim()
            );
            models.push(model);
        }
        Ok(Self { models })
    }

    /// Runs the task's model on `input`.
    ///
    /// # Errors
    /// [`PredictError::ShapeMismatch`] if `input` length differs from the
    /// task's feature count; [`PredictError::NonFiniteScore`] if the model
    /// cannot map the input to a label.
    pub fn predict(&self, task: TaskKind, input: &[f32]) -> Result<Label, PredictError> {
        let label = self.predictor(task).predict(input)?;
        debug!("{}: predicted {}", task.id(), label.as_bit());
        Ok(label)
    }

    /// The loaded predictor for `task`.
    pub fn predictor(&self, task: TaskKind) -> &Predictor {
        &self.models[task.index()]
    }
}
