use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::task::TaskKind;

/// On-disk model artifact.
///
/// The JSON layout of these types is the contract with whatever training
/// pipeline produced the file. Loading is strict: a document that does not
/// deserialize into this shape is rejected as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Task the parameters were trained for. Must match the registry slot
    /// the artifact is loaded into.
    pub task: TaskKind,
    pub predictor: PredictorSpec,
}

/// Predictor family and its trained parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorSpec {
    /// Decision margin `w . x + b`; a positive margin means label 1.
    Linear { weights: Vec<f32>, bias: f32 },
    /// Small dense network; the final activation is thresholded at 0.5.
    FeedForward { layers: Vec<LayerSpec> },
}

/// One dense layer of a feed-forward predictor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub input: NonZeroUsize,
    pub output: NonZeroUsize,
    /// Row-major `(output, input)` weight matrix.
    pub weights: Vec<f32>,
    pub biases: Vec<f32>,
    pub act_fn: Option<ActFnSpec>,
}

/// Activation applied after a layer's affine step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f32 },
}

/// Reads and parses one artifact file.
///
/// # Errors
/// Returns an [`ArtifactError`] naming `path` if the file cannot be read or
/// does not match the artifact contract.
pub fn read(path: &Path) -> Result<ArtifactSpec, ArtifactError> {
    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
