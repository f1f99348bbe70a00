mod artifact;
mod error;
mod inputs;
mod model;
mod store;
mod task;

pub use artifact::{ActFnSpec, ArtifactSpec, LayerSpec, PredictorSpec};
pub use error::{ArtifactError, InputError, PredictError};
pub use inputs::parse_vector;
pub use model::{Label, Predictor};
pub use store::ModelStore;
pub use task::TaskKind;
