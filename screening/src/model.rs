use std::fmt;

use ndarray::{Array1, Array2, ArrayView1};

use crate::artifact::{ActFnSpec, ArtifactSpec, LayerSpec, PredictorSpec};
use crate::error::PredictError;
use crate::task::TaskKind;

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// 0 for negative, 1 for positive.
    pub fn as_bit(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Negative => "Negative",
            Label::Positive => "Positive",
        })
    }
}

/// A validated, ready-to-run predictor.
///
/// Built once from an [`ArtifactSpec`] at startup and immutable afterwards.
/// Construction goes through [`Predictor::build`], so a live predictor always
/// has internally consistent dimensions.
#[derive(Debug, Clone)]
pub struct Predictor {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Linear {
        weights: Array1<f32>,
        bias: f32,
    },
    /// Invariant: `layers` is non-empty and dimension-chained.
    FeedForward {
        layers: Vec<DenseLayer>,
    },
}

#[derive(Debug, Clone)]
struct DenseLayer {
    /// `(output, input)` weight matrix.
    weights: Array2<f32>,
    biases: Array1<f32>,
    act_fn: Option<ActFn>,
}

#[derive(Debug, Clone, Copy)]
enum ActFn {
    Sigmoid { amp: f32 },
}

impl ActFn {
    fn apply(self, z: f32) -> f32 {
        match self {
            ActFn::Sigmoid { amp } => amp / (1.0 + (-z).exp()),
        }
    }
}

impl DenseLayer {
    fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        let mut z = self.weights.dot(&x) + &self.biases;
        if let Some(act) = self.act_fn {
            z.mapv_inplace(|v| act.apply(v));
        }
        z
    }
}

impl Predictor {
    /// Validates `spec` against `task` and builds the runtime predictor.
    ///
    /// # Errors
    /// Returns a human-readable reason when the artifact is tagged for a
    /// different task or its parameter dimensions do not line up with the
    /// task's feature count.
    pub fn build(spec: ArtifactSpec, task: TaskKind) -> Result<Self, String> {
        if spec.task != task {
            return Err(format!(
                "artifact is tagged '{}', expected '{}'",
                spec.task.id(),
                task.id()
            ));
        }

        let expected = task.features().len();
        let kind = match spec.predictor {
            PredictorSpec::Linear { weights, bias } => {
                if weights.len() != expected {
                    return Err(format!(
                        "weight count {}, expected {expected}",
                        weights.len()
                    ));
                }
                Kind::Linear {
                    weights: Array1::from_vec(weights),
                    bias,
                }
            }
            PredictorSpec::FeedForward { layers } => {
                Kind::FeedForward {
                    layers: build_layers(layers, expected)?,
                }
            }
        };

        Ok(Self { kind })
    }

    /// Number of inputs the predictor expects.
    pub fn input_dim(&self) -> usize {
        match &self.kind {
            Kind::Linear { weights, .. } => weights.len(),
            Kind::FeedForward { layers } => layers[0].weights.ncols(),
        }
    }

    /// Classifies one input vector.
    ///
    /// # Errors
    /// [`PredictError::ShapeMismatch`] if `input` length differs from
    /// [`Predictor::input_dim`]; [`PredictError::NonFiniteScore`] if the
    /// model's score overflows.
    pub fn predict(&self, input: &[f32]) -> Result<Label, PredictError> {
        let expected = self.input_dim();
        if input.len() != expected {
            return Err(PredictError::ShapeMismatch {
                got: input.len(),
                expected,
            });
        }

        let score = self.raw_score(ArrayView1::from(input));
        if !score.is_finite() {
            return Err(PredictError::NonFiniteScore);
        }

        let label = match &self.kind {
            Kind::Linear { .. } if score > 0.0 => Label::Positive,
            Kind::FeedForward { .. } if score >= 0.5 => Label::Positive,
            _ => Label::Negative,
        };
        Ok(label)
    }

    fn raw_score(&self, x: ArrayView1<f32>) -> f32 {
        match &self.kind {
            Kind::Linear { weights, bias } => weights.dot(&x) + bias,
            Kind::FeedForward { layers } => {
                let mut a = x.to_owned();
                for layer in layers {
                    a = layer.forward(a.view());
                }
                a[0]
            }
        }
    }
}

fn build_layers(specs: Vec<LayerSpec>, expected: usize) -> Result<Vec<DenseLayer>, String> {
    if specs.is_empty() {
        return Err("layers must not be empty".into());
    }

    let first = specs[0].input.get();
    if first != expected {
        return Err(format!("first layer takes {first} inputs, expected {expected}"));
    }
    let last = specs[specs.len() - 1].output.get();
    if last != 1 {
        return Err(format!("final layer emits {last} outputs, expected 1"));
    }

    let mut layers = Vec::with_capacity(specs.len());
    let mut prev_output = expected;
    for (i, spec) in specs.into_iter().enumerate() {
        let (input, output) = (spec.input.get(), spec.output.get());
        if input != prev_output {
            return Err(format!(
                "layer {i} takes {input} inputs, previous layer emits {prev_output}"
            ));
        }
        if spec.weights.len() != input * output {
            return Err(format!(
                "layer {i}: weight count {}, expected {}",
                spec.weights.len(),
                input * output
            ));
        }
        if spec.biases.len() != output {
            return Err(format!(
                "layer {i}: bias count {}, expected {output}",
                spec.biases.len()
            ));
        }

        let weights = Array2::from_shape_vec((output, input), spec.weights)
            .map_err(|e| format!("layer {i}: {e}"))?;
        let act_fn = spec.act_fn.map(|a| match a {
            ActFnSpec::Sigmoid { amp } => ActFn::Sigmoid { amp },
        });
        layers.push(DenseLayer {
            weights,
            biases: Array1::from_vec(spec.biases),
            act_fn,
        });
        prev_output = output;
    }

    Ok(layers)
}
