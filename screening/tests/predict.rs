use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use tempfile::TempDir;

use screening::{
    ActFnSpec, ArtifactError, ArtifactSpec, InputError, Label, LayerSpec, ModelStore,
    PredictError, PredictorSpec, TaskKind, parse_vector,
};

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Linear predictor with weights `0.01 * (i + 1)` per feature.
fn indexed_linear(task: TaskKind, bias: f32) -> ArtifactSpec {
    let weights = (0..task.features().len())
        .map(|i| 0.01 * (i as f32 + 1.0))
        .collect();
    ArtifactSpec {
        task,
        predictor: PredictorSpec::Linear { weights, bias },
    }
}

/// Parkinsons net that only looks at Fo: positive iff `sigmoid(0.1 * Fo)`
/// clears 0.75, i.e. Fo above roughly 11.
fn parkinsons_net() -> ArtifactSpec {
    let mut hidden = vec![0.0; 20];
    hidden[0] = 0.1;
    ArtifactSpec {
        task: TaskKind::Parkinsons,
        predictor: PredictorSpec::FeedForward {
            layers: vec![
                LayerSpec {
                    input: nz(10),
                    output: nz(2),
                    weights: hidden,
                    biases: vec![0.0; 2],
                    act_fn: Some(ActFnSpec::Sigmoid { amp: 1.0 }),
                },
                LayerSpec {
                    input: nz(2),
                    output: nz(1),
                    weights: vec![2.0, 0.0],
                    biases: vec![-1.0],
                    act_fn: None,
                },
            ],
        },
    }
}

fn write_artifact(dir: &Path, task: TaskKind, spec: &ArtifactSpec) {
    let json = serde_json::to_string_pretty(spec).unwrap();
    fs::write(dir.join(task.artifact_file()), json).unwrap();
}

fn write_models(dir: &Path) {
    for task in TaskKind::ALL {
        let spec = match task {
            TaskKind::Parkinsons => parkinsons_net(),
            _ => indexed_linear(task, -20.0),
        };
        write_artifact(dir, task, &spec);
    }
}

fn entries(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn load_all_builds_a_model_per_task() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());

    let store = ModelStore::load_all(dir.path()).unwrap();
    for task in TaskKind::ALL {
        let zeros = vec![0.0; task.features().len()];
        assert_eq!(
            store.predict(task, &zeros).unwrap(),
            Label::Negative,
            "{}",
            task.id()
        );
    }
}

#[test]
fn diabetes_walkthrough_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    let store = ModelStore::load_all(dir.path()).unwrap();

    let raw = entries(&["2", "120", "70", "20", "79", "25.0", "0.5", "33"]);

    // weighted sum 13.445 against bias -20: stays negative
    let vector = parse_vector(TaskKind::Diabetes, &raw).unwrap();
    let first = store.predict(TaskKind::Diabetes, &vector).unwrap();
    assert_eq!(first, Label::Negative);

    let vector = parse_vector(TaskKind::Diabetes, &raw).unwrap();
    let second = store.predict(TaskKind::Diabetes, &vector).unwrap();
    assert_eq!(second, first);
}

#[test]
fn linear_margin_flips_positive() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    let store = ModelStore::load_all(dir.path()).unwrap();

    // weighted sum 46.24 against bias -20
    let raw = entries(&["10", "300", "100", "50", "500", "60", "2", "80"]);
    let vector = parse_vector(TaskKind::Diabetes, &raw).unwrap();
    assert_eq!(
        store.predict(TaskKind::Diabetes, &vector).unwrap(),
        Label::Positive
    );
}

#[test]
fn feed_forward_artifact_runs_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    let store = ModelStore::load_all(dir.path()).unwrap();

    let mut voice = vec![0.0; 10];
    voice[0] = 200.0;
    assert_eq!(
        store.predict(TaskKind::Parkinsons, &voice).unwrap(),
        Label::Positive
    );

    voice[0] = 5.0;
    assert_eq!(
        store.predict(TaskKind::Parkinsons, &voice).unwrap(),
        Label::Negative
    );
}

#[test]
fn short_thyroid_form_never_reaches_the_model() {
    let raw = entries(&["45", "1", "0", "2.3", "1", "1.1"]);
    let err = parse_vector(TaskKind::Thyroid, &raw).unwrap_err();
    assert!(
        matches!(err, InputError::CountMismatch { got: 6, expected: 7 }),
        "got {err:?}"
    );

    // and the model itself refuses the short vector if handed one directly
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    let store = ModelStore::load_all(dir.path()).unwrap();
    let err = store.predict(TaskKind::Thyroid, &[45.0, 1.0, 0.0, 2.3, 1.0, 1.1]);
    assert!(
        matches!(
            err,
            Err(PredictError::ShapeMismatch { got: 6, expected: 7 })
        ),
        "got {err:?}"
    );
}

#[test]
fn missing_artifact_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    fs::remove_file(dir.path().join(TaskKind::Thyroid.artifact_file())).unwrap();

    let err = ModelStore::load_all(dir.path()).unwrap_err();
    match &err {
        ArtifactError::Io { path, .. } => {
            assert!(path.ends_with("thyroid_model.json"), "path: {path:?}");
        }
        other => panic!("expected Io, got {other:?}"),
    }
    assert!(err.to_string().contains("thyroid_model.json"));
}

#[test]
fn corrupt_artifact_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());
    fs::write(
        dir.path().join(TaskKind::HeartDisease.artifact_file()),
        b"not an artifact",
    )
    .unwrap();

    let err = ModelStore::load_all(dir.path()).unwrap_err();
    match &err {
        ArtifactError::Parse { path, .. } => {
            assert!(path.ends_with("heart_disease_model.json"), "path: {path:?}");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn mistagged_artifact_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());

    // thyroid parameters sitting in the diabetes slot
    let stray = indexed_linear(TaskKind::Thyroid, -1.0);
    let json = serde_json::to_string_pretty(&stray).unwrap();
    fs::write(dir.path().join(TaskKind::Diabetes.artifact_file()), json).unwrap();

    let err = ModelStore::load_all(dir.path()).unwrap_err();
    match &err {
        ArtifactError::Incompatible { path, reason } => {
            assert!(path.ends_with("diabetes_model.json"), "path: {path:?}");
            assert!(reason.contains("tagged"), "reason: {reason}");
        }
        other => panic!("expected Incompatible, got {other:?}"),
    }
}

#[test]
fn undersized_artifact_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_models(dir.path());

    let stub = ArtifactSpec {
        task: TaskKind::Diabetes,
        predictor: PredictorSpec::Linear {
            weights: vec![0.1, 0.2, 0.3],
            bias: 0.0,
        },
    };
    write_artifact(dir.path(), TaskKind::Diabetes, &stub);

    let err = ModelStore::load_all(dir.path()).unwrap_err();
    match &err {
        ArtifactError::Incompatible { reason, .. } => {
            assert!(reason.contains("expected 8"), "reason: {reason}");
        }
        other => panic!("expected Incompatible, got {other:?}"),
    }
}
