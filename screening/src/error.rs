use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while loading a model artifact. Every variant names the file it
/// came from; all of them are fatal at startup.
#[derive(Debug)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file exists but is not a valid artifact document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document parsed but does not fit the task it was loaded for.
    Incompatible { path: PathBuf, reason: String },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            ArtifactError::Parse { path, source } => {
                write!(f, "invalid artifact '{}': {source}", path.display())
            }
            ArtifactError::Incompatible { path, reason } => {
                write!(f, "incompatible artifact '{}': {reason}", path.display())
            }
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactError::Io { source, .. } => Some(source),
            ArtifactError::Parse { source, .. } => Some(source),
            ArtifactError::Incompatible { .. } => None,
        }
    }
}

/// Failure while running a loaded predictor.
#[derive(Debug)]
pub enum PredictError {
    /// The input vector length does not match the model's feature count.
    ShapeMismatch { got: usize, expected: usize },
    /// The model produced a score that cannot be mapped to a label.
    NonFiniteScore,
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ShapeMismatch { got, expected } => {
                write!(
                    f,
                    "input vector shape mismatch: got {got} values, expected {expected}"
                )
            }
            PredictError::NonFiniteScore => write!(f, "model produced a non-finite score"),
        }
    }
}

impl Error for PredictError {}

/// Failure while turning raw form entries into an input vector.
#[derive(Debug)]
pub enum InputError {
    /// The number of entries does not match the task's feature count.
    CountMismatch { got: usize, expected: usize },
    /// One entry is neither empty nor a number.
    NotNumeric {
        feature: &'static str,
        value: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::CountMismatch { got, expected } => {
                write!(f, "expected {expected} values, got {got}")
            }
            InputError::NotNumeric { feature, value } => {
                write!(f, "{feature}: cannot parse '{value}' as a number")
            }
        }
    }
}

impl Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_errors_name_the_file() {
        let err = ArtifactError::Io {
            path: PathBuf::from("Models/thyroid_model.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("thyroid_model.json"), "got: {msg}");
        assert!(err.source().is_some());

        let err = ArtifactError::Incompatible {
            path: PathBuf::from("Models/diabetes_model.json"),
            reason: "weight count 3, expected 8".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("diabetes_model.json"), "got: {msg}");
        assert!(msg.contains("expected 8"), "got: {msg}");
    }

    #[test]
    fn predict_errors_report_both_lengths() {
        let msg = PredictError::ShapeMismatch {
            got: 6,
            expected: 7,
        }
        .to_string();
        assert!(msg.contains('6') && msg.contains('7'), "got: {msg}");
    }

    #[test]
    fn input_errors_name_the_feature() {
        let msg = InputError::NotNumeric {
            feature: "Glucose",
            value: "abc".into(),
        }
        .to_string();
        assert!(msg.contains("Glucose") && msg.contains("abc"), "got: {msg}");
    }
}
