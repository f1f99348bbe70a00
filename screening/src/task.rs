use serde::{Deserialize, Serialize};

/// One of the five supported screening tasks.
///
/// The set is closed. Everything that varies per task hangs off this enum as
/// static data: the menu name, the stable id used inside artifacts, the
/// artifact file name and the ordered feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Thyroid,
}

impl TaskKind {
    /// Every task, in menu order.
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Diabetes,
        TaskKind::HeartDisease,
        TaskKind::Parkinsons,
        TaskKind::LungCancer,
        TaskKind::Thyroid,
    ];

    /// Human-readable name shown in the task menu and screen titles.
    pub fn display_name(self) -> &'static str {
        match self {
            TaskKind::Diabetes => "Diabetes Prediction",
            TaskKind::HeartDisease => "Heart Disease Prediction",
            TaskKind::Parkinsons => "Parkinsons Prediction",
            TaskKind::LungCancer => "Lung Cancer Prediction",
            TaskKind::Thyroid => "Hypo-Thyroid Prediction",
        }
    }

    /// Stable identifier. Matches the tag serialized into artifacts.
    pub fn id(self) -> &'static str {
        match self {
            TaskKind::Diabetes => "diabetes",
            TaskKind::HeartDisease => "heart_disease",
            TaskKind::Parkinsons => "parkinsons",
            TaskKind::LungCancer => "lung_cancer",
            TaskKind::Thyroid => "thyroid",
        }
    }

    /// File name of the task's model artifact inside the models directory.
    pub fn artifact_file(self) -> &'static str {
        match self {
            TaskKind::Diabetes => "diabetes_model.json",
            TaskKind::HeartDisease => "heart_disease_model.json",
            TaskKind::Parkinsons => "parkinsons_model.json",
            TaskKind::LungCancer => "lung_cancer_model.json",
            TaskKind::Thyroid => "thyroid_model.json",
        }
    }

    /// Ordered feature names. The task's model expects exactly one value per
    /// name, in this order.
    pub fn features(self) -> &'static [&'static str] {
        match self {
            TaskKind::Diabetes => &[
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age",
            ],
            TaskKind::HeartDisease => &[
                "Age",
                "Sex",
                "ChestPain",
                "RestBP",
                "Cholesterol",
                "FBS",
                "RestECG",
                "MaxHR",
                "ExerciseAngina",
                "Oldpeak",
                "Slope",
                "CA",
                "Thal",
            ],
            TaskKind::Parkinsons => &[
                "Fo",
                "Fhi",
                "Flo",
                "Jitter_percent",
                "Jitter_Abs",
                "RAP",
                "PPQ",
                "DDP",
                "Shimmer",
                "Shimmer_dB",
            ],
            TaskKind::LungCancer => &[
                "Gender",
                "Age",
                "Smoking",
                "YellowFingers",
                "Anxiety",
                "PeerPressure",
                "ChronicDisease",
                "Fatigue",
                "Allergy",
                "Wheezing",
            ],
            TaskKind::Thyroid => &[
                "Age",
                "Sex",
                "OnThyroxine",
                "TSH",
                "T3Measured",
                "T3",
                "TT4",
            ],
        }
    }

    /// Position of the task in [`TaskKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            TaskKind::Diabetes => 0,
            TaskKind::HeartDisease => 1,
            TaskKind::Parkinsons => 2,
            TaskKind::LungCancer => 3,
            TaskKind::Thyroid => 4,
        }
    }
}
