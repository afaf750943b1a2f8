use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLabel;

/// Probability the classifier assigned to one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassProbability {
    pub class_id: i64,
    pub label: RiskLabel,
    /// In `[0, 1]`.
    pub probability: f64,
}

/// Probability output of a prediction. Models without probability support
/// report `Unsupported` rather than failing the prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "classes", rename_all = "snake_case")]
#[ts(export)]
pub enum Probabilities {
    Available(Vec<ClassProbability>),
    Unsupported,
}

impl Probabilities {
    pub fn as_slice(&self) -> &[ClassProbability] {
        match self {
            Probabilities::Available(classes) => classes,
            Probabilities::Unsupported => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub label: RiskLabel,
    pub probabilities: Probabilities,
}

/// What became of the ML prediction step for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum PredictionOutcome {
    Predicted { result: PredictionResult },
    /// The classifier raised for this request.
    Failed { reason: String },
    /// No classifier is loaded for this process.
    Disabled { reason: String },
}

impl PredictionOutcome {
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            PredictionOutcome::Predicted { result } => Some(result),
            _ => None,
        }
    }
}
