use std::path::Path;
use std::sync::Arc;

use mindguard_core::models::features::FeatureRecord;
use mindguard_core::models::prediction::{
    ClassProbability, PredictionOutcome, PredictionResult, Probabilities,
};
use mindguard_core::models::risk::RiskLabel;
use tracing::{error, info, warn};

use crate::classifier::Classifier;
use crate::error::PredictError;
use crate::model::LogisticModel;

/// Normalizes classifier output into a [`PredictionResult`].
#[derive(Clone)]
pub struct RiskPredictor {
    classifier: Arc<dyn Classifier>,
}

impl RiskPredictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Load the JSON model artifact at `path`.
    pub fn from_artifact_path(path: impl AsRef<Path>) -> Result<Self, PredictError> {
        let model = LogisticModel::load(path)?;
        Ok(Self::new(Arc::new(model)))
    }

    /// Classify one record.
    ///
    /// Only a failing `predict` is an error. Missing, failing or malformed
    /// probability output degrades to [`Probabilities::Unsupported`].
    pub fn predict(&self, record: FeatureRecord) -> Result<PredictionResult, PredictError> {
        let class_id = self.classifier.predict(&record)?;
        let label = RiskLabel::from_class_id(class_id);

        let probabilities = match self
            .classifier
            .predict_proba(&record)
            .and_then(|pairs| pairs.map(check_distribution).transpose())
        {
            Ok(Some(pairs)) => Probabilities::Available(
                pairs
                    .into_iter()
                    .map(|(class_id, probability)| ClassProbability {
                        class_id,
                        label: RiskLabel::from_class_id(class_id),
                        probability,
                    })
                    .collect(),
            ),
            Ok(None) => {
                info!("model does not expose class probabilities");
                Probabilities::Unsupported
            }
            Err(e) => {
                warn!(error = %e, "probability output failed, reporting none");
                Probabilities::Unsupported
            }
        };

        info!(class_id, label = %label, "risk predicted");
        Ok(PredictionResult {
            label,
            probabilities,
        })
    }
}

/// Largest allowed gap between the probability sum and 1.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Reject probability output that is not a distribution: every value finite
/// and in `[0, 1]`, summing to 1 within [`PROBABILITY_SUM_TOLERANCE`].
fn check_distribution(pairs: Vec<(i64, f64)>) -> Result<Vec<(i64, f64)>, PredictError> {
    if let Some((class_id, p)) = pairs
        .iter()
        .find(|(_, p)| !p.is_finite() || !(0.0..=1.0).contains(p))
    {
        return Err(PredictError::Inference(format!(
            "class {class_id} probability {p} is outside [0, 1]"
        )));
    }
    let sum: f64 = pairs.iter().map(|(_, p)| p).sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(PredictError::Inference(format!(
            "class probabilities sum to {sum}, expected 1"
        )));
    }
    Ok(pairs)
}

/// Whether ML prediction is available for this process.
#[derive(Clone)]
pub enum PredictorStatus {
    Ready(RiskPredictor),
    Disabled { reason: String },
}

impl PredictorStatus {
    /// Load the model once at startup. A missing or invalid artifact
    /// disables prediction; it never aborts scoring.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match RiskPredictor::from_artifact_path(path) {
            Ok(predictor) => PredictorStatus::Ready(predictor),
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "risk model unavailable, ML prediction disabled"
                );
                PredictorStatus::Disabled {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PredictorStatus::Ready(_))
    }

    /// Run one prediction, folding per-request failures into the outcome.
    pub fn predict(&self, record: FeatureRecord) -> PredictionOutcome {
        match self {
            PredictorStatus::Ready(predictor) => match predictor.predict(record) {
                Ok(result) => PredictionOutcome::Predicted { result },
                Err(e) => {
                    warn!(error = %e, "prediction failed");
                    PredictionOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            },
            PredictorStatus::Disabled { reason } => PredictionOutcome::Disabled {
                reason: reason.clone(),
            },
        }
    }
}
