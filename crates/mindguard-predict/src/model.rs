//! JSON model artifact: a multinomial logistic classifier over the
//! assessment feature record.
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "name": "mindguard-risk",
//!   "classes": [0, 1, 2],
//!   "features": [
//!     { "name": "age", "kind": "numeric", "mean": 30.0, "std": 10.0 },
//!     { "name": "gender", "kind": "categorical", "levels": ["Male", "Female", "Other"] }
//!   ],
//!   "coefficients": [[...], [...], [...]],
//!   "intercepts": [0.0, 0.0, 0.0]
//! }
//! ```
//!
//! Numeric features are standardized as `(x - mean) / std`. Categorical
//! features are one-hot encoded over `levels`; a value outside `levels`
//! encodes as all zeros. Each coefficient row has one weight per encoded
//! column, in feature order, and there is one row per class.

use std::collections::HashSet;
use std::path::Path;

use mindguard_core::models::features::{FeatureRecord, FeatureValue};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::Classifier;
use crate::error::PredictError;

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    #[serde(default)]
    pub name: String,
    pub classes: Vec<i64>,
    pub features: Vec<FeatureSpec>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    #[serde(flatten)]
    pub encoding: FeatureEncoding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureEncoding {
    Numeric { mean: f64, std: f64 },
    Categorical { levels: Vec<String> },
}

impl FeatureEncoding {
    fn width(&self) -> usize {
        match self {
            FeatureEncoding::Numeric { .. } => 1,
            FeatureEncoding::Categorical { levels } => levels.len(),
        }
    }
}

/// A validated [`ModelArtifact`], ready for inference.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    artifact: ModelArtifact,
    width: usize,
}

impl LogisticModel {
    /// Read and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PredictError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&contents)?;
        let model = Self::from_artifact(artifact)?;
        info!(
            path = %path.display(),
            name = %model.artifact.name,
            classes = model.artifact.classes.len(),
            features = model.artifact.features.len(),
            "risk model loaded"
        );
        Ok(model)
    }

    /// Validate artifact shapes. Every mismatch is reported at load time so
    /// inference never indexes out of bounds.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictError> {
        if artifact.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(invalid(format!(
                "format_version {} is not supported (expected {SUPPORTED_FORMAT_VERSION})",
                artifact.format_version
            )));
        }
        if artifact.classes.is_empty() {
            return Err(invalid("no classes".to_string()));
        }
        let unique: HashSet<i64> = artifact.classes.iter().copied().collect();
        if unique.len() != artifact.classes.len() {
            return Err(invalid("duplicate class ids".to_string()));
        }
        if artifact.features.is_empty() {
            return Err(invalid("no features".to_string()));
        }

        for spec in &artifact.features {
            match &spec.encoding {
                FeatureEncoding::Numeric { mean, std } => {
                    if !mean.is_finite() || !std.is_finite() || *std <= 0.0 {
                        return Err(invalid(format!(
                            "feature '{}' needs a finite mean and a positive std",
                            spec.name
                        )));
                    }
                }
                FeatureEncoding::Categorical { levels } => {
                    if levels.is_empty() {
                        return Err(invalid(format!("feature '{}' has no levels", spec.name)));
                    }
                }
            }
        }

        let width: usize = artifact.features.iter().map(|f| f.encoding.width()).sum();
        if artifact.coefficients.len() != artifact.classes.len() {
            return Err(invalid(format!(
                "{} coefficient rows for {} classes",
                artifact.coefficients.len(),
                artifact.classes.len()
            )));
        }
        if let Some(row) = artifact.coefficients.iter().position(|r| r.len() != width) {
            return Err(invalid(format!(
                "coefficient row {row} has {} weights, expected {width}",
                artifact.coefficients[row].len()
            )));
        }
        if artifact.intercepts.len() != artifact.classes.len() {
            return Err(invalid(format!(
                "{} intercepts for {} classes",
                artifact.intercepts.len(),
                artifact.classes.len()
            )));
        }

        Ok(Self { artifact, width })
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictError> {
        let mut encoded = Vec::with_capacity(self.width);
        for spec in &self.artifact.features {
            let value = record
                .get(&spec.name)
                .ok_or_else(|| PredictError::MissingFeature(spec.name.clone()))?;
            match (&spec.encoding, value) {
                (FeatureEncoding::Numeric { mean, std }, FeatureValue::Number(x)) => {
                    encoded.push((x - mean) / std);
                }
                (FeatureEncoding::Categorical { levels }, FeatureValue::Category(level)) => {
                    encoded.extend(levels.iter().map(|l| if l == level { 1.0 } else { 0.0 }));
                }
                (FeatureEncoding::Numeric { .. }, _) => {
                    return Err(PredictError::FeatureType {
                        name: spec.name.clone(),
                        expected: "numeric",
                    });
                }
                (FeatureEncoding::Categorical { .. }, _) => {
                    return Err(PredictError::FeatureType {
                        name: spec.name.clone(),
                        expected: "categorical",
                    });
                }
            }
        }
        Ok(encoded)
    }

    fn logits(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictError> {
        let x = self.encode(record)?;
        let logits: Vec<f64> = self
            .artifact
            .coefficients
            .iter()
            .zip(&self.artifact.intercepts)
            .map(|(row, b)| b + row.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>())
            .collect();
        if logits.iter().any(|z| !z.is_finite()) {
            return Err(PredictError::Inference("non-finite class score".to_string()));
        }
        Ok(logits)
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, record: &FeatureRecord) -> Result<i64, PredictError> {
        let logits = self.logits(record)?;
        let mut best = 0;
        for (i, z) in logits.iter().enumerate() {
            if *z > logits[best] {
                best = i;
            }
        }
        Ok(self.artifact.classes[best])
    }

    fn predict_proba(
        &self,
        record: &FeatureRecord,
    ) -> Result<Option<Vec<(i64, f64)>>, PredictError> {
        let logits = self.logits(record)?;
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        Ok(Some(
            self.artifact
                .classes
                .iter()
                .zip(exps)
                .map(|(class, e)| (*class, e / sum))
                .collect(),
        ))
    }
}

fn invalid(message: String) -> PredictError {
    PredictError::InvalidArtifact(message)
}
