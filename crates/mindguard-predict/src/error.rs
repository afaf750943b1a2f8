use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("failed to read model artifact {}: {source}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("feature '{0}' is missing from the record")]
    MissingFeature(String),

    #[error("feature '{name}' must be {expected}")]
    FeatureType { name: String, expected: &'static str },

    #[error("model inference failed: {0}")]
    Inference(String),
}

impl PredictError {
    /// True for errors raised while loading the model, as opposed to while
    /// running it on one record.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PredictError::ModelLoad { .. }
                | PredictError::Serialization(_)
                | PredictError::InvalidArtifact(_)
        )
    }
}
