use mindguard_core::models::features::FeatureRecord;

use crate::error::PredictError;

/// A pre-trained risk classifier.
///
/// Implementations must be safe to share read-only between requests; one
/// instance is loaded per process.
pub trait Classifier: Send + Sync {
    /// Predicted class id for one record. The risk model uses 0, 1 and 2 for
    /// Low, Medium and High.
    fn predict(&self, record: &FeatureRecord) -> Result<i64, PredictError>;

    /// Per-class probabilities as `(class_id, probability)` pairs, in the
    /// model's class order. `Ok(None)` means the model has no probability
    /// output.
    fn predict_proba(
        &self,
        record: &FeatureRecord,
    ) -> Result<Option<Vec<(i64, f64)>>, PredictError> {
        let _ = record;
        Ok(None)
    }
}
