use mindguard_core::models::scale::ScaleId;
use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("{scale_id}: {} invalid response(s): {}", .errors.len(), join_messages(.errors))]
    InvalidResponses {
        scale_id: ScaleId,
        errors: Vec<ValidationError>,
    },

    #[error("{scale_id} total {total} is outside [{min}, {max}]")]
    ScoreOutOfRange {
        scale_id: ScaleId,
        total: u32,
        min: u32,
        max: u32,
    },

    #[error("{0} has no severity bands")]
    NoSeverityBands(ScaleId),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
