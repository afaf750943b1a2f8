use mindguard_core::error::CoreError;
use mindguard_report::error::ReportError;
use mindguard_scales::error::ScaleError;
use mindguard_scales::scoring::ValidationError;
use thiserror::Error;

/// Why a submission was rejected before any outcome was produced.
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid demographics: {0}")]
    Demographics(#[from] CoreError),

    #[error("{} invalid response(s): {}", .0.len(), join_messages(.0))]
    InvalidResponses(Vec<ValidationError>),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

impl AssessmentError {
    /// Every response problem across all scales, empty for other variants.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            AssessmentError::InvalidResponses(errors) => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' (expected {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Why one submission file produced no output.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to read submission: {0}")]
    Read(#[source] std::io::Error),

    #[error("submission is not valid JSON: {0}")]
    Parse(#[source] CoreError),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error(transparent)]
    Render(#[from] ReportError),

    #[error("failed to encode outcome: {0}")]
    Encode(#[from] serde_json::Error),
}
