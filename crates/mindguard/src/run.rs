//! Batch processing of submission files. Each file is independent: a bad
//! file is recorded as a failure and the rest are still assessed.

use std::path::{Path, PathBuf};

use mindguard_core::models::assessment::Submission;
use mindguard_predict::predictor::PredictorStatus;
use mindguard_report::render::{self, SUMMARY_TEMPLATE_NAME};
use tracing::{error, warn};

use crate::engine;
use crate::error::SubmissionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions<'a> {
    /// Print the outcome as JSON instead of the text summary.
    pub json: bool,
    /// Tera template replacing the built-in summary.
    pub template: Option<&'a str>,
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SubmissionError,
}

/// Outputs of the files that succeeded, in input order, plus every failure.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outputs: Vec<String>,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn run(
    paths: &[PathBuf],
    predictor: &PredictorStatus,
    options: RunOptions<'_>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for path in paths {
        match process_file(path, predictor, options) {
            Ok(output) => summary.outputs.push(output),
            Err(e) => {
                error!(path = %path.display(), error = %e, "submission failed");
                summary.failures.push(FileFailure {
                    path: path.clone(),
                    error: e,
                });
            }
        }
    }
    if !summary.succeeded() {
        warn!(
            failures = summary.failures.len(),
            "some submissions could not be assessed"
        );
    }
    summary
}

/// Assess one submission file and render its output.
pub fn process_file(
    path: &Path,
    predictor: &PredictorStatus,
    options: RunOptions<'_>,
) -> Result<String, SubmissionError> {
    let raw = std::fs::read_to_string(path).map_err(SubmissionError::Read)?;
    let submission = Submission::from_json(&raw).map_err(SubmissionError::Parse)?;

    let outcome = engine::assess(&submission, predictor)?;

    let output = if options.json {
        serde_json::to_string_pretty(&outcome)?
    } else {
        match options.template {
            Some(content) => render::render_template(SUMMARY_TEMPLATE_NAME, content, &outcome)?,
            None => render::render_summary(&outcome)?,
        }
    };
    Ok(output)
}
