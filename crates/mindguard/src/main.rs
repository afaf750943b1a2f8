use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use mindguard::config::Config;
use mindguard::run::{RunOptions, run};
use mindguard::telemetry;
use mindguard_predict::predictor::PredictorStatus;

#[derive(Parser, Debug)]
#[command(
    name = "mindguard",
    about = "Score mental-health questionnaires and estimate overall risk",
    version
)]
struct Cli {
    /// Print each outcome as JSON instead of the text summary
    #[arg(long)]
    json: bool,
    /// Submission files to assess, processed independently
    #[arg(required = true)]
    submissions: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::from_env()?;
    telemetry::init(&config.telemetry)?;

    let template = match &config.summary_template {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read summary template {}", path.display()))?,
        ),
        None => None,
    };

    let predictor = PredictorStatus::load(&config.model_path);
    tracing::info!(
        model_path = %config.model_path.display(),
        ml_ready = predictor.is_ready(),
        submissions = cli.submissions.len(),
        "starting assessment run"
    );

    let summary = run(
        &cli.submissions,
        &predictor,
        RunOptions {
            json: cli.json,
            template: template.as_deref(),
        },
    );

    for output in &summary.outputs {
        println!("{output}");
    }
    for failure in &summary.failures {
        eprintln!("{}: {}", failure.path.display(), failure.error);
    }

    if summary.succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
