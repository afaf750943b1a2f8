use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const MODEL_PATH_VAR: &str = "MINDGUARD_MODEL_PATH";
pub const LOG_LEVEL_VAR: &str = "MINDGUARD_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "MINDGUARD_LOG_FORMAT";
pub const SUMMARY_TEMPLATE_VAR: &str = "MINDGUARD_SUMMARY_TEMPLATE";

pub const DEFAULT_MODEL_PATH: &str = "models/risk_model.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output shape of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: LOG_FORMAT_VAR,
                value: value.to_string(),
                expected: "text or json",
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model_path: PathBuf,
    /// Replaces the built-in summary template when set.
    pub summary_template: Option<PathBuf>,
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_path = get(MODEL_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let summary_template = get(SUMMARY_TEMPLATE_VAR).map(PathBuf::from);
        let log_level = get(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = match get(LOG_FORMAT_VAR) {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            model_path,
            summary_template,
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
        })
    }
}
