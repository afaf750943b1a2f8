use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};
use crate::error::TelemetryError;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Logs go to stderr, colored only when it is a terminal.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    match config.log_format {
        LogFormat::Json => builder
            .json()
            .with_target(false)
            .with_current_span(false)
            .try_init(),
        LogFormat::Text => builder.with_target(false).compact().try_init(),
    }
    .map_err(TelemetryError::Subscriber)
}
