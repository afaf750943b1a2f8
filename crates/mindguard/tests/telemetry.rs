use mindguard::config::{LogFormat, TelemetryConfig};
use mindguard::error::TelemetryError;
use mindguard::telemetry;

#[test]
fn bad_level_is_rejected_then_valid_config_installs() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    let err = telemetry::init(&TelemetryConfig {
        log_level: "mindguard=loud".into(),
        log_format: LogFormat::Text,
    })
    .unwrap_err();
    match err {
        TelemetryError::EnvFilter { value, .. } => assert_eq!(value, "mindguard=loud"),
        other => panic!("expected filter error, got {other}"),
    }

    telemetry::init(&TelemetryConfig {
        log_level: "info".into(),
        log_format: LogFormat::Text,
    })
    .unwrap();
}
