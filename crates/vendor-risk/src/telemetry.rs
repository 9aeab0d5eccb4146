use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Targets that follow the configured level. Everything else (hyper, tower,
/// the Prometheus exporter) stays at `warn` unless a full directive is given.
const SERVICE_TARGETS: [&str; 2] = ["vendor_risk", "vendor_risk_api"];

const BARE_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "APP_LOG_LEVEL '{}' is not a level or filter directive", value)
            }
            TelemetryError::Subscriber(err) => {
                write!(f, "risk service tracing subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Expand `APP_LOG_LEVEL`. A bare level applies to the risk service crates
/// only; anything else is passed through as an `EnvFilter` directive.
pub fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim().to_ascii_lowercase();
    if !BARE_LEVELS.contains(&level.as_str()) {
        return log_level.trim().to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        SERVICE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

fn configured_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(filter_directives(&config.log_level)).map_err(|source| {
        TelemetryError::EnvFilter {
            value: config.log_level.clone(),
            source,
        }
    })
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `APP_LOG_LEVEL`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn bare_level_is_scoped_to_service_crates() {
        assert_eq!(
            filter_directives(" DEBUG "),
            "warn,vendor_risk=debug,vendor_risk_api=debug"
        );
        assert!(configured_filter(&config("info")).is_ok());
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(
            filter_directives("vendor_risk::assessment=trace,tower=info"),
            "vendor_risk::assessment=trace,tower=info"
        );
    }

    #[test]
    fn malformed_directive_names_the_setting() {
        let error = configured_filter(&config("vendor_risk=loud")).expect_err("bad level");
        match &error {
            TelemetryError::EnvFilter { value, .. } => assert_eq!(value, "vendor_risk=loud"),
            other => panic!("expected filter error, got {other:?}"),
        }
        assert!(error.to_string().contains("APP_LOG_LEVEL"));
    }
}
