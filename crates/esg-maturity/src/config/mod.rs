use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::{DimensionScale, EngineConfig, ScoringWeights};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => {
                LogFormat::from_str(&value).ok_or(ConfigError::InvalidLogFormat { value })?
            }
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Scoring overrides. Weights are only parsed here; the engine validates their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub dimension_scale: DimensionScale,
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = ScoringWeights::equal();
        let weights = ScoringWeights::new(
            weight_from_env("ESG_WEIGHT_ENVIRONMENTAL", defaults.environmental)?,
            weight_from_env("ESG_WEIGHT_SOCIAL", defaults.social)?,
            weight_from_env("ESG_WEIGHT_GOVERNANCE", defaults.governance)?,
        );

        let dimension_scale = match env::var("ESG_DIMENSION_SCALE") {
            Ok(value) => DimensionScale::from_code(&value)
                .ok_or(ConfigError::InvalidDimensionScale { value })?,
            Err(_) => DimensionScale::default(),
        };

        Ok(Self {
            weights,
            dimension_scale,
        })
    }

    /// Default engine tables with these overrides applied.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::standard()
            .with_weights(self.weights)
            .with_dimension_scale(self.dimension_scale)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::equal(),
            dimension_scale: DimensionScale::default(),
        }
    }
}

fn weight_from_env(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidWeight { var, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat { value: String },
    InvalidWeight { var: &'static str, value: String },
    InvalidDimensionScale { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat { value } => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (found '{value}')")
            }
            ConfigError::InvalidWeight { var, value } => {
                write!(f, "{var} must be a decimal number (found '{value}')")
            }
            ConfigError::InvalidDimensionScale { value } => write!(
                f,
                "ESG_DIMENSION_SCALE must be 'anchored' or 'proportional' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat { .. }
            | ConfigError::InvalidWeight { .. }
            | ConfigError::InvalidDimensionScale { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for var in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_FORMAT",
            "ESG_WEIGHT_ENVIRONMENTAL",
            "ESG_WEIGHT_SOCIAL",
            "ESG_WEIGHT_GOVERNANCE",
            "ESG_DIMENSION_SCALE",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Compact);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_scoring_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_WEIGHT_ENVIRONMENTAL", "0.5");
        env::set_var("ESG_WEIGHT_SOCIAL", "0.25");
        env::set_var("ESG_WEIGHT_GOVERNANCE", "0.25");
        env::set_var("ESG_DIMENSION_SCALE", "Proportional");
        env::set_var("APP_LOG_FORMAT", "json");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.scoring.weights, ScoringWeights::new(0.5, 0.25, 0.25));
        assert_eq!(config.scoring.dimension_scale, DimensionScale::Proportional);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_WEIGHT_SOCIAL", "a third");

        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidWeight {
                var: "ESG_WEIGHT_SOCIAL",
                value,
            }) => assert_eq!(value, "a third"),
            other => panic!("expected invalid weight, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_dimension_scale() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ESG_DIMENSION_SCALE", "logarithmic");

        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidDimensionScale { value }) => assert_eq!(value, "logarithmic"),
            other => panic!("expected invalid dimension scale, got {other:?}"),
        }
    }
}
