use esg_maturity::assessment::{AssessmentEngine, ConfigurationError};
use esg_maturity::config::ScoringConfig;
use esg_maturity::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Standard rule tables with the configured weights and dimension scale.
pub(crate) fn build_engine(
    scoring: &ScoringConfig,
) -> Result<AssessmentEngine, ConfigurationError> {
    AssessmentEngine::new(scoring.engine_config())
}

/// Read a file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    Ok(std::fs::read_to_string(path)?)
}
