//! ESG maturity scoring engine with its configuration, telemetry and application error stack.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
