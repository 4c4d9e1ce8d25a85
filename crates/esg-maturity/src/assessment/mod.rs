//! ESG questionnaire scoring, risk identification, and recommendation engine.
//!
//! [`AssessmentEngine::evaluate`] is the single entry point: it validates a submission, scores
//! the three dimensions, classifies maturity, and derives risks, opportunities, and next steps
//! from declarative rule tables. The engine performs no I/O and keeps no state between calls.

pub mod batch;
pub mod domain;
mod engine;
mod error;
pub mod next_steps;
pub mod opportunities;
pub mod risks;
pub mod router;
pub mod scoring;
mod validation;

#[cfg(test)]
mod tests;

pub use batch::{
    evaluate_portfolio, write_portfolio_summary, BatchImportError, PortfolioEntry,
    PortfolioImporter, PortfolioOutcome,
};
pub use domain::{
    AssessmentData, Certification, Certifications, CompanyProfile, CompanySize, Dimension,
    DimensionResponses, EnvironmentalResponses, Geography, GovernanceResponses, Industry,
    MaturityResponses, Ownership, RevenueBand, Section, SocialResponses, Topic,
};
pub use engine::{AssessmentEngine, AssessmentResult, EngineConfig};
pub use error::{AssessmentError, ConfigurationError, ValidationError};
pub use next_steps::{NextStepPolicy, TierGuidance};
pub use opportunities::{OpportunityRule, OpportunityRulebook, OpportunitySignal};
pub use risks::{Risk, RiskRule, RiskRulebook, Severity};
pub use router::assessment_router;
pub use scoring::{
    score_dimension, AssessmentScores, DimensionScale, MaturityLevel, MaturityRange,
    MaturityScale, ScoringModel, ScoringWeights,
};
pub use validation::validate;
