use super::scoring::MaturityLevel;

/// Rejection of a submission that is not ready to be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("company profile field '{field}' is required")]
    MissingProfileField { field: &'static str },
    #[error("rating '{field}' has not been answered")]
    UnansweredRating { field: String },
    #[error("rating '{field}' must be between 1 and 5 (found {value})")]
    RatingOutOfRange { field: String, value: u8 },
    #[error("certification selection is inconsistent: 'None' cannot be combined with other certifications or repeated entries")]
    ConflictingCertifications,
}

impl ValidationError {
    /// Dotted path of the offending field in the submitted payload.
    pub fn field(&self) -> String {
        match self {
            ValidationError::MissingProfileField { field } => format!("companyProfile.{field}"),
            ValidationError::UnansweredRating { field }
            | ValidationError::RatingOutOfRange { field, .. } => field.clone(),
            ValidationError::ConflictingCertifications => {
                "maturity.hasCertifications".to_string()
            }
        }
    }
}

/// Malformed engine configuration; fatal before any evaluation is served.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("dimension weight for {dimension} must be a finite, non-negative number (found {value})")]
    InvalidWeight { dimension: &'static str, value: f64 },
    #[error("dimension weights must sum to 1 (found {sum})")]
    WeightsDoNotSumToOne { sum: f64 },
    #[error("maturity scale is empty")]
    EmptyMaturityScale,
    #[error("maturity scale must start at 0 (first floor is {floor})")]
    MaturityScaleStart { floor: u8 },
    #[error("maturity floor {floor} for {level:?} must be above the previous floor and at most 100")]
    MaturityFloorOrder { level: MaturityLevel, floor: u8 },
    #[error("maturity scale must list every level once in ascending order (problem at {level:?})")]
    MaturityLevelOrder { level: MaturityLevel },
    #[error("maturity scale is missing {level:?}")]
    MissingMaturityLevel { level: MaturityLevel },
    #[error("rule id '{id}' is declared more than once")]
    DuplicateRule { id: &'static str },
    #[error("rule '{id}' threshold {threshold} must be between 2 and 5")]
    InvalidThreshold { id: &'static str, threshold: u8 },
    #[error("rule '{id}' derives severity from a rating but its trigger has none")]
    BandedSeverityWithoutRating { id: &'static str },
    #[error("opportunity rule '{id}' threshold {threshold} is outside its scale")]
    InvalidOpportunityThreshold { id: &'static str, threshold: u8 },
    #[error("next-step limits are invalid (min {min_steps}, max {max_steps})")]
    InvalidNextStepLimits { min_steps: usize, max_steps: usize },
    #[error("next-step guidance for {level:?} has {found} distinct steps, at least {required} required")]
    InsufficientGuidance {
        level: MaturityLevel,
        found: usize,
        required: usize,
    },
}

/// Umbrella error for callers that surface both construction and evaluation failures.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
