mod maturity;

pub use maturity::{MaturityBand, MaturityLevel, MaturityRange, MaturityScale};

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentData, Dimension, DimensionResponses};
use super::error::{ConfigurationError, ValidationError};
use super::validation::{check_rating, MAX_RATING, MIN_RATING};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Relative weight of each dimension in the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl ScoringWeights {
    /// Simple mean of the three dimensions.
    pub fn equal() -> Self {
        Self {
            environmental: 1.0 / 3.0,
            social: 1.0 / 3.0,
            governance: 1.0 / 3.0,
        }
    }

    pub const fn new(environmental: f64, social: f64, governance: f64) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }

    pub const fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Environmental => self.environmental,
            Dimension::Social => self.social,
            Dimension::Governance => self.governance,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for dimension in Dimension::ordered() {
            let value = self.weight(dimension);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight {
                    dimension: dimension.label(),
                    value,
                });
            }
        }

        let sum = self.environmental + self.social + self.governance;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigurationError::WeightsDoNotSumToOne { sum });
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::equal()
    }
}

/// How the mean 1–5 rating of a dimension maps onto 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionScale {
    /// `(mean - 1) / 4 * 100`: all 1s score 0, all 5s score 100.
    #[default]
    Anchored,
    /// `mean / 5 * 100`: all 1s score 20, all 5s score 100.
    Proportional,
}

impl DimensionScale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "anchored" => Some(Self::Anchored),
            "proportional" => Some(Self::Proportional),
            _ => None,
        }
    }

    fn percent(self, mean: f64) -> f64 {
        match self {
            Self::Anchored => {
                (mean - MIN_RATING as f64) / (MAX_RATING - MIN_RATING) as f64 * 100.0
            }
            Self::Proportional => mean / MAX_RATING as f64 * 100.0,
        }
    }
}

/// Reduce the five ratings of a dimension to a 0–100 score. Fails on the first unanswered or
/// out-of-range rating instead of substituting a default.
pub fn score_dimension<R: DimensionResponses>(
    responses: &R,
    scale: DimensionScale,
) -> Result<u8, ValidationError> {
    let ratings = responses.ratings();
    let mut total: u32 = 0;
    for (topic, value) in ratings {
        total += check_rating(topic, value)? as u32;
    }

    let mean = total as f64 / ratings.len() as f64;
    Ok(scale.percent(mean).round().clamp(0.0, 100.0) as u8)
}

/// Scores of one evaluation. The maturity level is derived from `overall` when the value is
/// built and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScores {
    overall: u8,
    environmental: u8,
    social: u8,
    governance: u8,
    maturity_level: MaturityLevel,
}

impl AssessmentScores {
    pub fn overall(&self) -> u8 {
        self.overall
    }

    pub fn environmental(&self) -> u8 {
        self.environmental
    }

    pub fn social(&self) -> u8 {
        self.social
    }

    pub fn governance(&self) -> u8 {
        self.governance
    }

    pub fn maturity_level(&self) -> MaturityLevel {
        self.maturity_level
    }

    pub fn dimension(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Environmental => self.environmental,
            Dimension::Social => self.social,
            Dimension::Governance => self.governance,
        }
    }
}

/// Dimension scorer, aggregate scorer and maturity classifier bundled with their configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModel {
    weights: ScoringWeights,
    scale: DimensionScale,
    maturity: MaturityScale,
}

impl ScoringModel {
    pub fn new(
        weights: ScoringWeights,
        scale: DimensionScale,
        maturity: MaturityScale,
    ) -> Result<Self, ConfigurationError> {
        weights.validate()?;
        maturity.validate()?;
        Ok(Self {
            weights,
            scale,
            maturity,
        })
    }

    pub fn standard() -> Self {
        Self {
            weights: ScoringWeights::equal(),
            scale: DimensionScale::Anchored,
            maturity: MaturityScale::standard(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn dimension_scale(&self) -> DimensionScale {
        self.scale
    }

    pub fn maturity_scale(&self) -> &MaturityScale {
        &self.maturity
    }

    pub fn score(&self, data: &AssessmentData) -> Result<AssessmentScores, ValidationError> {
        let environmental = score_dimension(&data.environmental, self.scale)?;
        let social = score_dimension(&data.social, self.scale)?;
        let governance = score_dimension(&data.governance, self.scale)?;
        Ok(self.combine(environmental, social, governance))
    }

    /// Weighted overall score, rounded and clamped to 0–100.
    pub fn overall(&self, environmental: u8, social: u8, governance: u8) -> u8 {
        let weighted = self.weights.environmental * environmental as f64
            + self.weights.social * social as f64
            + self.weights.governance * governance as f64;
        weighted.round().clamp(0.0, 100.0) as u8
    }

    pub fn combine(&self, environmental: u8, social: u8, governance: u8) -> AssessmentScores {
        let overall = self.overall(environmental, social, governance);
        AssessmentScores {
            overall,
            environmental,
            social,
            governance,
            maturity_level: self.maturity.classify(overall),
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::standard()
    }
}
