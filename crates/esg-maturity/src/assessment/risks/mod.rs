mod rules;

pub use rules::{Criticality, ProfileScope, RiskRule, RiskTrigger, SeverityRule};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentData, Dimension};
use super::error::ConfigurationError;
use rules::standard_risk_rules;

/// Totally ordered severity: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Finding emitted by a risk rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub category: Dimension,
    #[serde(rename = "type")]
    pub risk_type: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    pub is_regulatory: bool,
}

/// Immutable table of risk rules evaluated in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRulebook {
    rules: Vec<RiskRule>,
}

impl RiskRulebook {
    pub fn standard() -> Self {
        Self {
            rules: standard_risk_rules(),
        }
    }

    pub fn new(rules: Vec<RiskRule>) -> Result<Self, ConfigurationError> {
        let rulebook = Self { rules };
        rulebook.validate()?;
        Ok(rulebook)
    }

    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id) {
                return Err(ConfigurationError::DuplicateRule { id: rule.id });
            }

            match rule.trigger.threshold() {
                Some(threshold) if !(2..=5).contains(&threshold) => {
                    return Err(ConfigurationError::InvalidThreshold {
                        id: rule.id,
                        threshold,
                    });
                }
                None if matches!(rule.severity, SeverityRule::Banded(_)) => {
                    return Err(ConfigurationError::BandedSeverityWithoutRating { id: rule.id });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Evaluate every rule against a validated submission. Findings are ordered by severity,
    /// most severe first; rules of equal severity keep their declaration order.
    pub fn identify(&self, data: &AssessmentData) -> Vec<Risk> {
        let mut risks: Vec<Risk> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let activation = rule.trigger.activation(data)?;
                Some(Risk {
                    category: rule.category,
                    risk_type: rule.risk_type.to_string(),
                    severity: rule.severity.resolve(activation),
                    description: rule.description.to_string(),
                    recommendation: rule.recommendation.to_string(),
                    is_regulatory: rule.regulatory,
                })
            })
            .collect();

        risks.sort_by(|left, right| right.severity.cmp(&left.severity));
        risks
    }
}

impl Default for RiskRulebook {
    fn default() -> Self {
        Self::standard()
    }
}
