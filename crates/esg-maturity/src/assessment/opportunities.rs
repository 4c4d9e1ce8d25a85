use std::collections::HashSet;

use super::domain::{AssessmentData, Certification, Dimension, Topic};
use super::error::ConfigurationError;
use super::scoring::{AssessmentScores, MaturityLevel};

const CERTIFICATIONS_PLACEHOLDER: &str = "{certifications}";

/// Positive signal that makes an opportunity statement applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunitySignal {
    RatingAtLeast { topic: Topic, threshold: u8 },
    DimensionAtLeast { dimension: Dimension, score: u8 },
    TierAtLeast(MaturityLevel),
    /// At least one real certification held. The statement may reference `{certifications}`.
    CertificationsHeld,
}

impl OpportunitySignal {
    fn holds(&self, data: &AssessmentData, scores: &AssessmentScores) -> bool {
        match self {
            OpportunitySignal::RatingAtLeast { topic, threshold } => {
                data.rating(*topic) >= *threshold
            }
            OpportunitySignal::DimensionAtLeast { dimension, score } => {
                scores.dimension(*dimension) >= *score
            }
            OpportunitySignal::TierAtLeast(level) => scores.maturity_level() >= *level,
            OpportunitySignal::CertificationsHeld => data.maturity.certifications.holds_any(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityRule {
    pub id: &'static str,
    pub signal: OpportunitySignal,
    pub statement: &'static str,
}

/// Table of strength signals, independent of the risk rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityRulebook {
    rules: Vec<OpportunityRule>,
}

impl OpportunityRulebook {
    pub fn standard() -> Self {
        Self {
            rules: standard_opportunity_rules(),
        }
    }

    pub fn new(rules: Vec<OpportunityRule>) -> Result<Self, ConfigurationError> {
        let rulebook = Self { rules };
        rulebook.validate()?;
        Ok(rulebook)
    }

    pub fn rules(&self) -> &[OpportunityRule] {
        &self.rules
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id) {
                return Err(ConfigurationError::DuplicateRule { id: rule.id });
            }

            let out_of_scale = match rule.signal {
                OpportunitySignal::RatingAtLeast { threshold, .. } => {
                    Some(threshold).filter(|value| !(1..=5).contains(value))
                }
                OpportunitySignal::DimensionAtLeast { score, .. } => {
                    Some(score).filter(|value| *value > 100)
                }
                _ => None,
            };
            if let Some(threshold) = out_of_scale {
                return Err(ConfigurationError::InvalidOpportunityThreshold {
                    id: rule.id,
                    threshold,
                });
            }
        }
        Ok(())
    }

    /// Statements for every signal present, in declaration order.
    pub fn generate(&self, data: &AssessmentData, scores: &AssessmentScores) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.signal.holds(data, scores))
            .map(|rule| render(rule.statement, data))
            .collect()
    }
}

impl Default for OpportunityRulebook {
    fn default() -> Self {
        Self::standard()
    }
}

fn render(statement: &str, data: &AssessmentData) -> String {
    if !statement.contains(CERTIFICATIONS_PLACEHOLDER) {
        return statement.to_string();
    }

    let held: Vec<&'static str> = data
        .maturity
        .certifications
        .held()
        .map(Certification::label)
        .collect();
    statement.replace(CERTIFICATIONS_PLACEHOLDER, &held.join(", "))
}

fn standard_opportunity_rules() -> Vec<OpportunityRule> {
    vec![
        OpportunityRule {
            id: "ghg-tracking",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::GhgTracking,
                threshold: 4,
            },
            statement: "Mature emissions tracking positions the company to meet CSRD and ISSB climate disclosure ahead of peers",
        },
        OpportunityRule {
            id: "climate-strategy",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::ClimateStrategy,
                threshold: 4,
            },
            statement: "A credible climate transition strategy can unlock green financing and sustainability-linked loans",
        },
        OpportunityRule {
            id: "energy-management",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::EnergyManagement,
                threshold: 4,
            },
            statement: "Energy efficiency and renewable sourcing can be quantified as cost savings in the investment case",
        },
        OpportunityRule {
            id: "environmental-leadership",
            signal: OpportunitySignal::DimensionAtLeast {
                dimension: Dimension::Environmental,
                score: 75,
            },
            statement: "Environmental performance is strong enough to support a differentiated sustainability positioning with customers",
        },
        OpportunityRule {
            id: "health-safety",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::HealthSafety,
                threshold: 4,
            },
            statement: "A strong safety culture reduces insurance costs and supports an ISO 45001 certification path",
        },
        OpportunityRule {
            id: "labor-practices",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::LaborPractices,
                threshold: 4,
            },
            statement: "Leading labor practices strengthen the employer brand and talent retention",
        },
        OpportunityRule {
            id: "supply-chain",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::SupplyChain,
                threshold: 4,
            },
            statement: "Supply chain due diligence capability is a differentiator in enterprise procurement and ahead of CSDDD obligations",
        },
        OpportunityRule {
            id: "diversity-inclusion",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::DiversityInclusion,
                threshold: 4,
            },
            statement: "A structured DEI strategy can be showcased to investors and in talent acquisition",
        },
        OpportunityRule {
            id: "board-structure",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::BoardStructure,
                threshold: 4,
            },
            statement: "Board-level ESG oversight signals governance quality to investors and lenders",
        },
        OpportunityRule {
            id: "compliance-framework",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::ComplianceFramework,
                threshold: 4,
            },
            statement: "An integrated compliance system can absorb new ESG regulation with limited incremental cost",
        },
        OpportunityRule {
            id: "transparency",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::Transparency,
                threshold: 4,
            },
            statement: "Transparent reporting can improve ESG ratings and access to sustainability-focused capital",
        },
        OpportunityRule {
            id: "esg-reporting",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::EsgReport,
                threshold: 4,
            },
            statement: "Existing ESG reporting can be leveraged for investor communications and rating agency submissions",
        },
        OpportunityRule {
            id: "stakeholder-engagement",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::StakeholderEngagement,
                threshold: 4,
            },
            statement: "Systematic stakeholder engagement provides a ready foundation for double materiality assessment",
        },
        OpportunityRule {
            id: "certifications",
            signal: OpportunitySignal::CertificationsHeld,
            statement: "Held certifications ({certifications}) provide third-party credibility that can be highlighted in tenders and investor materials",
        },
        OpportunityRule {
            id: "overall-leadership",
            signal: OpportunitySignal::TierAtLeast(MaturityLevel::Advanced),
            statement: "Overall ESG maturity supports access to ESG-linked financing and positioning as a sector benchmark",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rulebook_is_valid() {
        assert_eq!(OpportunityRulebook::standard().validate(), Ok(()));
    }

    #[test]
    fn rejects_rating_threshold_outside_the_scale() {
        let rules = vec![OpportunityRule {
            id: "impossible",
            signal: OpportunitySignal::RatingAtLeast {
                topic: Topic::Transparency,
                threshold: 6,
            },
            statement: "never shown",
        }];

        match OpportunityRulebook::new(rules) {
            Err(ConfigurationError::InvalidOpportunityThreshold {
                id: "impossible",
                threshold: 6,
            }) => {}
            other => panic!("expected invalid threshold, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let rule = OpportunityRule {
            id: "tier",
            signal: OpportunitySignal::TierAtLeast(MaturityLevel::Leading),
            statement: "leader",
        };

        match OpportunityRulebook::new(vec![rule.clone(), rule]) {
            Err(ConfigurationError::DuplicateRule { id: "tier" }) => {}
            other => panic!("expected duplicate rule, got {other:?}"),
        }
    }
}
