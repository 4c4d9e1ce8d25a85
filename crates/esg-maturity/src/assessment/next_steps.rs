use std::cmp::Reverse;
use std::collections::HashSet;

use super::error::ConfigurationError;
use super::risks::Risk;
use super::scoring::MaturityLevel;

pub const DEFAULT_MAX_STEPS: usize = 6;
pub const DEFAULT_MIN_STEPS: usize = 3;

/// Generic actions for a maturity level, used when risks alone do not fill the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierGuidance {
    pub level: MaturityLevel,
    pub steps: Vec<&'static str>,
}

/// Ordering, capping and padding rules for recommended next steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStepPolicy {
    max_steps: usize,
    min_steps: usize,
    guidance: Vec<TierGuidance>,
}

impl NextStepPolicy {
    pub fn standard() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            min_steps: DEFAULT_MIN_STEPS,
            guidance: standard_guidance(),
        }
    }

    pub fn new(
        max_steps: usize,
        min_steps: usize,
        guidance: Vec<TierGuidance>,
    ) -> Result<Self, ConfigurationError> {
        let policy = Self {
            max_steps,
            min_steps,
            guidance,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn min_steps(&self) -> usize {
        self.min_steps
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_steps == 0 || self.min_steps > self.max_steps {
            return Err(ConfigurationError::InvalidNextStepLimits {
                min_steps: self.min_steps,
                max_steps: self.max_steps,
            });
        }

        for level in MaturityLevel::ordered() {
            let found = self
                .steps_for(level)
                .iter()
                .collect::<HashSet<_>>()
                .len();
            if found < self.min_steps {
                return Err(ConfigurationError::InsufficientGuidance {
                    level,
                    found,
                    required: self.min_steps,
                });
            }
        }

        Ok(())
    }

    pub fn steps_for(&self, level: MaturityLevel) -> &[&'static str] {
        self.guidance
            .iter()
            .find(|entry| entry.level == level)
            .map(|entry| entry.steps.as_slice())
            .unwrap_or(&[])
    }

    /// Regulatory findings first, then by severity; duplicates collapse to their first
    /// occurrence and the list is topped up with guidance for `level` up to the cap.
    pub fn recommend(&self, risks: &[Risk], level: MaturityLevel) -> Vec<String> {
        let mut prioritized: Vec<&Risk> = risks.iter().collect();
        prioritized.sort_by_key(|risk| (!risk.is_regulatory, Reverse(risk.severity)));

        let mut seen = HashSet::new();
        let mut steps = Vec::with_capacity(self.max_steps);
        let candidates = prioritized
            .into_iter()
            .map(|risk| risk.recommendation.as_str())
            .chain(self.steps_for(level).iter().copied());

        for step in candidates {
            if steps.len() == self.max_steps {
                break;
            }
            if seen.insert(step) {
                steps.push(step.to_string());
            }
        }

        steps
    }
}

impl Default for NextStepPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_guidance() -> Vec<TierGuidance> {
    vec![
        TierGuidance {
            level: MaturityLevel::Foundation,
            steps: vec![
                "Appoint an ESG owner and secure leadership sponsorship",
                "Establish a baseline ESG reporting framework",
                "Conduct an initial materiality assessment to prioritize ESG topics",
                "Begin collecting core environmental and workforce data",
            ],
        },
        TierGuidance {
            level: MaturityLevel::Developing,
            steps: vec![
                "Formalize ESG policies for the highest-priority topics",
                "Set measurable targets for material ESG topics",
                "Integrate ESG data collection into existing management systems",
                "Publish a first sustainability report",
            ],
        },
        TierGuidance {
            level: MaturityLevel::Established,
            steps: vec![
                "Align reporting with CSRD, ISSB or GRI standards",
                "Link ESG targets to management incentives",
                "Extend due diligence to key suppliers",
                "Obtain third-party assurance on key ESG metrics",
            ],
        },
        TierGuidance {
            level: MaturityLevel::Advanced,
            steps: vec![
                "Validate climate targets with the Science Based Targets initiative",
                "Pursue external assurance of the full ESG report",
                "Embed ESG criteria in capital allocation decisions",
                "Engage investors with a structured ESG performance narrative",
            ],
        },
        TierGuidance {
            level: MaturityLevel::Leading,
            steps: vec![
                "Maintain leadership through annual target reviews and independent assurance",
                "Share best practices through industry initiatives",
                "Explore ESG-linked financing instruments",
                "Benchmark performance against sector leaders",
            ],
        },
    ]
}
