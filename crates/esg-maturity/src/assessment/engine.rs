use serde::Serialize;
use tracing::{debug, warn};

use super::domain::AssessmentData;
use super::error::{ConfigurationError, ValidationError};
use super::next_steps::NextStepPolicy;
use super::opportunities::OpportunityRulebook;
use super::risks::{Risk, RiskRulebook};
use super::scoring::{
    AssessmentScores, DimensionScale, MaturityScale, ScoringModel, ScoringWeights,
};
use super::validation::validate;

/// Everything the engine needs, validated as a whole by [`AssessmentEngine::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub dimension_scale: DimensionScale,
    pub maturity_scale: MaturityScale,
    pub risk_rules: RiskRulebook,
    pub opportunity_rules: OpportunityRulebook,
    pub next_steps: NextStepPolicy,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self {
            weights: ScoringWeights::equal(),
            dimension_scale: DimensionScale::Anchored,
            maturity_scale: MaturityScale::standard(),
            risk_rules: RiskRulebook::standard(),
            opportunity_rules: OpportunityRulebook::standard(),
            next_steps: NextStepPolicy::standard(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_dimension_scale(mut self, scale: DimensionScale) -> Self {
        self.dimension_scale = scale;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Engine output, pre-ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub scores: AssessmentScores,
    pub risks: Vec<Risk>,
    pub opportunities: Vec<String>,
    pub next_steps: Vec<String>,
}

impl AssessmentResult {
    pub fn regulatory_risk_count(&self) -> usize {
        self.risks.iter().filter(|risk| risk.is_regulatory).count()
    }
}

/// Stateless facade composing the scorer, rulebooks, and next-step policy.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    scoring: ScoringModel,
    risk_rules: RiskRulebook,
    opportunity_rules: OpportunityRulebook,
    next_steps: NextStepPolicy,
}

impl AssessmentEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigurationError> {
        let EngineConfig {
            weights,
            dimension_scale,
            maturity_scale,
            risk_rules,
            opportunity_rules,
            next_steps,
        } = config;

        let scoring = ScoringModel::new(weights, dimension_scale, maturity_scale)?;
        risk_rules.validate()?;
        opportunity_rules.validate()?;
        next_steps.validate()?;

        Ok(Self {
            scoring,
            risk_rules,
            opportunity_rules,
            next_steps,
        })
    }

    /// Engine built from the documented default tables.
    pub fn standard() -> Self {
        Self {
            scoring: ScoringModel::standard(),
            risk_rules: RiskRulebook::standard(),
            opportunity_rules: OpportunityRulebook::standard(),
            next_steps: NextStepPolicy::standard(),
        }
    }

    pub fn scoring(&self) -> &ScoringModel {
        &self.scoring
    }

    pub fn maturity_scale(&self) -> &MaturityScale {
        self.scoring.maturity_scale()
    }

    /// Score a submission and derive its risks, opportunities and next steps. Nothing is
    /// computed unless the whole submission validates.
    pub fn evaluate(&self, data: &AssessmentData) -> Result<AssessmentResult, ValidationError> {
        if let Err(error) = validate(data) {
            warn!(field = %error.field(), %error, "assessment rejected");
            return Err(error);
        }

        let scores = self.scoring.score(data)?;
        let risks = self.risk_rules.identify(data);
        let opportunities = self.opportunity_rules.generate(data, &scores);
        let next_steps = self.next_steps.recommend(&risks, scores.maturity_level());

        let result = AssessmentResult {
            scores,
            risks,
            opportunities,
            next_steps,
        };

        debug!(
            overall = result.scores.overall(),
            maturity = result.scores.maturity_level().label(),
            risks = result.risks.len(),
            regulatory = result.regulatory_risk_count(),
            "assessment evaluated"
        );

        Ok(result)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}
