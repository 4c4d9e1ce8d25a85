use crate::infra::build_engine;
use crate::report::render_text_report;
use clap::Args;
use esg_maturity::assessment::{
    AssessmentData, Certification, Certifications, CompanyProfile, EnvironmentalResponses,
    GovernanceResponses, MaturityResponses, SocialResponses,
};
use esg_maturity::config::ScoringConfig;
use esg_maturity::error::AppError;

const SAMPLE_COMPANY: &str = "Northwind Components";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the raw JSON result after the text report.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = build_engine(&ScoringConfig::default())?;
    let data = sample_assessment();
    let result = engine.evaluate(&data)?;

    println!(
        "Sample: {} ({}, {} employees, {}, {})",
        SAMPLE_COMPANY,
        data.company_profile.industry,
        data.company_profile.size,
        data.company_profile.geography,
        data.company_profile.ownership
    );
    println!();
    print!("{}", render_text_report(SAMPLE_COMPANY, &result));

    if args.json {
        println!("\n{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

/// A mid-sized EU manufacturer with a mix of gaps and strengths.
pub(crate) fn sample_assessment() -> AssessmentData {
    AssessmentData {
        company_profile: CompanyProfile {
            industry: "manufacturing".to_string(),
            size: "201-500".to_string(),
            revenue: "50m-100m".to_string(),
            geography: "eu".to_string(),
            ownership: "pe-backed".to_string(),
        },
        environmental: EnvironmentalResponses {
            ghg_tracking: 2,
            energy_management: 4,
            waste_reduction: 3,
            water_usage: 2,
            climate_strategy: 3,
        },
        social: SocialResponses {
            labor_practices: 4,
            health_safety: 3,
            diversity_inclusion: 2,
            supply_chain: 2,
            community_engagement: 3,
        },
        governance: GovernanceResponses {
            board_structure: 3,
            compliance_framework: 4,
            risk_management: 2,
            transparency: 3,
            ethics_code: 4,
        },
        maturity: MaturityResponses {
            esg_report: 2,
            certifications: Certifications::from_selection(vec![Certification::Iso14001]),
            esg_team: 3,
            stakeholder_engagement: 3,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_maturity::assessment::{AssessmentEngine, MaturityLevel, Severity};

    #[test]
    fn sample_assessment_is_valid_and_mixed() {
        let result = AssessmentEngine::standard()
            .evaluate(&sample_assessment())
            .expect("sample validates");

        assert_eq!(result.scores.environmental(), 45);
        assert_eq!(result.scores.social(), 45);
        assert_eq!(result.scores.governance(), 55);
        assert_eq!(result.scores.overall(), 48);
        assert_eq!(result.scores.maturity_level(), MaturityLevel::Developing);
        assert_eq!(result.risks[0].severity, Severity::High);
        assert_eq!(result.regulatory_risk_count(), 4);
        assert!(result
            .opportunities
            .iter()
            .any(|statement| statement.contains("ISO 14001 (Environmental Management)")));
        assert_eq!(result.next_steps.len(), 6);
    }

    #[test]
    fn demo_runs_without_error() {
        run_demo(DemoArgs { json: true }).expect("demo renders");
    }
}
