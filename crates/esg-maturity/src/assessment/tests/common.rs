use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    AssessmentData, Certifications, CompanyProfile, EnvironmentalResponses, GovernanceResponses,
    MaturityResponses, SocialResponses,
};
use crate::assessment::engine::AssessmentEngine;

/// Profile that sits outside every profile-scoped rule.
pub(super) fn neutral_profile() -> CompanyProfile {
    CompanyProfile {
        industry: "technology".to_string(),
        size: "51-200".to_string(),
        revenue: "10m-50m".to_string(),
        geography: "national".to_string(),
        ownership: "private".to_string(),
    }
}

pub(super) fn exposed_profile() -> CompanyProfile {
    CompanyProfile {
        industry: "manufacturing".to_string(),
        size: "1001+".to_string(),
        revenue: "500m+".to_string(),
        geography: "eu".to_string(),
        ownership: "public".to_string(),
    }
}

pub(super) fn uniform_assessment(rating: u8) -> AssessmentData {
    AssessmentData {
        company_profile: neutral_profile(),
        environmental: EnvironmentalResponses {
            ghg_tracking: rating,
            energy_management: rating,
            waste_reduction: rating,
            water_usage: rating,
            climate_strategy: rating,
        },
        social: SocialResponses {
            labor_practices: rating,
            health_safety: rating,
            diversity_inclusion: rating,
            supply_chain: rating,
            community_engagement: rating,
        },
        governance: GovernanceResponses {
            board_structure: rating,
            compliance_framework: rating,
            risk_management: rating,
            transparency: rating,
            ethics_code: rating,
        },
        maturity: MaturityResponses {
            esg_report: rating,
            certifications: Certifications::new(),
            esg_team: rating,
            stakeholder_engagement: rating,
        },
    }
}

/// Every rating at 5 and every certification held.
pub(super) fn exemplary_assessment() -> AssessmentData {
    let mut data = uniform_assessment(5);
    data.maturity.certifications = Certifications::all_held();
    data
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
