use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{assessment_router, evaluate_handler, maturity_levels_handler};

fn post_assessment(body: Vec<u8>) -> Request<Body> {
    Request::post("/api/v1/assessments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_handler_returns_scored_result() {
    let response = evaluate_handler(
        State(Arc::new(engine())),
        axum::Json(exemplary_assessment()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["scores"]["overall"], 100);
    assert_eq!(payload["scores"]["maturityLevel"], "Leading");
    assert_eq!(payload["risks"], json!([]));
}

#[tokio::test]
async fn evaluate_handler_returns_unprocessable_with_field() {
    let mut data = exemplary_assessment();
    data.social.supply_chain = 0;

    let response = evaluate_handler(State(Arc::new(engine())), axum::Json(data)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["field"], "social.supplyChain");
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("social.supplyChain"));
}

#[tokio::test]
async fn assessment_route_serializes_risks_in_wire_format() {
    let router = assessment_router(Arc::new(engine()));
    let body = serde_json::to_vec(&uniform_assessment(1)).expect("serializable");

    let response = router
        .oneshot(post_assessment(body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let first = &payload["risks"][0];
    assert_eq!(first["category"], "Environmental");
    assert_eq!(first["type"], "GHG Emissions Disclosure");
    assert_eq!(first["severity"], "Critical");
    assert_eq!(first["isRegulatory"], true);
    assert_eq!(
        payload["nextSteps"].as_array().expect("next steps").len(),
        6
    );
}

#[tokio::test]
async fn assessment_route_accepts_questionnaire_field_names() {
    let router = assessment_router(Arc::new(engine()));
    let body = json!({
        "companyProfile": {
            "industry": "energy",
            "size": "201-500",
            "revenue": "50m-100m",
            "geography": "global",
            "ownership": "vc-backed"
        },
        "environmental": {
            "ghgTracking": 4, "energyManagement": 4, "wasteReduction": 3,
            "waterUsage": 3, "climateStrategy": 4
        },
        "social": {
            "laborPractices": 4, "healthSafety": 3, "diversityInclusion": 3,
            "supplyChain": 3, "communityEngagement": 3
        },
        "governance": {
            "boardStructure": 4, "complianceFramework": 4, "riskManagement": 3,
            "transparency": 4, "ethicsCode": 4
        },
        "maturity": {
            "hasESGReport": 3,
            "hasCertifications": ["ISO 14001 (Environmental Management)"],
            "hasESGTeam": 3,
            "stakeholderEngagement": 3
        }
    });

    let response = router
        .oneshot(post_assessment(serde_json::to_vec(&body).expect("json")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let types: Vec<&str> = payload["risks"]
        .as_array()
        .expect("risks")
        .iter()
        .filter_map(|risk| risk["type"].as_str())
        .collect();
    assert!(types.contains(&"High-Hazard Operations Safety"));
    assert!(types.contains(&"Investor Due Diligence Exposure"));
}

#[tokio::test]
async fn maturity_levels_route_lists_the_scale() {
    let router = assessment_router(Arc::new(engine()));

    let response = router
        .oneshot(
            Request::get("/api/v1/maturity-levels")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let levels = payload.as_array().expect("levels");
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["level"], "Foundation");
    assert_eq!(levels[0]["minScore"], 0);
    assert_eq!(levels[4]["level"], "Leading");
    assert_eq!(levels[4]["maxScore"], 100);
}

#[tokio::test]
async fn maturity_levels_handler_reads_engine_scale() {
    let axum::Json(ranges) = maturity_levels_handler(State(Arc::new(engine()))).await;

    assert_eq!(ranges.len(), 5);
    assert_eq!(ranges[2].min_score, 50);
    assert_eq!(ranges[2].max_score, 64);
}
