use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::AssessmentData;
use super::engine::AssessmentEngine;
use super::scoring::MaturityRange;

/// Router exposing assessment evaluation and the maturity scale.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(evaluate_handler))
        .route("/api/v1/maturity-levels", get(maturity_levels_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(data): Json<AssessmentData>,
) -> Response {
    match engine.evaluate(&data) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn maturity_levels_handler(
    State(engine): State<Arc<AssessmentEngine>>,
) -> Json<Vec<MaturityRange>> {
    Json(engine.maturity_scale().ranges())
}
