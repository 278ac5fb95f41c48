use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::domain::InputError;
use super::report::{requirements_view, views::RoleRequirementView, EvaluationReport};
use super::request::EvaluationRequest;
use super::rules::SkillWeightTable;
use super::CandidateEvaluator;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub(crate) struct SkillWeightsResponse {
    success: bool,
    skill_weights: SkillWeightTable,
}

/// Router builder exposing the evaluation API and its read-only reference data.
pub fn evaluation_router(evaluator: Arc<CandidateEvaluator>) -> Router {
    Router::new()
        .route("/api/evaluate", post(evaluate_handler))
        .route("/api/requirements", get(requirements_handler))
        .route("/api/skill-weights", get(skill_weights_handler))
        .with_state(evaluator)
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<CandidateEvaluator>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationReport>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| InputError::MalformedRequest(rejection.body_text()))?;
    let scores = request.scores()?;

    let evaluation = evaluator.evaluate(scores, request.feedback());
    Ok(Json(EvaluationReport::from_evaluation(
        &evaluation,
        evaluator.roles(),
    )))
}

pub(crate) async fn requirements_handler(
    State(evaluator): State<Arc<CandidateEvaluator>>,
) -> Json<Vec<RoleRequirementView>> {
    Json(requirements_view(evaluator.roles()))
}

pub(crate) async fn skill_weights_handler() -> Json<SkillWeightsResponse> {
    Json(SkillWeightsResponse {
        success: true,
        skill_weights: SkillWeightTable,
    })
}
