use axum::response::Response;
use serde_json::{json, Value};

use crate::evaluation::{CandidateEvaluator, SkillScoreSet};

pub(super) const MIXED_FEEDBACK: &str = "good communication but weak in SQL";

/// Excel 80, SQL 75, Python 60, Statistics 50, ML 40, BI 70.
pub(super) fn sample_scores() -> SkillScoreSet {
    SkillScoreSet::from_scores([80, 75, 60, 50, 40, 70]).expect("valid sample scores")
}

pub(super) fn uniform_scores(value: i64) -> SkillScoreSet {
    SkillScoreSet::from_scores([value; 6]).expect("valid uniform scores")
}

pub(super) fn evaluator() -> CandidateEvaluator {
    CandidateEvaluator::standard()
}

pub(super) fn sample_request_body() -> Value {
    json!({
        "excel": 80,
        "sql": 75,
        "python": 60,
        "stats": 50,
        "ml": 40,
        "bi": 70,
        "feedback": MIXED_FEEDBACK,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
