//! Reshapes a [`CandidateEvaluation`](super::CandidateEvaluation) into the JSON the web UI
//! consumes.

mod activities;
mod formatter;
pub mod views;

pub use formatter::{
    requirements_view, DEFAULT_MATCH_SCORE, NO_GAPS_DETECTED, NO_STRENGTHS_DETECTED,
    ROLE_STRENGTH_THRESHOLD,
};
pub use views::EvaluationReport;
