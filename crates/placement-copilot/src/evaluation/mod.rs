//! Candidate evaluation: readiness scoring, role matching, feedback analysis, and next actions.

pub mod actions;
pub mod batch;
pub mod domain;
pub mod feedback;
pub mod readiness;
pub mod recommender;
pub mod report;
pub mod request;
pub mod router;
pub mod rules;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use batch::{CandidateBatchImporter, CandidateImportError, CandidateRecord};
pub use domain::{
    InputError, ReadinessResult, ReadinessStatus, RejectedRole, RoleDecision, Skill,
    SkillScoreSet,
};
pub use feedback::{FeedbackAnalysis, PlanDay, PlanFocus, PreparationPlan};
pub use report::EvaluationReport;
pub use request::EvaluationRequest;
pub use router::evaluation_router;
pub use rules::{RoleRequirement, ROLE_REQUIREMENTS};
pub use vocabulary::FeedbackTopic;

use serde::Serialize;
use tracing::debug;

/// Stateless evaluator that runs every rule stage against one candidate.
#[derive(Debug, Clone, Copy)]
pub struct CandidateEvaluator {
    roles: &'static [RoleRequirement],
}

impl CandidateEvaluator {
    pub fn new(roles: &'static [RoleRequirement]) -> Self {
        Self { roles }
    }

    /// Evaluator backed by the built-in role table.
    pub fn standard() -> Self {
        Self::new(ROLE_REQUIREMENTS)
    }

    pub fn roles(&self) -> &'static [RoleRequirement] {
        self.roles
    }

    pub fn evaluate(&self, scores: SkillScoreSet, feedback_text: &str) -> CandidateEvaluation {
        let readiness = readiness::evaluate_readiness(&scores, feedback_text);
        let roles = recommender::recommend_roles(&scores, self.roles);
        let feedback = feedback::analyze_feedback(feedback_text);
        let actions = actions::generate_next_actions(&readiness, &roles.recommended);

        debug!(
            status = readiness.status.label(),
            final_score = readiness.final_score,
            recommended = roles.recommended.len(),
            gaps = feedback.gaps.len(),
            "candidate evaluated"
        );

        CandidateEvaluation {
            scores,
            readiness,
            roles,
            feedback,
            actions,
        }
    }
}

impl Default for CandidateEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything produced for one candidate before it is shaped for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateEvaluation {
    pub scores: SkillScoreSet,
    pub readiness: ReadinessResult,
    pub roles: RoleDecision,
    pub feedback: FeedbackAnalysis,
    pub actions: Vec<String>,
}
