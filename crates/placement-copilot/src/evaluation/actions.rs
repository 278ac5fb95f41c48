use super::domain::{ReadinessResult, ReadinessStatus};

pub const TARGET_ROLES_PREFIX: &str = "Target roles: ";
pub const FINAL_INTERVIEWS: &str = "Schedule final interviews with partner companies";
pub const UPDATE_RESUME: &str = "Update resume with recent projects";
pub const MOCK_INTERVIEW_AFTER_PLAN: &str = "Schedule mock interview after 7 days";
pub const BUILD_PORTFOLIO: &str = "Build GitHub portfolio";
pub const COMPLETE_PLAN: &str = "Complete the 7-day preparation plan";
pub const PRACTICE_MOCK_INTERVIEWS: &str = "Practice mock interviews";
pub const DELAY_PLACEMENT: &str = "Delay placements and focus on skill improvement";
pub const ENROLL_BOOTCAMP: &str = "Enroll in a 4-week foundational bootcamp";

/// Next steps keyed by readiness status and whether any role was recommended.
pub fn generate_next_actions(readiness: &ReadinessResult, recommended: &[&str]) -> Vec<String> {
    let target_roles = (!recommended.is_empty())
        .then(|| format!("{TARGET_ROLES_PREFIX}{}", recommended.join(", ")));

    let mut actions: Vec<String> = Vec::with_capacity(3);
    match (readiness.status, target_roles) {
        (ReadinessStatus::Ready, Some(targets)) => {
            actions.push(targets);
            actions.push(FINAL_INTERVIEWS.to_string());
            actions.push(UPDATE_RESUME.to_string());
        }
        (ReadinessStatus::Ready, None) => {
            actions.push(MOCK_INTERVIEW_AFTER_PLAN.to_string());
            actions.push(BUILD_PORTFOLIO.to_string());
            actions.push(UPDATE_RESUME.to_string());
        }
        (ReadinessStatus::AlmostReady, Some(targets)) => {
            actions.push(targets);
            actions.push(COMPLETE_PLAN.to_string());
            actions.push(MOCK_INTERVIEW_AFTER_PLAN.to_string());
        }
        (ReadinessStatus::AlmostReady, None) => {
            actions.push(COMPLETE_PLAN.to_string());
            actions.push(PRACTICE_MOCK_INTERVIEWS.to_string());
            actions.push(BUILD_PORTFOLIO.to_string());
        }
        (ReadinessStatus::NotReady, _) => {
            actions.push(DELAY_PLACEMENT.to_string());
            actions.push(COMPLETE_PLAN.to_string());
            actions.push(ENROLL_BOOTCAMP.to_string());
        }
    }

    actions
}
