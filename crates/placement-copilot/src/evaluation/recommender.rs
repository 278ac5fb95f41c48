use super::domain::{RejectedRole, RoleDecision, SkillScoreSet};
use super::rules::RoleRequirement;

/// Splits `roles` into those whose every minimum is met and those with unmet skills, keeping
/// table order in both lists.
pub fn recommend_roles(scores: &SkillScoreSet, roles: &[RoleRequirement]) -> RoleDecision {
    let mut decision = RoleDecision::default();

    for requirement in roles {
        let missing = requirement.unmet(scores);
        if missing.is_empty() {
            decision.recommended.push(requirement.role);
        } else {
            decision.rejected.push(RejectedRole {
                role: requirement.role,
                missing,
            });
        }
    }

    decision
}
