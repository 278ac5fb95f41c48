//! Static, read-only rule tables shared by every evaluation.

mod roles;
mod scoring;

pub use roles::{role_requirement, RoleRequirement, ROLE_REQUIREMENTS};
pub use scoring::{
    improvement_hint, weight, SkillBand, SkillWeightTable, ALMOST_READY_CUTOFF, FEEDBACK_DELTA,
    READY_CUTOFF, SKILL_BASELINE, SKILL_WEIGHTS,
};
