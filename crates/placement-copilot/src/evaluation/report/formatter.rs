use super::super::domain::{RoleDecision, SkillScoreSet};
use super::super::feedback::{FeedbackAnalysis, PreparationPlan};
use super::super::rules::{RoleRequirement, SkillBand};
use super::super::CandidateEvaluation;
use super::activities::activities_for;
use super::views::{
    ActionSummaryView, EvaluationReport, FeedbackAnalysisView, NotRecommendedRoleView,
    PreparationDayView, ReadinessView, RecommendedRoleView, RequirementEntryView, RoleGapView,
    RoleRequirementView, RoleSuitabilityView, SkillBreakdownEntry, SkillGapView,
};

/// Match score shown for every recommended role; roles are pass/fail, not ranked.
pub const DEFAULT_MATCH_SCORE: u8 = 85;

/// Skills at or above this score are listed as strengths on recommended roles.
pub const ROLE_STRENGTH_THRESHOLD: u8 = 70;

pub const NO_STRENGTHS_DETECTED: &str = "Basic understanding of core concepts";
pub const NO_GAPS_DETECTED: &str = "No major technical gaps identified";

impl EvaluationReport {
    pub fn from_evaluation(evaluation: &CandidateEvaluation, roles: &[RoleRequirement]) -> Self {
        let readiness = &evaluation.readiness;

        Self {
            readiness: ReadinessView {
                status: readiness.status.label(),
                score: readiness.final_score.clamp(0.0, 100.0).trunc() as u8,
                reasoning: readiness.reasons.clone(),
                improvements: readiness.suggestions.clone(),
                skill_breakdown: skill_breakdown(&evaluation.scores),
            },
            role_suitability: role_suitability(&evaluation.roles, &evaluation.scores),
            feedback_analysis: feedback_view(&evaluation.feedback),
            preparation_plan: preparation_days(&evaluation.feedback.plan),
            action_summary: ActionSummaryView {
                priority: readiness.status.priority_label(),
                recommendation: readiness.status.placement_recommendation(),
                action_items: evaluation.actions.clone(),
            },
            gap_analysis: gap_analysis(&evaluation.roles, &evaluation.scores, roles),
            candidate_scores: evaluation.scores,
        }
    }
}

fn skill_breakdown(scores: &SkillScoreSet) -> Vec<SkillBreakdownEntry> {
    scores
        .iter()
        .map(|(skill, score)| SkillBreakdownEntry {
            skill: skill.label(),
            score,
            status: SkillBand::from_score(score).label(),
        })
        .collect()
}

fn role_suitability(decision: &RoleDecision, scores: &SkillScoreSet) -> RoleSuitabilityView {
    let strengths: Vec<String> = scores
        .iter()
        .filter(|(_, score)| *score >= ROLE_STRENGTH_THRESHOLD)
        .map(|(skill, _)| format!("Strong {}", skill.label()))
        .collect();

    RoleSuitabilityView {
        recommended: decision
            .recommended
            .iter()
            .map(|role| RecommendedRoleView {
                role: *role,
                match_score: DEFAULT_MATCH_SCORE,
                strengths: strengths.clone(),
            })
            .collect(),
        not_recommended: decision
            .rejected
            .iter()
            .map(|entry| NotRecommendedRoleView {
                role: entry.role,
                gaps: entry.missing.iter().map(|skill| skill.label()).collect(),
            })
            .collect(),
    }
}

fn feedback_view(analysis: &FeedbackAnalysis) -> FeedbackAnalysisView {
    let mut strengths = analysis.strength_labels();
    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS_DETECTED.to_string());
    }

    let mut areas_to_improve = analysis.gap_labels();
    if areas_to_improve.is_empty() {
        areas_to_improve.push(NO_GAPS_DETECTED.to_string());
    }

    FeedbackAnalysisView {
        strengths,
        areas_to_improve,
    }
}

fn preparation_days(plan: &PreparationPlan) -> Vec<PreparationDayView> {
    let mut days: Vec<PreparationDayView> = plan
        .days()
        .iter()
        .map(|day| PreparationDayView {
            day: day.day,
            focus: day.focus.label(),
            activities: activities_for(day.focus).to_vec(),
        })
        .collect();
    days.sort_by_key(|day| day.day);
    days
}

/// Per-skill distance to each rejected role's minimums. Roles missing from `roles` are skipped.
fn gap_analysis(
    decision: &RoleDecision,
    scores: &SkillScoreSet,
    roles: &[RoleRequirement],
) -> Vec<RoleGapView> {
    decision
        .rejected
        .iter()
        .filter_map(|entry| {
            let requirement = roles.iter().find(|role| role.role == entry.role)?;
            let gaps: Vec<SkillGapView> = entry
                .missing
                .iter()
                .filter_map(|skill| {
                    let required_score = requirement.minimum_for(*skill)?;
                    let candidate_score = scores.get(*skill);
                    Some(SkillGapView {
                        skill: skill.label(),
                        candidate_score,
                        required_score,
                        gap: required_score.saturating_sub(candidate_score),
                    })
                })
                .collect();

            if gaps.is_empty() {
                return None;
            }

            let total_gap = gaps.iter().map(|gap| u32::from(gap.gap)).sum();
            Some(RoleGapView {
                role: entry.role,
                gaps,
                total_gap,
            })
        })
        .collect()
}

/// Role table in the shape served by `GET /api/requirements`.
pub fn requirements_view(roles: &[RoleRequirement]) -> Vec<RoleRequirementView> {
    roles
        .iter()
        .map(|requirement| RoleRequirementView {
            role: requirement.role,
            description: requirement.description,
            requirements: requirement
                .minimums
                .iter()
                .map(|(skill, minimum)| RequirementEntryView {
                    skill: skill.display_name(),
                    minimum: *minimum,
                })
                .collect(),
        })
        .collect()
}
