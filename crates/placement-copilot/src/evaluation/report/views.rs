use super::super::domain::SkillScoreSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBreakdownEntry {
    pub skill: &'static str,
    pub score: u8,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessView {
    pub status: &'static str,
    pub score: u8,
    pub reasoning: Vec<String>,
    pub improvements: Vec<String>,
    pub skill_breakdown: Vec<SkillBreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedRoleView {
    pub role: &'static str,
    pub match_score: u8,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotRecommendedRoleView {
    pub role: &'static str,
    pub gaps: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSuitabilityView {
    pub recommended: Vec<RecommendedRoleView>,
    pub not_recommended: Vec<NotRecommendedRoleView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalysisView {
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationDayView {
    pub day: u8,
    pub focus: &'static str,
    pub activities: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummaryView {
    pub priority: &'static str,
    pub recommendation: &'static str,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapView {
    pub skill: &'static str,
    pub candidate_score: u8,
    pub required_score: u8,
    pub gap: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGapView {
    pub role: &'static str,
    pub gaps: Vec<SkillGapView>,
    pub total_gap: u32,
}

/// Complete evaluation payload in the shape the web UI renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub readiness: ReadinessView,
    pub role_suitability: RoleSuitabilityView,
    pub feedback_analysis: FeedbackAnalysisView,
    pub preparation_plan: Vec<PreparationDayView>,
    pub action_summary: ActionSummaryView,
    pub gap_analysis: Vec<RoleGapView>,
    pub candidate_scores: SkillScoreSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementEntryView {
    pub skill: &'static str,
    pub minimum: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRequirementView {
    pub role: &'static str,
    pub description: &'static str,
    pub requirements: Vec<RequirementEntryView>,
}
