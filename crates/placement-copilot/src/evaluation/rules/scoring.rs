use super::super::domain::Skill;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Relative importance of each skill in the weighted readiness score.
pub const SKILL_WEIGHTS: [(Skill, f64); Skill::COUNT] = [
    (Skill::Excel, 0.15),
    (Skill::Sql, 0.25),
    (Skill::Python, 0.20),
    (Skill::Statistics, 0.15),
    (Skill::MachineLearning, 0.10),
    (Skill::BiTools, 0.15),
];

/// Scores below this produce a readiness reason and an improvement suggestion.
pub const SKILL_BASELINE: u8 = 60;

pub const READY_CUTOFF: f64 = 70.0;
pub const ALMOST_READY_CUTOFF: f64 = 50.0;

/// Fixed adjustment applied once per sentiment direction found in feedback.
pub const FEEDBACK_DELTA: f64 = 5.0;

pub fn weight(skill: Skill) -> f64 {
    SKILL_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == skill)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillBand {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl SkillBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Improvement hint offered when a skill sits below [`SKILL_BASELINE`].
pub const fn improvement_hint(skill: Skill) -> &'static str {
    match skill {
        Skill::Excel => "Practice pivot tables, lookups and data cleaning in Excel",
        Skill::Sql => "Practice joins, subqueries and window functions in SQL",
        Skill::Python => "Strengthen Python with pandas exercises and small data projects",
        Skill::Statistics => "Revise probability, distributions and hypothesis testing",
        Skill::MachineLearning => "Build and evaluate a small supervised learning model end to end",
        Skill::BiTools => "Build an interactive dashboard in Tableau or Power BI",
    }
}

/// Serializes the weight table as an ordered `skill -> weight` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillWeightTable;

impl Serialize for SkillWeightTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SKILL_WEIGHTS.len()))?;
        for (skill, weight) in SKILL_WEIGHTS {
            map.serialize_entry(skill.label(), &weight)?;
        }
        map.end()
    }
}
