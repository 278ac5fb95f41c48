use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const MAX_SCORE: u8 = 100;

/// The fixed set of skills a candidate self-reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Excel")]
    Excel,
    #[serde(rename = "SQL")]
    Sql,
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = "Statistics & Probability")]
    Statistics,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Tableau & Power BI")]
    BiTools,
}

impl Skill {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Excel,
            Self::Sql,
            Self::Python,
            Self::Statistics,
            Self::MachineLearning,
            Self::BiTools,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excel => "Excel",
            Self::Sql => "SQL",
            Self::Python => "Python",
            Self::Statistics => "Statistics & Probability",
            Self::MachineLearning => "Machine Learning",
            Self::BiTools => "Tableau & Power BI",
        }
    }

    /// Shorter name used by the requirements listing.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Statistics => "Statistics",
            Self::BiTools => "BI Tools",
            other => other.label(),
        }
    }

    /// Field name carried by evaluation requests and batch files.
    pub const fn request_key(self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Sql => "sql",
            Self::Python => "python",
            Self::Statistics => "stats",
            Self::MachineLearning => "ml",
            Self::BiTools => "bi",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("score for {skill} must be between 0 and 100 (found {value})")]
    ScoreOutOfRange { skill: &'static str, value: i64 },
    #[error("malformed evaluation request: {0}")]
    MalformedRequest(String),
}

/// Validated self-reported scores, one per [`Skill`], each within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillScoreSet {
    scores: [u8; Skill::COUNT],
}

impl SkillScoreSet {
    /// Builds a score set from raw values given in [`Skill::ordered`] order.
    pub fn from_scores(raw: [i64; Skill::COUNT]) -> Result<Self, InputError> {
        let mut scores = [0u8; Skill::COUNT];
        for (skill, value) in Skill::ordered().into_iter().zip(raw) {
            scores[skill.index()] = validate(skill, value)?;
        }
        Ok(Self { scores })
    }

    pub fn get(&self, skill: Skill) -> u8 {
        self.scores[skill.index()]
    }

    /// Returns a copy with one score replaced.
    pub fn with_score(&self, skill: Skill, value: i64) -> Result<Self, InputError> {
        let mut next = *self;
        next.scores[skill.index()] = validate(skill, value)?;
        Ok(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, u8)> + '_ {
        Skill::ordered()
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }
}

fn validate(skill: Skill, value: i64) -> Result<u8, InputError> {
    if (0..=i64::from(MAX_SCORE)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(InputError::ScoreOutOfRange {
            skill: skill.label(),
            value,
        })
    }
}

impl Serialize for SkillScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Skill::COUNT))?;
        for (skill, score) in self.iter() {
            map.serialize_entry(skill.label(), &score)?;
        }
        map.end()
    }
}

/// Overall hiring-readiness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessStatus {
    #[serde(rename = "Not Ready")]
    NotReady,
    #[serde(rename = "Almost Ready")]
    AlmostReady,
    #[serde(rename = "Ready")]
    Ready,
}

impl ReadinessStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::AlmostReady => "Almost Ready",
            Self::NotReady => "Not Ready",
        }
    }

    pub const fn priority_label(self) -> &'static str {
        match self {
            Self::Ready => "High",
            Self::AlmostReady => "Medium",
            Self::NotReady => "Low",
        }
    }

    pub const fn placement_recommendation(self) -> &'static str {
        match self {
            Self::Ready => {
                "Candidate is ready for placement. Schedule final interviews with partner companies."
            }
            Self::AlmostReady => {
                "Candidate shows promise. Recommend 2-week intensive training before placement."
            }
            Self::NotReady => {
                "Candidate needs foundational work. Enroll in 4-week bootcamp program."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessResult {
    pub status: ReadinessStatus,
    pub final_score: f64,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRole {
    pub role: &'static str,
    pub missing: Vec<Skill>,
}

/// Partition of the role table into roles whose minimums are all met and roles with shortfalls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleDecision {
    pub recommended: Vec<&'static str>,
    pub rejected: Vec<RejectedRole>,
}

impl RoleDecision {
    pub fn is_recommended(&self, role: &str) -> bool {
        self.recommended.iter().any(|candidate| *candidate == role)
    }

    pub fn missing_for(&self, role: &str) -> Option<&[Skill]> {
        self.rejected
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.missing.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_set_rejects_values_above_one_hundred() {
        let err = SkillScoreSet::from_scores([80, 75, 101, 50, 40, 70]).expect_err("out of range");
        assert_eq!(
            err,
            InputError::ScoreOutOfRange {
                skill: "Python",
                value: 101
            }
        );
    }

    #[test]
    fn score_set_rejects_negative_values() {
        assert!(SkillScoreSet::from_scores([-1, 0, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn score_set_serializes_in_skill_order() {
        let scores = SkillScoreSet::from_scores([1, 2, 3, 4, 5, 6]).expect("valid scores");
        let json = serde_json::to_string(&scores).expect("serializes");
        assert_eq!(
            json,
            r#"{"Excel":1,"SQL":2,"Python":3,"Statistics & Probability":4,"Machine Learning":5,"Tableau & Power BI":6}"#
        );
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&ReadinessStatus::AlmostReady).expect("serializes");
        assert_eq!(json, "\"Almost Ready\"");
        assert!(ReadinessStatus::Ready > ReadinessStatus::AlmostReady);
        assert!(ReadinessStatus::AlmostReady > ReadinessStatus::NotReady);
    }
}
