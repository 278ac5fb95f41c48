use super::vocabulary::{clauses, polarity, FeedbackTopic, Polarity};
use serde::Serialize;
use std::fmt;

pub const PLAN_DAYS: usize = 7;

/// Number of leading plan days that rotate through study topics.
const FOCUS_SLOTS: usize = 5;

const DEFAULT_ROTATION: [FeedbackTopic; FOCUS_SLOTS] = [
    FeedbackTopic::Communication,
    FeedbackTopic::Sql,
    FeedbackTopic::Python,
    FeedbackTopic::Statistics,
    FeedbackTopic::MachineLearning,
];

/// What a single preparation day concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFocus {
    Topic(FeedbackTopic),
    MockInterview,
    ResumeAndConfidence,
}

impl PlanFocus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Topic(FeedbackTopic::Communication) => "Communication and fundamentals mastery",
            Self::Topic(FeedbackTopic::Sql) => "SQL mastery and database skills",
            Self::Topic(FeedbackTopic::Python) => "Python and problem-solving mastery",
            Self::Topic(FeedbackTopic::Statistics) => "Statistics and probability mastery",
            Self::Topic(FeedbackTopic::MachineLearning) => "Machine learning and advanced skills",
            Self::Topic(FeedbackTopic::Excel) => "Excel modelling and data cleaning drills",
            Self::Topic(FeedbackTopic::BiTools) => "Dashboard building in Tableau and Power BI",
            Self::Topic(FeedbackTopic::ProblemSolving) => "Structured case and puzzle practice",
            Self::Topic(FeedbackTopic::Confidence) => "Self-introduction and confidence drills",
            Self::MockInterview => "Full mock interview (technical + HR)",
            Self::ResumeAndConfidence => "Resume refinement and confidence preparation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanDay {
    pub day: u8,
    pub focus: PlanFocus,
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.focus.label())
    }
}

/// Seven consecutive, distinct preparation days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparationPlan {
    days: Vec<PlanDay>,
}

impl PreparationPlan {
    /// Gap topics take the earliest focus slots in the order given; the default rotation fills
    /// whatever is left. The last two days are always the mock interview and resume review.
    pub fn for_gaps(gaps: &[FeedbackTopic]) -> Self {
        let mut topics: Vec<FeedbackTopic> = Vec::with_capacity(FOCUS_SLOTS);
        for topic in gaps.iter().chain(DEFAULT_ROTATION.iter()) {
            if topics.len() == FOCUS_SLOTS {
                break;
            }
            if !topics.contains(topic) {
                topics.push(*topic);
            }
        }

        let days = topics
            .into_iter()
            .map(PlanFocus::Topic)
            .chain([PlanFocus::MockInterview, PlanFocus::ResumeAndConfidence])
            .enumerate()
            .map(|(index, focus)| PlanDay {
                day: index as u8 + 1,
                focus,
            })
            .collect();

        Self { days }
    }

    pub fn standard() -> Self {
        Self::for_gaps(&[])
    }

    pub fn days(&self) -> &[PlanDay] {
        &self.days
    }

    /// Plan rendered as `Day N: <focus>` lines.
    pub fn entries(&self) -> Vec<String> {
        self.days.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackAnalysis {
    pub strengths: Vec<FeedbackTopic>,
    pub gaps: Vec<FeedbackTopic>,
    pub plan: PreparationPlan,
}

impl FeedbackAnalysis {
    pub fn strength_labels(&self) -> Vec<String> {
        self.strengths
            .iter()
            .map(|topic| topic.label().to_string())
            .collect()
    }

    pub fn gap_labels(&self) -> Vec<String> {
        self.gaps
            .iter()
            .map(|topic| topic.label().to_string())
            .collect()
    }
}

/// Classifies mentioned topics by the sentiment of the clause they appear in and derives the
/// preparation plan from the gaps found.
pub fn analyze_feedback(text: &str) -> FeedbackAnalysis {
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();

    for clause in clauses(text) {
        let target = match polarity(&clause) {
            Polarity::Negative => &mut gaps,
            Polarity::Positive => &mut strengths,
            Polarity::Neutral => continue,
        };

        let mut mentioned: Vec<(usize, FeedbackTopic)> = FeedbackTopic::ordered()
            .into_iter()
            .filter_map(|topic| topic.first_position(&clause).map(|pos| (pos, topic)))
            .collect();
        mentioned.sort_by_key(|(position, _)| *position);

        for (_, topic) in mentioned {
            if !target.contains(&topic) {
                target.push(topic);
            }
        }
    }

    let plan = PreparationPlan::for_gaps(&gaps);

    FeedbackAnalysis {
        strengths,
        gaps,
        plan,
    }
}
