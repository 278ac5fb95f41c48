use super::super::feedback::PlanFocus;
use super::super::vocabulary::FeedbackTopic;

const MOCK_INTERVIEW: &[&str] = &[
    "Review technical concepts and coding problems",
    "Practice STAR method for behavioral questions",
    "Prepare questions to ask the interviewer",
    "Set up interview environment and test equipment",
    "Review your projects and be ready to explain them",
];

const SQL: &[&str] = &[
    "Practice complex joins and subqueries",
    "Work on query optimization techniques",
    "Solve SQL problems on LeetCode/HackerRank",
    "Build a mini-project using SQL",
];

const PYTHON: &[&str] = &[
    "Solve data structures and algorithms problems",
    "Practice debugging and code review",
    "Work on Python-specific projects",
    "Review Python best practices and patterns",
];

const COMMUNICATION: &[&str] = &[
    "Practice explaining technical concepts clearly",
    "Record yourself and review for improvement",
    "Practice STAR method storytelling",
    "Work on clarity and structure in explanations",
];

const STATISTICS: &[&str] = &[
    "Review core statistical concepts",
    "Practice probability problems",
    "Work on case studies and analysis",
    "Apply statistics to real-world scenarios",
];

const MACHINE_LEARNING: &[&str] = &[
    "Review ML algorithms and concepts",
    "Work on a mini ML project",
    "Practice model evaluation techniques",
    "Study real-world ML applications",
];

const RESUME: &[&str] = &[
    "Update resume with recent projects",
    "Prepare portfolio and GitHub profile",
    "Practice confidence-building exercises",
    "Review and refine your preparation",
];

const GENERAL: &[&str] = &[
    "Review core concepts related to today's focus",
    "Practice hands-on exercises and problems",
    "Apply learning through mini-projects",
    "Document progress and plan next steps",
];

/// Concrete study activities for a plan day.
pub(crate) fn activities_for(focus: PlanFocus) -> &'static [&'static str] {
    match focus {
        PlanFocus::MockInterview => MOCK_INTERVIEW,
        PlanFocus::ResumeAndConfidence | PlanFocus::Topic(FeedbackTopic::Confidence) => RESUME,
        PlanFocus::Topic(FeedbackTopic::Sql) => SQL,
        PlanFocus::Topic(FeedbackTopic::Python | FeedbackTopic::ProblemSolving) => PYTHON,
        PlanFocus::Topic(FeedbackTopic::Communication) => COMMUNICATION,
        PlanFocus::Topic(FeedbackTopic::Statistics) => STATISTICS,
        PlanFocus::Topic(FeedbackTopic::MachineLearning) => MACHINE_LEARNING,
        PlanFocus::Topic(FeedbackTopic::Excel | FeedbackTopic::BiTools) => GENERAL,
    }
}
