use super::common::*;
use crate::evaluation::feedback::{analyze_feedback, PreparationPlan, PLAN_DAYS};
use crate::evaluation::{FeedbackTopic, PlanFocus};
use std::collections::HashSet;

#[test]
fn contrast_clause_separates_strengths_from_gaps() {
    let analysis = analyze_feedback(MIXED_FEEDBACK);

    assert_eq!(analysis.strengths, vec![FeedbackTopic::Communication]);
    assert_eq!(analysis.gaps, vec![FeedbackTopic::Sql]);
    assert_eq!(analysis.gap_labels(), vec!["SQL"]);
}

#[test]
fn detected_gap_takes_the_first_plan_day() {
    let analysis = analyze_feedback(MIXED_FEEDBACK);

    let entries = analysis.plan.entries();
    assert_eq!(entries[0], "Day 1: SQL mastery and database skills");
    assert_eq!(entries[1], "Day 2: Communication and fundamentals mastery");
    assert_eq!(entries.len(), PLAN_DAYS);
}

#[test]
fn topics_keep_order_of_first_mention() {
    let analysis = analyze_feedback(
        "Candidate demonstrated strong SQL skills, particularly with complex joins. \
         They showed good problem-solving abilities but could improve on explaining their \
         thought process and lacked depth in statistics and Python.",
    );

    assert_eq!(
        analysis.strengths,
        vec![FeedbackTopic::Sql, FeedbackTopic::ProblemSolving]
    );
    assert_eq!(
        analysis.gaps,
        vec![
            FeedbackTopic::Communication,
            FeedbackTopic::Statistics,
            FeedbackTopic::Python
        ]
    );
}

#[test]
fn negation_turns_praise_into_a_gap() {
    let analysis = analyze_feedback("Not confident with Tableau dashboards");

    assert!(analysis.strengths.is_empty());
    assert_eq!(
        analysis.gaps,
        vec![FeedbackTopic::Confidence, FeedbackTopic::BiTools]
    );
}

#[test]
fn neutral_mentions_are_ignored() {
    let analysis = analyze_feedback("We discussed SQL and Python projects.");

    assert!(analysis.strengths.is_empty());
    assert!(analysis.gaps.is_empty());
    assert_eq!(analysis.plan, PreparationPlan::standard());
}

#[test]
fn same_keywords_yield_identical_analysis() {
    let first = analyze_feedback("Weak SQL. Good communication!");
    let second = analyze_feedback("weak   sql;   GOOD Communication");

    assert_eq!(first, second);
}

#[test]
fn empty_feedback_yields_default_seven_day_plan() {
    let analysis = analyze_feedback("");

    assert!(analysis.strengths.is_empty());
    assert!(analysis.gaps.is_empty());
    let days = analysis.plan.days();
    assert_eq!(days.len(), PLAN_DAYS);
    assert_eq!(days[5].focus, PlanFocus::MockInterview);
    assert_eq!(days[6].focus, PlanFocus::ResumeAndConfidence);
}

#[test]
fn plan_days_are_numbered_one_to_seven_and_unique() {
    let inputs = [
        "",
        MIXED_FEEDBACK,
        "weak excel, poor tableau, lacks confidence, struggles with ml and statistics and python",
    ];

    for text in inputs {
        let plan = analyze_feedback(text).plan;
        let numbers: Vec<u8> = plan.days().iter().map(|day| day.day).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);

        let unique: HashSet<_> = plan.entries().into_iter().collect();
        assert_eq!(unique.len(), PLAN_DAYS, "duplicate day for {text:?}");
    }
}

#[test]
fn listed_skills_share_the_sentiment_of_their_sentence() {
    let gaps = analyze_feedback("Weak in SQL, Python and statistics").gaps;
    assert_eq!(
        gaps,
        vec![
            FeedbackTopic::Sql,
            FeedbackTopic::Python,
            FeedbackTopic::Statistics
        ]
    );

    let strengths = analyze_feedback("Good at Excel, SQL and Tableau").strengths;
    assert_eq!(
        strengths,
        vec![FeedbackTopic::Excel, FeedbackTopic::Sql, FeedbackTopic::BiTools]
    );
}

#[test]
fn while_keeps_the_clause_together() {
    let analysis = analyze_feedback("Struggled while writing SQL queries");

    assert_eq!(analysis.gaps, vec![FeedbackTopic::Sql]);
    assert!(analysis.strengths.is_empty());
}

#[test]
fn praised_improvement_reads_as_strength() {
    let praised = analyze_feedback("Showed great improvement in SQL");
    assert_eq!(praised.strengths, vec![FeedbackTopic::Sql]);
    assert!(praised.gaps.is_empty());

    let flagged = analyze_feedback("Python needs improvement");
    assert_eq!(flagged.gaps, vec![FeedbackTopic::Python]);
}
