use super::common::*;
use crate::evaluation::readiness::{classify, evaluate_readiness, weighted_score};
use crate::evaluation::ReadinessStatus;

#[test]
fn weighted_score_matches_weight_table() {
    let score = weighted_score(&sample_scores());

    // 80*.15 + 75*.25 + 60*.20 + 50*.15 + 40*.10 + 70*.15
    assert!((score - 64.75).abs() < 1e-9, "unexpected weighted score {score}");
}

#[test]
fn mixed_feedback_cancels_out() {
    let result = evaluate_readiness(&sample_scores(), MIXED_FEEDBACK);

    assert_eq!(result.status, ReadinessStatus::AlmostReady);
    assert_eq!(result.final_score, 64.75);
    assert!(result.reasons.iter().any(|reason| reason.contains("mixed")));
}

#[test]
fn positive_feedback_raises_score_by_fixed_delta() {
    let neutral = evaluate_readiness(&uniform_scores(66), "");
    let positive = evaluate_readiness(&uniform_scores(66), "Strong and confident answers");

    assert_eq!(neutral.final_score, 66.0);
    assert_eq!(positive.final_score, 71.0);
    assert_eq!(neutral.status, ReadinessStatus::AlmostReady);
    assert_eq!(positive.status, ReadinessStatus::Ready);
}

#[test]
fn negative_feedback_lowers_score_and_adds_suggestion() {
    let result = evaluate_readiness(&uniform_scores(52), "Struggled with joins");

    assert_eq!(result.final_score, 47.0);
    assert_eq!(result.status, ReadinessStatus::NotReady);
    assert!(result
        .suggestions
        .iter()
        .any(|suggestion| suggestion.contains("interview feedback")));
}

#[test]
fn shortfall_skills_produce_reasons_and_suggestions() {
    let result = evaluate_readiness(&sample_scores(), "");

    let shortfalls: Vec<_> = result
        .reasons
        .iter()
        .filter(|reason| reason.contains("below the 60 baseline"))
        .collect();
    assert_eq!(shortfalls.len(), 2);
    assert!(shortfalls[0].starts_with("Statistics & Probability score of 50"));
    assert!(shortfalls[1].starts_with("Machine Learning score of 40"));
    assert_eq!(result.suggestions.len(), 2);
}

#[test]
fn strong_profile_without_feedback_is_ready() {
    let result = evaluate_readiness(&uniform_scores(85), "");

    assert_eq!(result.status, ReadinessStatus::Ready);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("All core skills meet")));
    assert_eq!(result.suggestions.len(), 1);
}

#[test]
fn empty_feedback_still_yields_status() {
    let result = evaluate_readiness(&uniform_scores(0), "");

    assert_eq!(result.status, ReadinessStatus::NotReady);
    assert_eq!(result.final_score, 0.0);
    assert!(!result.reasons.is_empty());
    assert!(!result.suggestions.is_empty());
}

#[test]
fn status_is_non_decreasing_in_score() {
    let mut previous = classify(0.0);
    for tenth in 0..=1000 {
        let status = classify(f64::from(tenth) / 10.0);
        assert!(status >= previous, "status dropped at {}", tenth);
        previous = status;
    }
}
