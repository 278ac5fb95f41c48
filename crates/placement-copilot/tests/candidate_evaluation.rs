use placement_copilot::evaluation::actions::{
    BUILD_PORTFOLIO, COMPLETE_PLAN, MOCK_INTERVIEW_AFTER_PLAN,
};
use placement_copilot::evaluation::{
    CandidateEvaluator, EvaluationReport, FeedbackTopic, ReadinessStatus, Skill, SkillScoreSet,
};

fn scores(values: [i64; 6]) -> SkillScoreSet {
    SkillScoreSet::from_scores(values).expect("valid scores")
}

#[test]
fn mixed_candidate_is_almost_ready_for_business_analysis() {
    let evaluator = CandidateEvaluator::standard();

    let evaluation = evaluator.evaluate(
        scores([80, 75, 60, 50, 40, 70]),
        "good communication but weak in SQL",
    );

    assert_eq!(evaluation.readiness.status, ReadinessStatus::AlmostReady);
    assert!((evaluation.readiness.final_score - 64.75).abs() < 1e-9);
    assert!(evaluation.roles.is_recommended("Business Analyst"));
    assert_eq!(
        evaluation.roles.missing_for("BI Analyst"),
        Some(&[Skill::Sql, Skill::BiTools, Skill::Statistics][..])
    );
    assert_eq!(evaluation.feedback.strengths, vec![FeedbackTopic::Communication]);
    assert_eq!(evaluation.feedback.gaps, vec![FeedbackTopic::Sql]);
    assert_eq!(evaluation.feedback.plan.days().len(), 7);
    assert_eq!(
        evaluation.actions,
        vec![
            "Target roles: Business Analyst".to_string(),
            COMPLETE_PLAN.to_string(),
            MOCK_INTERVIEW_AFTER_PLAN.to_string(),
        ]
    );
}

#[test]
fn identical_inputs_serialize_identically() {
    let evaluator = CandidateEvaluator::standard();
    let render = || {
        let evaluation = evaluator.evaluate(
            scores([65, 72, 58, 61, 49, 77]),
            "Strong SQL, however the statistics answers were weak. Good confidence!",
        );
        serde_json::to_string(&EvaluationReport::from_evaluation(
            &evaluation,
            evaluator.roles(),
        ))
        .expect("report serializes")
    };

    let first = render();
    assert_eq!(first, render());
    assert_eq!(first, render());
}

#[test]
fn raising_a_score_never_lowers_readiness() {
    let evaluator = CandidateEvaluator::standard();
    let base = scores([48, 52, 47, 55, 40, 50]);

    for skill in Skill::ordered() {
        let mut previous = evaluator.evaluate(base, "").readiness;
        let start = i64::from(base.get(skill));
        for value in (start + 5..=100).step_by(5) {
            let raised = base.with_score(skill, value).expect("score in range");
            let current = evaluator.evaluate(raised, "").readiness;
            assert!(
                current.final_score >= previous.final_score,
                "{skill:?} at {value} lowered the score"
            );
            assert!(current.status >= previous.status, "{skill:?} at {value} regressed");
            previous = current;
        }
    }
}

#[test]
fn empty_feedback_still_produces_a_full_plan() {
    let evaluator = CandidateEvaluator::standard();

    let evaluation = evaluator.evaluate(scores([90; 6]), "");

    assert_eq!(evaluation.readiness.status, ReadinessStatus::Ready);
    assert!(evaluation.feedback.strengths.is_empty());
    assert!(evaluation.feedback.gaps.is_empty());
    assert_eq!(evaluation.feedback.plan.days().len(), 7);
    assert!(!evaluation.actions.iter().any(|action| action == BUILD_PORTFOLIO));
}

#[test]
fn boundary_scores_classify_inclusively() {
    let evaluator = CandidateEvaluator::standard();

    assert_eq!(
        evaluator.evaluate(scores([70; 6]), "").readiness.status,
        ReadinessStatus::Ready
    );
    assert_eq!(
        evaluator.evaluate(scores([50; 6]), "").readiness.status,
        ReadinessStatus::AlmostReady
    );
    assert_eq!(
        evaluator.evaluate(scores([0; 6]), "").readiness.status,
        ReadinessStatus::NotReady
    );
}
