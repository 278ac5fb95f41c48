use super::domain::{ReadinessResult, ReadinessStatus, SkillScoreSet};
use super::rules::{
    improvement_hint, weight, ALMOST_READY_CUTOFF, FEEDBACK_DELTA, READY_CUTOFF, SKILL_BASELINE,
};
use super::vocabulary::{contains_any, NEGATIVE_MARKERS, POSITIVE_MARKERS};

/// Weighted mean of the skill scores using the static weight table.
pub fn weighted_score(scores: &SkillScoreSet) -> f64 {
    let (total, weights) = scores
        .iter()
        .fold((0.0, 0.0), |(total, weights), (skill, score)| {
            let w = weight(skill);
            (total + f64::from(score) * w, weights + w)
        });

    if weights > 0.0 {
        total / weights
    } else {
        0.0
    }
}

pub fn classify(score: f64) -> ReadinessStatus {
    if score >= READY_CUTOFF {
        ReadinessStatus::Ready
    } else if score >= ALMOST_READY_CUTOFF {
        ReadinessStatus::AlmostReady
    } else {
        ReadinessStatus::NotReady
    }
}

pub fn evaluate_readiness(scores: &SkillScoreSet, feedback: &str) -> ReadinessResult {
    let weighted = weighted_score(scores);
    let lowered = feedback.to_lowercase();
    let positive = contains_any(&lowered, POSITIVE_MARKERS);
    let negative = contains_any(&lowered, NEGATIVE_MARKERS);

    let mut adjustment = 0.0;
    if positive {
        adjustment += FEEDBACK_DELTA;
    }
    if negative {
        adjustment -= FEEDBACK_DELTA;
    }

    let final_score = round_hundredths((weighted + adjustment).clamp(0.0, 100.0));
    let status = classify(final_score);

    let mut reasons = vec![format!("Weighted skill score is {weighted:.2}")];
    match (positive, negative) {
        (true, true) => reasons.push(
            "Interview feedback is mixed; positive and negative signals offset each other"
                .to_string(),
        ),
        (true, false) => reasons.push(format!(
            "Positive interview feedback adds {FEEDBACK_DELTA:.0} points"
        )),
        (false, true) => reasons.push(format!(
            "Concerns raised in interview feedback remove {FEEDBACK_DELTA:.0} points"
        )),
        (false, false) => {}
    }

    let mut suggestions = Vec::new();
    let shortfalls: Vec<_> = scores
        .iter()
        .filter(|(_, score)| *score < SKILL_BASELINE)
        .collect();

    for (skill, score) in &shortfalls {
        reasons.push(format!(
            "{} score of {} is below the {} baseline",
            skill.label(),
            score,
            SKILL_BASELINE
        ));
        suggestions.push(improvement_hint(*skill).to_string());
    }

    if shortfalls.is_empty() {
        reasons.push(format!(
            "All core skills meet the {SKILL_BASELINE} baseline"
        ));
    }

    if negative {
        suggestions.push(
            "Address the concerns raised in interview feedback with targeted practice".to_string(),
        );
    }

    if suggestions.is_empty() {
        let closing = match status {
            ReadinessStatus::Ready => {
                "Maintain skills with regular practice and mock interviews".to_string()
            }
            _ => format!(
                "Raise the strongest-weighted skills to push the score past {READY_CUTOFF:.0}"
            ),
        };
        suggestions.push(closing);
    }

    ReadinessResult {
        status,
        final_score,
        reasons,
        suggestions,
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
