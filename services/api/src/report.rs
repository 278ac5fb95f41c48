use clap::Args;
use placement_copilot::error::AppError;
use placement_copilot::evaluation::report::requirements_view;
use placement_copilot::evaluation::{
    CandidateBatchImporter, CandidateEvaluation, CandidateEvaluator, EvaluationReport,
    SkillScoreSet,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Excel score (0-100)
    #[arg(long)]
    pub(crate) excel: i64,
    /// SQL score (0-100)
    #[arg(long)]
    pub(crate) sql: i64,
    /// Python score (0-100)
    #[arg(long)]
    pub(crate) python: i64,
    /// Statistics & probability score (0-100)
    #[arg(long)]
    pub(crate) stats: i64,
    /// Machine learning score (0-100)
    #[arg(long)]
    pub(crate) ml: i64,
    /// Tableau / Power BI score (0-100)
    #[arg(long)]
    pub(crate) bi: i64,
    /// Free-text interviewer feedback
    #[arg(long)]
    pub(crate) feedback: Option<String>,
    /// Print the UI-shaped JSON report instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RequirementsArgs {
    /// Print the requirements table as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with excel, sql, python, stats, ml, bi and optional candidate/feedback columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print one JSON report per candidate instead of a summary table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    candidate: &'a str,
    report: EvaluationReport,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let scores = SkillScoreSet::from_scores([
        args.excel,
        args.sql,
        args.python,
        args.stats,
        args.ml,
        args.bi,
    ])?;
    let evaluator = CandidateEvaluator::standard();
    let evaluation = evaluator.evaluate(scores, args.feedback.as_deref().unwrap_or_default());

    if args.json {
        let report = EvaluationReport::from_evaluation(&evaluation, evaluator.roles());
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", render_evaluation(&evaluation));
    }
    Ok(())
}

pub(crate) fn run_requirements(args: RequirementsArgs) -> Result<(), AppError> {
    let evaluator = CandidateEvaluator::standard();
    let view = requirements_view(evaluator.roles());

    if args.json {
        println!("{}", to_json(&view)?);
        return Ok(());
    }

    println!("Role requirements");
    for role in &view {
        println!("- {}: {}", role.role, role.description);
        for entry in &role.requirements {
            println!("    {} >= {}", entry.skill, entry.minimum);
        }
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let records = CandidateBatchImporter::from_path(&args.csv)?;
    let evaluator = CandidateEvaluator::standard();

    if args.json {
        let entries: Vec<BatchEntry<'_>> = records
            .iter()
            .map(|record| {
                let evaluation = evaluator.evaluate(record.scores, &record.feedback);
                BatchEntry {
                    candidate: &record.candidate,
                    report: EvaluationReport::from_evaluation(&evaluation, evaluator.roles()),
                }
            })
            .collect();
        println!("{}", to_json(&entries)?);
        return Ok(());
    }

    println!("Batch evaluation ({} candidates)", records.len());
    for record in &records {
        let evaluation = evaluator.evaluate(record.scores, &record.feedback);
        println!("{}", batch_line(&record.candidate, &evaluation));
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn batch_line(candidate: &str, evaluation: &CandidateEvaluation) -> String {
    let roles = if evaluation.roles.recommended.is_empty() {
        "none".to_string()
    } else {
        evaluation.roles.recommended.join(", ")
    };
    format!(
        "- {}: {} ({:.2}) | roles: {}",
        candidate,
        evaluation.readiness.status.label(),
        evaluation.readiness.final_score,
        roles
    )
}

fn render_evaluation(evaluation: &CandidateEvaluation) -> String {
    let readiness = &evaluation.readiness;
    let mut lines = vec![format!(
        "Placement readiness: {} (score {:.2})",
        readiness.status.label(),
        readiness.final_score
    )];

    lines.push("Reasons:".to_string());
    lines.extend(readiness.reasons.iter().map(|reason| format!("  - {reason}")));
    lines.push("Suggestions:".to_string());
    lines.extend(
        readiness
            .suggestions
            .iter()
            .map(|suggestion| format!("  - {suggestion}")),
    );

    if evaluation.roles.recommended.is_empty() {
        lines.push("Recommended roles: none yet".to_string());
    } else {
        lines.push(format!(
            "Recommended roles: {}",
            evaluation.roles.recommended.join(", ")
        ));
    }
    if !evaluation.roles.rejected.is_empty() {
        lines.push("Roles not yet reachable:".to_string());
        for rejected in &evaluation.roles.rejected {
            let missing: Vec<&str> = rejected.missing.iter().map(|skill| skill.label()).collect();
            lines.push(format!("  - {}: below minimum in {}", rejected.role, missing.join(", ")));
        }
    }

    let strengths = evaluation.feedback.strength_labels();
    if !strengths.is_empty() {
        lines.push(format!("Feedback strengths: {}", strengths.join(", ")));
    }
    let gaps = evaluation.feedback.gap_labels();
    if !gaps.is_empty() {
        lines.push(format!("Feedback gaps: {}", gaps.join(", ")));
    }

    lines.push("Preparation plan:".to_string());
    lines.extend(
        evaluation
            .feedback
            .plan
            .entries()
            .into_iter()
            .map(|entry| format!("  {entry}")),
    );

    lines.push("Next actions:".to_string());
    lines.extend(evaluation.actions.iter().map(|action| format!("  - {action}")));

    lines.join("\n")
}
