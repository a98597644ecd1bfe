//! Text report and JSON export for an analysis run

use chrono::{DateTime, Utc};
use rawbudget_core::{BudgetConfig, ChunkPlan, QuestionResult};
use rawbudget_pipeline::RunSummary;

pub fn build_report(
    record_count: usize,
    plan: &ChunkPlan,
    results: &[QuestionResult],
    summary: &RunSummary,
) -> String {
    let mut sections = Vec::new();

    let request = if plan.is_single_request {
        "single request".to_string()
    } else {
        format!("multi-chunk ({} chunks + 1 synthesis)", plan.chunk_count())
    };
    sections.push(format!(
        "Raw Mode Token Analysis\n=======================\n\
         Records: {}\nSerialized size: {} chars\nRequest type: {}",
        record_count, plan.total_chars, request
    ));

    if results.is_empty() {
        sections.push("\nNo questions analyzed.".to_string());
        return sections.join("\n");
    }

    let total = results.len();
    let rows = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "[{}/{}] {}\n  Token estimate (modern): {}\n  Token estimate (legacy): {}",
                i + 1,
                total,
                r.question,
                r.total_tokens,
                r.total_tokens_legacy
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!("\nQuestions\n---------\n{}", rows));

    let mut stats = format!(
        "\nSummary\n-------\n\
         Total tokens (modern): {}\nTotal tokens (legacy): {}",
        summary.total_tokens_modern, summary.total_tokens_legacy
    );
    if let (Some(modern), Some(legacy)) = (
        summary.average_tokens_per_question,
        summary.average_tokens_per_question_legacy,
    ) {
        stats.push_str(&format!(
            "\nAverage per question (modern): {}\nAverage per question (legacy): {}",
            modern, legacy
        ));
    }
    if let Some(pct) = summary.difference_pct {
        stats.push_str(&format!("\nEstimation difference: {:.1}%", pct));
    }
    sections.push(stats);

    sections.push(format!(
        "\nCost Estimate\n-------------\n\
         Modern: ${:.6}\nLegacy: ${:.6}",
        summary.estimated_cost_modern, summary.estimated_cost_legacy
    ));

    sections.join("\n")
}

pub fn build_export(
    config: &BudgetConfig,
    results: &[QuestionResult],
    summary: &RunSummary,
    analysis_date: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "analysisDate": analysis_date.to_rfc3339(),
            "questionsAnalyzed": results.len(),
            "tokenEstimationMethod": format!(
                "text.length / {} (modern) and text.length * {} (legacy)",
                config.modern_chars_per_token, config.legacy_tokens_per_char
            ),
            "description": "Token usage analysis for raw mode benchmark questions",
        },
        "summary": summary,
        "detailedResults": results,
    })
}
