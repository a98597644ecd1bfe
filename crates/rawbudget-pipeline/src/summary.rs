//! Aggregate statistics over a run's question results

use rawbudget_core::QuestionResult;
use serde::Serialize;

/// Percentage by which the modern total differs from the legacy total.
///
/// `None` when the legacy total is zero.
pub fn difference_pct(modern: usize, legacy: usize) -> Option<f64> {
    if legacy == 0 {
        return None;
    }
    Some((modern as f64 - legacy as f64) / legacy as f64 * 100.0)
}

/// Dollar cost of `tokens` input tokens at `cost_per_million`
pub fn estimate_cost(tokens: usize, cost_per_million: f64) -> f64 {
    tokens as f64 / 1_000_000.0 * cost_per_million
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub id: String,
    pub question: String,
    pub total_tokens: usize,
    pub total_tokens_legacy: usize,
    pub request_type: &'static str,
    /// 1 for a single request
    pub chunk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_tokens_modern: usize,
    pub total_tokens_legacy: usize,
    pub average_tokens_per_question: Option<usize>,
    pub average_tokens_per_question_legacy: Option<usize>,
    pub difference_pct: Option<f64>,
    pub estimated_cost_modern: f64,
    pub estimated_cost_legacy: f64,
    pub questions: Vec<QuestionSummary>,
}

impl RunSummary {
    pub fn from_results(results: &[QuestionResult], cost_per_million: f64) -> Self {
        let total_tokens_modern: usize = results.iter().map(|r| r.total_tokens).sum();
        let total_tokens_legacy: usize = results.iter().map(|r| r.total_tokens_legacy).sum();

        let questions = results
            .iter()
            .map(|r| QuestionSummary {
                id: r.question_id.clone(),
                question: r.question.clone(),
                total_tokens: r.total_tokens,
                total_tokens_legacy: r.total_tokens_legacy,
                request_type: r.request_type(),
                chunk_count: r.chunk_count.unwrap_or(1),
            })
            .collect();

        Self {
            total_tokens_modern,
            total_tokens_legacy,
            average_tokens_per_question: average(total_tokens_modern, results.len()),
            average_tokens_per_question_legacy: average(total_tokens_legacy, results.len()),
            difference_pct: difference_pct(total_tokens_modern, total_tokens_legacy),
            estimated_cost_modern: estimate_cost(total_tokens_modern, cost_per_million),
            estimated_cost_legacy: estimate_cost(total_tokens_legacy, cost_per_million),
            questions,
        }
    }
}

/// Mean rounded half to even, so 5600.5 becomes 5600
fn average(total: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((total as f64 / count as f64).round_ties_even() as usize)
}
