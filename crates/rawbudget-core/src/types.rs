//! Chunk plans and per-question token results

use rawbudget_telemetry::TokenEstimate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters of a prompt kept in a calculation's preview
const PREVIEW_CHARS: usize = 200;

/// A contiguous slice of the serialized dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub text: String,
    /// 1-based position
    pub index: usize,
    pub total_chunks: usize,
}

/// Outcome of budget chunking for one serialized dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkPlan {
    pub chunks: Vec<Chunk>,
    pub is_single_request: bool,
    /// Characters in the whole serialized dataset
    pub total_chars: usize,
}

impl ChunkPlan {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Character length of each chunk, in order
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunks
            .iter()
            .map(|c| c.text.chars().count())
            .collect()
    }

    /// Concatenate the chunks back into the serialized dataset
    pub fn reassemble(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Which prompt a calculation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CalculationKind {
    SingleRequest,
    /// 1-based chunk index
    Chunk(usize),
    FinalSynthesis,
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationKind::SingleRequest => write!(f, "single-request"),
            CalculationKind::Chunk(index) => write!(f, "chunk-{}", index),
            CalculationKind::FinalSynthesis => write!(f, "final-synthesis"),
        }
    }
}

impl FromStr for CalculationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-request" => Ok(CalculationKind::SingleRequest),
            "final-synthesis" => Ok(CalculationKind::FinalSynthesis),
            other => other
                .strip_prefix("chunk-")
                .and_then(|n| n.parse().ok())
                .map(CalculationKind::Chunk)
                .ok_or_else(|| format!("unknown calculation type: {}", other)),
        }
    }
}

impl From<CalculationKind> for String {
    fn from(kind: CalculationKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for CalculationKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Token estimate for one assembled prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCalculation {
    #[serde(rename = "type")]
    pub kind: CalculationKind,
    /// Leading characters of the prompt, for display
    pub prompt_text: String,
    pub prompt_length: usize,
    /// Modern estimate
    pub estimated_tokens: usize,
    pub estimated_tokens_legacy: usize,
    /// Characters of payload carried by the prompt
    pub data_size: usize,
}

impl TokenCalculation {
    pub fn new(
        kind: CalculationKind,
        prompt: &str,
        estimate: TokenEstimate,
        data_size: usize,
    ) -> Self {
        Self {
            kind,
            prompt_text: prompt_preview(prompt),
            prompt_length: prompt.chars().count(),
            estimated_tokens: estimate.modern,
            estimated_tokens_legacy: estimate.legacy,
            data_size,
        }
    }
}

/// First 200 characters of a prompt, with `...` appended when cut
pub fn prompt_preview(prompt: &str) -> String {
    match prompt.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &prompt[..cut]),
        None => prompt.to_string(),
    }
}

/// A benchmark question to estimate prompt cost for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_truth: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            ground_truth: None,
        }
    }
}

/// Token cost of answering one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: String,
    pub question: String,
    /// In production order
    pub token_calculations: Vec<TokenCalculation>,
    pub total_tokens: usize,
    pub total_tokens_legacy: usize,
    /// Number of data chunks; absent for a single request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_count: Option<usize>,
}

impl QuestionResult {
    pub fn is_multi_chunk(&self) -> bool {
        self.chunk_count.is_some()
    }

    pub fn request_type(&self) -> &'static str {
        if self.is_multi_chunk() {
            "multi-chunk"
        } else {
            "single-request"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_kind_strings() {
        assert_eq!(CalculationKind::SingleRequest.to_string(), "single-request");
        assert_eq!(CalculationKind::Chunk(3).to_string(), "chunk-3");
        assert_eq!(
            CalculationKind::FinalSynthesis.to_string(),
            "final-synthesis"
        );

        assert_eq!(
            "chunk-12".parse::<CalculationKind>(),
            Ok(CalculationKind::Chunk(12))
        );
        assert!("chunk-x".parse::<CalculationKind>().is_err());
        assert!("summary".parse::<CalculationKind>().is_err());
    }

    #[test]
    fn test_token_calculation_serializes_camel_case() {
        let calc = TokenCalculation::new(
            CalculationKind::Chunk(2),
            "prompt body",
            TokenEstimate {
                modern: 3,
                legacy: 4,
            },
            5,
        );

        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["type"], "chunk-2");
        assert_eq!(json["promptLength"], 11);
        assert_eq!(json["estimatedTokens"], 3);
        assert_eq!(json["estimatedTokensLegacy"], 4);
        assert_eq!(json["dataSize"], 5);

        let parsed: TokenCalculation = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, calc);
    }

    #[test]
    fn test_prompt_preview() {
        assert_eq!(prompt_preview("short"), "short");

        let exact = "a".repeat(200);
        assert_eq!(prompt_preview(&exact), exact);

        let long = "ü".repeat(250);
        let preview = prompt_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 203);
    }

    #[test]
    fn test_single_request_result_omits_chunk_count() {
        let result = QuestionResult {
            question_id: "q".to_string(),
            question: "why".to_string(),
            token_calculations: vec![],
            total_tokens: 0,
            total_tokens_legacy: 0,
            chunk_count: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("chunkCount").is_none());
        assert_eq!(result.request_type(), "single-request");
    }

    #[test]
    fn test_plan_reassemble() {
        let plan = ChunkPlan {
            chunks: vec![
                Chunk {
                    text: "ab".to_string(),
                    index: 1,
                    total_chunks: 2,
                },
                Chunk {
                    text: "c".to_string(),
                    index: 2,
                    total_chunks: 2,
                },
            ],
            is_single_request: false,
            total_chars: 3,
        };
        assert_eq!(plan.reassemble(), "abc");
        assert_eq!(plan.chunk_sizes(), vec![2, 1]);
        assert_eq!(plan.chunk_count(), 2);
    }
}
