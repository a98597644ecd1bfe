//! Character-budget chunking of serialized datasets

use rawbudget_core::{BudgetConfig, Chunk, ChunkPlan, ConfigError, TailPolicy};
use rawbudget_telemetry::char_len;
use std::ops::Range;

/// Splits serialized text into chunks that fit a character budget.
///
/// Splitting is a plain character-offset partition: chunk boundaries ignore
/// record structure but never fall inside a UTF-8 code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetChunker {
    char_limit: usize,
    chunk_size: usize,
    tail_policy: TailPolicy,
}

impl BudgetChunker {
    pub fn from_config(config: &BudgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            char_limit: config.char_limit,
            chunk_size: config.chunk_size(),
            tail_policy: config.tail_policy,
        })
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn split(&self, text: &str) -> ChunkPlan {
        let total_chars = char_len(text);

        if total_chars <= self.char_limit {
            tracing::debug!(total_chars, limit = self.char_limit, "fits a single request");
            return ChunkPlan {
                chunks: vec![Chunk {
                    text: text.to_string(),
                    index: 1,
                    total_chunks: 1,
                }],
                is_single_request: true,
                total_chars,
            };
        }

        let mut ranges = self.slice_ranges(text);
        if self.tail_policy == TailPolicy::MergeWithinLimit {
            self.merge_tail(text, &mut ranges);
        }

        let total_chunks = ranges.len();
        tracing::debug!(
            total_chars,
            chunk_size = self.chunk_size,
            total_chunks,
            "split dataset into chunks"
        );

        ChunkPlan {
            chunks: ranges
                .into_iter()
                .enumerate()
                .map(|(i, range)| Chunk {
                    text: text[range].to_string(),
                    index: i + 1,
                    total_chunks,
                })
                .collect(),
            is_single_request: false,
            total_chars,
        }
    }

    /// Byte ranges of consecutive `chunk_size`-char slices; the last takes the remainder
    fn slice_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut chars_in_slice = 0;

        for (offset, _) in text.char_indices() {
            if chars_in_slice == self.chunk_size {
                ranges.push(start..offset);
                start = offset;
                chars_in_slice = 0;
            }
            chars_in_slice += 1;
        }
        if start < text.len() {
            ranges.push(start..text.len());
        }
        ranges
    }

    fn merge_tail(&self, text: &str, ranges: &mut Vec<Range<usize>>) {
        if ranges.len() < 2 {
            return;
        }
        let last = ranges[ranges.len() - 1].clone();
        let prev = ranges[ranges.len() - 2].clone();
        if char_len(&text[prev.start..last.end]) <= self.char_limit {
            ranges.pop();
            let merged = ranges.len() - 1;
            ranges[merged] = prev.start..last.end;
        }
    }
}
