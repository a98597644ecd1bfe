//! Placeholder substitution for prompt templates

use crate::templates::PromptTemplate;
use rawbudget_core::Chunk;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Replace every `{{key}}` in `template` that has an entry in `values`.
///
/// One left-to-right pass: inserted values are never rescanned, and
/// placeholders without a value are kept as-is.
pub fn render(template: &str, values: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Fill `template` with the query, the data payload and any extra values
pub fn build_prompt(
    template: PromptTemplate,
    user_query: &str,
    data: &str,
    extras: &[(&str, String)],
) -> String {
    let mut values = HashMap::with_capacity(extras.len() + 2);
    values.insert("data", data.to_string());
    values.insert("userQuery", user_query.to_string());
    for (key, value) in extras {
        values.insert(*key, value.clone());
    }
    render(template.text(), &values)
}

pub fn raw_prompt(user_query: &str, data: &str) -> String {
    build_prompt(PromptTemplate::Raw, user_query, data, &[])
}

pub fn chunk_prompt(user_query: &str, chunk: &Chunk) -> String {
    build_prompt(
        PromptTemplate::RawChunk,
        user_query,
        &chunk.text,
        &[
            ("chunkIndex", chunk.index.to_string()),
            ("totalChunks", chunk.total_chunks.to_string()),
        ],
    )
}

pub fn final_prompt(
    user_query: &str,
    analyst_notes: &str,
    chunk_count: usize,
    truncated_note: &str,
) -> String {
    build_prompt(
        PromptTemplate::RawFinal,
        user_query,
        analyst_notes,
        &[
            ("chunkCount", chunk_count.to_string()),
            ("truncatedNote", truncated_note.to_string()),
        ],
    )
}

/// Stand-in analyst notes, one line per chunk
pub fn analyst_note_placeholders(chunk_count: usize) -> String {
    (1..=chunk_count)
        .map(|i| format!("Chunk {} analysis notes...", i))
        .collect::<Vec<_>>()
        .join("\n")
}
