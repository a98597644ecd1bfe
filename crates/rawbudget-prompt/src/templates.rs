use std::fmt;
use std::str::FromStr;

const RAW: &str = "You are a transportation analyst. You will receive the entire bus telemetry dataset as raw JSON without any preprocessing. Use it to answer the user's question directly, pointing to concrete observations. Respond in plain text only\u{2014}do not use markdown formatting, bullet points, or special characters\u{2014}and keep your reply under 200 words.

RAW DATASET (JSON):
{{data}}

USER QUESTION: {{userQuery}}";

const RAW_CHUNK: &str = "You are a transportation analyst reviewing bus telemetry part {{chunkIndex}} of {{totalChunks}}. The data is raw JSON with no preprocessing. Extract concrete observations (locations, timestamps, behaviors) relevant to the user question. Write in plain text with no markdown, lists, or special characters, keep your response under 120 words, note any potential safety concerns, and focus only on this chunk.

RAW DATA CHUNK:
{{data}}

USER QUESTION: {{userQuery}}";

const RAW_FINAL: &str = "You previously reviewed {{chunkCount}} raw telemetry chunks. Combine the analyst notes below into one cohesive answer for the user. Reference the question directly, call out specific patterns or anomalies, and keep the response under 220 words. Produce plain text only\u{2014}no markdown formatting, bullets, or special characters. {{truncatedNote}}

ANALYST NOTES:
{{data}}

USER QUESTION: {{userQuery}}";

/// The three raw-mode prompt templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    /// Whole dataset in one request
    Raw,
    /// One slice of a split dataset
    RawChunk,
    /// Synthesis over per-chunk analyst notes
    RawFinal,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 3] = [
        PromptTemplate::Raw,
        PromptTemplate::RawChunk,
        PromptTemplate::RawFinal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PromptTemplate::Raw => "raw",
            PromptTemplate::RawChunk => "rawChunk",
            PromptTemplate::RawFinal => "rawFinal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn text(&self) -> &'static str {
        match self {
            PromptTemplate::Raw => RAW,
            PromptTemplate::RawChunk => RAW_CHUNK,
            PromptTemplate::RawFinal => RAW_FINAL,
        }
    }

    /// Placeholders beyond `data` and `userQuery` the template expects
    pub fn extra_keys(&self) -> &'static [&'static str] {
        match self {
            PromptTemplate::Raw => &[],
            PromptTemplate::RawChunk => &["chunkIndex", "totalChunks"],
            PromptTemplate::RawFinal => &["chunkCount", "truncatedNote"],
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown template '{}' (expected one of: raw, rawChunk, rawFinal)",
                s
            )
        })
    }
}
