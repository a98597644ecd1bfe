//! Configuration for budgeted chunking

use crate::error::ConfigError;
use rawbudget_telemetry::{
    TokenEstimator, DEFAULT_LEGACY_TOKENS_PER_CHAR, DEFAULT_MODERN_CHARS_PER_TOKEN,
};
use serde::{Deserialize, Serialize};

/// Largest serialized dataset (in chars) sent as one request
pub const DEFAULT_CHAR_LIMIT: usize = 11_000;

/// Share of the char limit each chunk may use
pub const DEFAULT_SAFETY_FRACTION: f64 = 0.8;

/// USD per one million input tokens
pub const DEFAULT_COST_PER_MILLION_TOKENS: f64 = 0.05;

/// What to do with the short remainder at the end of a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailPolicy {
    /// Remainder becomes its own chunk; every chunk stays within the chunk size
    #[default]
    Separate,
    /// Remainder joins the previous chunk when both together fit the char limit
    MergeWithinLimit,
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetConfig {
    /// Single-request threshold in characters (inclusive)
    pub char_limit: usize,

    /// Chunk size as a fraction of `char_limit`, in (0, 1]
    pub safety_fraction: f64,

    /// Legacy estimate: tokens per character
    pub legacy_tokens_per_char: f64,

    /// Modern estimate: characters per token
    pub modern_chars_per_token: f64,

    pub tail_policy: TailPolicy,

    /// Input price used for cost estimates
    pub cost_per_million_tokens: f64,
}

impl BudgetConfig {
    pub fn new() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
            safety_fraction: DEFAULT_SAFETY_FRACTION,
            legacy_tokens_per_char: DEFAULT_LEGACY_TOKENS_PER_CHAR,
            modern_chars_per_token: DEFAULT_MODERN_CHARS_PER_TOKEN,
            tail_policy: TailPolicy::Separate,
            cost_per_million_tokens: DEFAULT_COST_PER_MILLION_TOKENS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.char_limit == 0 {
            return Err(ConfigError::NonPositiveCharLimit);
        }
        if !(self.safety_fraction > 0.0 && self.safety_fraction <= 1.0) {
            return Err(ConfigError::SafetyFractionOutOfRange(self.safety_fraction));
        }
        check_ratio("legacyTokensPerChar", self.legacy_tokens_per_char)?;
        check_ratio("modernCharsPerToken", self.modern_chars_per_token)?;
        if !(self.cost_per_million_tokens >= 0.0 && self.cost_per_million_tokens.is_finite()) {
            return Err(ConfigError::InvalidCost(self.cost_per_million_tokens));
        }
        if self.chunk_size() == 0 {
            return Err(ConfigError::ChunkSizeZero {
                char_limit: self.char_limit,
                safety_fraction: self.safety_fraction,
            });
        }
        Ok(())
    }

    /// Characters per chunk once the dataset exceeds the limit: `floor(L * f)`
    pub fn chunk_size(&self) -> usize {
        (self.char_limit as f64 * self.safety_fraction).floor() as usize
    }

    pub fn estimator(&self) -> TokenEstimator {
        TokenEstimator::new(self.legacy_tokens_per_char, self.modern_chars_per_token)
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveRatio { name, value })
    }
}
