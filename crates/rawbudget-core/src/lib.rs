//! Budget configuration and result types for prompt chunking

mod config;
mod error;
mod types;

pub use config::{
    BudgetConfig, TailPolicy, DEFAULT_CHAR_LIMIT, DEFAULT_COST_PER_MILLION_TOKENS,
    DEFAULT_SAFETY_FRACTION,
};
pub use error::ConfigError;
pub use types::{
    prompt_preview, CalculationKind, Chunk, ChunkPlan, Question, QuestionResult, TokenCalculation,
};
