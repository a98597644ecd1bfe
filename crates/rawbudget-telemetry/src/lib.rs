//! Bus telemetry dataset types, loading, and token estimation

mod io;
mod tokens;
mod types;

pub use io::{atomic_write, load_dataset, read_records, DatasetError};
pub use tokens::{
    char_len, TokenEstimate, TokenEstimator, TokenStrategy,
    DEFAULT_LEGACY_TOKENS_PER_CHAR, DEFAULT_MODERN_CHARS_PER_TOKEN,
};
pub use types::{Activity, Behavior, Dataset, Record};
