use thiserror::Error;

/// Invalid budget configuration. Chunk sizing is undefined for any of these,
/// so they are rejected before a pipeline is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("char limit must be positive")]
    NonPositiveCharLimit,

    #[error("safety fraction must be in (0, 1], got {0}")]
    SafetyFractionOutOfRange(f64),

    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveRatio { name: &'static str, value: f64 },

    #[error("cost per million tokens must be a non-negative finite number, got {0}")]
    InvalidCost(f64),

    #[error("char limit {char_limit} with safety fraction {safety_fraction} leaves an empty chunk")]
    ChunkSizeZero {
        char_limit: usize,
        safety_fraction: f64,
    },
}
