use rawbudget_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to serialize compressed dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}
