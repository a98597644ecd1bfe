//! Drives chunking, prompt assembly and token estimation per question

mod error;
mod orchestrator;
mod questions;
mod summary;

pub use error::PipelineError;
pub use orchestrator::{Analysis, Pipeline};
pub use questions::benchmark_questions;
pub use summary::{difference_pct, estimate_cost, QuestionSummary, RunSummary};
