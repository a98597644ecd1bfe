pub mod analyze;
pub mod plan;
pub mod prompt;
pub mod version;
