//! Prompt templates and placeholder substitution

mod assembler;
mod templates;

pub use assembler::{
    analyst_note_placeholders, build_prompt, chunk_prompt, final_prompt, raw_prompt, render,
};
pub use templates::PromptTemplate;
