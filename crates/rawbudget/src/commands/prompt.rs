use crate::cli::BudgetArgs;
use anyhow::bail;
use rawbudget_core::ChunkPlan;
use rawbudget_pipeline::Pipeline;
use rawbudget_prompt::{
    analyst_note_placeholders, chunk_prompt, final_prompt, raw_prompt, PromptTemplate,
};
use rawbudget_telemetry::load_dataset;
use std::path::Path;

pub fn run(
    dataset: &Path,
    template: PromptTemplate,
    query: &str,
    chunk: usize,
    budget: &BudgetArgs,
) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(budget.resolve()?)?;
    let records = load_dataset(dataset)?;
    let plan = pipeline.plan(&records)?;

    if chunk != 1 && !takes_chunk_index(template) {
        tracing::warn!(%template, chunk, "--chunk only applies to templates with a chunkIndex");
    }

    let prompt = assemble(&plan, template, query, chunk)?;
    let estimate = pipeline.config().estimator().estimate_both(&prompt);
    tracing::info!(
        %template,
        modern = estimate.modern,
        legacy = estimate.legacy,
        "assembled prompt"
    );

    println!("{}", prompt);
    Ok(())
}

fn takes_chunk_index(template: PromptTemplate) -> bool {
    template.extra_keys().contains(&"chunkIndex")
}

fn assemble(
    plan: &ChunkPlan,
    template: PromptTemplate,
    query: &str,
    chunk: usize,
) -> anyhow::Result<String> {
    let prompt = match template {
        PromptTemplate::Raw => raw_prompt(query, &plan.reassemble()),
        PromptTemplate::RawChunk => {
            let Some(selected) = chunk.checked_sub(1).and_then(|i| plan.chunks.get(i)) else {
                bail!(
                    "chunk {} out of range (dataset has {} chunks)",
                    chunk,
                    plan.chunk_count()
                );
            };
            chunk_prompt(query, selected)
        }
        PromptTemplate::RawFinal => {
            let notes = analyst_note_placeholders(plan.chunk_count());
            final_prompt(query, &notes, plan.chunk_count(), "")
        }
    };
    Ok(prompt)
}
