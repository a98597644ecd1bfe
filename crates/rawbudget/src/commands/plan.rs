use crate::cli::BudgetArgs;
use rawbudget_core::ChunkPlan;
use rawbudget_pipeline::Pipeline;
use rawbudget_telemetry::load_dataset;
use std::path::Path;

pub fn run(dataset: &Path, budget: &BudgetArgs) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(budget.resolve()?)?;
    let records = load_dataset(dataset)?;
    let plan = pipeline.plan(&records)?;

    println!(
        "{}",
        format_plan(
            &plan,
            pipeline.config().char_limit,
            pipeline.config().chunk_size()
        )
    );
    Ok(())
}

fn format_plan(plan: &ChunkPlan, char_limit: usize, chunk_size: usize) -> String {
    let mut out = format!(
        "Serialized size: {} chars (limit {})",
        plan.total_chars, char_limit
    );

    if plan.is_single_request {
        out.push_str("\nFits a single request");
        return out;
    }

    out.push_str(&format!(
        "\nSplit into {} chunks of up to {} chars:",
        plan.chunk_count(),
        chunk_size
    ));
    for (chunk, size) in plan.chunks.iter().zip(plan.chunk_sizes()) {
        out.push_str(&format!("\n  chunk {}: {} chars", chunk.index, size));
    }
    out
}
