use crate::cli::BudgetArgs;
use crate::report::{build_export, build_report};
use rawbudget_core::Question;
use rawbudget_pipeline::{benchmark_questions, Pipeline, RunSummary};
use rawbudget_telemetry::{atomic_write, load_dataset, read_records};
use std::path::Path;

pub fn run(
    dataset: &Path,
    questions: Option<&Path>,
    output: Option<&Path>,
    budget: &BudgetArgs,
) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(budget.resolve()?)?;
    let records = load_dataset(dataset)?;

    let questions: Vec<Question> = match questions {
        Some(path) => read_records(path)?,
        None => benchmark_questions(),
    };

    let analysis = pipeline.analyze(&questions, &records)?;
    let (plan, results) = (&analysis.plan, &analysis.results);
    let summary = RunSummary::from_results(results, pipeline.config().cost_per_million_tokens);

    println!("{}", build_report(records.len(), plan, results, &summary));

    if let Some(path) = output {
        let export = build_export(pipeline.config(), results, &summary, chrono::Utc::now());
        let json = serde_json::to_string_pretty(&export)?;
        atomic_write(path, json.as_bytes())?;
        println!("\nDetailed results exported to: {}", path.display());
    }
    Ok(())
}
