mod cli;
mod commands;
mod report;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so prompts and reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            dataset,
            questions,
            output,
            budget,
        } => commands::analyze::run(&dataset, questions.as_deref(), output.as_deref(), &budget),
        Commands::Plan { dataset, budget } => commands::plan::run(&dataset, &budget),
        Commands::Prompt {
            dataset,
            template,
            query,
            chunk,
            budget,
        } => commands::prompt::run(&dataset, template, &query, chunk, &budget),
        Commands::Version => commands::version::run(),
    }
}
