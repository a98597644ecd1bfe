use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rawbudget_core::{BudgetConfig, TailPolicy};
use rawbudget_prompt::PromptTemplate;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rawbudget")]
#[command(version)]
#[command(about = "Token budgeting for raw-mode telemetry prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate prompt tokens for each benchmark question
    Analyze {
        /// Telemetry dataset (JSON array or JSONL)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Questions file (JSON array or JSONL); built-in benchmark if omitted
        #[arg(short, long)]
        questions: Option<PathBuf>,

        /// Write a detailed JSON export here
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        budget: BudgetArgs,
    },

    /// Show how the dataset would be chunked
    Plan {
        #[arg(short, long)]
        dataset: PathBuf,

        #[command(flatten)]
        budget: BudgetArgs,
    },

    /// Print one assembled prompt
    Prompt {
        #[arg(short, long)]
        dataset: PathBuf,

        /// raw, rawChunk or rawFinal
        #[arg(short, long, default_value = "raw")]
        template: PromptTemplate,

        #[arg(long)]
        query: String,

        /// 1-based chunk index for rawChunk
        #[arg(long, default_value_t = 1)]
        chunk: usize,

        #[command(flatten)]
        budget: BudgetArgs,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TailPolicyArg {
    Separate,
    MergeWithinLimit,
}

impl From<TailPolicyArg> for TailPolicy {
    fn from(arg: TailPolicyArg) -> Self {
        match arg {
            TailPolicyArg::Separate => TailPolicy::Separate,
            TailPolicyArg::MergeWithinLimit => TailPolicy::MergeWithinLimit,
        }
    }
}

/// Budget overrides; flags win over the config file, which wins over defaults
#[derive(Debug, Clone, Default, Args)]
pub struct BudgetArgs {
    /// JSON file with budget settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Single-request threshold in characters
    #[arg(long)]
    pub char_limit: Option<usize>,

    /// Chunk size as a fraction of the char limit
    #[arg(long)]
    pub safety_fraction: Option<f64>,

    #[arg(long)]
    pub legacy_tokens_per_char: Option<f64>,

    #[arg(long)]
    pub modern_chars_per_token: Option<f64>,

    #[arg(long, value_enum)]
    pub tail_policy: Option<TailPolicyArg>,

    /// USD per million input tokens
    #[arg(long)]
    pub cost_per_million: Option<f64>,
}

impl BudgetArgs {
    pub fn resolve(&self) -> anyhow::Result<BudgetConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => BudgetConfig::new(),
        };

        if let Some(v) = self.char_limit {
            config.char_limit = v;
        }
        if let Some(v) = self.safety_fraction {
            config.safety_fraction = v;
        }
        if let Some(v) = self.legacy_tokens_per_char {
            config.legacy_tokens_per_char = v;
        }
        if let Some(v) = self.modern_chars_per_token {
            config.modern_chars_per_token = v;
        }
        if let Some(v) = self.tail_policy {
            config.tail_policy = v.into();
        }
        if let Some(v) = self.cost_per_million {
            config.cost_per_million_tokens = v;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> anyhow::Result<BudgetConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))
}
