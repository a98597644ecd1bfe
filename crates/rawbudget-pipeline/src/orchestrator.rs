//! Per-question token accounting over a chunk plan

use crate::error::PipelineError;
use rawbudget_compress::{compress_and_serialize, BudgetChunker};
use rawbudget_core::{
    BudgetConfig, CalculationKind, ChunkPlan, ConfigError, Question, QuestionResult,
    TokenCalculation,
};
use rawbudget_prompt::{analyst_note_placeholders, chunk_prompt, final_prompt, raw_prompt};
use rawbudget_telemetry::{char_len, Record, TokenEstimator};

/// Token-budgeted prompt pipeline.
///
/// Holds only validated configuration; every method is a pure function of
/// its inputs, so one pipeline can serve any number of datasets and questions.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: BudgetConfig,
    chunker: BudgetChunker,
    estimator: TokenEstimator,
}

impl Pipeline {
    pub fn new(config: BudgetConfig) -> Result<Self, ConfigError> {
        let chunker = BudgetChunker::from_config(&config)?;
        let estimator = config.estimator();
        Ok(Self {
            config,
            chunker,
            estimator,
        })
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Compress, serialize and chunk a dataset
    pub fn plan(&self, records: &[Record]) -> Result<ChunkPlan, PipelineError> {
        let serialized = compress_and_serialize(records)?;
        Ok(self.plan_text(&serialized))
    }

    /// Chunk already serialized text
    pub fn plan_text(&self, serialized: &str) -> ChunkPlan {
        let plan = self.chunker.split(serialized);
        tracing::info!(
            total_chars = plan.total_chars,
            chunks = plan.chunk_count(),
            single_request = plan.is_single_request,
            "planned dataset"
        );
        plan
    }

    /// Estimate every prompt needed to answer `question` over `plan`
    pub fn analyze_question(&self, question: &Question, plan: &ChunkPlan) -> QuestionResult {
        let mut tally = Tally::new(&self.estimator);

        let chunk_count = if plan.is_single_request {
            let data = plan
                .chunks
                .first()
                .map(|c| c.text.as_str())
                .unwrap_or_default();
            let prompt = raw_prompt(&question.question, data);
            tally.record(CalculationKind::SingleRequest, &prompt, plan.total_chars);
            None
        } else {
            for chunk in &plan.chunks {
                let prompt = chunk_prompt(&question.question, chunk);
                tally.record(
                    CalculationKind::Chunk(chunk.index),
                    &prompt,
                    char_len(&chunk.text),
                );
            }

            let notes = analyst_note_placeholders(plan.chunk_count());
            let prompt = final_prompt(&question.question, &notes, plan.chunk_count(), "");
            tally.record(CalculationKind::FinalSynthesis, &prompt, char_len(&notes));
            Some(plan.chunk_count())
        };

        let result = tally.finish(question, chunk_count);
        tracing::info!(
            question = %result.question_id,
            total_tokens = result.total_tokens,
            total_tokens_legacy = result.total_tokens_legacy,
            request_type = result.request_type(),
            "estimated question"
        );
        result
    }

    /// Plan the dataset once, then estimate each question in order
    pub fn analyze(
        &self,
        questions: &[Question],
        records: &[Record],
    ) -> Result<Analysis, PipelineError> {
        let plan = self.plan(records)?;
        let results = questions
            .iter()
            .map(|q| self.analyze_question(q, &plan))
            .collect();
        Ok(Analysis { plan, results })
    }
}

/// Output of [`Pipeline::analyze`]: the shared plan and one result per question
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub plan: ChunkPlan,
    pub results: Vec<QuestionResult>,
}

/// Running totals for one question
struct Tally<'a> {
    estimator: &'a TokenEstimator,
    calculations: Vec<TokenCalculation>,
    total_tokens: usize,
    total_tokens_legacy: usize,
}

impl<'a> Tally<'a> {
    fn new(estimator: &'a TokenEstimator) -> Self {
        Self {
            estimator,
            calculations: Vec::new(),
            total_tokens: 0,
            total_tokens_legacy: 0,
        }
    }

    fn record(&mut self, kind: CalculationKind, prompt: &str, data_size: usize) {
        let estimate = self.estimator.estimate_both(prompt);
        tracing::debug!(
            %kind,
            prompt_chars = char_len(prompt),
            modern = estimate.modern,
            legacy = estimate.legacy,
            "estimated prompt"
        );
        self.total_tokens += estimate.modern;
        self.total_tokens_legacy += estimate.legacy;
        self.calculations
            .push(TokenCalculation::new(kind, prompt, estimate, data_size));
    }

    fn finish(self, question: &Question, chunk_count: Option<usize>) -> QuestionResult {
        QuestionResult {
            question_id: question.id.clone(),
            question: question.question.clone(),
            token_calculations: self.calculations,
            total_tokens: self.total_tokens,
            total_tokens_legacy: self.total_tokens_legacy,
            chunk_count,
        }
    }
}
