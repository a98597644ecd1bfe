mod common;

use rawbudget_core::{BudgetConfig, CalculationKind, Question};
use rawbudget_pipeline::{difference_pct, Pipeline};
use rawbudget_prompt::raw_prompt;
use rawbudget_telemetry::{TokenEstimator, TokenStrategy};

fn question() -> Question {
    Question::new(
        "moderate-behavior",
        "How many instances of moderate driving behavior can be found on campus",
    )
}

#[test]
fn test_9000_chars_is_single_request() {
    let pipeline = Pipeline::new(common::sample_config()).unwrap();
    let plan = pipeline.plan_text(&"a".repeat(9000));
    let result = pipeline.analyze_question(&question(), &plan);

    assert_eq!(result.token_calculations.len(), 1);
    assert_eq!(
        result.token_calculations[0].kind,
        CalculationKind::SingleRequest
    );
    assert_eq!(result.chunk_count, None);
}

#[test]
fn test_exact_limit_is_single_request() {
    let pipeline = Pipeline::new(common::sample_config()).unwrap();
    let plan = pipeline.plan_text(&"a".repeat(11_000));
    assert!(plan.is_single_request);
    assert_eq!(plan.chunk_count(), 1);
}

#[test]
fn test_25000_chars_needs_three_chunks_and_synthesis() {
    let pipeline = Pipeline::new(common::sample_config()).unwrap();
    let text: String = "0123456789".repeat(2500);
    let plan = pipeline.plan_text(&text);
    let result = pipeline.analyze_question(&question(), &plan);

    assert_eq!(plan.chunk_sizes(), vec![8800, 8800, 7400]);
    assert_eq!(plan.reassemble(), text);
    assert_eq!(result.token_calculations.len(), 4);
    assert_eq!(
        result.token_calculations[3].kind,
        CalculationKind::FinalSynthesis
    );
    assert_eq!(result.chunk_count, Some(3));
}

#[test]
fn test_raw_template_scenario() {
    let prompt = raw_prompt("test", "[]");
    assert!(!prompt.contains("{{data}}"));
    assert!(!prompt.contains("{{userQuery}}"));
}

#[test]
fn test_4000_char_prompt_estimates() {
    let text = "p".repeat(4000);
    let estimator = TokenEstimator::default();
    let legacy = estimator.estimate(TokenStrategy::Legacy, &text);
    let modern = estimator.estimate(TokenStrategy::Modern, &text);

    assert_eq!(legacy, 1400);
    assert_eq!(modern, 1000);

    let pct = difference_pct(modern, legacy).unwrap();
    let expected = (1000.0 - 1400.0) / 1400.0 * 100.0;
    assert!((pct - expected).abs() < 1e-9);
}

#[test]
fn test_budgets_can_differ_across_threads() {
    let text = "z".repeat(30_000);
    let limits = [5_000usize, 11_000, 20_000, 40_000];

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = limits
            .iter()
            .map(|&char_limit| {
                let text = &text;
                scope.spawn(move || {
                    let pipeline = Pipeline::new(BudgetConfig {
                        char_limit,
                        ..common::sample_config()
                    })
                    .unwrap();
                    pipeline.plan_text(text).chunk_count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // chunk sizes 4000, 8800, 16000; 40000 fits whole
    assert_eq!(counts, vec![8, 4, 2, 1]);
}
