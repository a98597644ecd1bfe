use rawbudget_core::Question;

const BENCHMARK: [(&str, &str, &str); 5] = [
    (
        "aggressive-driving",
        "Tell me about aggressive driving behaviors around campus",
        "Should identify Klaus and Student Center as hotspots, mention hard braking or rapid acceleration",
    ),
    (
        "dwell-time",
        "Which parts of campus have the highest dwell time associated with them",
        "Should mention long pauses near Student Center, CRC, or Klaus with durations over 2 minutes",
    ),
    (
        "moderate-behavior",
        "How many instances of moderate driving behavior can be found on campus",
        "Should provide a numeric count of 'Moderate' behavior events from the dataset",
    ),
    (
        "route-efficiency",
        "How efficient was the bus route",
        "Should mention efficiency ratio and compare traveled distance to straight-line distance",
    ),
    (
        "tech-square-patterns",
        "What are the driving patterns like around Tech Square",
        "Should reference Tech Square and describe behavior types (moderate, aggressive) found there",
    ),
];

/// Built-in benchmark questions about campus bus telemetry
pub fn benchmark_questions() -> Vec<Question> {
    BENCHMARK
        .iter()
        .map(|(id, question, ground_truth)| Question {
            id: id.to_string(),
            question: question.to_string(),
            ground_truth: Some(ground_truth.to_string()),
        })
        .collect()
}
