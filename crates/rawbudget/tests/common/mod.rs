use rawbudget_core::BudgetConfig;
use rawbudget_telemetry::{Activity, Behavior, Record};

pub fn sample_config() -> BudgetConfig {
    BudgetConfig {
        char_limit: 11_000,
        safety_fraction: 0.8,
        legacy_tokens_per_char: 0.35,
        modern_chars_per_token: 4.0,
        tail_policy: Default::default(),
        cost_per_million_tokens: 0.05,
    }
}

/// Campus telemetry samples 30 seconds apart
pub fn sample_records(count: usize) -> Vec<Record> {
    let behaviors = [Behavior::Moderate, Behavior::Aggressive, Behavior::Calm];
    let activities = [
        Activity::Moving,
        Activity::Stopped,
        Activity::Turning,
        Activity::Accelerating,
        Activity::Braking,
    ];
    let clusters = [
        "Klaus_Area",
        "Student_Center",
        "Tech_Square",
        "CRC_Zone",
        "Library_Quad",
    ];

    (0..count)
        .map(|i| {
            let seconds = i * 30;
            let offset = (i % 100) as f64 - 50.0;
            Record::new(
                i as i64,
                format!(
                    "2024-10-24T{:02}:{:02}:{:02}Z",
                    8 + seconds / 3600,
                    seconds / 60 % 60,
                    seconds % 60
                ),
                behaviors[i % behaviors.len()],
                (33.775 + offset * 0.0004, -84.39 + offset * 0.0004),
                clusters[i % clusters.len()],
                activities[i % activities.len()],
            )
        })
        .collect()
}
