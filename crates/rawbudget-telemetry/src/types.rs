//! Telemetry record types

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Driving behavior label assigned to a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Moderate,
    Aggressive,
    Calm,
}

/// Vehicle activity at the time of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Moving,
    Stopped,
    Turning,
    Accelerating,
    Braking,
}

/// One bus telemetry sample.
///
/// Every field is optional: a missing field, or one holding a value of the
/// wrong shape, loads as `None` instead of rejecting the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    /// ISO-8601 timestamp, kept verbatim
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub behavior: Option<Behavior>,
    /// `[latitude, longitude]`
    #[serde(default, deserialize_with = "lenient")]
    pub coordinates: Option<(f64, f64)>,
    #[serde(default, deserialize_with = "lenient")]
    pub cluster: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub activity: Option<Activity>,
}

impl Record {
    pub fn new(
        id: i64,
        timestamp: impl Into<String>,
        behavior: Behavior,
        coordinates: (f64, f64),
        cluster: impl Into<String>,
        activity: Activity,
    ) -> Self {
        Self {
            id: Some(id),
            timestamp: Some(timestamp.into()),
            behavior: Some(behavior),
            coordinates: Some(coordinates),
            cluster: Some(cluster.into()),
            activity: Some(activity),
        }
    }
}

/// Ordered telemetry samples as handed over by a loader
pub type Dataset = Vec<Record>;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::warn!(%value, error = %err, "dropping malformed record field");
            Ok(None)
        }
    }
}
