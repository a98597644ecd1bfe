use rawbudget_telemetry::{Activity, Behavior, Record};
use serde::{Deserialize, Serialize};

/// A record re-keyed to short field names to shrink the serialized dataset.
///
/// Field order matches the serialized key order: `b, t, c, i, cl, a`.
/// Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedRecord {
    #[serde(rename = "b")]
    pub behavior: Option<Behavior>,
    #[serde(rename = "t")]
    pub timestamp: Option<String>,
    #[serde(rename = "c")]
    pub coordinates: Option<(f64, f64)>,
    #[serde(rename = "i")]
    pub id: Option<i64>,
    #[serde(rename = "cl")]
    pub cluster: Option<String>,
    #[serde(rename = "a")]
    pub activity: Option<Activity>,
}

impl From<&Record> for CompressedRecord {
    fn from(record: &Record) -> Self {
        Self {
            behavior: record.behavior,
            timestamp: record.timestamp.clone(),
            coordinates: record.coordinates,
            id: record.id,
            cluster: record.cluster.clone(),
            activity: record.activity,
        }
    }
}

pub fn compress_dataset(records: &[Record]) -> Vec<CompressedRecord> {
    records.iter().map(CompressedRecord::from).collect()
}

/// Pretty JSON (two-space indent); this is the text the chunker budgets
pub fn serialize_compressed(records: &[CompressedRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

pub fn compress_and_serialize(records: &[Record]) -> Result<String, serde_json::Error> {
    serialize_compressed(&compress_dataset(records))
}
