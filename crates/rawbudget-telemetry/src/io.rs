//! Dataset loading and atomic file writes

use crate::types::Dataset;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a telemetry dataset from a JSON array or a JSONL file
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let records: Dataset = read_records(path)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Read records from either a JSON array or one JSON object per line.
///
/// The format is picked from the first non-whitespace byte. In JSONL mode
/// malformed lines are skipped; a malformed array fails as a whole.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let contents = std::fs::read_to_string(path)?;

    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(&contents)?);
    }

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(line = index + 1, error = %err, "skipping malformed line");
            }
        }
    }

    Ok(records)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Behavior;
    use std::io::Write;

    #[test]
    fn test_load_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
  {{"id": 0, "behavior": "Moderate", "cluster": "Tech_Square"}},
  {{"id": 1, "behavior": "Calm"}}
]"#
        )
        .unwrap();

        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cluster.as_deref(), Some("Tech_Square"));
        assert_eq!(records[1].behavior, Some(Behavior::Calm));
    }

    #[test]
    fn test_load_jsonl_skips_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 0, "behavior": "Aggressive"}}"#).unwrap();
        writeln!(file, "not json at all").unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"id": 2}}"#).unwrap();

        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(0));
        assert_eq!(records[1].id, Some(2));
    }

    #[test]
    fn test_load_malformed_array_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"id\": 0}},").unwrap();

        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_atomic_write() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("nested").join("export.json");

        let data = b"{\"ok\": true}";
        atomic_write(&test_file, data).unwrap();

        let read_data = std::fs::read(&test_file).unwrap();
        assert_eq!(data, read_data.as_slice());
        assert!(!test_file.with_extension("tmp").exists());
    }
}
