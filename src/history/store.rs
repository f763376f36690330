use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::HistoryConfig;
use crate::error::HistoryError;
use crate::history::record::{HistorySummary, RoundOutcome, RoundRecord};

/// Round results, one JSON record per line. Without a path the store only
/// keeps results in memory.
pub struct HistoryStore {
    path: Option<PathBuf>,
    records: Vec<RoundRecord>,
}

impl HistoryStore {
    /// Load every record from `path`. A missing file is an empty history.
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        let records = if path.exists() {
            read_records(path)?
        } else {
            Vec::new()
        };
        log::debug!("loaded {} history records from {}", records.len(), path.display());
        Ok(HistoryStore {
            path: Some(path.to_path_buf()),
            records,
        })
    }

    /// Store that never touches the filesystem.
    pub fn in_memory() -> Self {
        HistoryStore {
            path: None,
            records: Vec::new(),
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Result<Self, HistoryError> {
        if config.enabled {
            Self::open(&config.path)
        } else {
            Ok(Self::in_memory())
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary::from_records(&self.records)
    }

    /// Record a finished round, writing it through to the file first.
    pub fn append(&mut self, outcome: RoundOutcome) -> Result<&RoundRecord, HistoryError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let record = RoundRecord { timestamp, outcome };

        if let Some(path) = &self.path {
            let line = serde_json::to_string(&record)?;
            let write_err = |source| HistoryError::Write {
                path: path.clone(),
                source,
            };
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(write_err)?;
            writeln!(file, "{}", line).map_err(write_err)?;
        }

        log::info!("recorded round result: {:?}", record.outcome);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }
}

fn read_records(path: &Path) -> Result<Vec<RoundRecord>, HistoryError> {
    let content = fs::read_to_string(path).map_err(|e| HistoryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| HistoryError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(&dir.path().join("results.jsonl")).unwrap();
        assert!(store.records().is_empty());
        assert_eq!(store.summary().rounds, 0);
    }

    #[test]
    fn test_append_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.jsonl");

        let mut store = HistoryStore::open(&path).unwrap();
        store
            .append(RoundOutcome::Win { name: "Ada".into() })
            .unwrap();
        store.append(RoundOutcome::Draw).unwrap();
        assert_eq!(store.records().len(), 2);

        let reloaded = HistoryStore::open(&path).unwrap();
        assert_eq!(reloaded.records(), store.records());
        let summary = reloaded.summary();
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.wins_for("Ada"), 1);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        fs::write(
            &path,
            "{\"timestamp\":1,\"outcome\":{\"result\":\"draw\"}}\n\nnot json\n",
        )
        .unwrap();

        match HistoryStore::open(&path) {
            Err(HistoryError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other.map(|s| s.records().len())),
        }
    }

    #[test]
    fn test_in_memory_store_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = HistoryConfig {
            enabled: false,
            path: dir.path().join("results.jsonl"),
        };
        let mut store = HistoryStore::from_config(&config).unwrap();
        store.append(RoundOutcome::Draw).unwrap();

        assert!(store.path().is_none());
        assert_eq!(store.records().len(), 1);
        assert!(!config.path.exists());
    }
}
