//! Append-only JSON lines prediction store
//!
//! One record per line. Existing lines are loaded on open; later inserts are
//! appended and mirrored into an in-memory index for reads.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use super::memory::MemoryStore;
use super::{PredictionRecord, PredictionStore};

pub struct JsonlStore {
    path: PathBuf,
    file: Mutex<File>,
    index: MemoryStore,
}

impl JsonlStore {
    /// Open (or create) the store file and load existing records
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
        }

        let index = MemoryStore::new();
        if path.exists() {
            let reader = BufReader::new(
                File::open(&path).with_context(|| format!("Failed to read store file: {:?}", path))?,
            );
            for (idx, line) in reader.lines().enumerate() {
                let line = line.with_context(|| format!("Failed to read line {} of {:?}", idx + 1, path))?;
                if line.trim().is_empty() {
                    continue;
                }
                let record: PredictionRecord = serde_json::from_str(&line)
                    .with_context(|| format!("Malformed record on line {} of {:?}", idx + 1, path))?;
                index.insert(record)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open store file for append: {:?}", path))?;

        tracing::info!("Loaded {} prediction records from {:?}", index.len(), path);

        Ok(Self {
            path,
            file: Mutex::new(file),
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PredictionStore for JsonlStore {
    fn insert(&self, record: PredictionRecord) -> Result<()> {
        let mut line = serde_json::to_string(&record).context("Failed to encode prediction record")?;
        line.push('\n');

        {
            let mut file = self
                .file
                .lock()
                .map_err(|_| anyhow!("prediction store lock poisoned"))?;
            file.write_all(line.as_bytes())
                .and_then(|_| file.flush())
                .with_context(|| format!("Failed to append to {:?}", self.path))?;
        }

        self.index.insert(record)
    }

    fn history(&self, user_id: &str) -> Result<Vec<PredictionRecord>> {
        self.index.history(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::record;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "footprint-store-{}-{}-{}.jsonl",
            name,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ))
    }

    #[test]
    fn test_records_survive_reopen() {
        let path = temp_path("reopen");
        {
            let store = JsonlStore::open(&path).unwrap();
            store.insert(record("alice", 61, 1)).unwrap();
            store.insert(record("alice", 72, 2)).unwrap();
            store.insert(record("bob", 33, 3)).unwrap();
        }

        let reopened = JsonlStore::open(&path).unwrap();
        let history = reopened.history("alice").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sustainability_score, 72);
        assert_eq!(history[0], record("alice", 72, 2));
        assert_eq!(reopened.history("bob").unwrap().len(), 1);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_malformed_line_is_reported() {
        let path = temp_path("malformed");
        fs::write(&path, "{not json}\n").unwrap();

        let err = JsonlStore::open(&path).err().expect("open should fail");
        assert!(format!("{:#}", err).contains("line 1"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_record_uses_camel_case_fields() {
        let json = serde_json::to_value(record("alice", 50, 0)).unwrap();
        assert_eq!(json["userId"], "alice");
        assert_eq!(json["sustainabilityScore"], 50);
        assert_eq!(json["predictedCarbonEmission"], 1050.0);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2026-03-01T12:00:00"));
    }
}
