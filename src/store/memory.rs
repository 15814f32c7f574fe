//! In-memory prediction store

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use rustc_hash::FxHashMap;

use super::{PredictionRecord, PredictionStore};

/// Records grouped by user, kept in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<FxHashMap<String, Vec<PredictionRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all users
    pub fn len(&self) -> usize {
        self.records
            .read()
            .map(|records| records.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PredictionStore for MemoryStore {
    fn insert(&self, record: PredictionRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("prediction store lock poisoned"))?;
        records.entry(record.user_id.clone()).or_default().push(record);
        Ok(())
    }

    fn history(&self, user_id: &str) -> Result<Vec<PredictionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("prediction store lock poisoned"))?;

        // Reverse first so the stable sort keeps newer inserts ahead on ties
        let mut history: Vec<PredictionRecord> = records
            .get(user_id)
            .map(|user_records| user_records.iter().rev().cloned().collect())
            .unwrap_or_default();
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(history)
    }
}
