use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use super::models::score_records::PersistedScoreRecord;
use crate::error::{Result, StandingsError};

/// Durable record of scrape runs.
///
/// Writes are keyed by `(run_id, name)`: writing the same key again overwrites.
/// A failed item aborts the call, but items written before it stay written.
pub trait ScoreStore {
    fn put_records(&self, records: &[PersistedScoreRecord]) -> impl Future<Output = Result<()>> + Send;

    fn records_for_run(&self, run_id: &str) -> impl Future<Output = Result<Vec<PersistedScoreRecord>>> + Send;
}

/// In-process store, used in tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: Mutex<BTreeMap<(String, String), PersistedScoreRecord>>,
    reject_name: Option<String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses any record for `name`, to exercise partial batch writes.
    pub fn rejecting(name: impl Into<String>) -> Self {
        Self {
            reject_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all_records(&self) -> Result<Vec<PersistedScoreRecord>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<(String, String), PersistedScoreRecord>>> {
        self.records
            .lock()
            .map_err(|_| StandingsError::Store("memory store lock poisoned".to_string()))
    }
}

impl ScoreStore for MemoryScoreStore {
    async fn put_records(&self, records: &[PersistedScoreRecord]) -> Result<()> {
        let mut stored = self.lock()?;
        for record in records {
            if self.reject_name.as_deref() == Some(record.name.as_str()) {
                return Err(StandingsError::Store(format!("rejected record for {}", record.name)));
            }
            stored.insert((record.run_id.clone(), record.name.clone()), record.clone());
        }
        Ok(())
    }

    async fn records_for_run(&self, run_id: &str) -> Result<Vec<PersistedScoreRecord>> {
        let mut found: Vec<_> = self
            .lock()?
            .values()
            .filter(|r| r.run_id == run_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        Ok(found)
    }
}
