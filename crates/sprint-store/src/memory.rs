//! In-memory result store for tests and embedding.

use async_trait::async_trait;
use tokio::sync::RwLock;

use sprint_core::record::QuizRecord;

use crate::error::StoreError;
use crate::traits::{trim_history, ResultStore, DEFAULT_HISTORY_LIMIT};

/// A result store that lives only as long as the process.
pub struct MemoryStore {
    records: RwLock<Vec<QuizRecord>>,
    history_limit: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            history_limit: limit.max(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn append(&self, record: QuizRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(record);
        trim_history(&mut records, self.history_limit);
        Ok(())
    }

    async fn load(&self) -> Result<Vec<QuizRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }
}
