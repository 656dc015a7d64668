//! The result store seam.

use async_trait::async_trait;

use sprint_core::record::QuizRecord;

use crate::error::StoreError;

/// How many quizzes the history keeps by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded, append-only quiz history.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Append a finished quiz, dropping the oldest records past the limit.
    async fn append(&self, record: QuizRecord) -> Result<(), StoreError>;

    /// All stored records, oldest first.
    async fn load(&self) -> Result<Vec<QuizRecord>, StoreError>;

    /// Remove every stored record.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Keep only the `limit` most recent records.
pub(crate) fn trim_history(records: &mut Vec<QuizRecord>, limit: usize) {
    if records.len() > limit {
        let excess = records.len() - limit;
        records.drain(..excess);
    }
}
