//! JSON file-backed result store.
//!
//! The file is a flat key-value JSON object standing in for client-local
//! storage. Quiz history lives under [`RESULTS_KEY`]; other keys are
//! preserved untouched.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use sprint_core::record::QuizRecord;

use crate::error::StoreError;
use crate::traits::{trim_history, ResultStore, DEFAULT_HISTORY_LIMIT};

/// Key the quiz history is stored under.
pub const RESULTS_KEY: &str = "mathsSprintResults";

type Document = Map<String, Value>;

/// Result store persisted to a single JSON document.
pub struct JsonFileStore {
    path: PathBuf,
    history_limit: usize,
    /// Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            write_lock: Mutex::new(()),
        }
    }

    /// Override how many records are kept. A limit of zero is raised to one.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        match serde_json::from_str::<Document>(&content) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "store is not a JSON object, starting fresh: {e}"
                );
                Ok(Document::new())
            }
        }
    }

    fn records_from(&self, doc: &Document) -> Vec<QuizRecord> {
        let Some(value) = doc.get(RESULTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_value::<Vec<QuizRecord>>(value.clone()) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "discarding unreadable quiz history: {e}"
                );
                Vec::new()
            }
        }
    }

    /// Write via a sibling temp file and rename so readers never see a
    /// half-written document.
    async fn write_document(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(doc)?;
        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[async_trait]
impl ResultStore for JsonFileStore {
    async fn append(&self, record: QuizRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.read_document().await?;
        let mut records = self.records_from(&doc);
        let id = record.id;
        records.push(record);
        trim_history(&mut records, self.history_limit);

        doc.insert(RESULTS_KEY.to_string(), serde_json::to_value(&records)?);
        self.write_document(&doc).await?;

        tracing::info!(%id, stored = records.len(), "quiz result saved");
        Ok(())
    }

    async fn load(&self) -> Result<Vec<QuizRecord>, StoreError> {
        let doc = self.read_document().await?;
        Ok(self.records_from(&doc))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.read_document().await?;
        if doc.remove(RESULTS_KEY).is_some() {
            self.write_document(&doc).await?;
            tracing::info!(path = %self.path.display(), "quiz history cleared");
        }
        Ok(())
    }
}
