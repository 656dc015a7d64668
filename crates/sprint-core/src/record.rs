//! Persisted quiz history records.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::OperationKind;
use crate::session::QuizSummary;
use crate::statistics::accuracy_percent;

/// One finished quiz as stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    /// Records written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub operation: OperationKind,
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub total_time_seconds: u64,
    /// Local calendar day the quiz finished on.
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl QuizRecord {
    pub fn from_summary(summary: &QuizSummary, finished_at: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation: summary.operation,
            score: summary.score,
            total_questions: summary.total_questions,
            correct_answers: summary.correct_answers,
            wrong_answers: summary.wrong_answers,
            total_time_seconds: summary.total_time_seconds,
            date: finished_at.date_naive(),
            timestamp: finished_at.timestamp_millis(),
        }
    }

    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.correct_answers, self.total_questions)
    }
}
