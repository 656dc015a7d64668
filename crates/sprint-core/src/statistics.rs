//! Aggregate statistics over the quiz history.
//!
//! Per-operation accuracy with ranking tiers, a single-day summary, and an
//! all-time summary with accuracy streaks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::OperationKind;
use crate::record::QuizRecord;

/// Quizzes at or above this accuracy extend a streak.
pub const STREAK_ACCURACY: u32 = 80;

/// `correct / total` as a rounded percentage; 0 when nothing was attempted.
pub fn accuracy_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Ranking tier of an operation relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Strongest,
    Medium,
    Weakest,
    Unattempted,
}

/// Statistics for one operation across every stored quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStats {
    pub operation: OperationKind,
    /// Questions attempted across all quizzes.
    pub total_attempts: u32,
    /// Number of quizzes taken.
    pub quizzes: usize,
    pub accuracy: u32,
    /// Mean time per quiz in seconds.
    pub average_time_seconds: u64,
    pub rank: Rank,
}

/// Per-operation statistics for the tracked operations, in menu order.
///
/// Operations are sorted by accuracy (stable, descending) and ranked by
/// position: the top two are strongest, the next three medium, the rest
/// weakest. Operations with no quizzes are `Unattempted`. Mixed quizzes
/// are not attributed to any operation.
pub fn operation_stats(records: &[QuizRecord]) -> Vec<OperationStats> {
    let mut stats: Vec<OperationStats> = OperationKind::TRACKED
        .iter()
        .map(|&operation| {
            let runs: Vec<&QuizRecord> =
                records.iter().filter(|r| r.operation == operation).collect();
            let totals = Totals::of(runs.iter().copied());
            OperationStats {
                operation,
                total_attempts: totals.questions,
                quizzes: runs.len(),
                accuracy: totals.accuracy(),
                average_time_seconds: totals.average_time(),
                rank: Rank::Unattempted,
            }
        })
        .collect();

    let mut order: Vec<usize> = (0..stats.len()).collect();
    order.sort_by(|&a, &b| stats[b].accuracy.cmp(&stats[a].accuracy));

    for (position, &i) in order.iter().enumerate() {
        if stats[i].quizzes == 0 {
            continue;
        }
        stats[i].rank = match position {
            0..=1 => Rank::Strongest,
            2..=4 => Rank::Medium,
            _ => Rank::Weakest,
        };
    }

    stats
}

/// Totals for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub quizzes: usize,
    pub total_attempted: u32,
    pub accuracy: u32,
    pub average_time_seconds: u64,
}

pub fn day_summary(records: &[QuizRecord], day: NaiveDate) -> DaySummary {
    let todays: Vec<&QuizRecord> = records.iter().filter(|r| r.date == day).collect();
    let totals = Totals::of(todays.iter().copied());
    DaySummary {
        day,
        quizzes: todays.len(),
        total_attempted: totals.questions,
        accuracy: totals.accuracy(),
        average_time_seconds: totals.average_time(),
    }
}

/// All-time totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub total_quizzes: usize,
    /// Mean of the per-quiz accuracies.
    pub average_accuracy: f64,
    /// Longest run of consecutive quizzes at or above [`STREAK_ACCURACY`].
    pub best_streak: u32,
    /// Run of qualifying quizzes ending with the most recent one.
    pub current_streak: u32,
    pub total_time_seconds: u64,
}

/// Summarise `records`, which must be in chronological order.
pub fn overall_summary(records: &[QuizRecord]) -> OverallSummary {
    let mut best_streak = 0;
    let mut current_streak = 0;
    for record in records {
        if record.accuracy() >= STREAK_ACCURACY {
            current_streak += 1;
            best_streak = best_streak.max(current_streak);
        } else {
            current_streak = 0;
        }
    }

    let average_accuracy = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.accuracy() as f64).sum::<f64>() / records.len() as f64
    };

    OverallSummary {
        total_quizzes: records.len(),
        average_accuracy,
        best_streak,
        current_streak,
        total_time_seconds: records.iter().map(|r| r.total_time_seconds).sum(),
    }
}

#[derive(Default)]
struct Totals {
    quizzes: u64,
    questions: u32,
    correct: u32,
    seconds: u64,
}

impl Totals {
    fn of<'a>(records: impl Iterator<Item = &'a QuizRecord>) -> Self {
        records.fold(Totals::default(), |mut t, r| {
            t.quizzes += 1;
            t.questions += r.total_questions;
            t.correct += r.correct_answers;
            t.seconds += r.total_time_seconds;
            t
        })
    }

    fn accuracy(&self) -> u32 {
        accuracy_percent(self.correct, self.questions)
    }

    fn average_time(&self) -> u64 {
        if self.quizzes == 0 {
            return 0;
        }
        (self.seconds as f64 / self.quizzes as f64).round() as u64
    }
}
