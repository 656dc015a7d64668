//! Quiz session driver.
//!
//! Builds a fixed-length question set up front, grades answers one at a
//! time, and produces the end-of-quiz summary.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::generator::generate_set;
use crate::model::{Answer, OperationKind, Question};
use crate::statistics::accuracy_percent;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    pub operation: OperationKind,
    pub min: i64,
    pub max: i64,
    pub question_count: usize,
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: Answer,
    /// True once the last question has been answered.
    pub finished: bool,
}

/// End-of-quiz totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    /// The operation that was requested, `Mixed` included.
    pub operation: OperationKind,
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub total_time_seconds: u64,
}

impl QuizSummary {
    pub fn accuracy(&self) -> u32 {
        accuracy_percent(self.correct_answers, self.total_questions)
    }

    pub fn performance(&self) -> PerformanceBand {
        PerformanceBand::from_percentage(self.accuracy())
    }
}

/// One run of N sequential questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<Question>,
    index: usize,
    correct: u32,
    wrong: u32,
}

impl QuizSession {
    /// Generate every question for `config`.
    ///
    /// A generator error aborts the whole quiz; nothing is half-built.
    pub fn start<R: Rng + ?Sized>(rng: &mut R, config: QuizConfig) -> Result<Self, SessionError> {
        if config.question_count == 0 {
            return Err(SessionError::EmptyQuiz);
        }
        let questions = generate_set(
            rng,
            config.operation,
            config.min,
            config.max,
            config.question_count,
        )?;
        tracing::debug!(
            operation = %config.operation,
            count = questions.len(),
            "quiz started"
        );
        Ok(Self::from_questions(config, questions))
    }

    /// Resume with an already generated question list.
    pub fn from_questions(config: QuizConfig, questions: Vec<Question>) -> Self {
        Self {
            config,
            questions,
            index: 0,
            correct: 0,
            wrong: 0,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The question awaiting an answer, or `None` when finished.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Zero-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong
    }

    /// Grade `answer` against the current question and move on.
    pub fn submit(&mut self, answer: Answer) -> Result<AnswerOutcome, SessionError> {
        let question = self.current().ok_or(SessionError::Finished)?;
        let correct = question.is_correct(&answer);
        let correct_answer = question.correct_answer;

        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        self.index += 1;

        Ok(AnswerOutcome {
            correct,
            correct_answer,
            finished: self.is_finished(),
        })
    }

    /// Summarise the quiz. Unanswered questions count as wrong.
    pub fn summary(&self, elapsed: Duration) -> QuizSummary {
        let total = self.questions.len() as u32;
        QuizSummary {
            operation: self.config.operation,
            score: self.correct,
            total_questions: total,
            correct_answers: self.correct,
            wrong_answers: total - self.correct,
            total_time_seconds: elapsed.as_secs(),
        }
    }
}

/// Completion-screen verdict for a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    MorePracticeNeeded,
    KeepPracticing,
    GoodWork,
    GreatJob,
    Excellent,
    Outstanding,
}

impl PerformanceBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => PerformanceBand::Outstanding,
            80..=89 => PerformanceBand::Excellent,
            70..=79 => PerformanceBand::GreatJob,
            60..=69 => PerformanceBand::GoodWork,
            50..=59 => PerformanceBand::KeepPracticing,
            _ => PerformanceBand::MorePracticeNeeded,
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceBand::Outstanding => write!(f, "Outstanding!"),
            PerformanceBand::Excellent => write!(f, "Excellent!"),
            PerformanceBand::GreatJob => write!(f, "Great Job!"),
            PerformanceBand::GoodWork => write!(f, "Good Work!"),
            PerformanceBand::KeepPracticing => write!(f, "Keep Practicing!"),
            PerformanceBand::MorePracticeNeeded => write!(f, "More Practice Needed!"),
        }
    }
}
