//! Core data model types for maths-sprint.
//!
//! These are the types the generator hands to callers: the operation being
//! drilled, an answer value, and the finished multiple-choice question.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeneratorError;
use crate::trig::TrigValue;

/// The drill a question exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Square,
    Cube,
    Trigonometry,
    /// Picks one of [`OperationKind::MIXABLE`] per question.
    Mixed,
}

impl OperationKind {
    /// Every kind, in menu order.
    pub const ALL: [OperationKind; 8] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
        OperationKind::Square,
        OperationKind::Cube,
        OperationKind::Trigonometry,
        OperationKind::Mixed,
    ];

    /// Kinds `Mixed` draws from. Trigonometry and `Mixed` itself are excluded.
    pub const MIXABLE: [OperationKind; 6] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
        OperationKind::Square,
        OperationKind::Cube,
    ];

    /// Kinds that get their own row in per-operation statistics.
    pub const TRACKED: [OperationKind; 7] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
        OperationKind::Square,
        OperationKind::Cube,
        OperationKind::Trigonometry,
    ];

    /// Short symbol shown next to the operation name.
    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Addition => "+",
            OperationKind::Subtraction => "−",
            OperationKind::Multiplication => "×",
            OperationKind::Division => "÷",
            OperationKind::Square => "x²",
            OperationKind::Cube => "x³",
            OperationKind::Trigonometry => "θ",
            OperationKind::Mixed => "?",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Addition => write!(f, "addition"),
            OperationKind::Subtraction => write!(f, "subtraction"),
            OperationKind::Multiplication => write!(f, "multiplication"),
            OperationKind::Division => write!(f, "division"),
            OperationKind::Square => write!(f, "square"),
            OperationKind::Cube => write!(f, "cube"),
            OperationKind::Trigonometry => write!(f, "trigonometry"),
            OperationKind::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for OperationKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" => Ok(OperationKind::Addition),
            "subtraction" => Ok(OperationKind::Subtraction),
            "multiplication" => Ok(OperationKind::Multiplication),
            "division" => Ok(OperationKind::Division),
            "square" | "squares" => Ok(OperationKind::Square),
            "cube" | "cubes" => Ok(OperationKind::Cube),
            "trigonometry" => Ok(OperationKind::Trigonometry),
            "mixed" | "daily challenge" => Ok(OperationKind::Mixed),
            _ => Err(GeneratorError::UnknownOperation(s.to_string())),
        }
    }
}

/// An answer value: a whole number, or an exact trigonometric symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Trig(TrigValue),
}

impl Answer {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Trig(_) => None,
        }
    }

    pub fn as_trig(&self) -> Option<TrigValue> {
        match self {
            Answer::Trig(v) => Some(*v),
            Answer::Number(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Trig(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Number(n)
    }
}

impl From<TrigValue> for Answer {
    fn from(v: TrigValue) -> Self {
        Answer::Trig(v)
    }
}

/// A generated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Display text, e.g. `"7 + 3 = ?"`.
    pub prompt: String,
    /// The one correct option.
    pub correct_answer: Answer,
    /// Four distinct options in display order, containing `correct_answer` once.
    pub options: [Answer; 4],
    /// The concrete operation this question exercises (never `Mixed`).
    pub operation: OperationKind,
}

impl Question {
    /// Whether `answer` is the correct option.
    pub fn is_correct(&self, answer: &Answer) -> bool {
        *answer == self.correct_answer
    }

    /// Position of the correct answer within `options`.
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.correct_answer)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display_and_parse() {
        for op in OperationKind::ALL {
            assert_eq!(op.to_string().parse::<OperationKind>().unwrap(), op);
        }
        assert_eq!(
            "Addition".parse::<OperationKind>().unwrap(),
            OperationKind::Addition
        );
        assert_eq!(
            "SQUARES".parse::<OperationKind>().unwrap(),
            OperationKind::Square
        );
        assert_eq!("cubes".parse::<OperationKind>().unwrap(), OperationKind::Cube);
        assert_eq!(
            "Daily Challenge".parse::<OperationKind>().unwrap(),
            OperationKind::Mixed
        );
        assert_eq!(
            "modulo".parse::<OperationKind>(),
            Err(GeneratorError::UnknownOperation("modulo".into()))
        );
    }

    #[test]
    fn symbols_are_distinct() {
        let symbols: std::collections::HashSet<_> =
            OperationKind::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols.len(), OperationKind::ALL.len());
        assert_eq!(OperationKind::Multiplication.symbol(), "×");
    }

    #[test]
    fn mixable_excludes_trig_and_mixed() {
        assert!(!OperationKind::MIXABLE.contains(&OperationKind::Trigonometry));
        assert!(!OperationKind::MIXABLE.contains(&OperationKind::Mixed));
    }

    #[test]
    fn answer_serializes_as_number_or_string() {
        assert_eq!(serde_json::to_string(&Answer::Number(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&Answer::Trig(TrigValue::Root3)).unwrap(),
            "\"√3\""
        );
        let parsed: Answer = serde_json::from_str("\"1/2\"").unwrap();
        assert_eq!(parsed, Answer::Trig(TrigValue::Half));
        let parsed: Answer = serde_json::from_str("17").unwrap();
        assert_eq!(parsed, Answer::Number(17));
    }

    #[test]
    fn question_json_uses_camel_case() {
        let question = Question {
            prompt: "2 + 2 = ?".into(),
            correct_answer: Answer::Number(4),
            options: [4.into(), 5.into(), 9.into(), 1.into()],
            operation: OperationKind::Addition,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctAnswer"], 4);
        assert_eq!(json["operation"], "addition");
        assert_eq!(question.correct_index(), 0);
        assert!(question.is_correct(&Answer::Number(4)));
        assert!(!question.is_correct(&Answer::Number(5)));
    }
}
