//! Question generator.
//!
//! Turns an operation and an integer range into a [`Question`]: prompt text,
//! the correct answer, and four shuffled options. Generation is pure and
//! synchronous; all randomness comes from the caller's `Rng`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::GeneratorError;
use crate::model::{Answer, OperationKind, Question};
use crate::options::build_options;
use crate::random::{between, from_entropy, pick, seeded};
use crate::trig::{self, TrigFunction, ANGLES};

/// Largest divisor a division question uses.
pub const MAX_DIVISOR: i64 = 20;

/// Smallest divisor and quotient a division question uses.
pub const MIN_DIVISOR: i64 = 2;

/// Generate one question for `operation` with operands drawn from `min..=max`.
///
/// `Mixed` resolves to one of [`OperationKind::MIXABLE`] that can be built
/// from the range. Trigonometry ignores the range.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    operation: OperationKind,
    min: i64,
    max: i64,
) -> Result<Question, GeneratorError> {
    let (prompt, correct_answer) = match operation {
        OperationKind::Mixed => {
            check_range(OperationKind::Addition, min, max)?;
            let candidates: Vec<OperationKind> = OperationKind::MIXABLE
                .iter()
                .copied()
                .filter(|op| check_range(*op, min, max).is_ok())
                .collect();
            let chosen = pick(rng, &candidates);
            tracing::debug!(%chosen, "mixed resolved");
            return generate(rng, chosen, min, max);
        }
        OperationKind::Trigonometry => trigonometry(rng),
        op => {
            check_range(op, min, max)?;
            arithmetic(rng, op, min, max)
        }
    };

    let options = build_options(rng, correct_answer, operation);
    Ok(Question {
        prompt,
        correct_answer,
        options,
        operation,
    })
}

/// Like [`generate`], parsing the operation from a case-insensitive tag.
pub fn generate_tag<R: Rng + ?Sized>(
    rng: &mut R,
    tag: &str,
    min: i64,
    max: i64,
) -> Result<Question, GeneratorError> {
    let operation: OperationKind = tag.parse()?;
    generate(rng, operation, min, max)
}

/// Generate `count` independent questions.
pub fn generate_set<R: Rng + ?Sized>(
    rng: &mut R,
    operation: OperationKind,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<Question>, GeneratorError> {
    (0..count)
        .map(|_| generate(rng, operation, min, max))
        .collect()
}

/// Verify that `min..=max` can produce a question for `operation`.
///
/// Results are bounded by the operand of largest magnitude, so checking
/// that one is enough to rule out overflow.
pub fn check_range(operation: OperationKind, min: i64, max: i64) -> Result<(), GeneratorError> {
    if operation == OperationKind::Trigonometry {
        return Ok(());
    }
    if min > max {
        return Err(GeneratorError::invalid_range(
            min,
            max,
            "min is greater than max",
        ));
    }

    let overflow = || GeneratorError::invalid_range(min, max, "result does not fit in i64");
    let largest = min
        .checked_abs()
        .zip(max.checked_abs())
        .map(|(a, b)| a.max(b))
        .ok_or_else(overflow)?;
    match operation {
        OperationKind::Addition => {
            largest.checked_add(largest).ok_or_else(overflow)?;
        }
        OperationKind::Subtraction => {
            max.checked_sub(min).ok_or_else(overflow)?;
        }
        OperationKind::Multiplication | OperationKind::Square => {
            largest.checked_mul(largest).ok_or_else(overflow)?;
        }
        OperationKind::Cube => {
            largest
                .checked_mul(largest)
                .and_then(|sq| sq.checked_mul(largest))
                .ok_or_else(overflow)?;
        }
        OperationKind::Division => {
            let (lo, hi) = divisor_bounds(min, max);
            if lo > hi {
                return Err(GeneratorError::invalid_range(
                    min,
                    max,
                    "division needs a divisor range within 2..=20",
                ));
            }
            hi.checked_mul(max).ok_or_else(overflow)?;
        }
        OperationKind::Trigonometry | OperationKind::Mixed => {}
    }
    Ok(())
}

fn divisor_bounds(min: i64, max: i64) -> (i64, i64) {
    (min.max(MIN_DIVISOR), max.min(MAX_DIVISOR))
}

/// Prompt and answer for a range-checked numeric operation.
fn arithmetic<R: Rng + ?Sized>(
    rng: &mut R,
    operation: OperationKind,
    min: i64,
    max: i64,
) -> (String, Answer) {
    match operation {
        OperationKind::Addition => {
            let a = between(rng, min, max);
            let b = between(rng, min, max);
            (format!("{a} + {b} = ?"), Answer::Number(a + b))
        }
        OperationKind::Subtraction => {
            let a = between(rng, min, max);
            let b = between(rng, min, a.min(max));
            (format!("{a} - {b} = ?"), Answer::Number(a - b))
        }
        OperationKind::Multiplication => {
            let a = between(rng, min, max);
            let b = between(rng, min, max);
            (format!("{a} × {b} = ?"), Answer::Number(a * b))
        }
        OperationKind::Division => {
            let (lo, hi) = divisor_bounds(min, max);
            let divisor = between(rng, lo, hi);
            let quotient = between(rng, lo, max);
            let dividend = divisor * quotient;
            (
                format!("{dividend} ÷ {divisor} = ?"),
                Answer::Number(quotient),
            )
        }
        OperationKind::Square => {
            let a = between(rng, min, max);
            (format!("{a}² = ?"), Answer::Number(a * a))
        }
        OperationKind::Cube => {
            let a = between(rng, min, max);
            (format!("{a}³ = ?"), Answer::Number(a * a * a))
        }
        OperationKind::Trigonometry | OperationKind::Mixed => {
            unreachable!("{operation} is not a numeric operation")
        }
    }
}

fn trigonometry<R: Rng + ?Sized>(rng: &mut R) -> (String, Answer) {
    let row = rng.gen_range(0..ANGLES.len());
    let function = pick(rng, &TrigFunction::ALL);
    let (angle, value) = trig::entry(row, function);
    (format!("{function} {angle}° = ?"), Answer::Trig(value))
}

/// A generator that owns its random source.
///
/// Use [`QuestionGenerator::seeded`] for reproducible question sets.
pub struct QuestionGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl QuestionGenerator<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: seeded(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: from_entropy() }
    }
}

impl Default for QuestionGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(
        &mut self,
        operation: OperationKind,
        min: i64,
        max: i64,
    ) -> Result<Question, GeneratorError> {
        generate(&mut self.rng, operation, min, max)
    }

    pub fn generate_tag(
        &mut self,
        tag: &str,
        min: i64,
        max: i64,
    ) -> Result<Question, GeneratorError> {
        generate_tag(&mut self.rng, tag, min, max)
    }

    pub fn generate_set(
        &mut self,
        operation: OperationKind,
        min: i64,
        max: i64,
        count: usize,
    ) -> Result<Vec<Question>, GeneratorError> {
        generate_set(&mut self.rng, operation, min, max, count)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
