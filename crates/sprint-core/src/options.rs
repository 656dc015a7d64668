//! Distractor synthesis.
//!
//! Builds the four multiple-choice options for a question: the correct
//! answer plus three plausible wrong values drawn from an operation-specific
//! heuristic. The draw loop is bounded; when it comes up short a widening
//! pass finishes the set so this never fails.

use rand::Rng;

use crate::model::{Answer, OperationKind};
use crate::random::{between, pick, shuffle};
use crate::trig::TrigValue;

/// Number of options on every question.
pub const OPTION_COUNT: usize = 4;

/// Heuristic draws before falling back to the widening pass.
pub const MAX_DRAW_ATTEMPTS: usize = 20;

/// Random `correct ± 50` draws in the numeric widening pass before it
/// switches to deterministic stepping.
pub const MAX_WIDENING_DRAWS: usize = 50;

const WIDENING_SPREAD: i64 = 50;

/// Enough steps in each direction to cover three slots plus three collisions.
const WIDENING_STEPS: i64 = 2 * OPTION_COUNT as i64;

const CUBE_FACTORS: [f64; 6] = [0.5, 0.8, 1.2, 1.5, 2.0, 3.0];

/// Insertion-ordered set of at most four options.
struct OptionSet {
    values: Vec<Answer>,
}

impl OptionSet {
    fn new(correct: Answer) -> Self {
        let mut values = Vec::with_capacity(OPTION_COUNT);
        values.push(correct);
        Self { values }
    }

    fn is_full(&self) -> bool {
        self.values.len() >= OPTION_COUNT
    }

    fn contains(&self, answer: &Answer) -> bool {
        self.values.contains(answer)
    }

    /// Adds `answer` unless the set is full or already holds it.
    fn insert(&mut self, answer: Answer) -> bool {
        if self.is_full() || self.contains(&answer) {
            return false;
        }
        self.values.push(answer);
        true
    }

    fn into_array(self) -> [Answer; OPTION_COUNT] {
        match <[Answer; OPTION_COUNT]>::try_from(self.values) {
            Ok(options) => options,
            Err(values) => unreachable!("widening pass left {} options", values.len()),
        }
    }
}

/// Build four unique, shuffled options that include `correct` exactly once.
///
/// Symbolic answers draw from the trigonometry table; numeric answers use
/// the heuristic for `operation` and only ever add strictly positive values.
pub fn build_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: Answer,
    operation: OperationKind,
) -> [Answer; OPTION_COUNT] {
    let mut set = OptionSet::new(correct);

    match correct {
        Answer::Trig(value) => fill_trig(rng, &mut set, value),
        Answer::Number(n) => fill_numeric(rng, &mut set, n, operation),
    }

    let mut options = set.into_array();
    shuffle(rng, &mut options);
    options
}

fn fill_trig<R: Rng + ?Sized>(rng: &mut R, set: &mut OptionSet, correct: TrigValue) {
    // An undefined answer only gets finite distractors.
    let allowed = |v: &TrigValue| *v != correct && (correct.is_finite() || v.is_finite());
    let pool: Vec<TrigValue> = TrigValue::ALL.iter().copied().filter(allowed).collect();

    for _ in 0..MAX_DRAW_ATTEMPTS {
        if set.is_full() {
            return;
        }
        set.insert(Answer::Trig(pick(rng, &pool)));
    }

    if !set.is_full() {
        tracing::debug!(%correct, "trig draws came up short, widening");
    }
    for value in pool {
        if set.is_full() {
            break;
        }
        set.insert(Answer::Trig(value));
    }
}

fn fill_numeric<R: Rng + ?Sized>(
    rng: &mut R,
    set: &mut OptionSet,
    correct: i64,
    operation: OperationKind,
) {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        if set.is_full() {
            return;
        }
        let wrong = numeric_candidate(rng, correct, operation);
        if wrong > 0 {
            set.insert(Answer::Number(wrong));
        }
    }

    if set.is_full() {
        return;
    }
    tracing::debug!(correct, %operation, "numeric draws came up short, widening");

    for _ in 0..MAX_WIDENING_DRAWS {
        if set.is_full() {
            return;
        }
        let wrong = correct.saturating_add(between(rng, -WIDENING_SPREAD, WIDENING_SPREAD));
        if wrong > 0 {
            set.insert(Answer::Number(wrong));
        }
    }

    for step in 1..=WIDENING_STEPS {
        for wrong in [correct.checked_add(step), correct.checked_sub(step)]
            .into_iter()
            .flatten()
        {
            if set.is_full() {
                return;
            }
            if wrong > 0 {
                set.insert(Answer::Number(wrong));
            }
        }
    }

    // Answers at or below -WIDENING_STEPS have no positive neighbours.
    for wrong in 1..=WIDENING_STEPS {
        if set.is_full() {
            return;
        }
        set.insert(Answer::Number(wrong));
    }
}

/// One candidate wrong answer, rounded and made non-negative.
fn numeric_candidate<R: Rng + ?Sized>(rng: &mut R, correct: i64, operation: OperationKind) -> i64 {
    let c = correct as f64;
    let raw = match operation {
        OperationKind::Square => {
            let base = c.sqrt();
            let variations = [
                (base - 1.0).powi(2),
                (base + 1.0).powi(2),
                (base - 2.0).powi(2),
                (base + 2.0).powi(2),
                base * 10.0,
                base * base + base,
            ];
            pick(rng, &variations)
        }
        OperationKind::Cube => {
            let factor = pick(rng, &CUBE_FACTORS);
            let scaled = (c * factor).round();
            if rng.gen_bool(0.5) {
                let base = c.cbrt().round();
                let common_mistakes = [
                    base * base,
                    base * 10.0,
                    c + base,
                    (base + 1.0).powi(3),
                    (base - 1.0).powi(3),
                ];
                pick(rng, &common_mistakes)
            } else {
                scaled
            }
        }
        _ => {
            let range = ((c * 0.5).abs().round() as i64).max(10);
            let mut wrong = correct.saturating_add(between(rng, -range, range));
            if wrong <= 0 && correct > 0 {
                wrong = wrong.saturating_abs().saturating_add(1);
            }
            wrong as f64
        }
    };
    // `as` saturates, so huge intermediates clamp instead of wrapping.
    raw.round().abs() as i64
}
