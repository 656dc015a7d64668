//! sprint-core: question generation, distractors, quiz sessions and statistics.
//!
//! This crate defines the data model and the pure, synchronous logic that the
//! rest of maths-sprint builds on. It performs no I/O.

pub mod error;
pub mod generator;
pub mod model;
pub mod options;
pub mod random;
pub mod record;
pub mod session;
pub mod statistics;
pub mod trig;

pub use error::{GeneratorError, SessionError};
pub use generator::{generate, generate_set, generate_tag, QuestionGenerator};
pub use model::{Answer, OperationKind, Question};
pub use trig::TrigValue;
