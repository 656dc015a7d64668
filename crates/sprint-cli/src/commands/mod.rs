//! Subcommand implementations.

pub mod clear;
pub mod generate;
pub mod history;
pub mod init;
pub mod profile;
pub mod quiz;
pub mod stats;

use anyhow::{Context, Result};
use sprint_core::model::OperationKind;
use sprint_core::session::QuizConfig;
use sprint_core::QuestionGenerator;
use sprint_store::SprintConfig;

use crate::QuestionArgs;

/// Merge command-line overrides onto the configured defaults.
pub(crate) fn quiz_config(args: &QuestionArgs, config: &SprintConfig) -> Result<QuizConfig> {
    let operation: OperationKind = args
        .operation
        .parse()
        .with_context(|| format!("cannot build questions for {:?}", args.operation))?;
    Ok(QuizConfig {
        operation,
        min: args.min.unwrap_or(config.default_min),
        max: args.max.unwrap_or(config.default_max),
        question_count: args.count.unwrap_or(config.default_question_count),
    })
}

/// A seeded generator when `seed` is given, otherwise one seeded from entropy.
pub(crate) fn generator_for(seed: Option<u64>) -> QuestionGenerator {
    match seed {
        Some(seed) => QuestionGenerator::seeded(seed),
        None => QuestionGenerator::from_entropy(),
    }
}
