//! The `maths-sprint generate` command.

use std::path::Path;

use anyhow::Result;

use sprint_core::model::Question;
use sprint_store::load_config_from;

use crate::QuestionArgs;

pub fn execute(config_path: Option<&Path>, args: QuestionArgs, format: String) -> Result<()> {
    let config = load_config_from(config_path)?;
    let quiz = super::quiz_config(&args, &config)?;
    let mut generator = super::generator_for(args.seed);

    let questions =
        generator.generate_set(quiz.operation, quiz.min, quiz.max, quiz.question_count)?;
    tracing::debug!(count = questions.len(), operation = %quiz.operation, "questions generated");

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&questions)?),
        "text" => print!("{}", render_text(&questions)),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
    Ok(())
}

fn render_text(questions: &[Question]) -> String {
    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, question.prompt));
        let options: Vec<String> = question
            .options
            .iter()
            .enumerate()
            .map(|(n, option)| format!("{}) {option}", n + 1))
            .collect();
        out.push_str(&format!("   {}\n", options.join("   ")));
    }
    out
}
