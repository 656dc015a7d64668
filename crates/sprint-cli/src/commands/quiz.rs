//! The `maths-sprint quiz` command.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;

use sprint_core::options::OPTION_COUNT;
use sprint_core::record::QuizRecord;
use sprint_core::session::{QuizSession, QuizSummary};
use sprint_store::{load_config_from, ResultStore};

use crate::QuestionArgs;

/// How the answer loop ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Completed,
    Quit,
}

pub async fn execute(config_path: Option<&Path>, args: QuestionArgs) -> Result<()> {
    let config = load_config_from(config_path)?;
    let quiz = super::quiz_config(&args, &config)?;
    let mut generator = super::generator_for(args.seed);
    let mut session = QuizSession::start(generator.rng_mut(), quiz)?;

    println!(
        "{} quiz: {} questions between {} and {}",
        quiz.operation,
        session.len(),
        quiz.min,
        quiz.max
    );

    let started = Instant::now();
    let outcome = answer_loop(&mut session, io::stdin().lock(), io::stdout())?;
    if outcome == Outcome::Quit {
        println!("\nQuiz ended early; result not saved.");
        return Ok(());
    }

    let summary = session.summary(started.elapsed());
    println!("\n{}", render_summary(&config.user_name, &summary));

    let store = config.open_store();
    store
        .append(QuizRecord::from_summary(&summary, Local::now()))
        .await
        .context("failed to save quiz result")?;
    println!("Result saved to {}", store.path().display());
    Ok(())
}

fn answer_loop<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    mut out: W,
) -> Result<Outcome> {
    let total = session.len();
    while let Some(question) = session.current() {
        writeln!(out, "\nQuestion {}/{total}: {}", session.index() + 1, question.prompt)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {option}", n + 1)?;
        }
        let options = question.options;

        let Some(choice) = read_choice(&mut input, &mut out)? else {
            return Ok(Outcome::Quit);
        };
        let graded = session.submit(options[choice])?;
        if graded.correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Wrong! The answer was {}.", graded.correct_answer)?;
        }
    }
    Ok(Outcome::Completed)
}

/// Zero-based option index, or `None` on `q` or end of input.
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<usize>> {
    loop {
        write!(out, "Your answer (1-{OPTION_COUNT}, q to quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n @ 1..=OPTION_COUNT) => return Ok(Some(n - 1)),
            _ => writeln!(out, "Please enter a number from 1 to {OPTION_COUNT}.")?,
        }
    }
}

fn render_summary(user_name: &str, summary: &QuizSummary) -> String {
    format!(
        "Quiz complete, {user_name}!\n\
         Score: {}/{} ({}%)\n\
         Correct: {}  Wrong: {}\n\
         Time: {}s\n\
         {}",
        summary.correct_answers,
        summary.total_questions,
        summary.accuracy(),
        summary.correct_answers,
        summary.wrong_answers,
        summary.total_time_seconds,
        summary.performance(),
    )
}
