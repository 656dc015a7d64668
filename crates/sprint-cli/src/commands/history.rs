//! The `maths-sprint history` command.

use std::path::Path;

use anyhow::Result;
use chrono::{Local, TimeZone};
use comfy_table::{Cell, Table};

use sprint_core::record::QuizRecord;
use sprint_store::{load_config_from, ResultStore};

pub async fn execute(config_path: Option<&Path>, limit: usize) -> Result<()> {
    let config = load_config_from(config_path)?;
    let records = config.open_store().load().await?;

    if records.is_empty() {
        println!("No quizzes recorded yet. Run `maths-sprint quiz` to start.");
        return Ok(());
    }

    println!(
        "Showing {} of {} stored quizzes, newest first",
        limit.min(records.len()),
        records.len()
    );
    println!("{}", history_table(&records, limit));
    Ok(())
}

fn history_table(records: &[QuizRecord], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Time", "Operation", "Score", "Accuracy", "Duration"]);

    for record in records.iter().rev().take(limit) {
        let finished = Local
            .timestamp_millis_opt(record.timestamp)
            .single()
            .map(|at| at.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(record.date),
            Cell::new(finished),
            Cell::new(format!("{} {}", record.operation.symbol(), record.operation)),
            Cell::new(format!("{}/{}", record.correct_answers, record.total_questions)),
            Cell::new(format!("{}%", record.accuracy())),
            Cell::new(format!("{}s", record.total_time_seconds)),
        ]);
    }
    table
}
