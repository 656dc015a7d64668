//! The `maths-sprint stats` command.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

use sprint_core::statistics::{
    day_summary, operation_stats, overall_summary, OperationStats, Rank,
};
use sprint_store::{load_config_from, ResultStore};

pub async fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = load_config_from(config_path)?;
    let records = config.open_store().load().await?;

    println!("{}", operations_table(&operation_stats(&records)));

    let today = day_summary(&records, Local::now().date_naive());
    println!("\nToday ({})", today.day);
    println!(
        "  Quizzes: {}  Questions: {}  Accuracy: {}%  Avg time: {}s",
        today.quizzes, today.total_attempted, today.accuracy, today.average_time_seconds
    );

    let overall = overall_summary(&records);
    println!("\nAll time");
    println!(
        "  Quizzes: {}  Avg accuracy: {:.1}%  Best streak: {}  Current streak: {}  Total time: {}s",
        overall.total_quizzes,
        overall.average_accuracy,
        overall.best_streak,
        overall.current_streak,
        overall.total_time_seconds
    );
    Ok(())
}

fn operations_table(stats: &[OperationStats]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Operation",
        "Quizzes",
        "Questions",
        "Accuracy",
        "Avg time",
        "Rank",
    ]);

    for s in stats {
        table.add_row(vec![
            Cell::new(format!("{} {}", s.operation.symbol(), s.operation)),
            Cell::new(s.quizzes),
            Cell::new(s.total_attempts),
            Cell::new(format!("{}%", s.accuracy)),
            Cell::new(format!("{}s", s.average_time_seconds)),
            Cell::new(rank_label(s.rank)),
        ]);
    }
    table
}

fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Strongest => "strongest",
        Rank::Medium => "medium",
        Rank::Weakest => "needs work",
        Rank::Unattempted => "-",
    }
}
