//! The `maths-sprint profile` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use sprint_core::statistics::{operation_stats, overall_summary, Rank};
use sprint_store::config::{resolve_config_path, CONFIG_FILE};
use sprint_store::{load_config_from, set_user_name, ResultStore};

pub async fn execute(config_path: Option<&Path>, name: Option<String>) -> Result<()> {
    if let Some(name) = name {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => resolve_config_path(None)?.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)),
        };
        set_user_name(&path, &name)?;
        println!("Profile name set to {} in {}", name.trim(), path.display());
        return Ok(());
    }

    let config = load_config_from(config_path)?;
    let records = config.open_store().load().await?;
    let overall = overall_summary(&records);

    println!("Name: {}", config.user_name);
    println!("Quizzes taken: {}", overall.total_quizzes);
    println!("Average accuracy: {:.1}%", overall.average_accuracy);
    println!("Best streak: {}", overall.best_streak);

    let strongest: Vec<String> = operation_stats(&records)
        .iter()
        .filter(|s| s.rank == Rank::Strongest)
        .map(|s| s.operation.to_string())
        .collect();
    if !strongest.is_empty() {
        println!("Strongest: {}", strongest.join(", "));
    }
    Ok(())
}
