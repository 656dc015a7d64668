//! The `maths-sprint clear` command.

use std::path::Path;

use anyhow::Result;

use sprint_store::{load_config_from, ResultStore};

pub async fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = load_config_from(config_path)?;
    let store = config.open_store();
    store.clear().await?;
    println!("Quiz history cleared ({}).", store.path().display());
    Ok(())
}
