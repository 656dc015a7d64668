//! The `maths-sprint init` command.

use std::path::Path;

use anyhow::{Context, Result};

use sprint_store::config::CONFIG_FILE;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {CONFIG_FILE}"))?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Set your name: maths-sprint profile --name \"Your Name\"");
    println!("  2. Try some questions: maths-sprint generate --operation square --count 5");
    println!("  3. Take a quiz: maths-sprint quiz --operation mixed");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# maths-sprint configuration

user_name = "Math Sprinter"

# Quiz history, stored as a JSON document
results_path = "./maths-sprint-data/results.json"
history_limit = 50

# Defaults when --min, --max or --count are not given
default_min = 1
default_max = 100
default_question_count = 10
"#;
