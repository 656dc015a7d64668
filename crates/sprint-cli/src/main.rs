//! maths-sprint CLI, timed multiple-choice maths drills in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "maths-sprint", version, about = "Timed multiple-choice maths drills")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds questions.
#[derive(Args, Debug, Clone)]
pub struct QuestionArgs {
    /// addition, subtraction, multiplication, division, square, cube,
    /// trigonometry or mixed
    #[arg(long, short)]
    operation: String,

    /// Smallest operand (defaults to the config value)
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    /// Largest operand (defaults to the config value)
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Number of questions
    #[arg(long, short)]
    count: Option<usize>,

    /// Seed for a reproducible question set
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a set of questions with their options
    Generate {
        #[command(flatten)]
        question: QuestionArgs,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Take a quiz, answering 1-4 on stdin (q to quit)
    Quiz {
        #[command(flatten)]
        question: QuestionArgs,
    },

    /// Show recent quiz results
    History {
        /// How many of the latest quizzes to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show per-operation, daily and all-time statistics
    Stats,

    /// Show the profile, or set its name
    Profile {
        /// New profile name
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete the stored quiz history
    Clear,

    /// Create a starter sprint.toml
    Init,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maths_sprint=info,sprint_store=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Generate { question, format } => {
            commands::generate::execute(config_path, question, format)
        }
        Commands::Quiz { question } => commands::quiz::execute(config_path, question).await,
        Commands::History { limit } => commands::history::execute(config_path, limit).await,
        Commands::Stats => commands::stats::execute(config_path).await,
        Commands::Profile { name } => commands::profile::execute(config_path, name).await,
        Commands::Clear => commands::clear::execute(config_path).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
