//! sprint-store: quiz history persistence and configuration.
//!
//! Implements the `ResultStore` trait over a JSON key-value document on
//! disk and in memory, and loads `sprint.toml` configuration.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use config::{load_config, load_config_from, set_user_name, SprintConfig};
pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{ResultStore, DEFAULT_HISTORY_LIMIT};
