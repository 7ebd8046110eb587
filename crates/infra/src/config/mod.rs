//! Configuration loading
//!
//! Builds a [`ClientConfig`](s21_domain::ClientConfig) from environment
//! variables (optionally seeded from a `.env` file) or from a config file.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_dotenv, load_from_env, load_from_file, probe_config_paths};
