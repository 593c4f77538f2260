//! Shared types, error model, and configuration for notebank.
//!
//! This crate is the foundation depended on by all other notebank crates.
//! It provides:
//! - [`NotebankError`] — the unified error type
//! - Domain types ([`Document`], [`Section`], [`Question`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{NotebankError, Result};
pub use types::{Document, Question, Section};
