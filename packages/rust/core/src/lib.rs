//! Batch conversion pipeline for notebank.
//!
//! Ties the extraction and rendering crates together: enumerate chapter
//! files, convert each one in order, write the Markdown outputs.

pub mod pipeline;

pub use pipeline::{
    BatchConfig, BatchResult, Converted, ProgressReporter, SilentProgress, chapter_of,
    convert_dir, convert_file, list_inputs,
};
