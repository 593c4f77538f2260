//! End-to-end batch pipeline: list inputs → extract → render → write.
//!
//! The batch is a finite, fully sequential loop. Filesystem failures abort
//! the whole run; oddly shaped markup never does — absent fields degrade to
//! empty output fragments.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;
use tracing::{info, instrument};

use notebank_shared::{NotebankError, Result};

/// Filename shape for chapter inputs: leading digits, underscore, any name,
/// `.html` extension. Anything else in the input directory is skipped.
static INPUT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+_.*\.html$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Config and results
// ---------------------------------------------------------------------------

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for chapter HTML files (no recursion).
    pub input_dir: PathBuf,
    /// Directory the Markdown files are written into (created if absent).
    pub output_dir: PathBuf,
}

/// Result of a whole batch run.
#[derive(Debug)]
pub struct BatchResult {
    /// Number of chapter files converted.
    pub file_count: usize,
    /// Total questions across all converted files.
    pub question_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Result of converting a single chapter file in memory.
#[derive(Debug, Clone)]
pub struct Converted {
    /// The rendered Markdown.
    pub markdown: String,
    /// The chapter title that was used.
    pub title: String,
    /// Questions found in this chapter.
    pub question_count: usize,
}

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Progress callback for reporting batch status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each file is converted and written.
    fn file_converted(&self, name: &str, questions: usize, current: usize, total: usize);
    /// Called when the batch completes.
    fn done(&self, result: &BatchResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_converted(&self, _name: &str, _questions: usize, _current: usize, _total: usize) {}
    fn done(&self, _result: &BatchResult) {}
}

// ---------------------------------------------------------------------------
// Input enumeration
// ---------------------------------------------------------------------------

/// List the chapter files in `dir`, lexicographically sorted.
///
/// Only direct children whose names match the chapter pattern are returned;
/// zero-padded chapter prefixes therefore sort in chapter order. A file that
/// does not match is skipped, not reported.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| NotebankError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| NotebankError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if INPUT_NAME_RE.is_match(name) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Chapter label for a filename: its leading digit run, verbatim.
pub fn chapter_of(filename: &str) -> String {
    filename
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect()
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert one chapter's HTML to Markdown in memory.
pub fn convert_file(html: &str, filename: &str) -> Converted {
    let chapter = chapter_of(filename);
    let doc = notebank_extract::parse_document(html, filename, &chapter);
    let markdown = notebank_markdown::render_document(&doc);

    Converted {
        markdown,
        question_count: doc.question_count(),
        title: doc.title,
    }
}

/// Run the whole batch: read every chapter file in order, convert it, and
/// write `<stem>.md` into the output directory, overwriting existing files.
#[instrument(skip_all, fields(input = %config.input_dir.display()))]
pub fn convert_dir(config: &BatchConfig, progress: &dyn ProgressReporter) -> Result<BatchResult> {
    let start = Instant::now();

    progress.phase("Scanning input directory");
    let inputs = list_inputs(&config.input_dir)?;

    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| NotebankError::io(&config.output_dir, e))?;

    progress.phase("Converting chapters");
    let total = inputs.len();
    let mut question_count = 0;

    for (i, path) in inputs.iter().enumerate() {
        // list_inputs only yields UTF-8 names that matched the pattern.
        let name = path.file_name().unwrap_or_default().to_string_lossy();

        let html = std::fs::read_to_string(path).map_err(|e| NotebankError::io(path, e))?;
        let converted = convert_file(&html, &name);

        let out_path = config
            .output_dir
            .join(Path::new(name.as_ref()).with_extension("md"));
        std::fs::write(&out_path, &converted.markdown)
            .map_err(|e| NotebankError::io(&out_path, e))?;

        question_count += converted.question_count;
        info!(
            file = %name,
            questions = converted.question_count,
            out = %out_path.display(),
            "chapter converted"
        );
        progress.file_converted(&name, converted.question_count, i + 1, total);
    }

    let result = BatchResult {
        file_count: total,
        question_count,
        elapsed: start.elapsed(),
    };

    info!(
        files = result.file_count,
        questions = result.question_count,
        "batch complete"
    );
    progress.done(&result);

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
