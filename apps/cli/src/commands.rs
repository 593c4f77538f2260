//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use notebank_core::pipeline::{BatchConfig, BatchResult, ProgressReporter, list_inputs};
use notebank_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// notebank — turn HTML question banks into Markdown study notes.
#[derive(Parser)]
#[command(
    name = "notebank",
    version,
    about = "Convert chapter HTML question banks into numbered Markdown study notes.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Convert every chapter file in the input directory.
    Convert {
        /// Input directory (defaults to the configured paths.input_dir).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (defaults to the configured paths.output_dir).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the chapter files that would be converted, in order.
    List {
        /// Input directory (defaults to the configured paths.input_dir).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "notebank=info",
        1 => "notebank=debug",
        _ => "notebank=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert { input, out } => cmd_convert(input, out),
        Command::List { input } => cmd_list(input),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Resolve a directory: CLI flag wins, then the config file value.
fn resolve_dir(flag: Option<PathBuf>, configured: &str) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(configured))
}

fn cmd_convert(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;

    let batch = BatchConfig {
        input_dir: resolve_dir(input, &config.paths.input_dir),
        output_dir: resolve_dir(out, &config.paths.output_dir),
    };

    info!(
        input = %batch.input_dir.display(),
        out = %batch.output_dir.display(),
        "converting question banks"
    );

    let reporter = CliProgress::new();
    let result = notebank_core::pipeline::convert_dir(&batch, &reporter)?;

    println!();
    println!("  Converted {} chapter file(s)", result.file_count);
    println!("  Questions: {}", result.question_count);
    println!("  Output:    {}", batch.output_dir.display());
    println!("  Time:      {:.1}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_list(input: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let input_dir = resolve_dir(input, &config.paths.input_dir);

    let inputs = list_inputs(&input_dir)?;
    if inputs.is_empty() {
        println!("no chapter files found in {}", input_dir.display());
        return Ok(());
    }

    for path in &inputs {
        println!("{}", path.file_name().unwrap_or_default().to_string_lossy());
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter: an indicatif spinner plus one printed line per
/// converted file.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_converted(&self, name: &str, questions: usize, current: usize, total: usize) {
        self.spinner
            .println(format!("  wrote {name} ({questions} questions)"));
        self.spinner
            .set_message(format!("Converting [{current}/{total}]"));
    }

    fn done(&self, _result: &BatchResult) {
        self.spinner.finish_and_clear();
    }
}
