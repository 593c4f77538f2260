//! notebank CLI — HTML question banks in, Markdown study notes out.
//!
//! Converts a directory of chapter HTML files into numbered, chapter-prefixed
//! Markdown documents with collapsible answers.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
