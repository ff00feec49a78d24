//! emojigen - emoji table and category generator
//!
//! Reads `emoji.json` and `cldr-annotations-en.xml` from the working directory
//! and prints the generated declarations to stdout.

use clap::Parser;
use emojigen::cli::GenerateArgs;
use emojigen::constants::APP_NAME;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generates an emoji lookup table and emoji categories from emoji-data and CLDR annotations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the generated output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli.generate.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
