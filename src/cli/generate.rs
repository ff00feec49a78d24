//! Generate command: reads both sources and writes the declarations.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::emit::{OutputFormat, Sections};
use crate::generator::{EmojiGenerator, Sources};
use crate::output::write_output;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate the emoji table and categories
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Path to emoji-data JSON [default: emoji.json]
    #[arg(long, value_name = "FILE")]
    pub emoji_data: Option<PathBuf>,

    /// Path to CLDR annotations XML [default: cldr-annotations-en.xml]
    #[arg(long, value_name = "FILE")]
    pub annotations: Option<PathBuf>,

    /// Output format [default: elm]
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Sections to generate [default: all]
    #[arg(long, value_enum, value_name = "SECTIONS")]
    pub sections: Option<Sections>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.resolve_config()?;

        let sources = Sources::load(&config.paths.emoji_data, &config.paths.annotations)?;
        let generator = EmojiGenerator::new(&sources)?;

        let emitter = config.output.format.emitter();
        let output = generator.render(emitter.as_ref(), config.output.sections)?;

        write_output(config.output.out.as_deref(), &output)
            .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;

        match &config.output.out {
            Some(path) => info!("Wrote {} bytes to {}", output.len(), path.display()),
            None => info!("Wrote {} bytes to stdout", output.len()),
        }

        Ok(())
    }

    /// Merges flags over the config file over built-in defaults.
    pub fn resolve_config(&self) -> CliResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)
                .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?,
            None => Config::default(),
        };

        if let Some(path) = &self.emoji_data {
            config.paths.emoji_data.clone_from(path);
        }
        if let Some(path) = &self.annotations {
            config.paths.annotations.clone_from(path);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(sections) = self.sections {
            config.output.sections = sections;
        }
        if let Some(out) = &self.out {
            config.output.out = Some(out.clone());
        }

        Ok(config)
    }
}
