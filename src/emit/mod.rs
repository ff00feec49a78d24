//! Serialization of the emoji table and categories.
//!
//! The textual grammar is pluggable: every target format implements
//! [`Emitter`], and [`render`] assembles the requested sections. Emitters do
//! not reorder anything; output order is exactly the order of the slices they
//! are handed.

pub mod elm;
pub mod json;

pub use elm::ElmEmitter;
pub use json::JsonEmitter;

use crate::error::GenResult;
use crate::models::{Category, EmojiRecord};
use serde::{Deserialize, Serialize};

/// A target grammar for the generated declarations.
pub trait Emitter {
    /// Serializes the sorted emoji table.
    fn emit_table(&self, emojis: &[EmojiRecord]) -> GenResult<String>;

    /// Serializes the merged categories.
    fn emit_categories(&self, categories: &[Category]) -> GenResult<String>;
}

/// Available output grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Elm module declarations
    #[default]
    Elm,
    /// Pretty-printed JSON documents
    Json,
}

impl OutputFormat {
    /// Returns the emitter implementing this format.
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Self::Elm => Box::new(ElmEmitter),
            Self::Json => Box::new(JsonEmitter),
        }
    }
}

/// Which declaration blocks to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sections {
    /// Emoji table followed by categories
    #[default]
    All,
    /// Emoji table only
    Table,
    /// Categories only
    Categories,
}

impl Sections {
    const fn includes_table(self) -> bool {
        matches!(self, Self::All | Self::Table)
    }

    const fn includes_categories(self) -> bool {
        matches!(self, Self::All | Self::Categories)
    }
}

/// Renders the requested sections into one string.
///
/// When both sections are produced they are separated by a blank line.
pub fn render(
    emitter: &dyn Emitter,
    emojis: &[EmojiRecord],
    categories: &[Category],
    sections: Sections,
) -> GenResult<String> {
    let mut blocks = Vec::with_capacity(2);

    if sections.includes_table() {
        blocks.push(emitter.emit_table(emojis)?);
    }
    if sections.includes_categories() {
        blocks.push(emitter.emit_categories(categories)?);
    }

    Ok(blocks.join("\n"))
}
