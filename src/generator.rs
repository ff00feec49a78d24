//! End-to-end generation: sources in, declaration text out.
//!
//! Both the emoji table and the category list are fully built before any
//! text is emitted, so a data error never yields partial output.

use crate::emit::{self, Emitter, Sections};
use crate::error::GenResult;
use crate::models::{Category, EmojiRecord};
use crate::parser::{parse_emoji_json, parse_emoji_json_str, AnnotationIndex, EmojiSource};
use crate::transform::{build_emoji_table, group_categories};
use std::path::Path;
use tracing::info;

/// The two parsed inputs of a run.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// Emoji metadata records, in source file order
    pub emojis: Vec<EmojiSource>,
    /// Keyword index built from the annotation document
    pub annotations: AnnotationIndex,
}

impl Sources {
    /// Reads and parses both input files.
    pub fn load(emoji_data: &Path, annotations: &Path) -> GenResult<Self> {
        let emojis = parse_emoji_json(emoji_data)?;
        info!(
            "Loaded {} emoji records from {}",
            emojis.len(),
            emoji_data.display()
        );

        let annotations_index = AnnotationIndex::load(annotations)?;
        info!(
            "Loaded keywords for {} glyphs from {}",
            annotations_index.len(),
            annotations.display()
        );

        Ok(Self {
            emojis,
            annotations: annotations_index,
        })
    }

    /// Parses both inputs from in-memory documents.
    pub fn from_strs(emoji_json: &str, annotations_xml: &str) -> GenResult<Self> {
        Ok(Self {
            emojis: parse_emoji_json_str(emoji_json)?,
            annotations: AnnotationIndex::parse_str(annotations_xml)?,
        })
    }
}

/// Resolved emoji table and categories, ready to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiGenerator {
    emojis: Vec<EmojiRecord>,
    categories: Vec<Category>,
}

impl EmojiGenerator {
    /// Builds the sorted table and the merged categories.
    pub fn new(sources: &Sources) -> GenResult<Self> {
        let emojis = build_emoji_table(&sources.emojis, &sources.annotations)?;
        let categories = group_categories(&sources.emojis)?;

        info!(
            "Built {} emoji and {} categories",
            emojis.len(),
            categories.len()
        );

        Ok(Self { emojis, categories })
    }

    /// The emoji table in display order.
    pub fn emojis(&self) -> &[EmojiRecord] {
        &self.emojis
    }

    /// The merged categories in priority order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Renders the requested sections with the given emitter.
    pub fn render(&self, emitter: &dyn Emitter, sections: Sections) -> GenResult<String> {
        emit::render(emitter, &self.emojis, &self.categories, sections)
    }
}
