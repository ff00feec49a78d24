//! CLDR keyword annotation index.
//!
//! The annotation document holds two kinds of entries per glyph:
//!
//! ```xml
//! <annotation cp="😀">face | grin | grinning face</annotation>
//! <annotation cp="😀" type="tts">grinning face</annotation>
//! ```
//!
//! Only untagged entries contribute keywords; the `type` attribute marks an
//! alternate rendering (the text-to-speech name) and is skipped.

use crate::constants::KEYWORD_DELIMITER;
use crate::error::{GenError, GenResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Attribute holding the annotated glyph.
const GLYPH_ATTRIBUTE: &str = "cp";

/// Attribute marking an alternate rendering of the glyph.
const ALTERNATE_MARKER_ATTRIBUTE: &str = "type";

/// Glyph -> ordered keyword list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationIndex {
    keywords: HashMap<String, Vec<String>>,
}

impl AnnotationIndex {
    /// Parses an annotation document.
    ///
    /// A later untagged entry for the same glyph replaces an earlier one.
    pub fn parse_str(xml: &str) -> GenResult<Self> {
        // CLDR files carry a DOCTYPE declaration
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = true;
        let doc = roxmltree::Document::parse_with_options(xml, options)
            .map_err(|e| GenError::schema("annotation data", e.to_string()))?;

        let mut keywords = HashMap::new();

        for node in doc.descendants().filter(|n| n.has_tag_name("annotation")) {
            if node.has_attribute(ALTERNATE_MARKER_ATTRIBUTE) {
                continue;
            }

            let Some(glyph) = node.attribute(GLYPH_ATTRIBUTE) else {
                let pos = doc.text_pos_at(node.range().start);
                return Err(GenError::schema(
                    format!("annotation at line {}, column {}", pos.row, pos.col),
                    format!("missing '{GLYPH_ATTRIBUTE}' attribute"),
                ));
            };

            let tokens = split_keywords(node.text().unwrap_or_default());
            if keywords.insert(glyph.to_string(), tokens).is_some() {
                debug!("Annotation for {glyph:?} replaced by a later entry");
            }
        }

        Ok(Self { keywords })
    }

    /// Reads and parses an annotation file.
    pub fn load(path: &Path) -> GenResult<Self> {
        let content = super::read_source(path)?;
        Self::parse_str(&content)
    }

    /// Returns the keywords for a glyph; empty when the glyph is not annotated.
    pub fn keywords(&self, glyph: &str) -> &[String] {
        self.keywords.get(glyph).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of annotated glyphs.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if no glyph is annotated.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Splits an annotation body into trimmed, non-empty keywords.
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split(KEYWORD_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
