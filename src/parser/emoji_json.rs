//! emoji-data `emoji.json` parser.
//!
//! Only the fields the generator needs are modelled; everything else in a
//! record is ignored. Records are validated one by one so that a schema error
//! names the offending record instead of a byte offset into the array.

use crate::error::{GenError, GenResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One record of the emoji metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojiSource {
    /// Fully-qualified codepoint sequence (e.g., "1F600", "1F1EB-1F1F7")
    pub unified: String,
    /// Unqualified codepoint sequence, if the emoji has one
    #[serde(default)]
    pub non_qualified: Option<String>,
    /// Unique short identifier
    pub short_name: String,
    /// Display name
    pub name: String,
    /// Canonical display position
    pub sort_order: i64,
    /// Raw category label (e.g., "Smileys & Emotion")
    pub category: String,
    /// Skin tone variants keyed by modifier token (e.g., "1F3FB")
    #[serde(default)]
    pub skin_variations: Option<BTreeMap<String, SkinVariationSource>>,
}

/// A skin tone variant of an emoji.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkinVariationSource {
    /// Codepoint sequence of the toned glyph
    pub unified: String,
}

impl EmojiSource {
    /// Describes this record for diagnostics.
    pub fn describe(&self, index: usize) -> String {
        format!("emoji record {index} ({})", self.short_name)
    }
}

/// Parses emoji metadata from a JSON string.
///
/// Records keep their source file order.
pub fn parse_emoji_json_str(content: &str) -> GenResult<Vec<EmojiSource>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| GenError::schema("emoji data", format!("expected a JSON array of records: {e}")))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let context = match value.get("short_name").and_then(serde_json::Value::as_str) {
                Some(short_name) => format!("emoji record {index} ({short_name})"),
                None => format!("emoji record {index}"),
            };

            serde_json::from_value::<EmojiSource>(value)
                .map_err(|e| GenError::schema(context, e.to_string()))
        })
        .collect()
}

/// Reads and parses an emoji metadata file.
pub fn parse_emoji_json(path: &Path) -> GenResult<Vec<EmojiSource>> {
    let content = super::read_source(path)?;
    parse_emoji_json_str(&content)
}
