//! Elm declarations.
//!
//! The emoji table becomes a module exposing `emojiDict : Dict String Emoji`;
//! each category becomes a top-level `( Category, Attribute msg -> Html msg )`
//! value paired with its `<id>_path` icon helper.

use super::Emitter;
use crate::error::GenResult;
use crate::models::{Category, EmojiRecord};

const TABLE_HEADER: &str = "module Emojis exposing (emojiDict)

import Dict exposing (Dict)
import Types exposing (Emoji)


emojiDict : Dict String Emoji
emojiDict =
    Dict.fromList
        [ ";

const TABLE_SEPARATOR: &str = "        , ";

const TABLE_FOOTER: &str = "]\n";

/// Emits Elm source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElmEmitter;

impl Emitter for ElmEmitter {
    fn emit_table(&self, emojis: &[EmojiRecord]) -> GenResult<String> {
        let mut output = String::from(TABLE_HEADER);

        for (idx, emoji) in emojis.iter().enumerate() {
            if idx > 0 {
                output.push_str(TABLE_SEPARATOR);
            }
            output.push_str(&generate_entry(emoji));
            output.push('\n');
        }

        output.push_str(TABLE_FOOTER);
        Ok(output)
    }

    fn emit_categories(&self, categories: &[Category]) -> GenResult<String> {
        let mut output = String::new();

        for category in categories {
            output.push_str(&generate_category(category));
            output.push('\n');
        }

        Ok(output)
    }
}

/// Generates one `( shortName, { ... } )` dictionary entry.
fn generate_entry(emoji: &EmojiRecord) -> String {
    let keywords = string_list(emoji.keywords.iter().map(String::as_str));

    let skin_variations = emoji
        .skin_variations
        .iter()
        .map(|(tone, glyph)| format!("({}, {})", quote(tone.name()), quote(glyph)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "( {}, {{ name = {}, native = {}, nativeNonQual = {}, keywords = [{}], skinVariations = Dict.fromList [{}], version = {} }} )",
        quote(&emoji.short_name),
        quote(&emoji.name),
        quote(&emoji.native),
        quote(&emoji.native_non_qual),
        keywords,
        skin_variations,
        emoji.version
    )
}

/// Generates a category declaration.
fn generate_category(category: &Category) -> String {
    let id = &category.id;
    let emojis = string_list(category.emojis.iter().map(String::as_str));

    let mut output = String::new();
    output.push_str(&format!("{id} : ( Category, Attribute msg -> Html msg )\n"));
    output.push_str(&format!("{id} =\n"));
    output.push_str(&format!("    ( {{ id = {}\n", quote(id)));
    output.push_str(&format!("      , name = {}\n", quote(&category.name)));
    output.push_str(&format!("      , emojis = [ {emojis} ]\n"));
    output.push_str("      }\n");
    output.push_str(&format!("    , helperFun {id}_path\n"));
    output.push_str("    )\n");
    output
}

/// Joins quoted strings with `", "`.
fn string_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(quote).collect::<Vec<_>>().join(", ")
}

/// Produces an Elm string literal.
fn quote(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
