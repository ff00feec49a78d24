//! JSON documents.

use super::Emitter;
use crate::error::{GenError, GenResult};
use crate::models::{Category, EmojiRecord};
use serde::Serialize;

/// Emits pretty-printed JSON, one document per section.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit_table(&self, emojis: &[EmojiRecord]) -> GenResult<String> {
        to_document(&emojis)
    }

    fn emit_categories(&self, categories: &[Category]) -> GenResult<String> {
        to_document(&categories)
    }
}

fn to_document<T: Serialize>(value: &T) -> GenResult<String> {
    let mut document =
        serde_json::to_string_pretty(value).map_err(|e| GenError::Emit(e.to_string()))?;
    document.push('\n');
    Ok(document)
}
