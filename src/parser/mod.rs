//! Parsing of the two generator inputs.
//!
//! This module reads the emoji-data JSON table and the CLDR annotation XML,
//! and decodes the codepoint sequences both of them refer to.

pub mod annotations;
pub mod codepoint;
pub mod emoji_json;

// Re-export commonly used functions
pub use annotations::AnnotationIndex;
pub use codepoint::decode_sequence;
pub use emoji_json::{parse_emoji_json, parse_emoji_json_str, EmojiSource, SkinVariationSource};

use crate::error::{GenError, GenResult};
use std::fs;
use std::path::Path;

/// Reads a whole input file, attaching its path to any I/O error.
fn read_source(path: &Path) -> GenResult<String> {
    fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
