//! Application-wide constants.
//!
//! This module defines the fixed input locations, delimiters and tags that the
//! generated declarations depend on.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Emoji Generator";

/// Default emoji metadata file, relative to the working directory.
pub const DEFAULT_EMOJI_DATA_FILE: &str = "emoji.json";

/// Default CLDR annotation file, relative to the working directory.
pub const DEFAULT_ANNOTATIONS_FILE: &str = "cldr-annotations-en.xml";

/// Separator between hexadecimal tokens in a codepoint sequence (`1F1EB-1F1F7`).
pub const CODEPOINT_DELIMITER: char = '-';

/// Separator between keywords in an annotation body (`face | grin | smile`).
pub const KEYWORD_DELIMITER: &str = " | ";

/// Schema tag carried unchanged on every generated emoji record.
pub const SCHEMA_VERSION: u32 = 15;
