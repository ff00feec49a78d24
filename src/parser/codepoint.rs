//! Codepoint sequence decoding.
//!
//! Emoji metadata spells glyphs as hyphen-joined hexadecimal codepoints
//! (`1F1EB-1F1F7` for the French flag, `1F468-200D-1F4BB` for a ZWJ sequence).

use crate::constants::CODEPOINT_DELIMITER;
use crate::error::{GenError, GenResult};

/// Decodes a delimiter-joined codepoint sequence into its glyph string.
///
/// # Examples
///
/// ```
/// use emojigen::parser::codepoint::decode_sequence;
///
/// assert_eq!(decode_sequence("1F600").unwrap(), "\u{1F600}");
/// assert_eq!(decode_sequence("1F1EB-1F1F7").unwrap(), "\u{1F1EB}\u{1F1F7}");
/// assert!(decode_sequence("1F60G").is_err());
/// ```
pub fn decode_sequence(sequence: &str) -> GenResult<String> {
    sequence.split(CODEPOINT_DELIMITER).map(decode_token).collect()
}

/// Decodes a single hexadecimal token into a character.
fn decode_token(token: &str) -> GenResult<char> {
    let format_error = |reason: &str| GenError::Format {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    if token.is_empty() {
        return Err(format_error("empty token"));
    }

    // from_str_radix tolerates a leading sign, the data format does not
    if !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format_error("not hexadecimal"));
    }

    let value =
        u32::from_str_radix(token, 16).map_err(|_| format_error("value out of range"))?;

    char::from_u32(value).ok_or_else(|| format_error("not a Unicode scalar value"))
}
