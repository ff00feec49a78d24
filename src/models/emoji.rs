//! Emoji records and skin tone variations.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One of the five Fitzpatrick skin tone modifiers.
///
/// Variant declaration order is the canonical tone order; `Ord` follows it, so
/// any ordered collection keyed by `SkinTone` enumerates tones canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkinTone {
    /// U+1F3FB EMOJI MODIFIER FITZPATRICK TYPE-1-2
    Light,
    /// U+1F3FC EMOJI MODIFIER FITZPATRICK TYPE-3
    MediumLight,
    /// U+1F3FD EMOJI MODIFIER FITZPATRICK TYPE-4
    Medium,
    /// U+1F3FE EMOJI MODIFIER FITZPATRICK TYPE-5
    MediumDark,
    /// U+1F3FF EMOJI MODIFIER FITZPATRICK TYPE-6
    Dark,
}

impl SkinTone {
    /// All tones in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// The modifier codepoint token used as a key in the emoji metadata.
    pub const fn modifier_token(self) -> &'static str {
        match self {
            Self::Light => "1F3FB",
            Self::MediumLight => "1F3FC",
            Self::Medium => "1F3FD",
            Self::MediumDark => "1F3FE",
            Self::Dark => "1F3FF",
        }
    }

    /// The tone name used in generated output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::MediumLight => "mediumLight",
            Self::Medium => "medium",
            Self::MediumDark => "mediumDark",
            Self::Dark => "dark",
        }
    }

    /// Looks up a tone by its modifier token (case-insensitive).
    ///
    /// Returns `None` for anything but the five single-modifier tokens,
    /// including combined keys such as `1F3FB-1F3FC`.
    pub fn from_modifier_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tone| tone.modifier_token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tone name -> glyph, iterated in canonical tone order.
pub type SkinVariations = BTreeMap<SkinTone, String>;

/// A fully resolved emoji, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    /// Unique identifier (e.g., "grinning", "flag-fr")
    pub short_name: String,
    /// Human-readable name (e.g., "GRINNING FACE")
    pub name: String,
    /// Canonical display position; not necessarily contiguous
    pub sort_order: i64,
    /// Fully-qualified glyph
    pub native: String,
    /// Unqualified glyph, or `native` when the emoji has no unqualified form
    pub native_non_qual: String,
    /// Skin tone variants present in the source
    pub skin_variations: SkinVariations,
    /// Localized keywords; empty when the glyph is not annotated
    pub keywords: Vec<String>,
    /// Schema tag carried through unchanged
    pub version: u32,
}
