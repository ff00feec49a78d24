//! Skin tone variant extraction.

use crate::error::GenResult;
use crate::models::{SkinTone, SkinVariations};
use crate::parser::{decode_sequence, SkinVariationSource};
use std::collections::BTreeMap;
use tracing::trace;

/// Maps a record's variant table onto canonical tone names.
///
/// Only the five single-modifier keys are recognised; combined keys used by
/// multi-person emoji (`1F3FB-1F3FC`) are ignored. Tones absent from the
/// source are omitted, and a missing table yields an empty mapping.
pub fn extract_skin_variations(
    source: Option<&BTreeMap<String, SkinVariationSource>>,
) -> GenResult<SkinVariations> {
    let mut variations = SkinVariations::new();

    for (token, variant) in source.into_iter().flatten() {
        match SkinTone::from_modifier_token(token) {
            Some(tone) => {
                variations.insert(tone, decode_sequence(&variant.unified)?);
            }
            None => trace!("Skipping skin variation key {token}"),
        }
    }

    Ok(variations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn variant(unified: &str) -> SkinVariationSource {
        SkinVariationSource {
            unified: unified.to_string(),
        }
    }

    #[test]
    fn test_absent_table_is_empty() {
        assert!(extract_skin_variations(None).unwrap().is_empty());
    }

    #[test]
    fn test_subset_in_canonical_order() {
        let mut source = BTreeMap::new();
        source.insert("1F3FF".to_string(), variant("1F44B-1F3FF"));
        source.insert("1F3FC".to_string(), variant("1F44B-1F3FC"));

        let variations = extract_skin_variations(Some(&source)).unwrap();
        let entries: Vec<_> = variations.iter().map(|(t, g)| (t.name(), g.as_str())).collect();

        assert_eq!(
            entries,
            vec![
                ("mediumLight", "\u{1F44B}\u{1F3FC}"),
                ("dark", "\u{1F44B}\u{1F3FF}"),
            ]
        );
    }

    #[test]
    fn test_combined_keys_ignored() {
        let mut source = BTreeMap::new();
        source.insert("1F3FB-1F3FC".to_string(), variant("1F9D1-1F3FB-200D-1F91D-200D-1F9D1-1F3FC"));
        source.insert("1F3FB".to_string(), variant("1F9D1-1F3FB"));

        let variations = extract_skin_variations(Some(&source)).unwrap();
        assert_eq!(variations.len(), 1);
        assert!(variations.contains_key(&SkinTone::Light));
    }

    #[test]
    fn test_bad_variant_sequence_fails() {
        let mut source = BTreeMap::new();
        source.insert("1F3FD".to_string(), variant("1F44B-XYZ"));
        assert!(extract_skin_variations(Some(&source)).is_err());
    }

    proptest! {
        // Lowercased keys sort after uppercase ones, so the source table's own
        // iteration order differs from the canonical tone order.
        #[test]
        fn prop_tones_always_canonical(mask in 0u8..32, lower_mask in 0u8..32) {
            let source: BTreeMap<String, SkinVariationSource> = SkinTone::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(i, tone)| {
                    let token = if lower_mask & (1 << i) != 0 {
                        tone.modifier_token().to_lowercase()
                    } else {
                        tone.modifier_token().to_string()
                    };
                    let glyph = variant(&format!("1F44B-{}", tone.modifier_token()));
                    (token, glyph)
                })
                .collect();

            let variations = extract_skin_variations(Some(&source)).unwrap();
            let keys: Vec<SkinTone> = variations.keys().copied().collect();
            let expected: Vec<SkinTone> = SkinTone::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, tone)| tone)
                .collect();

            prop_assert_eq!(keys, expected);
        }
    }
}
