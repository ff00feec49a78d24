//! Emoji table construction.
//!
//! Turns raw metadata records into [`EmojiRecord`]s: glyphs are decoded, skin
//! tones extracted, keywords attached by glyph, and the result stable-sorted
//! by `sort_order`.

use crate::constants::SCHEMA_VERSION;
use crate::error::{GenError, GenResult};
use crate::models::EmojiRecord;
use crate::parser::{decode_sequence, AnnotationIndex, EmojiSource};
use crate::transform::skin_variations::extract_skin_variations;
use std::collections::HashMap;
use tracing::debug;

/// Builds the sorted emoji table.
///
/// Records are processed in source order. A short name seen twice fails the
/// whole build with [`GenError::DuplicateKey`]; nothing is overwritten.
/// Records with equal `sort_order` keep their source order.
pub fn build_emoji_table(
    sources: &[EmojiSource],
    annotations: &AnnotationIndex,
) -> GenResult<Vec<EmojiRecord>> {
    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(sources.len());
    let mut records = Vec::with_capacity(sources.len());

    for (index, source) in sources.iter().enumerate() {
        if let Some(&first_index) = first_seen.get(source.short_name.as_str()) {
            return Err(GenError::DuplicateKey {
                short_name: source.short_name.clone(),
                first_index,
                second_index: index,
            });
        }
        first_seen.insert(&source.short_name, index);

        records.push(build_record(index, source, annotations)?);
    }

    // sort_by_key is stable
    records.sort_by_key(|record| record.sort_order);

    let unannotated = records.iter().filter(|r| r.keywords.is_empty()).count();
    debug!(
        "Built {} emoji records ({} without keywords)",
        records.len(),
        unannotated
    );

    Ok(records)
}

/// Resolves a single source record.
fn build_record(
    index: usize,
    source: &EmojiSource,
    annotations: &AnnotationIndex,
) -> GenResult<EmojiRecord> {
    let context = source.describe(index);

    let native = decode_sequence(&source.unified).map_err(|e| e.in_record(&context))?;

    let native_non_qual = match &source.non_qualified {
        Some(sequence) => decode_sequence(sequence).map_err(|e| e.in_record(&context))?,
        None => native.clone(),
    };

    let skin_variations = extract_skin_variations(source.skin_variations.as_ref())
        .map_err(|e| e.in_record(&context))?;

    let keywords = annotations.keywords(&native).to_vec();

    Ok(EmojiRecord {
        short_name: source.short_name.clone(),
        name: source.name.clone(),
        sort_order: source.sort_order,
        native,
        native_non_qual,
        skin_variations,
        keywords,
        version: SCHEMA_VERSION,
    })
}
