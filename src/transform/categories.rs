//! Category grouping.
//!
//! emoji-data labels every record with one of ten raw categories. The
//! generated output uses eight canonical ones, so some raw labels are merged.
//! The order in which merged labels contribute members is fixed by
//! [`MERGE_PRIORITY`]: smileys must lead the people category, ahead of the
//! body-part and gesture emoji that share it.

use crate::error::{GenError, GenResult};
use crate::models::Category;
use crate::parser::EmojiSource;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Target of one or more raw category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalCategory {
    /// Canonical identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Raw label (lowercase) -> canonical category.
pub const CATEGORY_TABLE: &[(&str, CanonicalCategory)] = &[
    ("activities", CanonicalCategory { id: "activity", name: "Activities" }),
    ("flags", CanonicalCategory { id: "flags", name: "Flags" }),
    ("food & drink", CanonicalCategory { id: "foods", name: "Food & Drink" }),
    ("animals & nature", CanonicalCategory { id: "nature", name: "Animals & Nature" }),
    ("objects", CanonicalCategory { id: "objects", name: "Objects" }),
    ("people & body", CanonicalCategory { id: "people", name: "Smileys & People" }),
    ("smileys & emotion", CanonicalCategory { id: "people", name: "Smileys & People" }),
    ("travel & places", CanonicalCategory { id: "places", name: "Travel & Places" }),
    ("symbols", CanonicalCategory { id: "symbols", name: "Symbols & Components" }),
    ("component", CanonicalCategory { id: "symbols", name: "Symbols & Components" }),
];

/// Order in which raw labels contribute members to their canonical category.
///
/// Also fixes the order of the emitted categories: each canonical id appears
/// where its first label does.
pub const MERGE_PRIORITY: &[&str] = &[
    "activities",
    "flags",
    "food & drink",
    "animals & nature",
    "objects",
    "smileys & emotion",
    "people & body",
    "travel & places",
    "symbols",
    "component",
];

/// Looks up the canonical category for a raw label (case-insensitive).
pub fn canonical_category(raw_label: &str) -> Option<CanonicalCategory> {
    let label = raw_label.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, canonical)| *canonical)
}

/// Groups records into canonical categories.
///
/// `sources` must be in source file order, not sorted by `sort_order`: within
/// a label, members keep the order they are encountered in. Records with an
/// unknown label are left out of every category. A canonical category whose
/// labels have no records is still emitted, with no members.
pub fn group_categories(sources: &[EmojiSource]) -> GenResult<Vec<Category>> {
    let labels: Vec<String> = sources
        .iter()
        .map(|source| source.category.to_lowercase())
        .collect();

    let unknown: BTreeSet<&str> = labels
        .iter()
        .map(String::as_str)
        .filter(|label| !MERGE_PRIORITY.contains(label))
        .collect();
    for label in unknown {
        let count = labels.iter().filter(|l| *l == label).count();
        warn!("Skipping {count} emoji with unknown category '{label}'");
    }

    let mut categories: Vec<Category> = Vec::new();

    for &label in MERGE_PRIORITY {
        let canonical = canonical_category(label).ok_or_else(|| {
            GenError::schema(
                "category table",
                format!("merge priority label '{label}' has no canonical category"),
            )
        })?;

        let position = match categories.iter().position(|c| c.id == canonical.id) {
            Some(position) => position,
            None => {
                categories.push(Category::new(canonical.id, canonical.name)?);
                categories.len() - 1
            }
        };

        let members: Vec<&str> = sources
            .iter()
            .zip(&labels)
            .filter(|(_, source_label)| *source_label == label)
            .map(|(source, _)| source.short_name.as_str())
            .collect();

        debug!(
            "Merging {} emoji from '{}' into '{}'",
            members.len(),
            label,
            canonical.id
        );
        categories[position].extend_members(members);
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn source(short_name: &str, category: &str, sort_order: i64) -> EmojiSource {
        EmojiSource {
            unified: "1F600".to_string(),
            non_qualified: None,
            short_name: short_name.to_string(),
            name: short_name.to_string(),
            sort_order,
            category: category.to_string(),
            skin_variations: None,
        }
    }

    fn members<'a>(categories: &'a [Category], id: &str) -> Vec<&'a str> {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.emojis.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(CATEGORY_TABLE.len(), MERGE_PRIORITY.len());
        for label in MERGE_PRIORITY {
            assert!(canonical_category(label).is_some(), "{label} not mapped");
        }
        for (label, canonical) in CATEGORY_TABLE {
            assert_eq!(*label, label.to_lowercase());
            assert!(MERGE_PRIORITY.contains(label), "{label} has no priority");
            assert!(Category::new(canonical.id, canonical.name).is_ok());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            canonical_category("Smileys & Emotion").map(|c| c.id),
            Some("people")
        );
        assert_eq!(canonical_category("FLAGS").map(|c| c.name), Some("Flags"));
        assert_eq!(canonical_category("Unknown"), None);
    }

    #[test]
    fn test_category_order_follows_priority_list() {
        let categories = group_categories(&[]).unwrap();
        let ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["activity", "flags", "foods", "nature", "objects", "people", "places", "symbols"]
        );
        assert!(categories.iter().all(|c| c.emojis.is_empty()));
    }

    #[test]
    fn test_smileys_precede_people_regardless_of_file_order() {
        let sources = vec![
            source("wave", "People & Body", 3),
            source("grinning", "Smileys & Emotion", 1),
            source("thumbsup", "People & Body", 4),
            source("joy", "Smileys & Emotion", 2),
        ];

        let categories = group_categories(&sources).unwrap();
        assert_eq!(
            members(&categories, "people"),
            vec!["grinning", "joy", "wave", "thumbsup"]
        );
    }

    #[test]
    fn test_members_keep_file_order_not_sort_order() {
        let sources = vec![
            source("b", "Objects", 2),
            source("a", "Objects", 1),
        ];
        let categories = group_categories(&sources).unwrap();
        assert_eq!(members(&categories, "objects"), vec!["b", "a"]);
    }

    #[test]
    fn test_component_follows_symbols() {
        let sources = vec![
            source("skin-tone-2", "Component", 1),
            source("heart", "Symbols", 2),
        ];
        let categories = group_categories(&sources).unwrap();
        assert_eq!(members(&categories, "symbols"), vec!["heart", "skin-tone-2"]);
    }

    #[test]
    fn test_unknown_label_skipped() {
        let sources = vec![
            source("mystery", "Uncharted", 1),
            source("car", "Travel & Places", 2),
        ];
        let categories = group_categories(&sources).unwrap();
        let total: usize = categories.iter().map(|c| c.emojis.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(members(&categories, "places"), vec!["car"]);
    }

    proptest! {
        #[test]
        fn prop_label_priority_then_file_order(
            picks in proptest::collection::vec(any::<bool>(), 0..30)
        ) {
            // true -> smileys, false -> people & body; names encode file position
            let sources: Vec<EmojiSource> = picks
                .iter()
                .enumerate()
                .map(|(i, smiley)| {
                    let label = if *smiley { "Smileys & Emotion" } else { "People & Body" };
                    source(&format!("e{i}"), label, 0)
                })
                .collect();

            let categories = group_categories(&sources).unwrap();
            let people = members(&categories, "people");

            let expected: Vec<String> = picks
                .iter()
                .enumerate()
                .filter(|(_, smiley)| **smiley)
                .chain(picks.iter().enumerate().filter(|(_, smiley)| !**smiley))
                .map(|(i, _)| format!("e{i}"))
                .collect();

            prop_assert_eq!(people, expected.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
