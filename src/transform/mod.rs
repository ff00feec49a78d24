//! Transformation of parsed sources into emit-ready models.
//!
//! The emoji table and the category list are built independently from the
//! same parsed records.

pub mod categories;
pub mod emoji_table;
pub mod skin_variations;

pub use categories::{canonical_category, group_categories, CanonicalCategory};
pub use emoji_table::build_emoji_table;
pub use skin_variations::extract_skin_variations;
