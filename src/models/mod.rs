//! Data models for emoji records and categories.
//!
//! These are the fully resolved structures handed to the emitters.
//! Raw source shapes live in the parser module.

pub mod category;
pub mod emoji;

// Re-export all model types
pub use category::Category;
pub use emoji::{EmojiRecord, SkinTone, SkinVariations};
