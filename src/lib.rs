//! Emoji declaration generator library
//!
//! This library turns the emoji-data JSON table and CLDR keyword annotations
//! into generated source declarations: an emoji lookup table and a list of
//! merged emoji categories.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod generator;
pub mod models;
pub mod output;
pub mod parser;
pub mod transform;

pub use error::{GenError, GenResult};
pub use generator::{EmojiGenerator, Sources};
