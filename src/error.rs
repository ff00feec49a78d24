//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is fatal: the pipeline stops at the first one and nothing is
/// written to the destination.
#[derive(Debug, Error)]
pub enum GenError {
    /// A codepoint token is not hexadecimal or not a Unicode scalar value.
    #[error("invalid codepoint token '{token}': {reason}")]
    Format {
        /// The offending token as it appeared in the source
        token: String,
        /// Why the token was rejected
        reason: String,
    },

    /// An input file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A source record or annotation entry lacks a required field or is malformed.
    #[error("{context}: {detail}")]
    Schema {
        /// Which record or entry was being read (e.g. "emoji record 12 (grinning)")
        context: String,
        /// What was wrong with it
        detail: String,
    },

    /// Two emoji records share the same short name.
    #[error(
        "duplicate short name '{short_name}' (records {first_index} and {second_index})"
    )]
    DuplicateKey {
        /// The colliding short name
        short_name: String,
        /// Source index of the first record carrying the name
        first_index: usize,
        /// Source index of the second record carrying the name
        second_index: usize,
    },

    /// Serialization of the generated declarations failed.
    #[error("failed to emit declarations: {0}")]
    Emit(String),
}

impl GenError {
    /// Creates a schema error for the given context.
    pub fn schema(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Schema {
            context: context.into(),
            detail: detail.into(),
        }
    }

    /// Wraps a codepoint format error with the record that carried it.
    ///
    /// Non-format errors are returned unchanged.
    #[must_use]
    pub fn in_record(self, context: &str) -> Self {
        match self {
            Self::Format { token, reason } => Self::Format {
                token,
                reason: format!("{reason} (in {context})"),
            },
            other => other,
        }
    }

    /// Returns true for errors caused by the content of the input data
    /// (as opposed to the environment).
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::Schema { .. } | Self::DuplicateKey { .. }
        )
    }
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;
