//! Canonical emoji categories.

use crate::error::{GenError, GenResult};
use serde::Serialize;

/// A merged emoji category as it appears in the generated output.
///
/// Several raw source labels can feed one category; `emojis` keeps the
/// short names in merge order and is never deduplicated.
///
/// # Validation
///
/// - ID must be non-empty, start with a lowercase ASCII letter and contain only
///   lowercase letters and digits (it doubles as an identifier in generated code)
/// - Name must be non-empty, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Canonical identifier (e.g., "people", "foods")
    pub id: String,
    /// Display name (e.g., "Smileys & People")
    pub name: String,
    /// Member short names, in merge order
    pub emojis: Vec<String>,
}

impl Category {
    /// Creates a new, empty Category with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use emojigen::models::Category;
    ///
    /// let category = Category::new("people", "Smileys & People").unwrap();
    /// assert!(category.emojis.is_empty());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> GenResult<Self> {
        let id = id.into();
        let name = name.into();

        Self::validate_id(&id)?;
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            emojis: Vec::new(),
        })
    }

    /// Validates category ID format.
    fn validate_id(id: &str) -> GenResult<()> {
        let context = format!("category '{id}'");

        let Some(first) = id.chars().next() else {
            return Err(GenError::schema("category", "ID cannot be empty"));
        };

        if !first.is_ascii_lowercase() {
            return Err(GenError::schema(
                context,
                "ID must start with a lowercase ASCII letter",
            ));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(GenError::schema(
                context,
                "ID must contain only lowercase letters and digits",
            ));
        }

        Ok(())
    }

    /// Validates category name.
    fn validate_name(name: &str) -> GenResult<()> {
        if name.is_empty() {
            return Err(GenError::schema("category", "name cannot be empty"));
        }

        if name.chars().count() > 50 {
            return Err(GenError::schema(
                format!("category '{name}'"),
                format!(
                    "name exceeds maximum length of 50 characters (got {})",
                    name.chars().count()
                ),
            ));
        }

        Ok(())
    }

    /// Appends member short names, keeping their order.
    pub fn extend_members<I, S>(&mut self, short_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emojis.extend(short_names.into_iter().map(Into::into));
    }
}
