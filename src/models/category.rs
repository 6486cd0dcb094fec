//! Category names
//!
//! Categories are free-form labels. They are stored in a canonical
//! capitalization (first letter upper, rest lower) so that "moradia",
//! "MORADIA" and " Moradia " all name the same category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when a record arrives with a blank category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Canonicalize a category label: trim, first letter upper, rest lower
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A canonicalized category name
///
/// Equality and hashing operate on the canonical form, which makes
/// comparisons case-insensitive and whitespace-insensitive at the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Canonicalize a raw label
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(canonicalize(raw.as_ref()))
    }

    /// The fallback category for blank labels
    pub fn uncategorized() -> Self {
        Self(UNCATEGORIZED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison against a raw label
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == canonicalize(raw)
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CategoryName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CategoryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}
