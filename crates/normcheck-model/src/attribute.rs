//! Attribute tokens and attribute sets.
//!
//! Attributes arrive already canonicalized (case-folded, whitespace
//! normalized). Equality is exact string equality and nothing in this
//! workspace rewrites a token after construction.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Result};

/// One canonical column token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(String);

impl Attribute {
    /// Wraps a token as-is. Use [`Attribute::parse`] when the input may be blank.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wraps a trimmed token, rejecting blanks.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyAttribute);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Attribute {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered attribute set. Iteration order is the canonical (sorted) order.
pub type AttributeSet = BTreeSet<Attribute>;

/// Builds an attribute set from anything yielding tokens.
pub fn attribute_set<I, A>(items: I) -> AttributeSet
where
    I: IntoIterator<Item = A>,
    A: Into<Attribute>,
{
    items.into_iter().map(Into::into).collect()
}

/// Renders a set as `{A, B, C}`.
pub fn format_set(set: &AttributeSet) -> String {
    let joined = set
        .iter()
        .map(Attribute::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{joined}}}")
}
