//! Configuration options for key search and grading.

use serde::{Deserialize, Serialize};

/// Default bound on optional attributes enumerated by the key search.
pub const DEFAULT_MAX_OPTIONAL: usize = 25;

/// Options for the candidate key search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeySearchOptions {
    /// Only the first `max_optional` optional attributes (sorted order) are
    /// enumerated. Results above this bound may be incomplete.
    pub max_optional: usize,
}

impl Default for KeySearchOptions {
    fn default() -> Self {
        Self {
            max_optional: DEFAULT_MAX_OPTIONAL,
        }
    }
}

impl KeySearchOptions {
    pub fn with_max_optional(mut self, max_optional: usize) -> Self {
        self.max_optional = max_optional;
        self
    }
}

/// Options controlling exercise grading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingOptions {
    /// Key search bound used by every check that needs candidate keys.
    pub key_search: KeySearchOptions,
    /// Require nested dependency chains to match in order, not just as sets.
    pub strict_nested_order: bool,
    /// Fail, rather than warn, when the student's attribute list holds the
    /// reference attributes in another order.
    pub strict_attribute_order: bool,
}

impl GradingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_search(mut self, key_search: KeySearchOptions) -> Self {
        self.key_search = key_search;
        self
    }

    pub fn with_strict_nested_order(mut self, enable: bool) -> Self {
        self.strict_nested_order = enable;
        self
    }

    pub fn with_strict_attribute_order(mut self, enable: bool) -> Self {
        self.strict_attribute_order = enable;
        self
    }
}
