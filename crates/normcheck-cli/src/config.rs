//! Optional TOML configuration.
//!
//! ```toml
//! [keys]
//! max_optional = 25
//!
//! [grading]
//! strict_nested_order = false
//! strict_attribute_order = false
//! ```
//!
//! Missing sections and keys keep their defaults. Command-line flags are
//! applied on top of the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use normcheck_model::{GradingOptions, KeySearchOptions};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keys: KeySearchOptions,
    pub grading: GradingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradingSection {
    pub strict_nested_order: bool,
    /// Fail, rather than warn, when the attribute list is reordered.
    pub strict_attribute_order: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn grading_options(&self) -> GradingOptions {
        GradingOptions::new()
            .with_key_search(self.keys)
            .with_strict_nested_order(self.grading.strict_nested_order)
            .with_strict_attribute_order(self.grading.strict_attribute_order)
    }
}
