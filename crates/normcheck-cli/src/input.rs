//! Loading exercises from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use normcheck_model::{Attribute, AttributeSet, Exercise};
use tracing::debug;

pub fn load_exercise(path: &Path) -> Result<Exercise> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read exercise {}", path.display()))?;
    let exercise: Exercise = serde_json::from_str(&text)
        .with_context(|| format!("parse exercise {}", path.display()))?;
    debug!(
        path = %path.display(),
        attributes = exercise.attributes.len(),
        fds = exercise.fds.len(),
        "loaded exercise"
    );
    Ok(exercise)
}

/// Parses a comma-separated attribute list such as `order id, product`.
pub fn parse_attribute_list(list: &str) -> Result<AttributeSet> {
    let attrs = list
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(Attribute::parse)
        .collect::<Result<AttributeSet, _>>()?;
    if attrs.is_empty() {
        bail!("attribute list is empty");
    }
    Ok(attrs)
}

#[cfg(test)]
mod tests {
    use normcheck_model::attribute_set;

    use super::*;

    #[test]
    fn attribute_list_trims_tokens() {
        assert_eq!(
            parse_attribute_list(" order id, product ,").unwrap(),
            attribute_set(["order id", "product"])
        );
        assert!(parse_attribute_list(" , ").is_err());
    }
}
