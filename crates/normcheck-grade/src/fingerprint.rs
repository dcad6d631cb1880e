//! Attribute fingerprints.
//!
//! Two answers built for the same exercise variant share the same attribute
//! universe, so a fingerprint mismatch usually means a wrong file or variant.

use normcheck_model::Attribute;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of the sorted attribute tokens joined by `|`.
pub fn fingerprint(attributes: &[Attribute]) -> String {
    let mut tokens: Vec<&str> = attributes.iter().map(Attribute::as_str).collect();
    tokens.sort_unstable();
    hex::encode(Sha256::digest(tokens.join("|").as_bytes()))
}
