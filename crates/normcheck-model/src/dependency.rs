//! Functional dependencies.
//!
//! [`FunctionalDependency`] is the engine's unit: a non-empty left-hand side
//! and exactly one dependent attribute. [`CompoundDependency`] is the input
//! shape, where the right-hand side may name several attributes; it is split
//! into single-RHS dependencies before any reasoning happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::attribute::{Attribute, AttributeSet};
use crate::{ModelError, Result};

/// Arrows accepted by the compact `A, B -> C` notation.
const ARROWS: [&str; 3] = ["->", "→", "=>"];

/// `lhs -> rhs` with a single dependent attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionalDependency {
    pub lhs: AttributeSet,
    pub rhs: Attribute,
}

/// Sequence of single-RHS dependencies. Duplicates are allowed.
pub type FdSet = Vec<FunctionalDependency>;

impl FunctionalDependency {
    pub fn new<I, A>(lhs: I, rhs: impl Into<Attribute>) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        Self {
            lhs: lhs.into_iter().map(Into::into).collect(),
            rhs: rhs.into(),
        }
    }

    /// True when the dependent attribute already appears on the left.
    pub fn is_trivial(&self) -> bool {
        self.lhs.contains(&self.rhs)
    }

    /// Every attribute the dependency mentions.
    pub fn attributes(&self) -> AttributeSet {
        let mut attrs = self.lhs.clone();
        attrs.insert(self.rhs.clone());
        attrs
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lhs = self
            .lhs
            .iter()
            .map(Attribute::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{lhs} -> {}", self.rhs)
    }
}

impl FromStr for FunctionalDependency {
    type Err = ModelError;

    /// Parses `A, B -> C`. Several right-hand attributes are rejected here;
    /// use [`CompoundDependency`] for those.
    fn from_str(s: &str) -> Result<Self> {
        let compound: CompoundDependency = s.parse()?;
        let mut split = compound.split();
        match (split.pop(), split.is_empty()) {
            (Some(fd), true) => Ok(fd),
            _ => Err(ModelError::MultipleRhs(s.to_string())),
        }
    }
}

/// `lhs -> rhs1, rhs2, ...` as supplied by the parsing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundDependency {
    pub lhs: AttributeSet,
    pub rhs: AttributeSet,
}

impl CompoundDependency {
    pub fn new<L, R, A, B>(lhs: L, rhs: R) -> Self
    where
        L: IntoIterator<Item = A>,
        R: IntoIterator<Item = B>,
        A: Into<Attribute>,
        B: Into<Attribute>,
    {
        Self {
            lhs: lhs.into_iter().map(Into::into).collect(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a dependency from raw tokens. Each token is trimmed; blank
    /// tokens and empty sides are rejected.
    pub fn from_tokens<L, R, S, T>(lhs: L, rhs: R) -> Result<Self>
    where
        L: IntoIterator<Item = S>,
        R: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let lhs: Vec<String> = lhs.into_iter().map(|t| t.as_ref().to_string()).collect();
        let rhs: Vec<String> = rhs.into_iter().map(|t| t.as_ref().to_string()).collect();
        let parse = |tokens: &[String]| -> Result<AttributeSet> {
            tokens.iter().map(|token| Attribute::parse(token)).collect()
        };
        Self::checked(parse(&lhs)?, parse(&rhs)?, || {
            format!("{} -> {}", lhs.join(", "), rhs.join(", "))
        })
    }

    fn checked(
        lhs: AttributeSet,
        rhs: AttributeSet,
        source: impl FnOnce() -> String,
    ) -> Result<Self> {
        if lhs.is_empty() {
            return Err(ModelError::EmptyLhs(source()));
        }
        if rhs.is_empty() {
            return Err(ModelError::EmptyRhs(source()));
        }
        Ok(Self { lhs, rhs })
    }

    /// One single-RHS dependency per right-hand attribute, sharing the LHS.
    pub fn split(&self) -> FdSet {
        self.rhs
            .iter()
            .map(|rhs| FunctionalDependency {
                lhs: self.lhs.clone(),
                rhs: rhs.clone(),
            })
            .collect()
    }
}

impl From<FunctionalDependency> for CompoundDependency {
    fn from(fd: FunctionalDependency) -> Self {
        Self {
            lhs: fd.lhs,
            rhs: AttributeSet::from([fd.rhs]),
        }
    }
}

impl FromStr for CompoundDependency {
    type Err = ModelError;

    /// Attribute lists are separated by `,` or `;`. Whitespace inside a token
    /// is kept, since canonical tokens may contain single spaces.
    fn from_str(s: &str) -> Result<Self> {
        let (left, right) = ARROWS
            .iter()
            .find_map(|arrow| s.split_once(arrow))
            .ok_or_else(|| ModelError::MissingArrow(s.to_string()))?;
        Self::checked(parse_token_list(left)?, parse_token_list(right)?, || {
            s.to_string()
        })
    }
}

fn parse_token_list(list: &str) -> Result<AttributeSet> {
    list.split([',', ';'])
        .filter(|part| !part.trim().is_empty())
        .map(Attribute::parse)
        .collect()
}

/// Splits every compound dependency, keeping input order.
pub fn split_all(deps: &[CompoundDependency]) -> FdSet {
    deps.iter().flat_map(CompoundDependency::split).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RhsRepr {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompoundRepr {
    Compact(String),
    Structured { lhs: Vec<String>, rhs: RhsRepr },
}

impl<'de> Deserialize<'de> for CompoundDependency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match CompoundRepr::deserialize(deserializer)? {
            CompoundRepr::Compact(text) => text.parse().map_err(serde::de::Error::custom),
            CompoundRepr::Structured { lhs, rhs } => {
                let rhs = match rhs {
                    RhsRepr::One(token) => vec![token],
                    RhsRepr::Many(tokens) => tokens,
                };
                Self::from_tokens(lhs, rhs).map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_notation() {
        let dep: CompoundDependency = "A, B -> C; D".parse().unwrap();
        assert_eq!(dep, CompoundDependency::new(["A", "B"], ["C", "D"]));
        let unicode: CompoundDependency = "order id → total".parse().unwrap();
        assert_eq!(unicode, CompoundDependency::new(["order id"], ["total"]));
    }

    #[test]
    fn rejects_malformed_notation() {
        assert!(matches!(
            "A B C".parse::<CompoundDependency>(),
            Err(ModelError::MissingArrow(_))
        ));
        assert!(matches!(
            " -> C".parse::<CompoundDependency>(),
            Err(ModelError::EmptyLhs(_))
        ));
        assert!(matches!(
            "A ->".parse::<CompoundDependency>(),
            Err(ModelError::EmptyRhs(_))
        ));
        assert!(matches!(
            "A -> B, C".parse::<FunctionalDependency>(),
            Err(ModelError::MultipleRhs(_))
        ));
    }

    #[test]
    fn split_shares_lhs() {
        let dep = CompoundDependency::new(["A"], ["B", "C"]);
        assert_eq!(
            dep.split(),
            vec![
                FunctionalDependency::new(["A"], "B"),
                FunctionalDependency::new(["A"], "C"),
            ]
        );
    }

    #[test]
    fn display_lists_lhs_sorted() {
        let fd = FunctionalDependency::new(["B", "A"], "C");
        assert_eq!(fd.to_string(), "A, B -> C");
        assert!(!fd.is_trivial());
        assert!(FunctionalDependency::new(["A", "C"], "C").is_trivial());
    }
}
