use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::RuleError;

/// How a [`RuleGroup`](super::RuleGroup) combines its rules' results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Relation {
    /// Strict mode: every rule must pass. Vacuously `true` for no rules.
    #[default]
    And,
    /// Lenient mode: at least one rule must pass. Vacuously `false` for no rules.
    Or,
}

/// How relation tokens are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationParsing {
    /// `and` / `or` in any case; anything else is [`RuleError::InvalidRelation`].
    #[default]
    Strict,
    /// `and` in any case selects AND; every other token selects OR.
    Lenient,
}

impl Relation {
    /// Parse a relation token using the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidRelation`] in strict mode when the token is
    /// neither `and` nor `or`.
    pub fn parse(token: &str, parsing: RelationParsing) -> Result<Self, RuleError> {
        match parsing {
            RelationParsing::Strict => token.parse(),
            RelationParsing::Lenient => {
                if token.eq_ignore_ascii_case("and") {
                    Ok(Relation::And)
                } else {
                    if !token.eq_ignore_ascii_case("or") {
                        warn!(relation = %token, "unrecognized relation, falling back to OR");
                    }
                    Ok(Relation::Or)
                }
            }
        }
    }

    /// Combine per-rule results. Every result is expected to be computed already.
    #[must_use]
    pub fn combine(self, results: &[bool]) -> bool {
        match self {
            Relation::And => results.iter().all(|&passed| passed),
            Relation::Or => results.iter().any(|&passed| passed),
        }
    }
}

impl FromStr for Relation {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(Relation::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Relation::Or)
        } else {
            Err(RuleError::InvalidRelation {
                relation: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::And => write!(f, "AND"),
            Relation::Or => write!(f, "OR"),
        }
    }
}
