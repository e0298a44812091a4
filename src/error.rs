use thiserror::Error;

use crate::OperatorTypeError;

/// Unified error type for rule construction, registry lookup and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// An operator name has no entry in the registry.
    #[error("operator [{name}] is not supported")]
    UnknownOperator { name: String },

    /// A rule list passed to the [`Engine`](crate::Engine) contains an entry
    /// that is not a resolved [`Rule`](crate::Rule).
    #[error("invalid rule format at index {index}: {reason}")]
    InvalidRuleType { index: usize, reason: String },

    /// A relation token is neither `AND` nor `OR`.
    #[error("unknown relation '{relation}'; expected AND or OR")]
    InvalidRelation { relation: String },

    /// An operator rejected its inputs while a rule was evaluated.
    #[error("rule '{rule}' failed: {source}")]
    Operator {
        rule: String,
        #[source]
        source: OperatorTypeError,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn unknown_operator_message() {
        let err = RuleError::UnknownOperator {
            name: "~=".into(),
        };
        assert_eq!(err.to_string(), "operator [~=] is not supported");
    }

    #[test]
    fn invalid_rule_type_message() {
        let err = RuleError::InvalidRuleType {
            index: 2,
            reason: "unresolved definition for field 'age'".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rule format at index 2: unresolved definition for field 'age'"
        );
    }

    #[test]
    fn invalid_relation_message() {
        let err = RuleError::InvalidRelation {
            relation: "ADN".into(),
        };
        assert_eq!(err.to_string(), "unknown relation 'ADN'; expected AND or OR");
    }

    #[test]
    fn operator_error_keeps_source() {
        let err = RuleError::Operator {
            rule: "score between [10, 20]".into(),
            source: OperatorTypeError::TypeMismatch {
                operator: "between".into(),
                expected: "number",
                actual: "list",
            },
        };
        assert_eq!(
            err.to_string(),
            "rule 'score between [10, 20]' failed: operator 'between' expected number, got list"
        );
        assert!(err.source().is_some());
    }
}
