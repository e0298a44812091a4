use std::fmt;

use super::evaluation_report::EvaluationReport;
use super::outcome::RuleOutcome;
use super::record::Record;
use super::relation::Relation;
use super::rule::Rule;
use crate::RuleError;

/// An ordered list of rules combined with AND or OR.
///
/// The group borrows its rules, so a rule list built once can back any
/// number of groups. Order does not change the verdict; it fixes the order
/// of detail-report entries.
///
/// # Example
///
/// ```
/// use rulekit::{OperatorRegistry, Record, Relation, Rule, RuleGroup};
///
/// let registry = OperatorRegistry::new();
/// let rules = vec![
///     Rule::new(&registry, "age", ">", 18_i64).unwrap(),
///     Rule::new(&registry, "sex", "==", "1").unwrap(),
/// ];
/// let record = Record::new().set("age", 15_i64).set("sex", "1");
///
/// assert!(!RuleGroup::new(&rules, Relation::And).evaluate(&record).unwrap());
/// assert!(RuleGroup::new(&rules, Relation::Or).evaluate(&record).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RuleGroup<'a> {
    rules: Vec<&'a Rule>,
    relation: Relation,
}

impl<'a> RuleGroup<'a> {
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = &'a Rule>, relation: Relation) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            relation,
        }
    }

    /// Build a group from a relation token, parsed strictly.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidRelation`] for a token other than `and` / `or`.
    pub fn with_relation_token(
        rules: impl IntoIterator<Item = &'a Rule>,
        relation: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self::new(rules, relation.parse()?))
    }

    #[must_use]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[must_use]
    pub fn rules(&self) -> &[&'a Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and combine the results with the group's relation.
    ///
    /// All rules are evaluated even when the verdict is already decided.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Operator`] for the first rule whose operator
    /// rejects its inputs; no partial verdict is produced.
    pub fn evaluate(&self, record: &Record) -> Result<bool, RuleError> {
        crate::evaluate::evaluate(&self.rules, self.relation, record)
    }

    /// Evaluate every rule independently and report each outcome in input order.
    ///
    /// The relation plays no part here.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Operator`] as [`evaluate()`](Self::evaluate) does.
    pub fn evaluate_with_details(&self, record: &Record) -> Result<Vec<RuleOutcome>, RuleError> {
        crate::evaluate::evaluate_with_details(&self.rules, record)
    }

    /// Evaluate once and return both the combined verdict and the per-rule outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Operator`] as [`evaluate()`](Self::evaluate) does.
    pub fn evaluate_detailed(&self, record: &Record) -> Result<EvaluationReport, RuleError> {
        crate::evaluate::evaluate_detailed(&self.rules, self.relation, record)
    }
}

impl fmt::Display for RuleGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleGroup({} rules, {})", self.rules.len(), self.relation)
    }
}
