use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::record::Record;
use super::value::Value;
use crate::coerce::to_text;
use crate::operators::Operator;
use crate::{OperatorRegistry, OperatorTypeError, RuleError};

/// One condition: a field, a resolved operator, a comparison value and a description.
///
/// The operator is resolved when the rule is built, so a `Rule` never holds an
/// unknown operator. Rules are immutable and cheap to clone.
///
/// # Example
///
/// ```
/// use rulekit::{OperatorRegistry, Record, Rule};
///
/// let registry = OperatorRegistry::new();
/// let rule = Rule::new(&registry, "age", ">", 18_i64).unwrap();
/// assert_eq!(rule.description(), "age > 18");
/// assert_eq!(rule.evaluate(&Record::new().set("age", 20_i64)), Ok(true));
/// assert_eq!(rule.evaluate(&Record::new()), Ok(false));
/// ```
#[derive(Clone)]
pub struct Rule {
    field: String,
    operator_name: String,
    value: Value,
    description: String,
    operator: Arc<dyn Operator>,
}

impl Rule {
    /// Build a rule, resolving `operator` in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownOperator`] when `operator` is not registered.
    pub fn new(
        registry: &OperatorRegistry,
        field: impl Into<String>,
        operator: &str,
        value: impl Into<Value>,
    ) -> Result<Self, RuleError> {
        let resolved = registry.get(operator)?;
        Ok(Self {
            field: field.into(),
            operator_name: operator.to_owned(),
            value: value.into(),
            description: String::new(),
            operator: resolved,
        })
    }

    /// Attach a human-readable description. An empty string keeps the
    /// synthesized `"<field> <operator> <value>"` form.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The description given at construction, or `"<field> <operator> <value>"`.
    ///
    /// Scalars in the synthesized form use the same text as the substring
    /// operators: `true` is `1`, `false` and null are empty.
    #[must_use]
    pub fn description(&self) -> String {
        if self.description.is_empty() {
            let value =
                to_text(&self.value).map_or_else(|| self.value.to_string(), Cow::into_owned);
            format!("{} {} {}", self.field, self.operator_name, value)
        } else {
            self.description.clone()
        }
    }

    /// Evaluate against `record`.
    ///
    /// A field missing from the record yields `Ok(false)` without invoking
    /// the operator.
    ///
    /// # Errors
    ///
    /// Propagates the operator's [`OperatorTypeError`].
    pub fn evaluate(&self, record: &Record) -> Result<bool, OperatorTypeError> {
        let Some(field_value) = record.get(&self.field) else {
            trace!(field = %self.field, "field missing, rule denied");
            return Ok(false);
        };
        let passed = self.operator.evaluate(field_value, &self.value)?;
        trace!(field = %self.field, operator = %self.operator_name, passed, "rule evaluated");
        Ok(passed)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("operator", &self.operator_name)
            .field("value", &self.value)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// An unresolved rule definition, as produced by loaders before any
/// registry is consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRule {
    pub field: String,
    pub operator: String,
    pub value: Value,
    pub description: String,
}

impl RawRule {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Resolve the operator name in `registry`, producing a [`Rule`].
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownOperator`] when the operator is not registered.
    pub fn resolve(self, registry: &OperatorRegistry) -> Result<Rule, RuleError> {
        Ok(Rule::new(registry, self.field, &self.operator, self.value)?
            .with_description(self.description))
    }
}

/// An element of a dynamically assembled rule list: either a resolved
/// [`Rule`] or a [`RawRule`] nobody resolved yet.
#[derive(Debug, Clone)]
pub enum RuleEntry {
    Rule(Rule),
    Raw(RawRule),
}

impl From<Rule> for RuleEntry {
    fn from(rule: Rule) -> Self {
        RuleEntry::Rule(rule)
    }
}

impl From<RawRule> for RuleEntry {
    fn from(raw: RawRule) -> Self {
        RuleEntry::Raw(raw)
    }
}
