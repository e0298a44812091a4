//! Operators: named predicates comparing a record's field value to a rule's value.
//!
//! Every built-in applies an explicit coercion rule:
//!
//! | name | inputs | semantics |
//! |---|---|---|
//! | `==`, `!=` | any | loose equality (numeric strings equal numbers, bools compare truthiness) |
//! | `>`, `>=`, `<`, `<=` | numbers, numeric strings, strings, dates | loose ordering; incomparable pairs fail |
//! | `contains`, `not_contains` | scalars | substring test on the text form |
//! | `start_swith`, `end_swith` | scalars | prefix / suffix test on the text form |
//! | `in`, `not_in` | rule value is a list | membership by loose equality |
//! | `between`, `not_between` | rule value is `[min, max]` | inclusive range on the numeric cast |
//! | `before_date`, `after_date`, `date_equal` | dates, date strings, unix seconds | instant comparison |
//!
//! The `start_swith` / `end_swith` spellings are part of the public operator
//! names and are kept as-is.

mod comparison;
mod date;
mod membership;
mod range;
mod string;

use std::fmt;
use std::sync::Arc;

pub use comparison::{
    Equal, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotEqual,
};
pub use date::{AfterDate, BeforeDate, DateEqual};
pub use membership::{In, NotIn};
pub use range::{Between, NotBetween};
pub use string::{Contains, EndsWith, NotContains, StartsWith};

use crate::{OperatorTypeError, Value};

/// A named, pure predicate over `(field value, rule value)`.
///
/// Implementations must not perform I/O or keep mutable state: the same
/// inputs always produce the same result. Inputs an operator cannot handle
/// are reported as [`OperatorTypeError`], never as a panic.
pub trait Operator: Send + Sync {
    /// The name rules use to reference this operator.
    fn name(&self) -> &str;

    /// Compare `field_value` (from the record) against `rule_value` (from the rule).
    ///
    /// # Errors
    ///
    /// Returns [`OperatorTypeError`] when the inputs fall outside the
    /// operator's coercion rules.
    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError>;
}

impl fmt::Debug for dyn Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self.name())
    }
}

/// Adapts a closure into an [`Operator`].
///
/// ```
/// use rulekit::{FnOperator, Operator, Value};
///
/// let is_even = FnOperator::new("is_even", |field: &Value, _rule: &Value| {
///     Ok(matches!(field, Value::Int(i) if i % 2 == 0))
/// });
/// assert_eq!(is_even.name(), "is_even");
/// assert_eq!(is_even.evaluate(&Value::Int(4), &Value::Null), Ok(true));
/// ```
pub struct FnOperator<F> {
    name: String,
    f: F,
}

impl<F> FnOperator<F>
where
    F: Fn(&Value, &Value) -> Result<bool, OperatorTypeError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Operator for FnOperator<F>
where
    F: Fn(&Value, &Value) -> Result<bool, OperatorTypeError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        (self.f)(field_value, rule_value)
    }
}

impl<F> fmt::Debug for FnOperator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperator").field("name", &self.name).finish()
    }
}

/// The built-in operator table, in registration order.
#[must_use]
pub fn builtins() -> Vec<Arc<dyn Operator>> {
    vec![
        Arc::new(Equal),
        Arc::new(NotEqual),
        Arc::new(GreaterThan),
        Arc::new(GreaterThanOrEqual),
        Arc::new(LessThan),
        Arc::new(LessThanOrEqual),
        Arc::new(Contains),
        Arc::new(NotContains),
        Arc::new(StartsWith),
        Arc::new(EndsWith),
        Arc::new(In),
        Arc::new(NotIn),
        Arc::new(Between),
        Arc::new(NotBetween),
        Arc::new(BeforeDate),
        Arc::new(AfterDate),
        Arc::new(DateEqual),
    ]
}
