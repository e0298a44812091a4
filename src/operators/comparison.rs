use std::cmp::Ordering;

use super::Operator;
use crate::coerce::{loose_cmp, loose_eq, Comparison};
use crate::{OperatorTypeError, Value};

/// `==`: loose equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

/// `!=`: inverse of `==`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEqual;

/// `>`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterThan;

/// `>=`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterThanOrEqual;

/// `<`
#[derive(Debug, Clone, Copy, Default)]
pub struct LessThan;

/// `<=`
#[derive(Debug, Clone, Copy, Default)]
pub struct LessThanOrEqual;

impl Operator for Equal {
    fn name(&self) -> &str {
        "=="
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        Ok(loose_eq(field_value, rule_value))
    }
}

impl Operator for NotEqual {
    fn name(&self) -> &str {
        "!="
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        Ok(!loose_eq(field_value, rule_value))
    }
}

/// Order the pair and test the ordering. NaN never satisfies an ordering.
fn ordered(
    name: &str,
    field_value: &Value,
    rule_value: &Value,
    test: fn(Ordering) -> bool,
) -> Result<bool, OperatorTypeError> {
    match loose_cmp(field_value, rule_value) {
        Comparison::Ordered(ord) => Ok(test(ord)),
        Comparison::Unordered => Ok(false),
        Comparison::Incomparable => Err(OperatorTypeError::Incomparable {
            operator: name.to_owned(),
            left: field_value.type_name(),
            right: rule_value.type_name(),
        }),
    }
}

impl Operator for GreaterThan {
    fn name(&self) -> &str {
        ">"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        ordered(self.name(), field_value, rule_value, Ordering::is_gt)
    }
}

impl Operator for GreaterThanOrEqual {
    fn name(&self) -> &str {
        ">="
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        ordered(self.name(), field_value, rule_value, Ordering::is_ge)
    }
}

impl Operator for LessThan {
    fn name(&self) -> &str {
        "<"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        ordered(self.name(), field_value, rule_value, Ordering::is_lt)
    }
}

impl Operator for LessThanOrEqual {
    fn name(&self) -> &str {
        "<="
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        ordered(self.name(), field_value, rule_value, Ordering::is_le)
    }
}
