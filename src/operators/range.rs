use super::Operator;
use crate::coerce::to_f64;
use crate::{OperatorTypeError, Value};

/// `between`: the field, cast to a number, lies in the inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Between;

/// `not_between`: inverse of `between`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBetween;

fn number(operator: &str, value: &Value) -> Result<f64, OperatorTypeError> {
    to_f64(value).ok_or_else(|| OperatorTypeError::TypeMismatch {
        operator: operator.to_owned(),
        expected: "number",
        actual: value.type_name(),
    })
}

fn in_range(operator: &str, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
    let bounds = rule_value
        .as_list()
        .ok_or_else(|| OperatorTypeError::TypeMismatch {
            operator: operator.to_owned(),
            expected: "[min, max] list",
            actual: rule_value.type_name(),
        })?;
    let [min, max] = bounds else {
        return Err(OperatorTypeError::InvalidRange {
            operator: operator.to_owned(),
            len: bounds.len(),
        });
    };
    let min = number(operator, min)?;
    let max = number(operator, max)?;
    let value = number(operator, field_value)?;
    Ok(value >= min && value <= max)
}

impl Operator for Between {
    fn name(&self) -> &str {
        "between"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        in_range(self.name(), field_value, rule_value)
    }
}

impl Operator for NotBetween {
    fn name(&self) -> &str {
        "not_between"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        in_range(self.name(), field_value, rule_value).map(|inside| !inside)
    }
}
