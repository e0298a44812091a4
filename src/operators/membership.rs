use super::Operator;
use crate::coerce::loose_eq;
use crate::{OperatorTypeError, Value};

/// `in`: the field value loosely equals some element of the rule's list.
#[derive(Debug, Clone, Copy, Default)]
pub struct In;

/// `not_in`: inverse of `in`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotIn;

fn member(operator: &str, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
    let items = rule_value
        .as_list()
        .ok_or_else(|| OperatorTypeError::TypeMismatch {
            operator: operator.to_owned(),
            expected: "list",
            actual: rule_value.type_name(),
        })?;
    Ok(items.iter().any(|item| loose_eq(field_value, item)))
}

impl Operator for In {
    fn name(&self) -> &str {
        "in"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        member(self.name(), field_value, rule_value)
    }
}

impl Operator for NotIn {
    fn name(&self) -> &str {
        "not_in"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        member(self.name(), field_value, rule_value).map(|found| !found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_uses_loose_equality() {
        let allowed = Value::from(vec!["1", "2", "3"]);
        assert_eq!(In.evaluate(&Value::Int(2), &allowed), Ok(true));
        assert_eq!(In.evaluate(&Value::from("4"), &allowed), Ok(false));
        assert_eq!(NotIn.evaluate(&Value::from("4"), &allowed), Ok(true));
    }

    #[test]
    fn empty_list_contains_nothing() {
        let empty = Value::List(vec![]);
        assert_eq!(In.evaluate(&Value::from("x"), &empty), Ok(false));
        assert_eq!(NotIn.evaluate(&Value::from("x"), &empty), Ok(true));
    }

    #[test]
    fn rule_value_must_be_a_list() {
        let err = NotIn.evaluate(&Value::from("a"), &Value::from("abc")).unwrap_err();
        assert_eq!(
            err,
            OperatorTypeError::TypeMismatch {
                operator: "not_in".into(),
                expected: "list",
                actual: "string",
            }
        );
    }
}
