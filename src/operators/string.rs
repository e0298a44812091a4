use std::borrow::Cow;

use super::Operator;
use crate::coerce::to_text;
use crate::{OperatorTypeError, Value};

/// `contains`: the field's text contains the rule's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contains;

/// `not_contains`: inverse of `contains`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotContains;

/// `start_swith`: the field's text starts with the rule's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartsWith;

/// `end_swith`: the field's text ends with the rule's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndsWith;

fn text<'v>(operator: &str, value: &'v Value) -> Result<Cow<'v, str>, OperatorTypeError> {
    to_text(value).ok_or_else(|| OperatorTypeError::TypeMismatch {
        operator: operator.to_owned(),
        expected: "string",
        actual: value.type_name(),
    })
}

fn texts<'v>(
    operator: &str,
    field_value: &'v Value,
    rule_value: &'v Value,
) -> Result<(Cow<'v, str>, Cow<'v, str>), OperatorTypeError> {
    Ok((text(operator, field_value)?, text(operator, rule_value)?))
}

impl Operator for Contains {
    fn name(&self) -> &str {
        "contains"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (haystack, needle) = texts(self.name(), field_value, rule_value)?;
        Ok(haystack.contains(needle.as_ref()))
    }
}

impl Operator for NotContains {
    fn name(&self) -> &str {
        "not_contains"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (haystack, needle) = texts(self.name(), field_value, rule_value)?;
        Ok(!haystack.contains(needle.as_ref()))
    }
}

impl Operator for StartsWith {
    fn name(&self) -> &str {
        "start_swith"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (haystack, prefix) = texts(self.name(), field_value, rule_value)?;
        Ok(haystack.starts_with(prefix.as_ref()))
    }
}

impl Operator for EndsWith {
    fn name(&self) -> &str {
        "end_swith"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (haystack, suffix) = texts(self.name(), field_value, rule_value)?;
        Ok(haystack.ends_with(suffix.as_ref()))
    }
}
