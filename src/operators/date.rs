use chrono::{DateTime, Utc};

use super::Operator;
use crate::coerce::to_instant;
use crate::{OperatorTypeError, Value};

/// `before_date`: the field's instant is strictly earlier than the rule's.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeforeDate;

/// `after_date`: the field's instant is strictly later than the rule's.
#[derive(Debug, Clone, Copy, Default)]
pub struct AfterDate;

/// `date_equal`: both sides denote the same instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateEqual;

fn instant(operator: &str, value: &Value) -> Result<DateTime<Utc>, OperatorTypeError> {
    to_instant(value).ok_or_else(|| OperatorTypeError::InvalidDate {
        operator: operator.to_owned(),
        value: value.to_string(),
    })
}

fn instants(
    operator: &str,
    field_value: &Value,
    rule_value: &Value,
) -> Result<(DateTime<Utc>, DateTime<Utc>), OperatorTypeError> {
    Ok((instant(operator, field_value)?, instant(operator, rule_value)?))
}

impl Operator for BeforeDate {
    fn name(&self) -> &str {
        "before_date"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (field, rule) = instants(self.name(), field_value, rule_value)?;
        Ok(field < rule)
    }
}

impl Operator for AfterDate {
    fn name(&self) -> &str {
        "after_date"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (field, rule) = instants(self.name(), field_value, rule_value)?;
        Ok(field > rule)
    }
}

impl Operator for DateEqual {
    fn name(&self) -> &str {
        "date_equal"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let (field, rule) = instants(self.name(), field_value, rule_value)?;
        Ok(field == rule)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn before_and_after() {
        let signup = Value::from("2024-01-15 08:00:00");
        let cutoff = Value::from("2024-02-01");
        assert_eq!(BeforeDate.evaluate(&signup, &cutoff), Ok(true));
        assert_eq!(AfterDate.evaluate(&signup, &cutoff), Ok(false));
        assert_eq!(AfterDate.evaluate(&cutoff, &signup), Ok(true));
    }

    #[test]
    fn same_instant_is_neither_before_nor_after() {
        let a = Value::from("2024-03-01");
        let b = Value::from("2024-03-01T00:00:00Z");
        assert_eq!(DateEqual.evaluate(&a, &b), Ok(true));
        assert_eq!(BeforeDate.evaluate(&a, &b), Ok(false));
        assert_eq!(AfterDate.evaluate(&a, &b), Ok(false));
    }

    #[test]
    fn offsets_are_normalized() {
        let local = Value::from("2024-03-01T10:00:00+02:00");
        let utc = Value::DateTime(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
        assert_eq!(DateEqual.evaluate(&local, &utc), Ok(true));
    }

    #[test]
    fn unix_seconds_are_accepted() {
        let epoch_plus_day = Value::Int(86_400);
        assert_eq!(DateEqual.evaluate(&epoch_plus_day, &Value::from("1970-01-02")), Ok(true));
    }

    #[test]
    fn unparsable_date_fails() {
        let err = AfterDate
            .evaluate(&Value::from("next week"), &Value::from("2024-01-01"))
            .unwrap_err();
        assert_eq!(
            err,
            OperatorTypeError::InvalidDate {
                operator: "after_date".into(),
                value: "next week".into(),
            }
        );
    }
}
