//! Coercion rules shared by the built-in operators.
//!
//! Record data often arrives as text (`"15"`, `"2024-01-01"`), so comparisons
//! are loose: numeric strings compare as numbers, booleans compare by
//! truthiness, and date-like strings are parsed before date comparisons.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::Value;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn compare(self, other: Number) -> Comparison {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Comparison::Ordered(a.cmp(&b)),
            _ => Comparison::from(self.as_f64().partial_cmp(&other.as_f64())),
        }
    }
}

/// Outcome of a loose comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Comparison {
    Ordered(Ordering),
    /// Both sides are numbers but at least one is NaN.
    Unordered,
    /// The pair has no defined ordering.
    Incomparable,
}

impl From<Option<Ordering>> for Comparison {
    fn from(ord: Option<Ordering>) -> Self {
        ord.map_or(Comparison::Unordered, Comparison::Ordered)
    }
}

/// Parse a numeric string: optional surrounding whitespace, sign, digits,
/// fraction and exponent. `inf`, `nan` and hex literals are not numeric.
pub(crate) fn parse_numeric(s: &str) -> Option<Number> {
    let t = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let shape_ok = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if t.is_empty() || !shape_ok || !t.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Ok(i) = t.parse::<i64>() {
        return Some(Number::Int(i));
    }
    t.parse::<f64>().ok().map(Number::Float)
}

fn numeric(v: &Value) -> Option<Number> {
    match v {
        Value::Int(i) => Some(Number::Int(*i)),
        Value::Float(f) => Some(Number::Float(*f)),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

pub(crate) fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::List(items) => !items.is_empty(),
        Value::DateTime(_) => true,
    }
}

/// Loose equality. Total: pairs without a defined comparison are unequal.
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(_) | Value::Float(_), Value::String(s)) if parse_numeric(s).is_none() => {
            to_text(a).is_some_and(|text| text == s.as_str())
        }
        (Value::String(s), Value::Int(_) | Value::Float(_)) if parse_numeric(s).is_none() => {
            to_text(b).is_some_and(|text| text == s.as_str())
        }
        (Value::List(xs), Value::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        _ => loose_cmp(a, b) == Comparison::Ordered(Ordering::Equal),
    }
}

/// Loose ordering used by `>`, `>=`, `<` and `<=`.
pub(crate) fn loose_cmp(a: &Value, b: &Value) -> Comparison {
    match (a, b) {
        (Value::Null, Value::Null) => Comparison::Ordered(Ordering::Equal),
        (Value::Null, Value::String(s)) => Comparison::Ordered("".cmp(s.as_str())),
        (Value::String(s), Value::Null) => Comparison::Ordered(s.as_str().cmp("")),
        (Value::Bool(_) | Value::Null, _) | (_, Value::Bool(_) | Value::Null) => {
            Comparison::Ordered(truthy(a).cmp(&truthy(b)))
        }
        (Value::List(xs), Value::List(ys)) => compare_lists(xs, ys),
        (Value::DateTime(x), Value::DateTime(y)) => Comparison::Ordered(x.cmp(y)),
        (Value::DateTime(x), Value::String(s)) => {
            parse_date_str(s).map_or(Comparison::Incomparable, |y| Comparison::Ordered(x.cmp(&y)))
        }
        (Value::String(s), Value::DateTime(y)) => {
            parse_date_str(s).map_or(Comparison::Incomparable, |x| Comparison::Ordered(x.cmp(y)))
        }
        (Value::String(x), Value::String(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(m), Some(n)) => m.compare(n),
            _ => Comparison::Ordered(x.cmp(y)),
        },
        _ => match (numeric(a), numeric(b)) {
            (Some(m), Some(n)) => m.compare(n),
            _ => Comparison::Incomparable,
        },
    }
}

fn compare_lists(xs: &[Value], ys: &[Value]) -> Comparison {
    if xs.len() != ys.len() {
        return Comparison::Ordered(xs.len().cmp(&ys.len()));
    }
    for (x, y) in xs.iter().zip(ys) {
        match loose_cmp(x, y) {
            Comparison::Ordered(Ordering::Equal) => {}
            other => return other,
        }
    }
    Comparison::Ordered(Ordering::Equal)
}

/// Text form used by the substring operators. Lists and dates have none.
pub(crate) fn to_text(v: &Value) -> Option<Cow<'_, str>> {
    match v {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Int(i) => Some(Cow::Owned(i.to_string())),
        Value::Float(f) => Some(Cow::Owned(f.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
        Value::List(_) | Value::DateTime(_) => None,
    }
}

/// Numeric cast used by the range operators.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => parse_numeric(s).map(Number::as_f64),
        Value::List(_) | Value::DateTime(_) => None,
    }
}

/// Interpret a value as an instant. Integers are unix seconds.
pub(crate) fn to_instant(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::DateTime(dt) => Some(*dt),
        Value::Int(secs) => DateTime::from_timestamp(*secs, 0),
        Value::String(s) => parse_date_str(s),
        _ => None,
    }
}

/// Parse an absolute date or date-time. Naive forms are taken as UTC and
/// date-only forms as midnight. Never reads the clock.
pub(crate) fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Some(secs) = s.strip_prefix('@') {
        return secs
            .parse::<i64>()
            .ok()
            .and_then(|t| DateTime::from_timestamp(t, 0));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
