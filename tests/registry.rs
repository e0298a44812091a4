use std::sync::Arc;

use rulekit::operators::{self, Operator};
use rulekit::{Engine, FnOperator, OperatorRegistry, OperatorTypeError, Record, Rule, RuleError, Value};

struct Never;

impl Operator for Never {
    fn name(&self) -> &str {
        "=="
    }

    fn evaluate(&self, _: &Value, _: &Value) -> Result<bool, OperatorTypeError> {
        Ok(false)
    }
}

#[test]
fn builtins_are_registered() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.len(), operators::builtins().len());
    for name in [
        "==", "!=", ">", ">=", "<", "<=", "contains", "not_contains", "start_swith", "end_swith",
        "in", "not_in", "between", "not_between", "before_date", "after_date", "date_equal",
    ] {
        assert!(registry.contains(name), "{name}");
    }
    assert!(!registry.contains("starts_with"));
}

#[test]
fn replacement_affects_only_new_rules() {
    let mut registry = OperatorRegistry::new();
    let before = Rule::new(&registry, "x", "==", 1_i64).unwrap();

    let replaced = registry.register(Never);
    assert_eq!(replaced.map(|op| op.name().to_owned()), Some("==".to_owned()));
    let after = Rule::new(&registry, "x", "==", 1_i64).unwrap();

    let record = Record::new().set("x", 1_i64);
    assert_eq!(before.evaluate(&record), Ok(true));
    assert_eq!(after.evaluate(&record), Ok(false));
}

#[test]
fn isolated_registries_do_not_interfere() {
    let mut custom = OperatorRegistry::empty();
    custom.register_fn("is_blank", |field: &Value, _: &Value| {
        Ok(field.as_str().is_some_and(|s| s.trim().is_empty()))
    });
    let standard = OperatorRegistry::new();

    assert!(Rule::new(&custom, "x", "is_blank", Value::Null).is_ok());
    assert_eq!(
        Rule::new(&standard, "x", "is_blank", Value::Null).unwrap_err(),
        RuleError::UnknownOperator { name: "is_blank".into() }
    );
    assert_eq!(
        Rule::new(&custom, "x", "==", 1_i64).unwrap_err(),
        RuleError::UnknownOperator { name: "==".into() }
    );
}

#[test]
fn shared_operator_instances() {
    let op: Arc<dyn Operator> = Arc::new(FnOperator::new("divisible_by", |field: &Value, rule: &Value| {
        match (field, rule) {
            (Value::Int(_), Value::Int(0)) => Err(OperatorTypeError::custom("divisible_by", "division by zero")),
            (Value::Int(n), Value::Int(d)) => Ok(n % d == 0),
            _ => Err(OperatorTypeError::custom("divisible_by", "integers only")),
        }
    }));
    let mut a = OperatorRegistry::empty();
    let mut b = OperatorRegistry::empty();
    a.register_shared(Arc::clone(&op));
    b.register_shared(op);

    let rule = Rule::new(&a, "n", "divisible_by", 3_i64).unwrap();
    assert_eq!(rule.evaluate(&Record::new().set("n", 9_i64)), Ok(true));
    let rule = Rule::new(&b, "n", "divisible_by", 0_i64).unwrap();
    assert_eq!(
        rule.evaluate(&Record::new().set("n", 9_i64)),
        Err(OperatorTypeError::custom("divisible_by", "division by zero"))
    );
}

#[test]
fn engine_builder_overrides_builtins() {
    let engine = Engine::builder().register(Never).build();
    let rules = vec![engine.rule("x", "==", 1_i64).unwrap()];
    assert!(!engine.evaluate(&rules, &Record::new().set("x", 1_i64)).unwrap());
    assert!(engine.registry().contains("between"));
}
