use rulekit::operators::Operator;
use rulekit::{Engine, OperatorTypeError, Record, RelationParsing, Value};
use tracing_subscriber::EnvFilter;

/// `matches_domain`: an email field belongs to one of the listed domains.
struct MatchesDomain;

impl Operator for MatchesDomain {
    fn name(&self) -> &str {
        "matches_domain"
    }

    fn evaluate(&self, field_value: &Value, rule_value: &Value) -> Result<bool, OperatorTypeError> {
        let email = field_value.as_str().ok_or_else(|| OperatorTypeError::TypeMismatch {
            operator: self.name().to_owned(),
            expected: "string",
            actual: field_value.type_name(),
        })?;
        let Some((_, domain)) = email.rsplit_once('@') else {
            return Ok(false);
        };
        let domains = rule_value.as_list().unwrap_or_default();
        Ok(domains
            .iter()
            .filter_map(Value::as_str)
            .any(|d| d.eq_ignore_ascii_case(domain)))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::builder()
        .register(MatchesDomain)
        .register_fn("len_at_least", |field: &Value, rule: &Value| {
            match (field.as_str(), rule) {
                (Some(s), Value::Int(n)) => {
                    Ok(i64::try_from(s.chars().count()).unwrap_or(i64::MAX) >= *n)
                }
                _ => Err(OperatorTypeError::custom(
                    "len_at_least",
                    "expects a string and an integer",
                )),
            }
        })
        .relation_parsing(RelationParsing::Lenient)
        .build();

    println!("Operators: {:?}", engine.registry().names());

    let rules = vec![
        engine
            .rule("email", "matches_domain", vec!["example.com", "example.org"])
            .expect("unknown operator"),
        engine.rule("password", "len_at_least", 12_i64).expect("unknown operator"),
    ];

    let record = Record::new()
        .set("email", "Someone@Example.com")
        .set("password", "hunter2");

    // Lenient parsing: an unrecognized token logs a warning and selects OR.
    for relation in ["and", "either"] {
        let report = engine
            .evaluate_report(&rules, &record, relation)
            .expect("evaluation failed");
        println!("{relation}: {report}");
    }
}
