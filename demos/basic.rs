use rulekit::{Engine, Record};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new();
    let rules = vec![
        engine.rule("age", ">", 18_i64).expect("unknown operator"),
        engine.rule("sex", "==", "1").expect("unknown operator"),
    ];

    let record = Record::new().set("age", 15_i64).set("sex", "1");

    for relation in ["AND", "OR"] {
        match engine.evaluate_with_relation(&rules, &record, relation) {
            Ok(verdict) => println!("{relation}: {verdict}"),
            Err(err) => println!("{relation}: error: {err}"),
        }
    }

    let score = engine
        .rule("score", "between", vec![10_i64, 20])
        .expect("unknown operator");
    let record = Record::new().set("score", "15");
    println!("{score}: {:?}", score.evaluate(&record));
}
