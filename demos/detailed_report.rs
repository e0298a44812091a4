use rulekit::{Engine, Record};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new();
    let rules = vec![
        engine
            .rule("age", ">=", 18_i64)
            .expect("unknown operator")
            .with_description("adult"),
        engine
            .rule("status", "==", "active")
            .expect("unknown operator")
            .with_description("active account"),
        engine
            .rule("region", "not_in", vec!["restricted", "embargoed"])
            .expect("unknown operator"),
        engine
            .rule("signed_up", "before_date", "2024-01-01")
            .expect("unknown operator"),
    ];

    let record = Record::new()
        .set("age", 25_i64)
        .set("status", "suspended")
        .set("region", "us-east")
        .set("signed_up", "2023-03-14 09:26:53");

    let details = engine
        .evaluate_with_details(&rules, &record)
        .expect("evaluation failed");
    for outcome in &details {
        println!("{outcome}");
    }
    println!();

    let report = engine
        .evaluate_report(&rules, &record, "and")
        .expect("evaluation failed");
    println!("{report}");
    println!();
    println!("Passed: {:?}", report.passed().collect::<Vec<_>>());
    println!("Failed: {:?}", report.failed().collect::<Vec<_>>());
    println!("Duration: {:?}", report.duration());
}
