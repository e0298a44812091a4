use std::sync::Arc;
use std::thread;

use rulekit::{Engine, Record};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Arc::new(Engine::new());
    let rules = Arc::new(vec![
        engine.rule("age", ">=", 18_i64).expect("unknown operator"),
        engine.rule("status", "==", "active").expect("unknown operator"),
    ]);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let record = Record::new()
                    .set("age", 16_i64 + i64::from(i))
                    .set("status", "active");

                let result = engine.evaluate(rules.as_slice(), &record);
                println!("Thread {i}: {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
