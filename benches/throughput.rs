use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use rulekit::{Engine, Record, Rule};

fn build_shared(engine: &Engine) -> (Arc<Vec<Rule>>, Arc<Record>) {
    let n = 20;
    let mut record = Record::new();
    let rules = (0..n)
        .map(|i| {
            let field = format!("f{i}");
            record.insert(field.clone(), 10_i64);
            engine.rule(field, ">=", 1_i64).unwrap()
        })
        .collect();
    (Arc::new(rules), Arc::new(record))
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let engine = Arc::new(Engine::new());
        let (rules, record) = build_shared(&engine);

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let engine = Arc::clone(&engine);
                        let rules = Arc::clone(&rules);
                        let record = Arc::clone(&record);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = engine.evaluate(rules.as_slice(), &record);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap())
                    .max()
                    .unwrap_or(Duration::ZERO)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
