use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use record_miner::query::{aggregate, statistics, Interval};
use record_miner::store::Store;
use record_miner::types::{FieldValue, Fields};

fn seeded_store(n: usize) -> Store {
    let mut store = Store::new();
    for i in 0..n {
        let mut fields = Fields::new();
        fields.insert("value".to_owned(), FieldValue::Number((i % 100) as f64));
        fields.insert("label".to_owned(), FieldValue::Text(format!("row-{i}")));
        store.append(fields, "bench", "csv");
    }
    store
}

fn bench_statistics(c: &mut Criterion) {
    let store = seeded_store(10_000);
    c.bench_function("statistics/10k", |b| {
        b.iter(|| statistics(black_box(store.all()), "value"))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let store = seeded_store(10_000);
    c.bench_function("aggregate/hour/10k", |b| {
        b.iter(|| aggregate(black_box(store.all()), "value", Interval::Hour))
    });
}

fn bench_deduplicate(c: &mut Criterion) {
    let store = seeded_store(10_000);
    c.bench_function("deduplicate/10k", |b| {
        b.iter_batched(
            || store.clone(),
            |mut store| store.deduplicate(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_statistics, bench_aggregate, bench_deduplicate);
criterion_main!(benches);
