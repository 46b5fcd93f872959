//! Classification Benchmark
//!
//! Measures classifier and predicate throughput over a mixed batch of values,
//! plus the cost of failing assertions (message data is built lazily, but the
//! classifier runs a second time on failure).

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use typeis::{Check, Function, ObjectBuilder, TypedArrayKind, Value, assert, classify, is};

// =============================================================================
// Inputs
// =============================================================================

fn mixed_values() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from("hello world"),
        Value::from(" 0x56 "),
        Value::from(42),
        Value::from(f64::NAN),
        Value::BigInt(1234),
        Value::from(true),
        Value::array([Value::from(1), Value::from(2)]),
        Value::object([("x", Value::from(1))]),
        Value::map([(Value::from("k"), Value::from("v"))]),
        Value::set([]),
        Value::promise(),
        Value::generator(),
        Value::typed_array(TypedArrayKind::Float64, 8),
        Value::function(Function::async_generator("agen")),
        Value::class("Foo"),
        ObjectBuilder::ordinary().method("then").method("catch").build(),
    ]
}

fn json_values(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let json = serde_json::json!({
                "id": i,
                "name": format!("item-{i}"),
                "tags": ["a", "b"],
                "score": i as f64 / 3.0,
            });
            Value::from(json)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let values = mixed_values();
    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| {
            for value in &values {
                black_box(classify(black_box(value)));
            }
        });
    });
    group.finish();
}

fn bench_all_unary_checks(c: &mut Criterion) {
    let values = mixed_values();
    let checks = Check::ALL_UNARY;
    let mut group = c.benchmark_group("unary_checks");
    group.throughput(Throughput::Elements((values.len() * checks.len()) as u64));
    group.bench_function("cross_product", |b| {
        b.iter(|| {
            for check in &checks {
                for value in &values {
                    let _ = black_box(check.test(black_box(value)));
                }
            }
        });
    });
    group.finish();
}

fn bench_shape_probes(c: &mut Criterion) {
    let values = mixed_values();
    let mut group = c.benchmark_group("shape_probes");
    group.bench_function("iterable", |b| {
        b.iter(|| values.iter().filter(|v| is::iterable(v)).count());
    });
    group.bench_function("promise", |b| {
        b.iter(|| values.iter().filter(|v| is::promise(v)).count());
    });
    group.bench_function("numeric_string", |b| {
        b.iter(|| values.iter().filter(|v| is::numeric_string(v)).count());
    });
    group.finish();
}

fn bench_combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinators");
    for size in [10usize, 100, 1000] {
        let values = json_values(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("all_plain_object", size), &values, |b, values| {
            b.iter(|| is::all(Check::PlainObject, black_box(values)));
        });
        group.bench_with_input(BenchmarkId::new("any_array_miss", size), &values, |b, values| {
            b.iter(|| is::any([Check::Array, Check::Map], black_box(values)));
        });
    }
    group.finish();
}

fn bench_failing_assertions(c: &mut Criterion) {
    let values = mixed_values();
    c.bench_function("assert_number_mixed", |b| {
        b.iter(|| {
            values
                .iter()
                .filter(|value| assert::number(value).is_err())
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_all_unary_checks,
    bench_shape_probes,
    bench_combinators,
    bench_failing_assertions
);
criterion_main!(benches);
