//! Benchmarks for Remold operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use remold::{
    compact_deep, flatten, index_by, partition, symbolize_deep, Key, KeyMode, Map, SymbolRegistry,
    Value,
};

// =============================================================================
// Fixtures
// =============================================================================

/// A nested map `depth` levels deep with `width` entries per level, salted
/// with nulls and lists so every transform has work to do.
fn nested(depth: usize, width: usize) -> Value {
    let mut map = Map::new();
    for i in 0..width {
        let key = Key::str(format!("field_{}", i));
        let value = if depth == 0 {
            if i % 3 == 0 {
                Value::null()
            } else {
                Value::from(i as i64)
            }
        } else if i % 4 == 0 {
            Value::List((0..3).map(|_| nested(depth - 1, width)).collect())
        } else {
            nested(depth - 1, width)
        };
        map.insert(key, value);
    }
    Value::Map(map)
}

fn benchmark_symbolize_deep(c: &mut Criterion) {
    let fixture = nested(4, 6);

    c.bench_function("symbolize_deep", |b| {
        b.iter(|| symbolize_deep(black_box(&fixture), KeyMode::All))
    });
}

fn benchmark_conversion_modes(c: &mut Criterion) {
    let fixture = nested(4, 6);
    let allowed: Vec<&str> = vec!["field_0", "field_2", "field_4"];
    let registry = SymbolRegistry::new();
    registry.register_all(["field_1", "field_3", "field_5"]);

    let mut group = c.benchmark_group("conversion_modes");

    group.bench_function("all", |b| {
        b.iter(|| symbolize_deep(black_box(&fixture), KeyMode::All))
    });

    group.bench_function("allowed", |b| {
        b.iter(|| symbolize_deep(black_box(&fixture), KeyMode::Allowed(&allowed)))
    });

    group.bench_function("known", |b| {
        b.iter(|| symbolize_deep(black_box(&fixture), KeyMode::Known(&registry)))
    });

    group.finish();
}

fn benchmark_compact_deep(c: &mut Criterion) {
    let fixture = nested(4, 6);

    c.bench_function("compact_deep", |b| {
        b.iter(|| compact_deep(black_box(&fixture)))
    });
}

fn benchmark_flatten(c: &mut Criterion) {
    let fixture = nested(4, 6);

    c.bench_function("flatten", |b| b.iter(|| flatten(black_box(&fixture))));
}

fn benchmark_index_by(c: &mut Criterion) {
    let items: Vec<Value> = (0..1000_i64).map(Value::from).collect();

    c.bench_function("index_by_1000", |b| {
        b.iter(|| {
            index_by(black_box(&items), |v| {
                v.as_scalar().map(|s| Key::str(s.to_string()))
            })
        })
    });
}

fn benchmark_partition(c: &mut Criterion) {
    let items: Vec<i64> = (0..1000).collect();

    c.bench_function("partition_1000_into_7", |b| {
        b.iter(|| partition(black_box(items.clone()), 7))
    });
}

criterion_group!(
    benches,
    benchmark_symbolize_deep,
    benchmark_conversion_modes,
    benchmark_compact_deep,
    benchmark_flatten,
    benchmark_index_by,
    benchmark_partition,
);

criterion_main!(benches);
