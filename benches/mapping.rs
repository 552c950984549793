//! Benchmarks for object mapping.
//!
//! Measures the copy engine on warm mapping tables:
//! - Flat objects with scalar members
//! - Collections converted through an element binding
//! - Nested members resolved through an interface binding
//! - Parallel batches

extern crate mapscope;

use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mapscope::prelude::*;

#[derive(Clone, Default)]
struct Row {
    id: u64,
    name: String,
    score: f64,
    tags: Vec<String>,
}

impl Reflect for Row {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |r| &r.id, |r| &mut r.id)
            .field("name", |r| &r.name, |r| &mut r.name)
            .field("score", |r| &r.score, |r| &mut r.score)
            .property("tags", |r: &Row| r.tags.clone(), |r: &mut Row, v| r.tags = v)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Default)]
struct Label {
    value: String,
}

impl Reflect for Label {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .property("value", |l: &Label| l.value.clone(), |l: &mut Label, v| l.value = v)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Default)]
struct RowView {
    id: u64,
    name: String,
    score: f64,
    tags: Vec<Label>,
}

impl Reflect for RowView {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |r| &r.id, |r| &mut r.id)
            .field("name", |r| &r.name, |r| &mut r.name)
            .field("score", |r| &r.score, |r| &mut r.score)
            .property(
                "tags",
                |r: &RowView| r.tags.clone(),
                |r: &mut RowView, v| r.tags = v,
            )
            .default_constructor()
            .build()
    }
}

trait Payload: Object {}

#[derive(Clone, Default)]
struct Inner {
    id: u64,
    name: String,
}

impl Payload for Inner {}

impl Reflect for Inner {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("id", |i| &i.id, |i| &mut i.id)
            .field("name", |i| &i.name, |i| &mut i.name)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Default)]
struct Envelope {
    payload: Row,
}

impl Reflect for Envelope {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("payload", |e| &e.payload, |e| &mut e.payload)
            .default_constructor()
            .build()
    }
}

#[derive(Clone, Default)]
struct EnvelopeView {
    payload: Option<Arc<dyn Payload>>,
}

impl Reflect for EnvelopeView {
    fn describe() -> TypeInfo {
        TypeBuilder::<Self>::class()
            .field("payload", |e| &e.payload, |e| &mut e.payload)
            .default_constructor()
            .build()
    }
}

impl_object!(Row, Label, RowView, Inner, Envelope, EnvelopeView);
interface!(Payload => Inner);

fn row(tags: usize) -> Row {
    Row {
        id: 7,
        name: "row".to_string(),
        score: 0.5,
        tags: (0..tags).map(|i| format!("tag{i}")).collect(),
    }
}

fn mapper() -> Mapper {
    let mut bindings = TypeBindingRegistry::new();
    bindings
        .register_element::<String, Label>()
        .register_interface::<EnvelopeView, dyn Payload, Inner>();
    Mapper::new(bindings)
}

/// Benchmark mapping scalar members only.
fn bench_map_flat(c: &mut Criterion) {
    let mapper = mapper();
    let source = row(0);

    c.bench_function("map_flat", |b| {
        b.iter(|| {
            let mut view = RowView::default();
            mapper.map(black_box(&source), &mut view).unwrap();
            black_box(view)
        });
    });
}

/// Benchmark converting collections of growing size.
fn bench_map_collection(c: &mut Criterion) {
    let mapper = mapper();
    let mut group = c.benchmark_group("map_collection");

    for size in [1usize, 16, 256] {
        let source = row(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| {
                let mut view = RowView::default();
                mapper.map(black_box(source), &mut view).unwrap();
                black_box(view)
            });
        });
    }

    group.finish();
}

/// Benchmark a member resolved through an interface binding.
fn bench_map_interface(c: &mut Criterion) {
    let mapper = mapper();
    let source = Envelope { payload: row(4) };

    c.bench_function("map_interface", |b| {
        b.iter(|| {
            let mut view = EnvelopeView::default();
            mapper.map(black_box(&source), &mut view).unwrap();
            black_box(view)
        });
    });
}

/// Benchmark parallel batch mapping.
fn bench_map_batch(c: &mut Criterion) {
    let mapper = mapper();
    let sources: Vec<Row> = (0..1024).map(|_| row(8)).collect();

    c.bench_function("map_batch_1024", |b| {
        b.iter(|| {
            let mut views = vec![RowView::default(); sources.len()];
            mapper.map_batch(black_box(&sources), &mut views).unwrap();
            black_box(views)
        });
    });
}

criterion_group!(
    benches,
    bench_map_flat,
    bench_map_collection,
    bench_map_interface,
    bench_map_batch
);
criterion_main!(benches);
