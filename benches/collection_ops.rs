// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for attachment collection operations.
//!
//! Every mutation returns a fresh, renumbered collection, so cost grows with
//! shot size. Measures:
//! - Appending to a large shot
//! - Moving the last attachment to the front
//! - Removing the primary attachment
//! - Normalizing raw snapshot records

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shotlist::domain::attachment::{Attachment, AttachmentCollection, AttachmentId};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 100, 1000];

fn records(count: usize) -> Vec<Attachment> {
    (0..count)
        .map(|index| {
            Attachment::new(format!("att-{index}"), format!("shots/{index}.jpg"))
                .with_order(u32::try_from(count - index).unwrap_or(u32::MAX))
        })
        .collect()
}

fn collection(count: usize) -> AttachmentCollection {
    AttachmentCollection::from_records(records(count)).unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_ops/add");
    for size in SIZES {
        let base = collection(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let next = base.add(Attachment::new("new", "shots/new.jpg")).unwrap();
                black_box(next);
            });
        });
    }
    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_ops/reorder");
    for size in SIZES {
        let base = collection(size);
        let last = base.iter().last().map(|a| a.id.clone()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let next = base.reorder(black_box(&last), 0).unwrap();
                black_box(next);
            });
        });
    }
    group.finish();
}

fn bench_remove_primary(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_ops/remove_primary");
    for size in SIZES {
        let base = collection(size);
        let primary = base.primary().map(|a| a.id.clone()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let next = base.remove(black_box(&primary)).unwrap();
                black_box(next);
            });
        });
    }
    group.finish();
}

fn bench_from_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_ops/from_records");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || records(size),
                |records| black_box(AttachmentCollection::from_records(records).unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_set_primary(c: &mut Criterion) {
    let base = collection(1000);
    let target = AttachmentId::new("att-500");
    c.bench_function("collection_ops/set_primary_1000", |b| {
        b.iter(|| black_box(base.set_primary(black_box(&target)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_reorder,
    bench_remove_primary,
    bench_from_records,
    bench_set_primary
);
criterion_main!(benches);
