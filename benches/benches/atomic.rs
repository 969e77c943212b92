// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `boxify_atomic`: hashing, cache hits and misses, responsive
//! expansion.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::{format, string::String, vec::Vec};

use boxify_atomic::{
    Breakpoint, ClassName, Declarations, MemoryDocument, ResponsiveOverrides, StyleProperty,
    StyleRegistry, declaration_hash,
};

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("atomic/hash");

    group.bench_function("declaration_hash/short", |b| {
        b.iter(|| black_box(declaration_hash(black_box("display"), black_box("flex"))));
    });

    let long = "repeat(auto-fill, minmax(240px, 1fr)) / auto-flow dense";
    group.bench_function("declaration_hash/long", |b| {
        b.iter(|| black_box(declaration_hash(black_box("gridTemplateColumns"), black_box(long))));
    });

    group.bench_function("class_name", |b| {
        b.iter(|| {
            black_box(ClassName::for_declaration(
                black_box(StyleProperty::BackgroundColor),
                black_box("red"),
            ))
        });
    });

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("atomic/get_or_create");

    let registry = StyleRegistry::ssr();
    registry.init_ssr();
    registry.get_or_create(StyleProperty::Display, "flex");
    group.bench_function("hit/static", |b| {
        b.iter(|| black_box(registry.get_or_create(StyleProperty::Display, black_box("flex"))));
    });
    group.bench_function("hit/dynamic", |b| {
        b.iter(|| black_box(registry.get_or_create(StyleProperty::Width, black_box("42px"))));
    });

    for n in [16_usize, 256] {
        let values: Vec<String> = (0..n).map(|i| format!("{i}px")).collect();
        group.bench_function(BenchmarkId::new("miss/ssr", n), |b| {
            b.iter_batched(
                || {
                    let registry = StyleRegistry::ssr();
                    registry.init_ssr();
                    registry
                },
                |registry| {
                    for v in &values {
                        black_box(registry.get_or_create(StyleProperty::Padding, v));
                    }
                    registry
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(BenchmarkId::new("miss/live", n), |b| {
            b.iter_batched(
                || StyleRegistry::live(MemoryDocument::new()),
                |registry| {
                    for v in &values {
                        black_box(registry.get_or_create(StyleProperty::Padding, v));
                    }
                    registry
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("atomic/generate");

    let registry = StyleRegistry::ssr();
    registry.init_ssr();
    let decls = Declarations::new()
        .with(StyleProperty::Display, "flex")
        .with(StyleProperty::FlexDirection, "column")
        .with(StyleProperty::Padding, "20px")
        .with(StyleProperty::Gap, "8px")
        .with(StyleProperty::Width, "320px")
        .with(StyleProperty::MaxWidth, "100%");
    let overrides = ResponsiveOverrides::new()
        .with(
            Breakpoint::Tablet,
            Declarations::new()
                .with(StyleProperty::FlexDirection, "row")
                .with(StyleProperty::Width, "640px"),
        )
        .with(
            Breakpoint::Desktop,
            Declarations::new().with(StyleProperty::Width, "960px"),
        );
    registry.style(&decls, &overrides);

    group.bench_function("base/warm", |b| {
        b.iter(|| black_box(registry.generate(black_box(&decls))));
    });
    group.bench_function("responsive/warm", |b| {
        b.iter(|| black_box(registry.expand_responsive(black_box(&overrides))));
    });

    group.finish();
}

criterion_group!(benches, bench_hash, bench_cache, bench_generate);
criterion_main!(benches);
