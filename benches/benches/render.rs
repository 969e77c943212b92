// Copyright 2025 the Boxify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `boxify`: prop splitting and full box rendering.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use boxify::{BoxRenderer, PropertyBag, split_props};
use boxify_atomic::StyleRegistry;

fn card_props() -> PropertyBag {
    PropertyBag::new()
        .with("as", "section")
        .with("className", "card")
        .with("display", "flex")
        .with("flexDirection", "column")
        .with("padding", "20px")
        .with("backgroundColor", "white")
        .with("width", "320px")
        .with("zIndex", 1)
        .with("id", "hero")
        .with("tablet", PropertyBag::new().with("flexDirection", "row"))
        .with("desktop", PropertyBag::new().with("width", "960px"))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("boxify/render");

    group.bench_function("split_props", |b| {
        b.iter_batched(card_props, |props| black_box(split_props(props)), BatchSize::SmallInput);
    });

    let registry = StyleRegistry::ssr();
    registry.init_ssr();
    let renderer = BoxRenderer::new(&registry);
    renderer.render(card_props());
    group.bench_function("warm", |b| {
        b.iter_batched(
            card_props,
            |props| black_box(renderer.render(props)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cold_request", |b| {
        b.iter_batched(
            card_props,
            |props| {
                let registry = StyleRegistry::ssr();
                registry.init_ssr();
                black_box(BoxRenderer::new(&registry).render(props));
                black_box(registry.ssr_stylesheet())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
