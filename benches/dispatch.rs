// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Dispatch-cost microbenchmarks.
//!
//! Compares an associated function, an inherent method, a monomorphized
//! trait call, and virtual calls through `&dyn` and `Box<dyn>`. Receivers
//! pass through `black_box` so the virtual variants are not devirtualized.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stdlib_microbench::dispatch::{respond_dyn, respond_generic, Respond, Responder};

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let responder = Responder;
    let boxed: Box<dyn Respond> = Box::new(Responder);

    group.bench_function("associated_fn", |b| {
        b.iter(|| black_box(Responder::associated()));
    });

    group.bench_function("inherent_method", |b| {
        b.iter(|| black_box(black_box(&responder).inherent()));
    });

    group.bench_function("generic_trait", |b| {
        b.iter(|| black_box(respond_generic(black_box(&responder))));
    });

    group.bench_function("dyn_ref", |b| {
        b.iter(|| {
            let target: &dyn Respond = black_box(&responder);
            black_box(respond_dyn(target))
        });
    });

    group.bench_function("dyn_box", |b| {
        b.iter(|| black_box(black_box(&boxed).respond()));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);

criterion_main!(benches);
