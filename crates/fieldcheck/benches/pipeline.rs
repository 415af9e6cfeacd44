// Pipeline overhead benchmarks.
//
// Measures the cost of building and running pipelines against calling the
// predicates directly.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fieldcheck::prelude::*;
use regex::Regex;

fn bench_direct_predicates(c: &mut Criterion) {
    c.bench_function("direct_length_and_eq", |b| {
        b.iter(|| {
            let name = black_box("eatmoreapple");
            min_length(name, 6, ())
                .and_then(|()| max_length(name, 20, ()))
                .and_then(|()| eq(&black_box("password"), &"password", ()))
        });
    });
}

fn bench_build_and_validate(c: &mut Criterion) {
    c.bench_function("pipeline_build_and_validate", |b| {
        b.iter(|| {
            let name = black_box("eatmoreapple");
            Pipeline::new()
                .min_length(name, 6, "too short")
                .max_length(name, 20, "too long")
                .eq(black_box("password"), "password", "mismatch")
                .validate()
        });
    });
}

fn bench_prebuilt_validate(c: &mut Criterion) {
    let pipeline = Pipeline::new()
        .min_length("eatmoreapple", 6, "too short")
        .max_length("eatmoreapple", 20, "too long")
        .gt(30_u32, 18, "underage")
        .contains("editor", ["admin", "editor", "viewer"], "unknown role")
        .email("user@example.com", "invalid email");

    c.bench_function("pipeline_prebuilt_validate", |b| {
        b.iter(|| black_box(&pipeline).validate());
    });
}

fn bench_regex_compile_vs_precompiled(c: &mut Criterion) {
    let pattern = r"^\d{3}-\d{4}$";
    let exp = Regex::new(pattern).unwrap();

    c.bench_function("regex_compile_each_call", |b| {
        b.iter(|| regex(black_box("123-4567"), pattern, ValidationError::new("phone", "bad")));
    });

    c.bench_function("regex_precompiled", |b| {
        b.iter(|| with_regex(black_box("123-4567"), &exp, ()));
    });
}

criterion_group!(
    benches,
    bench_direct_predicates,
    bench_build_and_validate,
    bench_prebuilt_validate,
    bench_regex_compile_vs_precompiled
);
criterion_main!(benches);
