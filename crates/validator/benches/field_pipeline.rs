//! Field pipeline benchmarks
//!
//! Measures single-field evaluation on the default table and whole-form
//! evaluation of a signup form.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fieldrule_validator::prelude::*;
use std::hint::black_box;

fn signup_form() -> FormValues {
    [
        ("fullName", "John Doe"),
        ("email", "john.doe@example.com"),
        ("phone", "+919876543210"),
        ("password", "Abcdef1!"),
        ("confirmPassword", "Abcdef1!"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
}

fn bench_validate_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_field");
    let validator = FormValidator::default();
    let form = signup_form();

    for (field, value) in [
        ("fullName", "John Doe"),
        ("fullName", "john"),
        ("email", "  John.Doe@Example.COM "),
        ("password", "Abcdef1!"),
        ("phone", "9999999999"),
    ] {
        group.bench_with_input(BenchmarkId::new(field, value), &value, |b, value| {
            b.iter(|| black_box(validator.validate_field(field, black_box(value), &form)));
        });
    }

    group.finish();
}

fn bench_validate_form(c: &mut Criterion) {
    let validator = FormValidator::default();
    let form = signup_form();

    c.bench_function("validate_form/signup", |b| {
        b.iter(|| black_box(validator.validate_form(black_box(&form), None)));
    });
}

criterion_group!(benches, bench_validate_field, bench_validate_form);
criterion_main!(benches);
