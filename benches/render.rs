use chrono::DateTime;
use criterion::{Criterion, criterion_group, criterion_main};
use patlog::fmt::{TimeLayout, ValueFormat};
use patlog::{Directive, Entry, FieldFilter, Level, Pattern, Renderer};
use std::hint::black_box;

fn sample_entry() -> Entry {
    let time = DateTime::parse_from_rfc3339("2025-01-15T14:30:00.125+01:00").unwrap();
    Entry::new(Level::Info, "Application started successfully")
        .time(time)
        .app_name("shop")
        .request_id("req-42")
        .location("/srv/shop/src/main.rs", 118)
}

fn bench_default_pattern(c: &mut Criterion) {
    let pattern = Pattern::default();
    let renderer = Renderer::default();
    let entry = sample_entry();

    c.bench_function("Renderer::render/default", |b| {
        b.iter(|| renderer.render(black_box(&pattern), black_box(&entry)));
    });
}

fn bench_full_pattern(c: &mut Criterion) {
    let pattern = Pattern::new([
        Directive::utc_time("YYYY-MM-DD[T]HH:mm:ss.SSS[Z]"),
        Directive::level("%-5s"),
        Directive::app_name(),
        Directive::request_id(),
        Directive::short_file("%s"),
        Directive::line("%d"),
        Directive::custom("-"),
        Directive::message(),
        Directive::fields(),
    ]);
    let renderer = Renderer::new(FieldFilter::new(["secret"]));
    let entry = sample_entry()
        .field("user", "ann")
        .field("attempt", 3)
        .field("secret", "hunter2");

    c.bench_function("Renderer::render/full", |b| {
        b.iter(|| renderer.render(black_box(&pattern), black_box(&entry)));
    });
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    group.bench_function("ValueFormat::parse", |b| {
        b.iter(|| ValueFormat::parse(black_box("[%-5s]")));
    });
    group.bench_function("TimeLayout::parse", |b| {
        b.iter(|| TimeLayout::parse(black_box("YYYY-MM-DD HH:mm:ss.SSS")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_default_pattern,
    bench_full_pattern,
    bench_compile
);
criterion_main!(benches);
