use criterion::{Criterion, criterion_group, criterion_main};
use mdword_engine::{Configuration, TableConversion, clean, parse_document, render_html, resolve};
mod common;

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_report(100);
    let cfg = Configuration::default();
    group.bench_function("parse_document", |b| {
        b.iter(|| parse_document(std::hint::black_box(&content), &cfg));
    });
    group.bench_function("parse_and_render_html", |b| {
        b.iter(|| render_html(&parse_document(std::hint::black_box(&content), &cfg)));
    });

    group.finish();
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    group.sample_size(10);

    let content = common::generate_report(100);
    let everything = Configuration {
        remove_italic: true,
        remove_strikethrough: true,
        remove_highlight: true,
        remove_links: true,
        remove_unordered_list: true,
        remove_ordered_list: true,
        table_conversion: TableConversion::Comma,
        ..Configuration::default()
    };
    group.bench_function("defaults", |b| {
        b.iter(|| clean(std::hint::black_box(&content), &Configuration::default()));
    });
    group.bench_function("all_options", |b| {
        b.iter(|| clean(std::hint::black_box(&content), &everything));
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let line = common::generate_inline_line(200);
    let cfg = Configuration::default();
    c.bench_function("resolve_long_line", |b| {
        b.iter(|| resolve(std::hint::black_box(&line), &cfg));
    });
}

criterion_group!(benches, bench_document, bench_clean, bench_inline);
criterion_main!(benches);
