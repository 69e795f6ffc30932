#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Parse and resolver benchmarks
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use urlsculpt::{ResolverSource, UrlParser};

const SIMPLE: &str = "http://example.com/";
const COMPLEX: &str =
    "https://secure.example.com:8080/path/to/resource?query=value&key=data&key=more#section";
const EMBEDDED: &str = "https://a.com/login?user=me&next=https://b.com/home?tab=1&x=2";

// The history grows with every parse, so each iteration gets a fresh parser
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in [("simple", SIMPLE), ("complex", COMPLEX), ("embedded", EMBEDDED)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                UrlParser::new,
                |mut parser| parser.parse(black_box(input)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resolver_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");
    let mut parser = UrlParser::new();
    let snapshot = parser.parse(COMPLEX);

    group.bench_function("append_remove_param", |b| {
        b.iter_batched(
            || parser.resolver(ResolverSource::Snapshot(snapshot.clone())),
            |mut resolver| {
                resolver
                    .append_param(black_box("extra"), Some("to"), 0)
                    .remove_param(black_box("extra"), 0);
                resolver
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("query_edits", |b| {
        b.iter_batched(
            || parser.resolver(ResolverSource::Snapshot(snapshot.clone())),
            |mut resolver| {
                resolver
                    .append_query(black_box("page"), "2", Some("key"), 1)
                    .remove_query(black_box("key"), 0)
                    .remove_all_query(black_box("query"));
                resolver
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolver_edits);

criterion_main!(benches);
