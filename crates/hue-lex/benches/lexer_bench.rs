//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package hue-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hue_lex::Lexer;
use hue_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.count()
}

fn bench_lexer_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_module");

    let source = "func add (a Int) (b Int) Int -> a + b\n\nstruct Point { x = 0, y = 0 }\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("function_and_struct", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_indentation_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_indentation");

    let mut source = String::new();
    for depth in 0..64 {
        source.push_str(&"  ".repeat(depth));
        source.push_str("x\n");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_indentation", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("text_literal", |b| {
        b.iter(|| lexer_token_count(black_box("\"hello, world\"")))
    });

    group.bench_function("data_literal", |b| {
        b.iter(|| lexer_token_count(black_box("'\\x00\\x01\\x02'")))
    });

    group.bench_function("hex_integer", |b| {
        b.iter(|| lexer_token_count(black_box("0xDEADBEEF")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("3.14159e10")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("x")))
    });

    group.bench_function("path_qualified_ident", |b| {
        b.iter(|| lexer_token_count(black_box("std:io:read")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_module,
    bench_lexer_indentation_heavy,
    bench_lexer_literals,
    bench_lexer_identifiers
);
criterion_main!(benches);
