//! Parser benchmarks.
//!
//! Run with: `cargo bench --package hue-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hue_par::Parser;
use hue_util::Handler;

fn parse_source(source: &str) -> hue_par::Ast {
    let handler = Handler::new();
    let mut parser = Parser::new(source, &handler);
    parser.parse_module()
}

fn bench_parser_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_literals");

    let source = "42";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("int_literal", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_functions");

    let source = r#"
fib = func (n Int) Int ->
    if n <= 1 n
    else (fib (n - 1)) + (fib (n - 2))

fib 10
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("recursive_function", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_structs(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_structs");

    let source = r#"
point = struct {
    x = 1
    y = 2.5
}

point:y
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("struct_and_path", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_overloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_overloads");

    let source = r#"
f = func (x Int) Int -> x
f = func (x Float) Float -> x
f 3
f 3.0
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("manual_overload", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_indentation_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_indentation");

    let mut source = String::new();
    for i in 0..64 {
        source.push_str(&format!("f{i} 1\n"));
    }

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many_top_level_calls", |b| b.iter(|| parse_source(black_box(&source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_literals,
    bench_parser_functions,
    bench_parser_structs,
    bench_parser_overloads,
    bench_parser_indentation_heavy
);
criterion_main!(benches);
