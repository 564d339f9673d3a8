//! Compile latency benchmark.
//!
//! Measures the pipeline stages separately:
//! 1. Lex + parse
//! 2. Instruction generation from a parsed tree
//! 3. Total source -> listing

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mindcode::ir::builder::generate;
use mindcode::ir::print_program;
use mindcode::parse_source_silent;

/// Build a synthetic unit-control script with `n` loop bodies.
fn synthetic_source(n: usize) -> String {
    let mut src = String::from("@unit = ubind(@poly)\n");
    for i in 0..n {
        match i % 4 {
            0 => src.push_str(&format!(
                "while @unit.@totalItems < {} {{ mine(ore.x, ore.y) }}\n",
                i + 10
            )),
            1 => src.push_str(&format!(
                "x{0} = if cell1[{0}] > 5 {{ rand({0}) }} else {{ @unit.@x }}\n",
                i
            )),
            2 => src.push_str(&format!(
                "case x{} {{ when 1 {{ approach(1, 2, 3) }} when 2 {{ idle() }} else {{ stop() }} }}\n",
                i - 1
            )),
            3 => src.push_str(&format!("print(\"step \", {})\nprintflush(message1)\n", i)),
            _ => unreachable!(),
        }
    }
    src
}

fn bench_parse(c: &mut Criterion) {
    let small = synthetic_source(20);
    let large = synthetic_source(400);

    let mut group = c.benchmark_group("parse");
    group.bench_function("20_stmts", |b| {
        b.iter(|| parse_source_silent(black_box(&small), "bench.mnd"))
    });
    group.bench_function("400_stmts", |b| {
        b.iter(|| parse_source_silent(black_box(&large), "bench.mnd"))
    });
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let small = parse_source_silent(&synthetic_source(20), "bench.mnd").unwrap();
    let large = parse_source_silent(&synthetic_source(400), "bench.mnd").unwrap();

    let mut group = c.benchmark_group("generate");
    group.bench_function("20_stmts", |b| b.iter(|| generate(black_box(&small))));
    group.bench_function("400_stmts", |b| b.iter(|| generate(black_box(&large))));
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let source = synthetic_source(400);
    c.bench_function("compile_400_stmts", |b| {
        b.iter(|| {
            let tree = parse_source_silent(black_box(&source), "bench.mnd").unwrap();
            let instructions = generate(&tree).unwrap();
            print_program(&instructions)
        })
    });
}

criterion_group!(benches, bench_parse, bench_generate, bench_end_to_end);
criterion_main!(benches);
