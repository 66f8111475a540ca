use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use srclines::args::Args;
use srclines_engine::processor::count_content;
use std::hint::black_box;

fn sample_source(lines: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    for i in 0..lines {
        match i % 4 {
            0 => buf.extend_from_slice(b"static int counter = 0;\n"),
            1 => buf.extend_from_slice(b"\n"),
            2 => buf.extend_from_slice(b"    \t\r\n"),
            _ => buf.extend_from_slice(b"void tick() { counter += 1; }\n"),
        }
    }
    buf
}

fn benchmark_count_content(c: &mut Criterion) {
    let source = sample_source(10_000);
    c.bench_function("count_lines_only", |b| {
        b.iter(|| black_box(count_content(black_box(&source), false)));
    });
    c.bench_function("count_lines_and_non_blank", |b| {
        b.iter(|| black_box(count_content(black_box(&source), true)));
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["srclines", "src"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_count_content, benchmark_cli_parsing);
criterion_main!(benches);
