use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use jobtimer::classify;
use jobtimer::correlator::correlate_lines;
use jobtimer::parsers::parse_line;

fn bench_parse_valid_line(c: &mut Criterion) {
    let line = "09:00:00, Nightly build, START, 4242";
    c.bench_function("parse_valid_line", |b| {
        b.iter(|| {
            let _ = black_box(parse_line(black_box(line)));
        });
    });
}

fn bench_parse_padded_line(c: &mut Criterion) {
    let line = "   23:59:59 ,   release pipeline   ,   END   ,   pid-000123   ";
    c.bench_function("parse_padded_line", |b| {
        b.iter(|| {
            let _ = black_box(parse_line(black_box(line)));
        });
    });
}

fn bench_parse_rejected_line(c: &mut Criterion) {
    let line = "09:00:00, Nightly build, RUNNING, 4242";
    c.bench_function("parse_rejected_line", |b| {
        b.iter(|| {
            let _ = black_box(parse_line(black_box(line)));
        });
    });
}

fn bench_correlate_and_classify(c: &mut Criterion) {
    let lines: Vec<String> = (0..1000)
        .flat_map(|i| {
            let minute = i % 50;
            [
                format!("08:00:00, job-{}, START, {}", i, i),
                format!("08:{:02}:30, job-{}, END, {}", minute, i, i),
            ]
        })
        .collect();

    c.bench_function("correlate_and_classify_1000_jobs", |b| {
        b.iter(|| {
            let correlation = correlate_lines(black_box(&lines));
            black_box(classify(&correlation));
        });
    });
}

criterion_group!(
    parse_benches,
    bench_parse_valid_line,
    bench_parse_padded_line,
    bench_parse_rejected_line,
    bench_correlate_and_classify
);
criterion_main!(parse_benches);
