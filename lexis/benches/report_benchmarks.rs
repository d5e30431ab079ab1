use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lexis::{EngineConfig, TextStatistics, paragraph_count, sentence_count, words};

const PROSE: &str = "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs! How vexingly quick daft zebras jump?\n\n";

fn benchmark_report_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_calculation");

    let config = EngineConfig::default();
    let repeats = vec![10, 100, 1000];

    for repeat in repeats {
        let text = PROSE.repeat(repeat);

        group.bench_with_input(
            BenchmarkId::new("plain_prose", text.chars().count()),
            &text,
            |b, text| b.iter(|| TextStatistics::calculate(black_box(text), black_box(&config))),
        );
    }

    group.finish();
}

fn benchmark_degenerate_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("degenerate_shapes");

    let config = EngineConfig::default();
    let shapes = vec![
        ("whitespace_only", " \t\n".repeat(5000)),
        ("punctuation_only", ".!?".repeat(5000)),
        ("single_long_word", "a".repeat(15000)),
        ("newline_heavy", "word\n".repeat(3000)),
    ];

    for (name, text) in shapes {
        group.bench_with_input(BenchmarkId::new("calculate", name), &text, |b, text| {
            b.iter(|| TextStatistics::calculate(black_box(text), black_box(&config)))
        });
    }

    group.finish();
}

fn benchmark_scanners(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanners");

    let text = PROSE.repeat(500);

    group.bench_function("words", |b| {
        b.iter(|| words(black_box(&text)).count())
    });

    group.bench_function("sentence_count", |b| {
        b.iter(|| sentence_count(black_box(&text)))
    });

    group.bench_function("paragraph_count", |b| {
        b.iter(|| paragraph_count(black_box(&text)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_report_calculation,
    benchmark_degenerate_shapes,
    benchmark_scanners
);
criterion_main!(benches);
