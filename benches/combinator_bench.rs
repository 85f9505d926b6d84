//! Benchmark for `Optional` and `Outcome` combinators.
//!
//! Compares each combinator chain against the same chain on the standard
//! library's `Option` and `Result` to evaluate the overhead (if any) of the
//! wrapper types.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maybe_outcome::optional::{Optional, none, some};
use maybe_outcome::outcome::{self, Outcome, err, ok};
use std::hint::black_box;

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    group.bench_function("optional_map_filter_unwrap_or", |bencher| {
        bencher.iter(|| {
            let value: Optional<i32> = some(black_box(42));
            black_box(value.map(|x| x * 2).filter(|x| x % 3 == 0).unwrap_or(0))
        });
    });

    group.bench_function("std_option_map_filter_unwrap_or", |bencher| {
        bencher.iter(|| {
            let value: Option<i32> = Some(black_box(42));
            black_box(value.map(|x| x * 2).filter(|x| x % 3 == 0).unwrap_or(0))
        });
    });

    group.bench_function("optional_absent_or_else", |bencher| {
        bencher.iter(|| {
            let value: Optional<i32> = none();
            black_box(value.or_else(|| some(black_box(7))).unwrap_or(0))
        });
    });

    group.bench_function("std_option_none_or_else", |bencher| {
        bencher.iter(|| {
            let value: Option<i32> = None;
            black_box(value.or_else(|| Some(black_box(7))).unwrap_or(0))
        });
    });

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn parse_outcome(text: &str) -> Outcome<i32, String> {
    outcome::from_fallible(|| text.parse::<i32>(), |error| error.to_string())
}

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    for input in ["128", "not a number"] {
        group.bench_with_input(BenchmarkId::new("outcome", input), input, |bencher, input| {
            bencher.iter(|| {
                black_box(
                    parse_outcome(black_box(input))
                        .and_then(|n| if n > 0 { ok(n) } else { err("negative".to_string()) })
                        .map(|n| n * 2)
                        .unwrap_or_default(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("std_result", input), input, |bencher, input| {
            bencher.iter(|| {
                black_box(
                    black_box(input)
                        .parse::<i32>()
                        .map_err(|error| error.to_string())
                        .and_then(|n| if n > 0 { Ok(n) } else { Err("negative".to_string()) })
                        .map(|n| n * 2)
                        .unwrap_or_default(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// Combine Benchmarks
// =============================================================================

fn benchmark_combine(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combine");

    for size in [10, 100, 1000] {
        let outcomes: Vec<Outcome<usize, usize>> = (0..size)
            .map(|n| if n % 10 == 0 { err(n) } else { ok(n) })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("combine", size), &outcomes, |bencher, outcomes| {
            bencher.iter(|| black_box(outcome::combine(outcomes.iter().copied())));
        });

        let results: Vec<Result<usize, usize>> = outcomes.iter().copied().map(Result::from).collect();
        group.bench_with_input(
            BenchmarkId::new("std_filter_map", size),
            &results,
            |bencher, results| {
                bencher.iter(|| {
                    let errors: Vec<usize> = results.iter().filter_map(|r| r.err()).collect();
                    black_box(errors)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_outcome_chain,
    benchmark_combine,
);

criterion_main!(benches);
