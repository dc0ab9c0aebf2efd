//! Benchmarks for container chains and built pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pointfree::compose::{map, safe_head};
use pointfree::control::{Either, Maybe, Matcher};
use pointfree::effect::IO;
use pointfree::{curry, pipe};
use std::hint::black_box;

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("just", |bencher| {
        bencher.iter(|| {
            let result = Maybe::just(black_box(3))
                .map(|x| x + 1)
                .flat_map(|x| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() })
                .or_else(0);
            black_box(result.value())
        });
    });

    group.bench_function("nothing", |bencher| {
        bencher.iter(|| {
            let result = Maybe::<i32>::nothing().map(|x| x + 1).or_else(black_box(7));
            black_box(result.value())
        });
    });

    group.finish();
}

fn benchmark_either_chain(criterion: &mut Criterion) {
    criterion.bench_function("either_chain", |bencher| {
        bencher.iter(|| {
            let result: Either<&str, i32> = Either::success(black_box(10))
                .map_success(|x| x * 3)
                .chain_success(|x| if x > 0 { Either::success(x) } else { Either::failure("negative") });
            black_box(result.fold(|_| 0, |x| x))
        });
    });
}

fn benchmark_io_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_map_chain");

    for depth in [1, 5, 25] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, &depth| {
            let io = (0..depth).fold(IO::pure(0_i64), |io, _| io.map(|x| x + 1));
            bencher.iter(|| black_box(io.run()));
        });
    }

    group.finish();
}

fn benchmark_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline");
    let items: Vec<i32> = (0..64).collect();

    let first_doubled = pipe!(|items: &[i32]| safe_head(items), map(|x: i32| x * 2));
    group.bench_function("pipe_safe_head_map", |bencher| {
        bencher.iter(|| black_box(first_doubled(black_box(items.as_slice()))));
    });

    let add_three = curry!(|a: i32, b: i32, c: i32| a + b + c);
    group.bench_function("curry_three", |bencher| {
        bencher.iter(|| black_box(add_three(black_box(1))(2)(3)));
    });

    group.bench_function("matcher", |bencher| {
        bencher.iter(|| {
            let label = Matcher::of(black_box(3))
                .on(1, |_| "one")
                .on(2, |_| "two")
                .on(3, |_| "three")
                .or("many")
                .value();
            black_box(label)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_either_chain,
    benchmark_io_map_chain,
    benchmark_pipeline,
);
criterion_main!(benches);
