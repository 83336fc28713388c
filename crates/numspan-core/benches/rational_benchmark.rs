// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use numspan_core::Rational;
use std::hint::black_box;

fn fractions(n: i32) -> Vec<Rational> {
    (1..=n)
        .map(|i| Rational::new(i * 7919 % 1009 - 504, i % 997 + 1).expect("non-zero denominator"))
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let values = fractions(1024);
    let mut group = c.benchmark_group("rational_arithmetic");

    group.bench_function("checked_add", |b| {
        b.iter(|| {
            values
                .windows(2)
                .filter_map(|w| black_box(w[0]).checked_add(black_box(w[1])).ok())
                .count()
        })
    });

    group.bench_function("checked_mul", |b| {
        b.iter(|| {
            values
                .windows(2)
                .filter_map(|w| black_box(w[0]).checked_mul(black_box(w[1])).ok())
                .count()
        })
    });

    group.bench_function("sort", |b| {
        b.iter(|| {
            let mut sorted = values.clone();
            sorted.sort();
            black_box(sorted)
        })
    });

    group.finish();
}

fn bench_approximate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational_approximate");
    for max_denominator in [10, 1_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(max_denominator),
            &max_denominator,
            |b, &bound| b.iter(|| Rational::approximate(black_box(std::f64::consts::PI), bound)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_approximate);
criterion_main!(benches);
