use criterion::{criterion_group, criterion_main, Criterion};

use betafn::special::{beta, beta_cdf, incomplete_beta, ln_beta};

// ---------------------------------------------------------------------------
// Complete beta
// ---------------------------------------------------------------------------

fn complete(c: &mut Criterion) {
    let mut g = c.benchmark_group("beta");

    g.bench_function("direct", |b| {
        b.iter(|| beta(std::hint::black_box(2.5_f64), std::hint::black_box(7.5)))
    });

    g.bench_function("log_space", |b| {
        b.iter(|| beta(std::hint::black_box(150.0_f64), std::hint::black_box(90.0)))
    });

    g.bench_function("ln_beta", |b| {
        b.iter(|| ln_beta(std::hint::black_box(150.0_f64), std::hint::black_box(90.0)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Incomplete beta, one case per region
// ---------------------------------------------------------------------------

fn incomplete(c: &mut Criterion) {
    let mut g = c.benchmark_group("beta_cdf");

    let cases: [(&str, f64, f64, f64); 7] = [
        ("interior", 0.2, 3.0, 5.0),
        ("reflected", 0.8, 3.0, 5.0),
        ("both_below_one", 0.3, 0.5, 0.5),
        ("small_a", 0.3, 0.5, 4.0),
        ("unit_a", 0.3, 1.0, 4.0),
        ("large_shapes", 0.49, 1000.0, 1000.0),
        ("very_large_shapes", 0.5, 1.0e5, 1.0e5),
    ];

    for (name, x, a, bb) in cases {
        g.bench_function(name, |b| {
            b.iter(|| {
                beta_cdf(
                    std::hint::black_box(x),
                    std::hint::black_box(a),
                    std::hint::black_box(bb),
                )
            })
        });
    }

    g.bench_function("f32", |b| {
        b.iter(|| beta_cdf(std::hint::black_box(0.2_f32), std::hint::black_box(3.0), std::hint::black_box(5.0)))
    });

    g.finish();

    let mut g = c.benchmark_group("incomplete_beta");
    g.bench_function("small_b", |b| {
        b.iter(|| {
            incomplete_beta(
                std::hint::black_box(0.75_f64),
                std::hint::black_box(2.0),
                std::hint::black_box(0.5),
            )
        })
    });
    g.finish();
}

criterion_group!(benches, complete, incomplete);
criterion_main!(benches);
