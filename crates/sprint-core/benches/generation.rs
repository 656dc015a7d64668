use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sprint_core::generator::generate;
use sprint_core::model::{Answer, OperationKind};
use sprint_core::options::build_options;
use sprint_core::random::seeded;
use sprint_core::trig::TrigValue;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut rng = seeded(42);

    for op in OperationKind::ALL {
        group.bench_function(op.to_string(), |b| {
            b.iter(|| generate(&mut rng, black_box(op), black_box(1), black_box(100)))
        });
    }

    group.finish();
}

fn bench_build_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_options");
    let mut rng = seeded(7);

    group.bench_function("addition", |b| {
        b.iter(|| build_options(&mut rng, black_box(Answer::Number(57)), OperationKind::Addition))
    });

    // 0² only has two positive heuristic neighbours (1 and 4), so this
    // always runs the widening pass.
    group.bench_function("square_zero", |b| {
        b.iter(|| build_options(&mut rng, black_box(Answer::Number(0)), OperationKind::Square))
    });

    group.bench_function("trig_undefined", |b| {
        b.iter(|| {
            build_options(
                &mut rng,
                black_box(Answer::Trig(TrigValue::Undefined)),
                OperationKind::Trigonometry,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_build_options);
criterion_main!(benches);
