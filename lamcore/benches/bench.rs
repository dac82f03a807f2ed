use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lamcore::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn church_numeral(n: usize) -> Expr {
    bind(|s| {
        bind(|z| {
            let mut acc = var(z);
            for _ in 0..n {
                acc = app(var(s), acc);
            }
            acc
        })
    })
}

fn host_increment() -> Expr {
    host_fn("inc", |bytes: &[u8]| {
        let value = decode_u64("inc", bytes)?;
        Ok(host_value((value + 1).to_le_bytes()))
    })
}

/// Build a closed medium-sized term. Use randomness seeded for determinism.
fn build_random_term() -> Expr {
    fn next(budget: usize, rng: &mut ChaCha20Rng, scope: &mut Vec<Binder>) -> Expr {
        if budget == 0 || rng.random_bool(0.2) {
            // Leaf: prefer a variable in scope, fall back to a host value
            return if scope.is_empty() || rng.random_bool(0.25) {
                host_value(rng.next_u64().to_le_bytes())
            } else {
                var(scope[rng.random_range(0..scope.len())])
            };
        }

        if rng.random_bool(0.5) {
            let arg = Binder::fresh();
            scope.push(arg);
            let body = next(budget - 1, rng, scope);
            scope.pop();
            lam(arg, body)
        } else {
            app(
                next(budget - 1, rng, scope),
                next(budget - 1, rng, scope),
            )
        }
    }

    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    next(10, &mut rng, &mut Vec::new())
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_church_8_count", |b| {
        b.iter(|| {
            let term = app(
                app(church_numeral(8), host_increment()),
                host_value(0u64.to_le_bytes()),
            );
            black_box(evaluate(term).unwrap());
        })
    });

    let random = build_random_term();
    c.bench_function("evaluate_bounded_random", |b| {
        b.iter(|| {
            black_box(evaluate_bounded(random.clone(), 512).unwrap());
        })
    });
}

fn bench_substitute(c: &mut Criterion) {
    let term = build_random_term();
    let target = Binder::fresh();
    let body = app(var(target), app(var(target), term.clone()));

    c.bench_function("substitute_random_term", |b| {
        b.iter(|| {
            black_box(substitute(body.clone(), target, term.clone()));
        })
    });

    c.bench_function("deep_clone_random_term", |b| {
        b.iter(|| {
            black_box(term.clone());
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_substitute);
criterion_main!(benches);
