use boolsimp::config::Limits;
use boolsimp::rewriter::rewrite;
use boolsimp::Node;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

// Build a randomly shaped expression over a small variable alphabet, seeded for determinism
// across runs the same way the corpus' own benchmark seeds its expression generator.
fn build_expr(budget: usize, rng: &mut impl Rng) -> Node {
    if budget == 0 || rng.random_bool(0.3) {
        return match rng.random_range(0..=7) {
            0..=5 => Node::var(format!("v{}", rng.random_range(0..6))),
            6 => Node::zero(),
            _ => Node::one(),
        };
    }

    match rng.random_range(0..=2) {
        0 => Node::and(build_expr(budget - 1, rng), build_expr(budget - 1, rng)),
        1 => Node::or(build_expr(budget - 1, rng), build_expr(budget - 1, rng)),
        _ => Node::not(build_expr(budget - 1, rng)),
    }
}

fn bench_rewrite(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0x1337);
    let exprs: Vec<Node> = (0..16).map(|_| build_expr(8, &mut rng)).collect();
    let limits = Limits::default();

    c.bench_function("rewrite_to_fixed_point", |b| {
        b.iter(|| {
            for expr in &exprs {
                let _ = black_box(rewrite(black_box(expr), &limits));
            }
        })
    });
}

criterion_group!(benches, bench_rewrite);
criterion_main!(benches);
