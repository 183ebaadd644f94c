//! Property tests: the universal algebraic laws the rewriter must never violate, plus the
//! overarching guarantee that rewriting never changes what an expression means.
//!
//! Randomness is seeded (`ChaCha20Rng`) for reproducibility, the same discipline the corpus'
//! own benchmark generator uses for its random expression trees.

use boolsimp::config::Limits;
use boolsimp::rewriter::rewrite;
use boolsimp::truth_table::equivalent;
use boolsimp::Node;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const VARS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn random_expr(budget: usize, rng: &mut impl Rng) -> Node {
    if budget == 0 || rng.random_bool(0.35) {
        return Node::var(VARS[rng.random_range(0..VARS.len())]);
    }
    match rng.random_range(0..=2) {
        0 => Node::and(random_expr(budget - 1, rng), random_expr(budget - 1, rng)),
        1 => Node::or(random_expr(budget - 1, rng), random_expr(budget - 1, rng)),
        _ => Node::not(random_expr(budget - 1, rng)),
    }
}

#[test]
fn rewriting_never_changes_the_expression_meaning() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xC0FFEE);
    for _ in 0..200 {
        let expr = random_expr(5, &mut rng);
        let (optimized, _) = rewrite(&expr, &Limits::default()).expect("small trees always converge");
        assert!(
            equivalent(&expr, &optimized),
            "optimize changed the meaning of {expr:?}"
        );
    }
}

fn rand_var(rng: &mut impl Rng) -> Node {
    Node::var(VARS[rng.random_range(0..VARS.len())])
}

#[test]
fn commutativity_of_and() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..50 {
        let (a, b) = (rand_var(&mut rng), rand_var(&mut rng));
        assert!(equivalent(&Node::and(a.clone(), b.clone()), &Node::and(b, a)));
    }
}

#[test]
fn commutativity_of_or() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..50 {
        let (a, b) = (rand_var(&mut rng), rand_var(&mut rng));
        assert!(equivalent(&Node::or(a.clone(), b.clone()), &Node::or(b, a)));
    }
}

#[test]
fn associativity_of_and() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..50 {
        let (a, b, c) = (rand_var(&mut rng), rand_var(&mut rng), rand_var(&mut rng));
        let lhs = Node::and(Node::and(a.clone(), b.clone()), c.clone());
        let rhs = Node::and(a, Node::and(b, c));
        assert!(equivalent(&lhs, &rhs));
    }
}

#[test]
fn associativity_of_or() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..50 {
        let (a, b, c) = (rand_var(&mut rng), rand_var(&mut rng), rand_var(&mut rng));
        let lhs = Node::or(Node::or(a.clone(), b.clone()), c.clone());
        let rhs = Node::or(a, Node::or(b, c));
        assert!(equivalent(&lhs, &rhs));
    }
}

#[test]
fn and_distributes_over_or() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    for _ in 0..50 {
        let (a, b, c) = (rand_var(&mut rng), rand_var(&mut rng), rand_var(&mut rng));
        let lhs = Node::and(a.clone(), Node::or(b.clone(), c.clone()));
        let rhs = Node::or(Node::and(a.clone(), b), Node::and(a, c));
        assert!(equivalent(&lhs, &rhs));
    }
}

#[test]
fn or_distributes_over_and() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    for _ in 0..50 {
        let (a, b, c) = (rand_var(&mut rng), rand_var(&mut rng), rand_var(&mut rng));
        let lhs = Node::or(a.clone(), Node::and(b.clone(), c.clone()));
        let rhs = Node::and(Node::or(a.clone(), b), Node::or(a, c));
        assert!(equivalent(&lhs, &rhs));
    }
}

#[test]
fn de_morgan_over_and_and_or() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..50 {
        let (a, b) = (rand_var(&mut rng), rand_var(&mut rng));
        assert!(equivalent(
            &Node::not(Node::and(a.clone(), b.clone())),
            &Node::or(Node::not(a.clone()), Node::not(b.clone()))
        ));
        assert!(equivalent(
            &Node::not(Node::or(a.clone(), b.clone())),
            &Node::and(Node::not(a), Node::not(b))
        ));
    }
}

#[test]
fn double_negation_is_the_identity() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    for _ in 0..50 {
        let a = rand_var(&mut rng);
        assert!(equivalent(&a.clone(), &Node::not(Node::not(a))));
    }
}
