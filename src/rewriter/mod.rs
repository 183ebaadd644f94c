//! C5/C6: fixed-point algebraic rewriter.
//!
//! Role
//! - Repeatedly run one full bottom-up [`rules::simplify_node`] pass over the tree until a pass
//!   changes nothing (termination measured informally by `(node_count, literal_count, depth)`
//!   shrinking or staying flat — every rule in the catalogue either shrinks one of those or
//!   leaves the tree unchanged) or [`Limits::max_iterations`] is exhausted.
//! - A wall-clock budget is checked between passes rather than inside a single pass, mirroring
//!   how `hyformal`'s own solver loop checks its deadline between saturation rounds rather than
//!   per rewrite.

mod order;
mod rules;

use std::collections::BTreeMap;
use std::time::Instant;

use crate::ast::Node;
use crate::config::Limits;
use crate::error::{LogicError, LogicResult};

/// Per-rule application counts, keyed by the rule's name (e.g. `"de_morgan"`, `"absorption"`).
pub type Metrics = BTreeMap<&'static str, u64>;

pub(crate) fn bump(metrics: &mut Metrics, rule: &'static str) {
    *metrics.entry(rule).or_insert(0) += 1;
}

/// Simplify `ast` to a fixed point under the rewrite-rule catalogue, honouring `limits`.
///
/// Returns the simplified tree together with a count of how many times each rule fired across
/// every pass. Fails with [`LogicError::IterationLimitExceeded`] if the tree has not converged
/// within `limits.max_iterations` full passes, or with [`LogicError::Timeout`] if
/// `limits.max_wall_time` elapses first.
pub fn rewrite(ast: &Node, limits: &Limits) -> LogicResult<(Node, Metrics)> {
    let start = Instant::now();
    let mut metrics = Metrics::new();
    let mut current = ast.clone();

    for iteration in 0..limits.max_iterations {
        let elapsed = start.elapsed();
        if elapsed > limits.max_wall_time {
            return Err(LogicError::Timeout {
                elapsed_ms: elapsed.as_millis(),
                max_ms: limits.max_wall_time.as_millis(),
            });
        }

        let next = rules::simplify_node(current.clone(), &mut metrics);
        if next == current {
            log::debug!("rewrite converged after {iteration} full pass(es)");
            return Ok((next, metrics));
        }
        current = next;
    }

    log::warn!(
        "rewrite did not converge within {} iteration(s)",
        limits.max_iterations
    );
    Err(LogicError::IterationLimitExceeded {
        max: limits.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::printer::print;

    fn rewrite_str(src: &str) -> String {
        let tokens = tokenize(src, &Limits::default()).unwrap();
        let ast = parse(&tokens).unwrap();
        let (optimized, _) = rewrite(&ast, &Limits::default()).unwrap();
        print(&optimized)
    }

    #[test]
    fn s1_factorisation_direct() {
        assert_eq!(rewrite_str("a & b | a & c"), "a & (b | c)");
    }

    #[test]
    fn s2_factorisation_reverse() {
        assert_eq!(rewrite_str("(a | b) & (a | c)"), "a | (b & c)");
    }

    #[test]
    fn s3_de_morgan_over_and() {
        assert_eq!(rewrite_str("!(a & b)"), "!a | !b");
    }

    #[test]
    fn s4_double_negation() {
        assert_eq!(rewrite_str("!!a"), "a");
    }

    #[test]
    fn s5_complement_in_or_folds_to_one() {
        assert_eq!(rewrite_str("a | b | !a | c"), "1");
    }

    #[test]
    fn s6_complement_in_and_folds_to_zero() {
        assert_eq!(rewrite_str("a & b & !a & c"), "0");
    }

    #[test]
    fn s7_extended_absorption_in_or() {
        assert_eq!(rewrite_str("a | !a & b"), "a | b");
    }

    #[test]
    fn zero_iteration_budget_is_rejected_immediately() {
        let mut limits = Limits::default();
        limits.max_iterations = 0;
        let tokens = tokenize("a & b", &limits).unwrap();
        let ast = parse(&tokens).unwrap();
        assert!(matches!(
            rewrite(&ast, &limits),
            Err(LogicError::IterationLimitExceeded { max: 0 })
        ));
    }

    #[test]
    fn metrics_record_which_rules_fired() {
        let tokens = tokenize("!!a", &Limits::default()).unwrap();
        let ast = parse(&tokens).unwrap();
        let (_, metrics) = rewrite(&ast, &Limits::default()).unwrap();
        assert_eq!(metrics.get("double_negation"), Some(&1));
    }
}
