//! The rewrite-rule catalogue (SPEC_FULL.md §4.5), applied bottom-up on one full tree pass.
//!
//! [`simplify_node`] recurses into children first, then applies every applicable rule to the
//! current node once. The caller in [`super::rewrite`] re-runs this over the whole tree until a
//! pass produces no change (or a budget is hit) — so a single local rewrite here only needs to be
//! locally correct, not globally confluent in one shot.

use super::order;
use super::{bump, Metrics};
use crate::ast::Node;

pub(crate) fn simplify_node(node: Node, metrics: &mut Metrics) -> Node {
    match node {
        Node::Var(_) => node,
        Node::Not(inner) => {
            let inner = simplify_node(*inner, metrics);
            simplify_not(inner, metrics)
        }
        Node::And(l, r, _) => {
            let l = simplify_node(*l, metrics);
            let r = simplify_node(*r, metrics);
            simplify_and(l, r, metrics)
        }
        Node::Or(l, r, _) => {
            let l = simplify_node(*l, metrics);
            let r = simplify_node(*r, metrics);
            simplify_or(l, r, metrics)
        }
        Node::Xor(l, r) => {
            let l = simplify_node(*l, metrics);
            let r = simplify_node(*r, metrics);
            Node::Xor(Box::new(l), Box::new(r))
        }
        Node::Imp(l, r) => {
            let l = simplify_node(*l, metrics);
            let r = simplify_node(*r, metrics);
            Node::Imp(Box::new(l), Box::new(r))
        }
    }
}

fn is_negation_of(candidate: &Node, of: &Node) -> bool {
    matches!(candidate, Node::Not(inner) if inner.as_ref() == of)
}

fn flatten_and(node: Node, out: &mut Vec<Node>) {
    match node {
        Node::And(l, r, _) => {
            flatten_and(*l, out);
            flatten_and(*r, out);
        }
        other => out.push(other),
    }
}

fn flatten_or(node: Node, out: &mut Vec<Node>) {
    match node {
        Node::Or(l, r, _) => {
            flatten_or(*l, out);
            flatten_or(*r, out);
        }
        other => out.push(other),
    }
}

fn rebuild_and(mut ops: Vec<Node>) -> Node {
    let mut iter = ops.drain(..);
    let first = iter.next().expect("rebuild_and requires at least one operand");
    iter.fold(first, |acc, n| Node::and(acc, n))
}

fn rebuild_or(mut ops: Vec<Node>) -> Node {
    let mut iter = ops.drain(..);
    let first = iter.next().expect("rebuild_or requires at least one operand");
    iter.fold(first, |acc, n| Node::or(acc, n))
}

fn has_complement_pair(ops: &[Node]) -> bool {
    ops.iter().any(|a| ops.iter().any(|b| is_negation_of(a, b)))
}

fn simplify_not(inner: Node, metrics: &mut Metrics) -> Node {
    match inner {
        Node::Not(x) => {
            bump(metrics, "double_negation");
            *x
        }
        Node::Var(ref name) if name == "0" => {
            bump(metrics, "constant_fold");
            Node::one()
        }
        Node::Var(ref name) if name == "1" => {
            bump(metrics, "constant_fold");
            Node::zero()
        }
        Node::And(l, r, _) => {
            bump(metrics, "de_morgan");
            simplify_node(Node::or(Node::not(*l), Node::not(*r)), metrics)
        }
        Node::Or(l, r, _) => {
            bump(metrics, "de_morgan");
            simplify_node(Node::and(Node::not(*l), Node::not(*r)), metrics)
        }
        other => Node::not(other),
    }
}

/// `p & (p | x) -> p`; `p & (!p | x) -> p & x` (extended absorption). Scans every `And`
/// operand that renders as an `Or` subtree against every other plain operand.
fn apply_and_absorption(ops: Vec<Node>, metrics: &mut Metrics) -> Vec<Node> {
    let mut result = Vec::with_capacity(ops.len());
    'outer: for (qi, q) in ops.iter().enumerate() {
        if let Node::Or(ql, qr, _) = q {
            let mut or_ops = Vec::new();
            flatten_or((**ql).clone(), &mut or_ops);
            flatten_or((**qr).clone(), &mut or_ops);

            for (pi, p) in ops.iter().enumerate() {
                if pi == qi {
                    continue;
                }
                if or_ops.iter().any(|o| o == p) {
                    bump(metrics, "absorption");
                    continue 'outer;
                }
                if let Some(pos) = or_ops.iter().position(|o| is_negation_of(o, p)) {
                    bump(metrics, "extended_absorption");
                    or_ops.remove(pos);
                    let rebuilt = if or_ops.len() == 1 {
                        or_ops.into_iter().next().unwrap()
                    } else {
                        rebuild_or(or_ops)
                    };
                    result.push(rebuilt);
                    continue 'outer;
                }
            }
        }
        result.push(q.clone());
    }
    result
}

/// Dual of [`apply_and_absorption`]: `p | (p & x) -> p`; `p | (!p & x) -> p | x`.
fn apply_or_absorption(ops: Vec<Node>, metrics: &mut Metrics) -> Vec<Node> {
    let mut result = Vec::with_capacity(ops.len());
    'outer: for (qi, q) in ops.iter().enumerate() {
        if let Node::And(ql, qr, _) = q {
            let mut and_ops = Vec::new();
            flatten_and((**ql).clone(), &mut and_ops);
            flatten_and((**qr).clone(), &mut and_ops);

            for (pi, p) in ops.iter().enumerate() {
                if pi == qi {
                    continue;
                }
                if and_ops.iter().any(|o| o == p) {
                    bump(metrics, "absorption");
                    continue 'outer;
                }
                if let Some(pos) = and_ops.iter().position(|o| is_negation_of(o, p)) {
                    bump(metrics, "extended_absorption");
                    and_ops.remove(pos);
                    let rebuilt = if and_ops.len() == 1 {
                        and_ops.into_iter().next().unwrap()
                    } else {
                        rebuild_and(and_ops)
                    };
                    result.push(rebuilt);
                    continue 'outer;
                }
            }
        }
        result.push(q.clone());
    }
    result
}

/// `a&b | !a&c | b&c -> a&b | !a&c`: drop a consensus term once its complementary pair and the
/// term covering their remainders are all present. Guarded against degenerate (empty-remainder)
/// terms, which would otherwise let the rule erase a term that was never redundant.
fn try_consensus(ops: &mut Vec<Node>, metrics: &mut Metrics) -> bool {
    let and_terms: Vec<(usize, Vec<Node>)> = ops
        .iter()
        .enumerate()
        .filter_map(|(idx, n)| match n {
            Node::And(l, r, _) => {
                let mut v = Vec::new();
                flatten_and((**l).clone(), &mut v);
                flatten_and((**r).clone(), &mut v);
                Some((idx, v))
            }
            _ => None,
        })
        .collect();

    for (_, ops_a) in &and_terms {
        for (_, ops_b) in &and_terms {
            if std::ptr::eq(ops_a, ops_b) {
                continue;
            }
            let Some(shared) = ops_a.iter().find(|p| ops_b.iter().any(|q| is_negation_of(q, p))) else {
                continue;
            };
            let not_shared = Node::not(shared.clone());
            let rest_a: Vec<Node> = ops_a.iter().filter(|n| *n != shared).cloned().collect();
            let rest_b: Vec<Node> = ops_b.iter().filter(|n| **n != not_shared).cloned().collect();
            if rest_a.is_empty() || rest_b.is_empty() {
                continue;
            }

            for (idx_c, ops_c) in &and_terms {
                if std::ptr::eq(ops_c, ops_a) || std::ptr::eq(ops_c, ops_b) {
                    continue;
                }
                let covers = rest_a.iter().all(|n| ops_c.contains(n)) && rest_b.iter().all(|n| ops_c.contains(n));
                if covers {
                    bump(metrics, "consensus");
                    ops.remove(*idx_c);
                    return true;
                }
            }
        }
    }
    false
}

/// `a&b | a&c -> a & (b | c)`: two `And` operands in an `Or` list sharing a common factor.
fn try_factor_direct(ops: &[Node], metrics: &mut Metrics) -> Option<Node> {
    for i in 0..ops.len() {
        for j in (i + 1)..ops.len() {
            let (Node::And(al, ar, _), Node::And(bl, br, _)) = (&ops[i], &ops[j]) else {
                continue;
            };
            let mut a_ops = Vec::new();
            flatten_and((**al).clone(), &mut a_ops);
            flatten_and((**ar).clone(), &mut a_ops);
            let mut b_ops = Vec::new();
            flatten_and((**bl).clone(), &mut b_ops);
            flatten_and((**br).clone(), &mut b_ops);

            let Some(pos_a) = a_ops.iter().position(|x| b_ops.contains(x)) else {
                continue;
            };
            let common = a_ops.remove(pos_a);
            let pos_b = b_ops.iter().position(|x| *x == common).unwrap();
            b_ops.remove(pos_b);
            if a_ops.is_empty() || b_ops.is_empty() {
                continue;
            }

            let rem_a = if a_ops.len() == 1 { a_ops.into_iter().next().unwrap() } else { rebuild_and(a_ops) };
            let rem_b = if b_ops.len() == 1 { b_ops.into_iter().next().unwrap() } else { rebuild_and(b_ops) };
            let mut pair = order::canonicalize(vec![rem_a, rem_b]);
            let second = pair.pop().unwrap();
            let first = pair.pop().unwrap();
            let factored = Node::and(common, Node::or_fp(first, second, true));
            bump(metrics, "factorisation_direct");

            let mut remaining: Vec<Node> = ops
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != i && *k != j)
                .map(|(_, n)| n.clone())
                .collect();
            remaining.push(factored);
            return Some(if remaining.len() == 1 {
                remaining.into_iter().next().unwrap()
            } else {
                rebuild_or(order::canonicalize(remaining))
            });
        }
    }
    None
}

/// `(a|b) & (a|c) -> a | (b & c)`: two `Or` operands in an `And` list sharing a common factor.
fn try_factor_reverse(ops: &[Node], metrics: &mut Metrics) -> Option<Node> {
    for i in 0..ops.len() {
        for j in (i + 1)..ops.len() {
            let (Node::Or(al, ar, _), Node::Or(bl, br, _)) = (&ops[i], &ops[j]) else {
                continue;
            };
            let mut a_ops = Vec::new();
            flatten_or((**al).clone(), &mut a_ops);
            flatten_or((**ar).clone(), &mut a_ops);
            let mut b_ops = Vec::new();
            flatten_or((**bl).clone(), &mut b_ops);
            flatten_or((**br).clone(), &mut b_ops);

            let Some(pos_a) = a_ops.iter().position(|x| b_ops.contains(x)) else {
                continue;
            };
            let common = a_ops.remove(pos_a);
            let pos_b = b_ops.iter().position(|x| *x == common).unwrap();
            b_ops.remove(pos_b);
            if a_ops.is_empty() || b_ops.is_empty() {
                continue;
            }

            let rem_a = if a_ops.len() == 1 { a_ops.into_iter().next().unwrap() } else { rebuild_or(a_ops) };
            let rem_b = if b_ops.len() == 1 { b_ops.into_iter().next().unwrap() } else { rebuild_or(b_ops) };
            let mut pair = order::canonicalize(vec![rem_a, rem_b]);
            let second = pair.pop().unwrap();
            let first = pair.pop().unwrap();
            let factored = Node::or(common, Node::and_fp(first, second, true));
            bump(metrics, "factorisation_reverse");

            let mut remaining: Vec<Node> = ops
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != i && *k != j)
                .map(|(_, n)| n.clone())
                .collect();
            remaining.push(factored);
            return Some(if remaining.len() == 1 {
                remaining.into_iter().next().unwrap()
            } else {
                rebuild_and(order::canonicalize(remaining))
            });
        }
    }
    None
}

fn simplify_and(l: Node, r: Node, metrics: &mut Metrics) -> Node {
    let mut ops = Vec::new();
    flatten_and(l, &mut ops);
    flatten_and(r, &mut ops);
    if ops.len() > 2 {
        bump(metrics, "flatten");
    }

    if ops.iter().any(Node::is_zero_const) {
        bump(metrics, "constant_fold");
        return Node::zero();
    }
    let before = ops.len();
    ops.retain(|n| !n.is_one_const());
    if ops.len() != before {
        bump(metrics, "constant_fold");
    }
    if ops.is_empty() {
        return Node::one();
    }

    if has_complement_pair(&ops) {
        bump(metrics, "complement");
        return Node::zero();
    }

    let ops = apply_and_absorption(ops, metrics);
    if let Some(node) = try_factor_reverse(&ops, metrics) {
        return node;
    }

    let mut ops = order::canonicalize(ops);
    let before = ops.len();
    ops.dedup();
    if ops.len() != before {
        bump(metrics, "duplicate_elimination");
    }

    if ops.len() == 1 {
        ops.into_iter().next().unwrap()
    } else {
        rebuild_and(ops)
    }
}

fn simplify_or(l: Node, r: Node, metrics: &mut Metrics) -> Node {
    let mut ops = Vec::new();
    flatten_or(l, &mut ops);
    flatten_or(r, &mut ops);
    if ops.len() > 2 {
        bump(metrics, "flatten");
    }

    if ops.iter().any(Node::is_one_const) {
        bump(metrics, "constant_fold");
        return Node::one();
    }
    let before = ops.len();
    ops.retain(|n| !n.is_zero_const());
    if ops.len() != before {
        bump(metrics, "constant_fold");
    }
    if ops.is_empty() {
        return Node::zero();
    }

    if has_complement_pair(&ops) {
        bump(metrics, "complement");
        return Node::one();
    }

    let mut ops = apply_or_absorption(ops, metrics);
    while try_consensus(&mut ops, metrics) {}

    if let Some(node) = try_factor_direct(&ops, metrics) {
        return node;
    }

    let mut ops = order::canonicalize(ops);
    let before = ops.len();
    ops.dedup();
    if ops.len() != before {
        bump(metrics, "duplicate_elimination");
    }

    if ops.len() == 1 {
        ops.into_iter().next().unwrap()
    } else {
        rebuild_or(ops)
    }
}
