//! C10: bottom-up structural pattern recogniser.
//!
//! Only the two shapes in SPEC_FULL.md §4.8 are recognised — XOR and implication — and only once
//! the rewriter has already converged on `node`, so this never competes with the rewrite-rule
//! catalogue itself. Recognition is purely structural: it never consults a truth table, and it
//! never broadens beyond these two shapes.

use crate::ast::Node;

/// If `node` is `And(x, Not(y))` or `And(Not(y), x)`, returns `(x, y)`.
fn extract_and_pair(node: &Node) -> Option<(Node, Node)> {
    if let Node::And(l, r, _) = node {
        if let Node::Not(neg) = r.as_ref() {
            return Some((l.as_ref().clone(), neg.as_ref().clone()));
        }
        if let Node::Not(neg) = l.as_ref() {
            return Some((r.as_ref().clone(), neg.as_ref().clone()));
        }
    }
    None
}

/// `(a & !b) | (!a & b) -> a XOR b`.
fn try_xor(left: &Node, right: &Node) -> Option<Node> {
    let (p1, n1) = extract_and_pair(left)?;
    let (p2, n2) = extract_and_pair(right)?;
    if p1 == n2 && n1 == p2 {
        Some(Node::Xor(Box::new(p1), Box::new(n1)))
    } else {
        None
    }
}

/// `!a | b -> a -> b`.
fn try_imp(left: &Node, right: &Node) -> Option<Node> {
    if let Node::Not(a) = left {
        Some(Node::Imp(a.clone(), Box::new(right.clone())))
    } else {
        None
    }
}

/// Rewrite every XOR/implication shape in `node` into its [`Node::Xor`]/[`Node::Imp`] form.
pub fn to_advanced(node: &Node) -> Node {
    match node {
        Node::Var(_) => node.clone(),
        Node::Not(inner) => Node::not(to_advanced(inner)),
        Node::And(l, r, fp) => Node::And(Box::new(to_advanced(l)), Box::new(to_advanced(r)), *fp),
        Node::Xor(l, r) => Node::Xor(Box::new(to_advanced(l)), Box::new(to_advanced(r))),
        Node::Imp(l, r) => Node::Imp(Box::new(to_advanced(l)), Box::new(to_advanced(r))),
        Node::Or(l, r, fp) => {
            let left = to_advanced(l);
            let right = to_advanced(r);
            if let Some(xor) = try_xor(&left, &right) {
                return xor;
            }
            if let Some(imp) = try_imp(&left, &right) {
                return imp;
            }
            if let Some(imp) = try_imp(&right, &left) {
                return imp;
            }
            Node::Or(Box::new(left), Box::new(right), *fp)
        }
    }
}
