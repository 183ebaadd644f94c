//! C7: conjunctive/disjunctive normal-form conversion.
//!
//! Two independent passes: [`to_nnf`] pushes every negation down to a literal (re-applying De
//! Morgan, the same transformation the rewriter's `simplify_not` uses, but run to completion
//! rather than once per pass), then a distribution pass pushes `Or` under `And` (for CNF) or
//! `And` under `Or` (for DNF) until no crossing remains. Distribution is exponential in the worst
//! case, which is inherent to normal-form conversion rather than a defect of this implementation.

use crate::ast::Node;

fn to_nnf(node: Node, negate: bool) -> Node {
    match node {
        Node::Var(name) => {
            if !negate {
                Node::Var(name)
            } else if name == "0" {
                Node::one()
            } else if name == "1" {
                Node::zero()
            } else {
                Node::not(Node::Var(name))
            }
        }
        Node::Not(inner) => to_nnf(*inner, !negate),
        Node::And(l, r, _) => {
            if negate {
                Node::or(to_nnf(*l, true), to_nnf(*r, true))
            } else {
                Node::and(to_nnf(*l, false), to_nnf(*r, false))
            }
        }
        Node::Or(l, r, _) => {
            if negate {
                Node::and(to_nnf(*l, true), to_nnf(*r, true))
            } else {
                Node::or(to_nnf(*l, false), to_nnf(*r, false))
            }
        }
        Node::Xor(l, r) => {
            let l = *l;
            let r = *r;
            if negate {
                // !(a XOR b) == (a & b) | (!a & !b)
                Node::or(
                    Node::and(to_nnf(l.clone(), false), to_nnf(r.clone(), false)),
                    Node::and(to_nnf(l, true), to_nnf(r, true)),
                )
            } else {
                // a XOR b == (a & !b) | (!a & b)
                Node::or(
                    Node::and(to_nnf(l.clone(), false), to_nnf(r.clone(), true)),
                    Node::and(to_nnf(l, true), to_nnf(r, false)),
                )
            }
        }
        Node::Imp(l, r) => {
            if negate {
                // !(a -> b) == a & !b
                Node::and(to_nnf(*l, false), to_nnf(*r, true))
            } else {
                // a -> b == !a | b
                Node::or(to_nnf(*l, true), to_nnf(*r, false))
            }
        }
    }
}

fn distribute_pair_cnf(left: Node, right: Node) -> Node {
    match (left, right) {
        (Node::And(a, b, _), right) => Node::and(
            distribute_pair_cnf(*a, right.clone()),
            distribute_pair_cnf(*b, right),
        ),
        (left, Node::And(a, b, _)) => Node::and(
            distribute_pair_cnf(left.clone(), *a),
            distribute_pair_cnf(left, *b),
        ),
        (left, right) => Node::or(left, right),
    }
}

fn distribute_cnf(node: Node) -> Node {
    match node {
        Node::And(l, r, _) => Node::and(distribute_cnf(*l), distribute_cnf(*r)),
        Node::Or(l, r, _) => distribute_pair_cnf(distribute_cnf(*l), distribute_cnf(*r)),
        other => other,
    }
}

fn distribute_pair_dnf(left: Node, right: Node) -> Node {
    match (left, right) {
        (Node::Or(a, b, _), right) => Node::or(
            distribute_pair_dnf(*a, right.clone()),
            distribute_pair_dnf(*b, right),
        ),
        (left, Node::Or(a, b, _)) => Node::or(
            distribute_pair_dnf(left.clone(), *a),
            distribute_pair_dnf(left, *b),
        ),
        (left, right) => Node::and(left, right),
    }
}

fn distribute_dnf(node: Node) -> Node {
    match node {
        Node::Or(l, r, _) => Node::or(distribute_dnf(*l), distribute_dnf(*r)),
        Node::And(l, r, _) => distribute_pair_dnf(distribute_dnf(*l), distribute_dnf(*r)),
        other => other,
    }
}

/// Convert to conjunctive normal form: a conjunction of disjunctions of literals.
pub fn to_cnf(node: &Node) -> Node {
    distribute_cnf(to_nnf(node.clone(), false))
}

/// Convert to disjunctive normal form: a disjunction of conjunctions of literals.
pub fn to_dnf(node: &Node) -> Node {
    distribute_dnf(to_nnf(node.clone(), false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::print;

    #[test]
    fn cnf_distributes_or_over_and() {
        let n = Node::or(Node::and(Node::var("a"), Node::var("b")), Node::var("c"));
        assert_eq!(print(&to_cnf(&n)), "(a | c) & (b | c)");
    }

    #[test]
    fn dnf_distributes_and_over_or() {
        let n = Node::and(Node::or(Node::var("a"), Node::var("b")), Node::var("c"));
        assert_eq!(print(&to_dnf(&n)), "a & c | b & c");
    }

    #[test]
    fn negation_is_pushed_to_literals() {
        let n = Node::not(Node::and(Node::var("a"), Node::var("b")));
        assert_eq!(print(&to_cnf(&n)), "!a | !b");
        assert_eq!(print(&to_dnf(&n)), "!a | !b");
    }

    #[test]
    fn already_normal_form_is_left_alone() {
        let n = Node::and(Node::var("a"), Node::or(Node::var("b"), Node::var("c")));
        assert_eq!(print(&to_cnf(&n)), "a & (b | c)");
    }
}
