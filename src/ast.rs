//! The tagged-variant AST and the structural services built on top of it.
//!
//! Role
//! - `Node` owns its children exclusively (a `Box`-tree, never a DAG); `Clone` is a deep copy.
//! - No arena, no reference counting: unlike the teacher's zero-copy `TreeBuf` encoding, every
//!   rewrite rule replaces a whole owned subtree, so ownership is the natural fit here.
//!
//! Equality is structural and order-sensitive for a given node's children; the rewriter's
//! canonical-ordering rule is what makes commutative comparisons meaningful (§4.5/§4.6 of
//! SPEC_FULL.md).

use std::collections::BTreeSet;

use strum::EnumIs;

/// A node in the boolean-expression tree.
///
/// `And`/`Or` carry a `force_parens` flag set only by the factorisation rules (§4.5) to tell the
/// printer to keep a grouped reading regardless of precedence. `Xor`/`Imp` are only ever produced
/// by the pattern recogniser (§4.8) for the "advanced" rendering.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum Node {
    Var(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>, bool),
    Or(Box<Node>, Box<Node>, bool),
    Xor(Box<Node>, Box<Node>),
    Imp(Box<Node>, Box<Node>),
}

impl Node {
    pub fn var(name: impl Into<String>) -> Node {
        Node::Var(name.into())
    }

    pub fn zero() -> Node {
        Node::Var("0".to_string())
    }

    pub fn one() -> Node {
        Node::Var("1".to_string())
    }

    pub fn not(inner: Node) -> Node {
        Node::Not(Box::new(inner))
    }

    pub fn and(left: Node, right: Node) -> Node {
        Node::And(Box::new(left), Box::new(right), false)
    }

    pub fn or(left: Node, right: Node) -> Node {
        Node::Or(Box::new(left), Box::new(right), false)
    }

    pub fn and_fp(left: Node, right: Node, force_parens: bool) -> Node {
        Node::And(Box::new(left), Box::new(right), force_parens)
    }

    pub fn or_fp(left: Node, right: Node, force_parens: bool) -> Node {
        Node::Or(Box::new(left), Box::new(right), force_parens)
    }

    /// True for the constant-zero leaf (`Var("0")`).
    pub fn is_zero_const(&self) -> bool {
        matches!(self, Node::Var(name) if name == "0")
    }

    /// True for the constant-one leaf (`Var("1")`).
    pub fn is_one_const(&self) -> bool {
        matches!(self, Node::Var(name) if name == "1")
    }

    /// True for either constant leaf.
    pub fn is_const(&self) -> bool {
        self.is_zero_const() || self.is_one_const()
    }

    /// True for a free-variable leaf (i.e. not `"0"`/`"1"`).
    pub fn is_free_var(&self) -> bool {
        matches!(self, Node::Var(name) if name != "0" && name != "1")
    }

    /// A node is a literal if it is a variable or the negation of one.
    pub fn is_literal(&self) -> bool {
        match self {
            Node::Var(_) => true,
            Node::Not(inner) => matches!(inner.as_ref(), Node::Var(_)),
            _ => false,
        }
    }

    /// Collect the free-variable set (excludes the constants `"0"`/`"1"`), sorted.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Node::Var(name) => {
                if name != "0" && name != "1" {
                    out.insert(name.clone());
                }
            }
            Node::Not(inner) => inner.collect_variables(out),
            Node::And(l, r, _) | Node::Or(l, r, _) | Node::Xor(l, r) | Node::Imp(l, r) => {
                l.collect_variables(out);
                r.collect_variables(out);
            }
        }
    }

    /// Total number of nodes in the (sub)tree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(inner) => 1 + inner.node_count(),
            Node::And(l, r, _) | Node::Or(l, r, _) | Node::Xor(l, r) | Node::Imp(l, r) => {
                1 + l.node_count() + r.node_count()
            }
        }
    }

    /// Number of literal occurrences (variables and negated variables), used by the rewriter's
    /// termination measure `(node_count, literal_count, depth)`.
    pub fn literal_count(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(inner) if inner.is_free_var() || inner.is_const() => 1,
            Node::Not(inner) => inner.literal_count(),
            Node::And(l, r, _) | Node::Or(l, r, _) | Node::Xor(l, r) | Node::Imp(l, r) => {
                l.literal_count() + r.literal_count()
            }
        }
    }

    /// Maximum depth of the tree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(inner) => 1 + inner.depth(),
            Node::And(l, r, _) | Node::Or(l, r, _) | Node::Xor(l, r) | Node::Imp(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }
}
