//! C8/C9: truth-table compiler and the equivalence oracle built on top of it.
//!
//! [`compile`] walks the tree exactly once into a flat instruction list (a small stack-machine
//! program), not a closure over the `Node` tree itself, so evaluating the same expression across
//! every row of a truth table never re-walks the AST.

use crate::ast::Node;

#[derive(Debug, Clone)]
enum Instr {
    LoadVar(usize),
    LoadConst(bool),
    Not,
    And,
    Or,
    Xor,
    Imp,
}

/// A flattened, pre-walked program for evaluating one expression under many assignments.
#[derive(Debug, Clone)]
pub struct Evaluator {
    instructions: Vec<Instr>,
    variables: Vec<String>,
}

impl Evaluator {
    /// The free variables this program was compiled against, in ascending order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Evaluate the program. `assignment[i]` is the value bound to `self.variables()[i]`.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        let mut stack: Vec<bool> = Vec::with_capacity(self.instructions.len());
        for instr in &self.instructions {
            match instr {
                Instr::LoadVar(i) => stack.push(assignment[*i]),
                Instr::LoadConst(v) => stack.push(*v),
                Instr::Not => {
                    let a = stack.pop().expect("well-formed program never underflows");
                    stack.push(!a);
                }
                Instr::And => {
                    let b = stack.pop().expect("well-formed program never underflows");
                    let a = stack.pop().expect("well-formed program never underflows");
                    stack.push(a && b);
                }
                Instr::Or => {
                    let b = stack.pop().expect("well-formed program never underflows");
                    let a = stack.pop().expect("well-formed program never underflows");
                    stack.push(a || b);
                }
                Instr::Xor => {
                    let b = stack.pop().expect("well-formed program never underflows");
                    let a = stack.pop().expect("well-formed program never underflows");
                    stack.push(a != b);
                }
                Instr::Imp => {
                    let b = stack.pop().expect("well-formed program never underflows");
                    let a = stack.pop().expect("well-formed program never underflows");
                    stack.push(!a || b);
                }
            }
        }
        stack.pop().expect("a compiled program always leaves exactly one value")
    }
}

fn emit(node: &Node, variables: &[String], out: &mut Vec<Instr>) {
    match node {
        Node::Var(name) if name == "0" => out.push(Instr::LoadConst(false)),
        Node::Var(name) if name == "1" => out.push(Instr::LoadConst(true)),
        Node::Var(name) => {
            let idx = variables
                .binary_search(name)
                .expect("variable list was built from this node's own variable set");
            out.push(Instr::LoadVar(idx));
        }
        Node::Not(inner) => {
            emit(inner, variables, out);
            out.push(Instr::Not);
        }
        Node::And(l, r, _) => {
            emit(l, variables, out);
            emit(r, variables, out);
            out.push(Instr::And);
        }
        Node::Or(l, r, _) => {
            emit(l, variables, out);
            emit(r, variables, out);
            out.push(Instr::Or);
        }
        Node::Xor(l, r) => {
            emit(l, variables, out);
            emit(r, variables, out);
            out.push(Instr::Xor);
        }
        Node::Imp(l, r) => {
            emit(l, variables, out);
            emit(r, variables, out);
            out.push(Instr::Imp);
        }
    }
}

/// Walk `node` once into an [`Evaluator`].
pub fn compile(node: &Node) -> Evaluator {
    let variables: Vec<String> = node.variables().into_iter().collect();
    let mut instructions = Vec::new();
    emit(node, &variables, &mut instructions);
    Evaluator { instructions, variables }
}

/// Enumerate every row of the truth table over `variables`, most-significant variable first.
///
/// `variables` may be a superset of `evaluator.variables()` (e.g. the union of two expressions'
/// variable sets for an equivalence check); every evaluator variable must appear in it.
pub fn truth_table(evaluator: &Evaluator, variables: &[String]) -> Vec<bool> {
    let n = variables.len();
    let rows = 1usize << n;

    let positions: Vec<usize> = evaluator
        .variables()
        .iter()
        .map(|v| {
            variables
                .iter()
                .position(|candidate| candidate == v)
                .expect("variables must cover every evaluator variable")
        })
        .collect();

    (0..rows)
        .map(|mask| {
            let assignment: Vec<bool> = positions
                .iter()
                .map(|&pos| (mask >> (n - 1 - pos)) & 1 == 1)
                .collect();
            evaluator.eval(&assignment)
        })
        .collect()
}

/// True iff `a` and `b` denote the same function, projected over the union of their variables.
pub fn equivalent(a: &Node, b: &Node) -> bool {
    let union: Vec<String> = a.variables().union(&b.variables()).cloned().collect();
    truth_table(&compile(a), &union) == truth_table(&compile(b), &union)
}

fn all(node: &Node, expected: bool) -> bool {
    let vars: Vec<String> = node.variables().into_iter().collect();
    truth_table(&compile(node), &vars).into_iter().all(|row| row == expected)
}

/// True iff `node` evaluates to `1` under every assignment.
pub fn is_tautology(node: &Node) -> bool {
    all(node, true)
}

/// True iff `node` evaluates to `0` under every assignment.
pub fn is_contradiction(node: &Node) -> bool {
    all(node, false)
}

/// True iff some assignment makes `node` evaluate to `1`.
pub fn is_satisfiable(node: &Node) -> bool {
    !is_contradiction(node)
}
