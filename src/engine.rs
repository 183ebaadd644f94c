//! C12: the engine façade that wires every component into the single `optimize` entry point.
//!
//! Pipeline (SPEC_FULL.md §6): `Parsed -> Validated -> Rewriting -> Converged -> NormalFormBuilt
//! -> PatternDetected -> Printed`. Each stage can only fail with a typed [`LogicError`]; there is
//! no partial/best-effort result.

use std::collections::BTreeSet;

use crate::ast::Node;
use crate::config::Limits;
use crate::error::LogicResult;
use crate::lexer::tokenize;
use crate::normal_form::{to_cnf, to_dnf};
use crate::parser::parse;
use crate::pattern::to_advanced;
use crate::printer::print;
use crate::rewriter::{rewrite, Metrics};
use crate::truth_table::{compile, truth_table};
use crate::validate::{check_source_len, check_variable_count};

/// Knobs controlling how much work [`optimize`] does beyond the mandatory rewrite.
#[derive(Debug, Clone)]
pub struct Options {
    /// Include per-rule application counts in the result.
    pub collect_metrics: bool,
    /// Compile and evaluate a full truth table over the optimized expression's variables.
    pub build_truth_tables: bool,
    /// Run the XOR/implication pattern recogniser over the optimized expression.
    pub emit_advanced: bool,
    /// Validator bounds and the rewriter's iteration/wall-clock budget.
    pub limits: Limits,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            collect_metrics: true,
            build_truth_tables: false,
            emit_advanced: true,
            limits: Limits::default(),
        }
    }
}

/// The full result of one `optimize` call.
#[derive(Debug, Clone)]
pub struct EngineResult {
    /// The parsed input, printed back verbatim (modulo whitespace/parenthesisation).
    pub original: String,
    pub optimized: String,
    pub cnf: String,
    pub dnf: String,
    /// Set iff `options.emit_advanced`.
    pub advanced: Option<String>,
    pub variables: BTreeSet<String>,
    /// Set iff `options.collect_metrics`.
    pub metrics: Option<Metrics>,
    /// Set iff `options.build_truth_tables`; canonical row order over `variables`.
    pub truth_tables: Option<Vec<bool>>,
}

/// Parse, validate, simplify and derive normal forms for `source`.
pub fn optimize(source: &str, options: Options) -> LogicResult<EngineResult> {
    check_source_len(source, &options.limits)?;

    let tokens = tokenize(source, &options.limits)?;
    let ast = parse(&tokens)?;
    check_variable_count(&ast, &options.limits)?;

    let (optimized, metrics) = rewrite(&ast, &options.limits)?;
    let cnf = to_cnf(&optimized);
    let dnf = to_dnf(&optimized);

    let advanced = options.emit_advanced.then(|| {
        let candidate = to_advanced(&optimized);
        if candidate == optimized {
            String::new()
        } else {
            print(&candidate)
        }
    });
    let variables = optimized.variables();

    let truth_tables = options.build_truth_tables.then(|| {
        let vars: Vec<String> = variables.iter().cloned().collect();
        truth_table(&compile(&optimized), &vars)
    });

    log::info!(
        "optimized '{source}' -> '{}' ({} variable(s))",
        print(&optimized),
        variables.len()
    );

    Ok(EngineResult {
        original: print(&ast),
        optimized: print(&optimized),
        cnf: print(&cnf),
        dnf: print(&dnf),
        advanced,
        variables,
        metrics: options.collect_metrics.then_some(metrics),
        truth_tables,
    })
}
