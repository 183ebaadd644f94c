//! Typed error hierarchy surfaced at the engine façade boundary.
//!
//! Every public failure is one of these variants; no rule or converter ever returns a bare
//! string or panics on malformed input. `Display` messages always name the limit or token that
//! was breached, so `err.to_string()` alone is enough for a caller to report the failure.

use thiserror::Error;

/// Convenience alias for fallible engine operations.
pub type LogicResult<T> = Result<T, LogicError>;

/// Unified error enumeration for the boolean simplification engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("invalid character '{ch}' at offset {offset}")]
    InvalidCharacter { offset: usize, ch: char },

    #[error("unexpected token '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: String,
    },

    #[error("unbalanced parentheses at offset {offset}")]
    UnbalancedParentheses { offset: usize },

    #[error("empty expression")]
    EmptyExpression,

    #[error("expression too long: {len} > {max}")]
    ExpressionTooLong { len: usize, max: usize },

    #[error("too many variables: {count} > {max}")]
    TooManyVariables { count: usize, max: usize },

    #[error("nesting too deep at offset {offset}: {depth} > {max}")]
    NestingTooDeep {
        offset: usize,
        depth: usize,
        max: usize,
    },

    #[error("iteration limit exceeded: {max}")]
    IterationLimitExceeded { max: usize },

    #[error("rewrite timed out after {elapsed_ms}ms (budget {max_ms}ms)")]
    Timeout { elapsed_ms: u128, max_ms: u128 },

    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}
