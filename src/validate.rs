//! C11: the cheap structural checks that gate the engine's state machine, ahead of the more
//! expensive parsing/rewriting stages.

use crate::ast::Node;
use crate::config::Limits;
use crate::error::{LogicError, LogicResult};

/// Reject a source string longer than `limits.max_source_len`, before it is even tokenized.
pub fn check_source_len(source: &str, limits: &Limits) -> LogicResult<()> {
    let len = source.chars().count();
    if len > limits.max_source_len {
        log::warn!("rejected source of length {len} (limit {})", limits.max_source_len);
        return Err(LogicError::ExpressionTooLong {
            len,
            max: limits.max_source_len,
        });
    }
    Ok(())
}

/// Reject a parsed AST that references more distinct variables than `limits.max_variables`.
pub fn check_variable_count(ast: &Node, limits: &Limits) -> LogicResult<()> {
    let count = ast.variables().len();
    if count > limits.max_variables {
        log::warn!("rejected expression with {count} variables (limit {})", limits.max_variables);
        return Err(LogicError::TooManyVariables {
            count,
            max: limits.max_variables,
        });
    }
    Ok(())
}
