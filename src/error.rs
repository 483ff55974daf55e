use std::num::ParseIntError;

use thiserror::Error;

use crate::calc::Operator;

pub type Integer = i64;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Every way a single `calculate` call can fail.
///
/// The core never prints these; the caller decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// `position` is the cursor index right after the offending token was read.
    #[error("Unexpected token: {text} at position: {position}")]
    UnexpectedToken { text: String, position: usize },

    #[error("Division by zero")]
    DivideByZero,

    #[error("Invalid number '{text}': {source}")]
    NumericParse {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Variable assignments must come in name/value pairs, got {count} items")]
    MalformedVariableAssignment { count: usize },

    #[error("Integer overflow in {operator:?}")]
    Overflow { operator: Operator },
}
