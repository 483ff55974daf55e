use crate::error::{EvalError, Integer, Result};

mod calculator;
mod cursor;
mod evaluator;
mod lexer;
mod substitution;

pub use calculator::*;
pub use cursor::TokenCursor;
pub use evaluator::{Evaluator, MAX_NESTING};
pub use lexer::tokenize;
pub use substitution::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Multiply,
    Divide,
    Number,
    Eof,
}

/// A classified lexical unit. `text` holds the matched characters and is
/// empty for `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Applies the operator with checked arithmetic. Division truncates
    /// toward zero.
    pub fn apply(&self, left: Integer, right: Integer) -> Result<Integer> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 {
                    return Err(EvalError::DivideByZero);
                }
                left.checked_div(right)
            }
        };
        result.ok_or(EvalError::Overflow { operator: *self })
    }
}

impl TryFrom<TokenKind> for Operator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> std::result::Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(Operator::Add),
            TokenKind::Minus => Ok(Operator::Subtract),
            TokenKind::Multiply => Ok(Operator::Multiply),
            TokenKind::Divide => Ok(Operator::Divide),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2, 3), Ok(5));
        assert_eq!(Operator::Subtract.apply(2, 3), Ok(-1));
        assert_eq!(Operator::Multiply.apply(4, 3), Ok(12));
        assert_eq!(Operator::Divide.apply(7, 2), Ok(3));
        assert_eq!(Operator::Divide.apply(-7, 2), Ok(-3));
    }

    #[test]
    fn test_operator_errors() {
        assert_eq!(Operator::Divide.apply(5, 0), Err(EvalError::DivideByZero));
        assert_eq!(
            Operator::Add.apply(Integer::MAX, 1),
            Err(EvalError::Overflow {
                operator: Operator::Add
            })
        );
        assert_eq!(
            Operator::Divide.apply(Integer::MIN, -1),
            Err(EvalError::Overflow {
                operator: Operator::Divide
            })
        );
    }

    #[test]
    fn test_operator_from_token_kind() {
        assert_eq!(Operator::try_from(TokenKind::Plus), Ok(Operator::Add));
        assert_eq!(Operator::try_from(TokenKind::Minus), Ok(Operator::Subtract));
        assert_eq!(Operator::try_from(TokenKind::Multiply), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from(TokenKind::Divide), Ok(Operator::Divide));
        assert_eq!(Operator::try_from(TokenKind::Number), Err(TokenKind::Number));
        assert_eq!(Operator::try_from(TokenKind::Eof), Err(TokenKind::Eof));
    }
}
