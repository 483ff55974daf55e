use crate::calc::{Operator, Token, TokenCursor, TokenKind};
use crate::error::{EvalError, Integer, Result};
use log::debug;

/// Deepest parenthesis nesting accepted before the opening paren is rejected.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent evaluator over one token sequence.
///
/// ```text
/// expr   := addsub EOF | EOF
/// addsub := muldiv ( ('+' | '-') muldiv )*
/// muldiv := factor ( ('*' | '/') factor )*
/// factor := NUMBER | '(' addsub ')'
/// ```
///
/// Every tier that stops on a terminator it does not own steps the cursor
/// back so the enclosing tier sees the same token.
pub struct Evaluator<'a> {
    cursor: TokenCursor<'a>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            depth: 0,
        }
    }

    /// Evaluates the whole sequence. An empty expression yields 0; anything
    /// left over after a complete expression is an unexpected token.
    pub fn evaluate(mut self) -> Result<Integer> {
        let token = self.cursor.next();
        if token.kind == TokenKind::Eof {
            return Ok(0);
        }
        self.cursor.back();

        let value = self.evaluate_add_sub()?;

        let token = self.cursor.next();
        match token.kind {
            TokenKind::Eof => Ok(value),
            _ => Err(self.unexpected(token)),
        }
    }

    fn evaluate_add_sub(&mut self) -> Result<Integer> {
        let mut value = self.evaluate_mul_div()?;
        loop {
            let token = self.cursor.next();
            match token.kind {
                TokenKind::Plus | TokenKind::Minus => {}
                TokenKind::Eof | TokenKind::RightParen => {
                    self.cursor.back();
                    return Ok(value);
                }
                _ => return Err(self.unexpected(token)),
            }
            let operator = self.operator(token)?;
            let right = self.evaluate_mul_div()?;
            debug!("{value} {operator:?} {right}");
            value = operator.apply(value, right)?;
        }
    }

    fn evaluate_mul_div(&mut self) -> Result<Integer> {
        let mut value = self.evaluate_factor()?;
        loop {
            let token = self.cursor.next();
            match token.kind {
                TokenKind::Multiply | TokenKind::Divide => {}
                TokenKind::Eof | TokenKind::RightParen | TokenKind::Plus | TokenKind::Minus => {
                    self.cursor.back();
                    return Ok(value);
                }
                _ => return Err(self.unexpected(token)),
            }
            let operator = self.operator(token)?;
            let right = self.evaluate_factor()?;
            debug!("{value} {operator:?} {right}");
            value = operator.apply(value, right)?;
        }
    }

    fn evaluate_factor(&mut self) -> Result<Integer> {
        let token = self.cursor.next();
        match token.kind {
            TokenKind::Number => {
                token
                    .text
                    .parse::<Integer>()
                    .map_err(|source| EvalError::NumericParse {
                        text: token.text.clone(),
                        source,
                    })
            }
            TokenKind::LeftParen => {
                if self.depth >= MAX_NESTING {
                    return Err(self.unexpected(token));
                }
                self.depth += 1;
                let value = self.evaluate_add_sub()?;
                self.depth -= 1;
                let token = self.cursor.next();
                if token.kind != TokenKind::RightParen {
                    return Err(self.unexpected(token));
                }
                Ok(value)
            }
            _ => Err(self.unexpected(token)),
        }
    }

    fn operator(&self, token: &Token) -> Result<Operator> {
        Operator::try_from(token.kind).map_err(|_| self.unexpected(token))
    }

    fn unexpected(&self, token: &Token) -> EvalError {
        EvalError::UnexpectedToken {
            text: token.text.clone(),
            position: self.cursor.position(),
        }
    }
}
