use crate::calc::{Token, TokenKind};
use crate::error::{EvalError, Result};
use log::{debug, trace};

/// Splits expression text into tokens, always ending with exactly one `Eof`.
///
/// Only the space character is skipped. Digit runs become a single `Number`
/// token with their text kept verbatim ("007" stays "007").
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    debug!("Tokenizing expression: {input:?}");
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            ' ' => continue,
            '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(i, '0'..='9')) = chars.peek() {
                    end = i + 1;
                    chars.next();
                }
                tokens.push(Token::new(TokenKind::Number, &input[start..end]));
                continue;
            }
            other => return Err(EvalError::UnexpectedCharacter(other)),
        };
        tokens.push(Token::new(kind, c));
    }

    tokens.push(Token::eof());
    trace!("Tokens: {tokens:?}");
    Ok(tokens)
}
