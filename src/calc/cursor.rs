use crate::calc::{Token, TokenKind};

static EOF: Token = Token {
    kind: TokenKind::Eof,
    text: String::new(),
};

/// Read position over an immutable token sequence.
///
/// Supports a single step back, which is all the grammar ever needs.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the token under the cursor and moves past it. Reading beyond
    /// the sequence keeps yielding `Eof`.
    pub fn next(&mut self) -> &'a Token {
        let token = self.tokens.get(self.position).unwrap_or(&EOF);
        self.position += 1;
        token
    }

    pub fn back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::tokenize;

    #[test]
    fn test_next_and_back() {
        let tokens = tokenize("1 + 2").unwrap();
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(cursor.next().text, "1");
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.next().kind, TokenKind::Plus);
        cursor.back();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.next().kind, TokenKind::Plus);
        assert_eq!(cursor.next().text, "2");
        assert_eq!(cursor.next().kind, TokenKind::Eof);
    }

    #[test]
    fn test_reading_past_end_yields_eof() {
        let tokens = tokenize("").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.next().kind, TokenKind::Eof);
        assert_eq!(cursor.next().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_back_at_start_stays_at_zero() {
        let tokens = tokenize("1").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.back();
        assert_eq!(cursor.position(), 0);
    }
}
