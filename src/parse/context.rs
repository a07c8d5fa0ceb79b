use crate::token::{Token, TokenKind};

use super::error::ParseError;

/// Read position over the scanned tokens.
pub struct Context<'a> {
    tokens: &'a [Token],
    curr_pos: usize,
    // stands in for a missing trailing EOF
    eof: Token,
}

impl<'a> Context<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let line = tokens.last().map(|t| t.line).unwrap_or(1);
        Self {
            tokens,
            curr_pos: 0,
            eof: Token::eof(line),
        }
    }

    pub fn get_curr(&self) -> &Token {
        self.tokens.get(self.curr_pos).unwrap_or(&self.eof)
    }

    pub fn is_at_end(&self) -> bool {
        self.get_curr().kind == TokenKind::Eof
    }

    /// Moves past the current token and hands it back. Never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.get_curr().clone();
        if !self.is_at_end() {
            self.curr_pos += 1;
        }
        token
    }

    pub fn peek(&self, match_kinds: &[TokenKind]) -> bool {
        match_kinds.contains(&self.get_curr().kind)
    }

    /// Consumes the current token if it is one of `match_kinds`.
    pub fn match_any(&mut self, match_kinds: &[TokenKind]) -> Option<Token> {
        if self.peek(match_kinds) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn consume_token(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
        after: &'static str,
    ) -> Result<Token, ParseError> {
        if self.peek(&[kind]) {
            return Ok(self.advance());
        }
        Err(ParseError::ExpectToken {
            found: self.get_curr().clone(),
            expected,
            after,
        })
    }
}
