use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("[line {}] Error {}: Expect expression.", .0.line, location(.0))]
    ExpectExpression(Token),

    #[error(
        "[line {}] Error {}: Expect '{}' after {}.",
        .found.line,
        location(.found),
        .expected,
        .after
    )]
    ExpectToken {
        found: Token,
        expected: &'static str,
        after: &'static str,
    },
}

impl ParseError {
    /// The token the parser was looking at when it gave up.
    pub fn token(&self) -> &Token {
        match self {
            ParseError::ExpectExpression(token) => token,
            ParseError::ExpectToken { found, .. } => found,
        }
    }

    pub fn line(&self) -> usize {
        self.token().line
    }
}

fn location(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "at end".to_string(),
        _ => format!("at '{}'", token.lexeme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_at_end() {
        let err = ParseError::ExpectExpression(Token::eof(3));
        assert_eq!(err.to_string(), "[line 3] Error at end: Expect expression.");
    }

    #[test]
    fn location_at_lexeme() {
        let err = ParseError::ExpectToken {
            found: Token::new(TokenKind::Semicolon, ";", 1),
            expected: ")",
            after: "expression",
        };
        assert_eq!(
            err.to_string(),
            "[line 1] Error at ';': Expect ')' after expression."
        );
        assert_eq!(err.line(), 1);
    }
}
