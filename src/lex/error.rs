use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter { character: char, line: usize },

    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },

    #[error("[line {line}] Error: Invalid number: {lexeme}")]
    InvalidNumber { lexeme: String, line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line }
            | LexError::InvalidNumber { line, .. } => *line,
        }
    }
}
