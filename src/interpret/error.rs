use thiserror::Error;

use crate::token::Token;
use crate::value::Value;

/// Failures raised while evaluating. The operator token gives the line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Operand must be a number.\n[line {}]", .0.line)]
    OperandMustBeNumber(Token),

    #[error("Left operand must be a number.\n[line {}]", .0.line)]
    LeftOperandMustBeNumber(Token),

    #[error("Right operand must be a number.\n[line {}]", .0.line)]
    RightOperandMustBeNumber(Token),

    #[error("Operands must be two numbers or two strings.\n[line {}]", .0.line)]
    OperandsMustBeNumbersOrStrings(Token),

    // the parser never builds these
    #[error("Unknown operator `{}`\n[line {}]", .0.lexeme, .0.line)]
    UnknownOperation(Token),

    #[error("Write value `{0}` failed with error: {1}")]
    WriteFailed(Value, std::io::Error),
}

impl Error {
    pub fn token(&self) -> Option<&Token> {
        use Error::*;
        match self {
            OperandMustBeNumber(t)
            | LeftOperandMustBeNumber(t)
            | RightOperandMustBeNumber(t)
            | OperandsMustBeNumbersOrStrings(t)
            | UnknownOperation(t) => Some(t),
            WriteFailed(..) => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.token().map(|t| t.line)
    }
}
