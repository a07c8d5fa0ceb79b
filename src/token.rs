use std::fmt;

use derive_more::Display;

use crate::number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    // single character
    #[display(fmt = "LEFT_PAREN")]
    LeftParen,
    #[display(fmt = "RIGHT_PAREN")]
    RightParen,
    #[display(fmt = "LEFT_BRACE")]
    LeftBrace,
    #[display(fmt = "RIGHT_BRACE")]
    RightBrace,
    #[display(fmt = "COMMA")]
    Comma,
    #[display(fmt = "DOT")]
    Dot,
    #[display(fmt = "MINUS")]
    Minus,
    #[display(fmt = "PLUS")]
    Plus,
    #[display(fmt = "SEMICOLON")]
    Semicolon,
    #[display(fmt = "SLASH")]
    Slash,
    #[display(fmt = "STAR")]
    Star,

    // one or two characters
    #[display(fmt = "BANG")]
    Bang,
    #[display(fmt = "BANG_EQUAL")]
    BangEqual,
    #[display(fmt = "EQUAL")]
    Equal,
    #[display(fmt = "EQUAL_EQUAL")]
    EqualEqual,
    #[display(fmt = "GREATER")]
    Greater,
    #[display(fmt = "GREATER_EQUAL")]
    GreaterEqual,
    #[display(fmt = "LESS")]
    Less,
    #[display(fmt = "LESS_EQUAL")]
    LessEqual,

    // literals
    #[display(fmt = "IDENTIFIER")]
    Identifier,
    #[display(fmt = "STRING")]
    String,
    #[display(fmt = "NUMBER")]
    Number,

    // keywords
    #[display(fmt = "AND")]
    And,
    #[display(fmt = "CLASS")]
    Class,
    #[display(fmt = "ELSE")]
    Else,
    #[display(fmt = "FALSE")]
    False,
    #[display(fmt = "FUN")]
    Fun,
    #[display(fmt = "FOR")]
    For,
    #[display(fmt = "IF")]
    If,
    #[display(fmt = "NIL")]
    Nil,
    #[display(fmt = "OR")]
    Or,
    #[display(fmt = "PRINT")]
    Print,
    #[display(fmt = "RETURN")]
    Return,
    #[display(fmt = "SUPER")]
    Super,
    #[display(fmt = "THIS")]
    This,
    #[display(fmt = "TRUE")]
    True,
    #[display(fmt = "VAR")]
    Var,
    #[display(fmt = "WHILE")]
    While,

    #[display(fmt = "EOF")]
    Eof,
}

/// Decoded value carried by `NUMBER` and `STRING` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(v) => f.write_str(&number::format_literal(*v)),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", line)
    }

    /// `<KIND> <lexeme> <literal>`, with `null` standing in for a missing literal.
    pub fn to_text_line(&self) -> String {
        match &self.literal {
            Some(literal) => format!("{} {} {}", self.kind, self.lexeme, literal),
            None => format!("{} {} null", self.kind, self.lexeme),
        }
    }
}
