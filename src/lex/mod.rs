mod cursor;
mod error;
mod keywords;

pub use cursor::Cursor;
pub use error::LexError;

use log::trace;

use crate::token::{Literal, Token, TokenKind};

/// Everything the scanner produced. `tokens` always ends with a single `EOF`,
/// even when `errors` is not empty.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn scan(source: &[u8]) -> ScanResult {
    let mut scanner = Scanner::new(source);
    while !scanner.cursor.is_at_end() {
        scanner.scan_token();
    }
    let line = scanner.cursor.line();
    scanner.result.tokens.push(Token::eof(line));

    trace!(
        "scanned {} tokens with {} errors",
        scanner.result.tokens.len(),
        scanner.result.errors.len()
    );
    scanner.result
}

fn is_identifier_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

fn is_identifier_char(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    start: usize,
    result: ScanResult,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            result: ScanResult::default(),
        }
    }

    fn scan_token(&mut self) {
        self.start = self.cursor.position();
        let Some(b) = self.cursor.advance() else {
            return;
        };

        match b {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => self.add_one_or_two(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_one_or_two(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_one_or_two(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_one_or_two(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.advance_if(b'/') {
                    // comment runs up to, not including, the newline
                    self.cursor.advance_while(|c| c != b'\n');
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\t' | b'\r' | b'\n' => {}
            b'"' => self.scan_string(),
            b if b.is_ascii_digit() => self.scan_number(),
            b if is_identifier_start(b) => self.scan_identifier(),
            _ => {
                let character = if b.is_ascii() {
                    char::from(b)
                } else {
                    self.cursor.finish_char(self.start)
                };
                self.result.errors.push(LexError::UnexpectedCharacter {
                    character,
                    line: self.cursor.line(),
                });
            }
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.cursor.text_from(self.start);
        self.result
            .tokens
            .push(Token::new(kind, lexeme, self.cursor.line()));
    }

    fn add_one_or_two(&mut self, second: u8, two: TokenKind, one: TokenKind) {
        if self.cursor.advance_if(second) {
            self.add_token(two);
        } else {
            self.add_token(one);
        }
    }

    fn scan_string(&mut self) {
        self.cursor.advance_while(|c| c != b'"' && c != b'\n');

        if !self.cursor.advance_if(b'"') {
            self.result.errors.push(LexError::UnterminatedString {
                line: self.cursor.line(),
            });
            return;
        }

        let lexeme = self.cursor.text_from(self.start);
        // strip the surrounding quotes, no escape processing
        let value = lexeme[1..lexeme.len() - 1].to_string();
        self.result.tokens.push(Token::with_literal(
            TokenKind::String,
            lexeme,
            Literal::Str(value),
            self.cursor.line(),
        ));
    }

    fn scan_number(&mut self) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        // a trailing '.' without digits is left for the next token
        let has_fraction = self.cursor.peek() == Some(b'.')
            && self
                .cursor
                .peek_next()
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false);
        if has_fraction {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.cursor.text_from(self.start);
        let line = self.cursor.line();
        match lexeme.parse::<f64>() {
            Ok(v) => self.result.tokens.push(Token::with_literal(
                TokenKind::Number,
                lexeme,
                Literal::Number(v),
                line,
            )),
            Err(_) => {
                self.result.errors.push(LexError::InvalidNumber {
                    lexeme: lexeme.clone(),
                    line,
                });
                self.result
                    .tokens
                    .push(Token::new(TokenKind::Number, lexeme, line));
            }
        }
    }

    fn scan_identifier(&mut self) {
        self.cursor.advance_while(is_identifier_char);
        let lexeme = self.cursor.text_from(self.start);
        let kind = keywords::keyword_or_identifier(&lexeme);
        self.result
            .tokens
            .push(Token::new(kind, lexeme, self.cursor.line()));
    }
}
