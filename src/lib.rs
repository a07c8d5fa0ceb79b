//! Scanner, parser and tree-walking evaluator for a small expression language.
//!
//! `run_command` drives the whole pipeline for one of the four commands and
//! writes the command's output to a caller-supplied writer.

pub mod ast;
pub mod interpret;
pub mod lex;
pub mod number;
pub mod parse;
pub mod printer;
pub mod token;
pub mod value;

use std::io::Write;
use std::str::FromStr;

use derive_more::Display;
use log::{debug, trace};
use thiserror::Error;

use crate::interpret::Interpreter;
use crate::lex::LexError;
use crate::parse::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Command {
    #[display(fmt = "tokenize")]
    Tokenize,
    #[display(fmt = "parse")]
    Parse,
    #[display(fmt = "evaluate")]
    Evaluate,
    #[display(fmt = "run")]
    Run,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokenize" => Ok(Command::Tokenize),
            "parse" => Ok(Command::Parse),
            "evaluate" => Ok(Command::Evaluate),
            "run" => Ok(Command::Run),
            _ => Err(Error::UnknownCommand(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", join_lines(.0))]
    Lex(Vec<LexError>),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] interpret::Error),

    #[error("Writing output failed with error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Runtime,
    Io,
    Usage,
}

impl ErrorKind {
    /// Process exit status for a failure of this kind.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Lexical | ErrorKind::Syntax => 65,
            ErrorKind::Runtime => 70,
            ErrorKind::Io | ErrorKind::Usage => 1,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lexical,
            Error::Parse(_) => ErrorKind::Syntax,
            Error::Runtime(interpret::Error::WriteFailed(..)) | Error::Io(_) => ErrorKind::Io,
            Error::Runtime(_) => ErrorKind::Runtime,
            Error::UnknownCommand(_) => ErrorKind::Usage,
        }
    }
}

fn join_lines(errors: &[LexError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs `command` over `source`, writing its output to `out`.
///
/// `tokenize` writes every token line before reporting lexical errors; the
/// other commands stop before parsing when the scanner reported anything.
/// `run` streams `print` output, so lines printed before a runtime error
/// are already in `out` when the error comes back.
pub fn run_command<W: Write>(command: Command, source: &[u8], out: &mut W) -> Result<(), Error> {
    debug!("running `{}` over {} bytes", command, source.len());

    let scanned = lex::scan(source);
    for token in &scanned.tokens {
        trace!("{}", token.to_text_line());
    }

    if command == Command::Tokenize {
        for token in &scanned.tokens {
            writeln!(out, "{}", token.to_text_line())?;
        }
    }
    if scanned.has_errors() {
        return Err(Error::Lex(scanned.errors));
    }

    match command {
        Command::Tokenize => {}
        Command::Parse => {
            let expr = parse::parse_expression(&scanned.tokens)?;
            writeln!(out, "{}", printer::print_expression(&expr))?;
        }
        Command::Evaluate => {
            let expr = parse::parse_expression(&scanned.tokens)?;
            let value = Interpreter::new(&mut *out).evaluate(&expr)?;
            writeln!(out, "{}", value)?;
        }
        Command::Run => {
            let stmts = parse::parse(&scanned.tokens)?;
            Interpreter::new(&mut *out).interpret(&stmts)?;
        }
    }

    Ok(())
}
