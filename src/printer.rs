//! Parenthesized prefix rendering of the AST, e.g. `(* (- 123.0) (group 45.67))`.
//!
//! Read-only over the tree and never part of evaluation.

use crate::ast::{Expression, Statement};

pub fn print_expression(expr: &Expression) -> String {
    match expr {
        Expression::Literal(value) => value.to_literal_text(),
        Expression::Grouping(inner) => parenthesize("group", &[inner.as_ref()]),
        Expression::Unary(op, operand) => parenthesize(&op.lexeme, &[operand.as_ref()]),
        Expression::Binary(lhs, op, rhs) => {
            parenthesize(&op.lexeme, &[lhs.as_ref(), rhs.as_ref()])
        }
    }
}

/// Statement forms: `(print <expr>)` and `(; <expr>)`. The `parse` command
/// works in expression mode and does not call this yet.
pub fn print_statement(stmt: &Statement) -> String {
    match stmt {
        Statement::Print(expr) => parenthesize("print", &[expr]),
        Statement::Expr(expr) => parenthesize(";", &[expr]),
    }
}

/// One statement per line. Not used by any command yet.
pub fn print_program(stmts: &[Statement]) -> String {
    stmts
        .iter()
        .map(print_statement)
        .collect::<Vec<_>>()
        .join("\n")
}

fn parenthesize(name: &str, exprs: &[&Expression]) -> String {
    let mut s = format!("({}", name);
    for expr in exprs {
        s.push(' ');
        s.push_str(&print_expression(expr));
    }
    s.push(')');
    s
}
