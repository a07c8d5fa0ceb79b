use log::{debug, trace};

use crate::ast::*;
use crate::token::{Token, TokenKind};
use crate::value::Value;

use super::context::Context;
use super::error::ParseError;

/// Parses a whole program. Stops at the first error, there is no recovery.
pub fn parse(tokens: &[Token]) -> Result<StatementList, ParseError> {
    let mut state = Context::new(tokens);
    let mut stmts = vec![];
    while !state.is_at_end() {
        let stmt = parse_stmt(&mut state)?;
        trace!("{:?}", stmt);
        stmts.push(stmt);
    }
    debug!("parsed {} statements", stmts.len());
    Ok(stmts)
}

/// Parses a single expression; whatever follows it is left unread.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression, ParseError> {
    let mut state = Context::new(tokens);
    let expr = parse_expr(&mut state)?;
    trace!("{:?}", expr);
    Ok(expr)
}

fn parse_stmt(state: &mut Context) -> Result<Statement, ParseError> {
    if state.match_any(&[TokenKind::Print]).is_some() {
        return parse_print_stmt(state);
    }
    parse_expr_stmt(state)
}

fn parse_print_stmt(state: &mut Context) -> Result<Statement, ParseError> {
    let expr = parse_expr(state)?;
    state.consume_token(TokenKind::Semicolon, ";", "value")?;
    Ok(Statement::Print(expr))
}

fn parse_expr_stmt(state: &mut Context) -> Result<Statement, ParseError> {
    let expr = parse_expr(state)?;
    state.consume_token(TokenKind::Semicolon, ";", "expression")?;
    Ok(Statement::Expr(expr))
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_equality(state)
}

fn parse_equality(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[TokenKind::BangEqual, TokenKind::EqualEqual],
        parse_comparison,
    )
}

fn parse_comparison(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(
        state,
        &[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ],
        parse_term,
    )
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Minus, TokenKind::Plus], parse_factor)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Slash, TokenKind::Star], parse_unary)
}

// left-folds `lower (op lower)*`, which keeps every binary level left-associative
fn parse_recursive_binary<F>(
    state: &mut Context,
    match_kinds: &'static [TokenKind],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while let Some(op) = state.match_any(match_kinds) {
        let rhs = lower_fn(state)?;
        lhs = Expression::binary(lhs, op, rhs);
    }

    Ok(lhs)
}

fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    match state.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
        Some(op) => {
            let operand = parse_unary(state)?;
            Ok(Expression::unary(op, operand))
        }
        None => parse_primary(state),
    }
}

fn parse_primary(state: &mut Context) -> Result<Expression, ParseError> {
    match state.get_curr().kind {
        TokenKind::False => {
            state.advance();
            Ok(Expression::literal(Value::Bool(false)))
        }
        TokenKind::True => {
            state.advance();
            Ok(Expression::literal(Value::Bool(true)))
        }
        TokenKind::Nil => {
            state.advance();
            Ok(Expression::literal(Value::Nil))
        }
        TokenKind::Number | TokenKind::String => parse_literal(state),
        TokenKind::LeftParen => parse_group(state),
        _ => Err(ParseError::ExpectExpression(state.get_curr().clone())),
    }
}

fn parse_literal(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.advance();
    match li.literal {
        Some(literal) => Ok(Expression::literal(literal)),
        // the scanner already reported this token
        None => Err(ParseError::ExpectExpression(li)),
    }
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    state.consume_token(TokenKind::LeftParen, "(", "expression")?;
    let expr = parse_expr(state)?;
    state.consume_token(TokenKind::RightParen, ")", "expression")?;
    Ok(Expression::grouping(expr))
}
