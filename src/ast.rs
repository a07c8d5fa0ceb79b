use crate::token::Token;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Grouping(Box<Expression>),
    // operator is `-` or `!`
    Unary(Token, Box<Expression>),
    Binary(Box<Expression>, Token, Box<Expression>),
}

impl Expression {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, operand: Expression) -> Self {
        Expression::Unary(operator, Box::new(operand))
    }

    pub fn binary(left: Expression, operator: Token, right: Expression) -> Self {
        Expression::Binary(Box::new(left), operator, Box::new(right))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expr(Expression),
    Print(Expression),
}

pub type StatementList = Vec<Statement>;
