use std::io::Write;

use log::{debug, trace};

use super::error::Error;
use crate::ast::*;
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Tree-walking evaluator. `print` output goes to `print_writer`.
pub struct Interpreter<W: Write> {
    print_writer: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(print_writer: W) -> Self {
        Self { print_writer }
    }

    pub fn into_writer(self) -> W {
        self.print_writer
    }

    /// Runs statements in order. The first error aborts the rest.
    pub fn interpret(&mut self, stmts: &[Statement]) -> Result<(), Error> {
        debug!("interpreting {} statements", stmts.len());
        for stmt in stmts {
            self.interpret_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn interpret_stmt(&mut self, stmt: &Statement) -> Result<(), Error> {
        match stmt {
            Statement::Expr(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Statement::Print(expr) => {
                let value = self.evaluate(expr)?;
                trace!("print {:?}", value);
                let written = writeln!(self.print_writer, "{}", value);
                written.map_err(|e| Error::WriteFailed(value, e))
            }
        }
    }

    pub fn evaluate(&mut self, expr: &Expression) -> Result<Value, Error> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Grouping(inner) => self.evaluate(inner),
            Expression::Unary(op, operand) => self.interpret_unary_op(op, operand),
            Expression::Binary(lhs, op, rhs) => self.interpret_binary_op(lhs, op, rhs),
        }
    }

    fn interpret_unary_op(&mut self, op: &Token, operand: &Expression) -> Result<Value, Error> {
        let value = self.evaluate(operand)?;
        match op.kind {
            TokenKind::Minus => {
                let v = value
                    .get_number()
                    .ok_or_else(|| Error::OperandMustBeNumber(op.clone()))?;
                Ok(Value::Number(-v))
            }
            TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
            _ => Err(Error::UnknownOperation(op.clone())),
        }
    }

    fn interpret_binary_op(
        &mut self,
        lhs: &Expression,
        op: &Token,
        rhs: &Expression,
    ) -> Result<Value, Error> {
        // left is fully evaluated before right
        let l = self.evaluate(lhs)?;
        let r = self.evaluate(rhs)?;

        match op.kind {
            TokenKind::Plus => add(op, l, r),
            TokenKind::Minus => number_operands(op, &l, &r).map(|(l, r)| Value::Number(l - r)),
            TokenKind::Star => number_operands(op, &l, &r).map(|(l, r)| Value::Number(l * r)),
            // IEEE division, `1 / 0` is infinity rather than an error
            TokenKind::Slash => number_operands(op, &l, &r).map(|(l, r)| Value::Number(l / r)),
            TokenKind::Greater => number_operands(op, &l, &r).map(|(l, r)| Value::Bool(l > r)),
            TokenKind::GreaterEqual => {
                number_operands(op, &l, &r).map(|(l, r)| Value::Bool(l >= r))
            }
            TokenKind::Less => number_operands(op, &l, &r).map(|(l, r)| Value::Bool(l < r)),
            TokenKind::LessEqual => {
                number_operands(op, &l, &r).map(|(l, r)| Value::Bool(l <= r))
            }
            TokenKind::EqualEqual => Ok(Value::Bool(l.is_equal(&r))),
            TokenKind::BangEqual => Ok(Value::Bool(!l.is_equal(&r))),
            _ => Err(Error::UnknownOperation(op.clone())),
        }
    }
}

fn add(op: &Token, l: Value, r: Value) -> Result<Value, Error> {
    match (l, r) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
        (Value::Str(mut l), Value::Str(r)) => {
            l.push_str(&r);
            Ok(Value::Str(l))
        }
        _ => Err(Error::OperandsMustBeNumbersOrStrings(op.clone())),
    }
}

// the left side is checked first, so `"a" < nil` blames the left operand
fn number_operands(op: &Token, l: &Value, r: &Value) -> Result<(f64, f64), Error> {
    let l = l
        .get_number()
        .ok_or_else(|| Error::LeftOperandMustBeNumber(op.clone()))?;
    let r = r
        .get_number()
        .ok_or_else(|| Error::RightOperandMustBeNumber(op.clone()))?;
    Ok((l, r))
}
