use derive_more::Display;

use crate::number;
use crate::token::Literal;

/// Every value a literal can hold and every value evaluation can produce.
#[derive(Display, Debug, Clone, PartialEq)]
pub enum Value {
    #[display(fmt = "nil")]
    Nil,

    #[display(fmt = "{}", _0)]
    Bool(bool),

    // f64's own Display is the runtime form: `2`, `2.5`
    #[display(fmt = "{}", _0)]
    Number(f64),

    #[display(fmt = "{}", _0)]
    Str(String),
}

impl Value {
    /// `nil` and `false` are falsey, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Structural equality without coercion: values of different types are never equal.
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r,
            _ => false,
        }
    }

    pub fn get_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text used by the debug printer, numbers always carry a fraction.
    pub fn to_literal_text(&self) -> String {
        match self {
            Value::Number(v) => number::format_literal(*v),
            _ => self.to_string(),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(v) => Value::Number(v),
            Literal::Str(s) => Value::Str(s),
        }
    }
}
