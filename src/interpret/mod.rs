mod error;
mod interpreter;

pub use error::Error;
pub use interpreter::Interpreter;
