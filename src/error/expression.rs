use std::num::ParseIntError;

use thiserror::Error;

/// Failure to parse or simplify a math expression.
///
/// Positions are byte offsets into the input text.
#[derive(Error, Debug)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("expression is longer than {max} characters")]
    TooLong { max: usize },

    #[error("expression is nested deeper than {max} levels")]
    TooDeep { max: usize },

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal '{literal}' at position {pos}")]
    InvalidNumber {
        literal: String,
        pos: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected token '{token}' at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis: '(' at position {pos} is never closed")]
    UnclosedParen { pos: usize },

    #[error("unbalanced parenthesis: unmatched ')' at position {pos}")]
    UnmatchedParen { pos: usize },

    #[error("{name}() takes exactly one argument ({found} given)")]
    Arity { name: &'static str, found: usize },

    #[error("division by zero")]
    DivisionByZero,

    /// No finite value exists, such as `log(0)`.
    #[error("{0} is undefined")]
    Undefined(&'static str),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("exponent {0} is too large")]
    ExponentTooLarge(String),
}
