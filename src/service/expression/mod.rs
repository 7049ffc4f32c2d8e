//! Symbolic math: parsing, automatic simplification and 2D rendering.
//!
//! Input goes through [`lexer::tokenize`], then [`parser::Parser`], which builds the
//! canonical [`expr::Expr`] directly. [`render`] lays the result out with [`pretty::pretty`].

pub mod expr;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod rational;

#[cfg(test)]
mod test;

use crate::error::expression::ExpressionError;

use expr::Expr;

/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 1000;

/// Parses and simplifies `input`.
///
/// # Arguments
/// - `input` - Free-form expression text such as `2x + 3x` or `sin x^2`
///
/// # Returns
/// - `Ok(Expr)` - Expression in canonical form
/// - `Err(ExpressionError)` - Input too long, malformed or not evaluable
pub fn evaluate(input: &str) -> Result<Expr, ExpressionError> {
    if input.chars().count() > MAX_INPUT_LEN {
        return Err(ExpressionError::TooLong { max: MAX_INPUT_LEN });
    }

    let tokens = lexer::tokenize(input)?;
    parser::Parser::new(tokens).parse()
}

/// Evaluates `input` and renders the result as multi-line Unicode text.
pub fn render(input: &str) -> Result<String, ExpressionError> {
    let expr = evaluate(input)?;
    Ok(pretty::pretty(&expr))
}
