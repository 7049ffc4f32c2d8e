//! Recursive descent parser producing simplified expressions.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary | unary)*      juxtaposition multiplies
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?                    right associative
//! primary := number | symbol | constant | '(' sum ')'
//!          | function '(' sum (',' sum)* ')'
//!          | function power                          implicit application
//!          | name '(' (sum (',' sum)*)? ')'          undefined function
//! ```
//!
//! Juxtaposition binds like explicit `*`, so `1/2x` is `(1/2)*x` and `2x^2` is `2*(x^2)`.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::error::expression::ExpressionError;

use super::{
    expr::{Expr, Function},
    lexer::{Token, TokenKind},
    rational::{DecimalError, Rational},
};

type Result<T> = std::result::Result<T, ExpressionError>;

/// Deepest nesting of parentheses, unary signs and powers accepted.
pub const MAX_DEPTH: usize = 200;

pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            depth: 0,
        }
    }

    /// Parses the whole token stream as one expression.
    pub fn parse(mut self) -> Result<Expr> {
        if self.tokens.peek().is_none() {
            return Err(ExpressionError::Empty);
        }

        let expr = self.sum()?;

        match self.tokens.next() {
            None => Ok(expr),
            Some(Token {
                kind: TokenKind::RParen,
                pos,
            }) => Err(ExpressionError::UnmatchedParen { pos }),
            Some(token) => Err(unexpected(&token)),
        }
    }

    fn sum(&mut self) -> Result<Expr> {
        let mut result = self.product()?;

        loop {
            result = match self.peek_kind() {
                Some(TokenKind::Plus) => {
                    self.tokens.next();
                    Expr::add(vec![result, self.product()?])?
                }
                Some(TokenKind::Minus) => {
                    self.tokens.next();
                    Expr::sub(result, self.product()?)?
                }
                _ => break,
            };
        }

        Ok(result)
    }

    fn product(&mut self) -> Result<Expr> {
        let mut result = self.unary()?;

        loop {
            result = match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.tokens.next();
                    Expr::mul(vec![result, self.unary()?])?
                }
                Some(TokenKind::Slash) => {
                    self.tokens.next();
                    Expr::div(result, self.unary()?)?
                }
                Some(
                    TokenKind::Number { .. }
                    | TokenKind::Symbol(_)
                    | TokenKind::Constant(_)
                    | TokenKind::Function(_)
                    | TokenKind::FunctionName(_)
                    | TokenKind::LParen,
                ) => Expr::mul(vec![result, self.unary()?])?,
                _ => break,
            };
        }

        Ok(result)
    }

    fn unary(&mut self) -> Result<Expr> {
        self.descend(|parser| match parser.peek_kind() {
            Some(TokenKind::Minus) => {
                parser.tokens.next();
                Expr::neg(parser.unary()?)
            }
            Some(TokenKind::Plus) => {
                parser.tokens.next();
                parser.unary()
            }
            _ => parser.power(),
        })
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.primary()?;

        if let Some(TokenKind::Caret) = self.peek_kind() {
            self.tokens.next();
            let exponent = self.unary()?;
            return Expr::pow(base, exponent);
        }

        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr> {
        let token = self.tokens.next().ok_or(ExpressionError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number { .. } => number(&token),
            TokenKind::Symbol(name) => Ok(Expr::symbol(name)),
            TokenKind::Constant(constant) => Ok(Expr::Constant(constant)),
            TokenKind::LParen => self.descend(|parser| {
                let inner = parser.sum()?;
                parser.expect_close(token.pos)?;
                Ok(inner)
            }),
            TokenKind::Function(function) => self.application(function),
            TokenKind::FunctionName(name) => self.named_application(name),
            _ => Err(unexpected(&token)),
        }
    }

    /// Function call with explicit parentheses or by juxtaposition (`sin x`).
    fn application(&mut self, function: Function) -> Result<Expr> {
        let open = match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::LParen,
                pos,
            }) => *pos,
            _ => {
                let argument = self.descend(|parser| parser.power())?;
                return Expr::call(function, argument);
            }
        };
        self.tokens.next();

        let mut arguments = self.arguments(open)?;
        if arguments.len() != 1 {
            return Err(ExpressionError::Arity {
                name: function.name(),
                found: arguments.len(),
            });
        }
        Expr::call(function, arguments.remove(0))
    }

    /// Application of a function with no known properties, kept symbolic.
    fn named_application(&mut self, name: String) -> Result<Expr> {
        let open = match self.tokens.next() {
            Some(Token {
                kind: TokenKind::LParen,
                pos,
            }) => pos,
            Some(token) => return Err(unexpected(&token)),
            None => return Err(ExpressionError::UnexpectedEnd),
        };

        Ok(Expr::apply(name, self.arguments(open)?))
    }

    /// Comma-separated arguments up to and including the closing parenthesis.
    fn arguments(&mut self, open: usize) -> Result<Vec<Expr>> {
        let mut arguments = Vec::new();
        if self.peek_kind() != Some(&TokenKind::RParen) {
            loop {
                arguments.push(self.descend(|parser| parser.sum())?);
                if self.peek_kind() == Some(&TokenKind::Comma) {
                    self.tokens.next();
                } else {
                    break;
                }
            }
        }
        self.expect_close(open)?;

        Ok(arguments)
    }

    fn expect_close(&mut self, open: usize) -> Result<()> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            None => Err(ExpressionError::UnclosedParen { pos: open }),
            Some(token) => Err(unexpected(&token)),
        }
    }

    fn peek_kind(&mut self) -> Option<&TokenKind> {
        self.tokens.peek().map(|token| &token.kind)
    }

    /// Runs `f` one nesting level deeper, failing once `MAX_DEPTH` is exceeded.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::TooDeep { max: MAX_DEPTH });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

fn number(token: &Token) -> Result<Expr> {
    let TokenKind::Number {
        int_part,
        frac_part,
        exponent,
    } = &token.kind
    else {
        return Err(unexpected(token));
    };

    // The lexer only hands over digits, so a failed parse means the exponent is out of range.
    let exponent = if exponent.is_empty() {
        0
    } else {
        exponent
            .parse::<i64>()
            .map_err(|_| ExpressionError::Overflow)?
    };

    Rational::from_decimal(int_part, frac_part, exponent)
        .map(Expr::number)
        .map_err(|error| match error {
            DecimalError::Parse(source) => ExpressionError::InvalidNumber {
                literal: token.spelling(),
                pos: token.pos,
                source,
            },
            DecimalError::Overflow => ExpressionError::Overflow,
        })
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        token: token.spelling(),
        pos: token.pos,
    }
}
