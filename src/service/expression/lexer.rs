//! Tokenizer for math expressions.
//!
//! Identifiers are split here: a run of letters that is not a known function or constant name
//! becomes one symbol per letter, so `xy` reads as `x y` and later as `x*y`. Digits directly
//! after a letter stay attached to it (`x1`).

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::expression::ExpressionError;

use super::expr::{Constant, Function};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Decimal literal split at the point; either side may be empty but not both.
    ///
    /// `exponent` holds the signed digits after `e`/`E` in scientific notation, empty if absent.
    Number {
        int_part: String,
        frac_part: String,
        exponent: String,
    },
    Symbol(String),
    Constant(Constant),
    Function(Function),
    /// Name with no built-in meaning directly followed by `(`, applied as an undefined function.
    FunctionName(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`
    Caret,
    LParen,
    RParen,
    Comma,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the input.
    pub pos: usize,
}

impl Token {
    /// Source-like spelling for error messages.
    pub fn spelling(&self) -> String {
        match &self.kind {
            TokenKind::Number {
                int_part,
                frac_part,
                exponent,
            } => {
                let mut spelling = int_part.clone();
                if !frac_part.is_empty() {
                    spelling.push('.');
                    spelling.push_str(frac_part);
                }
                if !exponent.is_empty() {
                    spelling.push('e');
                    spelling.push_str(exponent);
                }
                spelling
            }
            TokenKind::Symbol(name) | TokenKind::FunctionName(name) => name.clone(),
            TokenKind::Constant(constant) => constant.name().to_string(),
            TokenKind::Function(function) => function.name().to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::Caret => "^".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Comma => ",".to_string(),
        }
    }
}

/// Greek letter names kept whole instead of being split into letters.
const GREEK_LETTERS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

pub fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let kind = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut int_part = String::new();
                let mut frac_part = String::new();
                let mut seen_point = false;
                while let Some(&(_, c)) = chars.peek() {
                    match c {
                        '0'..='9' if seen_point => frac_part.push(c),
                        '0'..='9' => int_part.push(c),
                        '.' if !seen_point => seen_point = true,
                        _ => break,
                    }
                    chars.next();
                }
                if int_part.is_empty() && frac_part.is_empty() {
                    return Err(ExpressionError::UnexpectedChar { ch: '.', pos });
                }
                TokenKind::Number {
                    int_part,
                    frac_part,
                    exponent: scan_exponent(&mut chars),
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        word.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if is_function_name(&word, &chars) {
                    tokens.push(Token {
                        kind: TokenKind::FunctionName(word),
                        pos,
                    });
                } else {
                    tokens.extend(split_identifier(&word, pos));
                }
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => {
                chars.next();
                if let Some(&(_, '*')) = chars.peek() {
                    chars.next();
                    tokens.push(Token {
                        kind: TokenKind::Caret,
                        pos,
                    });
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Star,
                        pos,
                    });
                }
                continue;
            }
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            other => return Err(ExpressionError::UnexpectedChar { ch: other, pos }),
        };

        // Single-character tokens; multi-character ones `continue` above.
        if !matches!(kind, TokenKind::Number { .. }) {
            chars.next();
        }
        tokens.push(Token { kind, pos });
    }

    Ok(tokens)
}

/// Consumes `e5`, `E-3` or `e+12` directly after a number literal.
///
/// An `e` not followed by digits is left alone, so `2e` and `2ex` still lex as symbols.
fn scan_exponent(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut ahead = chars.clone();
    if !matches!(ahead.next(), Some((_, 'e' | 'E'))) {
        return String::new();
    }

    let mut exponent = String::new();
    if let Some(&(_, sign @ ('+' | '-'))) = ahead.peek() {
        exponent.push(sign);
        ahead.next();
    }
    if !matches!(ahead.peek(), Some((_, '0'..='9'))) {
        return String::new();
    }
    while let Some(&(_, digit @ '0'..='9')) = ahead.peek() {
        exponent.push(digit);
        ahead.next();
    }

    *chars = ahead;
    exponent
}

/// Whether an identifier names an undefined function: not a known name, and the next
/// non-whitespace character opens a parenthesis.
fn is_function_name(word: &str, rest: &Peekable<CharIndices<'_>>) -> bool {
    Function::from_name(word).is_none()
        && Constant::from_name(word).is_none()
        && rest
            .clone()
            .find(|(_, c)| !c.is_whitespace())
            .is_some_and(|(_, c)| c == '(')
}

/// Turns one identifier into symbol, constant or function tokens.
fn split_identifier(word: &str, pos: usize) -> Vec<Token> {
    if let Some(function) = Function::from_name(word) {
        return vec![Token {
            kind: TokenKind::Function(function),
            pos,
        }];
    }
    if let Some(constant) = Constant::from_name(word) {
        return vec![Token {
            kind: TokenKind::Constant(constant),
            pos,
        }];
    }
    if word.chars().count() == 1 || GREEK_LETTERS.contains(&word) || word.contains('_') {
        return vec![Token {
            kind: TokenKind::Symbol(word.to_string()),
            pos,
        }];
    }

    // Split into letters, keeping trailing digits with the letter before them.
    let mut tokens: Vec<Token> = Vec::new();
    for (offset, ch) in word.char_indices() {
        match tokens.last_mut() {
            Some(Token {
                kind: TokenKind::Symbol(name),
                ..
            }) if ch.is_numeric() => name.push(ch),
            _ => tokens.push(Token {
                kind: TokenKind::Symbol(ch.to_string()),
                pos: pos + offset,
            }),
        }
    }
    tokens
}
