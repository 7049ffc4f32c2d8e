//! Symbolic expressions in canonical form.
//!
//! Expressions are only ever built through [`Expr::add`], [`Expr::mul`], [`Expr::pow`] and
//! [`Expr::call`], which apply automatic simplification as they go:
//!
//! - sums and products are flattened and their rational constants folded
//! - like terms are collected (`2x + 3x` is `5x`)
//! - equal bases in a product combine their exponents (`x*x` is `x^2`)
//! - a rational coefficient is distributed over a single sum (`2(x + 1)` is `2x + 2`)
//! - powers of rationals are evaluated exactly when the result is rational
//!
//! Products of sums are never expanded, so `(x + 1)^2` stays as written.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::expression::ExpressionError;

use super::rational::Rational;

type Result<T> = std::result::Result<T, ExpressionError>;

/// Largest integer exponent applied to a rational or distributed over a product.
const MAX_EXPONENT: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "exp" => Some(Self::Exp),
            "log" | "ln" => Some(Self::Log),
            "sqrt" => Some(Self::Sqrt),
            "abs" | "Abs" => Some(Self::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "Abs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "E",
        }
    }
}

/// A simplified symbolic expression.
///
/// Invariants maintained by the constructors:
/// - `Add` has at least two terms, none of them `Add`, at most one `Number` (non-zero)
/// - `Mul` has at least two factors, none of them `Mul`, at most one leading `Number`
///   (not zero or one)
/// - `Pow` exponent is never `0` or `1`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    Number(Rational),
    Symbol(String),
    Constant(Constant),
    Add(Vec<Expr>),
    Mul(Vec<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>),
    /// Function without known properties, kept as written (`f(x, y)`).
    Apply(String, Vec<Expr>),
}

impl Expr {
    pub fn number(value: Rational) -> Self {
        Expr::Number(value)
    }

    pub fn integer(value: i128) -> Self {
        Expr::Number(Rational::integer(value))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn as_number(&self) -> Option<Rational> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.as_number().is_some_and(|value| value.is_zero())
    }

    fn is_one(&self) -> bool {
        self.as_number().is_some_and(|value| value.is_one())
    }

    /// Sum of `terms`.
    pub fn add(terms: Vec<Expr>) -> Result<Expr> {
        let mut constant = Rational::ZERO;
        // Term without its coefficient -> summed coefficient
        let mut collected: BTreeMap<Expr, Rational> = BTreeMap::new();

        for term in flatten(terms, |expr| matches!(expr, Expr::Add(_))) {
            match term {
                Expr::Number(value) => constant = constant.add(value)?,
                term => {
                    let (coefficient, body) = term.split_coefficient();
                    let entry = collected.entry(body).or_insert(Rational::ZERO);
                    *entry = entry.add(coefficient)?;
                }
            }
        }

        let mut result: Vec<Expr> = Vec::with_capacity(collected.len() + 1);
        for (body, coefficient) in collected {
            if !coefficient.is_zero() {
                result.push(body.with_coefficient(coefficient));
            }
        }
        if !constant.is_zero() {
            result.push(Expr::Number(constant));
        }

        Ok(match result.len() {
            0 => Expr::Number(Rational::ZERO),
            1 => result.remove(0),
            _ => {
                result.sort();
                Expr::Add(result)
            }
        })
    }

    /// Product of `factors`.
    pub fn mul(factors: Vec<Expr>) -> Result<Expr> {
        let mut coefficient = Rational::ONE;
        // Base -> exponents to be summed
        let mut bases: BTreeMap<Expr, Vec<Expr>> = BTreeMap::new();

        for factor in flatten(factors, |expr| matches!(expr, Expr::Mul(_))) {
            match factor {
                Expr::Number(value) => coefficient = coefficient.mul(value)?,
                Expr::Pow(base, exponent) => bases.entry(*base).or_default().push(*exponent),
                factor => bases.entry(factor).or_default().push(Expr::integer(1)),
            }
        }

        if coefficient.is_zero() {
            return Ok(Expr::Number(Rational::ZERO));
        }

        let mut rest: Vec<Expr> = Vec::with_capacity(bases.len());
        let mut needs_another_pass = false;
        for (base, exponents) in bases {
            let exponent = if exponents.len() == 1 {
                exponents.into_iter().next().unwrap_or(Expr::integer(1))
            } else {
                Expr::add(exponents)?
            };
            match Expr::pow(base, exponent)? {
                Expr::Number(value) => coefficient = coefficient.mul(value)?,
                factor @ Expr::Mul(_) => {
                    needs_another_pass = true;
                    rest.push(factor);
                }
                factor => rest.push(factor),
            }
        }

        if needs_another_pass {
            rest.push(Expr::Number(coefficient));
            return Expr::mul(rest);
        }
        if coefficient.is_zero() {
            return Ok(Expr::Number(Rational::ZERO));
        }

        if let [Expr::Add(terms)] = rest.as_slice() {
            if !coefficient.is_one() {
                let terms = terms
                    .iter()
                    .cloned()
                    .map(|term| Expr::mul(vec![Expr::Number(coefficient), term]))
                    .collect::<Result<Vec<_>>>()?;
                return Expr::add(terms);
            }
        }

        if rest.is_empty() {
            return Ok(Expr::Number(coefficient));
        }
        rest.sort();
        Ok(Expr::Number(coefficient).prepend_to(rest))
    }

    /// `base` raised to `exponent`.
    pub fn pow(base: Expr, exponent: Expr) -> Result<Expr> {
        if exponent.is_zero() {
            return Ok(Expr::integer(1));
        }
        if exponent.is_one() {
            return Ok(base);
        }
        if base.is_one() {
            return Ok(Expr::integer(1));
        }

        match (base, exponent.as_number()) {
            (Expr::Number(value), Some(power)) => number_power(value, power),
            (Expr::Pow(inner_base, inner_exponent), Some(power)) if power.is_integer() => {
                let exponent = Expr::mul(vec![*inner_exponent, Expr::Number(power)])?;
                Expr::pow(*inner_base, exponent)
            }
            (Expr::Mul(factors), Some(power)) if power.is_integer() => {
                checked_exponent(power)?;
                let factors = factors
                    .into_iter()
                    .map(|factor| Expr::pow(factor, Expr::Number(power)))
                    .collect::<Result<Vec<_>>>()?;
                Expr::mul(factors)
            }
            (base, _) => Ok(Expr::pow_unchecked(base, exponent)),
        }
    }

    /// Applies a function, evaluating the special values that have exact results.
    pub fn call(function: Function, argument: Expr) -> Result<Expr> {
        match function {
            Function::Sqrt => return Expr::pow(argument, Expr::Number(Rational::new(1, 2)?)),
            Function::Exp => return Expr::pow(Expr::Constant(Constant::E), argument),
            _ => {}
        }

        let value = argument.as_number();
        let simplified = match (function, &argument, value) {
            (Function::Sin | Function::Tan, _, Some(v)) if v.is_zero() => Some(Expr::integer(0)),
            (Function::Sin | Function::Tan, Expr::Constant(Constant::Pi), _) => {
                Some(Expr::integer(0))
            }
            (Function::Cos, _, Some(v)) if v.is_zero() => Some(Expr::integer(1)),
            (Function::Cos, Expr::Constant(Constant::Pi), _) => Some(Expr::integer(-1)),
            (Function::Log, _, Some(v)) if v.is_one() => Some(Expr::integer(0)),
            (Function::Log, _, Some(v)) if v.is_zero() => {
                return Err(ExpressionError::Undefined("log(0)"))
            }
            (Function::Log, Expr::Constant(Constant::E), _) => Some(Expr::integer(1)),
            (Function::Log, Expr::Pow(base, exponent), _)
                if **base == Expr::Constant(Constant::E) =>
            {
                Some((**exponent).clone())
            }
            (Function::Abs, _, Some(v)) => Some(Expr::Number(v.abs()?)),
            _ => None,
        };

        Ok(simplified.unwrap_or_else(|| Expr::Call(function, Box::new(argument))))
    }

    pub fn apply(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::Apply(name.into(), arguments)
    }

    pub fn neg(expr: Expr) -> Result<Expr> {
        Expr::mul(vec![Expr::integer(-1), expr])
    }

    pub fn sub(left: Expr, right: Expr) -> Result<Expr> {
        Expr::add(vec![left, Expr::neg(right)?])
    }

    pub fn div(left: Expr, right: Expr) -> Result<Expr> {
        if right.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        Expr::mul(vec![left, Expr::pow(right, Expr::integer(-1))?])
    }

    fn pow_unchecked(base: Expr, exponent: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    /// Splits off the rational coefficient of a term.
    ///
    /// # Returns
    /// - `(coefficient, body)` - `body` never carries a numeric factor
    pub fn split_coefficient(self) -> (Rational, Expr) {
        match self {
            Expr::Number(value) => (value, Expr::integer(1)),
            Expr::Mul(mut factors) => match factors.first().and_then(Expr::as_number) {
                Some(coefficient) => {
                    factors.remove(0);
                    let body = if factors.len() == 1 {
                        factors.remove(0)
                    } else {
                        Expr::Mul(factors)
                    };
                    (coefficient, body)
                }
                None => (Rational::ONE, Expr::Mul(factors)),
            },
            other => (Rational::ONE, other),
        }
    }

    /// Inverse of `split_coefficient`, without further simplification.
    pub fn with_coefficient(self, coefficient: Rational) -> Expr {
        if coefficient.is_one() {
            return self;
        }
        match self {
            body if body.is_one() => Expr::Number(coefficient),
            Expr::Mul(factors) => Expr::Number(coefficient).prepend_to(factors),
            body => Expr::Mul(vec![Expr::Number(coefficient), body]),
        }
    }

    /// `Mul` of a coefficient followed by already sorted factors; drops a unit coefficient.
    fn prepend_to(self, mut factors: Vec<Expr>) -> Expr {
        if !self.is_one() {
            factors.insert(0, self);
        }
        if factors.len() == 1 {
            factors.remove(0)
        } else {
            Expr::Mul(factors)
        }
    }

    /// Polynomial degree used to order the terms of a sum for display.
    ///
    /// Symbols count 1, numbers and function calls 0, powers multiply by a rational exponent.
    pub fn degree(&self) -> Rational {
        match self {
            Expr::Number(_) | Expr::Constant(_) | Expr::Call(..) | Expr::Apply(..) => {
                Rational::ZERO
            }
            Expr::Symbol(_) => Rational::ONE,
            Expr::Add(terms) => terms
                .iter()
                .map(Expr::degree)
                .max_by(|a, b| a.cmp_value(b))
                .unwrap_or(Rational::ZERO),
            Expr::Mul(factors) => factors
                .iter()
                .map(Expr::degree)
                .try_fold(Rational::ZERO, |sum, degree| sum.add(degree))
                .unwrap_or(Rational::ZERO),
            Expr::Pow(base, exponent) => match exponent.as_number() {
                Some(power) => base.degree().mul(power).unwrap_or(Rational::ZERO),
                None => Rational::ZERO,
            },
        }
    }

    /// Terms of a sum in display order: descending degree, then alphabetical, constants last.
    pub fn display_terms(terms: &[Expr]) -> Vec<&Expr> {
        let mut ordered: Vec<&Expr> = terms.iter().collect();
        ordered.sort_by(|a, b| compare_for_display(a, b));
        ordered
    }
}

fn compare_for_display(a: &Expr, b: &Expr) -> Ordering {
    let is_number = |expr: &Expr| matches!(expr, Expr::Number(_));
    is_number(a)
        .cmp(&is_number(b))
        .then_with(|| b.degree().cmp_value(&a.degree()))
        .then_with(|| {
            let (_, a_body) = a.clone().split_coefficient();
            let (_, b_body) = b.clone().split_coefficient();
            a_body.to_string().cmp(&b_body.to_string())
        })
        .then_with(|| a.cmp(b))
}

/// Flattens nested sums or products into one operand list.
fn flatten(operands: Vec<Expr>, is_nested: impl Fn(&Expr) -> bool) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(operands.len());
    for operand in operands {
        if is_nested(&operand) {
            match operand {
                Expr::Add(inner) | Expr::Mul(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        } else {
            flat.push(operand);
        }
    }
    flat
}

fn checked_exponent(power: Rational) -> Result<i64> {
    power
        .to_i64()
        .filter(|exponent| exponent.unsigned_abs() <= MAX_EXPONENT.unsigned_abs())
        .ok_or_else(|| ExpressionError::ExponentTooLarge(power.to_string()))
}

/// Rational raised to a rational power; exact when the result is rational.
///
/// Otherwise the result is rationalized: the denominator of the base moves into the
/// coefficient (`(1/3)^(1/2)` is `3^(1/2)/3`) and the integer part of the exponent is split
/// off (`2^(3/2)` is `2*2^(1/2)`), leaving a radical with an exponent strictly between 0 and 1.
fn number_power(value: Rational, power: Rational) -> Result<Expr> {
    if value.is_zero() {
        return if power.is_negative() {
            Err(ExpressionError::DivisionByZero)
        } else {
            Ok(Expr::integer(0))
        };
    }
    if value == Rational::MINUS_ONE && power.is_integer() {
        let odd = power.numer() % 2 != 0;
        return Ok(Expr::integer(if odd { -1 } else { 1 }));
    }

    if power.is_integer() {
        return Ok(Expr::Number(value.pow(checked_exponent(power)?)?));
    }

    // p/q: exact when value is a non-negative perfect q-th power. Negative bases keep the
    // principal root symbolic.
    if value.is_negative() {
        return Ok(Expr::pow_unchecked(Expr::Number(value), Expr::Number(power)));
    }
    let root = u32::try_from(power.denom())
        .ok()
        .and_then(|q| value.root(q));
    if let Some(root) = root {
        return Ok(Expr::Number(
            root.pow(checked_exponent(Rational::integer(power.numer()))?)?,
        ));
    }

    if !value.is_integer() {
        return Expr::mul(vec![
            number_power(Rational::integer(value.numer()), power)?,
            number_power(Rational::integer(value.denom()), power.neg()?)?,
        ]);
    }

    let whole = power.floor();
    if whole == 0 {
        return Ok(Expr::pow_unchecked(Expr::Number(value), Expr::Number(power)));
    }
    let whole = Rational::integer(whole);
    let fraction = power.add(whole.neg()?)?;
    Expr::mul(vec![
        Expr::Number(value.pow(checked_exponent(whole)?)?),
        Expr::pow_unchecked(Expr::Number(value), Expr::Number(fraction)),
    ])
}

/// Linear form, close to how the expression would be typed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Constant(constant) => write!(f, "{}", constant.name()),
            Expr::Add(terms) => {
                for (index, term) in Expr::display_terms(terms).into_iter().enumerate() {
                    let (coefficient, body) = term.clone().split_coefficient();
                    let negative = coefficient.is_negative();
                    let shown = if negative {
                        body.with_coefficient(coefficient.neg().map_err(|_| fmt::Error)?)
                    } else {
                        term.clone()
                    };
                    match (index, negative) {
                        (0, true) => write!(f, "-{}", shown)?,
                        (0, false) => write!(f, "{}", shown)?,
                        (_, true) => write!(f, " - {}", shown)?,
                        (_, false) => write!(f, " + {}", shown)?,
                    }
                }
                Ok(())
            }
            Expr::Mul(factors) => {
                let parts: Vec<String> = factors
                    .iter()
                    .map(|factor| match factor {
                        Expr::Add(_) => format!("({})", factor),
                        Expr::Number(value) if !value.is_integer() => format!("({})", value),
                        _ => factor.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join("*"))
            }
            Expr::Pow(base, exponent) => {
                let base = match **base {
                    Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => format!("({})", base),
                    Expr::Number(value) if value.is_negative() || !value.is_integer() => {
                        format!("({})", base)
                    }
                    _ => base.to_string(),
                };
                let exponent = match **exponent {
                    Expr::Symbol(_) | Expr::Constant(_) | Expr::Call(..) | Expr::Apply(..) => {
                        exponent.to_string()
                    }
                    Expr::Number(value) if value.is_integer() && !value.is_negative() => {
                        exponent.to_string()
                    }
                    _ => format!("({})", exponent),
                };
                write!(f, "{}**{}", base, exponent)
            }
            Expr::Call(function, argument) => write!(f, "{}({})", function.name(), argument),
            Expr::Apply(name, arguments) => {
                let arguments: Vec<String> = arguments.iter().map(Expr::to_string).collect();
                write!(f, "{}({})", name, arguments.join(", "))
            }
        }
    }
}
