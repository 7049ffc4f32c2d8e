//! Exact rational numbers with checked `i128` arithmetic.

use std::cmp::Ordering;
use std::fmt;

use crate::error::expression::ExpressionError;

type Result<T> = std::result::Result<T, ExpressionError>;

/// Reduced fraction with a positive denominator.
///
/// The derived ordering is structural (numerator, then denominator) and only serves to keep
/// canonical forms deterministic; use [`Rational::cmp_value`] for numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };
    pub const MINUS_ONE: Rational = Rational { num: -1, den: 1 };

    pub fn new(num: i128, den: i128) -> Result<Self> {
        if den == 0 {
            return Err(ExpressionError::DivisionByZero);
        }

        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs());
        let divisor = i128::try_from(divisor).map_err(|_| ExpressionError::Overflow)?;
        let (mut num, mut den) = (num / divisor, den / divisor);
        if den < 0 {
            num = num.checked_neg().ok_or(ExpressionError::Overflow)?;
            den = den.checked_neg().ok_or(ExpressionError::Overflow)?;
        }

        Ok(Self { num, den })
    }

    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Exact value of a decimal literal such as `12.375` or `1.5e3`.
    ///
    /// # Arguments
    /// - `int_part` - Digits before the point, may be empty
    /// - `frac_part` - Digits after the point, may be empty
    /// - `exponent` - Power of ten the literal is scaled by
    pub fn from_decimal(
        int_part: &str,
        frac_part: &str,
        exponent: i64,
    ) -> std::result::Result<Self, DecimalError> {
        let digits = format!("{}{}", int_part, frac_part);
        let num = if digits.is_empty() {
            0
        } else {
            digits.parse::<i128>().map_err(DecimalError::Parse)?
        };
        if num == 0 {
            return Ok(Self::ZERO);
        }

        let frac_len = i64::try_from(frac_part.len()).map_err(|_| DecimalError::Overflow)?;
        let scale = exponent
            .checked_sub(frac_len)
            .ok_or(DecimalError::Overflow)?;
        let power = u32::try_from(scale.unsigned_abs())
            .ok()
            .and_then(|power| 10i128.checked_pow(power))
            .ok_or(DecimalError::Overflow)?;

        let (num, den) = if scale >= 0 {
            (num.checked_mul(power).ok_or(DecimalError::Overflow)?, 1)
        } else {
            (num, power)
        };
        Self::new(num, den).map_err(|_| DecimalError::Overflow)
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> i128 {
        self.num.div_euclid(self.den)
    }

    pub fn numer(&self) -> i128 {
        self.num
    }

    pub fn denom(&self) -> i128 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn add(self, other: Self) -> Result<Self> {
        let num = self
            .num
            .checked_mul(other.den)
            .and_then(|a| other.num.checked_mul(self.den).and_then(|b| a.checked_add(b)))
            .ok_or(ExpressionError::Overflow)?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(ExpressionError::Overflow)?;
        Self::new(num, den)
    }

    pub fn mul(self, other: Self) -> Result<Self> {
        // Cross-reduce first to keep intermediates small.
        let g1 = gcd(self.num.unsigned_abs(), other.den.unsigned_abs()).max(1) as i128;
        let g2 = gcd(other.num.unsigned_abs(), self.den.unsigned_abs()).max(1) as i128;
        let num = (self.num / g1)
            .checked_mul(other.num / g2)
            .ok_or(ExpressionError::Overflow)?;
        let den = (self.den / g2)
            .checked_mul(other.den / g1)
            .ok_or(ExpressionError::Overflow)?;
        Self::new(num, den)
    }

    pub fn neg(self) -> Result<Self> {
        let num = self.num.checked_neg().ok_or(ExpressionError::Overflow)?;
        Ok(Self { num, den: self.den })
    }

    pub fn abs(self) -> Result<Self> {
        if self.is_negative() {
            self.neg()
        } else {
            Ok(self)
        }
    }

    pub fn recip(self) -> Result<Self> {
        Self::new(self.den, self.num)
    }

    /// Integer power by repeated squaring.
    pub fn pow(self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            if self.is_zero() {
                return Err(ExpressionError::DivisionByZero);
            }
            return self.recip()?.pow_unsigned(exponent.unsigned_abs());
        }
        self.pow_unsigned(exponent.unsigned_abs())
    }

    fn pow_unsigned(self, mut exponent: u64) -> Result<Self> {
        let mut result = Self::ONE;
        let mut base = self;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.mul(base)?;
            }
        }
        Ok(result)
    }

    /// Exact `q`-th root, if both numerator and denominator are perfect powers.
    pub fn root(self, q: u32) -> Option<Self> {
        if q == 0 || (self.is_negative() && q % 2 == 0) {
            return None;
        }
        let num = integer_root(self.num, q)?;
        let den = integer_root(self.den, q)?;
        Some(Self { num, den })
    }

    /// Numeric comparison.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (
            self.num.checked_mul(other.den),
            other.num.checked_mul(self.den),
        ) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => (self.num as f64 / self.den as f64)
                .partial_cmp(&(other.num as f64 / other.den as f64))
                .unwrap_or(Ordering::Equal),
        }
    }

    /// The value as a machine integer, when it is one and fits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            i64::try_from(self.num).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Why a decimal literal could not be converted.
#[derive(Debug)]
pub enum DecimalError {
    Parse(std::num::ParseIntError),
    Overflow,
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Exact integer `q`-th root of `n`, sign preserved for odd roots.
fn integer_root(n: i128, q: u32) -> Option<i128> {
    if q == 1 || n == 0 || n == 1 {
        return Some(n);
    }
    let magnitude = n.unsigned_abs();
    let guess = (magnitude as f64).powf(1.0 / q as f64).round() as u128;

    // The float estimate can be off by one for large inputs.
    let root = [guess.saturating_sub(1), guess, guess + 1]
        .into_iter()
        .find(|candidate| candidate.checked_pow(q) == Some(magnitude))?;
    let root = i128::try_from(root).ok()?;

    Some(if n < 0 { -root } else { root })
}
