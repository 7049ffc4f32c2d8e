use crate::error::expression::ExpressionError;
use crate::service::expression::render;

/// Tests rendering of a quadratic.
///
/// Expected: raised exponent, multiplication dot, descending degree
#[test]
fn renders_quadratic() {
    assert_eq!(render("x^2+2x+1").unwrap(), " 2\nx  + 2⋅x + 1");
}

/// Tests rendering of collected terms.
///
/// Expected: 5⋅x
#[test]
fn renders_collected_terms() {
    assert_eq!(render("2x + 3x").unwrap(), "5⋅x");
}

/// Tests rendering of a decimal coefficient.
///
/// Expected: stacked fraction x over 2
#[test]
fn renders_decimal_coefficient() {
    assert_eq!(render("0.5x").unwrap(), "x\n─\n2");
}

/// Tests rendering of a plain rational result.
///
/// Expected: inline 1/2
#[test]
fn renders_rational_result() {
    assert_eq!(render("1/3 + 1/6").unwrap(), "1/2");
}

/// Tests rendering of implicit function application.
///
/// Expected: sin(x)
#[test]
fn renders_function_application() {
    assert_eq!(render("sin x").unwrap(), "sin(x)");
    assert_eq!(render("2 pi").unwrap(), "2⋅π");
}

/// Tests rendering of a split multi-letter symbol.
///
/// Expected: x⋅y
#[test]
fn renders_split_symbols() {
    assert_eq!(render("xy").unwrap(), "x⋅y");
}

/// Tests rendering of a quotient of symbols.
///
/// Expected: numerator over denominator
#[test]
fn renders_quotient() {
    assert_eq!(render("x/y").unwrap(), "x\n─\ny");
    assert_eq!(render("2x/(3y)").unwrap(), "2⋅x\n───\n3⋅y");
}

/// Tests rendering of a square root of a fraction.
///
/// Expected: rationalized to √3 over 3
#[test]
fn renders_rationalized_root() {
    assert_eq!(render("(1/3)^(1/2)").unwrap(), "√3\n──\n3");
    assert_eq!(render("sqrt(1/3)").unwrap(), "√3\n──\n3");
    assert_eq!(render("sqrt(4/9)").unwrap(), "2/3");
    assert_eq!(render("2^(3/2)").unwrap(), "2⋅√2");
}

/// Tests rendering of scientific notation literals.
///
/// Expected: plain integers
#[test]
fn renders_scientific_notation() {
    assert_eq!(render("1e5").unwrap(), "100000");
    assert_eq!(render("1.5e3").unwrap(), "1500");
}

/// Tests rendering of an undefined function.
///
/// Expected: f(x) rather than f⋅x
#[test]
fn renders_undefined_function() {
    assert_eq!(render("f(x)").unwrap(), "f(x)");
    assert_eq!(render("2 g(x, y)").unwrap(), "2⋅g(x, y)");
}

/// Tests that errors pass through rendering unchanged.
///
/// Expected: Err(UnmatchedParen)
#[test]
fn propagates_errors() {
    assert!(matches!(
        render("x)"),
        Err(ExpressionError::UnmatchedParen { pos: 1 })
    ));
}
