//! Two-dimensional Unicode rendering of expressions.
//!
//! Expressions are laid out as rectangular [`Block`]s of text that are glued together
//! horizontally along a shared baseline, stacked into fractions, or raised as exponents.

use super::{
    expr::{Constant, Expr, Function},
    rational::Rational,
};

const MULTIPLY: &str = "⋅";
const FRACTION_BAR: char = '─';

/// Rectangle of text; every line has the same width in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    lines: Vec<String>,
    /// Line the surrounding operators align with.
    baseline: usize,
}

impl Block {
    fn new(lines: Vec<String>, baseline: usize) -> Self {
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = lines.into_iter().map(|line| pad_right(line, width)).collect();
        Self { lines, baseline }
    }

    fn text(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()], 0)
    }

    fn width(&self) -> usize {
        self.lines.first().map(|line| line.chars().count()).unwrap_or(0)
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    fn below(&self) -> usize {
        self.height() - self.baseline - 1
    }

    /// Places blocks side by side with their baselines aligned.
    fn hcat(blocks: Vec<Block>) -> Self {
        let above = blocks.iter().map(|block| block.baseline).max().unwrap_or(0);
        let below = blocks.iter().map(Block::below).max().unwrap_or(0);
        let mut lines = vec![String::new(); above + below + 1];

        for block in blocks {
            let blank = " ".repeat(block.width());
            let top = above - block.baseline;
            for (row, line) in lines.iter_mut().enumerate() {
                match row.checked_sub(top).and_then(|index| block.lines.get(index)) {
                    Some(text) => line.push_str(text),
                    None => line.push_str(&blank),
                }
            }
        }

        Self::new(lines, above)
    }

    /// Numerator over denominator, both centered on a bar as wide as the wider one.
    fn fraction(numerator: Block, denominator: Block) -> Self {
        let width = numerator.width().max(denominator.width());
        let baseline = numerator.height();
        let mut lines: Vec<String> = numerator
            .lines
            .into_iter()
            .map(|line| center(line, width))
            .collect();
        lines.push(FRACTION_BAR.to_string().repeat(width));
        lines.extend(denominator.lines.into_iter().map(|line| center(line, width)));

        Self::new(lines, baseline)
    }

    /// `self` with `exponent` raised to its upper right.
    fn superscript(self, exponent: Block) -> Self {
        let base_width = self.width();
        let exponent_width = exponent.width();
        let baseline = exponent.height() + self.baseline;

        let mut lines: Vec<String> = exponent
            .lines
            .into_iter()
            .map(|line| format!("{}{}", " ".repeat(base_width), line))
            .collect();
        lines.extend(
            self.lines
                .into_iter()
                .map(|line| format!("{}{}", line, " ".repeat(exponent_width))),
        );

        Self::new(lines, baseline)
    }

    /// Wraps the block in delimiters that grow with its height.
    fn enclosed(self, left: [&str; 4], right: [&str; 4]) -> Self {
        let height = self.height();
        let pick = |pieces: [&str; 4], row: usize| -> String {
            let [single, top, middle, bottom] = pieces;
            match row {
                _ if height == 1 => single,
                0 => top,
                r if r + 1 == height => bottom,
                _ => middle,
            }
            .to_string()
        };

        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| format!("{}{}{}", pick(left, row), line, pick(right, row)))
            .collect();

        Self::new(lines, self.baseline)
    }

    fn parens(self) -> Self {
        self.enclosed(["(", "⎛", "⎜", "⎝"], [")", "⎞", "⎟", "⎠"])
    }

    fn bars(self) -> Self {
        self.enclosed(["│"; 4], ["│"; 4])
    }

    fn into_string(self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders an expression as multi-line Unicode text.
///
/// Trailing spaces are stripped from every line.
pub fn pretty(expr: &Expr) -> String {
    render(expr).into_string()
}

fn render(expr: &Expr) -> Block {
    match expr {
        Expr::Number(value) => Block::text(value.to_string()),
        Expr::Symbol(name) => Block::text(symbol_name(name)),
        Expr::Constant(Constant::Pi) => Block::text("π"),
        Expr::Constant(Constant::E) => Block::text("ℯ"),
        Expr::Add(terms) => render_sum(terms),
        Expr::Mul(_) | Expr::Pow(..) => {
            let (coefficient, body) = expr.clone().split_coefficient();
            render_term(coefficient, &body)
        }
        Expr::Call(Function::Abs, argument) => render(argument).bars(),
        Expr::Call(function, argument) => Block::hcat(vec![
            Block::text(function.name()),
            render(argument).parens(),
        ]),
        Expr::Apply(name, arguments) => {
            let mut blocks = Vec::with_capacity(arguments.len() * 2);
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    blocks.push(Block::text(", "));
                }
                blocks.push(render(argument));
            }
            Block::hcat(vec![
                Block::text(symbol_name(name)),
                Block::hcat(blocks).parens(),
            ])
        }
    }
}

fn render_sum(terms: &[Expr]) -> Block {
    let mut blocks = Vec::with_capacity(terms.len() * 2);

    for (index, term) in Expr::display_terms(terms).into_iter().enumerate() {
        let (coefficient, body) = term.clone().split_coefficient();
        let negative = coefficient.is_negative();
        let sign = match (index, negative) {
            (0, true) => "-",
            (0, false) => "",
            (_, true) => " - ",
            (_, false) => " + ",
        };
        if !sign.is_empty() {
            blocks.push(Block::text(sign));
        }

        let magnitude = if negative {
            coefficient.neg().unwrap_or(coefficient)
        } else {
            coefficient
        };
        blocks.push(render_term(magnitude, &body));
    }

    Block::hcat(blocks)
}

/// Renders `coefficient * body` with negative powers moved below a fraction bar.
fn render_term(coefficient: Rational, body: &Expr) -> Block {
    if body == &Expr::integer(1) {
        if coefficient.is_integer() {
            return Block::text(coefficient.to_string());
        }
        let fraction = Block::fraction(
            Block::text(coefficient.numer().unsigned_abs().to_string()),
            Block::text(coefficient.denom().to_string()),
        );
        return if coefficient.is_negative() {
            Block::hcat(vec![Block::text("-"), fraction])
        } else {
            fraction
        };
    }
    if let (true, Expr::Pow(base, exponent)) = (coefficient.is_one(), body) {
        if let Some(block) = render_power(base, exponent) {
            return block;
        }
    }

    let factors: Vec<&Expr> = match body {
        Expr::Mul(factors) => factors.iter().collect(),
        other => vec![other],
    };

    let mut numerator: Vec<Expr> = Vec::new();
    let mut denominator: Vec<Expr> = Vec::new();
    let magnitude = coefficient.numer().unsigned_abs();
    if magnitude != 1 {
        numerator.push(Expr::Number(Rational::integer(magnitude as i128)));
    }
    if !coefficient.is_integer() {
        denominator.push(Expr::Number(Rational::integer(coefficient.denom())));
    }

    for factor in factors {
        match factor {
            Expr::Pow(base, exponent) => match exponent.as_number() {
                Some(power) if power.is_negative() => match power.neg() {
                    Ok(positive) if positive.is_one() => denominator.push((**base).clone()),
                    Ok(positive) => denominator.push(Expr::Pow(
                        base.clone(),
                        Box::new(Expr::Number(positive)),
                    )),
                    Err(_) => numerator.push(factor.clone()),
                },
                _ => numerator.push(factor.clone()),
            },
            other => numerator.push(other.clone()),
        }
    }

    let product = if denominator.is_empty() {
        render_product(&numerator)
    } else {
        Block::fraction(render_product(&numerator), render_product(&denominator))
    };

    if coefficient.is_negative() {
        Block::hcat(vec![Block::text("-"), product])
    } else {
        product
    }
}

/// Factors joined by the multiplication dot; an empty product renders as `1`.
fn render_product(factors: &[Expr]) -> Block {
    if factors.is_empty() {
        return Block::text("1");
    }

    let mut blocks = Vec::with_capacity(factors.len() * 2);
    for (index, factor) in factors.iter().enumerate() {
        if index > 0 {
            blocks.push(Block::text(MULTIPLY));
        }
        let block = render(factor);
        blocks.push(match factor {
            Expr::Add(_) if factors.len() > 1 => block.parens(),
            _ => block,
        });
    }
    Block::hcat(blocks)
}

/// Positive powers; `None` when the power belongs under a fraction bar instead.
fn render_power(base: &Expr, exponent: &Expr) -> Option<Block> {
    let power = exponent.as_number();
    if power.is_some_and(|power| power.is_negative()) {
        return None;
    }
    if power == Rational::new(1, 2).ok() {
        return Some(render_sqrt(base));
    }

    let base_block = match base {
        Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => render(base).parens(),
        Expr::Number(value) if value.is_negative() || !value.is_integer() => {
            render(base).parens()
        }
        _ => render(base),
    };
    Some(base_block.superscript(render(exponent)))
}

fn render_sqrt(radicand: &Expr) -> Block {
    let inner = render(radicand);
    // Bare radical sign for atoms only.
    match radicand {
        Expr::Number(value) if value.is_integer() && !value.is_negative() => {
            Block::hcat(vec![Block::text("√"), inner])
        }
        Expr::Symbol(_) | Expr::Constant(_) => Block::hcat(vec![Block::text("√"), inner]),
        _ if inner.height() == 1 => {
            let width = inner.width();
            let line = inner.lines.into_iter().next().unwrap_or_default();
            Block::new(
                vec![
                    format!("  {}", "_".repeat(width + 2)),
                    format!("╲╱ {} ", line),
                ],
                1,
            )
        }
        _ => Block::hcat(vec![Block::text("√"), inner.parens()]),
    }
}

/// Greek letter names are shown as the letter itself.
fn symbol_name(name: &str) -> String {
    let letter = match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "omicron" => "ο",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        other => other,
    };
    letter.to_string()
}

fn pad_right(line: String, width: usize) -> String {
    let missing = width.saturating_sub(line.chars().count());
    if missing == 0 {
        line
    } else {
        format!("{}{}", line, " ".repeat(missing))
    }
}

fn center(line: String, width: usize) -> String {
    let missing = width.saturating_sub(line.chars().count());
    let left = missing / 2;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(missing - left))
}
