//! Random expression generation.
//!
//! Builds a random expression tree with a bounded operator budget and
//! renders it as it goes, enforcing the elementary-arithmetic rules: no
//! negative intermediate results, no zero divisors, and (in fraction
//! mode) no division that collapses to a whole number. Every accepted
//! expression, leaves included, leaves its canonical key in the
//! caller's seen set, so a batch never repeats a problem up to
//! commutative rearrangement.
//!
//! The RNG is injected so batches replay deterministically from a seed.

use std::collections::HashSet;
use std::fmt;

use num_rational::Rational64;
use num_traits::Zero;
use rand::Rng;

use crate::canonical::canonicalize;
use crate::error::{Error, Result};
use crate::value::{self, Value};

/// Operator budget of a top-level problem.
pub const MAX_OPERATORS: u32 = 3;

/// Retry bound applied independently at every recursion level.
const MAX_RETRIES: usize = 100;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// The rendered glyph.
    pub fn glyph(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '×',
            Op::Div => '÷',
        }
    }

    /// Whether operand order is irrelevant to the result.
    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    /// Apply the operator to two exact values.
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            Op::Add => Ok(lhs + rhs),
            Op::Sub => Ok(lhs - rhs),
            Op::Mul => Ok(lhs * rhs),
            Op::Div => value::checked_div(lhs, rhs),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A rendered expression paired with its exact value.
///
/// Immutable once produced; no tree is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub text: String,
    pub value: Value,
}

/// Generate one random expression with at most `remaining_ops` binary
/// operators, deduplicated against `seen`.
///
/// Fails with [`Error::GenerationExhausted`] once the retry budget runs
/// out at any recursion level; an exhausted child propagates instead of
/// being absorbed by the parent's own retries.
pub fn generate_expression<R: Rng>(
    rng: &mut R,
    remaining_ops: u32,
    range: i64,
    allow_fraction: bool,
    seen: &mut HashSet<String>,
) -> Result<Expression> {
    if range < 4 {
        return Err(Error::InvalidInput(format!(
            "numeric range must be at least 4, got {range}"
        )));
    }

    for _ in 0..MAX_RETRIES {
        if remaining_ops == 0 {
            let value = draw_leaf(rng, range, allow_fraction);
            let text = render_leaf(&value);
            // A leaf is its own canonical key.
            if seen.contains(&text) {
                continue;
            }
            seen.insert(text.clone());
            return Ok(Expression { text, value });
        }

        let op = Op::ALL[rng.gen_range(0..Op::ALL.len())];
        let left_ops = rng.gen_range(0..remaining_ops);
        let right_ops = remaining_ops - 1 - left_ops;

        let mut left = generate_expression(rng, left_ops, range, allow_fraction, seen)?;
        let mut right = generate_expression(rng, right_ops, range, allow_fraction, seen)?;

        // Subtraction must not go negative: larger operand first.
        if op == Op::Sub && left.value < right.value {
            std::mem::swap(&mut left, &mut right);
        }

        // Division: redraw the divisor while it is zero or, in fraction
        // mode, while the quotient would collapse to a whole number.
        if op == Op::Div {
            let mut accepted = false;
            for _ in 0..MAX_RETRIES {
                if divisor_acceptable(left.value, right.value, allow_fraction) {
                    accepted = true;
                    break;
                }
                right = generate_expression(rng, right_ops, range, allow_fraction, seen)?;
            }
            if !accepted {
                continue;
            }
        }

        // Commutative operators render the smaller operand first.
        if op.is_commutative() && left.value > right.value {
            std::mem::swap(&mut left, &mut right);
        }

        // Every composite is parenthesized, so the rendered text
        // re-parses under ordinary precedence to exactly the value
        // recorded with it.
        let text = format!("({} {} {})", left.text, op, right.text);

        // Membership is by canonical key, so rearrangements of an
        // already-accepted problem collide even when their raw
        // renderings differ.
        let key = canonicalize(&text);
        if seen.contains(&key) {
            continue;
        }

        let value = match op.apply(left.value, right.value) {
            Ok(v) => v,
            Err(e) if e.is_retryable() => continue,
            Err(e) => return Err(e),
        };

        seen.insert(key);
        return Ok(Expression { text, value });
    }

    tracing::debug!(remaining_ops, range, "retry budget exhausted");
    Err(Error::GenerationExhausted { range })
}

fn divisor_acceptable(dividend: Value, divisor: Value, allow_fraction: bool) -> bool {
    if divisor.is_zero() {
        return false;
    }
    if allow_fraction && (dividend / divisor).is_integer() {
        return false;
    }
    true
}

/// Draw a leaf: an integer in `0..range`, or (half the time in fraction
/// mode) a proper fraction with denominator in `2..=range`.
fn draw_leaf<R: Rng>(rng: &mut R, range: i64, allow_fraction: bool) -> Value {
    if allow_fraction && rng.gen_bool(0.5) {
        let denom = rng.gen_range(2..=range);
        let numer = rng.gen_range(1..denom);
        Rational64::new(numer, denom)
    } else {
        value::integer(rng.gen_range(0..range))
    }
}

/// Render a leaf value: reduced `n/d` for fractions, the numerator alone
/// for whole numbers.
fn render_leaf(value: &Value) -> String {
    if value.is_integer() {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}
