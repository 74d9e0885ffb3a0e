//! Expression canonicalization for duplicate detection.
//!
//! Rewrites a rendered expression into an order-independent form:
//! parentheses are stripped, operands of `×` are ordered by value, and
//! additive terms are sorted ascending. The output is only ever used as
//! a set-membership key; it is never shown to a student.
//!
//! This is tuned to the exact shapes the generator renders (binary
//! trees, spaces around glyphs, at most three operators). It is not a
//! general arithmetic normalizer: subtraction and division operands are
//! deliberately left in place.

use num_rational::Rational64;

use crate::value::{self, Value};

/// Canonical text form of `expr`. Pure and idempotent.
pub fn canonicalize(expr: &str) -> String {
    let stripped: String = expr.chars().filter(|c| *c != '(' && *c != ')').collect();
    sort_subexpressions(&stripped)
}

fn sort_subexpressions(e: &str) -> String {
    if e.contains('×') || e.contains('÷') {
        // Split into alternating operands and operators along ×/÷.
        let mut parts: Vec<String> = Vec::new();
        let mut ops: Vec<char> = Vec::new();
        let mut current = String::new();
        for c in e.chars() {
            if c == '×' || c == '÷' {
                parts.push(current.trim().to_string());
                ops.push(c);
                current.clear();
            } else {
                current.push(c);
            }
        }
        parts.push(current.trim().to_string());

        // Order the operands around each × boundary; ÷ keeps its order.
        for i in 0..ops.len() {
            if ops[i] == '×' {
                parts[i] = sort_subexpressions(&parts[i]);
                parts[i + 1] = sort_subexpressions(&parts[i + 1]);
                if term_value(&parts[i]) > term_value(&parts[i + 1]) {
                    parts.swap(i, i + 1);
                }
            }
        }

        let mut out = parts[0].clone();
        for (i, op) in ops.iter().enumerate() {
            out.push(' ');
            out.push(*op);
            out.push(' ');
            out.push_str(&parts[i + 1]);
        }
        out
    } else {
        // Pure additive level: stable-sort the terms ascending by value.
        // Terms are trimmed so the rejoined key is stable under repeated
        // canonicalization.
        let terms: Vec<&str> = e.split('+').map(str::trim).collect();
        let mut keyed: Vec<(Value, &str)> = terms
            .into_iter()
            .map(|t| (term_value(t), t))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed
            .into_iter()
            .map(|(_, t)| t)
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Numeric value of a term, for ordering only.
///
/// A term still containing `×` or `+` was already ordered by the
/// recursion, so it must not be re-sorted at this level; it (and any
/// other token that is not a plain integer or `/`-fraction) sorts as 0.
fn term_value(token: &str) -> Value {
    if token.contains('×') || token.contains('+') {
        return value::integer(0);
    }
    let t = token.trim();
    if let Some((numer, denom)) = t.split_once('/') {
        match (numer.trim().parse::<i64>(), denom.trim().parse::<i64>()) {
            (Ok(n), Ok(d)) if d != 0 => Rational64::new(n, d),
            _ => value::integer(0),
        }
    } else {
        t.parse::<i64>().map(value::integer).unwrap_or_else(|_| value::integer(0))
    }
}
