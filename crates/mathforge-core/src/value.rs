//! Exact rational values.
//!
//! The whole system computes on `num_rational::Rational64`: construction
//! reduces to lowest terms, equality is structural equality of the
//! reduced form, and comparison is by magnitude. This module adds the
//! guarded entry points: the underlying `Ratio` panics on a zero
//! denominator, so construction and division go through fallible
//! wrappers instead.

use num_rational::Rational64;
use num_traits::{CheckedDiv, Zero};

use crate::error::{Error, Result};

/// Exact rational value, always in lowest terms.
pub type Value = Rational64;

/// A whole-number value.
pub fn integer(n: i64) -> Value {
    Rational64::from_integer(n)
}

/// A fraction `numer/denom`, reduced on construction.
pub fn fraction(numer: i64, denom: i64) -> Result<Value> {
    if denom == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Rational64::new(numer, denom))
}

/// Division with an explicit zero-divisor guard.
///
/// The generator rejects zero divisors before calling this; the guard
/// stays so a broken caller gets an error value rather than a panic.
pub fn checked_div(lhs: Value, rhs: Value) -> Result<Value> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    lhs.checked_div(&rhs).ok_or(Error::DivisionByZero)
}
