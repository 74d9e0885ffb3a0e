//! Mixed-number answer codec.
//!
//! Answers travel as text in three notations: a plain integer (`5`), a
//! proper fraction (`3/4`), or a mixed number (`2'1/2`, read as
//! 2 + 1/2). Formatting picks the shortest of these; parsing accepts
//! all three and nothing else.

use num_rational::Rational64;

use crate::error::{Error, Result};
use crate::value::{self, Value};

/// Render a value in mixed-number notation.
///
/// Whole values render as their numerator alone; a denominator of 1
/// never appears in fractional notation.
pub fn format_answer(value: &Value) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }
    let whole = value.numer() / value.denom();
    let numer = value.numer() % value.denom();
    if whole == 0 {
        format!("{}/{}", numer, value.denom())
    } else {
        format!("{}'{}/{}", whole, numer, value.denom())
    }
}

/// Parse answer text back to an exact value.
pub fn parse_answer(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if let Some((whole_part, fraction_part)) = trimmed.split_once('\'') {
        let whole = parse_int(whole_part, text)?;
        let (numer, denom) = parse_fraction(fraction_part, text)?;
        let combined = whole
            .checked_mul(denom)
            .and_then(|n| n.checked_add(numer))
            .ok_or_else(|| Error::InvalidAnswerFormat(text.to_string()))?;
        Ok(Rational64::new(combined, denom))
    } else if trimmed.contains('/') {
        let (numer, denom) = parse_fraction(trimmed, text)?;
        Ok(Rational64::new(numer, denom))
    } else {
        Ok(value::integer(parse_int(trimmed, text)?))
    }
}

fn parse_int(piece: &str, original: &str) -> Result<i64> {
    piece
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidAnswerFormat(original.to_string()))
}

fn parse_fraction(piece: &str, original: &str) -> Result<(i64, i64)> {
    let (numer, denom) = piece
        .split_once('/')
        .ok_or_else(|| Error::InvalidAnswerFormat(original.to_string()))?;
    let numer = parse_int(numer, original)?;
    let denom = parse_int(denom, original)?;
    if denom == 0 {
        return Err(Error::InvalidAnswerFormat(original.to_string()));
    }
    Ok((numer, denom))
}
