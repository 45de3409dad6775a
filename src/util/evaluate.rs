//! Reduction of a key press sequence to a single amount
//!
//! The top-level entry point of the engine: canonicalize the raw sequence,
//! split it into number literal groups separated by signs, fold each group
//! into a value, then reduce left to right. Only `+` and `-` exist, so the
//! reduction is a plain left-associative chain with no precedence.

use crate::util::{
    entry::Amount,
    normalize::normalize,
    number,
    token::{Sign, Token},
};
use std::fmt;

/// The single error the engine can produce
///
/// Raised when the entry contains nothing usable as an amount, i.e. not a
/// single digit was pressed (the canonical sequence is empty, a lone point,
/// or made only of digitless operands). Redundant sign and point runs are
/// defined behavior handled by normalization, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAmount;

impl fmt::Display for InvalidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry does not contain a valid amount")
    }
}

impl std::error::Error for InvalidAmount {}

/// Reduce a raw key press sequence to its final amount
pub fn evaluate(raw: &[Token]) -> Result<Amount, InvalidAmount> {
    // An amount needs at least one pressed digit. This covers the empty
    // and lone-point sequences, and also entries like `-.+.` whose
    // canonical form holds only digitless operands.
    if !raw.iter().any(|t| t.is_digit()) {
        return Err(InvalidAmount);
    }

    let canon = normalize(raw);

    // split into literal groups and the signs separating them;
    // the canonical sequence never starts or ends with a sign
    let mut values = Vec::new();
    let mut signs = Vec::new();
    let mut i = 0;
    while i < canon.len() {
        if let Token::Sign(s) = canon[i] {
            signs.push(s);
            i += 1;
        } else {
            let start = i;
            while i < canon.len() && !canon[i].is_sign() {
                i += 1;
            }
            values.push(number::parse(&canon[start..i]));
        }
    }

    // left-associative reduction, first group implicitly positive
    let mut total = values[0];
    for (sign, value) in signs.iter().zip(&values[1..]) {
        match sign {
            Sign::Plus => total += value,
            Sign::Minus => total -= value,
        }
    }
    Ok(Amount(total))
}
