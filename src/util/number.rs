//! Interpretation of a single number literal
//!
//! A literal group is a run of digit and point tokens with at most one
//! point, as guaranteed by normalization. The integer and fractional parts
//! are folded separately by positional base-10 weighting, then recombined.
//! Both parts may independently be empty and contribute `0`; the lone point
//! is the explicit degenerate case and parses to `0`.

use crate::util::token::Token;

/// Fold a digit/point group into its numeric value
pub fn parse(group: &[Token]) -> f64 {
    if matches!(group, [Token::Point]) {
        return 0.0;
    }

    let point = group.iter().position(|t| *t == Token::Point);
    let int_part = fold_digits(&group[..point.unwrap_or(group.len())]);

    let point = match point {
        Some(p) => p,
        // no fractional computation for plain integers
        None => return int_part,
    };

    let frac = &group[point + 1..];
    int_part + fold_digits(frac) / 10f64.powi(frac.len() as i32)
}

/// Positional base-10 weighting: leftmost digit carries the highest power
fn fold_digits(digits: &[Token]) -> f64 {
    let mut acc = 0f64;
    for t in digits {
        if let Token::Digit(d) = t {
            acc = acc * 10.0 + f64::from(*d);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! toks {
        ( $s:expr ) => {
            $s.chars().map(Token::from_char).collect::<Vec<_>>()
        };
    }
    macro_rules! num {
        ( $s:expr => $val:expr ) => {
            let got = parse(&toks!($s));
            assert!(
                (got - $val as f64).abs() < 1e-9,
                "{:?} parsed to {}, expected {}",
                $s,
                got,
                $val
            );
        };
    }

    #[test]
    fn integers() {
        num!("3" => 3);
        num!("0" => 0);
        num!("321155" => 321155);
        num!("007" => 7);
    }

    #[test]
    fn fractions() {
        num!(".2" => 0.2);
        num!(".02" => 0.02);
        num!("321.155" => 321.155);
        num!("1.23" => 1.23);
    }

    #[test]
    fn empty_parts() {
        // lone point is the documented degenerate literal
        num!("." => 0);
        // empty integer part
        num!(".5" => 0.5);
        // empty fractional part
        num!("5." => 5);
    }
}
