//! Lexical cleanup of a raw key press sequence
//!
//! The keypad accepts presses without validation, so the raw sequence may
//! contain arbitrary repetitions of signs and points, a leading operator,
//! or a dangling trailing one. Normalization collapses all of that into a
//! canonical sequence before any numeric interpretation happens:
//!
//! - a leading sign gets an implicit `0` operand prepended before it;
//! - a run of consecutive signs keeps only its *last* sign (later presses
//!   override earlier ones, no double-negative arithmetic);
//! - a run of consecutive points keeps a single point;
//! - one trailing sign is dropped rather than reported.
//!
//! The output never has two adjacent signs, two adjacent points, a leading
//! sign, or a trailing sign. It may legally be empty or a lone point, both
//! of which the evaluator treats as an invalid amount. Normalization is
//! idempotent.

use crate::util::token::Token;

/// Collapse a raw key press sequence into its canonical form
pub fn normalize(raw: &[Token]) -> Vec<Token> {
    let mut canon = Vec::with_capacity(raw.len() + 1);
    if matches!(raw.first(), Some(t) if t.is_sign()) {
        canon.push(Token::Digit(0));
    }
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            Token::Sign(_) => {
                let mut k = i;
                while k + 1 < raw.len() && raw[k + 1].is_sign() {
                    k += 1;
                }
                canon.push(raw[k]);
                i = k + 1;
            }
            Token::Point => {
                let mut k = i;
                while k + 1 < raw.len() && raw[k + 1] == Token::Point {
                    k += 1;
                }
                canon.push(Token::Point);
                i = k + 1;
            }
            digit => {
                canon.push(digit);
                i += 1;
            }
        }
    }
    if matches!(canon.last(), Some(t) if t.is_sign()) {
        canon.pop();
    }
    canon
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! toks {
        ( $s:expr ) => {
            $s.chars().map(Token::from_char).collect::<Vec<_>>()
        };
    }
    macro_rules! canon {
        ( $raw:expr => $exp:expr ) => {
            assert_eq!(normalize(&toks!($raw)), toks!($exp));
        };
    }

    #[test]
    fn passthrough() {
        canon!("" => "");
        canon!("3" => "3");
        canon!("321.155" => "321.155");
        canon!("6+3-1.2+1" => "6+3-1.2+1");
    }

    #[test]
    fn leading_sign_gets_zero() {
        canon!("+3" => "0+3");
        canon!("-5.5" => "0-5.5");
        canon!("-.02+3" => "0-.02+3");
    }

    #[test]
    fn sign_runs_keep_last() {
        canon!("6+-1" => "6-1");
        canon!("6-+1" => "6+1");
        canon!("6++++1" => "6+1");
        // no double-negative arithmetic: "--" is "-", not "+"
        canon!("6--1" => "6-1");
        canon!("6+-+-1" => "6-1");
    }

    #[test]
    fn point_runs_keep_one() {
        canon!("1...5" => "1.5");
        canon!("..2" => ".2");
        canon!("3....." => "3.");
    }

    #[test]
    fn trailing_sign_dropped() {
        canon!("6+" => "6");
        canon!("6+3-" => "6+3");
        // only the collapsed run is dropped, not the operand before it
        canon!("6+++" => "6");
    }

    #[test]
    fn degenerate_input() {
        canon!("." => ".");
        canon!("+" => "0");
        canon!("+-+" => "0");
        canon!("-.+++.-" => "0-.+.");
    }

    #[test]
    fn no_adjacent_signs_or_points() {
        for raw in ["+3++.2+....", "6+-1.23+1", "-.+++.-", "...+++...---"] {
            let canon = normalize(&toks!(raw));
            for w in canon.windows(2) {
                assert!(!(w[0].is_sign() && w[1].is_sign()), "{:?}", canon);
                assert!(
                    !(w[0] == Token::Point && w[1] == Token::Point),
                    "{:?}",
                    canon
                );
            }
            assert!(!matches!(canon.last(), Some(t) if t.is_sign()));
        }
    }

    #[test]
    fn idempotent() {
        for raw in [
            "",
            ".",
            "+",
            "3",
            "+3++.2+....",
            "6+-1.23+1",
            "-.+++.-",
            "96---.42+++.7.",
        ] {
            let once = normalize(&toks!(raw));
            let twice = normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn last_sign_survives() {
        // a run of k >= 1 signs normalizes to exactly its last element
        for run in ["+", "-", "+-", "-+", "+++", "--+", "+-+-+-"] {
            let raw = toks!(format!("1{}2", run));
            let canon = normalize(&raw);
            let last = *run.chars().map(Token::from_char).collect::<Vec<_>>().last().unwrap();
            assert_eq!(canon, vec![Token::Digit(1), last, Token::Digit(2)]);
        }
    }
}
