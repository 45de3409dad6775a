//! The keypad alphabet
//!
//! One `Token` per key press: a digit, the decimal point, or one of the
//! two operator signs. Tokens carry no position or identity, only their
//! value, and no validity is enforced at entry time: any sequence of
//! tokens is representable and cleanup is deferred to normalization.

use std::fmt;

/// A single key press on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// one of '0'..'9', stored as its numeric value
    Digit(u8),
    /// the decimal point '.'
    Point,
    /// '+' or '-'
    Sign(Sign),
}

/// The two operators the keypad offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Token {
    /// Translate a keypad character into its token
    ///
    /// # Panics
    ///
    /// This function will panic if the character is not a valid keypad key.
    ///
    /// It is meant to translate text matched by the grammar, not validate
    /// arbitrary user input.
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Token::Digit(c as u8 - b'0'),
            '.' => Token::Point,
            '+' => Token::Sign(Sign::Plus),
            '-' => Token::Sign(Sign::Minus),
            _ => unreachable!(),
        }
    }

    /// True for `Digit(_)`
    pub fn is_digit(self) -> bool {
        matches!(self, Token::Digit(_))
    }

    /// True for `Sign(_)`
    pub fn is_sign(self) -> bool {
        matches!(self, Token::Sign(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{}", d),
            Token::Point => write!(f, "."),
            Token::Sign(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_translation() {
        assert_eq!(Token::from_char('0'), Token::Digit(0));
        assert_eq!(Token::from_char('7'), Token::Digit(7));
        assert_eq!(Token::from_char('.'), Token::Point);
        assert_eq!(Token::from_char('+'), Token::Sign(Sign::Plus));
        assert_eq!(Token::from_char('-'), Token::Sign(Sign::Minus));
    }

    #[test]
    fn display_roundtrip() {
        for c in "0123456789.+-".chars() {
            assert_eq!(format!("{}", Token::from_char(c)), c.to_string());
        }
    }
}
