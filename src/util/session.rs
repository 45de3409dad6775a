//! One open calculator, from category selection to commit
//!
//! The raw key press buffer is owned by the session rather than living as
//! ambient shared state. Presses append without validation; `commit` runs
//! the reduction and clears the buffer only on success, so a rejected entry
//! stays available for correction. Closing the calculator without
//! committing goes through `abandon`, which discards the buffer.

use crate::util::{
    entry::{Category, Entry},
    evaluate::{evaluate, InvalidAmount},
    token::Token,
};

/// An in-progress amount entry for one selected category
#[derive(Debug)]
pub struct Session {
    cat: Category,
    tokens: Vec<Token>,
}

impl Session {
    /// Open the calculator for the selected category
    pub fn open(cat: Category) -> Self {
        Self {
            cat,
            tokens: Vec::new(),
        }
    }

    /// Record one key press, no validation
    pub fn press(&mut self, t: Token) {
        self.tokens.push(t);
    }

    /// The raw presses accumulated so far
    pub fn pending(&self) -> &[Token] {
        &self.tokens
    }

    /// Reduce the buffer to an entry against the session's category
    ///
    /// On success the buffer is consumed; on `InvalidAmount` it is kept
    /// intact so the user may fix the entry and commit again.
    pub fn commit(&mut self) -> Result<Entry, InvalidAmount> {
        let value = evaluate(&self.tokens)?;
        self.tokens.clear();
        Ok(Entry {
            value,
            cat: self.cat,
        })
    }

    /// Discard the buffer without committing
    pub fn abandon(&mut self) {
        self.tokens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(session: &mut Session, keys: &str) {
        for c in keys.chars() {
            session.press(Token::from_char(c));
        }
    }

    #[test]
    fn commit_consumes_buffer() {
        let mut session = Session::open(Category::Food);
        press_all(&mut session, "6+3-1.2+1");
        let entry = session.commit().unwrap();
        assert_eq!(entry.cat, Category::Food);
        assert!((entry.value.0 - 8.8).abs() < 1e-9);
        assert!(session.pending().is_empty());

        // a fresh sequence is unaffected by prior presses
        press_all(&mut session, "4");
        let entry = session.commit().unwrap();
        assert_eq!(entry.value.0, 4.0);
    }

    #[test]
    fn failed_commit_preserves_buffer() {
        let mut session = Session::open(Category::Salary);
        press_all(&mut session, "..");
        assert_eq!(session.commit(), Err(InvalidAmount));
        assert_eq!(session.pending().len(), 2);

        // correcting the entry makes the next commit succeed
        press_all(&mut session, "7");
        let entry = session.commit().unwrap();
        assert!((entry.value.0 - 0.7).abs() < 1e-9);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn abandon_discards() {
        let mut session = Session::open(Category::Leisure);
        press_all(&mut session, "123");
        session.abandon();
        assert!(session.pending().is_empty());
        assert_eq!(session.commit(), Err(InvalidAmount));
    }
}
