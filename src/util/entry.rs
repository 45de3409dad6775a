//! Bookkeeping domain types
//!
//! An `Entry` is one recorded transaction: an `Amount` attached to a
//! `Category`. The category catalog is plain data (label, glyph,
//! expenditure-vs-income flag) with no rendering concern attached, so any
//! front-end can derive its own view from it.

use num_derive::FromPrimitive;
use std::fmt;
use std::ops;

/// A signed decimal amount of money
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl Amount {
    pub fn nonzero(self) -> bool {
        self.0 != 0.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}E", self.0)
    }
}

impl ops::AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl ops::Add for Amount {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl ops::Sub for Amount {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// One recorded transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub value: Amount,
    pub cat: Category,
}

/// The fixed category catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Category {
    Food = 0,
    Transport,
    Shopping,
    Home,
    Health,
    Leisure,
    Salary,
    Bonus,
    Investment,
}

impl Category {
    pub const COUNT: usize = 9;

    /// Display label, as shown under the category button
    pub fn label(self) -> &'static str {
        use Category::*;
        match self {
            Food => "Food",
            Transport => "Transport",
            Shopping => "Shopping",
            Home => "Home",
            Health => "Health",
            Leisure => "Leisure",
            Salary => "Salary",
            Bonus => "Bonus",
            Investment => "Investment",
        }
    }

    /// Emoji glyph, as shown on the category button
    pub fn glyph(self) -> &'static str {
        use Category::*;
        match self {
            Food => "\u{1f35c}",       // 🍜
            Transport => "\u{1f687}",  // 🚇
            Shopping => "\u{1f6d2}",   // 🛒
            Home => "\u{1f3e0}",       // 🏠
            Health => "\u{1f48a}",     // 💊
            Leisure => "\u{1f3ae}",    // 🎮
            Salary => "\u{1f4b0}",     // 💰
            Bonus => "\u{1f9e7}",      // 🧧
            Investment => "\u{1f4c8}", // 📈
        }
    }

    /// Expenditure-vs-income classification
    pub fn is_expenditure(self) -> bool {
        use Category::*;
        matches!(self, Food | Transport | Shopping | Home | Health | Leisure)
    }

    /// Find a catalog category by its display label
    pub fn from_label(label: &str) -> Option<Self> {
        use Category::*;
        Some(match label {
            "Food" => Food,
            "Transport" => Transport,
            "Shopping" => Shopping,
            "Home" => Home,
            "Health" => Health,
            "Leisure" => Leisure,
            "Salary" => Salary,
            "Bonus" => Bonus,
            "Investment" => Investment,
            _ => return None,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn catalog_indexing() {
        for i in 0..Category::COUNT {
            let cat = Category::from_usize(i).unwrap();
            assert_eq!(cat as usize, i);
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
        assert!(Category::from_usize(Category::COUNT).is_none());
        assert_eq!(Category::from_label("Tithes"), None);
    }

    #[test]
    fn classification() {
        assert!(Category::Food.is_expenditure());
        assert!(Category::Home.is_expenditure());
        assert!(!Category::Salary.is_expenditure());
        assert!(!Category::Investment.is_expenditure());
    }
}
