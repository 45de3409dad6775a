//! Aggregation of recorded entries
//!
//! A `Summary` accumulates entries into one `Amount` slot per catalog
//! category, and answers the per-slide questions the front-end asks:
//! total spent, total earned, and the net balance.

use std::ops;

use crate::util::entry::{Amount, Category, Entry};

#[derive(Debug, Clone)]
pub struct Summary {
    categories: [Amount; Category::COUNT],
    count: usize,
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl Summary {
    pub fn new() -> Self {
        Self {
            categories: [Amount(0.0); Category::COUNT],
            count: 0,
        }
    }

    /// Accumulate a batch of entries
    pub fn register(&mut self, entries: &[Entry]) {
        for entry in entries {
            *self += entry;
        }
    }

    /// Number of entries accumulated so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn query(&self, cat: Category) -> Amount {
        self.categories[cat as usize]
    }

    /// Sum over the expenditure half of the catalog
    pub fn expenditure(&self) -> Amount {
        self.half(true)
    }

    /// Sum over the income half of the catalog
    pub fn income(&self) -> Amount {
        self.half(false)
    }

    /// Income minus expenditure
    pub fn net(&self) -> Amount {
        self.income() - self.expenditure()
    }

    fn half(&self, expenditure: bool) -> Amount {
        use num_traits::FromPrimitive;
        let mut total = Amount(0.0);
        for (i, amount) in self.categories.iter().enumerate() {
            if Category::from_usize(i).unwrap().is_expenditure() == expenditure {
                total += *amount;
            }
        }
        total
    }
}

impl ops::AddAssign<&Entry> for Summary {
    fn add_assign(&mut self, entry: &Entry) {
        self.categories[entry.cat as usize] += entry.value;
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! entry {
        ( $cat:ident, $val:expr ) => {
            Entry {
                value: Amount($val),
                cat: Category::$cat,
            }
        };
    }
    macro_rules! close {
        ( $got:expr, $exp:expr ) => {
            assert!(($got.0 - $exp).abs() < 1e-9, "{} != {}", $got.0, $exp);
        };
    }

    #[test]
    fn per_category_accumulation() {
        let mut sum = Summary::new();
        sum.register(&[
            entry!(Food, 8.8),
            entry!(Food, 3.2),
            entry!(Transport, 2.5),
            entry!(Salary, 1200.0),
        ]);
        assert_eq!(sum.count(), 4);
        close!(sum.query(Category::Food), 12.0);
        close!(sum.query(Category::Transport), 2.5);
        close!(sum.query(Category::Salary), 1200.0);
        close!(sum.query(Category::Leisure), 0.0);
    }

    #[test]
    fn slide_totals() {
        let mut sum = Summary::new();
        sum.register(&[
            entry!(Home, 450.0),
            entry!(Health, 19.9),
            entry!(Salary, 1200.0),
            entry!(Bonus, 88.0),
        ]);
        close!(sum.expenditure(), 469.9);
        close!(sum.income(), 1288.0);
        close!(sum.net(), 818.1);
    }
}
