//! Text rendering of the category catalog
//!
//! The interactive original shows the catalog as two slides, one for
//! expenditure and one for income. This is the same view as plain text:
//! a pure function from catalog data to a printable string, with no
//! rendering state attached to the categories themselves.

use crate::util::entry::Category;

/// Render the two catalog slides for the given categories
pub fn render(catalog: &[Category]) -> String {
    let mut out = String::new();
    for (slide, expenditure) in [("Expenditure", true), ("Income", false)] {
        out.push_str(slide);
        out.push('\n');
        for cat in catalog {
            if cat.is_expenditure() == expenditure {
                out.push_str(&format!("  {}  {}\n", cat.glyph(), cat.label()));
            }
        }
        out.push('\n');
    }
    out
}

/// The full catalog in declaration order
pub fn full() -> Vec<Category> {
    use num_traits::FromPrimitive;
    (0..Category::COUNT)
        .map(|i| Category::from_usize(i).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_slides_present() {
        let view = render(&full());
        assert!(view.starts_with("Expenditure\n"));
        assert!(view.contains("\nIncome\n"));
        for cat in full() {
            assert!(view.contains(cat.label()));
            assert!(view.contains(cat.glyph()));
        }
    }

    #[test]
    fn expenditure_slide_comes_first() {
        let view = render(&[Category::Salary, Category::Food]);
        let food = view.find("Food").unwrap();
        let salary = view.find("Salary").unwrap();
        assert!(food < salary);
    }
}
