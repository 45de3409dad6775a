//! Fixed-width summary table
//!
//! Renders a `Summary` as a box-drawn grid: one line per catalog category,
//! amounts split into an expenditure and an income column, and a closing
//! total line. Zero amounts render as blank cells.

use num_traits::FromPrimitive;
use std::fmt;

use crate::util::{
    entry::{Amount, Category},
    summary::Summary,
};

pub struct Table<'d> {
    data: &'d Summary,
    title: Option<String>,
}

struct Cell {
    text: String,
    /// display width, not byte length
    width: usize,
}

struct Grid {
    header: Vec<Cell>,
    lines: Vec<Vec<Cell>>,
}

impl<'d> Table<'d> {
    pub fn from(data: &'d Summary) -> Self {
        Self { data, title: None }
    }

    pub fn with_title<S>(mut self, title: S) -> Self
    where
        S: ToString,
    {
        self.title = Some(title.to_string());
        self
    }

    fn to_formatter(&self) -> Grid {
        let mut grid = Grid::with_header(vec![
            Cell::from(String::new()),
            Cell::from(String::from("Expenditure")),
            Cell::from(String::from("Income")),
        ]);
        for i in 0..Category::COUNT {
            let cat = Category::from_usize(i).unwrap();
            let amount = Cell::amount(self.data.query(cat));
            let blank = Cell::from(String::new());
            let (spent, earned) = if cat.is_expenditure() {
                (amount, blank)
            } else {
                (blank, amount)
            };
            grid.push_line(vec![Cell::from(cat.label().to_string()), spent, earned]);
        }
        grid.push_line(vec![
            Cell::from(String::from("Total")),
            Cell::amount(self.data.expenditure()),
            Cell::amount(self.data.income()),
        ]);
        grid
    }
}

impl Cell {
    fn from(text: String) -> Self {
        let width = text.chars().count();
        Self { text, width }
    }

    fn amount(a: Amount) -> Self {
        if a.nonzero() {
            Self::from(format!("{}", a))
        } else {
            Self::from(String::new())
        }
    }
}

impl Grid {
    fn with_header(header: Vec<Cell>) -> Self {
        Self {
            header,
            lines: Vec::new(),
        }
    }

    fn push_line(&mut self, cells: Vec<Cell>) {
        assert_eq!(cells.len(), self.header.len());
        self.lines.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|c| c.width).collect();
        for line in &self.lines {
            for (w, c) in widths.iter_mut().zip(line) {
                *w = (*w).max(c.width);
            }
        }
        widths
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
        }
        write!(f, "{}", self.to_formatter())
    }
}

const VLINE: char = '│';
const ULCORNER: char = '┌';
const URCORNER: char = '┐';
const DLCORNER: char = '└';
const DRCORNER: char = '┘';
const LTJOIN: char = '┤';
const RTJOIN: char = '├';
const HIJOIN: char = '┴';
const LOJOIN: char = '┬';
const CROSS: char = '┼';

impl Grid {
    fn hline(
        &self,
        f: &mut fmt::Formatter,
        widths: &[usize],
        (left, mid, right): (char, char, char),
    ) -> fmt::Result {
        write!(f, "{}", left)?;
        for (i, w) in widths.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", mid)?;
            }
            for _ in 0..w + 2 {
                write!(f, "─")?;
            }
        }
        writeln!(f, "{}", right)
    }

    fn line(&self, f: &mut fmt::Formatter, widths: &[usize], cells: &[Cell]) -> fmt::Result {
        for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
            let pad = w - cell.width;
            if i == 0 {
                // label column is left-aligned, amounts right-aligned
                write!(f, "{} {}{} ", VLINE, cell.text, " ".repeat(pad))?;
            } else {
                write!(f, "{} {}{} ", VLINE, " ".repeat(pad), cell.text)?;
            }
        }
        writeln!(f, "{}", VLINE)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let widths = self.widths();
        self.hline(f, &widths, (ULCORNER, LOJOIN, URCORNER))?;
        self.line(f, &widths, &self.header)?;
        self.hline(f, &widths, (RTJOIN, CROSS, LTJOIN))?;
        for cells in &self.lines {
            self.line(f, &widths, cells)?;
        }
        self.hline(f, &widths, (DLCORNER, HIJOIN, DRCORNER))?;
        Ok(())
    }
}
