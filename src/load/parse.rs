//! Convert the contents of a ledger file into recorded entries
//!
//! Each record names a catalog category and carries the verbatim keypad
//! presses for one amount; the keystroke run is handed to the reduction
//! engine and failures are reported with the record's span.

use pest::Parser;
use pest_derive::*;

/// Wrapper around Pest's `Pair`
type Pair<'i> = pest::iterators::Pair<'i, Rule>;

use crate::load::error;
use crate::util::{
    entry::{Category, Entry},
    session::Session,
    token::Token,
};

/// Pest-generated parser
#[derive(Parser)]
#[grammar = "load/tally.pest"]
pub struct TallyParser;

/// Parse and reduce the contents of file `path`
///
/// The return value may be non-empty even if some errors (including fatal
/// ones) occured: it contains all records that parsed and reduced
/// correctly. Caller should determine the success of this function not
/// through its return value but by querying `errs`.
pub fn extract(path: &str, errs: &mut error::Record, contents: &str) -> Vec<Entry> {
    match TallyParser::parse(Rule::program, contents) {
        Ok(mut pairs) => validate(path, errs, pairs.next().unwrap()),
        Err(e) => {
            errs.make("Parsing failure").from(e.with_path(path));
            Vec::new()
        }
    }
}

fn validate(path: &str, errs: &mut error::Record, program: Pair) -> Vec<Entry> {
    let mut entries = Vec::new();
    for record in program.into_inner() {
        // the only other inner pair is EOI
        if record.as_rule() == Rule::record {
            if let Some(entry) = read_record(path, errs, record) {
                entries.push(entry);
            }
        }
    }
    entries
}

fn read_record(path: &str, errs: &mut error::Record, record: Pair) -> Option<Entry> {
    let loc = (path, record.as_span());
    let mut items = record.into_inner();
    let ident = items.next().unwrap();
    let keys = items.next().unwrap();

    let cat = match Category::from_label(ident.as_str()) {
        Some(cat) => cat,
        None => {
            errs.make("Unknown category")
                .span(
                    &(path, ident.as_span()),
                    format!("'{}' is not in the catalog", ident.as_str()),
                )
                .text("Each record must name a catalog category")
                .hint(format!("pick one of: {}", catalog_labels()));
            return None;
        }
    };

    // replay the record's keystrokes through a calculator session,
    // exactly as the interactive front-end would
    let mut session = Session::open(cat);
    for c in keys.as_str().chars() {
        session.press(Token::from_char(c));
    }
    match session.commit() {
        Ok(entry) => {
            if entry.value.0 <= 0.0 {
                errs.make("Non-positive amount")
                    .nonfatal()
                    .span(&loc, format!("this record reduces to {}", entry.value))
                    .hint("record earnings under an income category instead of negating");
            }
            Some(entry)
        }
        Err(e) => {
            errs.make("Invalid amount")
                .span(&loc, format!("{}", e))
                .text("An amount must contain at least one digit")
                .hint("insert a digit among the keystrokes");
            None
        }
    }
}

fn catalog_labels() -> String {
    use num_traits::FromPrimitive;
    (0..Category::COUNT)
        .map(|i| Category::from_usize(i).unwrap().label())
        .collect::<Vec<_>>()
        .join(", ")
}
