pub mod error;
pub mod parse;

use crate::util::entry::Entry;

/// Read and reduce all records of a ledger file
///
/// Caller should determine the success of this function not only through
/// its return value but by querying `errs` (e.g. with `errs.is_fatal()`),
/// since nonfatal warnings may have been emitted even when entries are
/// returned.
pub fn read_records(filename: &str, errs: &mut error::Record) -> Option<Vec<Entry>> {
    let contents = match std::fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(_) => {
            errs.make("File not found")
                .text(format!("Ledger file loaded is '{}'", filename))
                .hint("create it or pass the path to an existing ledger");
            return None;
        }
    };
    let entries = parse::extract(filename, errs, &contents);
    if errs.is_fatal() {
        None
    } else {
        Some(entries)
    }
}
