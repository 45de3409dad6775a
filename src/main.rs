mod cli;
mod load;
mod util;

use clap::{App, Arg};

use cli::{catalog, table::Table};
use util::summary::Summary;

fn main() {
    let matches = App::new("tally")
        .about("Reduce keypad-entered records into per-category totals")
        .arg(
            Arg::with_name("FILE")
                .help("Ledger file to read")
                .index(1),
        )
        .arg(
            Arg::with_name("categories")
                .long("categories")
                .help("Print the category catalog and exit"),
        )
        .get_matches();

    if matches.is_present("categories") {
        print!("{}", catalog::render(&catalog::full()));
        return;
    }

    let filename = matches.value_of("FILE").unwrap_or("records.tly");
    let mut errs = load::error::Record::new();
    let entries = load::read_records(filename, &mut errs);
    print!("{}", errs);
    if let Some(entries) = entries {
        let mut summary = Summary::new();
        summary.register(&entries);
        println!("{}", Table::from(&summary).with_title("Records"));
        println!("Net balance: {}", summary.net());
    }
}
