//! Theater Statement CLI
//!
//! Reads a play catalog and performance rows from CSV files and prints one
//! statement per customer.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- plays.csv invoices.csv > statements.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::{debug, warn};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;
use theater_statement::loader::{load_catalog, load_invoices};
use theater_statement::{Result, Statement, StatementError};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(StatementError::MissingArgument);
    }

    let catalog = load_catalog(BufReader::new(File::open(&args[1])?))?;
    if catalog.is_empty() {
        warn!("Play catalog {} is empty", args[1]);
    } else {
        debug!("Loaded {} plays from {}", catalog.len(), args[1]);
    }

    let invoices = load_invoices(BufReader::new(File::open(&args[2])?))?;

    // Price everything before writing so a failure leaves stdout empty.
    let statements = invoices
        .iter()
        .map(|invoice| Statement::build(invoice, &catalog))
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for statement in &statements {
        write!(handle, "{}", statement)?;
    }
    handle.flush()?;

    Ok(())
}
