//! csvtally CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, count the
//! input file, and exit with appropriate status. For programmatic use,
//! prefer the library API (`csvtally::count`).

use std::process;

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("fatal: {err}");
        process::exit(1);
    }
}
