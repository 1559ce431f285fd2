//! Command Line Interface (CLI) layer for csvtally.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the counting run. It wires
//! the user-provided path to the underlying library functionality exposed
//! via `csvtally::count`.
//!
//! If you are embedding csvtally into another application, prefer using
//! the `csvtally` library API instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
