//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying CSV parser errors and provides a semantic variant for
//! open failures carrying the offending path.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}
