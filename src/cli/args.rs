use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvtally", version, about = "Streaming CSV field counter")]
pub struct CliArgs {
    /// Path to the CSV file to count
    pub input: Option<PathBuf>,
}
