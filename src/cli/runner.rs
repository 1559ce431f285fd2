use std::io;

use tracing::info;

use csvtally::count_file;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "<INPUT>".to_string(),
    })?;

    let total = count_file(&input)?;
    info!("count: {}", total);

    Ok(())
}
