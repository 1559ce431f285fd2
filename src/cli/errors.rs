use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required argument: {arg}")]
    MissingArgument { arg: String },
}
