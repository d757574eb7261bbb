use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Convert(#[from] yabc::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
