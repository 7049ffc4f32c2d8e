use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write one of its files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
