use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing the seeded config failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
