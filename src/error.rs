//! Error types for linestack sessions.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The terminal line discipline could not be read or written.
    /// A session cannot manage the screen without a trustworthy snapshot.
    #[error("Failed to access terminal attributes: {0}")]
    Terminal(#[source] io::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for a keypress")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
