use std::fmt;

/// Result type for ior-args-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A step name that is not Write, Pre-Read or Read
    UnknownStep(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStep(name) => write!(f, "Unknown step: {}", name),
        }
    }
}

impl std::error::Error for Error {}
