use std::fmt;
use std::path::PathBuf;

/// Result type for ior-args-extract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting invocations
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Results root is missing or not a directory
    RootNotFound(PathBuf),

    /// A `Command line` record could not be decoded
    MalformedRecord(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::RootNotFound(path) => {
                write!(f, "Results directory not found: {}", path.display())
            }
            Error::MalformedRecord(msg) => write!(f, "Malformed command line: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::RootNotFound(_) | Error::MalformedRecord(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
