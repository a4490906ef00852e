use std::fmt;
use std::path::PathBuf;

/// Result type for ior-args-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Config file exists but is not valid TOML for `Config`
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    ConfigWrite(toml::ser::Error),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::ConfigParse { path, source } => {
                write!(f, "Invalid config {}: {}", path.display(), source)
            }
            Error::ConfigWrite(err) => write!(f, "Could not serialize config: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::ConfigParse { source, .. } => Some(source),
            Error::ConfigWrite(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigWrite(err)
    }
}
