pub mod config;
pub mod error;
pub mod path;

pub use config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, Config};
pub use error::{Error, Result};
pub use path::{expand_tilde, resolve_config_path};
