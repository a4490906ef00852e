pub mod entry;
pub mod error;
pub mod step;

pub use entry::*;
pub use error::{Error, Result};
pub use step::*;
