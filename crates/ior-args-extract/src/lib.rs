// Error types
pub mod error;

// Output file discovery
pub mod discovery;

// Reading `Command line` records (plain or gzip)
pub mod io;

// Command-line normalization
pub mod decode;

// Step classification
pub mod classify;

// Extraction pipeline
pub mod extractor;

pub use classify::{assign_steps, base_step};
pub use decode::{DecodedCommand, decode_command_line, normalize_command_line};
pub use discovery::{OutputDiscovery, OutputFile};
pub use error::{Error, Result};
pub use extractor::{ExtractStats, Extraction, Extractor, extract};
pub use io::{CommandRecord, extract_command_records, read_command_records};
