// NOTE: ior-args pipeline
//
// results tree -> discovery -> `Command line` records -> decoded invocations
//   -> one entry per (dataset, step) -> rendered table
//
// Extraction is best effort: unreadable files and undecodable records are
// logged at warn level and skipped. Only a missing results root, a broken
// config file or an unwritable output stops the run.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
mod services;

pub use args::{Cli, Commands, ConfigCommand, ExtractArgs, LogLevel, OutputFormat};
pub use commands::run;
