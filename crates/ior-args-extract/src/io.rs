use crate::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Prefix IOR prints in front of the command it was started with
pub const COMMAND_LINE_PREFIX: &str = "Command line";

/// A `Command line` record and its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub line_number: usize,
    pub text: String,
}

/// Open an output file, decompressing `.gz` files on the fly
pub fn open_output(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|e| e == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Collect every `Command line` record from a reader.
///
/// Files can hold the output of several concatenated jobs, so the whole
/// stream is scanned. Invalid UTF-8 is replaced rather than rejected.
pub fn read_command_records<R: BufRead>(mut reader: R) -> Result<Vec<CommandRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        if !buf.starts_with(COMMAND_LINE_PREFIX.as_bytes()) {
            continue;
        }

        let text = String::from_utf8_lossy(&buf);
        records.push(CommandRecord {
            line_number,
            text: text.trim_end_matches(['\r', '\n']).to_string(),
        });
    }

    Ok(records)
}

/// Read all `Command line` records from a file on disk
pub fn extract_command_records(path: &Path) -> Result<Vec<CommandRecord>> {
    read_command_records(open_output(path)?)
}
