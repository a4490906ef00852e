pub mod csv;
pub mod json;
pub mod markdown;
pub mod plain;

pub use markdown::MarkdownTable;
pub use plain::PlainListing;

use crate::args::OutputFormat;
use anyhow::Result;
use ior_args_types::DatasetEntry;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Pad shared options into columns (markdown only)
    pub align: bool,
    /// Emit ANSI colors (plain only)
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            align: true,
            color: false,
        }
    }
}

/// Render entries in the requested format
pub fn render(
    entries: &[DatasetEntry],
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(MarkdownTable::new(entries, options.align).to_string()),
        OutputFormat::Plain => Ok(PlainListing::new(entries, options.color).to_string()),
        OutputFormat::Json => json::render(entries),
        OutputFormat::Csv => csv::render(entries),
    }
}
