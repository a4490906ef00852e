use crate::presentation::table::{arguments_by_group, dataset_groups};
use ior_args_types::DatasetEntry;
use std::fmt;

const HEADERS: [&str; 4] = ["Dataset", "IOR version", "Step", "Arguments"];

/// Markdown reference table with columns Dataset, IOR version, Step, Arguments.
///
/// Cells are padded so the source reads as a grid. Within a dataset the
/// argument tokens are lined up by option name unless alignment is off.
pub struct MarkdownTable {
    rows: Vec<[String; 4]>,
}

impl MarkdownTable {
    pub fn new(entries: &[DatasetEntry], align: bool) -> Self {
        let escaped: Vec<DatasetEntry> = entries.iter().map(escape_entry).collect();
        let groups = dataset_groups(&escaped);

        let rows = arguments_by_group(&groups, align)
            .into_iter()
            .map(|(entry, arguments)| {
                [
                    entry.dataset_name.clone(),
                    entry.ior_version.clone(),
                    entry.step.to_string(),
                    arguments,
                ]
            })
            .collect();

        Self { rows }
    }

    fn widths(&self) -> [usize; 4] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// `|` ends a cell in markdown, so it is written as `\|`
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn escape_entry(entry: &DatasetEntry) -> DatasetEntry {
    DatasetEntry {
        dataset_key: entry.dataset_key.clone(),
        dataset_name: escape_cell(&entry.dataset_name),
        ior_version: escape_cell(&entry.ior_version),
        step: entry.step,
        arguments: entry.arguments.iter().map(|a| escape_cell(a)).collect(),
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[&str], widths: &[usize; 4]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, "| {} |", padded.join(" | "))
}

impl fmt::Display for MarkdownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        write_row(f, &HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        writeln!(f, "|{}|", rule.join("|"))?;

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(f, &cells, &widths)?;
        }
        Ok(())
    }
}
