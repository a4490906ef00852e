//! Helpers for inspecting rendered tables.
//!
//! Markdown cells are padded for alignment, so comparisons go through
//! [`markdown_rows`], which trims cells and collapses argument padding.

use anyhow::{Context, Result};
use serde_json::Value;

/// Body rows of a markdown table, one `Vec` of cells per row.
///
/// Header and separator lines are skipped. Runs of spaces inside a cell are
/// collapsed so aligned argument columns compare equal to the bare string.
pub fn markdown_rows(markdown: &str) -> Vec<Vec<String>> {
    markdown
        .lines()
        .filter(|line| line.starts_with('|'))
        .skip(2)
        .map(|line| {
            split_cells(line)
                .into_iter()
                .map(|cell| cell.split_whitespace().collect::<Vec<_>>().join(" "))
                .collect()
        })
        .collect()
}

/// Split one table line on unescaped `|`, dropping the outer borders
fn split_cells(line: &str) -> Vec<String> {
    let inner = line.trim().trim_start_matches('|');
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

/// Assert that a markdown table has exactly `expected` body rows.
pub fn assert_row_count(markdown: &str, expected: usize) -> Result<()> {
    let rows = markdown_rows(markdown);
    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}:\n{}", expected, rows.len(), markdown);
    }
    Ok(())
}

/// Assert that JSON output is an array of `expected` entries.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = json.as_array().context("Expected a JSON array of entries")?;
    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rows_collapse_padding() {
        let table = "\
| Dataset | Step | Arguments       |
|---------|------|-----------------|
| randio  | Read | -C    -k -r     |
| x       | Read | -a \\| -b        |
";
        let rows = markdown_rows(table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["randio", "Read", "-C -k -r"]);
        assert_eq!(rows[1][2], "-a | -b");
    }
}
