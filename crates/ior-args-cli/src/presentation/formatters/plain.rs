use crate::presentation::table::dataset_groups;
use ior_args_types::{DatasetEntry, Step};
use owo_colors::OwoColorize;
use std::fmt;

/// Fixed-width listing, one configuration per line:
/// dataset and version in 20-character columns, then step and arguments.
pub struct PlainListing<'a> {
    entries: &'a [DatasetEntry],
    color: bool,
}

impl<'a> PlainListing<'a> {
    pub fn new(entries: &'a [DatasetEntry], color: bool) -> Self {
        Self { entries, color }
    }
}

impl fmt::Display for PlainListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in dataset_groups(self.entries).into_iter().flatten() {
            let step = format!("{:<8}", entry.step);
            let step_display = if self.color {
                match entry.step {
                    Step::Write => format!("{}", step.yellow()),
                    Step::PreRead => format!("{}", step.cyan()),
                    Step::Read => format!("{}", step.green()),
                }
            } else {
                step
            };

            writeln!(
                f,
                "{:<20} {:<20} {} {}",
                entry.dataset_name,
                entry.ior_version,
                step_display,
                entry.argument_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_layout() {
        let entries = vec![DatasetEntry::new(
            "randio",
            "IOPS, Buffered I/O",
            "glior-3.3",
            Step::Read,
            vec!["-C".to_string(), "-k".to_string(), "-r".to_string()],
        )];
        let listing = PlainListing::new(&entries, false).to_string();
        assert_eq!(
            listing,
            "IOPS, Buffered I/O   glior-3.3            Read     -C -k -r\n"
        );
    }
}
