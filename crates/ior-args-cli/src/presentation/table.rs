//! Row grouping and argument-column alignment shared by the renderers.

use ior_args_types::DatasetEntry;
use std::collections::HashMap;

/// Option name of an argument token: everything before the first `=`
pub fn option_name(token: &str) -> &str {
    token.split_once('=').map_or(token, |(name, _)| name)
}

/// Entries sorted by dataset then step, split into one slice per dataset
pub fn dataset_groups(entries: &[DatasetEntry]) -> Vec<Vec<&DatasetEntry>> {
    let mut sorted: Vec<&DatasetEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        (&a.dataset_key, &a.dataset_name, a.step).cmp(&(&b.dataset_key, &b.dataset_name, b.step))
    });

    let mut groups: Vec<Vec<&DatasetEntry>> = Vec::new();
    for entry in sorted {
        match groups.last_mut() {
            Some(group)
                if group[0].dataset_key == entry.dataset_key
                    && group[0].dataset_name == entry.dataset_name =>
            {
                group.push(entry)
            }
            _ => groups.push(vec![entry]),
        }
    }
    groups
}

/// A column of the aligned layout: option name plus its occurrence index
/// within a row, so repeated options get their own columns.
type Slot<'a> = (&'a str, usize);

fn slots(tokens: &[String]) -> Vec<Slot<'_>> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    tokens
        .iter()
        .map(|token| {
            let name = option_name(token);
            let count = seen.entry(name).or_insert(0);
            let slot = (name, *count);
            *count += 1;
            slot
        })
        .collect()
}

/// Merge the slot sequences of all rows into one column order that keeps
/// every row's own order. New slots go in sorted position where the row
/// allows it. Returns None when two rows order shared options differently.
fn merge_layout<'a>(rows: &[Vec<Slot<'a>>]) -> Option<Vec<Slot<'a>>> {
    let mut layout: Vec<Slot<'a>> = Vec::new();

    for row in rows {
        let mut cursor = 0;
        for (i, slot) in row.iter().enumerate() {
            if let Some(pos) = layout.iter().position(|s| s == slot) {
                if pos < cursor {
                    return None;
                }
                cursor = pos + 1;
                continue;
            }

            let remaining = &row[i + 1..];
            let mut at = cursor;
            while at < layout.len() && layout[at] < *slot && !remaining.contains(&layout[at]) {
                at += 1;
            }
            layout.insert(at, *slot);
            cursor = at + 1;
        }
    }

    Some(layout)
}

/// Render each row's tokens as one string, padding options that share a name
/// into common columns.
///
/// Tokens are never reordered or altered: splitting an output string on
/// whitespace yields exactly the input tokens. Rows whose shared options
/// appear in conflicting orders fall back to single-space joining.
pub fn align_arguments(rows: &[&[String]]) -> Vec<String> {
    let row_slots: Vec<Vec<Slot<'_>>> = rows.iter().map(|tokens| slots(tokens)).collect();
    let Some(layout) = merge_layout(&row_slots) else {
        return rows.iter().map(|tokens| tokens.join(" ")).collect();
    };

    let column: HashMap<Slot<'_>, usize> =
        layout.iter().enumerate().map(|(i, s)| (*s, i)).collect();

    let mut widths = vec![0; layout.len()];
    for (tokens, slots) in rows.iter().zip(&row_slots) {
        for (token, slot) in tokens.iter().zip(slots) {
            let col = column[slot];
            widths[col] = widths[col].max(token.chars().count());
        }
    }

    rows.iter()
        .zip(&row_slots)
        .map(|(tokens, slots)| {
            let mut cells: Vec<&str> = vec![""; layout.len()];
            for (token, slot) in tokens.iter().zip(slots) {
                cells[column[slot]] = token.as_str();
            }
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Argument strings for every entry, aligned per dataset group when `align`
/// is set. The result follows the order of [`dataset_groups`].
pub fn arguments_by_group<'a>(
    groups: &[Vec<&'a DatasetEntry>],
    align: bool,
) -> Vec<(&'a DatasetEntry, String)> {
    let mut rows = Vec::new();
    for group in groups {
        if align {
            let tokens: Vec<&[String]> = group.iter().map(|e| e.arguments.as_slice()).collect();
            rows.extend(group.iter().copied().zip(align_arguments(&tokens)));
        } else {
            rows.extend(group.iter().map(|e| (*e, e.argument_string())));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use ior_args_types::Step;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_option_name() {
        assert_eq!(option_name("-D=45"), "-D");
        assert_eq!(option_name("--stoneWallingWearOut=1"), "--stoneWallingWearOut");
        assert_eq!(option_name("-vv"), "-vv");
    }

    #[test]
    fn test_shared_options_line_up() {
        let write = tokens("-C -D=300 -k -w");
        let read = tokens("-C -D=45 -r");
        let aligned = align_arguments(&[write.as_slice(), read.as_slice()]);

        assert_eq!(aligned[0], "-C -D=300 -k    -w");
        assert_eq!(aligned[1], "-C -D=45     -r");
    }

    #[test]
    fn test_alignment_never_changes_tokens() {
        let rows = [
            tokens("--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -l=random -vv -w"),
            tokens("--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -l=random -r -vv"),
            tokens("--stoneWallingWearOut=1 -C -D=45 -F -e -g -l=random -r -vv"),
        ];
        let refs: Vec<&[String]> = rows.iter().map(Vec::as_slice).collect();

        for (aligned, original) in align_arguments(&refs).iter().zip(&rows) {
            assert_eq!(&tokens(aligned), original);
        }
    }

    #[test]
    fn test_conflicting_order_falls_back() {
        let a = tokens("-w -C");
        let b = tokens("-C -w");
        assert_eq!(align_arguments(&[a.as_slice(), b.as_slice()]), vec!["-w -C", "-C -w"]);
    }

    #[test]
    fn test_repeated_options_get_own_columns() {
        let a = tokens("-v -v -w");
        let b = tokens("-v -r");
        let aligned = align_arguments(&[a.as_slice(), b.as_slice()]);
        assert_eq!(aligned[0], "-v    -v -w");
        assert_eq!(aligned[1], "-v -r");
    }

    #[test]
    fn test_groups_follow_dataset_then_step() {
        let randio = |step, args| {
            DatasetEntry::new("randio", "IOPS, Buffered I/O", "glior-3.3", step, tokens(args))
        };
        let entries = vec![
            randio(Step::Read, "-r"),
            DatasetEntry::new("a", "A", "ior", Step::Read, tokens("-r")),
            randio(Step::Write, "-w"),
        ];
        let groups = dataset_groups(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].dataset_name, "A");
        assert_eq!(groups[1][0].step, Step::Write);
        assert_eq!(groups[1][1].step, Step::Read);
    }
}
