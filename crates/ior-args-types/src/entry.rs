use crate::Step;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One decoded `Command line` record from an IOR output file.
///
/// `arguments` are kept in sorted token order so that two runs of the same
/// configuration compare equal even if their flags were passed differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Name of the directory that holds the output file
    pub dataset_key: String,
    pub ior_version: String,
    pub arguments: Vec<String>,
    pub source: PathBuf,
    /// 1-based line of the record within `source`
    pub line_number: usize,
}

impl Invocation {
    pub fn has_flag(&self, flag: &str) -> bool {
        self.arguments.iter().any(|a| a == flag)
    }

    /// Arguments joined back into a single command-line string
    pub fn argument_string(&self) -> String {
        self.arguments.join(" ")
    }
}

/// A row of the reference table.
///
/// Entries are built once per extraction run and never mutated afterwards;
/// `(dataset_key, step)` identifies an entry uniquely within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Raw directory name, used for ordering
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub dataset_key: String,
    /// Display name of the dataset
    pub dataset_name: String,
    pub ior_version: String,
    pub step: Step,
    pub arguments: Vec<String>,
}

impl DatasetEntry {
    pub fn new(
        dataset_key: impl Into<String>,
        dataset_name: impl Into<String>,
        ior_version: impl Into<String>,
        step: Step,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            dataset_key: dataset_key.into(),
            dataset_name: dataset_name.into(),
            ior_version: ior_version.into(),
            step,
            arguments,
        }
    }

    pub fn argument_string(&self) -> String {
        self.arguments.join(" ")
    }

    pub fn key(&self) -> (&str, Step) {
        (&self.dataset_key, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_string_preserves_order() {
        let entry = DatasetEntry::new(
            "ior-scaling-rdma.vast.v3-naive",
            "Bandwidth, Naive",
            "ior-incompress",
            Step::Write,
            vec!["-w".to_string(), "-C".to_string(), "-D=45".to_string()],
        );
        assert_eq!(entry.argument_string(), "-w -C -D=45");
        assert_eq!(entry.key(), ("ior-scaling-rdma.vast.v3-naive", Step::Write));
    }

    #[test]
    fn test_invocation_has_flag_matches_whole_tokens() {
        let inv = Invocation {
            dataset_key: "randio".to_string(),
            ior_version: "glior-3.3".to_string(),
            arguments: vec!["-k".to_string(), "-r".to_string(), "-vv".to_string()],
            source: PathBuf::from("randio/ior-n1p4.out"),
            line_number: 3,
        };
        assert!(inv.has_flag("-r"));
        assert!(!inv.has_flag("-v"));
    }
}
