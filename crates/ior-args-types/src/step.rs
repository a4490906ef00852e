use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase of a benchmark run.
///
/// Variants are declared in the order the phases run, so sorting by `Step`
/// lists a dataset's rows as Write, Pre-Read, Read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    #[serde(rename = "Write")]
    Write,
    /// Read pass that keeps the file (`-k`) for a later read
    #[serde(rename = "Pre-Read")]
    PreRead,
    #[serde(rename = "Read")]
    Read,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Write, Step::PreRead, Step::Read];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Write => "Write",
            Step::PreRead => "Pre-Read",
            Step::Read => "Read",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Step {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "write" => Ok(Step::Write),
            "pre-read" | "preread" | "pre_read" => Ok(Step::PreRead),
            "read" => Ok(Step::Read),
            _ => Err(crate::Error::UnknownStep(s.to_string())),
        }
    }
}
