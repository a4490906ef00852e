use crate::{Error, Result};
use ior_args_core::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// An IOR output file found under the results root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Name of the directory holding the file
    pub dataset_key: String,
}

/// Locates IOR output files in a results tree.
///
/// Every directory that directly holds output files is treated as one
/// dataset, named after the directory.
pub struct OutputDiscovery<'a> {
    config: &'a Config,
}

impl<'a> OutputDiscovery<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Check if a path looks like an IOR output file
    pub fn probe(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        path.file_name()
            .and_then(|f| f.to_str())
            .is_some_and(|name| self.config.is_output_file(name))
    }

    /// Scan the results root, returning output files in path order.
    ///
    /// Unreadable directories are skipped with a warning.
    pub fn scan(&self, root: &Path) -> Result<Vec<OutputFile>> {
        if !root.is_dir() {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }

        // Canonical root so that files directly under `.` still get a dataset name
        let root = root.canonicalize()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable path");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.probe(path) {
                continue;
            }

            let Some(dataset_key) = dataset_key_for(path) else {
                warn!(path = %path.display(), "cannot name dataset for output file");
                continue;
            };

            debug!(path = %path.display(), dataset = %dataset_key, "found output file");
            files.push(OutputFile {
                path: path.to_path_buf(),
                dataset_key,
            });
        }

        Ok(files)
    }
}

/// Dataset key of an output file: the name of its parent directory
pub fn dataset_key_for(path: &Path) -> Option<String> {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
}
