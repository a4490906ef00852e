use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Environment variable that points at a config file
pub const CONFIG_ENV_VAR: &str = "IOR_ARGS_CONFIG";

/// Config file picked up from the results root when present
pub const CONFIG_FILE_NAME: &str = "ior-args.toml";

const BUILTIN_EXTENSIONS: &[&str] = &[".out", ".out.gz"];

const BUILTIN_DATASETS: &[(&str, &str)] = &[
    ("ior-scaling-rdma.vast.v3-naive", "Bandwidth, Naive"),
    ("ior-scaling-rdma.vast.v4", "Bandwidth, Aged"),
    ("randio", "IOPS, Buffered I/O"),
    ("randio.odirect", "IOPS, Direct I/O"),
    ("randio.vs-size", "IOPS vs. Size"),
];

const BUILTIN_VERSIONS: &[(&str, &str)] = &[("ior+incompress", "ior-incompress")];

/// Extraction and display settings.
///
/// Tables present in a config file are merged over the built-in ones, so a
/// file only needs to list the datasets it adds or renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File name suffixes that mark IOR output files
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Dataset directory name -> display name
    #[serde(default)]
    pub datasets: BTreeMap<String, String>,

    /// IOR source tree name -> display name
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
}

impl Config {
    /// Settings used when no config file is found
    pub fn builtin() -> Self {
        Self {
            extensions: BUILTIN_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            datasets: BUILTIN_DATASETS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            versions: BUILTIN_VERSIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Load config from a specific path, merged over the built-in settings
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(path)?;
        let parsed: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::builtin().merge(parsed))
    }

    /// Load from an optional path, falling back to the built-in settings
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overlay `other` on top of `self`. A non-empty extension list replaces
    /// ours; map entries are inserted one by one.
    pub fn merge(mut self, other: Config) -> Self {
        if !other.extensions.is_empty() {
            self.extensions = other.extensions;
        }
        self.datasets.extend(other.datasets);
        self.versions.extend(other.versions);
        self
    }

    /// Display name for a dataset directory; unknown keys pass through
    pub fn dataset_display<'a>(&'a self, key: &'a str) -> &'a str {
        self.datasets.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Display name for an IOR version; unknown versions pass through
    pub fn version_display<'a>(&'a self, version: &'a str) -> &'a str {
        self.versions.get(version).map(String::as_str).unwrap_or(version)
    }

    /// Whether a file name carries one of the configured output suffixes
    pub fn is_output_file(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.len() > ext.len() && file_name.ends_with(ext.as_str()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.iter().any(|ext| ext.trim().is_empty()) {
            return Err(Error::Config(
                "extensions must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}
