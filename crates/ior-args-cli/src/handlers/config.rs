use super::extract::load_config;
use anyhow::{Context, Result};
use ior_args_core::Config;
use std::path::{Path, PathBuf};

pub fn show(root: Option<PathBuf>, config_path: Option<&str>) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let config = load_config(config_path, &root)?;
    let content = toml::to_string_pretty(&config)?;
    print!("{}", content);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    Config::builtin().save_to(path)?;
    println!("Wrote built-in configuration to {}", path.display());
    Ok(())
}
