use crate::args::ExtractArgs;
use crate::presentation::{RenderOptions, render};
use crate::services::writer::write_output;
use anyhow::{Context, Result};
use ior_args_core::{Config, resolve_config_path};
use ior_args_extract::Extractor;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn handle(args: ExtractArgs, config_path: Option<&str>) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let config = load_config(config_path, &root)?;
    let extraction = Extractor::new(&config).extract(&root)?;

    let stats = &extraction.stats;
    if stats.files_scanned == 0 {
        warn!(root = %root.display(), "no IOR output files found");
    }
    if stats.records_skipped > 0 || stats.files_failed > 0 || stats.conflicts > 0 {
        warn!(
            skipped_records = stats.records_skipped,
            failed_files = stats.files_failed,
            conflicts = stats.conflicts,
            "some records were left out of the table"
        );
    }

    let options = RenderOptions {
        align: !args.no_align,
        color: args.output.is_none() && std::io::stdout().is_terminal(),
    };
    let rendered = render(&extraction.entries, args.format, options)?;
    write_output(args.output.as_deref(), &rendered)?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), rows = extraction.entries.len(), "table written");
    }
    Ok(())
}

pub fn load_config(explicit: Option<&str>, root: &Path) -> Result<Config> {
    let path: Option<PathBuf> = resolve_config_path(explicit, root);

    // A local ior-args.toml is only resolved when present, so a missing path
    // here came from --config or IOR_ARGS_CONFIG
    if let Some(path) = &path
        && !path.exists()
    {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let config = Config::load_or_builtin(path.as_deref())?;
    config.validate()?;
    Ok(config)
}
