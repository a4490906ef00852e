use super::enums::OutputFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    #[arg(help = "Results directory to scan (default: current directory)")]
    pub root: Option<PathBuf>,

    #[arg(short, long, help = "Write the table to FILE instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "markdown")]
    pub format: OutputFormat,

    #[arg(long, help = "Do not pad arguments into aligned option columns")]
    pub no_align: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Scan a results tree and render the argument table (default)")]
    Extract(ExtractArgs),

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration as TOML")]
    Show {
        #[arg(help = "Results directory used to look up ior-args.toml")]
        root: Option<PathBuf>,
    },

    #[command(about = "Write the built-in configuration to a file")]
    Init {
        #[arg(default_value = "ior-args.toml")]
        path: PathBuf,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
