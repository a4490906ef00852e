mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ior-args")]
#[command(about = "Tabulate the IOR arguments recorded in benchmark outputs", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $IOR_ARGS_CONFIG or ROOT/ior-args.toml)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(flatten)]
    pub extract: ExtractArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
