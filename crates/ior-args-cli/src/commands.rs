use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    let config_path = cli.config.as_deref();

    let Some(command) = cli.command else {
        return handlers::extract::handle(cli.extract, config_path);
    };

    match command {
        Commands::Extract(args) => handlers::extract::handle(args, config_path),

        Commands::Config { command } => match command {
            ConfigCommand::Show { root } => handlers::config::show(root, config_path),
            ConfigCommand::Init { path, force } => handlers::config::init(&path, force),
        },
    }
}
