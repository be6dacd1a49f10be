mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, info};
use netkit_common::config::Config;

use crate::terminal::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config::default();

    dispatch(commands, &cfg).await
}

async fn dispatch(commands: CommandLine, cfg: &Config) -> anyhow::Result<ExitCode> {
    match commands.command {
        Commands::Info { ip } => match info::info(&ip, cfg).await? {
            info::Outcome::Reported => Ok(ExitCode::SUCCESS),
            info::Outcome::InvalidAddress => Ok(ExitCode::FAILURE),
        },
    }
}
