pub mod info;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netkit")]
#[command(version, about = "A small toolkit for inspecting IP addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about an IP address
    #[command(alias = "i")]
    Info { ip: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
