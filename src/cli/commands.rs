// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Score a password and list suggestions
    Check {
        /// Password to check; prompted for when omitted
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,

        /// Regenerate until all strength rules pass
        #[arg(long)]
        strong: bool,
    },

    /// Show tips for creating strong passwords
    Tips,
}
