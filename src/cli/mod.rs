// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;
use log::LevelFilter;

pub mod commands;
pub mod display;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

use crate::core::config::parse_log_level;

#[derive(Parser, Debug)]
#[command(name = "passmeter", author, version, about, long_about = None)]
pub struct Args {
    /// Print reports as JSON instead of styled text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "PASSMETER_LOG_LEVEL", value_parser = parse_log_level, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "PASSMETER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Command to execute; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from(["passmeter", "generate", "--length", "20", "--strong", "--json"]).unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, strong }) => {
                assert_eq!(length, Some(20));
                assert!(strong);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn negative_length_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["passmeter", "generate", "--length", "-3"]).is_err());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(Args::try_parse_from(["passmeter", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn check_takes_optional_password() {
        let args = Args::try_parse_from(["passmeter", "check", "Abcdef1!"]).unwrap();
        assert!(matches!(
            args.command,
            Some(CliCommand::Check { password: Some(ref p) }) if p == "Abcdef1!"
        ));

        let args = Args::try_parse_from(["passmeter", "check"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Check { password: None })));
    }
}
