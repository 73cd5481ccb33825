use std::path::Path;
use std::process::ExitCode;
use clap::Parser;

mod charset;
mod cli;
mod core;
mod education;
mod generators;
mod logging;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

fn run(args: Args, config: Config) -> anyhow::Result<()> {
    match args.command {
        None => cli::menu::run_cli_menu(&config),
        Some(CliCommand::Check { password }) => cli::handlers::handle_check(password, &config, args.json),
        Some(CliCommand::Generate { length, strong }) => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                strong,
            };
            cli::handlers::handle_generate(options, args.json)
        }
        Some(CliCommand::Tips) => cli::handlers::handle_tips(),
    }
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    if let Err(e) = logging::init(args.log_level, args.log_file.as_deref()) {
        eprintln!("❌ Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
