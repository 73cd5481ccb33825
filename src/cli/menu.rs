// src/cli/menu.rs
use std::fmt;
use anyhow::Result;
use chrono::Utc;
use inquire::{CustomType, InquireError, Select};

use crate::cli::display;
use crate::cli::handlers::{check_password, generate, prompt_password};
use crate::core::config::Config;
use crate::core::history::PasswordHistory;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;
use crate::strength::StrengthScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Check,
    Generate,
    GenerateStrong,
    History,
    Tips,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::Check,
        MenuAction::Generate,
        MenuAction::GenerateStrong,
        MenuAction::History,
        MenuAction::Tips,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Check => "🔍  Check a password",
            MenuAction::Generate => "🎲  Generate a password",
            MenuAction::GenerateStrong => "🔐  Generate a strong password",
            MenuAction::History => "📜  Password history",
            MenuAction::Tips => "📚  Tips",
            MenuAction::Exit => "❌  Exit",
        };
        f.write_str(label)
    }
}

/// What the loop does after a prompt fails.
enum Flow {
    Continue,
    Stop,
}

fn on_prompt_error(err: InquireError) -> Result<Flow> {
    match err {
        // Esc goes back to the menu
        InquireError::OperationCanceled => Ok(Flow::Continue),
        InquireError::OperationInterrupted => Ok(Flow::Stop),
        other => Err(other.into()),
    }
}

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🔐 PASSWORD STRENGTH METER      ║");
    println!("╚══════════════════════════════════════╝");
    println!("Check how strong your password is and get tips to make it stronger!");

    let scorer = StrengthScorer::new();
    let generator = PasswordGenerator::new();
    let mut history = PasswordHistory::new(config.history_size);

    loop {
        let selection = Select::new("Choose an option:", MenuAction::ALL.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let action = match selection {
            Ok(Some(action)) => action,
            Ok(None) => break,
            Err(e) => match on_prompt_error(e)? {
                Flow::Continue => continue,
                Flow::Stop => break,
            },
        };

        log::debug!("menu action: {:?}", action);

        let flow = match action {
            MenuAction::Check => check_step(&scorer, &mut history, config)?,
            MenuAction::Generate => generate_step(&generator, config, false)?,
            MenuAction::GenerateStrong => generate_step(&generator, config, true)?,
            MenuAction::History => {
                println!("{}", display::render_history(&history, Utc::now()));
                Flow::Continue
            }
            MenuAction::Tips => {
                println!("{}", display::render_tips());
                Flow::Continue
            }
            MenuAction::Exit => Flow::Stop,
        };

        if let Flow::Stop = flow {
            break;
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn check_step(scorer: &StrengthScorer, history: &mut PasswordHistory, config: &Config) -> Result<Flow> {
    let password = match prompt_password("Enter your password:", config) {
        Ok(password) => password,
        Err(e) => return on_prompt_error(e),
    };

    if password.is_empty() {
        println!("Nothing to check.");
        return Ok(Flow::Continue);
    }

    let report = check_password(scorer, &password);
    history.record(&password);

    println!("{}", display::render_report(&report));
    Ok(Flow::Continue)
}

fn generate_step(generator: &PasswordGenerator, config: &Config, strong: bool) -> Result<Flow> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(config.default_password_length)
        .with_error_message("Please enter a positive whole number")
        .prompt();

    let length = match length {
        Ok(length) => length,
        Err(e) => return on_prompt_error(e),
    };

    match generate(generator, &PasswordGenerationOptions { length, strong }) {
        Ok(generated) => {
            println!("🎲 Generated password: {}", generated.password);
            println!("{}", display::render_meter(&generated.report));
        }
        Err(e) => {
            log::warn!("password generation failed: {:#}", e);
            println!("❌ {}", e);
        }
    }
    Ok(Flow::Continue)
}
