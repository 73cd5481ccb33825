// src/cli/handlers.rs
use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode};

use crate::cli::display;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthReport};
use crate::strength::StrengthScorer;

// Handlers for CLI commands
pub fn prompt_password(message: &str, config: &Config) -> Result<String, inquire::InquireError> {
    let display_mode = if config.show_password {
        PasswordDisplayMode::Full
    } else {
        PasswordDisplayMode::Masked
    };

    Password::new(message)
        .with_display_mode(display_mode)
        .with_display_toggle_enabled()
        .without_confirmation()
        .with_help_message("Ctrl+R toggles visibility")
        .prompt()
}

pub fn check_password(scorer: &StrengthScorer, password: &str) -> StrengthReport {
    scorer.score(password)
}

pub fn generate(generator: &PasswordGenerator, options: &PasswordGenerationOptions) -> Result<GeneratedPassword> {
    let password = if options.strong {
        generator.generate_strong_password(options.length)?
    } else {
        generator.generate_password(options.length)?
    };

    let report = StrengthScorer::new().score(&password);
    Ok(GeneratedPassword { password, report })
}

pub fn handle_check(password: Option<String>, config: &Config, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Enter your password:", config)
            .context("Failed to read password")?,
    };

    let report = check_password(&StrengthScorer::new(), &password);
    log::info!("checked password, score {}", report.score);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", display::render_report(&report));
    }
    Ok(())
}

pub fn handle_generate(options: PasswordGenerationOptions, json: bool) -> Result<()> {
    let generated = generate(&PasswordGenerator::new(), &options)
        .with_context(|| format!("Failed to generate a password of length {}", options.length))?;
    log::info!("generated password of length {}", options.length);

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        println!("🎲 Generated password: {}", generated.password);
        println!("{}", display::render_meter(&generated.report));
    }
    Ok(())
}

pub fn handle_tips() -> Result<()> {
    println!("{}", display::render_tips());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn generate_reports_strength_of_result() {
        let options = PasswordGenerationOptions { length: 16, strong: true };
        let generated = generate(&PasswordGenerator::new(), &options).unwrap();
        assert_eq!(generated.password.chars().count(), 16);
        assert_eq!(generated.report.score, 5);
    }

    #[test]
    fn generate_surfaces_invalid_length() {
        let options = PasswordGenerationOptions { length: 0, strong: false };
        let err = generate(&PasswordGenerator::new(), &options).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::InvalidLength(0))
        );
    }

    #[test]
    fn default_options_use_twelve_characters() {
        let generated = generate(&PasswordGenerator::new(), &PasswordGenerationOptions::default()).unwrap();
        assert_eq!(generated.password.chars().count(), 12);
    }
}
