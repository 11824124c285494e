// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{CustomType, MultiSelect, Password, Select};

use crate::cli::handlers::print_outcome;
use crate::clipboard::{CopyNotice, SystemClipboard};
use crate::core::config::Config;
use crate::generators::{CharacterClass, GeneratorSession};
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::strength::{CharacterClassFlags, StrengthChecker, StrengthEvaluator};
use crate::utils::format_indicators;

const GENERATE: &str = "🎲  Generate a password";
const CHECK: &str = "🛡️  How secure is your password?";
const EXIT: &str = "🚪  Exit";

const REGENERATE: &str = "🔄  Regenerate";
const LENGTH: &str = "📏  Change length";
const CLASSES: &str = "🔤  Choose character types";
const COPY: &str = "📋  Copy password";
const BACK: &str = "⬅️  Back";

pub async fn run_cli_menu<E: StrengthEvaluator>(config: &Config, checker: &StrengthChecker<E>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║              🔐 PASSPASS             ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let choice = match Select::new("What would you like to do?", vec![GENERATE, CHECK, EXIT])
            .prompt_skippable()? {
            Some(choice) => choice,
            None => break,
        };

        match choice {
            GENERATE => run_generator_page(config)?,
            CHECK => run_checker_page(checker).await?,
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn run_generator_page(config: &Config) -> Result<()> {
    let mut session = GeneratorSession::new(config.generation_defaults());

    loop {
        let enabled: Vec<&str> = session
            .config()
            .enabled_classes()
            .iter()
            .map(|class| class.label())
            .collect();

        println!();
        println!("🔑 {}", style(session.password()).bold());
        println!(
            "{}",
            style(format!(
                "Length {} | {}",
                session.config().length,
                if enabled.is_empty() { "Uppercase (default)".to_string() } else { enabled.join(", ") }
            ))
            .dim()
        );

        let action = match Select::new("Customize your password:", vec![REGENERATE, LENGTH, CLASSES, COPY, BACK])
            .prompt_skippable()? {
            Some(action) => action,
            None => break,
        };

        match action {
            REGENERATE => {
                session.regenerate();
            }
            LENGTH => {
                let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                if let Some(length) = CustomType::<usize>::new(&prompt)
                    .with_default(session.config().length)
                    .with_error_message("Please type a whole number")
                    .prompt_skippable()? {
                    session.set_length(length);
                }
            }
            CLASSES => {
                let defaults: Vec<usize> = CharacterClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, class)| session.config().is_enabled(**class))
                    .map(|(i, _)| i)
                    .collect();

                if let Some(selected) = MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
                    .with_default(&defaults)
                    .prompt_skippable()? {
                    for class in CharacterClass::ALL {
                        session.set_class(class, selected.contains(&class));
                    }
                }
            }
            COPY => {
                let notice = match SystemClipboard::detect() {
                    Ok(mut clipboard) => session.copy_to(&mut clipboard),
                    Err(e) => CopyNotice::Failed(e.to_string()),
                };
                if notice.is_success() {
                    println!("✅ {}", notice.message());
                } else {
                    println!("❌ {}", notice.message());
                }
            }
            _ => break,
        }
    }

    Ok(())
}

async fn run_checker_page<E: StrengthEvaluator>(checker: &StrengthChecker<E>) -> Result<()> {
    loop {
        let password = match Password::new("Type a password (leave empty to go back):")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt_skippable()? {
            Some(password) if !password.is_empty() => password,
            _ => break,
        };

        println!(
            "Characters containing: {}",
            format_indicators(&CharacterClassFlags::from_password(&password))
        );

        if checker.can_check() {
            println!("{}", style("⏳ Checking...").dim());
        }
        let outcome = checker.check_strength(&password).await;
        print_outcome(&outcome);
        println!();
    }

    Ok(())
}
