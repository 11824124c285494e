// src/cli/handlers.rs
use anyhow::Result;
use console::style;
use inquire::Password;
use serde_json::json;

use crate::cli::{Args, CliCommand};
use crate::clipboard::{copy_to_clipboard, CopyNotice, SystemClipboard};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationConfig;
use crate::strength::{CharacterClassFlags, CheckOutcome, HttpEvaluator, StrengthChecker, StrengthEvaluator};
use crate::utils::{format_indicators, format_result};

// Dispatch the parsed command line
pub async fn run(args: Args, config: Config) -> Result<()> {
    let command = args.command.unwrap_or(CliCommand::Interactive);

    if let Some(generation) = command.generation_config(config.default_password_length) {
        let copy = matches!(command, CliCommand::Generate { copy: true, .. });
        handle_generate(&generation, copy, args.json);
        return Ok(());
    }

    // Local only, the evaluator is never contacted
    if let CliCommand::Classes { password } = command {
        let password = password_or_prompt(password)?;
        handle_classes(&password, args.json);
        return Ok(());
    }

    let evaluator = HttpEvaluator::from_config(&config)?;
    log::debug!("Strength evaluator endpoint: {}", evaluator.endpoint());
    let checker = StrengthChecker::new(evaluator);

    match command {
        CliCommand::Check { password } => {
            let password = password_or_prompt(password)?;
            handle_check(&checker, &password, args.json).await;
        }
        _ => {
            crate::cli::menu::run_cli_menu(&config, &checker).await?;
        }
    }

    Ok(())
}

pub fn handle_generate(generation: &GenerationConfig, copy: bool, as_json: bool) {
    let password = PasswordGenerator::new().generate_password(generation);

    let notice = if copy {
        Some(match SystemClipboard::detect() {
            Ok(mut clipboard) => copy_to_clipboard(&mut clipboard, &password),
            Err(e) => {
                log::warn!("Clipboard unavailable: {}", e);
                CopyNotice::Failed(e.to_string())
            }
        })
    } else {
        None
    };

    if as_json {
        println!("{}", json!({
            "password": password,
            "options": generation,
            "copied": notice.as_ref().map(CopyNotice::is_success),
        }));
        return;
    }

    println!("{}", password);
    if let Some(notice) = notice {
        if notice.is_success() {
            eprintln!("✅ {}", notice.message());
        } else {
            eprintln!("❌ {}", notice.message());
        }
    }
}

pub async fn handle_check<E: StrengthEvaluator>(checker: &StrengthChecker<E>, password: &str, as_json: bool) -> CheckOutcome {
    let flags = CharacterClassFlags::from_password(password);
    let outcome = checker.check_strength(password).await;

    if as_json {
        let (status, result) = match &outcome {
            CheckOutcome::Skipped => ("skipped", None),
            CheckOutcome::Busy => ("busy", None),
            CheckOutcome::Completed(result) => ("completed", Some(result)),
        };
        println!("{}", json!({
            "status": status,
            "indicators": flags,
            "result": result,
            "fill_percent": result.map(|r| r.fill_percent()),
        }));
        return outcome;
    }

    println!("Characters containing: {}", format_indicators(&flags));
    print_outcome(&outcome);
    outcome
}

pub fn print_outcome(outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Skipped => println!("{}", style("Type a password to check it.").dim()),
        CheckOutcome::Busy => println!("{}", style("⏳ A check is already running.").yellow()),
        CheckOutcome::Completed(result) => println!("{}", format_result(result)),
    }
}

pub fn handle_classes(password: &str, as_json: bool) {
    let flags = CharacterClassFlags::from_password(password);
    if as_json {
        println!("{}", json!(flags));
    } else {
        println!("Characters containing: {}", format_indicators(&flags));
    }
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Ok(Password::new("Type a password:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?),
    }
}
