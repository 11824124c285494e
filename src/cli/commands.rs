// src/cli/commands.rs
use clap::Subcommand;

use crate::models::GenerationConfig;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password (uppercase only when no class is selected)
    Generate {
        /// Password length
        #[arg(long, short = 'L', value_parser = clap::value_parser!(u16).range(8..=32))]
        length: Option<u16>,

        /// Include uppercase letters
        #[arg(long, short)]
        upper: bool,

        /// Include lowercase letters
        #[arg(long, short)]
        lower: bool,

        /// Include numbers
        #[arg(long, short)]
        numbers: bool,

        /// Include symbols
        #[arg(long, short)]
        symbols: bool,

        /// Copy the password to the clipboard
        #[arg(long, short)]
        copy: bool,
    },

    /// Send a password to the strength evaluator
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },

    /// Show which character classes a password contains, without contacting the evaluator
    Classes {
        /// Password to inspect (prompted for when omitted)
        password: Option<String>,
    },

    /// Open the interactive menu
    Interactive,
}

impl CliCommand {
    // Options for `generate`, falling back to `default_length` when no length was given
    pub fn generation_config(&self, default_length: usize) -> Option<GenerationConfig> {
        match self {
            CliCommand::Generate { length, upper, lower, numbers, symbols, .. } => Some(GenerationConfig {
                length: length.map(usize::from).unwrap_or(default_length),
                include_uppercase: *upper,
                include_lowercase: *lower,
                include_numbers: *numbers,
                include_symbols: *symbols,
            }),
            _ => None,
        }
    }
}
