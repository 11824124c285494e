// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;
pub use handlers::run;

#[derive(Parser, Debug)]
#[command(name = "passpass", author, version, about = "Generate passwords and check their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Strength evaluator endpoint
    #[arg(long, global = true, env = "STRENGTH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
