// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Build the logger for the configured level and target
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(log_file)?)));
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialised at level {}", config.log_level);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Ok(file)
}
