// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{GenerationConfig, DEFAULT_PASSWORD_LENGTH};

// Configuration for the generator and the strength checker
#[derive(Debug, Clone)]
pub struct Config {
    // Strength checker
    pub strength_endpoint: String,
    pub check_timeout: Option<Duration>,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Strength checker
            strength_endpoint: "http://127.0.0.1:8000/check".to_string(),
            check_timeout: None, // wait as long as the evaluator takes

            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration from any key lookup (environment, test fixtures)
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Strength checker
        if let Some(url) = lookup("STRENGTH_ENDPOINT") {
            if url.trim().is_empty() {
                log::warn!("Empty STRENGTH_ENDPOINT, keeping {}", config.strength_endpoint);
            } else {
                config.strength_endpoint = url.trim().to_string();
            }
        }

        if let Some(val) = lookup("CHECK_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(0) => config.check_timeout = None,
                Ok(secs) => config.check_timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Invalid CHECK_TIMEOUT_SECS '{}', ignoring", val),
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_password_length = GenerationConfig::clamped_length(length),
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', ignoring", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Starting options for the generator page
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            ..GenerationConfig::default()
        }
    }
}
