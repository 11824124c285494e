// src/lib.rs
pub mod cli;
pub mod clipboard;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use crate::generators::{generate_password, GeneratorSession, PasswordGenerator};
pub use crate::models::{GenerationConfig, StrengthResult};
pub use crate::strength::{CheckOutcome, HttpEvaluator, StrengthChecker};
