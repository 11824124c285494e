// src/strength/mod.rs
pub mod client;
pub mod error;
pub mod indicators;
pub mod presentation;

pub use client::{CheckOutcome, HttpEvaluator, StrengthChecker, StrengthEvaluator};
pub use error::StrengthCheckError;
pub use indicators::CharacterClassFlags;
pub use presentation::{category_style_class, fill_fraction, fill_percent};
