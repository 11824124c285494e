// src/models.rs
use serde::{Serialize, Deserialize};

use crate::generators::CharacterClass;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;
pub const DEFAULT_PASSWORD_LENGTH: usize = 14;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    /// Clamp a requested length into the range offered by the length controls.
    pub fn clamped_length(length: usize) -> usize {
        length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Number => self.include_numbers,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Number => &mut self.include_numbers,
            CharacterClass::Symbol => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }
}

/// Assessment returned by the remote evaluator, or the local placeholder
/// used when the evaluator could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub strength_score: i32,
    pub strength_category: String,
    pub is_breached: bool,
    pub suggestions: Vec<String>,
}

impl StrengthResult {
    pub const ERROR_CATEGORY: &'static str = "Error";
    pub const UNREACHABLE_SUGGESTION: &'static str = "Backend not reachable";

    // Placeholder shown whenever a check fails, whatever the cause
    pub fn unreachable() -> Self {
        Self {
            strength_score: 0,
            strength_category: Self::ERROR_CATEGORY.to_string(),
            is_breached: false,
            suggestions: vec![Self::UNREACHABLE_SUGGESTION.to_string()],
        }
    }

    pub fn is_error(&self) -> bool {
        self.strength_category == Self::ERROR_CATEGORY
    }
}
