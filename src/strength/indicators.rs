// src/strength/indicators.rs
use serde::{Serialize, Deserialize};

/// Symbols the evaluator gives credit for.
pub const DETECTED_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Character classes present in a candidate password.
///
/// Purely derived from the text; recompute it whenever the text changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClassFlags {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_symbol: bool,
}

impl CharacterClassFlags {
    pub fn from_password(password: &str) -> Self {
        Self {
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| DETECTED_SYMBOLS.contains(c)),
        }
    }

    pub fn count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_number, self.has_symbol]
            .iter()
            .filter(|flag| **flag)
            .count()
    }

    /// Labels in the order the checker page lists them.
    pub fn labelled(&self) -> [(&'static str, bool); 4] {
        [
            ("Lower Case", self.has_lower),
            ("Upper Case", self.has_upper),
            ("Numbers", self.has_number),
            ("Symbols", self.has_symbol),
        ]
    }
}
