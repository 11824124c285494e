// src/strength/presentation.rs
use crate::models::StrengthResult;

/// Score the evaluator awards a password that passes every rule.
pub const MAX_STRENGTH_SCORE: i32 = 5;

/// Style key for a category label: "Very Weak" becomes "very-weak".
pub fn category_style_class(category: &str) -> String {
    category
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

// Not clamped: scores outside 0..=5 give a fill outside 0..=1
pub fn fill_fraction(score: i32) -> f64 {
    f64::from(score) / f64::from(MAX_STRENGTH_SCORE)
}

pub fn fill_percent(score: i32) -> f64 {
    fill_fraction(score) * 100.0
}

impl StrengthResult {
    pub fn style_class(&self) -> String {
        category_style_class(&self.strength_category)
    }

    pub fn fill_percent(&self) -> f64 {
        fill_percent(self.strength_score)
    }
}
