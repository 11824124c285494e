// src/generators/password.rs
use serde::{Serialize, Deserialize};

use crate::generators::random::{RandomSource, SystemRandom};
use crate::models::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}<>?/|";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Pool order: upper, lower, number, symbol.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Number => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Number => "Numbers",
            CharacterClass::Symbol => "Symbols",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Characters eligible for sampling under a given configuration.
///
/// Never empty: with every class disabled the pool is the uppercase alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
    fallback: bool,
}

impl CharacterPool {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let mut chars = Vec::new();

        for class in CharacterClass::ALL {
            if config.is_enabled(class) {
                chars.extend(class.alphabet().chars());
            }
        }

        if chars.is_empty() {
            log::debug!("No character class enabled, falling back to uppercase");
            return Self {
                chars: UPPERCASE.chars().collect(),
                fallback: true,
            };
        }

        Self { chars, fallback: false }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    // Draw one character with replacement
    fn sample<R: RandomSource>(&self, rng: &mut R) -> char {
        self.chars[rng.next_index(self.chars.len())]
    }
}

pub struct PasswordGenerator<R = SystemRandom> {
    rng: R,
}

impl PasswordGenerator<SystemRandom> {
    pub fn new() -> Self {
        PasswordGenerator { rng: SystemRandom::new() }
    }
}

impl Default for PasswordGenerator<SystemRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Build a fresh password of exactly `config.length` characters.
    ///
    /// Every position is drawn independently and uniformly from the pool, so
    /// repeated characters are allowed. Nothing is carried over from earlier
    /// calls.
    pub fn generate_password(&mut self, config: &GenerationConfig) -> String {
        let pool = CharacterPool::from_config(config);
        (0..config.length)
            .map(|_| pool.sample(&mut self.rng))
            .collect()
    }
}

/// One-off generation with thread-local randomness.
pub fn generate_password(config: &GenerationConfig) -> String {
    PasswordGenerator::new().generate_password(config)
}
