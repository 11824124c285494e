// src/generators/session.rs
use crate::clipboard::{copy_to_clipboard, ClipboardSink, CopyNotice};
use crate::generators::password::{CharacterClass, PasswordGenerator};
use crate::generators::random::{RandomSource, SystemRandom};
use crate::models::GenerationConfig;

/// State behind the generator page: the current options and the password
/// they produced.
///
/// Every change to the options regenerates synchronously, so the displayed
/// password always matches the latest configuration.
pub struct GeneratorSession<R = SystemRandom> {
    config: GenerationConfig,
    password: String,
    generator: PasswordGenerator<R>,
}

impl GeneratorSession<SystemRandom> {
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_source(config, SystemRandom::new())
    }
}

impl<R: RandomSource> GeneratorSession<R> {
    pub fn with_source(mut config: GenerationConfig, rng: R) -> Self {
        config.length = GenerationConfig::clamped_length(config.length);
        let mut generator = PasswordGenerator::with_source(rng);
        let password = generator.generate_password(&config);
        Self { config, password, generator }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn regenerate(&mut self) -> &str {
        self.password = self.generator.generate_password(&self.config);
        log::debug!("Regenerated password with {} characters", self.password.len());
        &self.password
    }

    /// Lengths outside the slider range are pulled back to the nearest bound.
    pub fn set_length(&mut self, length: usize) -> &str {
        let clamped = GenerationConfig::clamped_length(length);
        if clamped != length {
            log::debug!("Requested length {} clamped to {}", length, clamped);
        }
        self.config.length = clamped;
        self.regenerate()
    }

    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) -> &str {
        self.config.set_enabled(class, enabled);
        self.regenerate()
    }

    pub fn toggle_class(&mut self, class: CharacterClass) -> &str {
        let enabled = !self.config.is_enabled(class);
        self.set_class(class, enabled)
    }

    pub fn copy_to<C: ClipboardSink + ?Sized>(&self, sink: &mut C) -> CopyNotice {
        copy_to_clipboard(sink, &self.password)
    }
}
