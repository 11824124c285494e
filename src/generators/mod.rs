// src/generators/mod.rs
pub mod password;
pub mod random;
pub mod session;

pub use password::{generate_password, CharacterClass, CharacterPool, PasswordGenerator};
pub use random::{RandomSource, SeededRandom, SystemRandom};
pub use session::GeneratorSession;
