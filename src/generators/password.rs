use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::charset;
use crate::strength::{StrengthScorer, MIN_LENGTH};

pub const MAX_STRONG_ATTEMPTS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid password length {0}: length must be at least 1")]
    InvalidLength(usize),

    #[error("A strong password needs at least {min} characters, got {length}")]
    TooShortForStrong { length: usize, min: usize },

    #[error("No strong password found after {0} attempts")]
    Exhausted(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator {
    alphabet: Vec<char>,
    scorer: StrengthScorer,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            alphabet: charset::alphabet(),
            scorer: StrengthScorer::new(),
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Draw `length` characters uniformly, with replacement, from the alphabet.
    pub fn generate_password(&self, length: usize) -> Result<String> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength(length));
        }

        let mut rng = rand::thread_rng();
        let dist = Uniform::from(0..self.alphabet.len());

        log::debug!("generating password of length {}", length);

        Ok((0..length)
            .map(|_| self.alphabet[dist.sample(&mut rng)])
            .collect())
    }

    /// Generate passwords until one satisfies every strength rule.
    pub fn generate_strong_password(&self, length: usize) -> Result<String> {
        if length == 0 {
            return Err(GeneratorError::InvalidLength(length));
        }
        if length < MIN_LENGTH {
            return Err(GeneratorError::TooShortForStrong { length, min: MIN_LENGTH });
        }

        for attempt in 1..=MAX_STRONG_ATTEMPTS {
            let password = self.generate_password(length)?;
            if self.scorer.score(&password).suggestions.is_empty() {
                log::debug!("strong password found after {} attempt(s)", attempt);
                return Ok(password);
            }
        }

        Err(GeneratorError::Exhausted(MAX_STRONG_ATTEMPTS))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
