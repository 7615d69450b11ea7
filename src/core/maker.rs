//! Secret holder
//!
//! The maker keeps the secret code and judges each guess against it.

use super::{Code, Feedback, Rules};
use rand::Rng;

/// Holds a secret code and reports feedback for guesses
#[derive(Debug, Clone)]
pub struct CodeMaker {
    secret: Code,
}

impl CodeMaker {
    /// Create a maker holding a known secret
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// Create a maker holding a uniformly random secret
    pub fn random<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Self {
        Self::new(Code::random(rules, rng))
    }

    /// Feedback of comparing the secret against `guess`
    #[must_use]
    pub fn judge(&self, guess: &Code) -> Feedback {
        self.secret.compare(guess)
    }

    /// The held secret
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// The rules the secret was drawn under
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.secret.rules()
    }
}
