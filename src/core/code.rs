//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of peg colors in `1..=colors`. Unused
//! slots past the code length are always zero, so derived equality, hashing
//! and ordering compare only real pegs.

use super::{Feedback, Rules};
use crate::error::CodeError;
use rand::Rng;
use std::fmt;

const SLOTS: usize = Rules::MAX_LENGTH as usize;
const COLOR_SLOTS: usize = Rules::MAX_COLORS as usize + 1;

/// An immutable peg sequence for a given set of rules
///
/// Ordering matches the enumeration order of [`Code::successor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    rules: Rules,
    pegs: [u8; SLOTS],
}

impl Code {
    /// Create a code from explicit peg colors
    ///
    /// # Errors
    /// Returns `CodeError` if the peg count differs from the rules' length or
    /// any peg is outside `1..=colors`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Rules};
    ///
    /// let code = Code::new(&[1, 2, 3, 4], Rules::CLASSIC).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::new(&[1, 2, 3], Rules::CLASSIC).is_err());
    /// assert!(Code::new(&[1, 2, 3, 7], Rules::CLASSIC).is_err());
    /// ```
    pub fn new(pegs: &[u8], rules: Rules) -> Result<Self, CodeError> {
        let length = usize::from(rules.length());
        if pegs.len() != length {
            return Err(CodeError::InvalidLength {
                expected: length,
                actual: pegs.len(),
            });
        }

        if let Some((position, &peg)) = pegs
            .iter()
            .enumerate()
            .find(|&(_, &peg)| peg == 0 || peg > rules.colors())
        {
            return Err(CodeError::ColorOutOfRange {
                position,
                peg,
                colors: rules.colors(),
            });
        }

        let mut slots = [0u8; SLOTS];
        slots[..length].copy_from_slice(pegs);
        Ok(Self { rules, pegs: slots })
    }

    /// Decode an integer whose decimal digits are the peg colors
    ///
    /// The most significant digit is the first peg. The digit count must equal
    /// the code length; nothing is truncated or padded.
    ///
    /// # Errors
    /// Returns `CodeError` on a digit count mismatch or an out-of-range digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Rules};
    ///
    /// let code = Code::from_integer(1234, Rules::CLASSIC).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::from_integer(12345, Rules::CLASSIC).is_err());
    /// assert!(Code::from_integer(1207, Rules::CLASSIC).is_err());
    /// ```
    pub fn from_integer(value: u64, rules: Rules) -> Result<Self, CodeError> {
        let digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
        Self::new(&digits, rules)
    }

    /// Parse a code typed by a human
    ///
    /// Accepts digits optionally separated by whitespace, ',' or '-', so
    /// "1122", "1 1 2 2" and "1-1-2-2" are the same code.
    ///
    /// # Errors
    /// Returns `CodeError::NotANumber` for any other character, and the
    /// errors of [`Code::new`] for a structurally invalid code.
    pub fn parse(input: &str, rules: Rules) -> Result<Self, CodeError> {
        let trimmed = input.trim();
        let mut digits = Vec::with_capacity(usize::from(rules.length()));

        for ch in trimmed.chars() {
            match ch {
                '0'..='9' => digits.push(ch as u8 - b'0'),
                ',' | '-' => {}
                c if c.is_whitespace() => {}
                _ => return Err(CodeError::NotANumber(trimmed.to_string())),
            }
        }

        if digits.is_empty() {
            return Err(CodeError::NotANumber(trimmed.to_string()));
        }

        Self::new(&digits, rules)
    }

    /// Draw a code with independent uniform pegs
    ///
    /// Used to create a secret; the caller owns the random source.
    pub fn random<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Self {
        let mut pegs = [0u8; SLOTS];
        for peg in pegs.iter_mut().take(usize::from(rules.length())) {
            *peg = rng.random_range(1..=rules.colors());
        }
        Self { rules, pegs }
    }

    /// The minimum code (every peg is color 1)
    #[must_use]
    pub fn first(rules: Rules) -> Self {
        Self::filled(rules, 1)
    }

    /// The maximum code (every peg is the highest color)
    #[must_use]
    pub fn last(rules: Rules) -> Self {
        Self::filled(rules, rules.colors())
    }

    /// The conventional two-pair opening, e.g. 1122 for four pegs
    ///
    /// The first half (rounded up) of the pegs are color 1 and the rest
    /// color 2. With a single color the opening is the only code.
    #[must_use]
    pub fn opening(rules: Rules) -> Self {
        let length = usize::from(rules.length());
        let second = 2.min(rules.colors());
        let mut pegs = [0u8; SLOTS];
        for (i, peg) in pegs.iter_mut().take(length).enumerate() {
            *peg = if i < length.div_ceil(2) { 1 } else { second };
        }
        Self { rules, pegs }
    }

    fn filled(rules: Rules, color: u8) -> Self {
        let mut pegs = [0u8; SLOTS];
        pegs[..usize::from(rules.length())].fill(color);
        Self { rules, pegs }
    }

    /// The rules this code was built for
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// The peg colors, first peg first
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..usize::from(self.rules.length())]
    }

    /// Check whether this is the maximum code in enumeration order
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.pegs().iter().all(|&peg| peg == self.rules.colors())
    }

    /// Compare this code (the answer) against `guess`
    ///
    /// `exact` counts positions with equal colors. `color_only` is the size of
    /// the color multiset intersection minus `exact`, so a repeated color is
    /// only matched as often as it appears in both codes. The counts are the
    /// same whichever code is the receiver.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, Rules};
    ///
    /// let secret = Code::from_integer(4421, Rules::CLASSIC).unwrap();
    /// let guess = Code::from_integer(1234, Rules::CLASSIC).unwrap();
    ///
    /// // Only one of the secret's two 4s can pair with the guess's single 4
    /// assert_eq!(secret.compare(&guess), Feedback::new(0, 3));
    /// assert_eq!(guess.compare(&secret), Feedback::new(0, 3));
    /// ```
    #[must_use]
    pub fn compare(&self, guess: &Self) -> Feedback {
        debug_assert_eq!(self.rules, guess.rules, "codes from different rules");

        let mut exact = 0u8;
        let mut answer_counts = [0u8; COLOR_SLOTS];
        let mut guess_counts = [0u8; COLOR_SLOTS];

        for (&a, &g) in self.pegs().iter().zip(guess.pegs()) {
            if a == g {
                exact += 1;
            }
            answer_counts[usize::from(a)] += 1;
            guess_counts[usize::from(g)] += 1;
        }

        let common: u8 = answer_counts
            .iter()
            .zip(&guess_counts)
            .skip(1)
            .map(|(&a, &g)| a.min(g))
            .sum();

        Feedback::new(exact, common - exact)
    }

    /// The next code in enumeration order
    ///
    /// Works like an odometer over `1..=colors` with the rightmost peg turning
    /// fastest. The maximum code is returned unchanged, which is how callers
    /// detect the end of the enumeration.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Rules};
    ///
    /// let rules = Rules::CLASSIC;
    /// let code = Code::from_integer(1266, rules).unwrap();
    /// assert_eq!(code.successor(), Code::from_integer(1311, rules).unwrap());
    ///
    /// let last = Code::last(rules);
    /// assert_eq!(last.successor(), last);
    /// ```
    #[must_use]
    pub fn successor(&self) -> Self {
        if self.is_last() {
            return *self;
        }

        let mut next = *self;
        let colors = self.rules.colors();
        for peg in next.pegs[..usize::from(self.rules.length())].iter_mut().rev() {
            if *peg == colors {
                *peg = 1;
            } else {
                *peg += 1;
                break;
            }
        }
        next
    }

    /// Canonical integer encoding, the inverse of [`Code::from_integer`]
    #[must_use]
    pub fn to_integer(&self) -> u64 {
        self.pegs()
            .iter()
            .fold(0u64, |acc, &peg| acc * 10 + u64::from(peg))
    }

    /// Check that this code belongs to a game played under `rules`
    ///
    /// # Errors
    /// Returns `CodeError::RulesMismatch` if the rules differ.
    pub fn ensure_rules(&self, rules: Rules) -> Result<(), CodeError> {
        if self.rules == rules {
            Ok(())
        } else {
            Err(CodeError::RulesMismatch {
                expected: rules,
                found: self.rules,
            })
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.pegs() {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
