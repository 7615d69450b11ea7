//! Game parameters
//!
//! Code length and color count are fixed for the lifetime of a game.

use crate::error::RulesError;
use std::fmt;

/// The (length, colors) pair every code in a game shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rules {
    length: u8,
    colors: u8,
}

impl Rules {
    /// Longest supported code; a code must still fit in a 9-digit integer
    pub const MAX_LENGTH: u8 = 9;
    /// Most colors supported; each color is written as one decimal digit
    pub const MAX_COLORS: u8 = 9;
    /// Upper bound on `colors^length`, so the universe stays enumerable
    pub const MAX_UNIVERSE: usize = 1 << 20;

    /// Classic Mastermind: 4 pegs, 6 colors
    pub const CLASSIC: Self = Self {
        length: 4,
        colors: 6,
    };

    /// Create validated rules
    ///
    /// # Errors
    /// Returns `RulesError` if either value is zero, above its maximum, or the
    /// resulting universe is too large to enumerate.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::new(4, 6).unwrap();
    /// assert_eq!(rules.universe_size(), 1296);
    ///
    /// assert!(Rules::new(0, 6).is_err());
    /// assert!(Rules::new(4, 10).is_err());
    /// ```
    pub fn new(length: u8, colors: u8) -> Result<Self, RulesError> {
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(RulesError::InvalidLength(length));
        }
        if colors == 0 || colors > Self::MAX_COLORS {
            return Err(RulesError::InvalidColors(colors));
        }

        let too_large = (0..length)
            .try_fold(1usize, |acc, _| acc.checked_mul(usize::from(colors)))
            .is_none_or(|size| size > Self::MAX_UNIVERSE);
        if too_large {
            return Err(RulesError::UniverseTooLarge { length, colors });
        }

        Ok(Self { length, colors })
    }

    /// Number of pegs in a code
    #[inline]
    #[must_use]
    pub const fn length(self) -> u8 {
        self.length
    }

    /// Number of distinct peg colors
    #[inline]
    #[must_use]
    pub const fn colors(self) -> u8 {
        self.colors
    }

    /// Number of distinct codes (`colors^length`)
    #[must_use]
    pub fn universe_size(self) -> usize {
        usize::from(self.colors).pow(u32::from(self.length))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pegs x {} colors", self.length, self.colors)
    }
}
