//! Game configuration
//!
//! Loaded from TOML; every field is optional and falls back to classic
//! Mastermind with the minimax breaker. Command-line flags override it.

use crate::core::{Code, Rules};
use crate::error::ConfigError;
use crate::solver::minimax::TieBreak;
use crate::solver::{MinimaxStrategy, StrategyType};
use std::path::Path;

/// Top-level configuration, loadable from TOML
///
/// ```toml
/// length = 4
/// colors = 6
/// max_rounds = 10
/// strategy = "minimax"
/// opening = "1122"
/// prefer_candidates = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pegs per code
    pub length: u8,
    /// Colors per peg
    pub colors: u8,
    /// Round budget for one game
    pub max_rounds: usize,
    /// Breaker strategy name
    pub strategy: String,
    /// First guess for minimax; `Code::opening` when unset
    pub opening: Option<String>,
    /// Break minimax ties in favour of codes that could still be the secret
    pub prefer_candidates: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: Rules::CLASSIC.length(),
            colors: Rules::CLASSIC.colors(),
            max_rounds: 10,
            strategy: "minimax".to_string(),
            opening: None,
            prefer_candidates: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or fails [`GameConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file without validating it
    ///
    /// Lets callers apply overrides before calling [`GameConfig::validate`].
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on a parse or validation failure.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("colors = 8\nmax_rounds = 12").unwrap();
    /// assert_eq!(config.length, 4);
    /// assert_eq!(config.colors, 8);
    /// assert_eq!(config.rules().unwrap().universe_size(), 4096);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    /// Returns `ConfigError` for invalid rules, a zero round budget, an
    /// opening that does not fit the rules, or an unknown strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules()?;
        if self.max_rounds == 0 {
            return Err(ConfigError::Validation("max_rounds must be > 0".into()));
        }
        self.opening_code()?;
        if StrategyType::from_name(&self.strategy).is_none() {
            return Err(ConfigError::Validation(format!(
                "unknown strategy '{}', expected one of: {}",
                self.strategy,
                StrategyType::NAMES.join(", ")
            )));
        }
        Ok(())
    }

    /// The configured rules
    ///
    /// # Errors
    /// Returns `ConfigError::Rules` if length or colors are out of range.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Ok(Rules::new(self.length, self.colors)?)
    }

    /// The configured opening decoded under the configured rules
    ///
    /// # Errors
    /// Returns `ConfigError` if the rules are invalid or the opening does not
    /// decode under them.
    pub fn opening_code(&self) -> Result<Option<Code>, ConfigError> {
        let rules = self.rules()?;
        self.opening
            .as_deref()
            .map(|text| Code::parse(text, rules).map_err(ConfigError::from))
            .transpose()
    }

    /// Build the configured strategy
    ///
    /// # Errors
    /// Returns `ConfigError` if the strategy name is unknown or the opening
    /// is invalid.
    pub fn strategy(&self) -> Result<StrategyType, ConfigError> {
        let strategy = StrategyType::from_name(&self.strategy).ok_or_else(|| {
            ConfigError::Validation(format!("unknown strategy '{}'", self.strategy))
        })?;

        Ok(match strategy {
            StrategyType::Minimax(_) => {
                let tie_break = if self.prefer_candidates {
                    TieBreak::PreferCandidates
                } else {
                    TieBreak::EnumerationOrder
                };
                let mut minimax = MinimaxStrategy::new().with_tie_break(tie_break);
                if let Some(opening) = self.opening_code()? {
                    minimax = minimax.with_opening(opening);
                }
                StrategyType::Minimax(minimax)
            }
            other => other,
        })
    }
}
