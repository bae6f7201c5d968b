//! Configuration types for agent creation and match scoring.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, ports::GameOutcome};

/// Hyper-parameters of the tabular learning agent.
///
/// Defaults suit a 10,000-game run against a random opponent. Builder-style
/// setters make overrides explicit:
///
/// ```
/// use xo::config::LearningConfig;
///
/// let config = LearningConfig::default()
///     .with_learning_rate(0.5)
///     .with_greedy_eps(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Discount applied to the successor state's value
    pub discount: f64,
    /// Blend factor for Q-value updates
    pub learning_rate: f64,
    /// Probability of exploring with a random action
    pub greedy_eps: f64,
    /// Subtracted from `greedy_eps` after every learning pass
    pub eps_decay: f64,
    /// Subtracted from `learning_rate` after every learning pass
    pub lr_decay: f64,
    /// Lower bound for `greedy_eps`
    pub min_greedy_eps: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            discount: 1.0,
            learning_rate: 0.3,
            greedy_eps: 0.4,
            eps_decay: 0.005,
            lr_decay: 0.00001,
            min_greedy_eps: 0.0,
            seed: None,
        }
    }
}

impl LearningConfig {
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_greedy_eps(mut self, greedy_eps: f64) -> Self {
        self.greedy_eps = greedy_eps;
        self
    }

    pub fn with_decay(mut self, eps_decay: f64, lr_decay: f64) -> Self {
        self.eps_decay = eps_decay;
        self.lr_decay = lr_decay;
        self
    }

    pub fn with_min_greedy_eps(mut self, min_greedy_eps: f64) -> Self {
        self.min_greedy_eps = min_greedy_eps;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, value: f64| {
            if value.is_finite() && (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                })
            }
        };
        unit("discount", self.discount)?;
        unit("learning_rate", self.learning_rate)?;
        unit("greedy_eps", self.greedy_eps)?;
        unit("eps_decay", self.eps_decay)?;
        unit("lr_decay", self.lr_decay)?;
        unit("min_greedy_eps", self.min_greedy_eps)?;

        if self.min_greedy_eps > self.greedy_eps {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "min_greedy_eps ({}) exceeds greedy_eps ({})",
                    self.min_greedy_eps, self.greedy_eps
                ),
            });
        }
        Ok(())
    }
}

/// Payoffs the orchestrator hands to each seat on the terminal observation.
///
/// Asymmetric by default: a learner's win is worth far more than a loss
/// costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeScores {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
}

impl Default for OutcomeScores {
    fn default() -> Self {
        Self {
            win: 10_000.0,
            loss: -100.0,
            draw: 0.0,
        }
    }
}

impl OutcomeScores {
    /// Payoff of `outcome` from the perspective of the player using `mark`.
    pub fn score_for<M: PartialEq>(&self, outcome: &GameOutcome<M>, mark: &M) -> f64 {
        match outcome {
            GameOutcome::Win(winner) if winner == mark => self.win,
            GameOutcome::Win(_) => self.loss,
            GameOutcome::Draw => self.draw,
        }
    }

    /// Payoff of `outcome` for the opponent of the player using `mark`.
    pub fn score_against<M: PartialEq>(&self, outcome: &GameOutcome<M>, mark: &M) -> f64 {
        match outcome {
            GameOutcome::Win(winner) if winner == mark => self.loss,
            GameOutcome::Win(_) => self.win,
            GameOutcome::Draw => self.draw,
        }
    }
}

/// Everything a training run reads from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub learning: LearningConfig,
    pub scores: OutcomeScores,
}

impl RunConfig {
    /// Load and validate a JSON configuration file.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::Serialization`] if it is not valid JSON for this type, and
    /// [`Error::InvalidConfiguration`] if validation fails.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.learning.validate()?;
        Ok(config)
    }
}
