//! Strategy configuration
//!
//! A strategy and its parameters as one serializable value, so a run can be
//! described in TOML:
//!
//! ```toml
//! kind = "epsilon_greedy"
//! turns = 500
//! exploration_turns = 500
//! epsilon = 0.8
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BanditError, Result};
use crate::ledger::Ledger;
use crate::source::RewardSource;

use super::greedy::validate_epsilon;
use super::ucb::validate_exploration;
use super::{epsilon_first_greedy, epsilon_greedy, naive_greedy, random_strategy, ucb};

/// Default exploitation probability for epsilon greedy
pub const DEFAULT_EPSILON: f64 = 0.8;

/// Default UCB exploration constant
pub const DEFAULT_EXPLORATION: f64 = 2.0;

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_exploration() -> f64 {
    DEFAULT_EXPLORATION
}

/// A strategy with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Random {
        turns: usize,
    },
    NaiveGreedy {
        turns: usize,
        exploration_turns: usize,
    },
    /// `exploration_turns` is per arm
    EpsilonFirstGreedy {
        turns: usize,
        exploration_turns: usize,
    },
    EpsilonGreedy {
        turns: usize,
        exploration_turns: usize,
        /// Probability of exploiting on each turn after exploration
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    Ucb {
        turns: usize,
        #[serde(default = "default_exploration")]
        exploration: f64,
    },
}

impl StrategyConfig {
    /// Parse a configuration from TOML
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| BanditError::Config(e.to_string()))
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::EpsilonGreedy { epsilon, .. } => validate_epsilon(*epsilon),
            Self::Ucb { exploration, .. } => validate_exploration(*exploration),
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::NaiveGreedy { .. } => "naive greedy",
            Self::EpsilonFirstGreedy { .. } => "epsilon first greedy",
            Self::EpsilonGreedy { .. } => "epsilon greedy",
            Self::Ucb { .. } => "upper confidence bound",
        }
    }

    /// Turns a run records on a ledger with `arm_count` arms, capped at `usize::MAX`
    pub fn total_turns(&self, arm_count: usize) -> usize {
        match self {
            Self::Random { turns } | Self::Ucb { turns, .. } => *turns,
            Self::NaiveGreedy {
                turns,
                exploration_turns,
            }
            | Self::EpsilonGreedy {
                turns,
                exploration_turns,
                ..
            } => turns.saturating_add(*exploration_turns),
            Self::EpsilonFirstGreedy {
                turns,
                exploration_turns,
            } => turns.saturating_add(exploration_turns.saturating_mul(arm_count)),
        }
    }
}

/// Run the configured strategy against `ledger`
pub fn run_strategy<S, R>(
    config: &StrategyConfig,
    ledger: &mut Ledger,
    source: &mut S,
    rng: &mut R,
) -> Result<()>
where
    S: RewardSource + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    info!(
        strategy = config.name(),
        arms = ledger.arm_count(),
        turns = config.total_turns(ledger.arm_count()),
        "Running strategy"
    );

    match *config {
        StrategyConfig::Random { turns } => random_strategy(ledger, source, rng, turns),
        StrategyConfig::NaiveGreedy {
            turns,
            exploration_turns,
        } => naive_greedy(ledger, source, rng, turns, exploration_turns),
        StrategyConfig::EpsilonFirstGreedy {
            turns,
            exploration_turns,
        } => epsilon_first_greedy(ledger, source, turns, exploration_turns),
        StrategyConfig::EpsilonGreedy {
            turns,
            exploration_turns,
            epsilon,
        } => epsilon_greedy(ledger, source, rng, turns, exploration_turns, epsilon),
        StrategyConfig::Ucb { turns, exploration } => ucb(ledger, source, turns, exploration),
    }
}
