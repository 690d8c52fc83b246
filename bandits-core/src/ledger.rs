//! Reward ledger for a multi-armed bandit
//!
//! The ledger owns every arm's reward history plus two turn-indexed traces
//! shared across arms: regret against the currently estimated optimal arm, and
//! the cumulative reward ("metric"). Strategies read statistics from it and
//! append each turn through [`Ledger::record`], the only mutating path.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::arm::ArmId;
use crate::error::{BanditError, Result};

/// Reward history for a single arm
#[derive(Debug, Clone)]
struct ArmHistory {
    id: ArmId,
    rewards: Vec<f64>,
    total: f64,
    /// Cumulative regret of this arm, one entry per recorded reward
    regret: Vec<f64>,
}

impl ArmHistory {
    fn new(id: ArmId) -> Self {
        Self {
            id,
            rewards: Vec::new(),
            total: 0.0,
            regret: Vec::new(),
        }
    }

    fn push(&mut self, reward: f64) {
        self.rewards.push(reward);
        self.total += reward;
    }

    /// Mean reward; an arm that was never played has mean 0
    fn mean(&self) -> f64 {
        if self.rewards.is_empty() {
            0.0
        } else {
            self.total / self.rewards.len() as f64
        }
    }
}

/// Per-arm reward ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Arms in registration order
    arms: Vec<ArmHistory>,
    /// Position of each arm in `arms`
    index: HashMap<ArmId, usize>,
    regret: Vec<f64>,
    metric: Vec<f64>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with the given arms registered
    pub fn with_arms(arms: impl IntoIterator<Item = ArmId>) -> Result<Self> {
        let mut ledger = Self::new();
        for arm in arms {
            ledger.register_arm(arm)?;
        }
        Ok(ledger)
    }

    /// Register an arm with an empty reward history
    ///
    /// Registering an arm that has no rewards yet resets it in place. An arm
    /// that already has recorded rewards is rejected with
    /// [`BanditError::AlreadyRegistered`] so its history cannot be lost.
    pub fn register_arm(&mut self, id: ArmId) -> Result<()> {
        match self.index.get(&id) {
            Some(&pos) if !self.arms[pos].rewards.is_empty() => {
                Err(BanditError::AlreadyRegistered(id))
            }
            Some(&pos) => {
                self.arms[pos] = ArmHistory::new(id);
                Ok(())
            }
            None => {
                self.index.insert(id, self.arms.len());
                self.arms.push(ArmHistory::new(id));
                Ok(())
            }
        }
    }

    /// Number of registered arms
    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Registered arm ids in registration order
    pub fn arms(&self) -> impl Iterator<Item = ArmId> + '_ {
        self.arms.iter().map(|arm| arm.id)
    }

    pub fn contains(&self, id: ArmId) -> bool {
        self.index.contains_key(&id)
    }

    /// Pick a registered arm with uniform probability
    pub fn pick_uniform_random_arm<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ArmId> {
        self.arms
            .choose(rng)
            .map(|arm| arm.id)
            .ok_or(BanditError::EmptyLedger)
    }

    /// Mean reward of an arm, 0 if it was never played
    pub fn mean_reward(&self, id: ArmId) -> Result<f64> {
        self.arm(id).map(ArmHistory::mean)
    }

    /// Snapshot of every arm's mean reward, in registration order
    pub fn all_mean_rewards(&self) -> Vec<(ArmId, f64)> {
        self.arms.iter().map(|arm| (arm.id, arm.mean())).collect()
    }

    /// Arm with the highest mean reward
    ///
    /// Ties resolve to the earliest registered arm. Unplayed arms take part with
    /// mean 0, so a ledger where nothing was played yet returns its first arm.
    pub fn optimal_arm(&self) -> Result<ArmId> {
        self.optimal().map(|(id, _)| id)
    }

    /// Optimal arm together with its mean reward
    fn optimal(&self) -> Result<(ArmId, f64)> {
        let mut best: Option<(ArmId, f64)> = None;
        for arm in &self.arms {
            let mean = arm.mean();
            match best {
                Some((_, best_mean)) if mean <= best_mean => {}
                _ => best = Some((arm.id, mean)),
            }
        }
        best.ok_or(BanditError::NoPlaysYet)
    }

    /// Record one turn: a reward observed on `id`
    ///
    /// Appends the reward to the arm, then appends one regret entry (mean of the
    /// optimal arm after this reward, minus the reward) and one cumulative
    /// reward entry. Returns the regret recorded for this turn.
    ///
    /// Rewards that are not finite, or that would push the arm's total, the
    /// cumulative reward or either regret out of `f64` range, are rejected
    /// without recording anything.
    pub fn record(&mut self, id: ArmId, reward: f64) -> Result<f64> {
        if !reward.is_finite() {
            return Err(BanditError::InvalidParameter {
                name: "reward",
                reason: format!("{reward} is not finite"),
            });
        }
        let pos = *self.index.get(&id).ok_or(BanditError::UnknownArm(id))?;
        let prior_total = self.arms[pos].total;
        self.arms[pos].push(reward);

        let (_, optimal_mean) = self.optimal()?;
        let regret = optimal_mean - reward;
        let metric = self.total_reward() + reward;
        let arm = &mut self.arms[pos];
        let arm_regret = optimal_mean * arm.rewards.len() as f64 - arm.total;

        if ![arm.total, metric, regret, arm_regret].iter().all(|v| v.is_finite()) {
            arm.rewards.pop();
            arm.total = prior_total;
            return Err(BanditError::InvalidParameter {
                name: "reward",
                reason: format!("{reward} overflows the statistics of {id}"),
            });
        }

        arm.regret.push(arm_regret);
        self.regret.push(regret);
        self.metric.push(metric);

        trace!(arm = %id, reward, regret, "Recorded turn");
        Ok(regret)
    }

    /// Rewards recorded for an arm, in arrival order
    pub fn rewards(&self, id: ArmId) -> Result<&[f64]> {
        self.arm(id).map(|arm| arm.rewards.as_slice())
    }

    /// Number of times an arm was played
    pub fn plays(&self, id: ArmId) -> Result<usize> {
        self.arm(id).map(|arm| arm.rewards.len())
    }

    /// Cumulative regret of one arm after each of its plays
    pub fn arm_regret_history(&self, id: ArmId) -> Result<&[f64]> {
        self.arm(id).map(|arm| arm.regret.as_slice())
    }

    /// Regret per turn, across all arms
    pub fn regret_history(&self) -> &[f64] {
        &self.regret
    }

    /// Running sum of rewards per turn, across all arms
    pub fn metric_history(&self) -> &[f64] {
        &self.metric
    }

    /// Turns recorded across all arms
    pub fn total_turns(&self) -> usize {
        self.regret.len()
    }

    pub fn total_reward(&self) -> f64 {
        self.metric.last().copied().unwrap_or(0.0)
    }

    /// Snapshot of per-arm and overall statistics
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            arms: self
                .arms
                .iter()
                .map(|arm| ArmSummary {
                    arm: arm.id,
                    plays: arm.rewards.len(),
                    mean_reward: arm.mean(),
                    total_reward: arm.total,
                    cumulative_regret: arm.regret.last().copied().unwrap_or(0.0),
                })
                .collect(),
            total_turns: self.total_turns(),
            total_reward: self.total_reward(),
            cumulative_regret: self.regret.iter().sum(),
        }
    }

    fn arm(&self, id: ArmId) -> Result<&ArmHistory> {
        self.index
            .get(&id)
            .map(|&pos| &self.arms[pos])
            .ok_or(BanditError::UnknownArm(id))
    }
}

/// Statistics for one arm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmSummary {
    pub arm: ArmId,
    pub plays: usize,
    pub mean_reward: f64,
    pub total_reward: f64,
    /// Last entry of the arm's regret trace
    pub cumulative_regret: f64,
}

/// Statistics for a whole ledger, for plotting and aggregation by callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub arms: Vec<ArmSummary>,
    pub total_turns: usize,
    pub total_reward: f64,
    /// Sum of the per-turn regret trace
    pub cumulative_regret: f64,
}
