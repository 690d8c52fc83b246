//! Reward sources
//!
//! A reward source is the black box a strategy pulls: given an arm, it returns
//! one sampled reward. Sources own their random generator so a seeded source
//! replays the same rewards.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand_distr::Distribution;

use crate::arm::ArmId;
use crate::error::{BanditError, Result};

/// Produces one reward per pull of an arm
pub trait RewardSource {
    fn sample(&mut self, arm: ArmId) -> Result<f64>;
}

impl<S: RewardSource + ?Sized> RewardSource for &mut S {
    fn sample(&mut self, arm: ArmId) -> Result<f64> {
        (**self).sample(arm)
    }
}

impl<S: RewardSource + ?Sized> RewardSource for Box<S> {
    fn sample(&mut self, arm: ArmId) -> Result<f64> {
        (**self).sample(arm)
    }
}

/// Reward source backed by a closure
pub struct FnRewards<F>(F);

/// Wrap a closure as a [`RewardSource`]
pub fn from_fn<F>(f: F) -> FnRewards<F>
where
    F: FnMut(ArmId) -> f64,
{
    FnRewards(f)
}

impl<F> RewardSource for FnRewards<F>
where
    F: FnMut(ArmId) -> f64,
{
    fn sample(&mut self, arm: ArmId) -> Result<f64> {
        Ok((self.0)(arm))
    }
}

/// Samples uniformly, with replacement, from a precomputed pool per arm
#[derive(Debug, Clone)]
pub struct EmpiricalRewards<R = StdRng> {
    pools: HashMap<ArmId, Vec<f64>>,
    rng: R,
}

impl EmpiricalRewards<StdRng> {
    /// Create with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create with a fixed seed (for reproducible runs)
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for EmpiricalRewards<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: rand::Rng> EmpiricalRewards<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            pools: HashMap::new(),
            rng,
        }
    }

    /// Set the pool of values an arm draws from
    pub fn insert_pool(&mut self, arm: ArmId, values: Vec<f64>) -> Result<()> {
        if values.is_empty() {
            return Err(BanditError::InvalidParameter {
                name: "values",
                reason: format!("empty reward pool for {arm}"),
            });
        }
        self.pools.insert(arm, values);
        Ok(())
    }

    /// Builder form of [`insert_pool`](Self::insert_pool)
    pub fn with_pool(mut self, arm: ArmId, values: Vec<f64>) -> Result<Self> {
        self.insert_pool(arm, values)?;
        Ok(self)
    }

    pub fn pool(&self, arm: ArmId) -> Option<&[f64]> {
        self.pools.get(&arm).map(Vec::as_slice)
    }
}

impl<R: rand::Rng> RewardSource for EmpiricalRewards<R> {
    fn sample(&mut self, arm: ArmId) -> Result<f64> {
        self.pools
            .get(&arm)
            .and_then(|pool| pool.choose(&mut self.rng))
            .copied()
            .ok_or(BanditError::UnknownArm(arm))
    }
}

/// Samples each arm from a parametric distribution
#[derive(Debug, Clone)]
pub struct DistributionRewards<D, R = StdRng> {
    distributions: HashMap<ArmId, D>,
    rng: R,
}

impl<D: Distribution<f64>> DistributionRewards<D, StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<D: Distribution<f64>> Default for DistributionRewards<D, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Distribution<f64>, R: rand::Rng> DistributionRewards<D, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            distributions: HashMap::new(),
            rng,
        }
    }

    pub fn insert(&mut self, arm: ArmId, distribution: D) {
        self.distributions.insert(arm, distribution);
    }

    #[must_use]
    pub fn with_arm(mut self, arm: ArmId, distribution: D) -> Self {
        self.insert(arm, distribution);
        self
    }
}

impl<D: Distribution<f64>, R: rand::Rng> RewardSource for DistributionRewards<D, R> {
    fn sample(&mut self, arm: ArmId) -> Result<f64> {
        let distribution = self
            .distributions
            .get(&arm)
            .ok_or(BanditError::UnknownArm(arm))?;
        Ok(distribution.sample(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::Normal;

    #[test]
    fn test_fn_rewards() {
        let mut source = from_fn(|arm: ArmId| f64::from(arm.index()) * 0.5);
        assert_eq!(source.sample(ArmId(4)).unwrap(), 2.0);
    }

    #[test]
    fn test_empirical_draws_from_pool() {
        let mut source = EmpiricalRewards::with_seed(3)
            .with_pool(ArmId(1), vec![0.1, 0.2, 0.3])
            .unwrap();
        for _ in 0..100 {
            let reward = source.sample(ArmId(1)).unwrap();
            assert!([0.1, 0.2, 0.3].contains(&reward));
        }
    }

    #[test]
    fn test_empirical_is_reproducible_with_seed() {
        let draw = |seed| {
            let mut source = EmpiricalRewards::with_seed(seed)
                .with_pool(ArmId(1), (0..50).map(f64::from).collect())
                .unwrap();
            (0..20)
                .map(|_| source.sample(ArmId(1)).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(11), draw(11));
    }

    #[test]
    fn test_empirical_unknown_arm() {
        let mut source = EmpiricalRewards::with_seed(0);
        assert_eq!(
            source.sample(ArmId(2)),
            Err(BanditError::UnknownArm(ArmId(2)))
        );
    }

    #[test]
    fn test_empirical_rejects_empty_pool() {
        let mut source = EmpiricalRewards::with_seed(0);
        assert!(matches!(
            source.insert_pool(ArmId(1), Vec::new()),
            Err(BanditError::InvalidParameter { .. })
        ));
        assert!(source.pool(ArmId(1)).is_none());
    }

    #[test]
    fn test_distribution_rewards() {
        let mut source = DistributionRewards::with_seed(5)
            .with_arm(ArmId(1), Normal::new(2.5, 0.0).unwrap());
        assert_eq!(source.sample(ArmId(1)).unwrap(), 2.5);
        assert_eq!(
            source.sample(ArmId(9)),
            Err(BanditError::UnknownArm(ArmId(9)))
        );
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn RewardSource> = Box::new(from_fn(|_| 1.0));
        assert_eq!(source.sample(ArmId(1)).unwrap(), 1.0);
    }
}
