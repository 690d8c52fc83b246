//! Greedy strategies
//!
//! All three explore first and exploit the empirically best arm afterwards.
//! They differ in how exploration is spread over the arms and in whether the
//! exploited arm is fixed or re-evaluated every turn.

use rand::Rng;
use tracing::{debug, instrument};

use crate::error::{BanditError, Result};
use crate::ledger::Ledger;
use crate::source::RewardSource;

use super::play;
use super::random::random_strategy;

/// Explore uniformly at random, then commit to the best arm
///
/// Runs `exploration_turns` random turns, fixes `optimal_arm()` once and
/// plays it for `turns` more turns without re-evaluating.
#[instrument(skip(ledger, source, rng), fields(arms = ledger.arm_count()))]
pub fn naive_greedy<S, R>(
    ledger: &mut Ledger,
    source: &mut S,
    rng: &mut R,
    turns: usize,
    exploration_turns: usize,
) -> Result<()>
where
    S: RewardSource + ?Sized,
    R: Rng + ?Sized,
{
    random_strategy(ledger, source, rng, exploration_turns)?;
    exploit_fixed(ledger, source, turns)
}

/// Explore every arm the same number of times, then commit to the best arm
///
/// Each registered arm is played `exploration_turns` times in registration
/// order, so exploration takes `exploration_turns * arm_count` turns in total.
#[instrument(skip(ledger, source), fields(arms = ledger.arm_count()))]
pub fn epsilon_first_greedy<S>(
    ledger: &mut Ledger,
    source: &mut S,
    turns: usize,
    exploration_turns: usize,
) -> Result<()>
where
    S: RewardSource + ?Sized,
{
    let arms: Vec<_> = ledger.arms().collect();
    for arm in arms {
        for _ in 0..exploration_turns {
            play(ledger, source, arm)?;
        }
    }
    exploit_fixed(ledger, source, turns)
}

/// Explore at random, then mostly exploit the current best arm
///
/// After `exploration_turns` random turns, each of the `turns` turns draws
/// `u` uniformly from `[0, 1)`. When `u > epsilon` a random arm is played,
/// otherwise the current `optimal_arm()`. `epsilon` is therefore the
/// probability of exploiting.
#[instrument(skip(ledger, source, rng), fields(arms = ledger.arm_count()))]
pub fn epsilon_greedy<S, R>(
    ledger: &mut Ledger,
    source: &mut S,
    rng: &mut R,
    turns: usize,
    exploration_turns: usize,
    epsilon: f64,
) -> Result<()>
where
    S: RewardSource + ?Sized,
    R: Rng + ?Sized,
{
    validate_epsilon(epsilon)?;
    random_strategy(ledger, source, rng, exploration_turns)?;

    let mut explored = 0usize;
    for _ in 0..turns {
        let arm = if rng.r#gen::<f64>() > epsilon {
            explored += 1;
            ledger.pick_uniform_random_arm(rng)?
        } else {
            ledger.optimal_arm()?
        };
        play(ledger, source, arm)?;
    }

    debug!(explored, exploited = turns - explored, "Epsilon greedy finished");
    Ok(())
}

/// Fix the current optimal arm and play it `turns` times
fn exploit_fixed<S>(ledger: &mut Ledger, source: &mut S, turns: usize) -> Result<()>
where
    S: RewardSource + ?Sized,
{
    let arm = ledger.optimal_arm()?;
    debug!(arm = %arm, turns, "Committing to arm");
    for _ in 0..turns {
        play(ledger, source, arm)?;
    }
    Ok(())
}

pub(crate) fn validate_epsilon(epsilon: f64) -> Result<()> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(())
    } else {
        Err(BanditError::InvalidParameter {
            name: "epsilon",
            reason: format!("{epsilon} is outside [0, 1]"),
        })
    }
}
