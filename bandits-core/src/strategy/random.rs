//! Uniform-random play

use rand::Rng;
use tracing::instrument;

use crate::error::Result;
use crate::ledger::Ledger;
use crate::source::RewardSource;

use super::play;

/// Play a uniformly random arm every turn
#[instrument(skip(ledger, source, rng), fields(arms = ledger.arm_count()))]
pub fn random_strategy<S, R>(
    ledger: &mut Ledger,
    source: &mut S,
    rng: &mut R,
    turns: usize,
) -> Result<()>
where
    S: RewardSource + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..turns {
        let arm = ledger.pick_uniform_random_arm(rng)?;
        play(ledger, source, arm)?;
    }
    Ok(())
}
