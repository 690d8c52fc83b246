//! Action-selection strategies
//!
//! Each strategy drives a [`Ledger`] for a fixed number of turns. A turn picks
//! an arm, samples it from the [`RewardSource`] and records the reward. The
//! random generator used for arm selection is passed in by the caller, so a
//! seeded generator makes a run reproducible.
//!
//! | Strategy | Exploration | Exploitation |
//! |----------|-------------|--------------|
//! | [`random_strategy`] | every turn | never |
//! | [`naive_greedy`] | N uniform-random turns | commits to one arm |
//! | [`epsilon_first_greedy`] | N turns per arm, round-robin | commits to one arm |
//! | [`epsilon_greedy`] | N random turns, then with probability `1 - epsilon` | current optimum each turn |
//! | [`ucb`] | unplayed arms first, then via the confidence bonus | highest mean + bonus |
//!
//! Errors abort the run immediately; turns recorded before the error stay in
//! the ledger.

mod config;
mod greedy;
mod random;
mod ucb;

pub use config::{DEFAULT_EPSILON, DEFAULT_EXPLORATION, StrategyConfig, run_strategy};
pub use greedy::{epsilon_first_greedy, epsilon_greedy, naive_greedy};
pub use random::random_strategy;
pub use ucb::{exploration_bonus, select_ucb_arm, ucb, ucb_scores};

use crate::arm::ArmId;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::source::RewardSource;

/// Pull `arm` once and record the reward
fn play<S: RewardSource + ?Sized>(ledger: &mut Ledger, source: &mut S, arm: ArmId) -> Result<()> {
    let reward = source.sample(arm)?;
    ledger.record(arm, reward)?;
    Ok(())
}
