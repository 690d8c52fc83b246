//! Upper-confidence-bound selection
//!
//! Score of a played arm: `mean + c * sqrt(ln(total_turns) / plays)`, where
//! `total_turns` counts turns recorded across all arms. An arm that was never
//! played has no defined bonus, so unplayed arms are always selected first, in
//! registration order. Scores are only compared once every arm has a play.

use tracing::{debug, instrument};

use crate::arm::ArmId;
use crate::error::{BanditError, Result};
use crate::ledger::Ledger;
use crate::source::RewardSource;

use super::play;

/// Confidence bonus for an arm with `plays` plays after `total_turns` turns
pub fn exploration_bonus(
    arm: ArmId,
    exploration: f64,
    total_turns: usize,
    plays: usize,
) -> Result<f64> {
    if plays == 0 {
        return Err(BanditError::DivisionByZero { arm });
    }
    if total_turns == 0 {
        return Err(BanditError::LogDomain { total_turns });
    }
    Ok(exploration * ((total_turns as f64).ln() / plays as f64).sqrt())
}

/// Score every arm in registration order; `None` for arms never played
pub fn ucb_scores(ledger: &Ledger, exploration: f64) -> Result<Vec<(ArmId, Option<f64>)>> {
    let total_turns = ledger.total_turns();
    ledger
        .arms()
        .map(|arm| -> Result<(ArmId, Option<f64>)> {
            let plays = ledger.plays(arm)?;
            if plays == 0 {
                return Ok((arm, None));
            }
            let bonus = exploration_bonus(arm, exploration, total_turns, plays)?;
            Ok((arm, Some(ledger.mean_reward(arm)? + bonus)))
        })
        .collect()
}

/// Arm UCB plays next
///
/// The first unplayed arm if there is one, otherwise the highest score with
/// ties going to the earliest registered arm.
pub fn select_ucb_arm(ledger: &Ledger, exploration: f64) -> Result<ArmId> {
    let mut best: Option<(ArmId, f64)> = None;
    for (arm, score) in ucb_scores(ledger, exploration)? {
        let Some(score) = score else {
            return Ok(arm);
        };
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((arm, score)),
        }
    }
    best.map(|(arm, _)| arm).ok_or(BanditError::EmptyLedger)
}

/// Play the highest-scoring arm for `turns` turns
#[instrument(skip(ledger, source), fields(arms = ledger.arm_count()))]
pub fn ucb<S>(ledger: &mut Ledger, source: &mut S, turns: usize, exploration: f64) -> Result<()>
where
    S: RewardSource + ?Sized,
{
    validate_exploration(exploration)?;
    for turn in 0..turns {
        let arm = select_ucb_arm(ledger, exploration)?;
        if ledger.plays(arm)? == 0 {
            debug!(arm = %arm, turn, "Seeding unplayed arm");
        }
        play(ledger, source, arm)?;
    }
    Ok(())
}

pub(crate) fn validate_exploration(exploration: f64) -> Result<()> {
    if exploration.is_finite() && exploration >= 0.0 {
        Ok(())
    } else {
        Err(BanditError::InvalidParameter {
            name: "exploration",
            reason: format!("{exploration} must be finite and non-negative"),
        })
    }
}
