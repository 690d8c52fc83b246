//! bandits-core - Multi-armed bandit simulation engine
//!
//! A [`Ledger`] tracks the rewards observed on each arm along with turn-indexed
//! regret and cumulative-reward traces. Strategies in [`strategy`] decide which
//! arm to pull each turn, draw a reward from a [`RewardSource`] and record it.
//!
//! ```
//! use bandits_core::{ArmId, EmpiricalRewards, Ledger, strategy};
//!
//! let mut ledger = Ledger::with_arms([ArmId(1), ArmId(2)])?;
//! let mut source = EmpiricalRewards::with_seed(7)
//!     .with_pool(ArmId(1), vec![0.1, 0.3])?
//!     .with_pool(ArmId(2), vec![0.6, 0.8])?;
//!
//! strategy::epsilon_first_greedy(&mut ledger, &mut source, 90, 5)?;
//!
//! assert_eq!(ledger.total_turns(), 100);
//! assert_eq!(ledger.optimal_arm()?, ArmId(2));
//! # Ok::<(), bandits_core::BanditError>(())
//! ```

pub mod arm;
pub mod error;
pub mod ledger;
pub mod source;
pub mod strategy;

pub use arm::ArmId;
pub use error::{BanditError, Result};
pub use ledger::{ArmSummary, Ledger, LedgerSummary};
pub use source::{DistributionRewards, EmpiricalRewards, FnRewards, RewardSource, from_fn};
pub use strategy::{StrategyConfig, run_strategy};
