//! Error types for bandits-core

use thiserror::Error;

use crate::arm::ArmId;

/// Error type for ledger and strategy operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BanditError {
    /// A random arm was requested but no arms are registered
    #[error("Cannot pick an arm from an empty ledger")]
    EmptyLedger,

    /// The optimal arm was requested but no arms are registered
    #[error("Cannot get optimal arm with no plays")]
    NoPlaysYet,

    /// Arm is not registered (or a reward source has no values for it)
    #[error("Unknown arm: {0}")]
    UnknownArm(ArmId),

    /// Arm already has recorded rewards and cannot be reset
    #[error("Arm {0} is already registered and has recorded rewards")]
    AlreadyRegistered(ArmId),

    /// UCB bonus requested for an arm that was never played
    #[error("Arm {arm} has no plays; exploration bonus is undefined")]
    DivisionByZero { arm: ArmId },

    /// UCB bonus requested before any turn was played
    #[error("Cannot take ln of {total_turns} total turns")]
    LogDomain { total_turns: usize },

    /// A strategy or source parameter is out of range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Strategy configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for BanditError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for bandit operations
pub type Result<T> = std::result::Result<T, BanditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::UnknownArm(ArmId(4));
        assert_eq!(err.to_string(), "Unknown arm: arm-4");
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("kind = ").unwrap_err();
        let err: BanditError = toml_err.into();
        assert!(matches!(err, BanditError::Config(_)));
    }

    #[test]
    fn test_no_plays_yet() {
        assert_eq!(
            BanditError::NoPlaysYet.to_string(),
            "Cannot get optimal arm with no plays"
        );
    }
}
