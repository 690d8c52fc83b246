//! Arm identifiers

use serde::{Deserialize, Serialize};

/// Integer index of an arm, unique within a [`Ledger`](crate::Ledger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmId(pub u32);

impl ArmId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ArmId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ArmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arm-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ArmId(3).to_string(), "arm-3");
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([("arm", ArmId(7))])).unwrap();
        assert_eq!(toml.trim(), "arm = 7");
    }
}
