//! Error types for battle resolution and content loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{EquipmentSlot, MonsterId};

/// Why an action was turned away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRejection {
    /// The other side holds the turn.
    OutOfTurn,
    /// The battle already reached an outcome.
    BattleEnded,
}

impl ActionRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionRejection::OutOfTurn => "action submitted out of turn",
            ActionRejection::BattleEnded => "battle has already ended",
        }
    }
}

impl std::fmt::Display for ActionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the battle resolver.
///
/// All of them are recoverable: the state passed in is left untouched.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BattleError {
    #[error("invalid action: {0}")]
    InvalidActionKind(ActionRejection),

    #[error("unknown enemy '{0}'")]
    UnknownEnemy(MonsterId),

    #[error("invalid combatant '{name}': {reason}")]
    InvalidCombatant { name: String, reason: &'static str },

    #[error("invalid battle config: {0}")]
    InvalidConfig(String),

    #[error("invalid battle state: {0}")]
    InvalidState(&'static str),
}

/// Errors raised while building a content registry.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content tables: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: &'static str, id: String },

    #[error("unknown {kind} id '{id}'")]
    UnknownReference { kind: &'static str, id: String },

    #[error("'{id}' does not fit its slot ({slot:?})")]
    WrongSlot { id: String, slot: EquipmentSlot },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BattleError::InvalidActionKind(ActionRejection::OutOfTurn);
        assert_eq!(err.to_string(), "invalid action: action submitted out of turn");

        let err = BattleError::UnknownEnemy(MonsterId::new("dragon"));
        assert_eq!(err.to_string(), "unknown enemy 'dragon'");

        let err = BattleError::InvalidState("rounds start at 1");
        assert_eq!(err.to_string(), "invalid battle state: rounds start at 1");

        let err = ContentError::Duplicate { kind: "monster", id: "slime".into() };
        assert_eq!(err.to_string(), "duplicate monster id 'slime'");

        let err = ContentError::UnknownReference { kind: "item", id: "elixir".into() };
        assert_eq!(err.to_string(), "unknown item id 'elixir'");
    }
}
