//! Battle actions and the record kept of them.
//!
//! The battle menu offers four commands. Only `Attack` and `Flee` resolve
//! today; `UseMagic` and `UseItem` are accepted but answered with an
//! `ActionUnavailable` event and hand control straight back to the player.

use serde::{Deserialize, Serialize};

use super::combatant::Side;
use crate::content::{ItemId, MagicId};

/// A command submitted by an actor.
///
/// ```
/// use rpg_battle::core::{ActionKind, BattleAction};
/// use rpg_battle::content::MagicId;
///
/// let cast = BattleAction::UseMagic(MagicId::new("fireball"));
/// assert_eq!(cast.kind(), ActionKind::Magic);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    UseMagic(MagicId),
    UseItem(ItemId),
    Flee,
}

impl BattleAction {
    /// The menu entry this action belongs to.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            BattleAction::Attack => ActionKind::Attack,
            BattleAction::UseMagic(_) => ActionKind::Magic,
            BattleAction::UseItem(_) => ActionKind::Item,
            BattleAction::Flee => ActionKind::Flee,
        }
    }
}

/// Menu entries, in on-screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Magic,
    Item,
    Flee,
}

impl ActionKind {
    /// All entries in menu order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Attack,
        ActionKind::Magic,
        ActionKind::Item,
        ActionKind::Flee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Attack => "attack",
            ActionKind::Magic => "magic",
            ActionKind::Item => "item",
            ActionKind::Flee => "flee",
        }
    }

    /// Whether the resolver has rules for this entry yet.
    #[must_use]
    pub fn is_implemented(&self) -> bool {
        matches!(self, ActionKind::Attack | ActionKind::Flee)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub actor: Side,

    /// The action taken.
    pub action: BattleAction,

    /// Round in which the action was taken.
    pub round: u32,

    /// Position in the battle's action history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(actor: Side, action: BattleAction, round: u32, sequence: u32) -> Self {
        Self {
            actor,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        assert_eq!(BattleAction::Attack.kind(), ActionKind::Attack);
        assert_eq!(BattleAction::Flee.kind(), ActionKind::Flee);
        assert_eq!(BattleAction::UseItem(ItemId::new("potion_hp_small")).kind(), ActionKind::Item);
    }

    #[test]
    fn test_implemented_kinds() {
        let implemented: Vec<_> = ActionKind::ALL.iter().filter(|k| k.is_implemented()).collect();
        assert_eq!(implemented, vec![&ActionKind::Attack, &ActionKind::Flee]);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = BattleAction::UseMagic(MagicId::new("heal"));
        let record = ActionRecord::new(Side::Player, action, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
