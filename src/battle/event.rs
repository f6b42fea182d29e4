//! Events reported back to the presentation layer.
//!
//! Every resolver call returns the events it produced, in order, next to the
//! new state. Nothing is broadcast; the caller decides how (and whether) to
//! show them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionKind, BattleState, Outcome, Rewards, Side};

/// Something that happened while resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BattleEvent {
    /// `attacker` hit `target` for `amount`; `remaining_hp` is the target's
    /// hit points afterwards.
    Damage {
        attacker: Side,
        target: Side,
        amount: u32,
        remaining_hp: u32,
    },

    /// A Flee roll failed; the enemy acts next.
    EscapeFailed,

    /// The chosen menu entry has no rules yet. The turn is not consumed.
    ActionUnavailable { action: ActionKind },

    /// The encounter is over. `rewards` is set on victory.
    BattleEnded {
        outcome: Outcome,
        rewards: Option<Rewards>,
    },
}

impl BattleEvent {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, BattleEvent::BattleEnded { .. })
    }
}

/// Events of one call. Most turns produce one or two.
pub type EventList = SmallVec<[BattleEvent; 4]>;

/// Result of one resolver call: the next state plus what happened.
#[derive(Clone, Debug)]
pub struct TurnResult {
    pub state: BattleState,
    pub events: EventList,
}

impl TurnResult {
    /// Outcome if this call ended the battle.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Sum of all damage dealt to `target` in this call.
    #[must_use]
    pub fn damage_to(&self, target: Side) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                BattleEvent::Damage { target: t, amount, .. } if *t == target => *amount,
                _ => 0,
            })
            .sum()
    }
}
