//! Battle state.
//!
//! A `BattleState` is created when an encounter starts, advanced only by the
//! resolver, and dropped by the caller once the `Ended` phase has been
//! reported. Every resolver call hands back a fresh state; the one passed in
//! is never modified.
//!
//! The action history uses an `im` persistent vector so cloning a state per
//! call stays O(1) no matter how long the fight runs.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, BattleAction};
use super::combatant::{Combatant, Side};
use crate::error::BattleError;

/// Who holds the right to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    PlayerTurn,
    EnemyTurn,
}

impl Turn {
    /// The side this turn belongs to.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Turn::PlayerTurn => Side::Player,
            Turn::EnemyTurn => Side::Enemy,
        }
    }
}

/// Resolution phase.
///
/// `ResolvingAction` only exists inside a resolver call and is never
/// visible in a returned state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Not ended and not mid-call. Read together with [`BattleState::turn`]:
    /// after the player acts the state is `EnemyTurn` in this phase until
    /// the enemy's reply is resolved, and the menu must stay closed.
    AwaitingPlayerAction,
    ResolvingAction,
    Ended,
}

/// Terminal classification of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
    Escaped,
}

impl Outcome {
    /// Outcome from the player's point of view when `loser` drops to 0 hp.
    #[must_use]
    pub const fn from_defeated(loser: Side) -> Self {
        match loser {
            Side::Enemy => Outcome::Victory,
            Side::Player => Outcome::Defeat,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory => f.write_str("victory"),
            Outcome::Defeat => f.write_str("defeat"),
            Outcome::Escaped => f.write_str("escaped"),
        }
    }
}

/// Experience and gold granted for a victory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rewards {
    pub exp: u32,
    pub gold: u32,
}

/// Complete state of one encounter.
///
/// Deserialization checks that phase, outcome and hit points agree; a state
/// the resolver could never have produced is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBattleState")]
pub struct BattleState {
    player: Combatant,
    enemy: Combatant,
    turn: Turn,
    phase: Phase,
    outcome: Option<Outcome>,

    /// Granted if the enemy is defeated.
    bounty: Rewards,

    /// Round number (starts at 1, advances when control returns to the player).
    round: u32,

    history: Vector<ActionRecord>,
}

impl BattleState {
    /// Fresh state: player to act, nobody has moved yet.
    pub(crate) fn new(player: Combatant, enemy: Combatant, bounty: Rewards) -> Self {
        Self {
            player,
            enemy,
            turn: Turn::PlayerTurn,
            phase: Phase::AwaitingPlayerAction,
            outcome: None,
            bounty,
            round: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set only once the phase is `Ended`.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Rewards this encounter pays out on victory.
    #[must_use]
    pub fn bounty(&self) -> Rewards {
        self.bounty
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every action resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn pass_turn_to(&mut self, turn: Turn) {
        if turn == Turn::PlayerTurn && self.turn == Turn::EnemyTurn {
            self.round += 1;
        }
        self.turn = turn;
    }

    pub(crate) fn end(&mut self, outcome: Outcome) {
        self.phase = Phase::Ended;
        self.outcome = Some(outcome);
    }

    pub(crate) fn record(&mut self, actor: Side, action: BattleAction) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(actor, action, self.round, sequence));
    }
}

/// Unchecked wire form of a `BattleState`.
#[derive(Deserialize)]
struct RawBattleState {
    player: Combatant,
    enemy: Combatant,
    turn: Turn,
    phase: Phase,
    outcome: Option<Outcome>,
    bounty: Rewards,
    round: u32,
    history: Vector<ActionRecord>,
}

impl TryFrom<RawBattleState> for BattleState {
    type Error = BattleError;

    fn try_from(raw: RawBattleState) -> Result<Self, Self::Error> {
        if raw.phase == Phase::ResolvingAction {
            return Err(BattleError::InvalidState("persisted mid-resolution"));
        }
        if raw.outcome.is_some() != (raw.phase == Phase::Ended) {
            return Err(BattleError::InvalidState("outcome must be set exactly when ended"));
        }
        if raw.round == 0 {
            return Err(BattleError::InvalidState("rounds start at 1"));
        }

        let player_down = raw.player.is_defeated();
        let enemy_down = raw.enemy.is_defeated();
        let consistent = match raw.outcome {
            None | Some(Outcome::Escaped) => !player_down && !enemy_down,
            Some(Outcome::Victory) => enemy_down && !player_down,
            Some(Outcome::Defeat) => player_down && !enemy_down,
        };
        if !consistent {
            return Err(BattleError::InvalidState("hit points disagree with outcome"));
        }

        Ok(Self {
            player: raw.player,
            enemy: raw.enemy,
            turn: raw.turn,
            phase: raw.phase,
            outcome: raw.outcome,
            bounty: raw.bounty,
            round: raw.round,
            history: raw.history,
        })
    }
}
