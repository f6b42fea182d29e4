//! Core battle types: combatants, actions, state, RNG, configuration.

pub mod action;
pub mod combatant;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{ActionKind, ActionRecord, BattleAction};
pub use combatant::{Combatant, Side, Stats};
pub use config::BattleConfig;
pub use rng::{GameRng, GameRngState, RollSource, ScriptedRolls};
pub use state::{BattleState, Outcome, Phase, Rewards, Turn};
