//! # rpg-battle
//!
//! Turn-based battle resolution for a small top-down RPG.
//!
//! ## Design Principles
//!
//! 1. **Explicit results**: Every call returns the next state and an ordered
//!    list of events. No listeners, no hidden emission order.
//!
//! 2. **Immutable content**: Monster, item and magic tables are loaded once
//!    and passed by reference. No global mutable tables.
//!
//! 3. **Typed failures**: Out-of-turn actions and unknown enemy ids are
//!    reported as errors; the input state is never touched.
//!
//! 4. **Deterministic**: All randomness flows through a `RollSource`, either
//!    a seeded ChaCha8 stream or a scripted list of rolls.
//!
//! ## Modules
//!
//! - `core`: Combatants, actions, battle state, RNG, configuration
//! - `content`: Monster / item / magic / equipment tables, the starting
//!   hero and their loadout, the level table
//! - `battle`: Damage formula, events, and the `BattleResolver`
//! - `error`: Error types

pub mod battle;
pub mod content;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, BattleAction, BattleConfig, BattleState, Combatant, GameRng,
    GameRngState, Outcome, Phase, Rewards, RollSource, ScriptedRolls, Side, Stats, Turn,
};

pub use crate::content::{
    default_player, ContentRegistry, EquipmentDefinition, EquipmentId, ItemDefinition, ItemId,
    MagicDefinition, MagicId, MonsterDefinition, MonsterId, PlayerProfile,
};

pub use crate::battle::{attack_damage, BattleEvent, BattleResolver, TurnResult};

pub use crate::error::{ActionRejection, BattleError, ContentError};
