//! Turn-based battle resolution.
//!
//! One player against one enemy, alternating turns:
//!
//! ```text
//! AwaitingPlayerAction --[Attack: defender dies]--------------> Ended(Victory)
//! AwaitingPlayerAction --[Attack: defender survives]----------> enemy turn
//! AwaitingPlayerAction --[Flee: roll < escape chance]---------> Ended(Escaped)
//! AwaitingPlayerAction --[Flee: roll >= escape chance]--------> enemy turn
//! AwaitingPlayerAction --[Magic / Item]-----------------------> AwaitingPlayerAction
//! enemy turn           --[enemy attack: player dies]----------> Ended(Defeat)
//! enemy turn           --[enemy attack: player survives]------> AwaitingPlayerAction
//! ```
//!
//! `Ended` is terminal. Callers pace the display of events themselves; the
//! resolver holds no timers.

pub mod damage;
pub mod event;
pub mod resolver;

pub use damage::{attack_damage, strike_damage};
pub use event::{BattleEvent, EventList, TurnResult};
pub use resolver::BattleResolver;
