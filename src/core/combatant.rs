//! Combatants and the side they fight on.
//!
//! ## Side
//!
//! A battle always has exactly two sides: the player and one enemy.
//!
//! ## Combatant
//!
//! Name plus `Stats`. Hit points are clamped to `[0, max_hp]` by every
//! mutator, so a combatant can never be observed outside that range.

use serde::{Deserialize, Serialize};

/// Which side of the encounter an actor belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side across the field.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Enemy => f.write_str("enemy"),
        }
    }
}

/// Character statistics.
///
/// The resolver reads `hp`, `max_hp`, `attack` and `defense`. The rest are
/// carried so content tables round-trip without loss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub agility: u32,
    pub level: u32,
}

impl Stats {
    /// Full-health stats with the given combat values.
    #[must_use]
    pub const fn new(max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            mp: 0,
            max_mp: 0,
            attack,
            defense,
            agility: 0,
            level: 1,
        }
    }

    #[must_use]
    pub const fn with_mp(mut self, max_mp: u32) -> Self {
        self.mp = max_mp;
        self.max_mp = max_mp;
        self
    }

    #[must_use]
    pub const fn with_agility(mut self, agility: u32) -> Self {
        self.agility = agility;
        self
    }

    #[must_use]
    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set current hp, clamped to `max_hp`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }
}

/// One participant of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCombatant")]
pub struct Combatant {
    pub name: String,
    stats: Stats,
}

impl Combatant {
    /// Create a combatant. Current hp/mp are clamped to their maximums.
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        let mut stats = stats;
        stats.hp = stats.hp.min(stats.max_hp);
        stats.mp = stats.mp.min(stats.max_mp);
        Self {
            name: name.into(),
            stats,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.stats.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    #[must_use]
    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    /// True once hit points reach 0.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.hp == 0
    }

    /// Subtract `amount` hit points, stopping at 0. Returns the hp left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
        self.stats.hp
    }
}

/// Unchecked wire form; converted through `Combatant::new` so loaded
/// values obey the same clamps.
#[derive(Deserialize)]
struct RawCombatant {
    name: String,
    stats: Stats,
}

impl From<RawCombatant> for Combatant {
    fn from(raw: RawCombatant) -> Self {
        Combatant::new(raw.name, raw.stats)
    }
}
