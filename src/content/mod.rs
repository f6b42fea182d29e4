//! Static game content: monster, item, magic and equipment tables, plus the
//! starting hero.
//!
//! Content is configuration, not state. A `ContentRegistry` is built once
//! and passed by reference to whoever needs to start an encounter.

pub mod definition;
pub mod player;
pub mod registry;

pub use definition::{
    EquipmentDefinition, EquipmentId, EquipmentSlot, ItemDefinition, ItemEffect, ItemId,
    ItemKind, MagicDefinition, MagicId, MagicKind, MonsterDefinition, MonsterId,
};
pub use player::{
    default_player, exp_for_level, Equipped, PlayerProfile, DEFAULT_PLAYER_NAME,
    DEFAULT_PLAYER_STATS, LEVEL_EXP_TABLE, MAX_LEVEL,
};
pub use registry::ContentRegistry;
