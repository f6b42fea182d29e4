//! Static content definitions: monsters, items, magic, equipment.
//!
//! These are plain data. The resolver only ever reads them through the
//! `ContentRegistry`.

use serde::{Deserialize, Serialize};

use crate::core::{Combatant, Rewards, Stats};

macro_rules! content_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

content_id!(
    /// Key of a monster table entry (e.g. `"slime"`).
    MonsterId
);
content_id!(
    /// Key of an item table entry (e.g. `"potion_hp_small"`).
    ItemId
);
content_id!(
    /// Key of a magic table entry (e.g. `"fireball"`).
    MagicId
);
content_id!(
    /// Key of an equipment table entry (e.g. `"sword_wood"`).
    EquipmentId
);

/// A monster the player can encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterDefinition {
    pub id: MonsterId,
    pub name: String,
    pub stats: Stats,
    pub exp_reward: u32,
    pub gold_reward: u32,
}

impl MonsterDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id: MonsterId::new(id),
            name: name.into(),
            stats,
            exp_reward: 0,
            gold_reward: 0,
        }
    }

    #[must_use]
    pub fn with_rewards(mut self, exp: u32, gold: u32) -> Self {
        self.exp_reward = exp;
        self.gold_reward = gold;
        self
    }

    /// A fresh combatant for one encounter.
    #[must_use]
    pub fn spawn(&self) -> Combatant {
        Combatant::new(self.name.clone(), self.stats)
    }

    #[must_use]
    pub fn rewards(&self) -> Rewards {
        Rewards {
            exp: self.exp_reward,
            gold: self.gold_reward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Consumable,
    Key,
    Misc,
}

/// Restoration applied when an item is consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemEffect {
    pub hp: u32,
    pub mp: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub effect: ItemEffect,
    pub price: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicKind {
    Attack,
    Heal,
    Support,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicDefinition {
    pub id: MagicId,
    pub name: String,
    pub kind: MagicKind,
    pub mp_cost: u32,
    pub power: u32,
    #[serde(default)]
    pub description: String,
}

/// Where a piece of equipment is worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

/// Gear a character can equip. Bonuses default to 0 when omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    pub id: EquipmentId,
    pub name: String,
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    pub price: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_spawn_is_full_health() {
        let slime =
            MonsterDefinition::new("slime", "Slime", Stats::new(30, 8, 2)).with_rewards(10, 5);
        let c = slime.spawn();
        assert_eq!(c.name, "Slime");
        assert_eq!(c.hp(), 30);
        assert_eq!(slime.rewards(), Rewards { exp: 10, gold: 5 });
    }

    #[test]
    fn test_ids_are_transparent_in_json() {
        let id = MonsterId::new("goblin");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"goblin\"");
        assert_eq!(format!("{}", id), "goblin");
        assert_eq!(MagicId::from("heal").as_str(), "heal");
    }

    #[test]
    fn test_item_json_defaults() {
        let item: ItemDefinition = serde_json::from_str(
            r#"{"id": "key_gate", "name": "Gate Key", "kind": "key", "price": 0}"#,
        )
        .unwrap();
        assert_eq!(item.kind, ItemKind::Key);
        assert_eq!(item.effect, ItemEffect::default());
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_equipment_bonuses_default_to_zero() {
        let json = r#"{"id": "armor_cloth", "name": "Cloth Tunic", "slot": "armor",
                       "defense": 3, "price": 50}"#;
        let armor: EquipmentDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(armor.slot, EquipmentSlot::Armor);
        assert_eq!(armor.attack, 0);
        assert_eq!(armor.defense, 3);
    }
}
