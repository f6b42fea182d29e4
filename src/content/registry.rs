//! Content registry for monster, item, magic and equipment lookup.
//!
//! Tables are built once at startup, either from the built-in set or from a
//! JSON document, and then only read. Lookups of unknown monsters fail with a
//! typed error instead of assuming the id exists.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{
    EquipmentDefinition, EquipmentId, EquipmentSlot, ItemDefinition, ItemEffect, ItemId,
    ItemKind, MagicDefinition, MagicId, MagicKind, MonsterDefinition, MonsterId,
};
use super::player::PlayerProfile;
use crate::core::{Combatant, Stats};
use crate::error::{BattleError, ContentError};

/// On-disk layout of a content document. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDocument {
    monsters: Vec<MonsterDefinition>,
    items: Vec<ItemDefinition>,
    magics: Vec<MagicDefinition>,
    equipment: Vec<EquipmentDefinition>,
}

/// Registry of content definitions.
///
/// ## Example
///
/// ```
/// use rpg_battle::content::{ContentRegistry, MonsterId};
///
/// let registry = ContentRegistry::builtin();
/// let slime = registry.monster(&MonsterId::new("slime")).unwrap();
/// assert_eq!(slime.stats.max_hp, 30);
///
/// assert!(registry.monster(&MonsterId::new("dragon")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    monsters: FxHashMap<MonsterId, MonsterDefinition>,
    items: FxHashMap<ItemId, ItemDefinition>,
    magics: FxHashMap<MagicId, MagicDefinition>,
    equipment: FxHashMap<EquipmentId, EquipmentDefinition>,
}

impl ContentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for monster in builtin_monsters() {
            registry.monsters.insert(monster.id.clone(), monster);
        }
        for item in builtin_items() {
            registry.items.insert(item.id.clone(), item);
        }
        for magic in builtin_magics() {
            registry.magics.insert(magic.id.clone(), magic);
        }
        for gear in builtin_equipment() {
            registry.equipment.insert(gear.id.clone(), gear);
        }
        registry
    }

    /// Parse a JSON document with optional `monsters`, `items`, `magics` and
    /// `equipment` arrays.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for monster in document.monsters {
            registry.register_monster(monster)?;
        }
        for item in document.items {
            registry.register_item(item)?;
        }
        for magic in document.magics {
            registry.register_magic(magic)?;
        }
        for gear in document.equipment {
            registry.register_equipment(gear)?;
        }
        tracing::debug!(
            monsters = registry.monsters.len(),
            items = registry.items.len(),
            magics = registry.magics.len(),
            equipment = registry.equipment.len(),
            "loaded content tables"
        );
        Ok(registry)
    }

    pub fn register_monster(&mut self, monster: MonsterDefinition) -> Result<(), ContentError> {
        if self.monsters.contains_key(&monster.id) {
            return Err(ContentError::Duplicate {
                kind: "monster",
                id: monster.id.0,
            });
        }
        self.monsters.insert(monster.id.clone(), monster);
        Ok(())
    }

    pub fn register_item(&mut self, item: ItemDefinition) -> Result<(), ContentError> {
        if self.items.contains_key(&item.id) {
            return Err(ContentError::Duplicate {
                kind: "item",
                id: item.id.0,
            });
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn register_magic(&mut self, magic: MagicDefinition) -> Result<(), ContentError> {
        if self.magics.contains_key(&magic.id) {
            return Err(ContentError::Duplicate {
                kind: "magic",
                id: magic.id.0,
            });
        }
        self.magics.insert(magic.id.clone(), magic);
        Ok(())
    }

    pub fn register_equipment(&mut self, gear: EquipmentDefinition) -> Result<(), ContentError> {
        if self.equipment.contains_key(&gear.id) {
            return Err(ContentError::Duplicate {
                kind: "equipment",
                id: gear.id.0,
            });
        }
        self.equipment.insert(gear.id.clone(), gear);
        Ok(())
    }

    /// Look up a monster, failing with `UnknownEnemy` if it isn't registered.
    pub fn monster(&self, id: &MonsterId) -> Result<&MonsterDefinition, BattleError> {
        self.monsters
            .get(id)
            .ok_or_else(|| BattleError::UnknownEnemy(id.clone()))
    }

    /// A full-health combatant for the monster registered as `id`.
    pub fn spawn_enemy(&self, id: &MonsterId) -> Result<Combatant, BattleError> {
        self.monster(id).map(MonsterDefinition::spawn)
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    #[must_use]
    pub fn magic(&self, id: &MagicId) -> Option<&MagicDefinition> {
        self.magics.get(id)
    }

    #[must_use]
    pub fn equipment(&self, id: &EquipmentId) -> Option<&EquipmentDefinition> {
        self.equipment.get(id)
    }

    /// Check that every spell, item and piece of gear a profile refers to is
    /// registered, and that gear sits in its own slot.
    pub fn check_profile(&self, profile: &PlayerProfile) -> Result<(), ContentError> {
        for id in &profile.magics {
            if self.magic(id).is_none() {
                return Err(ContentError::UnknownReference { kind: "magic", id: id.0.clone() });
            }
        }
        for id in profile.items.keys() {
            if self.item(id).is_none() {
                return Err(ContentError::UnknownReference { kind: "item", id: id.0.clone() });
            }
        }

        let slots = [
            (EquipmentSlot::Weapon, &profile.equipment.weapon),
            (EquipmentSlot::Armor, &profile.equipment.armor),
            (EquipmentSlot::Accessory, &profile.equipment.accessory),
        ];
        for (slot, id) in slots {
            let Some(id) = id else { continue };
            let gear = self.equipment(id).ok_or_else(|| ContentError::UnknownReference {
                kind: "equipment",
                id: id.0.clone(),
            })?;
            if gear.slot != slot {
                return Err(ContentError::WrongSlot { id: id.0.clone(), slot: gear.slot });
            }
        }
        Ok(())
    }

    /// Iterate over all monster definitions.
    pub fn monsters(&self) -> impl Iterator<Item = &MonsterDefinition> {
        self.monsters.values()
    }

    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
            && self.items.is_empty()
            && self.magics.is_empty()
            && self.equipment.is_empty()
    }
}

fn builtin_monsters() -> Vec<MonsterDefinition> {
    vec![
        MonsterDefinition::new("slime", "Slime", Stats::new(30, 8, 2).with_agility(5))
            .with_rewards(10, 5),
        MonsterDefinition::new(
            "goblin",
            "Goblin",
            Stats::new(50, 12, 5).with_mp(10).with_agility(8).with_level(2),
        )
        .with_rewards(20, 10),
        MonsterDefinition::new(
            "wolf",
            "Dire Wolf",
            Stats::new(80, 18, 6).with_agility(12).with_level(3),
        )
        .with_rewards(35, 15),
    ]
}

fn builtin_items() -> Vec<ItemDefinition> {
    let potion = |id: &str, name: &str, effect: ItemEffect, price: u32, description: &str| {
        ItemDefinition {
            id: ItemId::new(id),
            name: name.to_string(),
            kind: ItemKind::Consumable,
            effect,
            price,
            description: description.to_string(),
        }
    };
    vec![
        potion(
            "potion_hp_small",
            "Small Potion",
            ItemEffect { hp: 50, mp: 0 },
            10,
            "Restores 50 HP",
        ),
        potion(
            "potion_hp_large",
            "Large Potion",
            ItemEffect { hp: 200, mp: 0 },
            50,
            "Restores 200 HP",
        ),
        potion(
            "potion_mp_small",
            "Small Ether",
            ItemEffect { hp: 0, mp: 30 },
            15,
            "Restores 30 MP",
        ),
    ]
}

fn builtin_magics() -> Vec<MagicDefinition> {
    let spell = |id: &str, name: &str, kind: MagicKind, mp_cost: u32, power: u32, text: &str| {
        MagicDefinition {
            id: MagicId::new(id),
            name: name.to_string(),
            kind,
            mp_cost,
            power,
            description: text.to_string(),
        }
    };
    vec![
        spell("fireball", "Fireball", MagicKind::Attack, 5, 30, "Hurls flame at the enemy"),
        spell("heal", "Heal", MagicKind::Heal, 8, 50, "Restores hit points"),
        spell("thunder", "Thunder", MagicKind::Attack, 12, 50, "Calls lightning on the enemy"),
    ]
}

fn builtin_equipment() -> Vec<EquipmentDefinition> {
    let gear = |id: &str, name: &str, slot: EquipmentSlot, attack: u32, defense: u32, price: u32| {
        EquipmentDefinition {
            id: EquipmentId::new(id),
            name: name.to_string(),
            slot,
            attack,
            defense,
            price,
        }
    };
    vec![
        gear("sword_wood", "Wooden Sword", EquipmentSlot::Weapon, 5, 0, 50),
        gear("sword_iron", "Iron Sword", EquipmentSlot::Weapon, 15, 0, 200),
        gear("armor_cloth", "Cloth Tunic", EquipmentSlot::Armor, 0, 3, 50),
        gear("armor_leather", "Leather Armor", EquipmentSlot::Armor, 0, 8, 150),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Equipped;

    #[test]
    fn test_builtin_tables() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.monster_count(), 3);

        let wolf = registry.monster(&MonsterId::new("wolf")).unwrap();
        assert_eq!(wolf.stats.attack, 18);
        assert_eq!(wolf.exp_reward, 35);

        assert_eq!(registry.item(&ItemId::new("potion_hp_small")).unwrap().effect.hp, 50);
        assert_eq!(registry.magic(&MagicId::new("fireball")).unwrap().mp_cost, 5);
        assert!(registry.item(&ItemId::new("elixir")).is_none());
    }

    #[test]
    fn test_unknown_monster_is_typed_error() {
        let registry = ContentRegistry::builtin();
        let err = registry.monster(&MonsterId::new("dragon")).unwrap_err();
        assert_eq!(err, BattleError::UnknownEnemy(MonsterId::new("dragon")));
    }

    #[test]
    fn test_builtin_equipment() {
        let registry = ContentRegistry::builtin();

        let sword = registry.equipment(&EquipmentId::new("sword_iron")).unwrap();
        assert_eq!(sword.slot, EquipmentSlot::Weapon);
        assert_eq!(sword.attack, 15);
        assert_eq!(sword.price, 200);

        let armor = registry.equipment(&EquipmentId::new("armor_leather")).unwrap();
        assert_eq!(armor.defense, 8);
        assert!(registry.equipment(&EquipmentId::new("ring_gold")).is_none());
    }

    #[test]
    fn test_spawn_enemy() {
        let registry = ContentRegistry::builtin();
        let goblin = registry.spawn_enemy(&MonsterId::new("goblin")).unwrap();
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.hp(), 50);
        assert!(registry.spawn_enemy(&MonsterId::new("dragon")).is_err());
    }

    #[test]
    fn test_starting_profile_references_builtin_content() {
        let registry = ContentRegistry::builtin();
        registry.check_profile(&PlayerProfile::starting()).unwrap();

        // Empty tables know none of it
        let err = ContentRegistry::new().check_profile(&PlayerProfile::starting()).unwrap_err();
        assert!(matches!(err, ContentError::UnknownReference { kind: "magic", .. }));
    }

    #[test]
    fn test_check_profile_rejects_bad_gear() {
        let registry = ContentRegistry::builtin();
        let mut profile = PlayerProfile::starting();

        profile.equipment = Equipped {
            weapon: Some(EquipmentId::new("sword_wood")),
            armor: Some(EquipmentId::new("armor_cloth")),
            accessory: None,
        };
        registry.check_profile(&profile).unwrap();

        profile.equipment.weapon = Some(EquipmentId::new("armor_leather"));
        assert!(matches!(
            registry.check_profile(&profile),
            Err(ContentError::WrongSlot { slot: EquipmentSlot::Armor, .. })
        ));

        profile.equipment.weapon = Some(EquipmentId::new("excalibur"));
        assert!(matches!(
            registry.check_profile(&profile),
            Err(ContentError::UnknownReference { kind: "equipment", .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "monsters": [
                {"id": "bat", "name": "Bat",
                 "stats": {"hp": 12, "max_hp": 12, "attack": 5, "defense": 1},
                 "exp_reward": 3, "gold_reward": 1}
            ],
            "magics": [
                {"id": "spark", "name": "Spark", "kind": "attack", "mp_cost": 2, "power": 10}
            ],
            "equipment": [
                {"id": "club", "name": "Club", "slot": "weapon", "attack": 3, "price": 5}
            ]
        }"#;

        let registry = ContentRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.monster_count(), 1);
        assert_eq!(registry.monster(&MonsterId::new("bat")).unwrap().stats.attack, 5);
        assert!(registry.magic(&MagicId::new("spark")).is_some());
        assert_eq!(registry.equipment(&EquipmentId::new("club")).unwrap().attack, 3);
        assert!(registry.item(&ItemId::new("potion_hp_small")).is_none());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{"monsters": [
            {"id": "bat", "name": "Bat", "stats": {"hp": 1, "max_hp": 1},
             "exp_reward": 0, "gold_reward": 0},
            {"id": "bat", "name": "Bat 2", "stats": {"hp": 1, "max_hp": 1},
             "exp_reward": 0, "gold_reward": 0}
        ]}"#;

        let err = ContentRegistry::from_json_str(json).unwrap_err();
        assert!(matches!(err, ContentError::Duplicate { kind: "monster", .. }));
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            ContentRegistry::from_json_str("{ not json"),
            Err(ContentError::Parse(_))
        ));
        assert!(ContentRegistry::from_json_str("{}").unwrap().is_empty());
    }
}
