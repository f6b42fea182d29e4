//! The starting hero and the progression tables that go with them.
//!
//! ## PlayerProfile
//!
//! Everything a new game hands the player: the combatant itself plus the
//! equipped gear, known spells and the item bag. Battles only consume the
//! `hero` part; the rest is carried for the layers that show menus.
//!
//! ## Level table
//!
//! `LEVEL_EXP_TABLE[n - 1]` is the total experience needed to reach level `n`.
//! The table is read-only data; applying it is left to the caller.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{EquipmentId, ItemId, MagicId};
use crate::core::{Combatant, Stats};

/// Name of the starting hero.
pub const DEFAULT_PLAYER_NAME: &str = "Hero";

/// Stats the hero starts a new game with.
pub const DEFAULT_PLAYER_STATS: Stats = Stats::new(100, 20, 10)
    .with_mp(50)
    .with_agility(15)
    .with_level(1);

/// Total experience required for levels 1 through `MAX_LEVEL`.
pub const LEVEL_EXP_TABLE: [u32; 10] = [0, 100, 250, 500, 900, 1500, 2300, 3400, 4800, 6500];

/// Highest level listed in `LEVEL_EXP_TABLE`.
pub const MAX_LEVEL: u32 = LEVEL_EXP_TABLE.len() as u32;

/// Total experience needed to reach `level`, or `None` outside `1..=MAX_LEVEL`.
#[must_use]
pub fn exp_for_level(level: u32) -> Option<u32> {
    let index = usize::try_from(level.checked_sub(1)?).ok()?;
    LEVEL_EXP_TABLE.get(index).copied()
}

/// The starting hero at full health.
#[must_use]
pub fn default_player() -> Combatant {
    Combatant::new(DEFAULT_PLAYER_NAME, DEFAULT_PLAYER_STATS)
}

/// Gear worn in each slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipped {
    pub weapon: Option<EquipmentId>,
    pub armor: Option<EquipmentId>,
    pub accessory: Option<EquipmentId>,
}

impl Equipped {
    /// Every equipped piece, weapon first.
    pub fn iter(&self) -> impl Iterator<Item = &EquipmentId> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .flatten()
    }
}

/// A hero together with their loadout.
///
/// ## Example
///
/// ```
/// use rpg_battle::content::{ItemId, MagicId, PlayerProfile};
///
/// let profile = PlayerProfile::starting();
/// assert!(profile.knows_magic(&MagicId::new("fireball")));
/// assert_eq!(profile.item_count(&ItemId::new("potion_hp_small")), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub hero: Combatant,
    #[serde(default)]
    pub equipment: Equipped,
    #[serde(default)]
    pub magics: Vec<MagicId>,
    #[serde(default)]
    pub items: FxHashMap<ItemId, u32>,
}

impl PlayerProfile {
    /// A hero with nothing equipped, learned or carried.
    #[must_use]
    pub fn new(hero: Combatant) -> Self {
        Self {
            hero,
            equipment: Equipped::default(),
            magics: Vec::new(),
            items: FxHashMap::default(),
        }
    }

    /// New-game profile: the default hero, Fireball, and three small potions.
    #[must_use]
    pub fn starting() -> Self {
        let mut profile = Self::new(default_player());
        profile.magics.push(MagicId::new("fireball"));
        profile.items.insert(ItemId::new("potion_hp_small"), 3);
        profile
    }

    #[must_use]
    pub fn knows_magic(&self, id: &MagicId) -> bool {
        self.magics.contains(id)
    }

    /// How many of `id` the bag holds.
    #[must_use]
    pub fn item_count(&self, id: &ItemId) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }
}
