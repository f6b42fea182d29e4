//! Damage formula.

use crate::core::Combatant;

/// Damage of a plain attack: attack minus defense, never below `floor`.
///
/// ```
/// use rpg_battle::battle::attack_damage;
///
/// assert_eq!(attack_damage(20, 2, 1), 18);
/// assert_eq!(attack_damage(8, 10, 1), 1);
/// ```
#[must_use]
pub fn attack_damage(attack: u32, defense: u32, floor: u32) -> u32 {
    attack.saturating_sub(defense).max(floor)
}

/// Damage `attacker` deals to `defender` with a plain attack.
#[must_use]
pub fn strike_damage(attacker: &Combatant, defender: &Combatant, floor: u32) -> u32 {
    attack_damage(attacker.attack(), defender.defense(), floor)
}
