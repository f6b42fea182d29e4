//! Battle tuning.
//!
//! `BattleConfig` carries the few constants the resolver needs. Defaults
//! reproduce the shipped game: a coin-flip escape and a 1 point damage floor.

use serde::{Deserialize, Serialize};

use crate::error::BattleError;

/// Default chance that Flee succeeds.
pub const DEFAULT_ESCAPE_CHANCE: f64 = 0.5;

/// Default minimum damage of a landed attack.
pub const DEFAULT_MIN_DAMAGE: u32 = 1;

/// Tunables for a `BattleResolver`.
///
/// ## Example
///
/// ```
/// use rpg_battle::core::BattleConfig;
///
/// let config = BattleConfig::default().with_escape_chance(0.25);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.min_damage, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Probability in `[0, 1]` that a Flee roll succeeds.
    pub escape_chance: f64,

    /// Damage floor applied after defense. Must be at least 1.
    pub min_damage: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            escape_chance: DEFAULT_ESCAPE_CHANCE,
            min_damage: DEFAULT_MIN_DAMAGE,
        }
    }
}

impl BattleConfig {
    #[must_use]
    pub fn with_escape_chance(mut self, chance: f64) -> Self {
        self.escape_chance = chance;
        self
    }

    #[must_use]
    pub fn with_min_damage(mut self, min_damage: u32) -> Self {
        self.min_damage = min_damage;
        self
    }

    /// Check the config before handing it to a resolver.
    pub fn validate(&self) -> Result<(), BattleError> {
        if !(0.0..=1.0).contains(&self.escape_chance) {
            return Err(BattleError::InvalidConfig(format!(
                "escape_chance must be within [0, 1], got {}",
                self.escape_chance
            )));
        }
        if self.min_damage == 0 {
            return Err(BattleError::InvalidConfig(
                "min_damage must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.escape_chance, 0.5);
        assert_eq!(config.min_damage, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BattleConfig::default().with_escape_chance(1.5).validate().is_err());
        assert!(BattleConfig::default().with_escape_chance(-0.1).validate().is_err());
        assert!(BattleConfig::default().with_escape_chance(f64::NAN).validate().is_err());
        assert!(BattleConfig::default().with_min_damage(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BattleConfig = serde_json::from_str(r#"{"escape_chance": 0.2}"#).unwrap();
        assert_eq!(config.escape_chance, 0.2);
        assert_eq!(config.min_damage, DEFAULT_MIN_DAMAGE);
    }
}
