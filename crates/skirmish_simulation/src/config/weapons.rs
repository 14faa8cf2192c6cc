//! Weapon catalog and weapon collision layers.
//!
//! Architecture:
//! - `WeaponCatalog` maps `WeaponType` → immutable `WeaponConfig`
//! - Validated on load: every weapon type present, all values > 0
//! - `WeaponLayer` is derived once per entity from a single-bit layer mask

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionGroups, Group};
use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult};

/// Weapon type key (index into the catalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum WeaponType {
    /// Slow homing energy missiles (default enemy gunner)
    EnergyLauncher,
    /// Fast low-damage bolts
    PulseRifle,
}

impl WeaponType {
    /// All weapon types; a valid catalog has an entry for each.
    pub const ALL: [WeaponType; 2] = [WeaponType::EnergyLauncher, WeaponType::PulseRifle];
}

/// Projectile kind spawned by a weapon (pool key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum ProjectileKind {
    EnergyMissile,
    PulseBolt,
}

/// Immutable weapon record
///
/// Инвариант: range > 0, shoot_interval > 0, projectile_speed > 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct WeaponConfig {
    /// Max projectile travel distance (metres)
    pub range: f32,
    /// Seconds between two shots
    pub shoot_interval: f32,
    /// Which projectile the pool hands out
    pub projectile: ProjectileKind,
    /// Damage carried by the projectile
    pub damage: u32,
    /// Projectile speed (m/s)
    pub projectile_speed: f32,
}

impl WeaponConfig {
    fn validate(&self, weapon: WeaponType) -> ConfigResult<()> {
        for (field, value) in [
            ("range", self.range),
            ("shoot_interval", self.shoot_interval),
            ("projectile_speed", self.projectile_speed),
        ] {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveWeaponValue { weapon, field, value });
            }
        }
        Ok(())
    }
}

/// Read-only weapon catalog resource
#[derive(Resource, Debug, Clone)]
pub struct WeaponCatalog {
    weapons: HashMap<WeaponType, WeaponConfig>,
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WeaponCatalog {
    /// Build a catalog, failing fast on a missing key or an invalid record.
    pub fn from_entries(weapons: HashMap<WeaponType, WeaponConfig>) -> ConfigResult<Self> {
        for weapon in WeaponType::ALL {
            let config = weapons.get(&weapon).ok_or(ConfigError::MissingWeapon(weapon))?;
            config.validate(weapon)?;
        }
        Ok(Self { weapons })
    }

    /// Parse a RON map, e.g.
    ///
    /// ```ron
    /// {
    ///     EnergyLauncher: (range: 30.0, shoot_interval: 1.5, projectile: EnergyMissile, damage: 20, projectile_speed: 18.0),
    ///     PulseRifle: (range: 25.0, shoot_interval: 0.4, projectile: PulseBolt, damage: 6, projectile_speed: 45.0),
    /// }
    /// ```
    pub fn from_ron(text: &str) -> ConfigResult<Self> {
        let weapons: HashMap<WeaponType, WeaponConfig> = ron::from_str(text)?;
        Self::from_entries(weapons)
    }

    /// Built-in catalog used when no asset is provided.
    pub fn builtin() -> Self {
        let weapons = HashMap::from([
            (
                WeaponType::EnergyLauncher,
                WeaponConfig {
                    range: 30.0,
                    shoot_interval: 1.5,
                    projectile: ProjectileKind::EnergyMissile,
                    damage: 20,
                    projectile_speed: 18.0,
                },
            ),
            (
                WeaponType::PulseRifle,
                WeaponConfig {
                    range: 25.0,
                    shoot_interval: 0.4,
                    projectile: ProjectileKind::PulseBolt,
                    damage: 6,
                    projectile_speed: 45.0,
                },
            ),
        ]);
        Self { weapons }
    }

    /// Look up a weapon config. A miss is a setup error.
    pub fn lookup(&self, weapon: WeaponType) -> ConfigResult<&WeaponConfig> {
        self.weapons.get(&weapon).ok_or(ConfigError::MissingWeapon(weapon))
    }
}

/// Collision layer of the projectiles a weapon fires
///
/// Computed once from a layer mask. The mask must encode exactly one layer;
/// the layer index is the position of that bit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct WeaponLayer {
    mask: u32,
    index: u32,
}

impl WeaponLayer {
    pub fn from_mask(mask: u32) -> ConfigResult<Self> {
        if mask.count_ones() != 1 {
            return Err(ConfigError::InvalidLayerMask(mask));
        }
        Ok(Self {
            mask,
            index: mask.trailing_zeros(),
        })
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Rapier groups for a projectile on this layer (hits everything).
    pub fn collision_groups(&self) -> CollisionGroups {
        CollisionGroups::new(Group::from_bits_truncate(self.mask), Group::ALL)
    }
}
