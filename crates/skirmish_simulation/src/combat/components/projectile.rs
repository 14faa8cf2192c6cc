//! Launched projectile state.

use bevy::prelude::*;

use crate::config::WeaponConfig;

/// Projectile in flight (pooled instance)
///
/// Летит по прямой из shoot point, возвращается в pool после weapon range.
/// Hit resolution belongs to the host physics layer.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    pub shooter: Entity,
    pub weapon: WeaponConfig,
    /// Collision layer index stamped at launch
    pub layer_index: u32,
    pub velocity: Vec3,
    /// Distance travelled so far (metres)
    pub travelled: f32,
}

impl Projectile {
    pub fn launch(shooter: Entity, weapon: WeaponConfig, layer_index: u32, direction: Vec3) -> Self {
        Self {
            shooter,
            weapon,
            layer_index,
            velocity: direction.normalize_or_zero() * weapon.projectile_speed,
            travelled: 0.0,
        }
    }

    /// Advance one step; returns true once the projectile is out of range.
    pub fn advance(&mut self, transform: &mut Transform, delta: f32) -> bool {
        let step = self.velocity * delta;
        transform.translation += step;
        self.travelled += step.length();
        self.travelled >= self.weapon.range
    }
}
