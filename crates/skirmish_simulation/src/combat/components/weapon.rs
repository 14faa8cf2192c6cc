//! Weapon fire model + shoot point.

use bevy::prelude::*;

use crate::config::WeaponConfig;

/// Cooldown bookkeeping for a single weapon
///
/// - `tick(dt)`: last_time_shot += dt
/// - `can_fire()`: last_time_shot > shoot_interval (strict)
/// - `record_fire()`: last_time_shot = 0
///
/// Pure bookkeeping: never blocks, never fails.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct WeaponFireModel {
    config: WeaponConfig,
    last_time_shot: f32,
}

impl WeaponFireModel {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            last_time_shot: 0.0,
        }
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    /// Seconds since the last shot (or since init).
    pub fn last_time_shot(&self) -> f32 {
        self.last_time_shot
    }

    pub fn tick(&mut self, delta_seconds: f32) {
        self.last_time_shot += delta_seconds;
    }

    pub fn can_fire(&self) -> bool {
        self.last_time_shot > self.config.shoot_interval
    }

    pub fn record_fire(&mut self) {
        self.last_time_shot = 0.0;
    }
}

/// Muzzle of the weapon
///
/// `offset` is local to the owner's transform; `rotation` is world-space and
/// is snapped toward the target when firing (no interpolation).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ShootPoint {
    pub offset: Vec3,
    pub rotation: Quat,
}

impl Default for ShootPoint {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, -0.5))
    }
}

impl ShootPoint {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            rotation: Quat::IDENTITY,
        }
    }

    /// World position of the muzzle for an owner transform.
    pub fn world_position(&self, owner: &Transform) -> Vec3 {
        owner.translation + owner.rotation * self.offset
    }

    /// Snap the muzzle toward `target` (world space).
    pub fn aim_at(&mut self, owner: &Transform, target: Vec3) {
        let origin = self.world_position(owner);
        self.rotation = Transform::from_translation(origin)
            .looking_at(target, Vec3::Y)
            .rotation;
    }

    /// Forward axis of the muzzle (-Z, Bevy convention).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}
