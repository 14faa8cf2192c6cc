//! Combat events.
//!
//! - `ProjectileFireRequest`: decision layer → projectile launcher
//! - `ProjectileLaunched`: launcher → host (VFX / audio hooks)
//! - `TriggerPulled`: host input → player weapon
//! - `TargetContact`: physical contact between an enemy and another body

use bevy::prelude::*;

use crate::config::{WeaponConfig, WeaponLayer};

/// Event: weapon fires one projectile this tick
#[derive(Event, Debug, Clone)]
pub struct ProjectileFireRequest {
    pub shooter: Entity,
    /// None for player shots (fired along the muzzle, no target)
    pub target: Option<Entity>,
    /// Muzzle world position
    pub origin: Vec3,
    /// Muzzle world orientation
    pub rotation: Quat,
    pub weapon: WeaponConfig,
    pub layer: WeaponLayer,
}

/// Event: pooled projectile instance is live
#[derive(Event, Debug, Clone, Copy)]
pub struct ProjectileLaunched {
    pub projectile: Entity,
    pub shooter: Entity,
}

/// Event: player pulled the trigger (fires only if the weapon is ready)
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerPulled {
    pub shooter: Entity,
}

/// Event: `entity` touched `other` (physics contact began)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetContact {
    pub entity: Entity,
    pub other: Entity,
}
