//! Engagement state: who we fight, what the sensor says, are we still alive.
//!
//! `TargetOnSight` and `TargetSensor` are written by the host layer
//! (behaviour graph / vision raycasts); the combat systems only read them.

use bevy::prelude::*;

/// Enemy archetype flags (immutable after init)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CombatProfile {
    /// Kamikaze: chase + self-destruct, no ranged attack
    pub kamikaze: bool,
}

/// Current target (None = nobody on sight, no action this tick)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct TargetOnSight {
    pub target: Option<Entity>,
    /// Stand-off distance kept from the target while shooting (metres)
    pub keep_distance: f32,
}

impl TargetOnSight {
    pub fn new(target: Entity, keep_distance: f32) -> Self {
        Self {
            target: Some(target),
            keep_distance,
        }
    }
}

/// Line-of-sight sensor readout
///
/// `best_shooting_position` is only meaningful while
/// `target_behind_obstacle` is true.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct TargetSensor {
    pub target_behind_obstacle: bool,
    pub best_shooting_position: Vec3,
}

impl TargetSensor {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn obstructed(best_shooting_position: Vec3) -> Self {
        Self {
            target_behind_obstacle: true,
            best_shooting_position,
        }
    }
}

/// Visual presence (mesh enabled). Alive == visible.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct VisualPresence {
    pub visible: bool,
}

impl Default for VisualPresence {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl VisualPresence {
    pub fn is_alive(&self) -> bool {
        self.visible
    }
}

/// Marker: designated target (the player). Contacts with it trigger kamikazes.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CombatTarget;
