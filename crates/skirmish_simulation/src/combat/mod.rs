//! Combat system module (enemy decisions + ranged combat)
//!
//! ECS ответственность:
//! - Weapon cooldowns (WeaponFireModel)
//! - Combat decision policy: chase / reposition / engage / hold
//! - Projectile launch from the pool + straight-line flight
//!
//! Host ответственность:
//! - TargetOnSight / TargetSensor (vision, raycasts)
//! - NavigationAgent execution (pathfinding)
//! - Projectile hit resolution

use bevy::prelude::*;

pub mod components;
pub mod decision;
pub mod events;
pub mod systems;


// Re-export основных типов
pub use components::*;
pub use decision::{decide, stand_off_point, CombatAction, DecisionInput};
pub use events::*;
pub use systems::*;

use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. tick_weapon_cooldowns (SimulationSet::Weapons)
/// 2. evaluate_combat_decisions → process_trigger_pulls (SimulationSet::Decisions)
/// 3. advance_projectiles → launch_projectiles (SimulationSet::Projectiles)
///
/// Новые снаряды стартуют из shoot point и начинают лететь со следующего тика.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<ProjectileFireRequest>()
            .add_event::<ProjectileLaunched>()
            .add_event::<TriggerPulled>()
            .add_event::<TargetContact>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                tick_weapon_cooldowns.in_set(SimulationSet::Weapons),
                (evaluate_combat_decisions, process_trigger_pulls)
                    .chain()
                    .in_set(SimulationSet::Decisions),
                (advance_projectiles, launch_projectiles)
                    .chain()
                    .in_set(SimulationSet::Projectiles),
            ),
        );
    }
}
