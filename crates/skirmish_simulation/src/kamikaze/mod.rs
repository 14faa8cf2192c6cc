//! Kamikaze domain: self-destruct on contact with the target.
//!
//! Timeline (D = explosion effect duration):
//! - contact: visual off, explosion sound + effect, callbacks scheduled
//! - D/2: Exploded, navigation frozen
//! - D: Destroyed, entity back to the pool
//!
//! Deactivation by any other cause cancels whatever is still pending.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

pub mod components;
pub mod systems;


pub use components::*;
pub use systems::*;

use crate::SimulationSet;

/// Kamikaze Plugin
///
/// Порядок выполнения (SimulationSet::Kamikaze):
/// 1. tick_self_destruct_sequences
/// 2. expire_explosions
/// 3. detect_target_contacts (Rapier → TargetContact)
/// 4. trigger_self_destruct
///
/// Sequence, запущенная на тике N, впервые тикает на тике N+1.
/// teardown_self_destruct живёт в SimulationSet::Lifecycle.
pub struct KamikazePlugin;

impl Plugin for KamikazePlugin {
    fn build(&self, app: &mut App) {
        // Rapier пишет CollisionEvent; без physics plugin события шлёт host / тесты
        app.add_event::<CollisionEvent>();

        app.add_systems(
            FixedUpdate,
            (
                tick_self_destruct_sequences,
                expire_explosions,
                detect_target_contacts,
                trigger_self_destruct,
            )
                .chain()
                .in_set(SimulationSet::Kamikaze),
        );
    }
}
