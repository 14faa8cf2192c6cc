//! Encounter spawning: enemies on a ring around the player.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::spawn::{spawn_enemy, EnemyBlueprint};
use crate::config::{ConfigResult, SimulationSettings, WeaponCatalog};
use crate::pool::SpawnablePool;
use crate::DeterministicRng;

/// Random point on the XZ ring `min_radius..=max_radius` around `center`.
pub fn ring_position(rng: &mut impl Rng, center: Vec3, min_radius: f32, max_radius: f32) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let radius = if max_radius > min_radius {
        rng.gen_range(min_radius..=max_radius)
    } else {
        min_radius
    };
    center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Where the enemies go and whom they fight
#[derive(Debug, Clone, Copy)]
pub struct EncounterSite {
    pub target: Entity,
    pub center: Vec3,
}

/// Spawn one enemy per blueprint on the spawn ring around the site.
///
/// Stops at the first setup error.
pub fn spawn_encounter(
    commands: &mut Commands,
    pool: &mut SpawnablePool,
    catalog: &WeaponCatalog,
    settings: &SimulationSettings,
    rng: &mut DeterministicRng,
    site: EncounterSite,
    blueprints: &[EnemyBlueprint],
) -> ConfigResult<Vec<Entity>> {
    blueprints
        .iter()
        .map(|blueprint| {
            let position = ring_position(
                &mut rng.rng,
                site.center,
                settings.spawn_ring_min_radius,
                settings.spawn_ring_max_radius,
            );
            spawn_enemy(commands, pool, catalog, blueprint, position, Some(site.target))
        })
        .collect()
}
