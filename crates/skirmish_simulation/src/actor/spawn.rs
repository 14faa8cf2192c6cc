//! Spawn helpers.
//!
//! All configuration checks happen here (weapon lookup, layer mask) so a
//! broken setup fails at spawn time, never inside a tick.

use bevy::prelude::*;

use crate::combat::{
    CombatProfile, CombatTarget, ShootPoint, TargetOnSight, TargetSensor, VisualPresence, WeaponFireModel,
};
use crate::config::{ConfigResult, WeaponCatalog, WeaponLayer, WeaponType};
use crate::feedback::{DamageFeedback, ShakeEffect};
use crate::kamikaze::SelfDestructSequence;
use crate::movement::NavigationAgent;
use crate::pool::{activate, Activation, EnemyKind, SpawnKind, SpawnablePool};

/// Layer bit used by enemy projectiles unless overridden
pub const ENEMY_PROJECTILE_LAYER: u32 = 1 << 4;
/// Layer bit used by player projectiles unless overridden
pub const PLAYER_PROJECTILE_LAYER: u32 = 1 << 3;

/// How to build an enemy
#[derive(Debug, Clone, Copy)]
pub struct EnemyBlueprint {
    pub kind: EnemyKind,
    pub weapon: WeaponType,
    /// Must have exactly one bit set
    pub projectile_layer_mask: u32,
    pub shoot_point_offset: Vec3,
    pub keep_distance: f32,
}

impl EnemyBlueprint {
    pub fn gunner(weapon: WeaponType) -> Self {
        Self {
            kind: EnemyKind::Gunner,
            weapon,
            projectile_layer_mask: ENEMY_PROJECTILE_LAYER,
            shoot_point_offset: ShootPoint::default().offset,
            keep_distance: 8.0,
        }
    }

    pub fn kamikaze() -> Self {
        Self {
            kind: EnemyKind::Kamikaze,
            keep_distance: 0.0,
            ..Self::gunner(WeaponType::EnergyLauncher)
        }
    }

    pub fn is_kamikaze(&self) -> bool {
        self.kind == EnemyKind::Kamikaze
    }
}

/// How to build the player
#[derive(Debug, Clone, Copy)]
pub struct PlayerBlueprint {
    pub weapon: WeaponType,
    pub projectile_layer_mask: u32,
    pub shoot_point_offset: Vec3,
}

impl Default for PlayerBlueprint {
    fn default() -> Self {
        Self {
            weapon: WeaponType::PulseRifle,
            projectile_layer_mask: PLAYER_PROJECTILE_LAYER,
            shoot_point_offset: ShootPoint::default().offset,
        }
    }
}

/// Take an enemy from the pool, configure it and activate it.
///
/// `target` (if any) becomes its `TargetOnSight`.
pub fn spawn_enemy(
    commands: &mut Commands,
    pool: &mut SpawnablePool,
    catalog: &WeaponCatalog,
    blueprint: &EnemyBlueprint,
    position: Vec3,
    target: Option<Entity>,
) -> ConfigResult<Entity> {
    let weapon = *catalog.lookup(blueprint.weapon)?;
    let layer = WeaponLayer::from_mask(blueprint.projectile_layer_mask)?;

    let entity = pool.spawn(commands, SpawnKind::Enemy(blueprint.kind));
    commands.entity(entity).insert((
        Transform::from_translation(position),
        CombatProfile {
            kamikaze: blueprint.is_kamikaze(),
        },
        WeaponFireModel::new(weapon),
        layer,
        ShootPoint::new(blueprint.shoot_point_offset),
        TargetOnSight {
            target,
            keep_distance: blueprint.keep_distance,
        },
        TargetSensor::default(),
        NavigationAgent::default(),
        VisualPresence::default(),
        crate::physics::actor_body(),
    ));
    if blueprint.is_kamikaze() {
        commands.entity(entity).insert(SelfDestructSequence::default());
    }
    activate(commands, entity);

    crate::logger::log(&format!(
        "Spawned {:?} {:?} at {:?} (weapon {:?}, layer {})",
        blueprint.kind,
        entity,
        position,
        blueprint.weapon,
        layer.index()
    ));

    Ok(entity)
}

/// Spawn the player: combat target with damage feedback and a weapon.
pub fn spawn_player(
    commands: &mut Commands,
    catalog: &WeaponCatalog,
    blueprint: &PlayerBlueprint,
    position: Vec3,
) -> ConfigResult<Entity> {
    let weapon = *catalog.lookup(blueprint.weapon)?;
    let layer = WeaponLayer::from_mask(blueprint.projectile_layer_mask)?;

    let entity = commands
        .spawn((
            Name::new("Player"),
            Transform::from_translation(position),
            CombatTarget,
            DamageFeedback::default(),
            Activation::active(),
            WeaponFireModel::new(weapon),
            layer,
            ShootPoint::new(blueprint.shoot_point_offset),
            crate::physics::actor_body(),
        ))
        .id();

    Ok(entity)
}

/// Spawn a camera; `shake` attaches a (disabled) shake effect.
pub fn spawn_camera(commands: &mut Commands, position: Vec3, shake: bool) -> Entity {
    let mut camera = commands.spawn((Name::new("Camera"), Transform::from_translation(position)));
    if shake {
        camera.insert(ShakeEffect::default());
    }
    camera.id()
}
