//! Weapon systems (cooldowns + projectile launch / flight).

use bevy::prelude::*;

use crate::combat::{
    Projectile, ProjectileFireRequest, ProjectileLaunched, ShootPoint, TriggerPulled, WeaponFireModel,
};
use crate::config::WeaponLayer;
use crate::pool::{activate, Activation, EntityDeactivated, Pooled, SpawnKind, SpawnablePool};

/// System: advance weapon cooldowns of active entities
pub fn tick_weapon_cooldowns(mut weapons: Query<(&mut WeaponFireModel, &Activation)>, time: Res<Time>) {
    let delta = time.delta_secs();
    for (mut weapon, activation) in weapons.iter_mut() {
        if activation.is_active() {
            weapon.tick(delta);
        }
    }
}

/// System: player trigger → fire along the muzzle if the weapon is ready
pub fn process_trigger_pulls(
    mut triggers: EventReader<TriggerPulled>,
    mut shooters: Query<(&Transform, &Activation, &WeaponLayer, &ShootPoint, &mut WeaponFireModel)>,
    mut fire_requests: EventWriter<ProjectileFireRequest>,
) {
    for trigger in triggers.read() {
        let Ok((transform, activation, layer, shoot_point, mut weapon)) = shooters.get_mut(trigger.shooter) else {
            continue;
        };

        if !activation.is_active() || !weapon.can_fire() {
            continue;
        }

        fire_requests.write(ProjectileFireRequest {
            shooter: trigger.shooter,
            target: None,
            origin: shoot_point.world_position(transform),
            rotation: shoot_point.rotation,
            weapon: *weapon.config(),
            layer: *layer,
        });
        weapon.record_fire();
    }
}

/// System: fire requests → pooled projectiles
///
/// Pool hands out an inactive instance; we stamp position, payload and the
/// weapon's collision layer, then activate it.
pub fn launch_projectiles(
    mut commands: Commands,
    mut pool: ResMut<SpawnablePool>,
    mut requests: EventReader<ProjectileFireRequest>,
    mut launched: EventWriter<ProjectileLaunched>,
) {
    for request in requests.read() {
        let projectile = pool.spawn(&mut commands, SpawnKind::Projectile(request.weapon.projectile));
        let direction = request.rotation * Vec3::NEG_Z;

        commands.entity(projectile).insert((
            Transform::from_translation(request.origin).with_rotation(request.rotation),
            Projectile::launch(request.shooter, request.weapon, request.layer.index(), direction),
            request.layer.collision_groups(),
        ));
        activate(&mut commands, projectile);

        launched.write(ProjectileLaunched {
            projectile,
            shooter: request.shooter,
        });
    }
}

/// System: straight-line flight; out of range → back to the pool
pub fn advance_projectiles(
    time: Res<Time>,
    mut pool: ResMut<SpawnablePool>,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile, &mut Activation, Option<&Pooled>)>,
    mut deactivated: EventWriter<EntityDeactivated>,
) {
    let delta = time.delta_secs();
    for (entity, mut transform, mut projectile, mut activation, pooled) in projectiles.iter_mut() {
        if !activation.is_active() {
            continue;
        }

        if projectile.advance(&mut transform, delta) {
            pool.deactivate(entity, &mut activation, pooled, &mut deactivated);
        }
    }
}
