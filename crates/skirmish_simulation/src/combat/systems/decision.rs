//! Decision system: sensor + cooldown → navigation / aim / fire request.

use bevy::prelude::*;

use crate::combat::decision::{decide, CombatAction, DecisionInput};
use crate::combat::{
    CombatProfile, ProjectileFireRequest, ShootPoint, TargetOnSight, TargetSensor, VisualPresence,
    WeaponFireModel,
};
use crate::config::WeaponLayer;
use crate::movement::NavigationAgent;
use crate::pool::Activation;

/// System: per-tick combat decision for every active enemy
///
/// At most one action per entity per tick; at most one fire request per
/// entity per tick (cooldown gate). Cooldowns are advanced earlier in the
/// tick by `tick_weapon_cooldowns`.
///
/// Dead shooters hold. A triggered kamikaze keeps chasing until its
/// navigation is disabled by the self-destruct sequence.
///
/// Target missing / despawned / inactive → skip this tick (fail-soft).
pub fn evaluate_combat_decisions(
    mut enemies: Query<(
        Entity,
        &Transform,
        &CombatProfile,
        &TargetOnSight,
        &TargetSensor,
        &VisualPresence,
        &Activation,
        &WeaponLayer,
        &mut WeaponFireModel,
        &mut ShootPoint,
        &mut NavigationAgent,
    )>,
    targets: Query<(&Transform, Option<&Activation>)>,
    mut fire_requests: EventWriter<ProjectileFireRequest>,
) {
    for (
        entity,
        transform,
        profile,
        on_sight,
        sensor,
        presence,
        activation,
        layer,
        mut weapon,
        mut shoot_point,
        mut navigation,
    ) in enemies.iter_mut()
    {
        if !activation.is_active() || (!profile.kamikaze && !presence.is_alive()) {
            continue;
        }

        let Some(target) = on_sight.target else {
            continue;
        };

        let Ok((target_transform, target_activation)) = targets.get(target) else {
            crate::logger::log(&format!(
                "Enemy {:?}: target {:?} no longer exists, skipping tick",
                entity, target
            ));
            continue;
        };

        if target_activation.is_some_and(|a| !a.is_active()) {
            continue;
        }

        let action = decide(&DecisionInput {
            position: transform.translation,
            target_position: target_transform.translation,
            kamikaze: profile.kamikaze,
            sensor: *sensor,
            keep_distance: on_sight.keep_distance,
            weapon_ready: weapon.can_fire(),
        });

        match action {
            CombatAction::Chase { destination } | CombatAction::Reposition { destination } => {
                navigation.set_destination(destination);
            }
            CombatAction::Engage { destination, aim_at } => {
                navigation.set_destination(destination);
                shoot_point.aim_at(transform, aim_at);

                fire_requests.write(ProjectileFireRequest {
                    shooter: entity,
                    target: Some(target),
                    origin: shoot_point.world_position(transform),
                    rotation: shoot_point.rotation,
                    weapon: *weapon.config(),
                    layer: *layer,
                });
                weapon.record_fire();

                crate::logger::log(&format!("Enemy {:?} fires at {:?}", entity, target));
            }
            CombatAction::Hold => {}
        }
    }
}
