//! Kamikaze systems: contact → trigger → timed explode / destroy.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use super::components::{ExplosionEffect, SelfDestructSequence, SelfDestructStep};
use crate::combat::{CombatProfile, CombatTarget, TargetContact, VisualPresence};
use crate::config::SimulationSettings;
use crate::feedback::{SoundCue, SoundRequested};
use crate::movement::NavigationAgent;
use crate::pool::{activate, Activation, EntityDeactivated, ExplosionKind, Pooled, SpawnKind, SpawnablePool};

/// System: Rapier contact start → `TargetContact` (kamikaze touched a target)
pub fn detect_target_contacts(
    mut collisions: EventReader<CollisionEvent>,
    kamikazes: Query<(), With<SelfDestructSequence>>,
    targets: Query<(), With<CombatTarget>>,
    mut contacts: EventWriter<TargetContact>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *collision else {
            continue;
        };

        for (entity, other) in [(a, b), (b, a)] {
            if kamikazes.contains(entity) && targets.contains(other) {
                contacts.write(TargetContact { entity, other });
            }
        }
    }
}

/// System: contact with the designated target → start the self-destruct
///
/// Only alive (visible), active kamikazes trigger, and only once:
/// 1. visual presence off (later contacts are rejected)
/// 2. explosion sound + pooled explosion effect at the entity's position
/// 3. Explode at D/2, Destroy at D (D = explosion effect duration)
pub fn trigger_self_destruct(
    mut commands: Commands,
    mut contacts: EventReader<TargetContact>,
    settings: Res<SimulationSettings>,
    mut pool: ResMut<SpawnablePool>,
    mut kamikazes: Query<(
        &Transform,
        &CombatProfile,
        &Activation,
        &mut VisualPresence,
        &mut SelfDestructSequence,
    )>,
    targets: Query<(), With<CombatTarget>>,
    mut sounds: EventWriter<SoundRequested>,
) {
    for contact in contacts.read() {
        if !targets.contains(contact.other) {
            continue;
        }

        let Ok((transform, profile, activation, mut presence, mut sequence)) = kamikazes.get_mut(contact.entity)
        else {
            continue;
        };

        if !profile.kamikaze || !activation.is_active() || !presence.is_alive() {
            continue;
        }

        let duration = settings.kamikaze_explosion_duration();
        if !sequence.trigger(duration) {
            continue;
        }

        presence.visible = false;

        sounds.write(SoundRequested {
            cue: SoundCue::KamikazeExplosion,
            emitter: contact.entity,
            position: transform.translation,
        });

        let explosion = pool.spawn(&mut commands, SpawnKind::Explosion(ExplosionKind::Kamikaze));
        commands.entity(explosion).insert((
            Transform::from_translation(transform.translation),
            ExplosionEffect::new(contact.entity, duration),
        ));
        activate(&mut commands, explosion);

        crate::logger::log(&format!(
            "Kamikaze {:?} triggered on {:?} (explosion {:?})",
            contact.entity, contact.other, explosion
        ));
    }
}

/// System: advance self-destruct callbacks
///
/// Explode → navigation frozen; Destroy → entity back to the pool.
/// Inactive owners never run a step (callbacks dropped instead).
pub fn tick_self_destruct_sequences(
    time: Res<Time>,
    mut pool: ResMut<SpawnablePool>,
    mut kamikazes: Query<(
        Entity,
        &mut SelfDestructSequence,
        &mut NavigationAgent,
        &mut Activation,
        Option<&Pooled>,
    )>,
    mut deactivated: EventWriter<EntityDeactivated>,
) {
    for (entity, mut sequence, mut navigation, mut activation, pooled) in kamikazes.iter_mut() {
        if sequence.pending() == 0 {
            continue;
        }

        if !activation.is_active() {
            sequence.cancel();
            continue;
        }

        for step in sequence.tick(time.delta()) {
            match step {
                SelfDestructStep::Explode => {
                    navigation.disable();
                    crate::logger::log(&format!("Kamikaze {:?} exploded, navigation off", entity));
                }
                SelfDestructStep::Destroy => {
                    pool.deactivate(entity, &mut activation, pooled, &mut deactivated);
                    crate::logger::log(&format!("Kamikaze {:?} destroyed", entity));
                }
            }
        }
    }
}

/// System: release explosion effects that played out
///
/// An explosion also ends as soon as its source is no longer active.
pub fn expire_explosions(
    time: Res<Time>,
    mut pool: ResMut<SpawnablePool>,
    mut explosions: Query<(Entity, &mut ExplosionEffect, &mut Activation, Option<&Pooled>)>,
    sources: Query<&Activation, Without<ExplosionEffect>>,
    mut deactivated: EventWriter<EntityDeactivated>,
) {
    for (entity, mut effect, mut activation, pooled) in explosions.iter_mut() {
        if !activation.is_active() {
            continue;
        }

        let source_gone = sources.get(effect.source).map_or(true, |source| !source.is_active());
        if effect.tick(time.delta()) || source_gone {
            pool.deactivate(entity, &mut activation, pooled, &mut deactivated);
        }
    }
}

/// System: cancel pending self-destruct callbacks of deactivated entities
pub fn teardown_self_destruct(
    mut events: EventReader<EntityDeactivated>,
    mut sequences: Query<&mut SelfDestructSequence>,
) {
    for event in events.read() {
        let Ok(mut sequence) = sequences.get_mut(event.entity) else {
            continue;
        };

        let cancelled = sequence.cancel();
        if cancelled > 0 {
            crate::logger::log(&format!(
                "Kamikaze {:?} deactivated: {} pending callbacks cancelled",
                event.entity, cancelled
            ));
        }
    }
}
