//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;
use skirmish_simulation::*;

/// Stepped app, primed: the zero-delta first update has already run.
pub fn stepped_app(step: Duration) -> App {
    let mut app = create_stepped_app(42, step);
    app.update();
    app
}

/// Run `ticks` fixed ticks (one per update).
pub fn tick(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

pub fn spawn_target(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_translation(position),
            CombatTarget,
            DamageFeedback::default(),
            Activation::active(),
        ))
        .id()
}

pub fn spawn_from_blueprint(app: &mut App, blueprint: EnemyBlueprint, position: Vec3, target: Entity) -> Entity {
    let world = app.world_mut();
    let catalog = world.resource::<WeaponCatalog>().clone();
    let entity = world
        .resource_scope(|world, mut pool: Mut<SpawnablePool>| {
            let mut commands = world.commands();
            spawn_enemy(&mut commands, &mut pool, &catalog, &blueprint, position, Some(target))
        })
        .expect("valid blueprint");
    world.flush();
    entity
}

/// Counts events of one type across updates without missing or repeating any.
pub struct EventCounter<E: Event> {
    cursor: EventCursor<E>,
}

impl<E: Event> EventCounter<E> {
    pub fn new(app: &App) -> Self {
        Self {
            cursor: app.world().resource::<Events<E>>().get_cursor_current(),
        }
    }

    /// Events written since the last call.
    pub fn take(&mut self, app: &App) -> Vec<E>
    where
        E: Clone,
    {
        let events = app.world().resource::<Events<E>>();
        self.cursor.read(events).cloned().collect()
    }
}
