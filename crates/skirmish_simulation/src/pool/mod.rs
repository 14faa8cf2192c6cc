//! Spawnable pool: reusable projectile / explosion / enemy instances.
//!
//! Instances are never despawned while the simulation runs: "destroy" means
//! deactivate and push back onto the free list of that kind.
//!
//! Flow:
//! 1. `SpawnablePool::spawn(kind)` → inactive instance (reused or freshly spawned)
//! 2. Caller inserts position / orientation / payload via `Commands`
//! 3. `activate(commands, entity)` → instance takes part in the simulation
//! 4. `DeactivateRequest` / `DisableAllSpawnables` / `SpawnablePool::deactivate`
//!    → `EntityDeactivated` event, instance back on the free list

use std::collections::HashMap;

use bevy::prelude::*;

use crate::config::ProjectileKind;

/// Explosion effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ExplosionKind {
    Kamikaze,
}

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EnemyKind {
    Gunner,
    Kamikaze,
}

/// Pool key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SpawnKind {
    Projectile(ProjectileKind),
    Explosion(ExplosionKind),
    Enemy(EnemyKind),
}

/// Marker: entity belongs to the pool (returned to its free list on deactivation)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Pooled {
    pub kind: SpawnKind,
}

/// Activation state of a simulated entity (pooled or not)
///
/// Inactive entities are skipped by every system.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct Activation {
    active: bool,
}

impl Activation {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Event: please deactivate this entity (external cause)
#[derive(Event, Debug, Clone, Copy)]
pub struct DeactivateRequest {
    pub entity: Entity,
}

/// Event: deactivate every active pooled instance (scene teardown)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DisableAllSpawnables;

/// Event: entity went active → inactive (teardown hook)
#[derive(Event, Debug, Clone, Copy)]
pub struct EntityDeactivated {
    pub entity: Entity,
    /// None for entities that are not pooled (e.g. the player)
    pub kind: Option<SpawnKind>,
}

/// Free lists per spawn kind
#[derive(Resource, Debug, Default)]
pub struct SpawnablePool {
    free: HashMap<SpawnKind, Vec<Entity>>,
    created: usize,
}

impl SpawnablePool {
    /// Hand out an inactive instance of `kind`.
    ///
    /// Reuses a released instance when one exists, otherwise spawns a new
    /// bare one. The caller configures it and then calls `activate`.
    pub fn spawn(&mut self, commands: &mut Commands, kind: SpawnKind) -> Entity {
        if let Some(entity) = self.free.get_mut(&kind).and_then(Vec::pop) {
            return entity;
        }

        self.created += 1;
        commands
            .spawn((
                Name::new(format!("{:?}(Pooled)", kind)),
                Pooled { kind },
                Activation::inactive(),
                Transform::default(),
            ))
            .id()
    }

    /// Deactivate an entity; returns false if it was already inactive.
    ///
    /// Pooled entities go back onto their free list exactly once.
    pub fn deactivate(
        &mut self,
        entity: Entity,
        activation: &mut Activation,
        pooled: Option<&Pooled>,
        deactivated: &mut EventWriter<EntityDeactivated>,
    ) -> bool {
        if !activation.is_active() {
            return false;
        }

        activation.active = false;

        let kind = pooled.map(|p| p.kind);
        if let Some(kind) = kind {
            let free = self.free.entry(kind).or_default();
            if !free.contains(&entity) {
                free.push(entity);
            }
        }

        deactivated.write(EntityDeactivated { entity, kind });
        true
    }

    /// Number of released instances waiting for reuse.
    pub fn free_count(&self, kind: SpawnKind) -> usize {
        self.free.get(&kind).map_or(0, Vec::len)
    }

    /// Number of instances ever created by the pool.
    pub fn created(&self) -> usize {
        self.created
    }
}

/// Mark a configured instance active.
pub fn activate(commands: &mut Commands, entity: Entity) {
    commands.entity(entity).insert(Activation::active());
}

/// System: process external deactivation requests and `DisableAllSpawnables`
pub fn process_deactivation_requests(
    mut requests: EventReader<DeactivateRequest>,
    mut disable_all: EventReader<DisableAllSpawnables>,
    mut pool: ResMut<SpawnablePool>,
    mut entities: Query<(Entity, &mut Activation, Option<&Pooled>)>,
    mut deactivated: EventWriter<EntityDeactivated>,
) {
    for request in requests.read() {
        let Ok((entity, mut activation, pooled)) = entities.get_mut(request.entity) else {
            crate::logger::log(&format!("DeactivateRequest: {:?} not found", request.entity));
            continue;
        };
        pool.deactivate(entity, &mut activation, pooled, &mut deactivated);
    }

    if disable_all.read().count() == 0 {
        return;
    }

    let mut count = 0;
    for (entity, mut activation, pooled) in entities.iter_mut() {
        if pooled.is_none() {
            continue;
        }
        if pool.deactivate(entity, &mut activation, pooled, &mut deactivated) {
            count += 1;
        }
    }
    crate::logger::log_info(&format!("DisableAllSpawnables: {} instances returned to pool", count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn pool_world() -> World {
        let mut world = World::new();
        world.init_resource::<SpawnablePool>();
        world.init_resource::<Events<DeactivateRequest>>();
        world.init_resource::<Events<DisableAllSpawnables>>();
        world.init_resource::<Events<EntityDeactivated>>();
        world
    }

    fn deactivated_count(world: &World) -> usize {
        let events = world.resource::<Events<EntityDeactivated>>();
        events.get_cursor().read(events).count()
    }

    #[test]
    fn test_disable_all_returns_each_instance_once() {
        let mut world = pool_world();
        let kind = SpawnKind::Projectile(ProjectileKind::EnergyMissile);

        let a = world.spawn((Pooled { kind }, Activation::active())).id();
        let b = world.spawn((Pooled { kind }, Activation::active())).id();
        let idle = world.spawn((Pooled { kind }, Activation::inactive())).id();
        let player = world.spawn(Activation::active()).id();

        world.send_event(DisableAllSpawnables);
        world.run_system_once(process_deactivation_requests).unwrap();

        assert!(!world.get::<Activation>(a).unwrap().is_active());
        assert!(!world.get::<Activation>(b).unwrap().is_active());
        assert!(!world.get::<Activation>(idle).unwrap().is_active());
        // Не pooled: не трогаем
        assert!(world.get::<Activation>(player).unwrap().is_active());

        assert_eq!(world.resource::<SpawnablePool>().free_count(kind), 2);
        assert_eq!(deactivated_count(&world), 2);

        // Повторный disable_all: no-op
        world.send_event(DisableAllSpawnables);
        world.run_system_once(process_deactivation_requests).unwrap();
        assert_eq!(world.resource::<SpawnablePool>().free_count(kind), 2);
    }

    #[test]
    fn test_deactivate_request_is_idempotent() {
        let mut world = pool_world();
        let kind = SpawnKind::Enemy(EnemyKind::Kamikaze);
        let enemy = world.spawn((Pooled { kind }, Activation::active())).id();

        world.send_event(DeactivateRequest { entity: enemy });
        world.send_event(DeactivateRequest { entity: enemy });
        world.run_system_once(process_deactivation_requests).unwrap();

        assert_eq!(world.resource::<SpawnablePool>().free_count(kind), 1);
        assert_eq!(deactivated_count(&world), 1);
    }

    #[test]
    fn test_spawn_reuses_released_instance() {
        let mut world = pool_world();
        let kind = SpawnKind::Explosion(ExplosionKind::Kamikaze);

        let first = world
            .run_system_once(move |mut commands: Commands, mut pool: ResMut<SpawnablePool>| {
                let entity = pool.spawn(&mut commands, kind);
                activate(&mut commands, entity);
                entity
            })
            .unwrap();
        world.flush();
        assert!(world.get::<Activation>(first).unwrap().is_active());

        world.send_event(DeactivateRequest { entity: first });
        world.run_system_once(process_deactivation_requests).unwrap();

        let second = world
            .run_system_once(move |mut commands: Commands, mut pool: ResMut<SpawnablePool>| {
                pool.spawn(&mut commands, kind)
            })
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(world.resource::<SpawnablePool>().created(), 1);
        assert_eq!(world.resource::<SpawnablePool>().free_count(kind), 0);
    }
}
