//! Tests for spawn helpers + activation lifecycle.

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;

    use crate::actor::*;
    use crate::combat::{CombatProfile, TargetOnSight, VisualPresence};
    use crate::config::{ConfigError, ConfigResult, SimulationSettings, WeaponCatalog};
    use crate::kamikaze::{SelfDestructPhase, SelfDestructSequence};
    use crate::movement::NavigationAgent;
    use crate::pool::{Activation, SpawnablePool};
    use crate::DeterministicRng;

    fn actor_world() -> World {
        let mut world = World::new();
        world.init_resource::<SpawnablePool>();
        world.init_resource::<WeaponCatalog>();
        world
    }

    fn spawn(world: &mut World, blueprint: EnemyBlueprint, target: Option<Entity>) -> ConfigResult<Entity> {
        world
            .run_system_once(
                move |mut commands: Commands, mut pool: ResMut<SpawnablePool>, catalog: Res<WeaponCatalog>| {
                    spawn_enemy(&mut commands, &mut pool, &catalog, &blueprint, Vec3::ZERO, target)
                },
            )
            .unwrap()
    }

    #[test]
    fn test_spawn_kamikaze_enemy() {
        let mut world = actor_world();
        let player = world.spawn_empty().id();

        let enemy = spawn(&mut world, EnemyBlueprint::kamikaze(), Some(player)).unwrap();

        assert!(world.get::<Activation>(enemy).unwrap().is_active());
        assert!(world.get::<CombatProfile>(enemy).unwrap().kamikaze);
        assert_eq!(world.get::<TargetOnSight>(enemy).unwrap().target, Some(player));
        assert_eq!(
            world.get::<SelfDestructSequence>(enemy).unwrap().phase(),
            SelfDestructPhase::Idle
        );
    }

    #[test]
    fn test_gunner_has_no_self_destruct() {
        let mut world = actor_world();
        let enemy = spawn(&mut world, EnemyBlueprint::gunner(crate::config::WeaponType::PulseRifle), None).unwrap();

        assert!(!world.get::<CombatProfile>(enemy).unwrap().kamikaze);
        assert!(world.get::<SelfDestructSequence>(enemy).is_none());
    }

    #[test]
    fn test_multi_bit_layer_mask_is_setup_error() {
        let mut world = actor_world();
        let mut blueprint = EnemyBlueprint::kamikaze();
        blueprint.projectile_layer_mask = 0b1010;

        let result = spawn(&mut world, blueprint, None);

        assert!(matches!(result, Err(ConfigError::InvalidLayerMask(0b1010))));
        assert_eq!(world.resource::<SpawnablePool>().created(), 0);
    }

    #[test]
    fn test_reactivation_resets_lifecycle() {
        let mut world = actor_world();
        let enemy = spawn(&mut world, EnemyBlueprint::kamikaze(), None).unwrap();

        // Прошлая жизнь: взорвался и выключен
        world.get_mut::<VisualPresence>(enemy).unwrap().visible = false;
        world.get_mut::<NavigationAgent>(enemy).unwrap().disable();
        world
            .get_mut::<SelfDestructSequence>(enemy)
            .unwrap()
            .trigger(std::time::Duration::from_secs(2));
        world.entity_mut(enemy).insert(Activation::inactive());
        world.run_system_once(reset_on_activation).unwrap();
        assert!(!world.get::<VisualPresence>(enemy).unwrap().visible);

        world.entity_mut(enemy).insert(Activation::active());
        world.run_system_once(reset_on_activation).unwrap();

        assert!(world.get::<VisualPresence>(enemy).unwrap().visible);
        assert!(world.get::<NavigationAgent>(enemy).unwrap().is_enabled());
        let sequence = world.get::<SelfDestructSequence>(enemy).unwrap();
        assert_eq!(sequence.phase(), SelfDestructPhase::Idle);
        assert_eq!(sequence.pending(), 0);
    }

    #[test]
    fn test_ring_position_within_bounds() {
        let mut rng = DeterministicRng::new(7);
        let center = Vec3::new(3.0, 1.0, -2.0);

        for _ in 0..100 {
            let position = ring_position(&mut rng.rng, center, 10.0, 15.0);
            let offset = position - center;
            assert_eq!(offset.y, 0.0);
            let distance = offset.length();
            assert!((10.0 - 1e-3..=15.0 + 1e-3).contains(&distance), "distance {}", distance);
        }
    }

    #[test]
    fn test_encounter_is_deterministic_per_seed() {
        let positions = |seed: u64| {
            let mut world = actor_world();
            world.insert_resource(DeterministicRng::new(seed));
            world.init_resource::<SimulationSettings>();
            let player = world.spawn_empty().id();

            let enemies = world
                .run_system_once(
                    move |mut commands: Commands,
                          mut pool: ResMut<SpawnablePool>,
                          catalog: Res<WeaponCatalog>,
                          settings: Res<SimulationSettings>,
                          mut rng: ResMut<DeterministicRng>| {
                        let site = EncounterSite {
                            target: player,
                            center: Vec3::ZERO,
                        };
                        let blueprints = [EnemyBlueprint::kamikaze(), EnemyBlueprint::kamikaze()];
                        spawn_encounter(&mut commands, &mut pool, &catalog, &settings, &mut rng, site, &blueprints)
                    },
                )
                .unwrap()
                .unwrap();

            enemies
                .iter()
                .map(|enemy| world.get::<Transform>(*enemy).unwrap().translation)
                .collect::<Vec<_>>()
        };

        assert_eq!(positions(42), positions(42));
        assert_ne!(positions(42), positions(43));
    }
}
