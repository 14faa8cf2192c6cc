//! Skirmish Simulation Core
//!
//! ECS-симуляция боя с враждебными AI на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = combat rules (decisions, cooldowns, self-destruct, feedback state)
//! - Host = physics step, rendering, pathfinding, audio, health tracking
//!
//! Всё, что происходит в симуляции, тикает в FixedUpdate по `SimulationSet`.

use std::time::Duration;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod actor;
pub mod combat;
pub mod config;
pub mod feedback;
pub mod kamikaze;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod pool;
pub mod timing;

// Re-export основных типов для удобства
pub use actor::{
    spawn_camera, spawn_encounter, spawn_enemy, spawn_player, EncounterSite, EnemyBlueprint, PlayerBlueprint,
};
pub use combat::{
    CombatPlugin, CombatProfile, CombatTarget, ProjectileFireRequest, ShootPoint, TargetContact, TargetOnSight,
    TargetSensor, TriggerPulled, VisualPresence, WeaponFireModel,
};
pub use config::{ConfigError, ConfigResult, SimulationSettings, WeaponCatalog, WeaponConfig, WeaponLayer, WeaponType};
pub use feedback::{
    ActiveView, CameraShakeService, DamageFeedback, FeedbackPlugin, HealthChanged, ShakeCommand, ShakeEffect,
};
pub use kamikaze::{KamikazePlugin, SelfDestructPhase, SelfDestructSequence};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use movement::NavigationAgent;
pub use pool::{Activation, DeactivateRequest, DisableAllSpawnables, EntityDeactivated, SpawnKind, SpawnablePool};

/// Порядок фаз внутри одного simulation tick (FixedUpdate, chained)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Deactivation requests, teardown, reset of reactivated instances
    Lifecycle,
    /// Weapon cooldowns
    Weapons,
    /// Combat decisions + player trigger
    Decisions,
    /// Projectile flight + launch
    Projectiles,
    /// Self-destruct callbacks, explosions, contacts
    Kamikaze,
    /// Health feedback + camera shake
    Feedback,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Ресурсы, вставленные до plugin (settings, catalog, shake service),
/// не перезаписываются.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSettings>()
            .init_resource::<WeaponCatalog>()
            .init_resource::<SpawnablePool>()
            .add_event::<DeactivateRequest>()
            .add_event::<DisableAllSpawnables>()
            .add_event::<EntityDeactivated>();

        // Настройки, вставленные до plugin: невалидные = fatal setup error
        if let Err(err) = app.world().resource::<SimulationSettings>().validate() {
            crate::logger::log_error(&format!("SimulationSettings: {}", err));
            panic!("invalid SimulationSettings: {}", err);
        }

        if !app.world().contains_resource::<DeterministicRng>() {
            // Детерминистичный RNG (seed по умолчанию)
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Lifecycle,
                SimulationSet::Weapons,
                SimulationSet::Decisions,
                SimulationSet::Projectiles,
                SimulationSet::Kamikaze,
                SimulationSet::Feedback,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                config::reject_invalid_settings.run_if(resource_changed::<SimulationSettings>),
                pool::process_deactivation_requests,
                kamikaze::teardown_self_destruct,
                actor::reset_on_activation,
            )
                .chain()
                .in_set(SimulationSet::Lifecycle),
        );

        // Подсистемы
        app.add_plugins((CombatPlugin, KamikazePlugin, FeedbackPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Fixed tick по `SimulationSettings::default().tick_hz`, плюс `SimulationPlugin`.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SimulationSettings::default().tick_hz))
        .add_plugins(SimulationPlugin);

    app
}

/// Headless App с ручным временем: каждый `update()` = ровно один fixed tick
///
/// Первый `update()` (delta = 0) ничего не тикает. Без логгера, для тестов.
pub fn create_stepped_app(seed: u64, step: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(step))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(step));

    // Default max_delta 250ms обрезал бы крупные шаги
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(step.max(Duration::from_millis(250)));

    app.add_plugins(SimulationPlugin);
    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
