//! Headless skirmish
//!
//! Игрок, пара стрелков и камикадзе на кольце вокруг него. Host-часть
//! (навигация, контакты, урон) эмулируется прямо здесь по-простому.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use skirmish_simulation::combat::ProjectileLaunched;
use skirmish_simulation::*;

const SEED: u64 = 42;
const TICKS: usize = 600;
/// Host navigation speed (m/s)
const MOVE_SPEED: f32 = 6.0;
/// Contact distance between two actor capsules
const CONTACT_DISTANCE: f32 = 0.8;

fn main() {
    init_logger();
    set_log_level(LogLevel::Info);

    let settings = SimulationSettings::default();
    let step = Duration::from_secs_f64(1.0 / settings.tick_hz);
    let mut app = create_stepped_app(SEED, step);

    let (player, camera) = match setup(&mut app) {
        Ok(spawned) => spawned,
        Err(error) => {
            log_error(&format!("Setup failed: {}", error));
            std::process::exit(1);
        }
    };
    log_info(&format!("Starting skirmish (seed: {}, player: {:?}, camera: {:?})", SEED, player, camera));

    let mut launched = app.world().resource::<Events<ProjectileLaunched>>().get_cursor();
    let mut shots = 0;

    for tick in 0..TICKS {
        host_step(&mut app, player, step.as_secs_f32());
        app.update();

        let events = app.world().resource::<Events<ProjectileLaunched>>();
        let fired = launched.read(events).count();
        if fired > 0 {
            shots += fired;
            // Каждый выстрел попадает: игрок теряет 5 hp
            let current = (100.0 - shots as f32 * 5.0).max(0.0);
            app.world_mut().send_event(HealthChanged::lost(player, 5.0, current, 100.0));
        }

        if tick % 60 == 0 {
            let world = app.world_mut();
            let active = world
                .query::<(&Activation, &CombatProfile)>()
                .iter(world)
                .filter(|(activation, _)| activation.is_active())
                .count();
            let shaking = world.resource::<CameraShakeService>().is_running();
            log_info(&format!(
                "Tick {}: {} active enemies, {} shots, shake running: {}",
                tick, active, shots, shaking
            ));
        }
    }

    app.world_mut().send_event(DisableAllSpawnables);
    app.update();
    log_info("Skirmish complete!");
}

fn setup(app: &mut App) -> ConfigResult<(Entity, Entity)> {
    let world = app.world_mut();
    let catalog = world.resource::<WeaponCatalog>().clone();
    let settings = world.resource::<SimulationSettings>().clone();

    let mut commands = world.commands();
    let player = spawn_player(&mut commands, &catalog, &PlayerBlueprint::default(), Vec3::ZERO)?;
    let camera = spawn_camera(&mut commands, Vec3::new(0.0, 2.0, 4.0), true);
    world.flush();
    world.insert_resource(ActiveView { camera: Some(camera) });

    let blueprints = [
        EnemyBlueprint::gunner(WeaponType::EnergyLauncher),
        EnemyBlueprint::gunner(WeaponType::PulseRifle),
        EnemyBlueprint::kamikaze(),
    ];

    world.resource_scope(|world, mut pool: Mut<SpawnablePool>| {
        world.resource_scope(|world, mut rng: Mut<DeterministicRng>| {
            let mut commands = world.commands();
            let site = EncounterSite {
                target: player,
                center: Vec3::ZERO,
            };
            spawn_encounter(&mut commands, &mut pool, &catalog, &settings, &mut rng, site, &blueprints)
        })
    })?;
    world.flush();

    Ok((player, camera))
}

/// Host stand-in: steer enemies toward their destination, report contacts
fn host_step(app: &mut App, player: Entity, delta: f32) {
    let world = app.world_mut();
    let Some(player_position) = world.get::<Transform>(player).map(|t| t.translation) else {
        return;
    };

    let mut contacts = Vec::new();
    let mut enemies = world.query::<(Entity, &mut Transform, &NavigationAgent, &Activation)>();
    for (entity, mut transform, navigation, activation) in enemies.iter_mut(world) {
        if !activation.is_active() || !navigation.is_enabled() {
            continue;
        }
        if let Some(destination) = navigation.destination() {
            let offset = destination - transform.translation;
            transform.translation += offset.clamp_length_max(MOVE_SPEED * delta);
        }
        if transform.translation.distance(player_position) <= CONTACT_DISTANCE {
            contacts.push(entity);
        }
    }

    for entity in contacts {
        world.send_event(CollisionEvent::Started(entity, player, CollisionEventFlags::empty()));
    }
}
