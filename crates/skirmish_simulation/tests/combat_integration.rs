//! Combat integration test
//!
//! Проверяем на полном SimulationPlugin:
//! - cooldown gate: ровно один выстрел на 0.6 + 0.6 при интервале 1.0
//! - obstacle → reposition, огонь подавлен
//! - невалидная цель → тик пропускается
//! - DisableAllSpawnables возвращает всё в pool

mod common;

use std::time::Duration;

use bevy::prelude::*;
use common::*;
use skirmish_simulation::combat::Projectile;
use skirmish_simulation::*;

const CATALOG: &str = r#"{
    EnergyLauncher: (range: 30.0, shoot_interval: 1.0, projectile: EnergyMissile, damage: 20, projectile_speed: 18.0),
    PulseRifle: (range: 25.0, shoot_interval: 0.4, projectile: PulseBolt, damage: 6, projectile_speed: 45.0),
}"#;

/// Helper: combat App с каталогом (EnergyLauncher interval = 1.0)
fn create_combat_app(step: Duration) -> App {
    let mut app = stepped_app(step);
    app.insert_resource(WeaponCatalog::from_ron(CATALOG).expect("valid catalog"));
    app
}

fn gunner(app: &mut App, target: Entity) -> Entity {
    spawn_from_blueprint(
        app,
        EnemyBlueprint::gunner(WeaponType::EnergyLauncher),
        Vec3::ZERO,
        target,
    )
}

fn active_projectiles(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query::<(&Projectile, &Activation)>()
        .iter(world)
        .filter(|(_, activation)| activation.is_active())
        .count()
}

#[test]
fn test_single_fire_after_cooldown_elapses() {
    let mut app = create_combat_app(Duration::from_millis(600));
    let player = spawn_target(&mut app, Vec3::new(10.0, 0.0, 0.0));
    let enemy = gunner(&mut app, player);
    let mut fire_requests = EventCounter::<ProjectileFireRequest>::new(&app);

    // 0.6s: 0.6 > 1.0 ещё нет
    tick(&mut app, 1);
    assert!(fire_requests.take(&app).is_empty());
    let weapon = app.world().get::<WeaponFireModel>(enemy).unwrap();
    assert!((weapon.last_time_shot() - 0.6).abs() < 1e-6);

    // 1.2s > 1.0 → ровно один выстрел, cooldown сброшен
    tick(&mut app, 1);
    let requests = fire_requests.take(&app);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].shooter, enemy);
    assert_eq!(requests[0].target, Some(player));
    assert_eq!(app.world().get::<WeaponFireModel>(enemy).unwrap().last_time_shot(), 0.0);

    // Stand-off: 8m (keep distance) назад от игрока по линии enemy → player
    assert_eq!(
        app.world().get::<NavigationAgent>(enemy).unwrap().destination(),
        Some(Vec3::new(2.0, 0.0, 0.0))
    );

    // Снаряд из pool активирован
    tick(&mut app, 1);
    assert_eq!(active_projectiles(&mut app), 1);
}

#[test]
fn test_obstacle_repositions_without_firing() {
    let mut app = create_combat_app(Duration::from_millis(100));
    let player = spawn_target(&mut app, Vec3::new(10.0, 0.0, 0.0));
    let enemy = gunner(&mut app, player);
    let spot = Vec3::new(4.0, 0.0, 6.0);
    app.world_mut()
        .entity_mut(enemy)
        .insert(TargetSensor::obstructed(spot));
    let mut fire_requests = EventCounter::<ProjectileFireRequest>::new(&app);

    // 3s при интервале 1.0: оружие давно готово, но цель за препятствием
    tick(&mut app, 30);
    assert!(fire_requests.take(&app).is_empty());
    assert!(app.world().get::<WeaponFireModel>(enemy).unwrap().can_fire());
    assert_eq!(
        app.world().get::<NavigationAgent>(enemy).unwrap().destination(),
        Some(spot)
    );

    // Линия огня открылась → выстрел на следующем тике
    app.world_mut()
        .entity_mut(enemy)
        .insert(TargetSensor::clear());
    tick(&mut app, 1);
    assert_eq!(fire_requests.take(&app).len(), 1);
}

#[test]
fn test_inactive_target_is_not_engaged() {
    let mut app = create_combat_app(Duration::from_millis(100));
    let player = spawn_target(&mut app, Vec3::new(10.0, 0.0, 0.0));
    let enemy = gunner(&mut app, player);
    let mut fire_requests = EventCounter::<ProjectileFireRequest>::new(&app);

    app.world_mut().send_event(DeactivateRequest { entity: player });
    tick(&mut app, 20);

    assert!(fire_requests.take(&app).is_empty());
    assert_eq!(app.world().get::<NavigationAgent>(enemy).unwrap().destination(), None);
}

#[test]
fn test_disable_all_returns_enemies_and_projectiles() {
    let mut app = create_combat_app(Duration::from_millis(100));
    let player = spawn_target(&mut app, Vec3::new(10.0, 0.0, 0.0));
    let enemy = gunner(&mut app, player);

    // Первый выстрел примерно через 1s, снаряд ещё в полёте
    tick(&mut app, 12);
    assert_eq!(active_projectiles(&mut app), 1);

    app.world_mut().send_event(DisableAllSpawnables);
    tick(&mut app, 1);

    assert!(!app.world().get::<Activation>(enemy).unwrap().is_active());
    assert_eq!(active_projectiles(&mut app), 0);
    // Игрок не из pool
    assert!(app.world().get::<Activation>(player).unwrap().is_active());

    // Выключенный враг больше не стреляет
    let mut fire_requests = EventCounter::<ProjectileFireRequest>::new(&app);
    tick(&mut app, 30);
    assert!(fire_requests.take(&app).is_empty());
}
