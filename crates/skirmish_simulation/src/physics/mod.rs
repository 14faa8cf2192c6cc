//! Physics bodies for simulated actors (Rapier components).
//!
//! Симуляция только описывает тела; шаг физики и contact detection
//! выполняет host (RapierPhysicsPlugin или движок). Начавшиеся контакты
//! приходят обратно как `CollisionEvent`.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Capsule height / radius of an actor body (metres)
pub const ACTOR_HALF_HEIGHT: f32 = 0.5;
pub const ACTOR_RADIUS: f32 = 0.4;

/// Kinematic actor body that reports contact start/stop events
///
/// Kinematic-vs-kinematic pairs (enemy vs player) must be enabled
/// explicitly, otherwise Rapier never reports them.
pub fn actor_body() -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(ACTOR_HALF_HEIGHT, ACTOR_RADIUS),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}
