//! Camera shake: one directional shake effect at a time, auto-stopped.
//!
//! State machine:
//! - Stopped → `start()` → Running (auto-stop scheduled after the fixed duration)
//! - Running → `start()` → Running (duration restarted)
//! - Running → deadline elapsed / `stop()` → Stopped
//! - Stopped → `stop()` → Stopped (no-op)
//!
//! The effect is resolved from `ActiveView` when the shake starts and the
//! binding is kept until it stops: switching cameras mid-shake still
//! disables the effect on the camera that was shaking.

use std::time::Duration;

use bevy::prelude::*;

use crate::timing::DeferredCallbacks;

/// Camera currently rendering (set by the host view layer)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActiveView {
    pub camera: Option<Entity>,
}

/// Shake-capable effect attached to a camera entity
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ShakeEffect {
    pub enabled: bool,
}

/// Event: request to start / stop the camera shake
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeCommand {
    Start,
    Stop,
}

/// Access to per-camera shake effects
pub trait ShakeEffects {
    fn has_effect(&self, camera: Entity) -> bool;

    /// Returns false if `camera` has no effect (anymore).
    fn set_enabled(&mut self, camera: Entity, enabled: bool) -> bool;
}

impl ShakeEffects for Query<'_, '_, &mut ShakeEffect> {
    fn has_effect(&self, camera: Entity) -> bool {
        self.contains(camera)
    }

    fn set_enabled(&mut self, camera: Entity, enabled: bool) -> bool {
        match self.get_mut(camera) {
            Ok(mut effect) => {
                effect.enabled = enabled;
                true
            }
            Err(_) => false,
        }
    }
}

/// Shake coordinator resource (one per simulation)
#[derive(Resource, Debug)]
pub struct CameraShakeService {
    duration: Duration,
    bound: Option<Entity>,
    running: bool,
    auto_stop: DeferredCallbacks<()>,
}

impl CameraShakeService {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            bound: None,
            running: false,
            auto_stop: DeferredCallbacks::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Camera whose effect the running shake is bound to
    pub fn bound_effect(&self) -> Option<Entity> {
        self.bound
    }

    /// Time left before auto-stop (None while stopped)
    pub fn remaining(&self) -> Option<Duration> {
        self.auto_stop.next_due_in()
    }

    /// Start (or restart) the shake on the active camera.
    ///
    /// No shake-capable active camera → returns false, state unchanged.
    pub fn start<E: ShakeEffects + ?Sized>(&mut self, active_camera: Option<Entity>, effects: &mut E) -> bool {
        let Some(camera) = active_camera.filter(|camera| effects.has_effect(*camera)) else {
            crate::logger::log_warning("CameraShake: no shake effect on the active camera");
            return false;
        };

        if let Some(previous) = self.bound.filter(|previous| *previous != camera) {
            effects.set_enabled(previous, false);
        }

        effects.set_enabled(camera, true);
        self.bound = Some(camera);
        self.running = true;

        self.auto_stop.cancel_all();
        self.auto_stop.schedule(self.duration, ());
        true
    }

    /// Stop the shake and disable the bound effect. Idempotent.
    pub fn stop<E: ShakeEffects + ?Sized>(&mut self, effects: &mut E) -> bool {
        self.auto_stop.cancel_all();
        if !self.running {
            return false;
        }

        self.running = false;
        if let Some(camera) = self.bound.take() {
            effects.set_enabled(camera, false);
        }
        true
    }

    /// Advance the auto-stop timer; returns true if the shake just stopped.
    pub fn tick<E: ShakeEffects + ?Sized>(&mut self, delta: Duration, effects: &mut E) -> bool {
        if self.auto_stop.tick(delta).is_empty() {
            return false;
        }
        self.stop(effects)
    }
}

/// System: auto-stop elapsed shakes
pub fn tick_camera_shake(
    time: Res<Time>,
    mut service: ResMut<CameraShakeService>,
    mut effects: Query<&mut ShakeEffect>,
) {
    if !service.is_running() {
        return;
    }
    if service.tick(time.delta(), &mut effects) {
        crate::logger::log("CameraShake: auto-stopped");
    }
}

/// System: apply start / stop commands in order
pub fn apply_shake_commands(
    mut commands: EventReader<ShakeCommand>,
    view: Res<ActiveView>,
    mut service: ResMut<CameraShakeService>,
    mut effects: Query<&mut ShakeEffect>,
) {
    for command in commands.read() {
        match command {
            ShakeCommand::Start => {
                service.start(view.camera, &mut effects);
            }
            ShakeCommand::Stop => {
                service.stop(&mut effects);
            }
        }
    }
}
