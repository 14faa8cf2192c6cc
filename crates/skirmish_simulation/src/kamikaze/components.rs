//! Self-destruct sequence + explosion effect components.

use std::time::Duration;

use bevy::prelude::*;

use crate::timing::DeferredCallbacks;

/// Phase of the self-destruct sequence
///
/// Monotonic: Idle → Triggered → Exploded → Destroyed. Never regresses
/// within one activation; `Destroyed` is reachable from `Exploded` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Reflect)]
pub enum SelfDestructPhase {
    #[default]
    Idle,
    Triggered,
    Exploded,
    Destroyed,
}

/// Deferred step scheduled on trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfDestructStep {
    /// D/2: navigation off
    Explode,
    /// D: entity back to the pool
    Destroy,
}

/// Kamikaze self-destruct state (one per kamikaze enemy)
///
/// Owns its deferred callbacks: `cancel` drops them on teardown, so a
/// deactivated entity never sees a late Explode / Destroy.
#[derive(Component, Debug, Clone, Default)]
pub struct SelfDestructSequence {
    phase: SelfDestructPhase,
    callbacks: DeferredCallbacks<SelfDestructStep>,
}

impl SelfDestructSequence {
    pub fn phase(&self) -> SelfDestructPhase {
        self.phase
    }

    /// Callbacks still pending (Explode and/or Destroy)
    pub fn pending(&self) -> usize {
        self.callbacks.len()
    }

    /// Idle → Triggered; schedules Explode at D/2 and Destroy at D.
    ///
    /// Returns false (no-op) if the sequence already left Idle.
    pub fn trigger(&mut self, effect_duration: Duration) -> bool {
        if self.phase != SelfDestructPhase::Idle {
            return false;
        }

        self.phase = SelfDestructPhase::Triggered;
        self.callbacks.schedule(effect_duration / 2, SelfDestructStep::Explode);
        self.callbacks.schedule(effect_duration, SelfDestructStep::Destroy);
        true
    }

    /// Advance the callbacks; returns the steps that took effect, in order.
    pub fn tick(&mut self, delta: Duration) -> Vec<SelfDestructStep> {
        let mut applied = Vec::new();
        for step in self.callbacks.tick(delta) {
            let next = match (self.phase, step) {
                (SelfDestructPhase::Triggered, SelfDestructStep::Explode) => SelfDestructPhase::Exploded,
                (SelfDestructPhase::Exploded, SelfDestructStep::Destroy) => SelfDestructPhase::Destroyed,
                _ => continue,
            };
            self.phase = next;
            applied.push(step);
        }
        applied
    }

    /// Drop pending callbacks (owner teardown). Idempotent.
    pub fn cancel(&mut self) -> usize {
        self.callbacks.cancel_all()
    }

    /// Fresh lifecycle for a reactivated pool instance.
    pub fn restart(&mut self) {
        self.callbacks.cancel_all();
        self.phase = SelfDestructPhase::Idle;
    }
}

/// Explosion visual effect (pooled instance)
///
/// Follows its source's lifetime: released after `duration` or as soon as
/// the source is deactivated, whichever comes first.
#[derive(Component, Debug, Clone)]
pub struct ExplosionEffect {
    pub source: Entity,
    timer: Timer,
}

impl ExplosionEffect {
    pub fn new(source: Entity, duration: Duration) -> Self {
        Self {
            source,
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Advance; returns true once the effect has played out.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).finished()
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}
