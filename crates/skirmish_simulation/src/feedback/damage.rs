//! Damage feedback: health events → presentation fraction + camera shake.
//!
//! Health tracking itself lives in the host; we only consume its events.

use bevy::prelude::*;

use super::camera::ShakeCommand;
use crate::pool::{Activation, EntityDeactivated};

/// Direction of a health change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum HealthChange {
    Recovered,
    Lost,
}

/// Event: health changed on `entity` (emitted by the health collaborator)
///
/// Контракт: `max > 0` (гарантирует отправитель).
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthChanged {
    pub entity: Entity,
    pub change: HealthChange,
    pub amount: f32,
    pub current: f32,
    pub max: f32,
}

impl HealthChanged {
    pub fn recovered(entity: Entity, amount: f32, current: f32, max: f32) -> Self {
        Self {
            entity,
            change: HealthChange::Recovered,
            amount,
            current,
            max,
        }
    }

    pub fn lost(entity: Entity, amount: f32, current: f32, max: f32) -> Self {
        Self {
            entity,
            change: HealthChange::Lost,
            amount,
            current,
            max,
        }
    }
}

/// Health bar state of the player (presentation only)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DamageFeedback {
    health_fraction: f32,
}

impl Default for DamageFeedback {
    fn default() -> Self {
        Self { health_fraction: 1.0 }
    }
}

impl DamageFeedback {
    pub fn health_fraction(&self) -> f32 {
        self.health_fraction
    }

    pub fn on_recover(&mut self, _amount: f32, current: f32, max: f32) {
        self.health_fraction = current / max;
    }

    /// Returns true if a camera shake should start (owner still active).
    pub fn on_lose(&mut self, _amount: f32, current: f32, max: f32, owner_active: bool) -> bool {
        self.health_fraction = current / max;
        owner_active
    }
}

/// System: health events → fraction update, shake on loss
pub fn process_health_events(
    mut health_events: EventReader<HealthChanged>,
    mut owners: Query<(&mut DamageFeedback, Option<&Activation>)>,
    mut shake: EventWriter<ShakeCommand>,
) {
    for event in health_events.read() {
        let Ok((mut feedback, activation)) = owners.get_mut(event.entity) else {
            continue;
        };

        match event.change {
            HealthChange::Recovered => feedback.on_recover(event.amount, event.current, event.max),
            HealthChange::Lost => {
                let owner_active = activation.is_none_or(Activation::is_active);
                if feedback.on_lose(event.amount, event.current, event.max, owner_active) {
                    shake.write(ShakeCommand::Start);
                }
            }
        }
    }
}

/// System: owner deactivated → force-stop the shake (unconditional)
pub fn stop_shake_on_owner_teardown(
    mut deactivated: EventReader<EntityDeactivated>,
    owners: Query<(), With<DamageFeedback>>,
    mut shake: EventWriter<ShakeCommand>,
) {
    for event in deactivated.read() {
        if owners.contains(event.entity) {
            shake.write(ShakeCommand::Stop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_tracks_both_events() {
        let mut feedback = DamageFeedback::default();
        assert_eq!(feedback.health_fraction(), 1.0);

        assert!(feedback.on_lose(25.0, 75.0, 100.0, true));
        assert_eq!(feedback.health_fraction(), 0.75);

        feedback.on_recover(5.0, 80.0, 100.0);
        assert_eq!(feedback.health_fraction(), 0.8);
    }

    #[test]
    fn test_no_shake_for_inactive_owner() {
        let mut feedback = DamageFeedback::default();
        assert!(!feedback.on_lose(50.0, 50.0, 100.0, false));
        assert_eq!(feedback.health_fraction(), 0.5);
    }
}
