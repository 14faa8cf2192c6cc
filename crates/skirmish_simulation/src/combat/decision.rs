//! Combat decision policy (pure, no ECS access).
//!
//! Priority order per tick:
//! 1. Kamikaze → chase the target's current position (no weapon)
//! 2. Target behind obstacle → reposition to the sensor's shooting spot, no fire
//! 3. Weapon ready → move to stand-off point + aim + fire
//! 4. Otherwise → hold (cooldown still running)
//!
//! Система `evaluate_combat_decisions` собирает `DecisionInput` из компонентов,
//! вызывает `decide` и применяет результат (navigation, shoot point, fire request).

use bevy::prelude::*;

use super::components::TargetSensor;

/// Everything the policy needs for one entity, one tick
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput {
    pub position: Vec3,
    pub target_position: Vec3,
    pub kamikaze: bool,
    pub sensor: TargetSensor,
    pub keep_distance: f32,
    pub weapon_ready: bool,
}

/// At most one action per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatAction {
    /// Move toward the target itself (kamikaze)
    Chase { destination: Vec3 },
    /// Move to a spot with line of sight; firing suppressed
    Reposition { destination: Vec3 },
    /// Move to the stand-off point, aim at `aim_at` and fire once
    Engage { destination: Vec3, aim_at: Vec3 },
    /// Nothing this tick
    Hold,
}

impl CombatAction {
    pub fn fires(&self) -> bool {
        matches!(self, CombatAction::Engage { .. })
    }

    pub fn destination(&self) -> Option<Vec3> {
        match *self {
            CombatAction::Chase { destination }
            | CombatAction::Reposition { destination }
            | CombatAction::Engage { destination, .. } => Some(destination),
            CombatAction::Hold => None,
        }
    }
}

pub fn decide(input: &DecisionInput) -> CombatAction {
    if input.kamikaze {
        return CombatAction::Chase {
            destination: input.target_position,
        };
    }

    if input.sensor.target_behind_obstacle {
        return CombatAction::Reposition {
            destination: input.sensor.best_shooting_position,
        };
    }

    if input.weapon_ready {
        return CombatAction::Engage {
            destination: stand_off_point(input.position, input.target_position, input.keep_distance),
            aim_at: input.target_position,
        };
    }

    CombatAction::Hold
}

/// Point `keep_distance` back from the target along entity → target.
///
/// Entity standing on the target (zero direction) → the target position itself.
pub fn stand_off_point(position: Vec3, target: Vec3, keep_distance: f32) -> Vec3 {
    let direction = (target - position).normalize_or_zero();
    target - direction * keep_distance
}
