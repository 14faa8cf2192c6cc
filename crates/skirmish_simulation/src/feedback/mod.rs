//! Feedback domain: damage → camera shake, audio requests.
//!
//! Содержит:
//! - DamageFeedback (health fraction, shake on loss)
//! - CameraShakeService (single shake effect, auto-stop, binding captured at start)
//! - SoundRequested (audio cues for the host)

use bevy::prelude::*;

pub mod audio;
pub mod camera;
pub mod damage;

pub use audio::*;
pub use camera::*;
pub use damage::*;

use crate::config::SimulationSettings;
use crate::SimulationSet;

/// Feedback Plugin
///
/// Порядок выполнения (SimulationSet::Feedback):
/// 1. process_health_events: HealthChanged → ShakeCommand::Start
/// 2. stop_shake_on_owner_teardown: EntityDeactivated → ShakeCommand::Stop
/// 3. tick_camera_shake: auto-stop
/// 4. apply_shake_commands
///
/// Auto-stop тикает до применения команд: shake, начатый на тике N,
/// впервые продвигается на тике N+1.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HealthChanged>()
            .add_event::<ShakeCommand>()
            .add_event::<SoundRequested>()
            .init_resource::<ActiveView>();

        if !app.world().contains_resource::<CameraShakeService>() {
            let duration = app
                .world()
                .get_resource::<SimulationSettings>()
                .map(SimulationSettings::camera_shake_duration)
                .unwrap_or_else(|| SimulationSettings::default().camera_shake_duration());
            app.insert_resource(CameraShakeService::new(duration));
        }

        app.add_systems(
            FixedUpdate,
            (
                process_health_events,
                stop_shake_on_owner_teardown,
                tick_camera_shake,
                apply_shake_commands,
            )
                .chain()
                .in_set(SimulationSet::Feedback),
        );
    }
}
