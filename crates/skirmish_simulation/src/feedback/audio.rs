//! Audio requests (ECS → host audio layer).

use bevy::prelude::*;

/// Sound cues the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SoundCue {
    KamikazeExplosion,
}

/// Event: play `cue` at `position` (emitter = entity that caused it)
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundRequested {
    pub cue: SoundCue,
    pub emitter: Entity,
    pub position: Vec3,
}
