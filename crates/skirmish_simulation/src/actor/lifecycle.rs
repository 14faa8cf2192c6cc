//! Activation lifecycle of reused pool instances.

use bevy::prelude::*;

use crate::combat::VisualPresence;
use crate::kamikaze::SelfDestructSequence;
use crate::movement::NavigationAgent;
use crate::pool::Activation;

/// System: entity (re)activated → fresh per-activation state
///
/// Navigation steerable again, visual presence back, self-destruct Idle
/// with nothing pending.
pub fn reset_on_activation(
    mut actors: Query<
        (
            &Activation,
            Option<&mut NavigationAgent>,
            Option<&mut VisualPresence>,
            Option<&mut SelfDestructSequence>,
        ),
        Changed<Activation>,
    >,
) {
    for (activation, navigation, presence, sequence) in actors.iter_mut() {
        if !activation.is_active() {
            continue;
        }

        if let Some(mut navigation) = navigation {
            navigation.enable();
        }
        if let Some(mut presence) = presence {
            presence.visible = true;
        }
        if let Some(mut sequence) = sequence {
            sequence.restart();
        }
    }
}
