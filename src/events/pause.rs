//! Event and observer to pause and resume a match.
//!
//! Emitting a [`PauseToggleEvent`] flips the match between
//! [`MatchPhase::Fighting`](crate::resources::matchstate::MatchPhase::Fighting)
//! and `Paused`. In any other phase the event is ignored.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::controls::ControlState;
use crate::components::moveplayer::MovePlayer;
use crate::components::rigidbody::RigidBody;
use crate::resources::matchstate::MatchState;

/// Event used to toggle the match pause. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct PauseToggleEvent {}

/// Observer that pauses or resumes every fighter.
///
/// - Pausing freezes all move players and stashes and zeroes velocities.
/// - Resuming restores velocities and resumes move players, except for
///   fighters still serving a stun; those resume when the stun runs out.
pub fn pause_toggle_observer(
    _trigger: On<PauseToggleEvent>,
    mut match_state: ResMut<MatchState>,
    mut fighters: Query<(&mut MovePlayer, &mut RigidBody, &mut ControlState)>,
) {
    if match_state.pause() {
        info!("Match paused");
        for (mut player, mut rb, mut control) in fighters.iter_mut() {
            player.pause();
            control.pre_pause_velocity = Some(rb.velocity);
            rb.velocity = Vec2::ZERO;
            rb.freeze();
        }
    } else if match_state.resume() {
        info!("Match resumed");
        for (mut player, mut rb, mut control) in fighters.iter_mut() {
            if let Some(velocity) = control.pre_pause_velocity.take() {
                rb.velocity = velocity;
            }
            rb.unfreeze();
            if !control.is_stunned() {
                player.resume();
            }
        }
    } else {
        debug!("PauseToggleEvent ignored in {:?}", match_state.phase());
    }
}
