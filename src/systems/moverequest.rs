//! Move request observers.
//!
//! [`button_pressed_observer`] resolves a pressed button through
//! [`MoveBindings`] and re-triggers it as a [`MoveRequestedEvent`].
//! [`move_request_observer`] starts the requested move on the fighter's
//! [`MovePlayer`] when the match and the fighter allow it.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::controls::ControlState;
use crate::components::fighter::Fighter;
use crate::components::moveplayer::MovePlayer;
use crate::components::rigidbody::RigidBody;
use crate::components::skeleton::Skeleton;
use crate::error::FightError;
use crate::events::moverequest::{ButtonPressedEvent, MoveRequestedEvent};
use crate::resources::bindings::MoveBindings;
use crate::resources::fightconfig::FightConfig;
use crate::resources::matchstate::MatchState;

pub fn button_pressed_observer(
    trigger: On<ButtonPressedEvent>,
    bindings: Res<MoveBindings>,
    mut commands: Commands,
) {
    let button = trigger.event().button.as_str();
    match bindings.lookup(button) {
        Some((fighter, move_name)) => commands.trigger(MoveRequestedEvent {
            fighter,
            move_name: move_name.to_string(),
        }),
        None => debug!("Button '{}' has no move bound", button),
    }
}

/// Start a move on the requesting fighter.
///
/// Ignored outside `Fighting`, while the fighter is stunned, or when the
/// move is not equipped. Starting a move cancels whatever the fighter was
/// playing, stops its horizontal motion and opens a new attack window by
/// making the opponent vulnerable again.
pub fn move_request_observer(
    trigger: On<MoveRequestedEvent>,
    match_state: Res<MatchState>,
    config: Res<FightConfig>,
    mut fighters: Query<(
        &mut Fighter,
        &mut MovePlayer,
        &mut Skeleton,
        &ControlState,
        &mut RigidBody,
    )>,
) {
    let request = trigger.event();
    if !match_state.is_fighting() {
        debug!(
            "Move '{}' ignored in {:?}",
            request.move_name,
            match_state.phase()
        );
        return;
    }

    let mut started = false;
    for (fighter, mut player, mut skeleton, control, mut rigidbody) in fighters.iter_mut() {
        if fighter.number() != request.fighter {
            continue;
        }
        if control.is_stunned() {
            debug!("Fighter {} is stunned, '{}' ignored", fighter.number(), request.move_name);
            return;
        }
        let Some(m) = fighter.get_move(&request.move_name).cloned() else {
            warn!("{}", FightError::InvalidMoveReference(request.move_name.clone()));
            return;
        };
        let shield_scale = config.shield_scale(m.strength());
        player.trigger(m, &config.blend, shield_scale, &mut *skeleton);
        rigidbody.stop_horizontal();
        started = true;
        break;
    }

    if !started {
        warn!("No fighter {} to start '{}'", request.fighter, request.move_name);
        return;
    }
    for (mut fighter, ..) in fighters.iter_mut() {
        if fighter.number() != request.fighter {
            fighter.invulnerable = false;
        }
    }
}
