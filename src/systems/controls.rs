//! Control lock countdowns.
//!
//! Runs the match intro freeze, counts stuns down with world time and
//! releases knockback locks. Stun countdowns only run while fighting, so a
//! pause does not eat into them.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::controls::ControlState;
use crate::components::fighter::Fighter;
use crate::components::moveplayer::MovePlayer;
use crate::components::rigidbody::RigidBody;
use crate::resources::matchstate::{MatchPhase, MatchState};
use crate::resources::worldtime::WorldTime;

pub fn controls_system(
    time: Res<WorldTime>,
    mut match_state: ResMut<MatchState>,
    mut query: Query<(&Fighter, &mut ControlState, &mut MovePlayer, &RigidBody)>,
) {
    if match_state.phase() == MatchPhase::Intro {
        match_state.tick_intro(time.delta);
        return;
    }
    if !match_state.is_fighting() {
        return;
    }

    for (fighter, mut control, mut player, rigidbody) in query.iter_mut() {
        if control.tick_stun(time.delta) {
            info!("Fighter {} recovered from stun", fighter.number());
            player.resume();
        }
        control.update_knockback(rigidbody.velocity.x);
    }
}
