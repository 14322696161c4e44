//! Move playback system.
//!
//! Advances every fighter's [`MovePlayer`] by exactly one pose per schedule
//! run. Playback is frame-driven: the world delta is not consulted, so a
//! move always takes the same number of ticks.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::fighter::Fighter;
use crate::components::moveplayer::{MovePlayer, TickOutcome};
use crate::components::skeleton::Skeleton;

pub fn move_player_system(mut query: Query<(&Fighter, &mut MovePlayer, &mut Skeleton)>) {
    for (fighter, mut player, mut skeleton) in query.iter_mut() {
        if player.tick(&mut *skeleton) == TickOutcome::Finished {
            debug!("Fighter {} is idle again", fighter.number());
        }
    }
}
