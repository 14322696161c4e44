//! Hit resolution.
//!
//! [`hit_observer`] is the only code that changes health. A hit lands when
//! the attacker is playing an attack move, the touching collider is that
//! move's active part, and the defender has not already been hit in this
//! attack window. It then resolves either as a blocked hit (the defender's
//! block move shield was touched) or as a clean hit.
//!
//! # Rules
//!
//! | Path    | Health change                                    | Knockback         | Extra                         |
//! |---------|--------------------------------------------------|-------------------|-------------------------------|
//! | clean   | `round(strength_eff) + 1`, may kill              | `knockback`       |                               |
//! | blocked | `damage + 1` if `damage > 0` and it would not kill | `block_knockback` | both reset, attacker stunned |
//!
//! where `damage = round(strength_eff) - round(block_eff)`. Knockback is halved for
//! airborne defenders and always points away from the attacker; a defender
//! level with the attacker is pushed left.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info, warn};

use crate::components::controls::ControlState;
use crate::components::fighter::Fighter;
use crate::components::mapposition::MapPosition;
use crate::components::moveplayer::MovePlayer;
use crate::components::rigidbody::RigidBody;
use crate::components::skeleton::Skeleton;
use crate::events::health::{GameOverEvent, HealthChangedEvent};
use crate::events::hit::{Collider, HitEvent};
use crate::resources::fightconfig::FightConfig;
use crate::resources::matchstate::MatchState;

/// Health lost on a clean hit with raw damage `strength_eff`.
pub fn clean_hit_damage(strength_eff: f32) -> i32 {
    strength_eff.round_ties_even() as i32 + 1
}

/// Health lost on a blocked hit. Blocking never kills.
pub fn blocked_hit_damage(strength_eff: f32, block_eff: f32, health: i32) -> i32 {
    let damage = strength_eff.round_ties_even() as i32 - block_eff.round_ties_even() as i32;
    if damage > 0 && health > damage + 1 {
        damage + 1
    } else {
        0
    }
}

pub fn hit_observer(
    trigger: On<HitEvent>,
    mut commands: Commands,
    config: Res<FightConfig>,
    mut match_state: ResMut<MatchState>,
    mut fighters: Query<(
        &mut Fighter,
        &mut MovePlayer,
        &mut Skeleton,
        &mut ControlState,
        &mut RigidBody,
        &MapPosition,
    )>,
) {
    let hit = *trigger.event();
    if !match_state.is_fighting() || hit.attacker == hit.defender {
        return;
    }
    let Ok(
        [
            (a_fighter, mut a_player, mut a_skeleton, mut a_control, _, a_pos),
            (mut d_fighter, mut d_player, mut d_skeleton, mut d_control, mut d_rb, d_pos),
        ],
    ) = fighters.get_many_mut([hit.attacker, hit.defender])
    else {
        warn!("HitEvent between unknown fighters {:?}", hit);
        return;
    };

    let Some(attack) = a_player.current_move().cloned() else {
        return;
    };
    if attack.is_block_move() || hit.attacker_collider != Collider::Part(attack.active_part()) {
        return;
    }
    if d_fighter.invulnerable {
        debug!("Fighter {} already hit in this window", d_fighter.number());
        return;
    }
    d_fighter.invulnerable = true;

    let strength_eff = config.strength_effect(attack.strength());
    let block = d_player
        .current_move()
        .filter(|m| m.is_block_move() && hit.defender_collider == Collider::Shield(m.active_part()))
        .cloned();

    let modifier = match block {
        Some(block) => {
            let block_eff = config.block_effect(block.speed());
            let damage = blocked_hit_damage(strength_eff, block_eff, d_fighter.health());
            d_fighter.take_damage(damage);
            info!(
                "Fighter {} blocked '{}' with '{}' ({} damage)",
                d_fighter.number(),
                attack.name(),
                block.name(),
                damage
            );
            a_player.reset(&mut *a_skeleton);
            d_player.reset(&mut *d_skeleton);
            a_player.pause();
            a_control.stun(config.stun_time(attack.strength()));
            config.block_knockback
        }
        None => {
            let damage = clean_hit_damage(strength_eff);
            d_fighter.take_damage(damage);
            info!(
                "Fighter {} hit by '{}' for {}",
                d_fighter.number(),
                attack.name(),
                damage
            );
            config.knockback
        }
    };

    let direction = if d_pos.pos.x > a_pos.pos.x { 1.0 } else { -1.0 };
    let mut force = modifier;
    if d_rb.velocity.y.abs() > config.airborne_threshold {
        force /= 2.0;
    }
    d_rb.stop_horizontal();
    d_rb.apply_impulse(Vec2::new(direction * force, 0.0));
    d_control.knock_back(d_rb.velocity.x);

    commands.trigger(HealthChangedEvent {
        fighter: d_fighter.number(),
        health: d_fighter.health(),
        percentage: d_fighter.health_percentage(),
    });

    if d_fighter.is_dead() && match_state.finish(a_fighter.number()) {
        a_player.pause();
        d_player.pause();
        commands.trigger(GameOverEvent {
            winner: a_fighter.number(),
            loser: d_fighter.number(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_hit_adds_one() {
        assert_eq!(clean_hit_damage(81.0), 82);
        assert_eq!(clean_hit_damage(9.0), 10);
        // ties round to even
        assert_eq!(clean_hit_damage(45.5), 47);
    }

    #[test]
    fn test_blocked_hit_withheld_when_it_would_kill() {
        assert_eq!(blocked_hit_damage(9.0, 0.0, 10), 0);
        assert_eq!(blocked_hit_damage(9.0, 0.0, 11), 10);
    }

    #[test]
    fn test_strong_block_absorbs_everything() {
        assert_eq!(blocked_hit_damage(40.0, 40.0, 600), 0);
        assert_eq!(blocked_hit_damage(10.0, 121.0, 600), 0);
    }

    #[test]
    fn test_blocked_hit_rounds_each_side() {
        // 81 - round(75.5) = 81 - 76
        assert_eq!(blocked_hit_damage(81.0, 75.5, 600), 6);
        assert_eq!(blocked_hit_damage(40.4, 30.4, 600), 11);
    }

    #[test]
    fn test_blocking_never_kills() {
        for health in 1..150 {
            for strength in (0..=120).step_by(7) {
                let dealt = blocked_hit_damage(strength as f32, 5.0, health);
                assert!(health - dealt >= 1, "health {health} strength {strength}");
            }
        }
    }
}
