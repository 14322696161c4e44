//! Per-fighter control locks.
//!
//! A fighter cannot start moves while stunned, and cannot walk while being
//! knocked back. The match-wide intro freeze lives in
//! [`MatchState`](crate::resources::matchstate::MatchState) instead.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Horizontal speed below which a knocked-back fighter regains control.
pub const KNOCKBACK_RECOVERY_SPEED: f32 = 0.1;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlState {
    /// Remaining stun in seconds. Counted down with world time.
    pub stun_remaining: f32,
    /// Set by a hit, cleared once the push has died down.
    pub knocked_back: bool,
    /// Horizontal speed seen on the previous tick while knocked back.
    pub prev_push_speed: f32,
    /// Velocity stashed while the match is paused.
    pub pre_pause_velocity: Option<Vec2>,
}

impl ControlState {
    pub fn is_stunned(&self) -> bool {
        self.stun_remaining > 0.0
    }

    pub fn stun(&mut self, seconds: f32) {
        self.stun_remaining = seconds.max(0.0);
    }

    /// Count the stun down. Returns true on the tick it expires.
    pub fn tick_stun(&mut self, dt: f32) -> bool {
        if !self.is_stunned() {
            return false;
        }
        self.stun_remaining -= dt;
        if self.stun_remaining <= 0.0 {
            self.stun_remaining = 0.0;
            return true;
        }
        false
    }

    /// Start a knockback lock from the current horizontal speed.
    pub fn knock_back(&mut self, vx: f32) {
        self.knocked_back = true;
        self.prev_push_speed = vx.abs();
    }

    /// Release the knockback lock once the fighter has nearly stopped and is
    /// still slowing down. Returns true when the lock is released.
    pub fn update_knockback(&mut self, vx: f32) -> bool {
        if !self.knocked_back {
            return false;
        }
        let speed = vx.abs();
        let slowing = speed <= self.prev_push_speed;
        self.prev_push_speed = speed;
        if speed < KNOCKBACK_RECOVERY_SPEED && slowing {
            self.knocked_back = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stun_counts_down_with_time() {
        let mut c = ControlState::default();
        c.stun(0.5);
        assert!(c.is_stunned());
        assert!(!c.tick_stun(0.2));
        assert!(!c.tick_stun(0.2));
        assert!(c.tick_stun(0.2));
        assert!(!c.is_stunned());
        assert!(!c.tick_stun(0.2));
    }

    #[test]
    fn test_knockback_releases_when_slow_and_slowing() {
        let mut c = ControlState::default();
        c.knock_back(-300.0);
        assert!(!c.update_knockback(-150.0));
        assert!(c.knocked_back);
        assert!(c.update_knockback(-0.05));
        assert!(!c.knocked_back);
    }

    #[test]
    fn test_knockback_holds_while_speeding_up() {
        let mut c = ControlState::default();
        c.knock_back(0.0);
        c.prev_push_speed = 0.01;
        assert!(!c.update_knockback(0.05));
        assert!(c.knocked_back);
        assert!(c.update_knockback(0.02));
    }
}
