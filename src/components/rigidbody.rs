//! Kinematic body for fighters.
//!
//! The [`RigidBody`] component stores the velocity a fighter is moving with,
//! the mass hits are divided by, and a friction factor that makes knockback
//! die down. The `frozen` flag stops integration entirely, which is how the
//! match pause holds fighters in place.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity, mass and friction.
///
/// Integrated by [`movement`](crate::systems::movement::movement) into
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_physics(4.0, 1.0);
/// rb.apply_impulse(Vec2::new(-500.0, 0.0));
/// rb.freeze();
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Impulses are divided by this. Must be positive.
    pub mass: f32,
    /// Velocity damping factor. Applied as: velocity *= (1 - friction * delta).
    pub friction: f32,
    /// When true, the movement system leaves this body alone.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Unit mass, no friction, at rest.
    pub fn new() -> Self {
        Self::with_physics(0.0, 1.0)
    }

    pub fn with_physics(friction: f32, mass: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            mass,
            friction,
            frozen: false,
        }
    }

    /// Add `impulse / mass` to the velocity. A non-positive mass counts as 1.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        let mass = if self.mass > 0.0 { self.mass } else { 1.0 };
        self.velocity += impulse / mass;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Stop horizontal motion, keeping any vertical speed.
    pub fn stop_horizontal(&mut self) {
        self.velocity.x = 0.0;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
