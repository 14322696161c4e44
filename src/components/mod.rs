//! ECS components for fighters.
//!
//! Every fighter entity carries one of each of these.
//!
//! Submodules overview:
//! - [`controls`] – stun and knockback locks
//! - [`fighter`] – player identity, moveset, health and invulnerability
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`moveplayer`] – per-fighter move playback state machine
//! - [`rigidbody`] – kinematic body storing velocity and mass
//! - [`skeleton`] – body-part rotations, highlights and shields

pub mod controls;
pub mod fighter;
pub mod mapposition;
pub mod moveplayer;
pub mod rigidbody;
pub mod skeleton;
