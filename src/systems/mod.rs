//! Fight systems and observers.
//!
//! Submodules overview
//! - [`combat`] – resolve hits into damage, knockback and stun
//! - [`controls`] – intro freeze, stun countdown and knockback recovery
//! - [`moveplayer`] – apply one pose per fighter per tick
//! - [`moverequest`] – turn button presses and requests into started moves
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta

pub mod combat;
pub mod controls;
pub mod moveplayer;
pub mod moverequest;
pub mod movement;
pub mod time;
