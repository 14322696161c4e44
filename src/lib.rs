//! Stickbrawl fight engine library.
//!
//! This module exposes the pose math, the ECS components, resources, systems
//! and events of the fight core, plus the [`game::FightSession`] root that
//! wires them together. Rendering and input devices live outside the crate.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod moves;
pub mod resources;
pub mod systems;
