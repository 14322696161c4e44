//! Event types and observers used by the fight core.
//!
//! Events are how the outside world (input, collision detection, menus)
//! talks to a running match, and how the match reports back.
//!
//! Submodules:
//! - [`health`] – health changes and game over, plus observers recording them
//! - [`hit`] – collider overlaps between fighters
//! - [`moverequest`] – button presses and move requests
//! - [`pause`] – toggle the match pause
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod health;
pub mod hit;
pub mod moverequest;
pub mod pause;
