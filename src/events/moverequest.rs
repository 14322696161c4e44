//! Move request events.
//!
//! Input (outside this crate) reports raw button presses as
//! [`ButtonPressedEvent`]; the bindings turn them into
//! [`MoveRequestedEvent`]s, which can also be triggered directly by AI or
//! tests. See [`crate::systems::moverequest`] for the observers.

use bevy_ecs::prelude::*;

/// A button was pressed.
#[derive(Event, Debug, Clone)]
pub struct ButtonPressedEvent {
    pub button: String,
}

/// Fighter number `fighter` wants to start the equipped move `move_name`.
#[derive(Event, Debug, Clone)]
pub struct MoveRequestedEvent {
    pub fighter: u8,
    pub move_name: String,
}
