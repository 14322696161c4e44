//! Button to move bindings.
//!
//! Each fighter owns a fixed row of buttons. A move equipped on a fighter is
//! registered to one of that fighter's buttons; pressing the button requests
//! the move. A button string can belong to one fighter only.

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Default buttons for player 1.
pub const PLAYER_ONE_BUTTONS: &str = "uiojkl";
/// Default buttons for player 2.
pub const PLAYER_TWO_BUTTONS: &str = "rtyfgh";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ButtonSlot {
    fighter: u8,
    slot: usize,
    move_name: Option<String>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MoveBindings {
    buttons: FxHashMap<String, ButtonSlot>,
}

impl MoveBindings {
    /// No buttons at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Six buttons per player, nothing registered.
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();
        for (fighter, row) in [(1, PLAYER_ONE_BUTTONS), (2, PLAYER_TWO_BUTTONS)] {
            for (slot, c) in row.chars().enumerate() {
                bindings.add_button(&c.to_string(), fighter, slot);
            }
        }
        bindings
    }

    /// Give `button` to `fighter` at `slot`. Fails if the button is taken.
    pub fn add_button(&mut self, button: &str, fighter: u8, slot: usize) -> bool {
        if button.is_empty() || self.buttons.contains_key(button) {
            warn!("Button '{}' is already in use", button);
            return false;
        }
        self.buttons.insert(
            button.to_string(),
            ButtonSlot {
                fighter,
                slot,
                move_name: None,
            },
        );
        true
    }

    pub fn remove_button(&mut self, button: &str) -> bool {
        self.buttons.remove(button).is_some()
    }

    /// Bind `move_name` to `button`. Returns the fighter owning the button.
    pub fn register(&mut self, button: &str, move_name: &str) -> Option<u8> {
        let slot = self.buttons.get_mut(button)?;
        debug!(
            "Binding '{}' to button '{}' of fighter {}",
            move_name, button, slot.fighter
        );
        slot.move_name = Some(move_name.to_string());
        Some(slot.fighter)
    }

    /// Unbind `move_name` from every button it is bound to.
    pub fn deregister(&mut self, move_name: &str) {
        for slot in self.buttons.values_mut() {
            if slot.move_name.as_deref() == Some(move_name) {
                slot.move_name = None;
            }
        }
    }

    /// Unbind `move_name` from the buttons of `fighter` only.
    pub fn deregister_for(&mut self, fighter: u8, move_name: &str) {
        for slot in self.buttons.values_mut().filter(|s| s.fighter == fighter) {
            if slot.move_name.as_deref() == Some(move_name) {
                slot.move_name = None;
            }
        }
    }

    /// Unbind every move owned by `fighter`.
    pub fn clear_fighter(&mut self, fighter: u8) {
        for slot in self.buttons.values_mut().filter(|s| s.fighter == fighter) {
            slot.move_name = None;
        }
    }

    /// Fighter and move bound to `button`, if any move is bound.
    pub fn lookup(&self, button: &str) -> Option<(u8, &str)> {
        let slot = self.buttons.get(button)?;
        slot.move_name.as_deref().map(|name| (slot.fighter, name))
    }

    pub fn has_button(&self, fighter: u8, button: &str) -> bool {
        self.buttons
            .get(button)
            .is_some_and(|slot| slot.fighter == fighter)
    }

    /// Buttons owned by `fighter` in slot order.
    pub fn buttons_for(&self, fighter: u8) -> Vec<&str> {
        let mut owned: Vec<(&str, usize)> = self
            .buttons
            .iter()
            .filter(|(_, slot)| slot.fighter == fighter)
            .map(|(button, slot)| (button.as_str(), slot.slot))
            .collect();
        owned.sort_by_key(|&(_, slot)| slot);
        owned.into_iter().map(|(button, _)| button).collect()
    }

    /// First button of `fighter` with nothing bound to it.
    pub fn free_button(&self, fighter: u8) -> Option<&str> {
        self.buttons_for(fighter)
            .into_iter()
            .find(|b| self.lookup(b).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows() {
        let b = MoveBindings::with_defaults();
        assert_eq!(b.buttons_for(1), vec!["u", "i", "o", "j", "k", "l"]);
        assert_eq!(b.buttons_for(2), vec!["r", "t", "y", "f", "g", "h"]);
        assert!(b.has_button(1, "k"));
        assert!(!b.has_button(2, "k"));
    }

    #[test]
    fn test_button_belongs_to_one_fighter() {
        let mut b = MoveBindings::with_defaults();
        assert!(!b.add_button("u", 2, 6));
        assert!(b.has_button(1, "u"));
        assert!(b.add_button("z", 2, 6));
    }

    #[test]
    fn test_register_and_lookup() {
        let mut b = MoveBindings::with_defaults();
        assert_eq!(b.register("t", "Kick"), Some(2));
        assert_eq!(b.lookup("t"), Some((2, "Kick")));
        assert_eq!(b.lookup("r"), None);
        assert_eq!(b.register("?", "Kick"), None);
        assert_eq!(b.free_button(2), Some("r"));
    }

    #[test]
    fn test_deregister_and_remove() {
        let mut b = MoveBindings::with_defaults();
        b.register("u", "Jab");
        b.register("r", "Jab");
        b.deregister("Jab");
        assert_eq!(b.lookup("u"), None);
        assert_eq!(b.lookup("r"), None);

        b.register("i", "Hook");
        b.register("t", "Hook");
        b.deregister_for(2, "Hook");
        assert_eq!(b.lookup("i"), Some((1, "Hook")));
        assert_eq!(b.lookup("t"), None);
        b.clear_fighter(1);
        assert_eq!(b.lookup("i"), None);

        assert!(b.remove_button("i"));
        assert!(!b.has_button(1, "i"));
        assert_eq!(b.buttons_for(1).len(), 5);
    }
}
