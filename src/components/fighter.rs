//! Fighter identity, moveset and health.

use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::debug;
use rustc_hash::FxHashMap;

use crate::moves::fightmove::Move;

/// Identity color of a fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterColor {
    Red,
    Blue,
}

impl fmt::Display for FighterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FighterColor::Red => write!(f, "Red"),
            FighterColor::Blue => write!(f, "Blue"),
        }
    }
}

/// One of the two players.
///
/// Equality is by player number only. The moveset holds shared handles to
/// library moves; equipping never copies key poses.
#[derive(Component, Debug, Clone)]
pub struct Fighter {
    number: u8,
    color: FighterColor,
    moveset: FxHashMap<String, Arc<Move>>,
    health: i32,
    max_health: i32,
    /// Set by the first hit of an attack window; cleared when the opponent
    /// starts a new move.
    pub invulnerable: bool,
}

impl PartialEq for Fighter {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Fighter {}

impl Fighter {
    pub fn new(number: u8, color: FighterColor, max_health: i32) -> Self {
        Self {
            number,
            color,
            moveset: FxHashMap::default(),
            health: max_health,
            max_health,
            invulnerable: false,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn color(&self) -> FighterColor {
        self.color
    }

    /// Equip a move. A name that is already equipped is left as is.
    pub fn add_move(&mut self, m: Arc<Move>) -> bool {
        if self.moveset.contains_key(m.name()) {
            debug!("Fighter {}: '{}' already equipped", self.number, m.name());
            return false;
        }
        self.moveset.insert(m.name().to_string(), m);
        true
    }

    pub fn delete_move(&mut self, name: &str) -> Option<Arc<Move>> {
        self.moveset.remove(name)
    }

    pub fn clear_moves(&mut self) {
        self.moveset.clear();
    }

    pub fn get_move(&self, name: &str) -> Option<&Arc<Move>> {
        self.moveset.get(name)
    }

    /// Equipped move names, sorted.
    pub fn move_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.moveset.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Health as a fraction of max health, floored at 0.
    pub fn health_percentage(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        self.health.max(0) as f32 / self.max_health as f32
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` from health. Health may go negative.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Restore health and forget the moveset. Used between matches.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.invulnerable = false;
        self.moveset.clear();
    }
}
