//! Authored fight moves.
//!
//! A [`Move`] is an ordered, fixed-capacity list of key poses plus the stats
//! the blender and combat rules read. Key poses are appended and removed from
//! the end only. Once a move is stored in the
//! [`MoveLibrary`](crate::resources::movelibrary::MoveLibrary) it is never
//! mutated again; fighters hold it behind an `Arc`.

use serde::{Deserialize, Serialize};

use super::bodypart::BodyPart;
use super::pose::Pose;
use crate::error::{FightError, Result};

/// Default number of key poses a move can hold.
pub const DEFAULT_CAPACITY: usize = 12;
/// Default speed and strength stat.
pub const DEFAULT_STAT: u8 = 50;
/// Upper bound of the speed and strength stats.
pub const MAX_STAT: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    name: String,
    capacity: usize,
    key_poses: Vec<Pose>,
    speed: u8,
    strength: u8,
    block_move: bool,
    active_part: BodyPart,
}

impl Default for Move {
    fn default() -> Self {
        Self::new("")
    }
}

impl Move {
    /// Create an empty move with the default capacity and stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            key_poses: Vec::with_capacity(capacity),
            speed: DEFAULT_STAT,
            strength: DEFAULT_STAT,
            block_move: false,
            active_part: BodyPart::Head,
        }
    }

    /// Append a key pose at the next free index.
    ///
    /// A full move is left untouched and [`FightError::CapacityExceeded`] is
    /// returned; callers in the editor treat this as a no-op.
    pub fn add_key_pose(&mut self, pose: Pose) -> Result<()> {
        if self.key_poses.len() >= self.capacity {
            return Err(FightError::CapacityExceeded {
                name: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.key_poses.push(pose);
        Ok(())
    }

    /// Remove the last key pose, if any.
    pub fn remove_key_pose(&mut self) -> Option<Pose> {
        self.key_poses.pop()
    }

    pub fn key_poses(&self) -> &[Pose] {
        &self.key_poses
    }

    /// First authored pose; the stance a move starts from and returns to.
    pub fn first_pose(&self) -> Option<&Pose> {
        self.key_poses.first()
    }

    pub fn count(&self) -> usize {
        self.key_poses.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.key_poses.len() >= self.capacity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Set the speed stat, clamped to `0..=100`.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(MAX_STAT);
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Set the strength stat, clamped to `0..=100`.
    pub fn set_strength(&mut self, strength: u8) {
        self.strength = strength.min(MAX_STAT);
    }

    pub fn is_block_move(&self) -> bool {
        self.block_move
    }

    pub fn set_block_move(&mut self, block_move: bool) {
        self.block_move = block_move;
    }

    /// The part that deals damage, or carries the shield for block moves.
    pub fn active_part(&self) -> BodyPart {
        self.active_part
    }

    pub fn set_active_part(&mut self, part: BodyPart) {
        self.active_part = part;
    }

    /// Check the invariants a move read from disk must hold.
    pub fn validate(&self) -> Result<()> {
        let corrupt = |reason: String| FightError::CorruptMove {
            name: self.name.clone(),
            reason,
        };
        if self.name.is_empty() {
            return Err(FightError::EmptyMoveName);
        }
        if self.key_poses.len() > self.capacity {
            return Err(corrupt(format!(
                "{} key poses exceed capacity {}",
                self.key_poses.len(),
                self.capacity
            )));
        }
        if self.speed > MAX_STAT || self.strength > MAX_STAT {
            return Err(corrupt(format!(
                "stats out of range (speed {}, strength {})",
                self.speed, self.strength
            )));
        }
        Ok(())
    }
}
