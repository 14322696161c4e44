//! Shared library of finished moves.
//!
//! The library is the pool fighters pick their movesets from. Moves enter it
//! only as deep copies of an editor draft and are never edited afterwards.
//! Names are unique; insertion order is kept so listings and saved files are
//! stable.
//!
//! # File Format
//!
//! A JSON array of move records:
//!
//! ```json
//! [
//!   {
//!     "name": "Jab",
//!     "capacity": 12,
//!     "key_poses": [{ "Right Hand": 0.0 }, { "Right Hand": 80.0 }],
//!     "speed": 70,
//!     "strength": 40,
//!     "block_move": false,
//!     "active_part": "Right Hand"
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashSet;

use crate::error::{FightError, Result};
use crate::moves::fightmove::Move;

/// Ordered collection of uniquely named moves.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MoveLibrary {
    moves: Vec<Move>,
}

impl MoveLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a deep copy of `m`.
    ///
    /// Fails with [`FightError::EmptyMoveName`] or
    /// [`FightError::DuplicateMoveName`]; the library is unchanged on error.
    pub fn add(&mut self, m: &Move) -> Result<()> {
        if m.name().is_empty() {
            return Err(FightError::EmptyMoveName);
        }
        if self.contains_name(m.name()) {
            return Err(FightError::DuplicateMoveName(m.name().to_string()));
        }
        self.moves.push(m.clone());
        Ok(())
    }

    /// Remove a move by name. Returns the removed move if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Move> {
        let pos = self.moves.iter().position(|m| m.name() == name)?;
        Some(self.moves.remove(pos))
    }

    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name() == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.moves.iter().any(|m| m.name() == name)
    }

    /// A name is valid for saving when it is non-empty and unused.
    pub fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty() && !self.contains_name(name)
    }

    /// First unused name of the form `Move0`, `Move1`, ...
    pub fn generate_valid_name(&self) -> String {
        let mut i = 0usize;
        loop {
            let name = format!("Move{i}");
            if !self.contains_name(&name) {
                return name;
            }
            i += 1;
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn names(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Parse and validate a library from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let moves: Vec<Move> = serde_json::from_str(text)?;
        let mut seen = FxHashSet::default();
        for m in &moves {
            m.validate()?;
            if !seen.insert(m.name().to_string()) {
                return Err(FightError::DuplicateMoveName(m.name().to_string()));
            }
        }
        Ok(Self { moves })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.moves)?)
    }

    /// Load a library file, replacing the current contents.
    ///
    /// A missing file is not an error: the library is left empty.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Move library {:?} not found, starting empty", path);
            self.moves.clear();
            return Ok(());
        }
        let text = fs::read_to_string(path)?;
        *self = Self::from_json(&text)?;
        info!("Loaded {} moves from {:?}", self.moves.len(), path);
        Ok(())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!("Saved {} moves to {:?}", self.moves.len(), path);
        Ok(())
    }
}
