//! A single key pose: sparse body-part rotations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::bodypart::BodyPart;

/// Rotation returned for any part a pose does not name.
pub const DEFAULT_ROTATION: f32 = 0.0;

/// Sparse mapping from body part to absolute rotation in degrees.
///
/// Inserting a part that is already present replaces its angle. `Clone` is a
/// deep copy of the mapping, which is what the move library relies on when it
/// stores a finished move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose {
    rotations: FxHashMap<BodyPart, f32>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, part: BodyPart, rotation: f32) -> Self {
        self.set_rotation(part, rotation);
        self
    }

    pub fn set_rotation(&mut self, part: BodyPart, rotation: f32) {
        self.rotations.insert(part, rotation);
    }

    /// Rotation of `part`, or [`DEFAULT_ROTATION`] when the pose does not name it.
    pub fn rotation(&self, part: BodyPart) -> f32 {
        self.rotations
            .get(&part)
            .copied()
            .unwrap_or(DEFAULT_ROTATION)
    }

    pub fn contains(&self, part: BodyPart) -> bool {
        self.rotations.contains_key(&part)
    }

    /// Parts explicitly present in this pose, in arena order.
    pub fn parts(&self) -> Vec<BodyPart> {
        let mut parts: Vec<BodyPart> = self.rotations.keys().copied().collect();
        parts.sort();
        parts
    }

    /// Iterate explicit `(part, rotation)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, f32)> + '_ {
        self.rotations.iter().map(|(part, rot)| (*part, *rot))
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}
