//! Stick-figure skeleton and the pose application seam.
//!
//! The [`Skeleton`] component is the fighter's renderable state: one absolute
//! rotation per body part, a highlight flag for the damage collider and a
//! shield slot per part. Anything that wants to receive poses implements
//! [`PoseTarget`]; the [`MovePlayer`](super::moveplayer::MovePlayer) only
//! talks to that trait.

use bevy_ecs::prelude::Component;

use crate::moves::bodypart::BodyPart;
use crate::moves::pose::{DEFAULT_ROTATION, Pose};

/// Receiver of pose updates from a move player.
pub trait PoseTarget {
    /// Assign an absolute rotation. Never accumulates.
    fn apply_rotation(&mut self, part: BodyPart, angle: f32);
    /// Show or hide the damage highlight of `part`.
    fn set_highlight(&mut self, part: BodyPart, on: bool);
    /// Show or hide the shield carried by `part`.
    fn set_shield(&mut self, part: BodyPart, visible: bool, scale: f32);

    /// Apply every rotation named by `pose`; other parts are left untouched.
    fn apply_pose(&mut self, pose: &Pose) {
        for (part, angle) in pose.iter() {
            self.apply_rotation(part, angle);
        }
    }
}

/// Shield slot attached to a body part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shield {
    pub visible: bool,
    pub scale: f32,
}

impl Default for Shield {
    fn default() -> Self {
        Self {
            visible: false,
            scale: 1.0,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Skeleton {
    rotations: [f32; BodyPart::COUNT],
    highlights: [bool; BodyPart::COUNT],
    shields: [Shield; BodyPart::COUNT],
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            rotations: [DEFAULT_ROTATION; BodyPart::COUNT],
            highlights: [false; BodyPart::COUNT],
            shields: [Shield::default(); BodyPart::COUNT],
        }
    }

    pub fn rotation(&self, part: BodyPart) -> f32 {
        self.rotations[part.index()]
    }

    pub fn is_highlighted(&self, part: BodyPart) -> bool {
        self.highlights[part.index()]
    }

    pub fn shield(&self, part: BodyPart) -> Shield {
        self.shields[part.index()]
    }

    /// Current rotations of every part as a full pose.
    pub fn snapshot(&self) -> Pose {
        BodyPart::ALL
            .iter()
            .fold(Pose::new(), |pose, &part| pose.with(part, self.rotation(part)))
    }
}

impl PoseTarget for Skeleton {
    fn apply_rotation(&mut self, part: BodyPart, angle: f32) {
        self.rotations[part.index()] = angle;
    }

    fn set_highlight(&mut self, part: BodyPart, on: bool) {
        self.highlights[part.index()] = on;
    }

    fn set_shield(&mut self, part: BodyPart, visible: bool, scale: f32) {
        self.shields[part.index()] = Shield { visible, scale };
    }
}
