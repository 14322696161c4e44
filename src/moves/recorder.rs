//! Move editor recording session.
//!
//! A [`Recorder`] owns the move being authored. Poses are captured one at a
//! time; when enough have been captured the draft is completed automatically
//! (either mirrored back to the start or closed with the first pose) and can
//! be previewed and saved. Saving inserts a deep copy into the
//! [`MoveLibrary`], so the draft the editor keeps working on is never shared.

use log::debug;

use super::bodypart::BodyPart;
use super::fightmove::Move;
use super::pose::Pose;
use crate::components::skeleton::Skeleton;
use crate::error::{FightError, Result};
use crate::resources::movelibrary::MoveLibrary;

#[derive(Debug, Clone)]
pub struct Recorder {
    draft: Move,
    initial_pose: Pose,
    reverse_on_way_back: bool,
    done: bool,
}

impl Recorder {
    /// Start a session. `initial_pose` becomes key pose 0 of the draft.
    pub fn new(draft: Move, initial_pose: Pose) -> Self {
        let mut recorder = Self {
            draft,
            initial_pose: initial_pose.clone(),
            reverse_on_way_back: true,
            done: false,
        };
        recorder.push(initial_pose);
        recorder
    }

    /// Close the move with its first pose instead of mirroring the recorded half.
    pub fn with_reverse_on_way_back(mut self, reverse: bool) -> Self {
        self.reverse_on_way_back = reverse;
        self
    }

    /// Capture one pose. Ignored once the draft is complete.
    pub fn record_pose(&mut self, pose: Pose) {
        if self.done {
            return;
        }
        if self.push(pose) {
            self.close_if_complete();
        }
    }

    /// Capture the skeleton's current stance as the next key pose.
    pub fn record_skeleton(&mut self, skeleton: &Skeleton) {
        self.record_pose(skeleton.snapshot());
    }

    /// Append without completing the draft. The initial pose goes through
    /// here so the closing mode chosen after construction still applies.
    fn push(&mut self, pose: Pose) -> bool {
        match self.draft.add_key_pose(pose) {
            Ok(()) => true,
            Err(e) => {
                debug!("record_pose ignored: {}", e);
                false
            }
        }
    }

    fn close_if_complete(&mut self) {
        let count = self.draft.count();
        let capacity = self.draft.capacity();
        if self.reverse_on_way_back && count >= capacity / 2 {
            self.mirror_recorded_half();
            self.done = true;
        } else if !self.reverse_on_way_back && count + 1 >= capacity {
            if let Some(first) = self.draft.first_pose().cloned() {
                let _ = self.draft.add_key_pose(first);
            }
            self.done = true;
        }
    }

    /// Append the first half of the key poses in reverse order.
    fn mirror_recorded_half(&mut self) {
        let half = self.draft.capacity() / 2;
        let recorded: Vec<Pose> = self.draft.key_poses()[..half.min(self.draft.count())].to_vec();
        for pose in recorded.into_iter().rev() {
            if self.draft.add_key_pose(pose).is_err() {
                break;
            }
        }
    }

    /// Undo the last captured pose. The initial pose cannot be removed.
    pub fn undo(&mut self) {
        if self.done || self.draft.count() <= 1 {
            return;
        }
        self.draft.remove_key_pose();
    }

    /// Fraction of recordable poses captured so far, in `[0, 1]`.
    ///
    /// The first and last poses are not recorded by the user and each
    /// recorded pose is used twice when mirrored.
    pub fn progress(&self) -> f32 {
        let recordable = self.draft.capacity().saturating_sub(2);
        if recordable == 0 {
            return 1.0;
        }
        let recorded = (self.draft.count().saturating_sub(1) * 2).min(recordable);
        recorded as f32 / recordable as f32
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn draft(&self) -> &Move {
        &self.draft
    }

    pub fn initial_pose(&self) -> &Pose {
        &self.initial_pose
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.draft.set_speed(speed);
    }

    pub fn set_strength(&mut self, strength: u8) {
        self.draft.set_strength(strength);
    }

    pub fn set_block_move(&mut self, block: bool) {
        self.draft.set_block_move(block);
    }

    pub fn set_active_part(&mut self, part: BodyPart) {
        self.draft.set_active_part(part);
    }

    /// Name the draft and store a copy of it in `library`.
    pub fn save(&mut self, library: &mut MoveLibrary, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(FightError::EmptyMoveName);
        }
        if library.contains_name(name) {
            return Err(FightError::DuplicateMoveName(name.to_string()));
        }
        self.draft.set_name(name);
        library.add(&self.draft)
    }

    /// Discard the draft and start over from the initial pose.
    pub fn reset(&mut self, draft: Move) {
        let initial = self.initial_pose.clone();
        self.draft = draft;
        self.done = false;
        self.push(initial);
    }
}
