//! Per-fighter move playback.
//!
//! A [`MovePlayer`] steps through the dense pose sequence of the move that was
//! triggered last, one pose per simulation tick, and pushes each pose onto a
//! [`PoseTarget`]. It is the single source of truth for "is this fighter
//! playing a move, and which one"; combat and input code query it instead of
//! keeping their own flags.
//!
//! # States
//!
//! ```text
//!            trigger                       last pose, no loop
//!   Idle ───────────────► Playing ───────────────────────────► Idle
//!    ▲                     │  ▲
//!    │ resume (no move)    │  │ resume
//!    │                pause│  │
//!    └──────────────── Paused(saved)
//! ```
//!
//! Ticks that arrive while paused are dropped, not queued.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::debug;

use super::skeleton::PoseTarget;
use crate::moves::blender::{BlendParams, expand_move};
use crate::moves::fightmove::Move;
use crate::moves::pose::Pose;

/// Dense sequence being played and the next index to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    sequence: Vec<Pose>,
    index: usize,
}

impl Playback {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(Playback),
    /// Frozen. Holds the interrupted playback, if there was one.
    Paused(Option<Playback>),
}

/// Result of a single [`MovePlayer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to play.
    Idle,
    /// Tick dropped.
    Paused,
    /// A pose was applied and more remain.
    Advanced,
    /// The last pose was applied and the sequence restarted.
    Looped,
    /// The last pose was applied and the player went idle.
    Finished,
}

#[derive(Component, Debug, Clone, Default)]
pub struct MovePlayer {
    state: PlaybackState,
    active_move: Option<Arc<Move>>,
    auto_loop: bool,
}

impl MovePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `m` from its first dense pose, discarding any playback in flight.
    ///
    /// The move's active part is marked straight away: its shield for block
    /// moves (at `shield_scale`), its damage highlight otherwise. A paused
    /// player stays paused with the new playback saved.
    pub fn trigger(
        &mut self,
        m: Arc<Move>,
        params: &BlendParams,
        shield_scale: f32,
        target: &mut impl PoseTarget,
    ) {
        self.hide_marker(target);
        let playback = Playback {
            sequence: expand_move(&m, params),
            index: 0,
        };
        debug!(
            "MovePlayer: trigger '{}' ({} poses)",
            m.name(),
            playback.len()
        );
        if m.is_block_move() {
            target.set_shield(m.active_part(), true, shield_scale);
        } else {
            target.set_highlight(m.active_part(), true);
        }
        self.active_move = Some(m);
        self.state = match self.state {
            PlaybackState::Paused(_) => PlaybackState::Paused(Some(playback)),
            _ => PlaybackState::Playing(playback),
        };
    }

    /// Advance one tick.
    pub fn tick(&mut self, target: &mut impl PoseTarget) -> TickOutcome {
        let playback = match &mut self.state {
            PlaybackState::Idle => return TickOutcome::Idle,
            PlaybackState::Paused(_) => return TickOutcome::Paused,
            PlaybackState::Playing(playback) => playback,
        };

        if let Some(pose) = playback.sequence.get(playback.index) {
            target.apply_pose(pose);
            playback.index += 1;
        }
        if playback.index < playback.sequence.len() {
            return TickOutcome::Advanced;
        }
        if self.auto_loop && !playback.sequence.is_empty() {
            playback.index = 0;
            return TickOutcome::Looped;
        }

        self.state = PlaybackState::Idle;
        self.hide_marker(target);
        if let Some(m) = &self.active_move {
            debug!("MovePlayer: '{}' finished", m.name());
        }
        TickOutcome::Finished
    }

    /// Freeze tick advancement. Idempotent.
    pub fn pause(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            PlaybackState::Idle => PlaybackState::Paused(None),
            PlaybackState::Playing(playback) => PlaybackState::Paused(Some(playback)),
            paused @ PlaybackState::Paused(_) => paused,
        };
    }

    /// Continue from where [`pause`](Self::pause) left off. Idempotent.
    pub fn resume(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            PlaybackState::Paused(Some(playback)) => PlaybackState::Playing(playback),
            PlaybackState::Paused(None) => PlaybackState::Idle,
            other => other,
        };
    }

    /// Snap back to the first key pose of the last move and stop.
    ///
    /// Auto-loop is switched off. A paused player stays paused, with nothing
    /// left to resume.
    pub fn reset(&mut self, target: &mut impl PoseTarget) {
        if let Some(first) = self.active_move.as_ref().and_then(|m| m.first_pose()) {
            target.apply_pose(first);
        }
        self.hide_marker(target);
        self.auto_loop = false;
        self.state = match self.state {
            PlaybackState::Paused(_) => PlaybackState::Paused(None),
            _ => PlaybackState::Idle,
        };
    }

    /// Forget the last move entirely. Used between matches.
    pub fn clear(&mut self, target: &mut impl PoseTarget) {
        self.hide_marker(target);
        self.active_move = None;
        self.auto_loop = false;
        self.state = PlaybackState::Idle;
    }

    pub fn set_auto_loop(&mut self, auto_loop: bool) {
        self.auto_loop = auto_loop;
    }

    pub fn auto_loop(&self) -> bool {
        self.auto_loop
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, PlaybackState::Paused(_))
    }

    /// The move whose playback is running or suspended.
    ///
    /// `None` once the move has finished, even though the player still
    /// remembers it for [`reset`](Self::reset).
    pub fn current_move(&self) -> Option<&Arc<Move>> {
        match self.state {
            PlaybackState::Playing(_) | PlaybackState::Paused(Some(_)) => self.active_move.as_ref(),
            _ => None,
        }
    }

    fn hide_marker(&self, target: &mut impl PoseTarget) {
        if let Some(m) = &self.active_move {
            if m.is_block_move() {
                target.set_shield(m.active_part(), false, 1.0);
            } else {
                target.set_highlight(m.active_part(), false);
            }
        }
    }
}
