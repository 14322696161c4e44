//! High-level match state resource.
//!
//! Tracks which phase the match is in. Observers in
//! [`crate::systems`] consult it before acting: move requests, hits and pause
//! toggles are only honoured in the phases listed below.
//!
//! | Phase      | moves | hits | pause toggle |
//! |------------|-------|------|--------------|
//! | `Intro`    | no    | no   | no           |
//! | `Fighting` | yes   | yes  | pauses       |
//! | `Paused`   | no    | no   | resumes      |
//! | `GameOver` | no    | no   | no           |

use bevy_ecs::prelude::Resource;
use log::info;

/// Discrete phases a match can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchPhase {
    /// Controls locked while the fighters are introduced.
    #[default]
    Intro,
    Fighting,
    Paused,
    /// Terminal until the match is reset.
    GameOver { winner: u8 },
}

/// Authoritative match state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MatchState {
    phase: MatchPhase,
    intro_remaining: f32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl MatchState {
    /// Start a match with an intro freeze of `intro_freeze` seconds.
    /// A non-positive freeze starts the fight immediately.
    pub fn new(intro_freeze: f32) -> Self {
        let mut state = Self {
            phase: MatchPhase::Intro,
            intro_remaining: 0.0,
        };
        state.reset(intro_freeze);
        state
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_fighting(&self) -> bool {
        self.phase == MatchPhase::Fighting
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<u8> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn intro_remaining(&self) -> f32 {
        self.intro_remaining
    }

    /// Count the intro freeze down. Returns true on the tick the fight starts.
    pub fn tick_intro(&mut self, dt: f32) -> bool {
        if self.phase != MatchPhase::Intro {
            return false;
        }
        self.intro_remaining -= dt;
        if self.intro_remaining <= 0.0 {
            self.intro_remaining = 0.0;
            self.phase = MatchPhase::Fighting;
            info!("Fight!");
            return true;
        }
        false
    }

    /// Fighting -> Paused. Returns false in any other phase.
    pub fn pause(&mut self) -> bool {
        if self.phase != MatchPhase::Fighting {
            return false;
        }
        self.phase = MatchPhase::Paused;
        true
    }

    /// Paused -> Fighting. Returns false in any other phase.
    pub fn resume(&mut self) -> bool {
        if self.phase != MatchPhase::Paused {
            return false;
        }
        self.phase = MatchPhase::Fighting;
        true
    }

    /// Enter the terminal state. The first call wins.
    pub fn finish(&mut self, winner: u8) -> bool {
        if self.is_over() {
            return false;
        }
        info!("Game over, fighter {} wins", winner);
        self.phase = MatchPhase::GameOver { winner };
        true
    }

    /// Start over with a fresh intro freeze.
    pub fn reset(&mut self, intro_freeze: f32) {
        if intro_freeze > 0.0 {
            self.phase = MatchPhase::Intro;
            self.intro_remaining = intro_freeze;
        } else {
            self.phase = MatchPhase::Fighting;
            self.intro_remaining = 0.0;
        }
    }
}
