//! Health notifications for health bars and match flow.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::matchlog::MatchLog;

/// A fighter's health changed after a hit landed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HealthChangedEvent {
    pub fighter: u8,
    pub health: i32,
    /// Remaining health as a fraction of max health, in `[0, 1]`.
    pub percentage: f32,
}

/// The match ended.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub winner: u8,
    pub loser: u8,
}

/// Record every health report in the [`MatchLog`].
pub fn record_health_changed(trigger: On<HealthChangedEvent>, mut match_log: ResMut<MatchLog>) {
    let report = *trigger.event();
    debug!(
        "Fighter {} health {} ({:.0}%)",
        report.fighter,
        report.health,
        report.percentage * 100.0
    );
    match_log.health_reports.push(report);
}

/// Record the match result in the [`MatchLog`].
pub fn record_game_over(trigger: On<GameOverEvent>, mut match_log: ResMut<MatchLog>) {
    let result = *trigger.event();
    info!("Fighter {} defeated fighter {}", result.winner, result.loser);
    match_log.game_over = Some(result);
}
