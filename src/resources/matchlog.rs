use bevy_ecs::prelude::Resource;

use crate::events::health::{GameOverEvent, HealthChangedEvent};

/// Health reports and the result of the current match, in arrival order.
///
/// Filled by the observers in [`crate::events::health`]; a headless host
/// reads it instead of drawing health bars.
#[derive(Resource, Debug, Clone, Default)]
pub struct MatchLog {
    pub health_reports: Vec<HealthChangedEvent>,
    pub game_over: Option<GameOverEvent>,
}

impl MatchLog {
    /// Most recent health percentage reported for `fighter`.
    pub fn last_percentage(&self, fighter: u8) -> Option<f32> {
        self.health_reports
            .iter()
            .rev()
            .find(|r| r.fighter == fighter)
            .map(|r| r.percentage)
    }

    pub fn clear(&mut self) {
        self.health_reports.clear();
        self.game_over = None;
    }
}
