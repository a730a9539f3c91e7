use tracing::{info, instrument};

use crate::config::{validate_team, ConfigError, ScheduleWindow};
use crate::mapper;
use crate::model::box_score::GameBoxScore;
use crate::model::game::GameRecord;
use crate::nhl_api::{NhlApi, Transport};
use crate::time_source::TimeSource;

/// Schedule queries for one team over one window.
///
/// Every query performs exactly one fetch; nothing is cached between calls.
#[derive(Debug)]
pub struct TeamSchedule<T: Transport, C: TimeSource> {
    team: String,
    window: ScheduleWindow,
    api: NhlApi<T>,
    clock: C,
}

impl<T: Transport, C: TimeSource> TeamSchedule<T, C> {
    pub fn new(team: &str, window: ScheduleWindow, transport: T, clock: C) -> Result<Self, ConfigError> {
        let team = validate_team(team)?;
        Ok(Self { team, window, api: NhlApi::new(transport), clock })
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn window(&self) -> ScheduleWindow {
        self.window
    }

    /// Box score of one game, such as the active one. A separate request.
    pub fn fetch_box_score(&self, game_id: i64) -> Option<GameBoxScore> {
        self.api.fetch_box_score(game_id)
    }

    fn fetch_records(&self) -> Option<Vec<GameRecord>> {
        let schedule = self.api.fetch_schedule(&self.team, self.window)?;
        Some(mapper::map_all(&schedule, &self.team))
    }

    /// First game in source order that is pregame, live or critical.
    /// Assumes a team has at most one such game at a time.
    #[instrument(level = "info", skip(self), fields(team = %self.team, window = %self.window))]
    pub fn fetch_active_game(&self) -> Option<GameRecord> {
        let active = self.fetch_records()?.into_iter().find(GameRecord::is_active);
        info!(found = active.is_some(), "Active game lookup");
        active
    }

    /// Earliest game starting strictly after now. Games without a known start
    /// time sort as if already past and are never returned.
    #[instrument(level = "info", skip(self), fields(team = %self.team, window = %self.window))]
    pub fn fetch_next_scheduled_game(&self) -> Option<GameRecord> {
        let mut games = self.fetch_records()?;
        // sort_by_key is stable, so ties keep source order
        games.sort_by_key(GameRecord::sort_key);
        let now = self.clock.now();
        let next = games.into_iter().find(|g| g.sort_key() > now);
        info!(now, found = next.is_some(), "Next game lookup");
        next
    }
}
