use crate::config::{ConfigError, ScheduleWindow};
use crate::model::box_score::GameClock;
use crate::model::game::GameRecord;
use crate::nhl_api::{Transport, UreqTransport};
use crate::team_schedule::TeamSchedule;
use crate::time_source::{SystemClock, TimeSource};

/// Entry point for callers: always answers with a record, using
/// [`GameRecord::empty`] when no game qualifies.
#[derive(Debug)]
pub struct GameData<T: Transport, C: TimeSource> {
    schedule: TeamSchedule<T, C>,
}

impl GameData<UreqTransport, SystemClock> {
    /// Production wiring from raw settings. Fails on a blank team or an
    /// unknown window name.
    pub fn from_settings(team: &str, window: &str) -> Result<Self, ConfigError> {
        let window: ScheduleWindow = window.parse()?;
        let schedule = TeamSchedule::new(team, window, UreqTransport, SystemClock)?;
        Ok(Self::new(schedule))
    }
}

impl<T: Transport, C: TimeSource> GameData<T, C> {
    pub fn new(schedule: TeamSchedule<T, C>) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TeamSchedule<T, C> {
        &self.schedule
    }

    pub fn get_active_game_data(&self) -> GameRecord {
        self.schedule.fetch_active_game().unwrap_or_default()
    }

    pub fn get_next_game_data(&self) -> GameRecord {
        self.schedule.fetch_next_scheduled_game().unwrap_or_default()
    }

    /// Clock of the game behind `game`, when it has an id and the API answers.
    pub fn get_game_clock(&self, game: &GameRecord) -> Option<GameClock> {
        let game_id = game.game_id?;
        self.schedule.fetch_box_score(game_id)?.clock
    }
}
