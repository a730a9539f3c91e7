use serde::Serialize;

use crate::model::game_state::GameState;
use crate::timestamp::SENTINEL;

/// A scheduled game seen from one team's side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    // Used to look up the box score
    pub game_id: Option<i64>,
    pub game_state: GameState,
    pub start_time_epoch_seconds: Option<i64>,
    pub team_score: Option<i64>,
    pub opponent_score: Option<i64>,
}

impl GameRecord {
    /// Record standing in for "no qualifying game".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.game_state.is_active()
    }

    /// Start time, or the sentinel so unknown starts order before every real one.
    pub fn sort_key(&self) -> i64 {
        self.start_time_epoch_seconds.unwrap_or(SENTINEL)
    }
}
