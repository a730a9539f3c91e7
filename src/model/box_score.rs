use serde::{Deserialize, Serialize};

use crate::model::game_state::GameState;

/// Body of `gamecenter/{id}/boxscore`, trimmed to the game clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoxScore {
    pub id: Option<i64>,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    #[serde(default)]
    pub game_state: GameState,
    pub clock: Option<GameClock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    #[serde(default)]
    pub running: bool,
    pub seconds_remaining: Option<i64>,
    #[serde(default)]
    pub in_intermission: bool,
}
