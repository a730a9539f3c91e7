use serde::{Deserialize, Serialize};

use crate::model::game_state::GameState;

/// Body of `club-schedule/{team}/{month|week}/now`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSchedule {
    // YYYY-MM, only present on month schedules
    pub previous_month: Option<String>,
    pub current_month: Option<String>,
    pub next_month: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub id: Option<i64>,
    // e.g. 20252026
    pub season: Option<i64>,
    pub game_date: Option<String>,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<String>,
    #[serde(default)]
    pub game_state: GameState,
    #[serde(default)]
    pub home_team: GameTeamData,
    #[serde(default)]
    pub away_team: GameTeamData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTeamData {
    pub id: Option<i64>,
    #[serde(default)]
    pub abbrev: String,
    // Absent until the puck drops
    pub score: Option<i64>,
}
