use std::env;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::ConfigError;
use crate::game_data::GameData;
use crate::model::box_score::GameClock;
use crate::model::game::GameRecord;
use crate::model::game_state::GameState;

const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Query {
    #[default]
    Active,
    Next,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Team abbreviation; falls back to the `TEAM` env var.
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default = "default_window")]
    pub schedule_window: String,
    #[serde(default)]
    pub query: Query,
    /// IANA zone used for the message text.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Also fetch the box score clock of the returned game.
    #[serde(default)]
    pub include_clock: bool,
}

fn default_window() -> String {
    "month".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub team_score: Option<i64>,
    pub opponent_score: Option<i64>,
}

/// Same keys as the `/playing` endpoint the Pico client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub team_playing: bool,
    pub game_state: GameState,
    pub score: Score,
    pub start_time_utc: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<GameClock>,
    pub message: String,
}

/// Resolve the timezone named in the request, defaulting to Pacific time.
pub fn resolve_timezone(name: Option<&str>) -> Result<Tz, ConfigError> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => n.parse::<Tz>().map_err(|_| ConfigError::UnknownTimezone(n.to_string())),
        None => Ok(DEFAULT_TIMEZONE),
    }
}

/// Build the Lambda response. `game` is None when nothing qualified.
///
/// `team_playing` only answers the active query; a next game already in PRE is
/// not reported as playing.
pub fn build_response(team: &str, query: Query, game: Option<&GameRecord>, tz: Tz) -> Response {
    let empty = GameRecord::empty();
    let record = game.unwrap_or(&empty);
    Response {
        team_playing: query == Query::Active && game.is_some_and(GameRecord::is_active),
        game_state: record.game_state.clone(),
        score: Score { team_score: record.team_score, opponent_score: record.opponent_score },
        start_time_utc: record.start_time_epoch_seconds,
        clock: None,
        message: format_message(team, query, game, tz),
    }
}

fn format_message(team: &str, query: Query, game: Option<&GameRecord>, tz: Tz) -> String {
    let Some(game) = game else {
        return match query {
            Query::Active => format!("{} is not playing right now.", team),
            Query::Next => format!("No upcoming {} games in the schedule window.", team),
        };
    };

    let start = game
        .start_time_epoch_seconds
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| {
            let local = dt.with_timezone(&tz);
            format!("{} {}", local.format("%a %b %e, %Y"), local.format("%-I:%M %p %Z"))
        })
        .unwrap_or_else(|| "an unknown time".to_string());

    match (game.team_score, game.opponent_score) {
        (Some(ours), Some(theirs)) => {
            format!("{} {} ({}): {} - {}", team, game.game_state, start, ours, theirs)
        }
        _ if game.is_active() => format!("{} {} ({})", team, game.game_state, start),
        _ => format!("Next {} game: {}", team, start),
    }
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;

    let team = match payload.team.or_else(|| env::var("TEAM").ok()) {
        Some(team) => team,
        None => return Err(ConfigError::EmptyTeam.into()),
    };
    let tz = resolve_timezone(payload.timezone.as_deref())?;
    let query = payload.query;
    let window = payload.schedule_window;
    let include_clock = payload.include_clock;

    // The core is blocking; the task must own its inputs.
    let outcome = tokio::task::spawn_blocking(move || -> Result<Response, ConfigError> {
        let game_data = GameData::from_settings(&team, &window)?;
        let team = game_data.schedule().team().to_string();
        let schedule = game_data.schedule();
        let game = match query {
            Query::Active => schedule.fetch_active_game(),
            Query::Next => schedule.fetch_next_scheduled_game(),
        };
        let mut response = build_response(&team, query, game.as_ref(), tz);
        if include_clock && let Some(game) = &game {
            response.clock = game_data.get_game_clock(game);
        }
        Ok(response)
    })
    .await?;

    match outcome {
        Ok(response) => {
            info!(message = %response.message, team_playing = response.team_playing, "Prepared response");
            Ok(response)
        }
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            Err(e.into())
        }
    }
}
