use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument, warn};

use crate::config::ScheduleWindow;
use crate::model::box_score::GameBoxScore;
use crate::model::schedule::ClubSchedule;

pub const NHL_API_BASE: &str = "https://api-web.nhle.com/v1";

/// Status code and raw body of a GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Blocking HTTP GET. Errors are network failures; HTTP error statuses are
/// reported through `HttpResponse::status`.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, String> {
        (**self).get(url)
    }
}

/// `ureq` with its default agent. No timeout or retry is configured here.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, String> {
        match ureq::get(url).call() {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                let body = body_reader
                    .read_to_string()
                    .map_err(|e| format!("Failed to read response body: {}", e))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::StatusCode(status)) => Ok(HttpResponse { status, body: String::new() }),
            Err(e) => Err(format!("Request failed: {}", e)),
        }
    }
}

/// Build the schedule URL for `team` over `window`, always anchored at "now".
pub fn club_schedule_url(team: &str, window: ScheduleWindow) -> String {
    format!("{}/club-schedule/{}/{}/now", NHL_API_BASE, team, window.as_path())
}

pub fn box_score_url(game_id: i64) -> String {
    format!("{}/gamecenter/{}/boxscore", NHL_API_BASE, game_id)
}

/// Thin client over the NHL web API.
#[derive(Debug, Clone, Default)]
pub struct NhlApi<T: Transport> {
    transport: T,
}

impl<T: Transport> NhlApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the current schedule for `team`. One request, no retries.
    /// Returns None when the API is unreachable, answers non-200, or sends a body
    /// that is not a schedule.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_schedule(&self, team: &str, window: ScheduleWindow) -> Option<ClubSchedule> {
        let url = club_schedule_url(team, window);
        let schedule = self.fetch_json::<ClubSchedule>(&url, "club schedule")?;
        info!(games = schedule.games.len(), "Fetched club schedule");
        Some(schedule)
    }

    /// Fetch the box score of one game. Same failure rules as [`Self::fetch_schedule`].
    #[instrument(level = "info", skip(self))]
    pub fn fetch_box_score(&self, game_id: i64) -> Option<GameBoxScore> {
        let url = box_score_url(game_id);
        let box_score = self.fetch_json::<GameBoxScore>(&url, "box score")?;
        info!(game_state = %box_score.game_state, "Fetched box score");
        Some(box_score)
    }

    fn fetch_json<R: DeserializeOwned>(&self, url: &str, what: &str) -> Option<R> {
        let response = {
            let _span = info_span!("nhl_api_fetch", url = %url).entered();
            self.transport.get(url)
        };
        match response {
            Ok(response) if response.status == 200 => match response.json::<R>() {
                Ok(body) => Some(body),
                Err(e) => {
                    error!(error = %e, url = %url, "Failed to deserialize {}", what);
                    None
                }
            },
            Ok(response) => {
                warn!(status = response.status, url = %url, "Non-200 response for {}", what);
                None
            }
            Err(e) => {
                error!(error = %e, url = %url, "{} request failed", what);
                None
            }
        }
    }
}
