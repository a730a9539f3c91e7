#![allow(dead_code)]

use std::cell::RefCell;

use nhl_team_schedule::nhl_api::{HttpResponse, Transport};

pub fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_schedule.json").expect("failed to read sample_schedule.json")
}

/// Transport that answers every GET with the same canned result and records the URLs.
#[derive(Debug)]
pub struct FakeTransport {
    result: Result<HttpResponse, String>,
    pub urls: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self { result: Ok(HttpResponse { status, body: body.into() }), urls: RefCell::new(Vec::new()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { result: Err(message.to_string()), urls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.urls.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, String> {
        self.urls.borrow_mut().push(url.to_string());
        self.result.clone()
    }
}

/// Build a schedule body from `(gameState, startTimeUTC)` pairs with SEA at home.
pub fn schedule_body(games: &[(&str, Option<&str>)]) -> String {
    let games: Vec<serde_json::Value> = games
        .iter()
        .map(|(state, start)| {
            let mut game = serde_json::json!({
                "gameState": state,
                "homeTeam": { "abbrev": "SEA" },
                "awayTeam": { "abbrev": "VAN" }
            });
            if let Some(start) = start {
                game["startTimeUTC"] = serde_json::json!(start);
            }
            game
        })
        .collect();
    serde_json::json!({ "games": games }).to_string()
}
