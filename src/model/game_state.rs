use serde::{Deserialize, Serialize};

/// State of a game as reported by the NHL schedule API.
///
/// Codes the API may add later land in `Other` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameState {
    #[default]
    Future,
    Pregame,
    Live,
    Critical,
    Final,
    Off,
    Postponed,
    Other(String),
}

impl GameState {
    /// Wire code used by the API (`FUT`, `LIVE`, ...).
    pub fn code(&self) -> &str {
        match self {
            GameState::Future => "FUT",
            GameState::Pregame => "PRE",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Off => "OFF",
            GameState::Postponed => "PPD",
            GameState::Other(code) => code,
        }
    }

    /// Play is underway or about to begin.
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Pregame | GameState::Live | GameState::Critical)
    }
}

impl From<&str> for GameState {
    fn from(code: &str) -> Self {
        match code {
            "FUT" => GameState::Future,
            "PRE" => GameState::Pregame,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "FINAL" => GameState::Final,
            "OFF" => GameState::Off,
            "PPD" => GameState::Postponed,
            other => GameState::Other(other.to_string()),
        }
    }
}

impl From<String> for GameState {
    fn from(code: String) -> Self {
        match GameState::from(code.as_str()) {
            GameState::Other(_) => GameState::Other(code),
            known => known,
        }
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
