use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Span of the schedule requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleWindow {
    Month,
    Week,
}

impl ScheduleWindow {
    /// Path segment used in the schedule URL.
    pub fn as_path(&self) -> &'static str {
        match self {
            ScheduleWindow::Month => "month",
            ScheduleWindow::Week => "week",
        }
    }
}

impl fmt::Display for ScheduleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ScheduleWindow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(ScheduleWindow::Month),
            "week" => Ok(ScheduleWindow::Week),
            _ => Err(ConfigError::UnknownScheduleWindow(s.to_string())),
        }
    }
}

/// Misconfiguration. These are never absorbed into a "no data" answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyTeam,
    UnknownScheduleWindow(String),
    UnknownTimezone(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTeam => write!(f, "Team abbreviation must not be empty"),
            ConfigError::UnknownScheduleWindow(w) => {
                write!(f, "Unknown schedule window '{w}', expected 'month' or 'week'")
            }
            ConfigError::UnknownTimezone(tz) => write!(f, "Unknown timezone '{tz}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a team abbreviation, returning it trimmed.
pub fn validate_team(team: &str) -> Result<String, ConfigError> {
    let team = team.trim();
    if team.is_empty() {
        return Err(ConfigError::EmptyTeam);
    }
    Ok(team.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_windows_case_insensitively() {
        assert_eq!("month".parse::<ScheduleWindow>(), Ok(ScheduleWindow::Month));
        assert_eq!("WEEK".parse::<ScheduleWindow>(), Ok(ScheduleWindow::Week));
    }

    #[test]
    fn unknown_window_is_an_error() {
        assert_eq!(
            "season".parse::<ScheduleWindow>(),
            Err(ConfigError::UnknownScheduleWindow("season".to_string()))
        );
    }

    #[test]
    fn blank_team_is_rejected() {
        assert_eq!(validate_team("  "), Err(ConfigError::EmptyTeam));
        assert_eq!(validate_team(" SEA ").unwrap(), "SEA");
    }
}
