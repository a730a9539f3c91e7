use tracing::debug;

use crate::model::game::GameRecord;
use crate::model::game_state::GameState;
use crate::model::schedule::{ClubSchedule, ScheduledGame};
use crate::timestamp;

/// Normalize one scheduled game from the point of view of `team`.
///
/// The home side is ours when its abbreviation matches, otherwise the away side is.
/// Scores stay `None` when the API left them out.
pub fn map_one(game: &ScheduledGame, team: &str) -> GameRecord {
    let team_is_home = game.home_team.abbrev == team;
    let (ours, theirs) = if team_is_home {
        (&game.home_team, &game.away_team)
    } else {
        (&game.away_team, &game.home_team)
    };

    if let GameState::Other(code) = &game.game_state {
        debug!(game_id = ?game.id, state = %code, "Unrecognized game state passed through");
    }

    GameRecord {
        game_id: game.id,
        game_state: game.game_state.clone(),
        start_time_epoch_seconds: timestamp::parse_opt(game.start_time_utc.as_deref()),
        team_score: ours.score,
        opponent_score: theirs.score,
    }
}

/// Map every game in `schedule`, keeping source order.
pub fn map_all(schedule: &ClubSchedule, team: &str) -> Vec<GameRecord> {
    schedule.games.iter().map(|game| map_one(game, team)).collect()
}
