pub mod box_score;
pub mod game;
pub mod game_state;
pub mod schedule;
