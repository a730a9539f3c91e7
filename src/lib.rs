pub mod config;
pub mod game_data;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod nhl_api;
pub mod team_schedule;
pub mod time_source;
pub mod timestamp;
