pub mod api;
pub mod models;

pub use api::{fetch_game_log, fetch_standings, fetch_team_directory};
pub use models::{GameRow, RecordSet, TeamDirectory, TeamRecord};
