pub mod bracket;
pub mod games;
pub mod matchup;
pub mod record;
pub mod standings;

pub use bracket::{ConferenceAbbr, PlayoffBracket, PlayoffTeam};
pub use games::{MergedGameRow, build_games};
pub use standings::{StandingsRow, build_standings, playoff_team_ids};
