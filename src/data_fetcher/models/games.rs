use super::result_set::RecordSet;
use crate::error::AppError;

/// Game log columns the pipeline reads.
pub mod columns {
    pub const TEAM_NAME: &str = "TEAM_NAME";
    pub const TEAM_ABBREVIATION: &str = "TEAM_ABBREVIATION";
    pub const TEAM_ID: &str = "TEAM_ID";
    pub const GAME_ID: &str = "GAME_ID";
    pub const PTS: &str = "PTS";
    pub const FG_PCT: &str = "FG_PCT";
    pub const FT_PCT: &str = "FT_PCT";
    pub const FG3_PCT: &str = "FG3_PCT";
    pub const MATCHUP: &str = "MATCHUP";
}

/// One team's line for one game. The matchup string stays attached to the
/// row it came from so home/away classification can never drift out of step.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub team: String,
    pub short_code: String,
    pub team_id: i64,
    pub matchup_id: String,
    pub points: u32,
    pub fg_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub matchup: String,
}

impl GameRow {
    pub fn from_record_set(set: &RecordSet) -> Result<Vec<GameRow>, AppError> {
        let team = set.column(columns::TEAM_NAME)?;
        let short_code = set.column(columns::TEAM_ABBREVIATION)?;
        let team_id = set.column(columns::TEAM_ID)?;
        let matchup_id = set.column(columns::GAME_ID)?;
        let points = set.column(columns::PTS)?;
        let fg_pct = set.column(columns::FG_PCT)?;
        let ft_pct = set.column(columns::FT_PCT)?;
        let fg3_pct = set.column(columns::FG3_PCT)?;
        let matchup = set.column(columns::MATCHUP)?;

        set.rows()
            .map(|row| {
                Ok(GameRow {
                    team: row.string(team)?,
                    short_code: row.string(short_code)?,
                    team_id: row.integer(team_id)?,
                    matchup_id: row.identifier(matchup_id)?,
                    points: row.count(points)?,
                    fg_pct: row.optional_decimal(fg_pct)?,
                    ft_pct: row.optional_decimal(ft_pct)?,
                    fg3_pct: row.optional_decimal(fg3_pct)?,
                    matchup: row.string(matchup)?,
                })
            })
            .collect()
    }
}
