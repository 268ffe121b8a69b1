use super::result_set::RecordSet;
use crate::error::AppError;

/// Standings columns the pipeline reads. Every one of them is required.
pub mod columns {
    pub const TEAM_NAME: &str = "TeamName";
    pub const TEAM_CITY: &str = "TeamCity";
    pub const CONFERENCE: &str = "Conference";
    pub const WINS: &str = "WINS";
    pub const LOSSES: &str = "LOSSES";
    pub const CONFERENCE_RECORD: &str = "ConferenceRecord";
    pub const RECORD: &str = "Record";
    pub const POINTS_PG: &str = "PointsPG";
    pub const OPP_POINTS_PG: &str = "OppPointsPG";
    pub const HOME: &str = "HOME";
    pub const ROAD: &str = "ROAD";
}

/// One team's line in the provider standings. Record strings stay raw here;
/// splitting them is the standings transformer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub name: String,
    /// City label from the provider, replaced by the bracket abbreviation later
    pub short_code: String,
    pub conference: String,
    pub wins: u32,
    pub losses: u32,
    pub conference_record: String,
    pub overall_record: String,
    pub points_for_avg: f64,
    pub points_against_avg: f64,
    pub home_record: String,
    pub away_record: String,
}

impl TeamRecord {
    /// Selects the standings fields from the provider table. All columns are
    /// resolved before the first row is read, so schema drift fails fast.
    pub fn from_record_set(set: &RecordSet) -> Result<Vec<TeamRecord>, AppError> {
        let name = set.column(columns::TEAM_NAME)?;
        let city = set.column(columns::TEAM_CITY)?;
        let conference = set.column(columns::CONFERENCE)?;
        let wins = set.column(columns::WINS)?;
        let losses = set.column(columns::LOSSES)?;
        let conference_record = set.column(columns::CONFERENCE_RECORD)?;
        let record = set.column(columns::RECORD)?;
        let points_pg = set.column(columns::POINTS_PG)?;
        let opp_points_pg = set.column(columns::OPP_POINTS_PG)?;
        let home = set.column(columns::HOME)?;
        let road = set.column(columns::ROAD)?;

        set.rows()
            .map(|row| {
                Ok(TeamRecord {
                    name: row.string(name)?,
                    short_code: row.string(city)?,
                    conference: row.string(conference)?,
                    wins: row.count(wins)?,
                    losses: row.count(losses)?,
                    conference_record: row.string(conference_record)?,
                    overall_record: row.string(record)?,
                    points_for_avg: row.decimal(points_pg)?,
                    points_against_avg: row.decimal(opp_points_pg)?,
                    home_record: row.string(home)?,
                    away_record: row.string(road)?,
                })
            })
            .collect()
    }
}
