//! Standings → playoff team table.
//!
//! Every standings row has its home and road records split into counts and
//! its games played recomputed from them. Only teams in the bracket survive;
//! they receive seed, conference abbreviation, abbreviation and team id.

use super::bracket::{ConferenceAbbr, PlayoffBracket};
use super::record::WinLoss;
use crate::data_fetcher::models::standings::columns;
use crate::data_fetcher::models::{RecordSet, TeamDirectory, TeamRecord};
use crate::error::AppError;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// One row of `nba_playoffs.csv`. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team: String,
    pub team_short: String,
    pub conference: String,
    pub games_won: u32,
    pub games_lose: u32,
    /// Conference record string such as "34-18", not a numeric position.
    /// The column name is kept for compatibility with existing consumers.
    pub conference_position: String,
    pub games_played: u64,
    pub points_scored: f64,
    pub points_missed: f64,
    pub game_won_home: u32,
    pub game_lose_home: u32,
    pub game_won_away: u32,
    pub game_lose_away: u32,
    pub seed: u8,
    pub conf_abbr: ConferenceAbbr,
    pub team_id: Option<i64>,
}

/// Team record with both split records parsed, before the bracket filter.
#[derive(Debug, Clone)]
struct SplitRecord {
    record: TeamRecord,
    home: WinLoss,
    away: WinLoss,
}

impl SplitRecord {
    fn parse(record: TeamRecord) -> Result<Self, AppError> {
        let home = record
            .home_record
            .parse::<WinLoss>()
            .map_err(|e| AppError::record_parse(&record.name, columns::HOME, e))?;
        let away = record
            .away_record
            .parse::<WinLoss>()
            .map_err(|e| AppError::record_parse(&record.name, columns::ROAD, e))?;
        Ok(Self { record, home, away })
    }

    /// Games played from the split records; the provider's own total is ignored.
    fn games_played(&self) -> u64 {
        self.home.games() + self.away.games()
    }
}

/// Builds the playoff standings table.
///
/// # Arguments
/// * `standings` - Provider standings record set, one row per team
/// * `bracket` - Playoff field supplying seed and conference abbreviation
/// * `directory` - Abbreviation to team id lookup
///
/// # Returns
/// * `Ok(Vec<StandingsRow>)` - Bracket teams in provider order
///
/// # Errors
/// * `AppError::MissingColumn` / `AppError::InvalidCell` - Standings schema changed
/// * `AppError::RecordParse` - A HOME or ROAD record is not `W-L`. This aborts the
///   whole build, including teams that would be filtered out afterwards.
pub fn build_standings(
    standings: &RecordSet,
    bracket: &PlayoffBracket,
    directory: &TeamDirectory,
) -> Result<Vec<StandingsRow>, AppError> {
    let records = TeamRecord::from_record_set(standings)?;
    let split = records
        .into_iter()
        .map(SplitRecord::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::with_capacity(bracket.len());
    for team in split {
        let Some(meta) = bracket.get(&team.record.name) else {
            debug!("{} is not in the playoff field, dropping", team.record.name);
            continue;
        };

        let team_id = directory.team_id(&meta.short_code);
        if team_id.is_none() {
            warn!(
                "No team id for {} ({}); its games will be excluded",
                meta.name, meta.short_code
            );
        }

        let games_played = team.games_played();
        let SplitRecord { record, home, away } = team;
        rows.push(StandingsRow {
            team: record.name,
            team_short: meta.short_code.clone(),
            conference: record.conference,
            games_won: record.wins,
            games_lose: record.losses,
            conference_position: record.conference_record,
            games_played,
            points_scored: record.points_for_avg,
            points_missed: record.points_against_avg,
            game_won_home: home.wins,
            game_lose_home: home.losses,
            game_won_away: away.wins,
            game_lose_away: away.losses,
            seed: meta.seed,
            conf_abbr: meta.conference,
            team_id,
        });
    }

    report_missing_teams(bracket, &rows);
    info!(
        "Built standings for {} of {} bracket teams",
        rows.len(),
        bracket.len()
    );
    Ok(rows)
}

/// Bracket teams absent from the standings vanish from the output without an
/// error. Naming them in the log is the only trace they leave.
fn report_missing_teams(bracket: &PlayoffBracket, rows: &[StandingsRow]) {
    let present: HashSet<&str> = rows.iter().map(|r| r.team.as_str()).collect();
    let missing: Vec<&str> = bracket
        .teams()
        .map(|t| t.name.as_str())
        .filter(|name| !present.contains(name))
        .collect();

    if !missing.is_empty() {
        warn!(
            "Playoff bracket teams not found in standings: {}",
            missing.join(", ")
        );
    }
}

/// Team ids of the playoff field, used to filter the game log.
pub fn playoff_team_ids(rows: &[StandingsRow]) -> HashSet<i64> {
    rows.iter().filter_map(|r| r.team_id).collect()
}
