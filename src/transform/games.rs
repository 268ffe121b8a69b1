//! Game log → one row per playoff-vs-playoff game.
//!
//! The game log lists every game twice, once per team. Rows are split into
//! home and away perspectives by their matchup string, narrowed to playoff
//! teams, and joined back together on the game id. A game survives only when
//! both of its rows survived the filter.

use super::matchup::{Matchup, Venue};
use crate::data_fetcher::models::{GameRow, RecordSet};
use crate::error::AppError;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// One team's side of a game after the venue split. The same shape serves
/// both perspectives; the prefix is applied when rows are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SideRow {
    pub team: String,
    pub team_short: String,
    pub team_id: i64,
    pub matchup_id: String,
    pub points: u32,
    pub fg_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
}

impl From<GameRow> for SideRow {
    fn from(row: GameRow) -> Self {
        SideRow {
            team: row.team,
            team_short: row.short_code,
            team_id: row.team_id,
            matchup_id: row.matchup_id,
            points: row.points,
            fg_pct: row.fg_pct,
            ft_pct: row.ft_pct,
            fg3_pct: row.fg3_pct,
        }
    }
}

/// One row of `nba_games.csv`. Team ids are not part of the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedGameRow {
    pub home_team: String,
    pub home_team_short: String,
    pub matchup_id: String,
    pub home_points: u32,
    pub home_fg_pct: Option<f64>,
    pub home_ft_pct: Option<f64>,
    pub home_fg3_pct: Option<f64>,
    pub away_team: String,
    pub away_team_short: String,
    pub away_points: u32,
    pub away_fg_pct: Option<f64>,
    pub away_ft_pct: Option<f64>,
    pub away_fg3_pct: Option<f64>,
    pub winning_team: String,
}

impl MergedGameRow {
    fn merge(home: &SideRow, away: &SideRow) -> Self {
        MergedGameRow {
            home_team: home.team.clone(),
            home_team_short: home.team_short.clone(),
            matchup_id: home.matchup_id.clone(),
            home_points: home.points,
            home_fg_pct: home.fg_pct,
            home_ft_pct: home.ft_pct,
            home_fg3_pct: home.fg3_pct,
            away_team: away.team.clone(),
            away_team_short: away.team_short.clone(),
            away_points: away.points,
            away_fg_pct: away.fg_pct,
            away_ft_pct: away.ft_pct,
            away_fg3_pct: away.fg3_pct,
            winning_team: winning_team(home, away).to_string(),
        }
    }
}

/// Home team wins only with strictly more points. A tie, which a finished NBA
/// game cannot produce, goes to the away team.
pub fn winning_team<'a>(home: &'a SideRow, away: &'a SideRow) -> &'a str {
    if home.points > away.points {
        &home.team_short
    } else {
        &away.team_short
    }
}

/// Rows of the game log split by venue, in game log order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VenueSplit {
    pub home: Vec<SideRow>,
    pub away: Vec<SideRow>,
}

impl VenueSplit {
    /// Drops rows of teams outside `team_ids` from both sides.
    pub fn retain_teams(&mut self, team_ids: &HashSet<i64>) {
        self.home.retain(|row| team_ids.contains(&row.team_id));
        self.away.retain(|row| team_ids.contains(&row.team_id));
    }

    pub fn len(&self) -> usize {
        self.home.len() + self.away.len()
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }
}

/// Classifies each row by its own matchup string. A row whose matchup cannot
/// be classified aborts the split.
pub fn split_by_venue(rows: Vec<GameRow>) -> Result<VenueSplit, AppError> {
    let mut split = VenueSplit::default();
    for row in rows {
        let matchup: Matchup = row
            .matchup
            .parse()
            .map_err(|e| AppError::matchup_parse(&row.matchup_id, e))?;
        match matchup.venue {
            Venue::Home => split.home.push(row.into()),
            Venue::Away => split.away.push(row.into()),
        }
    }
    Ok(split)
}

/// Inner join of home and away rows on `matchup_id`, in home row order.
pub fn merge_games(split: &VenueSplit) -> Vec<MergedGameRow> {
    let mut away_by_game: HashMap<&str, Vec<&SideRow>> = HashMap::new();
    for away in &split.away {
        away_by_game
            .entry(away.matchup_id.as_str())
            .or_default()
            .push(away);
    }

    let mut merged = Vec::with_capacity(split.home.len());
    for home in &split.home {
        match away_by_game.get(home.matchup_id.as_str()) {
            Some(aways) => merged.extend(aways.iter().map(|away| MergedGameRow::merge(home, away))),
            None => debug!("Game {} has no playoff opponent row, dropping", home.matchup_id),
        }
    }
    merged
}

/// Builds the playoff games table from the full game log.
///
/// # Arguments
/// * `game_log` - Team game log, one row per team per game
/// * `playoff_team_ids` - Team ids of the playoff field
///
/// # Returns
/// * `Ok(Vec<MergedGameRow>)` - One row per game between two playoff teams,
///   in the order the home rows appear in the log
///
/// # Errors
/// * `AppError::MatchupParse` - A matchup string is neither `vs.` nor `@`.
///   Every row of the log is classified, playoff team or not, so this is
///   reported wherever it appears.
/// * `AppError::MissingColumn` / `AppError::InvalidCell` - Game log schema changed
pub fn build_games(
    game_log: &RecordSet,
    playoff_team_ids: &HashSet<i64>,
) -> Result<Vec<MergedGameRow>, AppError> {
    let rows = GameRow::from_record_set(game_log)?;
    let total = rows.len();

    let mut split = split_by_venue(rows)?;
    split.retain_teams(playoff_team_ids);
    info!(
        "Kept {} of {} game log rows for {} playoff teams",
        split.len(),
        total,
        playoff_team_ids.len()
    );

    let merged = merge_games(&split);
    info!(
        "Merged {} games from {} home and {} away rows",
        merged.len(),
        split.home.len(),
        split.away.len()
    );
    Ok(merged)
}
