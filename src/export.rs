//! CSV output for the two datasets.
//!
//! Headers are written from an explicit column list so an empty table still
//! produces a header row. Each file is written next to its destination and
//! renamed into place once complete.

use crate::error::AppError;
use crate::transform::{MergedGameRow, StandingsRow};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A row type with a fixed CSV column order matching its serde field order.
pub trait CsvTable: Serialize {
    const COLUMNS: &'static [&'static str];
}

impl CsvTable for StandingsRow {
    const COLUMNS: &'static [&'static str] = &[
        "team",
        "team_short",
        "conference",
        "games_won",
        "games_lose",
        "conference_position",
        "games_played",
        "points_scored",
        "points_missed",
        "game_won_home",
        "game_lose_home",
        "game_won_away",
        "game_lose_away",
        "seed",
        "conf_abbr",
        "team_id",
    ];
}

impl CsvTable for MergedGameRow {
    const COLUMNS: &'static [&'static str] = &[
        "home_team",
        "home_team_short",
        "matchup_id",
        "home_points",
        "home_fg_pct",
        "home_ft_pct",
        "home_fg3_pct",
        "away_team",
        "away_team_short",
        "away_points",
        "away_fg_pct",
        "away_ft_pct",
        "away_fg3_pct",
        "winning_team",
    ];
}

/// Writes the header and all rows to any writer.
pub fn write_table<T: CsvTable, W: std::io::Write>(writer: W, rows: &[T]) -> Result<(), AppError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(T::COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `rows` to `path`, replacing any previous file.
pub fn export_csv<T: CsvTable>(path: &Path, rows: &[T]) -> Result<(), AppError> {
    let tmp_path = temp_path(path);
    debug!("Writing {} rows to {}", rows.len(), tmp_path.display());

    let file = fs::File::create(&tmp_path)?;
    if let Err(e) = write_table(file, rows) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ConferenceAbbr;
    use tempfile::tempdir;

    fn standings_row(team: &str, team_id: Option<i64>) -> StandingsRow {
        StandingsRow {
            team: team.to_string(),
            team_short: "LAL".to_string(),
            conference: "West".to_string(),
            games_won: 43,
            games_lose: 39,
            conference_position: "30-22".to_string(),
            games_played: 82,
            points_scored: 117.2,
            points_missed: 116.6,
            game_won_home: 23,
            game_lose_home: 18,
            game_won_away: 20,
            game_lose_away: 21,
            seed: 7,
            conf_abbr: ConferenceAbbr::W,
            team_id,
        }
    }

    fn game_row() -> MergedGameRow {
        MergedGameRow {
            home_team: "Denver Nuggets".to_string(),
            home_team_short: "DEN".to_string(),
            matchup_id: "0022200001".to_string(),
            home_points: 110,
            home_fg_pct: Some(0.5),
            home_ft_pct: None,
            home_fg3_pct: Some(0.4),
            away_team: "Los Angeles Lakers".to_string(),
            away_team_short: "LAL".to_string(),
            away_points: 102,
            away_fg_pct: Some(0.45),
            away_ft_pct: Some(0.8),
            away_fg3_pct: Some(0.3),
            winning_team: "DEN".to_string(),
        }
    }

    fn to_string<T: CsvTable>(rows: &[T]) -> String {
        let mut buffer = Vec::new();
        write_table(&mut buffer, rows).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_standings_columns_match_field_order() {
        // With headers on, csv derives the header from serde field names
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(standings_row("Lakers", Some(1))).unwrap();
        let derived = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = derived.lines().next().unwrap();
        assert_eq!(header, StandingsRow::COLUMNS.join(","));
        assert!(header.ends_with("seed,conf_abbr,team_id"));
    }

    #[test]
    fn test_game_columns_match_field_order() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(game_row()).unwrap();
        let derived = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(derived.lines().next().unwrap(), MergedGameRow::COLUMNS.join(","));
        assert!(!derived.contains("team_id"));
    }

    #[test]
    fn test_one_header_plus_one_line_per_row() {
        let output = to_string(&[standings_row("Lakers", Some(1610612747)), standings_row("Heat", None)]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Lakers,LAL,West,43,39,30-22,82,117.2,116.6,23,18,20,21,7,W,1610612747"
        );
        // Unset team id is an empty trailing field
        assert!(lines[2].ends_with(",7,W,"));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let output = to_string::<MergedGameRow>(&[]);
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("home_team,home_team_short,matchup_id"));
    }

    #[test]
    fn test_missing_percentages_are_empty_fields() {
        let output = to_string(&[game_row()]);
        let line = output.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "Denver Nuggets,DEN,0022200001,110,0.5,,0.4,Los Angeles Lakers,LAL,102,0.45,0.8,0.3,DEN"
        );
    }

    #[test]
    fn test_embedded_commas_are_quoted() {
        let mut row = standings_row("Lakers", None);
        row.conference = "West, Pacific".to_string();
        let output = to_string(&[row]);
        assert!(output.contains("\"West, Pacific\""));
    }

    #[test]
    fn test_export_replaces_file_and_leaves_no_temp() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nba_games.csv");
        std::fs::write(&path, "stale").unwrap();

        export_csv(&path, &[game_row()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!temp_dir.path().join("nba_games.csv.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = tempdir().unwrap();
        // A non-empty directory at the destination cannot be replaced by a file
        let path = temp_dir.path().join("nba_games.csv");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(matches!(
            export_csv(&path, &[game_row()]),
            Err(AppError::Io(_))
        ));
        assert!(!temp_dir.path().join("nba_games.csv.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("nba_games.csv");
        assert!(matches!(
            export_csv(&path, &[game_row()]),
            Err(AppError::Io(_))
        ));
    }
}
