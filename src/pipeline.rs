//! One export run: fetch, transform, then write.
//!
//! All three requests and both transformations complete before the first
//! file is touched, so a failed run leaves any previous output untouched.

use crate::config::Config;
use crate::constants::output::{GAMES_FILE, STANDINGS_FILE};
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::{TeamDirectory, fetch_game_log, fetch_standings, fetch_team_directory};
use crate::error::AppError;
use crate::export::export_csv;
use crate::season::Season;
use crate::transform::{
    MergedGameRow, PlayoffBracket, StandingsRow, build_games, build_standings, playoff_team_ids,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Per-run choices that do not belong in the persistent config.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit season, taking precedence over the configured one.
    pub season: Option<Season>,
    /// Bracket file replacing the built-in bracket.
    pub bracket_path: Option<PathBuf>,
    /// Skip the game log and write only the standings file.
    pub standings_only: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub season: Season,
    pub standings_path: PathBuf,
    pub standings_rows: usize,
    /// `None` when the run skipped the game log.
    pub games_path: Option<PathBuf>,
    pub games_rows: usize,
}

/// The transformed tables, ready to be written.
#[derive(Debug, Clone)]
pub struct PlayoffTables {
    pub standings: Vec<StandingsRow>,
    pub games: Option<Vec<MergedGameRow>>,
}

/// Loads the bracket from `path`, or the built-in one when no path is given.
pub async fn resolve_bracket(path: Option<&Path>) -> Result<PlayoffBracket, AppError> {
    match path {
        Some(path) => {
            info!("Loading playoff bracket from {}", path.display());
            PlayoffBracket::load_from_path(path).await
        }
        None => PlayoffBracket::embedded(),
    }
}

/// Picks the season to fetch: explicit choice, then config, then the bracket's own.
pub fn resolve_season(
    explicit: Option<Season>,
    configured: Option<Season>,
    bracket: &PlayoffBracket,
) -> Season {
    let season = explicit.or(configured).unwrap_or_else(|| bracket.season());

    if season != bracket.season() {
        warn!(
            "Fetching season {season} with the {} playoff bracket; teams and seeds may not match",
            bracket.season()
        );
    }
    if season > Season::current() {
        warn!("Season {season} has not started yet; the provider will likely return no rows");
    }

    season
}

/// Fetches everything and builds both tables without writing anything.
#[instrument(skip(config, bracket))]
pub async fn build_tables(
    config: &Config,
    bracket: &PlayoffBracket,
    season: Season,
    standings_only: bool,
) -> Result<PlayoffTables, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let directory_set = fetch_team_directory(&client, config).await?;
    let directory = TeamDirectory::from_record_set(&directory_set)?;

    let standings_set = fetch_standings(&client, config, season).await?;
    let standings = build_standings(&standings_set, bracket, &directory)?;

    let games = if standings_only {
        None
    } else {
        let game_log = fetch_game_log(&client, config, season).await?;
        Some(build_games(&game_log, &playoff_team_ids(&standings))?)
    };

    Ok(PlayoffTables { standings, games })
}

/// Writes the tables into `output_dir`, standings first.
pub fn write_tables(output_dir: &Path, tables: &PlayoffTables) -> Result<(PathBuf, Option<PathBuf>), AppError> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }

    let standings_path = output_dir.join(STANDINGS_FILE);
    export_csv(&standings_path, &tables.standings)?;

    let games_path = match &tables.games {
        Some(games) => {
            let path = output_dir.join(GAMES_FILE);
            export_csv(&path, games)?;
            Some(path)
        }
        None => None,
    };

    Ok((standings_path, games_path))
}

/// Runs a full export with the given config and options.
///
/// # Arguments
/// * `config` - API domain, timeout, configured season and output directory
/// * `options` - Per-run season, bracket file and standings-only switch
///
/// # Returns
/// * `Ok(ExportSummary)` - Season used, files written and their row counts
/// * `Err(AppError)` - The first fetch, transform or write failure. Nothing is
///   written if a fetch or transform fails.
pub async fn run_export(config: &Config, options: &RunOptions) -> Result<ExportSummary, AppError> {
    let bracket = resolve_bracket(options.bracket_path.as_deref()).await?;
    let season = resolve_season(options.season, config.season, &bracket);
    info!(
        "Exporting season {season} for {} playoff teams to {}",
        bracket.len(),
        config.output_dir
    );

    let tables = build_tables(config, &bracket, season, options.standings_only).await?;
    let (standings_path, games_path) = write_tables(Path::new(&config.output_dir), &tables)?;

    Ok(ExportSummary {
        season,
        standings_path,
        standings_rows: tables.standings.len(),
        games_path,
        games_rows: tables.games.as_ref().map_or(0, Vec::len),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{ConferenceAbbr, PlayoffTeam};
    use tempfile::tempdir;

    fn small_bracket(season: Season) -> PlayoffBracket {
        PlayoffBracket::new(
            season,
            vec![PlayoffTeam {
                name: "Lakers".to_string(),
                short_code: "LAL".to_string(),
                seed: 7,
                conference: ConferenceAbbr::W,
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_season_precedence() {
        let bracket = small_bracket(Season::new(2022));
        assert_eq!(
            resolve_season(Some(Season::new(2020)), Some(Season::new(2021)), &bracket),
            Season::new(2020)
        );
        assert_eq!(
            resolve_season(None, Some(Season::new(2021)), &bracket),
            Season::new(2021)
        );
        assert_eq!(resolve_season(None, None, &bracket), Season::new(2022));
    }

    #[tokio::test]
    async fn test_resolve_embedded_bracket() {
        let bracket = resolve_bracket(None).await.unwrap();
        assert_eq!(bracket.season(), Season::new(2022));
        assert_eq!(bracket.len(), 20);
    }

    #[tokio::test]
    async fn test_resolve_missing_bracket_file() {
        let temp_dir = tempdir().unwrap();
        let result = resolve_bracket(Some(temp_dir.path().join("absent.toml").as_path())).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_write_tables_creates_output_dir() {
        let temp_dir = tempdir().unwrap();
        let output_dir = temp_dir.path().join("exports");
        let tables = PlayoffTables {
            standings: Vec::new(),
            games: Some(Vec::new()),
        };

        let (standings_path, games_path) = write_tables(&output_dir, &tables).unwrap();
        assert!(standings_path.ends_with(STANDINGS_FILE));
        assert!(standings_path.exists());
        assert!(games_path.unwrap().exists());
    }

    #[test]
    fn test_standings_only_writes_one_file() {
        let temp_dir = tempdir().unwrap();
        let tables = PlayoffTables {
            standings: Vec::new(),
            games: None,
        };

        let (_, games_path) = write_tables(temp_dir.path(), &tables).unwrap();
        assert!(games_path.is_none());
        assert!(!temp_dir.path().join(GAMES_FILE).exists());
    }
}
