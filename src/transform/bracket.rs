//! Playoff field for one season: which teams qualify, their seeds and conferences.
//!
//! The bracket is not derived from any API. It is data that has to be edited
//! for every new season, so it is loaded once and handed to the transformers
//! explicitly. Teams listed here but absent from the provider standings simply
//! do not appear in the output.

use crate::error::AppError;
use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use tokio::fs;

const DEFAULT_BRACKET: &str = include_str!("../../data/bracket_2022_23.toml");

/// Highest seed that still reaches the play-in tournament
pub const MAX_SEED: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConferenceAbbr {
    E,
    W,
}

impl fmt::Display for ConferenceAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConferenceAbbr::E => f.write_str("E"),
            ConferenceAbbr::W => f.write_str("W"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffTeam {
    /// Team name as the provider spells it in standings (e.g. "Lakers")
    pub name: String,
    /// Three-letter abbreviation used by the team directory and game log
    pub short_code: String,
    pub seed: u8,
    pub conference: ConferenceAbbr,
}

#[derive(Debug, Deserialize, Serialize)]
struct BracketFile {
    season: Season,
    teams: Vec<PlayoffTeam>,
}

/// Immutable, validated playoff field keyed by team name.
#[derive(Debug, Clone)]
pub struct PlayoffBracket {
    season: Season,
    teams: Vec<PlayoffTeam>,
    by_name: HashMap<String, usize>,
}

impl PlayoffBracket {
    pub fn new(season: Season, teams: Vec<PlayoffTeam>) -> Result<Self, AppError> {
        validate_teams(&teams)?;
        let by_name = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| (team.name.clone(), idx))
            .collect();
        Ok(Self {
            season,
            teams,
            by_name,
        })
    }

    /// The 2022-23 field compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_toml_str(DEFAULT_BRACKET)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let file: BracketFile = toml::from_str(content)?;
        Self::new(file.season, file.teams)
    }

    pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let content = fs::read_to_string(path.as_ref()).await?;
        Self::from_toml_str(&content)
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn get(&self, team_name: &str) -> Option<&PlayoffTeam> {
        self.by_name.get(team_name).map(|&idx| &self.teams[idx])
    }

    pub fn teams(&self) -> impl Iterator<Item = &PlayoffTeam> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

fn validate_teams(teams: &[PlayoffTeam]) -> Result<(), AppError> {
    if teams.is_empty() {
        return Err(AppError::bracket_error("bracket lists no teams"));
    }

    let mut names = HashSet::new();
    let mut codes = HashSet::new();
    let mut seeds = HashSet::new();

    for team in teams {
        if team.name.trim().is_empty() {
            return Err(AppError::bracket_error("team name cannot be empty"));
        }
        if team.short_code.trim().is_empty() {
            return Err(AppError::bracket_error(format!(
                "{} has an empty short code",
                team.name
            )));
        }
        if team.seed == 0 || team.seed > MAX_SEED {
            return Err(AppError::bracket_error(format!(
                "{} has seed {}, expected 1-{MAX_SEED}",
                team.name, team.seed
            )));
        }
        if !names.insert(team.name.as_str()) {
            return Err(AppError::bracket_error(format!(
                "{} is listed twice",
                team.name
            )));
        }
        if !codes.insert(team.short_code.as_str()) {
            return Err(AppError::bracket_error(format!(
                "short code {} is used twice",
                team.short_code
            )));
        }
        if !seeds.insert((team.conference, team.seed)) {
            return Err(AppError::bracket_error(format!(
                "duplicate seed {} in conference {}",
                team.seed, team.conference
            )));
        }
    }

    Ok(())
}
