//! Matchup strings from the game log
//!
//! Every game log row describes the game from one team's point of view:
//!
//! ```text
//! matchup := TEAM " vs. " OPPONENT   (team is at home)
//!          | TEAM " @ " OPPONENT     (team is away)
//! ```
//!
//! A string carrying both markers, or neither, cannot be classified and is
//! reported instead of being dropped.

use std::str::FromStr;
use thiserror::Error;

const HOME_MARKER: &str = "vs.";
const AWAY_MARKER: &str = "@";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchupParseError {
    #[error("'{0}' contains neither 'vs.' nor '@'")]
    NoVenueMarker(String),

    #[error("'{0}' contains both 'vs.' and '@'")]
    AmbiguousVenue(String),

    #[error("'{0}' is missing a team abbreviation")]
    MissingTeam(String),
}

/// Which side of the game the row's team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
}

impl FromStr for Matchup {
    type Err = MatchupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (venue, marker) = match (s.contains(HOME_MARKER), s.contains(AWAY_MARKER)) {
            (true, false) => (Venue::Home, HOME_MARKER),
            (false, true) => (Venue::Away, AWAY_MARKER),
            (true, true) => return Err(MatchupParseError::AmbiguousVenue(s.to_string())),
            (false, false) => return Err(MatchupParseError::NoVenueMarker(s.to_string())),
        };

        let (team, opponent) = s
            .split_once(marker)
            .map(|(team, opponent)| (team.trim(), opponent.trim()))
            .ok_or_else(|| MatchupParseError::NoVenueMarker(s.to_string()))?;

        if team.is_empty() || opponent.is_empty() {
            return Err(MatchupParseError::MissingTeam(s.to_string()));
        }

        Ok(Matchup {
            team: team.to_string(),
            opponent: opponent.to_string(),
            venue,
        })
    }
}
