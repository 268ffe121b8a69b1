//! URL building utilities for stats.nba.com endpoints

use crate::constants::endpoints::{GAME_FINDER, LEAGUE_ID, SEASON_TYPE, STANDINGS, TEAM_DIRECTORY};
use crate::season::Season;

/// Builds the team directory URL (every franchise with its id and abbreviation).
///
/// # Example
/// ```
/// use nba_playoffs::data_fetcher::api::build_team_directory_url;
///
/// let url = build_team_directory_url("https://stats.nba.com/stats");
/// assert_eq!(url, "https://stats.nba.com/stats/commonteamyears?LeagueID=00");
/// ```
pub fn build_team_directory_url(api_domain: &str) -> String {
    format!("{}/{TEAM_DIRECTORY}?LeagueID={LEAGUE_ID}", trim_domain(api_domain))
}

/// Builds the league standings URL for a season.
///
/// # Example
/// ```
/// use nba_playoffs::data_fetcher::api::build_standings_url;
/// use nba_playoffs::season::Season;
///
/// let url = build_standings_url("https://stats.nba.com/stats", Season::new(2022));
/// assert_eq!(
///     url,
///     "https://stats.nba.com/stats/leaguestandingsv3?LeagueID=00&Season=2022-23&SeasonType=Regular%20Season"
/// );
/// ```
pub fn build_standings_url(api_domain: &str, season: Season) -> String {
    format!(
        "{}/{STANDINGS}?LeagueID={LEAGUE_ID}&Season={season}&SeasonType={SEASON_TYPE}",
        trim_domain(api_domain)
    )
}

/// Builds the team game log URL for a season.
///
/// No season type is sent, so play-in and playoff games come back alongside
/// the regular season.
///
/// # Example
/// ```
/// use nba_playoffs::data_fetcher::api::build_game_log_url;
/// use nba_playoffs::season::Season;
///
/// let url = build_game_log_url("https://stats.nba.com/stats/", Season::new(2022));
/// assert_eq!(
///     url,
///     "https://stats.nba.com/stats/leaguegamefinder?PlayerOrTeam=T&LeagueID=00&Season=2022-23"
/// );
/// ```
pub fn build_game_log_url(api_domain: &str, season: Season) -> String {
    format!(
        "{}/{GAME_FINDER}?PlayerOrTeam=T&LeagueID={LEAGUE_ID}&Season={season}",
        trim_domain(api_domain)
    )
}

fn trim_domain(api_domain: &str) -> &str {
    api_domain.trim_end_matches('/')
}
