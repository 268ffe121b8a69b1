//! Application-wide constants and configuration values
//!
//! Provider endpoints, request headers, output file names and defaults live
//! here so the pipeline modules carry no magic strings.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default base URL of the statistics provider
pub const DEFAULT_API_DOMAIN: &str = "https://stats.nba.com/stats";

/// Default directory for the generated datasets
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Name used for the config directory and the log file
pub const APP_DIR_NAME: &str = "nba_playoffs";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "nba_playoffs.log";

/// Output file names
pub mod output {
    /// Playoff team standings dataset
    pub const STANDINGS_FILE: &str = "nba_playoffs.csv";

    /// Merged playoff game results dataset
    pub const GAMES_FILE: &str = "nba_games.csv";
}

/// stats.nba.com endpoint names and fixed query values
pub mod endpoints {
    /// Team directory (team id and abbreviation for every franchise)
    pub const TEAM_DIRECTORY: &str = "commonteamyears";

    /// League standings snapshot
    pub const STANDINGS: &str = "leaguestandingsv3";

    /// Team game log
    pub const GAME_FINDER: &str = "leaguegamefinder";

    /// NBA league identifier
    pub const LEAGUE_ID: &str = "00";

    /// Season type filter for standings, already URL-encoded
    pub const SEASON_TYPE: &str = "Regular%20Season";
}

/// Headers stats.nba.com expects from a browser; requests without them hang or get rejected
pub mod request_headers {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0";
    pub const ACCEPT: &str = "application/json, text/plain, */*";
    pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
    pub const ORIGIN: &str = "https://www.nba.com";
    pub const REFERER: &str = "https://www.nba.com/";
    pub const STATS_ORIGIN_NAME: &str = "x-nba-stats-origin";
    pub const STATS_ORIGIN: &str = "stats";
    pub const STATS_TOKEN_NAME: &str = "x-nba-stats-token";
    pub const STATS_TOKEN: &str = "true";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for overriding API domain
    pub const API_DOMAIN: &str = "NBA_PLAYOFFS_API_DOMAIN";

    /// Environment variable for overriding the season
    pub const SEASON: &str = "NBA_PLAYOFFS_SEASON";

    /// Environment variable for overriding the output directory
    pub const OUTPUT_DIR: &str = "NBA_PLAYOFFS_OUTPUT_DIR";

    /// Environment variable for overriding HTTP timeout
    pub const HTTP_TIMEOUT: &str = "NBA_PLAYOFFS_HTTP_TIMEOUT";

    /// Environment variable for overriding log file path
    pub const LOG_FILE: &str = "NBA_PLAYOFFS_LOG_FILE";
}

/// Season calendar
pub mod season {
    /// Month in which a new NBA season starts (October)
    pub const START_MONTH: u32 = 10;
}
