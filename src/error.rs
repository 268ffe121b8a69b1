use crate::transform::matchup::MatchupParseError;
use crate::transform::record::RecordParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Schema drift in provider record sets
    #[error("Column '{column}' missing from record set '{record_set}'")]
    MissingColumn { record_set: String, column: String },

    #[error("Unexpected value in '{record_set}.{column}' at row {row}: {message}")]
    InvalidCell {
        record_set: String,
        column: String,
        row: usize,
        message: String,
    },

    // Composite string parsers
    #[error("Invalid record string in '{column}' for {team}: {source}")]
    RecordParse {
        team: String,
        column: String,
        #[source]
        source: RecordParseError,
    },

    #[error("Invalid matchup for game {matchup_id}: {source}")]
    MatchupParse {
        matchup_id: String,
        #[source]
        source: MatchupParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Playoff bracket error: {0}")]
    Bracket(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a playoff bracket error with context
    pub fn bracket_error(msg: impl Into<String>) -> Self {
        Self::Bracket(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a missing column error (provider schema drift)
    pub fn missing_column(record_set: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            record_set: record_set.into(),
            column: column.into(),
        }
    }

    /// Create an invalid cell error for a value of the wrong type
    pub fn invalid_cell(
        record_set: impl Into<String>,
        column: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidCell {
            record_set: record_set.into(),
            column: column.into(),
            row,
            message: message.into(),
        }
    }

    /// Wrap a record string parse failure with the team and column it came from
    pub fn record_parse(
        team: impl Into<String>,
        column: impl Into<String>,
        source: RecordParseError,
    ) -> Self {
        Self::RecordParse {
            team: team.into(),
            column: column.into(),
            source,
        }
    }

    /// Wrap a matchup parse failure with the game it came from
    pub fn matchup_parse(matchup_id: impl Into<String>, source: MatchupParseError) -> Self {
        Self::MatchupParse {
            matchup_id: matchup_id.into(),
            source,
        }
    }

    /// Check if error came from the provider changing its data shape or content
    pub fn is_data_quality(&self) -> bool {
        matches!(
            self,
            AppError::MissingColumn { .. }
                | AppError::InvalidCell { .. }
                | AppError::RecordParse { .. }
                | AppError::MatchupParse { .. }
                | AppError::ApiUnexpectedStructure { .. }
        )
    }
}
