use crate::constants::{
    DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_OUTPUT_DIR, LOG_FILE_NAME, env_vars,
};
use crate::error::AppError;
use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the statistics provider, without a trailing endpoint.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Season to fetch. Falls back to the playoff bracket's season when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Directory the CSV files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            season: None,
            output_dir: default_output_dir(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file is not an error: defaults are used instead.
    /// Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `NBA_PLAYOFFS_API_DOMAIN` - Override API domain
    /// - `NBA_PLAYOFFS_SEASON` - Override season (YYYY-YY)
    /// - `NBA_PLAYOFFS_OUTPUT_DIR` - Override output directory
    /// - `NBA_PLAYOFFS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `NBA_PLAYOFFS_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_or_default(&get_config_path()).await?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub async fn load_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a specific file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(season) = std::env::var(env_vars::SEASON) {
            let season = season.parse::<Season>().map_err(|e| {
                AppError::config_error(format!("{}: {e}", env_vars::SEASON))
            })?;
            self.season = Some(season);
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.http_timeout_seconds,
            &self.output_dir,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed and writes the API domain
    /// without a trailing slash.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_domain: self.api_domain.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Prints the effective configuration to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let config_state = if Path::new(&config_path).exists() {
            ""
        } else {
            " (not created, using defaults)"
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}{config_state}");
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", self.api_domain);
        println!("────────────────────────────────────");
        println!("Season:");
        match self.season {
            Some(season) => println!("{season}"),
            None => println!("(Season of the playoff bracket)"),
        }
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{LOG_FILE_NAME}", get_log_dir_path());
            println!("(Default location)");
        }
    }
}
