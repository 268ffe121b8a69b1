//! NBA playoff datasets library
//!
//! Fetches regular-season standings, the team directory and the team game log
//! from the NBA statistics API, narrows them to the teams of a playoff
//! bracket, and writes two CSV files: one row per playoff team and one row
//! per game played between two playoff teams.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_playoffs::config::Config;
//! use nba_playoffs::error::AppError;
//! use nba_playoffs::pipeline::{RunOptions, run_export};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let summary = run_export(&config, &RunOptions::default()).await?;
//!
//!     println!(
//!         "{} teams and {} games for season {}",
//!         summary.standings_rows, summary.games_rows, summary.season
//!     );
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod season;
pub mod transform;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use pipeline::{ExportSummary, RunOptions, run_export};
pub use season::Season;
pub use transform::{MergedGameRow, PlayoffBracket, StandingsRow};
