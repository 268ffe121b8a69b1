use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA playoff team exporter
///
/// Fetches regular-season standings and the game log for one season from the
/// NBA statistics API, keeps the teams of the playoff bracket, and writes two
/// CSV files:
///
/// - nba_playoffs.csv: one row per playoff team with record and seed
/// - nba_games.csv: one row per game played between two playoff teams
///
/// Nothing is written unless every request and transformation succeeds.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to export in YYYY-YY format, e.g. 2022-23.
    /// Defaults to the configured season, then to the bracket's season.
    #[arg(long = "season", short = 's', help_heading = "Data")]
    pub season: Option<String>,

    /// Load the playoff bracket from a TOML file instead of the built-in 2022-23 bracket.
    #[arg(long = "bracket", short = 'b', help_heading = "Data", value_name = "FILE")]
    pub bracket: Option<String>,

    /// Directory the CSV files are written to. Overrides the configured value.
    #[arg(long = "output-dir", short = 'o', help_heading = "Output", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Only export nba_playoffs.csv and skip the game log request.
    #[arg(long = "standings-only", help_heading = "Output")]
    pub standings_only: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Store --season and --output-dir in the config file instead of exporting.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Print log output to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
