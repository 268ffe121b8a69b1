use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::pipeline::{ExportSummary, RunOptions, run_export};
use crate::season::Season;
use std::path::PathBuf;
use tracing::info;

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Builds the run options from command line arguments.
///
/// Returns an error if `--season` is not a valid `YYYY-YY` season.
pub fn run_options_from_args(args: &Args) -> Result<RunOptions, AppError> {
    let season = args
        .season
        .as_deref()
        .map(|s| s.parse::<Season>())
        .transpose()
        .map_err(|e| AppError::config_error(format!("--season: {e}")))?;

    Ok(RunOptions {
        season,
        bracket_path: args.bracket.as_ref().map(PathBuf::from),
        standings_only: args.standings_only,
    })
}

/// Applies command line overrides on top of the loaded config.
pub fn effective_config(args: &Args, config: &Config) -> Result<Config, AppError> {
    let mut config = config.clone();
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Config as it would be after saving: CLI season and output directory
/// replace the loaded values.
pub fn config_to_save(args: &Args, config: &Config) -> Result<Config, AppError> {
    let options = run_options_from_args(args)?;
    let mut config = effective_config(args, config)?;
    if options.season.is_some() {
        config.season = options.season;
    }
    Ok(config)
}

/// Handles the --save-config command.
pub async fn handle_save_config_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let updated = config_to_save(args, config)?;
    updated.save().await?;
    info!("Saved configuration to {}", Config::get_config_path());
    println!("Config updated successfully!");
    Ok(())
}

/// Handles the default export command and prints what was written.
pub async fn handle_export_command(args: &Args, config: &Config) -> Result<ExportSummary, AppError> {
    let options = run_options_from_args(args)?;
    let config = effective_config(args, config)?;

    let summary = run_export(&config, &options).await?;
    info!("Export for season {} finished", summary.season);
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &ExportSummary) {
    println!("Season {}", summary.season);
    println!(
        "  {} playoff teams -> {}",
        summary.standings_rows,
        summary.standings_path.display()
    );
    if let Some(games_path) = &summary.games_path {
        println!(
            "  {} games        -> {}",
            summary.games_rows,
            games_path.display()
        );
    }
}
