// src/main.rs
use clap::Parser;
use nba_playoffs::cli::Args;
use nba_playoffs::commands::{
    handle_export_command, handle_list_config_command, handle_save_config_command,
};
use nba_playoffs::config::Config;
use nba_playoffs::error::AppError;
use nba_playoffs::logging::setup_logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_data_quality() {
                eprintln!("The statistics provider may have changed its data format.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.list_config {
        handle_list_config_command(&config);
        return Ok(());
    }

    if args.save_config {
        return handle_save_config_command(&args, &config).await;
    }

    // The guard must outlive every log call so buffered lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Err(e) = handle_export_command(&args, &config).await {
        tracing::error!("Export failed: {e}");
        return Err(e);
    }

    Ok(())
}
