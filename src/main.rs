// src/main.rs
mod cli;
mod config;
mod constants;
mod error;
mod forecast_page;
mod logging;
mod tee_times;

use chrono::Utc;
use clap::Parser;
use cli::Args;
use config::Config;
use config::user_prompts::prompt_for_source_url;
use error::AppError;
use forecast_page::ForecastPage;
use std::path::Path;
use tee_times::http_client::create_http_client_with_timeout;
use tee_times::{fetch_tee_times, resolve};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before logging setup so stdout stays
    // clean for their output
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.new_source_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_url) = args.new_source_url {
            config.source_url = if new_url.is_empty() {
                prompt_for_source_url().await?
            } else {
                new_url
            };
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    // One fetch, one resolution, one write; any failure ends the run with
    // nothing written
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let doc = fetch_tee_times(&client, &config.source_url).await?;
    let target = resolve(&doc, Utc::now())?;
    tracing::info!("Resolved tee-time target: UTC {}", target.t_param());

    let page = ForecastPage::new(&target, &config);

    if args.print_url {
        println!("{}", page.embed_url());
        return Ok(());
    }

    let written = page
        .write_to_dir(Path::new(&config.output_dir), config.pages_url.as_deref())
        .await?;
    tracing::info!("Built {}", written.display());

    Ok(())
}
