use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, defaults, env_vars};
use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_source_url;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Secret URL of the tee-time JSON document. Never logged or displayed.
    pub source_url: String,
    /// Directory the static page is written into. Defaults to `site`.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Latitude of the forecast location.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude of the forecast location.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Ventusky zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Ventusky weather layer identifier, e.g. "rain-3h" or "wind".
    #[serde(default = "default_layer")]
    pub layer: String,
    /// Public URL of the published page, written into tap.txt for widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_url: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for the source fetch. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_output_dir() -> String {
    defaults::OUTPUT_DIR.to_string()
}

fn default_latitude() -> f64 {
    defaults::LATITUDE
}

fn default_longitude() -> f64 {
    defaults::LONGITUDE
}

fn default_zoom() -> u8 {
    defaults::ZOOM
}

fn default_layer() -> String {
    defaults::LAYER.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: String::new(),
            output_dir: default_output_dir(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            zoom: default_zoom(),
            layer: default_layer(),
            pages_url: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the source URL and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TEE_SOURCE_URL` - Override the secret source URL
    /// - `TEE_OUTPUT_DIR` - Override the output directory
    /// - `TEE_LOG_FILE` - Override log file path
    /// - `TEE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(source_url) = std::env::var(env_vars::SOURCE_URL) {
            // Source URL provided via environment (e.g. a CI secret); no
            // config file needed
            Config {
                source_url,
                ..Config::default()
            }
        } else {
            let source_url = prompt_for_source_url().await?;

            let config = Config {
                source_url,
                ..Config::default()
            };

            config.save().await?;
            config
        };

        config.apply_env_overrides();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of whatever was loaded
    /// from the config file.
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(source_url) = std::env::var(env_vars::SOURCE_URL) {
            self.source_url = source_url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Ensures source_url has https:// prefix
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    ///
    /// # Notes
    /// - Uses platform-specific config directory (e.g., ~/.config on Linux)
    /// - Falls back to current directory if config directory is unavailable
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The source URL is the secret that protects the tee-time document, so
    /// it is shown redacted.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Source URL:");
            println!("(set, hidden)");
            println!("────────────────────────────────────");
            println!("Forecast Target:");
            println!(
                "{};{} zoom {} layer {}",
                config.latitude, config.longitude, config.zoom, config.layer
            );
            println!("────────────────────────────────────");
            println!("Output Directory:");
            println!("{}", config.output_dir);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/tee_forecast.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the
    /// source URL has the proper https:// prefix.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
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
        let source_url = if !self.source_url.starts_with("https://") {
            format!("https://{}", self.source_url.trim_start_matches("http://"))
        } else {
            self.source_url.clone()
        };
        let content = toml::to_string_pretty(&Config {
            source_url,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
