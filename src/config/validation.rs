use crate::config::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Source URL cannot be empty and must be a URL or at least a domain name
/// - Latitude must be within [-90, 90], longitude within [-180, 180]
/// - Zoom must be within the range the embed accepts (1-20)
/// - Layer identifier cannot be empty
/// - If a log file path is provided, its parent directory must exist or be
///   creatable
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.source_url.is_empty() {
        return Err(AppError::config_error("Source URL cannot be empty"));
    }

    // The URL is never echoed back in errors, so messages stay generic
    if !config.source_url.starts_with("http://") && !config.source_url.starts_with("https://") {
        if !config.source_url.contains('.') && !config.source_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "Source URL must be a valid URL or domain name",
            ));
        }
    }

    if !(-90.0..=90.0).contains(&config.latitude) {
        return Err(AppError::config_error(
            "Latitude must be between -90 and 90",
        ));
    }

    if !(-180.0..=180.0).contains(&config.longitude) {
        return Err(AppError::config_error(
            "Longitude must be between -180 and 180",
        ));
    }

    if !(1..=20).contains(&config.zoom) {
        return Err(AppError::config_error("Zoom must be between 1 and 20"));
    }

    if config.layer.is_empty() {
        return Err(AppError::config_error(
            "Weather layer identifier cannot be empty",
        ));
    }

    // Validate log file path if provided
    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
