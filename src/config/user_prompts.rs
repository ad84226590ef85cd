//! User interaction and prompts for configuration setup
//!
//! This module handles user prompts and input collection for configuration
//! initialization when config files don't exist or need user input.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the tee-time source URL and returns the trimmed input.
///
/// Used on first run when no config file exists and `TEE_SOURCE_URL` is not
/// set. The URL is treated as a secret afterwards: it is stored in the config
/// file but never logged or echoed back.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_source_url() -> Result<String, AppError> {
    println!("Please enter your tee-time source URL: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
