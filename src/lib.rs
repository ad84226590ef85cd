//! Tee-Time Forecast Page Builder Library
//!
//! This library fetches a tee-time document from a secret source URL, selects
//! the applicable tee time, and builds a static HTML page that opens a
//! Ventusky weather embed at that UTC date and hour over a fixed location.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tee_forecast::config::Config;
//! use tee_forecast::error::AppError;
//! use tee_forecast::forecast_page::ForecastPage;
//! use tee_forecast::tee_times::http_client::create_http_client_with_timeout;
//! use tee_forecast::tee_times::{fetch_tee_times, resolve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!
//!     // Fetch the document and resolve the target hour
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let doc = fetch_tee_times(&client, &config.source_url).await?;
//!     let target = resolve(&doc, chrono::Utc::now())?;
//!
//!     // Render the embed page and write it out
//!     let page = ForecastPage::new(&target, &config);
//!     page.write_to_dir(Path::new(&config.output_dir), config.pages_url.as_deref())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod forecast_page;
pub mod tee_times;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use forecast_page::{ForecastPage, build_embed_url};
pub use tee_times::{ResolvedTarget, TeeTimeDocument, TeeTimeRecord, fetch_tee_times, resolve};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
