//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Base URL of the Ventusky embed endpoint
pub const VENTUSKY_EMBED_BASE: &str = "https://embed.ventusky.com/";

/// Name of the generated page inside the output directory
pub const OUTPUT_PAGE_NAME: &str = "index.html";

/// Name of the widget helper file inside the output directory.
/// Contains the public page URL, never the source URL.
pub const OUTPUT_TAP_NAME: &str = "tap.txt";

/// Default forecast target values
pub mod defaults {
    /// Output directory for the generated site
    pub const OUTPUT_DIR: &str = "site";

    /// Latitude of the course (The Oxfordshire)
    pub const LATITUDE: f64 = 51.730;

    /// Longitude of the course
    pub const LONGITUDE: f64 = -1.037;

    /// Ventusky zoom level
    pub const ZOOM: u8 = 10;

    /// Ventusky weather layer. Try: "wind", "temp-2m", "clouds", "rain", "rain-1h"
    pub const LAYER: &str = "rain-3h";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the secret tee-time source URL
    pub const SOURCE_URL: &str = "TEE_SOURCE_URL";

    /// Environment variable for the output directory override
    pub const OUTPUT_DIR: &str = "TEE_OUTPUT_DIR";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "TEE_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "TEE_HTTP_TIMEOUT";
}
