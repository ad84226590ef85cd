use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Fetch-side errors. The source URL is the only credential this tool
    // holds, so no variant carries it; messages stay URL-free.
    #[error("Failed to fetch tee-time document: {0}")]
    SourceFetch(#[from] reqwest::Error),

    #[error("Failed to parse tee-time document: {0}")]
    SourceParse(#[from] serde_json::Error),

    #[error("Tee-time source not found (404)")]
    SourceNotFound,

    #[error("Tee-time source server error ({status}): {message}")]
    SourceServerError { status: u16, message: String },

    #[error("Tee-time source client error ({status}): {message}")]
    SourceClientError { status: u16, message: String },

    #[error("Tee-time source rate limit exceeded (429): {message}")]
    SourceRateLimit { message: String },

    #[error("Tee-time source unavailable ({status}): {message}")]
    SourceUnavailable { status: u16, message: String },

    // Network-specific errors
    #[error("Network timeout while fetching the tee-time document")]
    NetworkTimeout,

    #[error("Connection to tee-time source failed: {message}")]
    NetworkConnection { message: String },

    // Body and structure errors
    #[error("Tee-time source returned malformed JSON: {message}")]
    SourceMalformedJson { message: String },

    #[error("Tee-time source returned unexpected data structure: {message}")]
    SourceUnexpectedStructure { message: String },

    #[error("Tee-time source returned empty or missing data: {message}")]
    SourceNoData { message: String },

    // Resolution errors
    #[error("No usable tee time in document (need nextTee.whenISO or todayTee.whenISO)")]
    NoUsableTeeTime,

    #[error("Invalid tee-time timestamp: {0}")]
    TimestampParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a timestamp parsing error with context
    pub fn timestamp_parse_error(msg: impl Into<String>) -> Self {
        Self::TimestampParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a source server error (5xx status codes)
    pub fn source_server_error(status: u16, message: impl Into<String>) -> Self {
        Self::SourceServerError {
            status,
            message: message.into(),
        }
    }

    /// Create a source client error (4xx status codes except 404 and 429)
    pub fn source_client_error(status: u16, message: impl Into<String>) -> Self {
        Self::SourceClientError {
            status,
            message: message.into(),
        }
    }

    /// Create a source rate limit error
    pub fn source_rate_limit(message: impl Into<String>) -> Self {
        Self::SourceRateLimit {
            message: message.into(),
        }
    }

    /// Create a source unavailable error (502/503)
    pub fn source_unavailable(status: u16, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            status,
            message: message.into(),
        }
    }

    /// Create a network connection error
    pub fn network_connection(message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn source_malformed_json(message: impl Into<String>) -> Self {
        Self::SourceMalformedJson {
            message: message.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn source_unexpected_structure(message: impl Into<String>) -> Self {
        Self::SourceUnexpectedStructure {
            message: message.into(),
        }
    }

    /// Create a no data error
    pub fn source_no_data(message: impl Into<String>) -> Self {
        Self::SourceNoData {
            message: message.into(),
        }
    }

    /// Check if the error happened before anything could have been written.
    /// Every fetch- and resolution-side failure terminates the run with no
    /// output file; only I/O errors can occur during the write itself.
    #[allow(dead_code)] // Utility method for callers embedding the library
    pub fn is_pre_output(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }
}
