//! Error types for the MerakiOp CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for MerakiOp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for local failures (config, terminal, I/O)
pub const EXIT_LOCAL: u8 = 1;

/// Exit code for fatal Dashboard API failures
pub const EXIT_REMOTE: u8 = 2;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error("Meraki API error: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input ended before a valid value was entered")]
    InputExhausted,
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether a prompt can recover from this error by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Lookup(_))
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Api(_) => EXIT_REMOTE,
            _ => EXIT_LOCAL,
        }
    }
}

/// Dashboard API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that the Meraki dashboard API key is valid.")]
    Unauthorized,

    #[error("Access denied. The API key has no access to this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("{0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the Meraki dashboard".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API key not found. Set the {0} environment variable or use --key-source prompt.")]
    MissingApiKey(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Operator input that failed local validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Data Error: API key can't be a blank value.")]
    BlankApiKey,

    #[error("Data Error: API key contains all whitespace characters.")]
    WhitespaceApiKey,

    #[error("Data Error: Network name can't be a blank value!")]
    BlankNetworkName,

    #[error(
        "Data Error: Network name '{0}' is invalid. Network name can only contain letters, \
         numbers, spaces, and these characters [.@#_-]."
    )]
    InvalidNetworkName(String),

    #[error(
        "Data Error: Tags '{0}' are invalid. Tags can contain only letters, numbers, dashes, \
         underscores, and periods!"
    )]
    InvalidTags(String),

    #[error("Data Error: Device code can't be a blank value! Valid device codes are {valid}.")]
    BlankDeviceCode { valid: String },

    #[error("Data Error: Invalid device code '{code}'! Valid device codes are {valid}.")]
    InvalidDeviceCode { code: String, valid: String },

    #[error("Data Error: Network type can't be a blank value! Valid network types are {valid}.")]
    BlankNetworkType { valid: String },

    #[error("Data Error: Invalid network type '{kind}'! Valid network types are {valid}.")]
    InvalidNetworkType { kind: String, valid: String },
}

/// Organization lookups that did not resolve to a single record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Data Error: The organization '{0}' does not exist!")]
    OrgNotFound(String),

    #[error(
        "Ambiguous organization name or organization name is not specified!\n\
         There are more than one Meraki dashboard organizations having the same \
         organization name: '{0}'.\n\
         Login to your Meraki dashboard, verify a specific organization and change \
         the name of the duplicated organization names to a different name."
    )]
    AmbiguousOrg(String),
}
