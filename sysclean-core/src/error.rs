//! Error types for sysclean
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings file, log directory, snapshots)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// HTTP request error (release checks)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Version string could not be parsed
    #[snafu(display("Invalid version {version:?}: {source}"))]
    Version {
        version: String,
        source: semver::Error,
    },

    /// A backend operation failed
    #[snafu(display("{message}"))]
    Service { message: String },

    /// A path the backend does not know about
    #[snafu(display("File not found: {path}"))]
    NotFound { path: String },

    /// Malformed base64 payload in an image data URL
    #[snafu(display("Invalid image data: {source}"))]
    Base64 { source: base64::DecodeError },
}

impl Error {
    /// Shorthand for a backend failure with a message
    pub fn service(message: impl Into<String>) -> Self {
        Error::Service {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(source: base64::DecodeError) -> Self {
        Error::Base64 { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
