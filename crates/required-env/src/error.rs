//! Error types for required-env

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, RequireError>;

/// Why a required lookup failed.
///
/// `MissingKey` covers an absent key, an empty value, and a value that does
/// not parse as the requested type; callers cannot tell these apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequireError {
    #[error("{0} is a required environment variable.")]
    MissingKey(String),

    #[error("{0} is not a valid address")]
    InvalidAddress(String),

    /// Only produced by the strict URL accessors.
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: String,
        #[source]
        source: url::ParseError,
    },
}

impl RequireError {
    pub(crate) fn missing(key: &str) -> Self {
        Self::MissingKey(key.to_string())
    }

    /// The environment key the lookup was for.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey(key) | Self::InvalidAddress(key) => key,
            Self::InvalidUrl { key, .. } => key,
        }
    }
}
