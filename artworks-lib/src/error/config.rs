//! Configuration error types

use super::ValidationError;

/// Errors raised while assembling a [`CatalogConfig`](crate::config::CatalogConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute URL.
    #[error("invalid endpoint URL '{value}': {source}")]
    InvalidEndpoint {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        #[source]
        source: url::ParseError,
    },

    /// The endpoint uses a scheme other than http or https.
    #[error("unsupported endpoint scheme '{0}'")]
    UnsupportedScheme(String),

    /// An environment variable holds something that cannot be parsed.
    #[error("invalid value for {key}: '{value}'")]
    InvalidVariable {
        /// The variable name.
        key: &'static str,
        /// The raw value.
        value: String,
    },

    /// A parsed value is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
