//! Error types

mod config;
mod fetch;
mod validation;

pub use config::*;
pub use fetch::*;
pub use validation::*;

/// Any error produced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page could not be fetched from the catalog.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A pagination request was rejected before any state changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
