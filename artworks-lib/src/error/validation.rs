//! Validation error types

/// A pagination request that was rejected before touching any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Page indices are 1-based.
    #[error("page index must be at least 1, got {0}")]
    PageIndex(u32),

    /// Page size outside the accepted range.
    #[error("page size must be between {min} and {max}, got {value}")]
    PageSize {
        /// The rejected size.
        value: u32,
        /// Smallest accepted size.
        min: u32,
        /// Largest accepted size.
        max: u32,
    },
}
