//! Validated page request.

use crate::error::ValidationError;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A page index and page size that are known to be in range.
///
/// The only way to build one is through [`PageRequest::new`], so a
/// [`PageSource`](super::PageSource) never sees out-of-range input.
///
/// # Example
///
/// ```
/// use artworks_lib::api::PageRequest;
///
/// let request = PageRequest::new(3, 25).unwrap();
/// assert_eq!(request.index(), 3);
/// assert_eq!(request.offset(), 50);
///
/// assert!(PageRequest::new(0, 25).is_err());
/// assert!(PageRequest::new(1, 1001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: u32,
    size: u32,
}

impl PageRequest {
    /// Validates and creates a request for the 1-based page `index`.
    pub fn new(index: u32, size: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            index: validate_page_index(index)?,
            size: validate_page_size(size)?,
        })
    }

    /// Builds a request from values already validated elsewhere.
    pub(crate) fn from_validated(index: u32, size: u32) -> Self {
        debug_assert!(validate_page_index(index).is_ok());
        debug_assert!(validate_page_size(size).is_ok());
        Self { index, size }
    }

    /// Returns the 1-based page index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the number of records requested.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the number of records that precede this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.index - 1) * u64::from(self.size)
    }
}

/// Checks that a page index is 1-based.
pub fn validate_page_index(index: u32) -> Result<u32, ValidationError> {
    if index == 0 {
        return Err(ValidationError::PageIndex(index));
    }
    Ok(index)
}

/// Checks that a page size is within [`MIN_PAGE_SIZE`]..=[`MAX_PAGE_SIZE`].
pub fn validate_page_size(size: u32) -> Result<u32, ValidationError> {
    if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
        return Err(ValidationError::PageSize {
            value: size,
            min: MIN_PAGE_SIZE,
            max: MAX_PAGE_SIZE,
        });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_bounds() {
        assert!(validate_page_size(1).is_ok());
        assert!(validate_page_size(1000).is_ok());
        assert_eq!(
            validate_page_size(0),
            Err(ValidationError::PageSize {
                value: 0,
                min: 1,
                max: 1000
            })
        );
        assert!(validate_page_size(1001).is_err());
    }

    #[test]
    fn test_page_index_is_one_based() {
        assert_eq!(validate_page_index(0), Err(ValidationError::PageIndex(0)));
        assert_eq!(validate_page_index(1), Ok(1));
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let request = PageRequest::new(u32::MAX, MAX_PAGE_SIZE).unwrap();
        assert_eq!(request.offset(), u64::from(u32::MAX - 1) * 1000);
    }
}
