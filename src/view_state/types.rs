//! Core paging newtypes

use serde::Serialize;

use crate::model::error::PaginationError;

/// 1-based page number. Always >= 1.
///
/// Construction never fails: zero, negative and unparseable input all
/// normalize to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Create from a raw 1-based value, saturating 0 up to 1.
    pub fn new(page: usize) -> Self {
        Self(page.max(1))
    }

    /// Create from possibly-negative caller input.
    pub fn from_signed(page: i64) -> Self {
        if page < 1 {
            Self::FIRST
        } else {
            Self::new(usize::try_from(page).unwrap_or(usize::MAX))
        }
    }

    /// Normalize free-form text (query strings, form fields) into a page number.
    ///
    /// Anything that is not a positive integer yields page 1.
    pub fn from_input(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .map(Self::from_signed)
            .unwrap_or(Self::FIRST)
    }

    /// Get the raw 1-based value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 0-based index of this page.
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// Clamp into `[1, max(total_pages, 1)]`.
    pub fn clamp_to(&self, total_pages: usize) -> Self {
        Self(self.0.min(total_pages.max(1)))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Items per page. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    /// Smart constructor that rejects zero.
    pub fn new(size: usize) -> Result<Self, PaginationError> {
        if size == 0 {
            Err(PaginationError::InvalidConfiguration { value: 0 })
        } else {
            Ok(Self(size))
        }
    }

    /// Smart constructor for possibly-negative caller input.
    pub fn from_signed(size: i64) -> Result<Self, PaginationError> {
        if size < 1 {
            return Err(PaginationError::InvalidConfiguration { value: size });
        }
        Ok(Self(usize::try_from(size).unwrap_or(usize::MAX)))
    }

    /// Get the raw value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Number of pages needed for `total_items`. Zero items need zero pages.
    pub fn pages_for(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}
