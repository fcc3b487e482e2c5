//! Core identifier newtypes with smart constructors.
//!
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Stable unique identifier of a book record (e.g. "/works/OL45804W").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookKey(String);

/// Error returned when a book key is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Book key must not be empty")]
pub struct InvalidBookKey;

impl BookKey {
    /// Smart constructor: validates non-empty key.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidBookKey> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(InvalidBookKey)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based page cursor for the paginated search endpoint.
///
/// # Invariants
/// - Always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

/// Error returned when attempting to construct page zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Page numbers are 1-based (got {0})")]
pub struct InvalidPageNumber(pub u32);

impl PageNumber {
    /// The first page of every query.
    pub const FIRST: Self = Self(1);

    /// Smart constructor that rejects 0.
    pub fn new(page: u32) -> Result<Self, InvalidPageNumber> {
        if page == 0 {
            Err(InvalidPageNumber(page))
        } else {
            Ok(Self(page))
        }
    }

    /// Page number for the page that follows `loaded` already-fetched pages.
    pub fn after(loaded: usize) -> Self {
        let next = u32::try_from(loaded).unwrap_or(u32::MAX - 1);
        Self(next.saturating_add(1))
    }

    /// Get the raw 1-based value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// The following page.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one collection instance.
///
/// A new generation is minted every time the active query is (re)established;
/// fetch outcomes tagged with an older generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    /// Create a generation from a raw counter value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The generation minted after this one.
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}
