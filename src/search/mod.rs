//! Listing and search core: translates a [`request::SearchRequest`] into a
//! store-agnostic [`predicate::Predicate`], computes the pagination window and
//! projects fetched rows into response DTOs.

use thiserror::Error;

pub mod fields;
pub mod page;
pub mod predicate;
pub mod projector;
pub mod request;
pub mod window;

/// Errors raised by the search core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Field flag outside the entity vocabulary. Never surfaced to callers:
    /// the predicate builder logs and drops the flag.
    #[error("unknown search field flag '{flag}' for {entity}")]
    InvalidSearchField { entity: &'static str, flag: char },

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("failed to encode search link: {0}")]
    LinkEncoding(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
