//! Repository traits and the Diesel-backed implementation.
//!
//! Listing reads go through [`SearchQuery`]: the translated predicate, the
//! requested window and a sort order. Readers return `(total, rows)` where
//! `total` counts every row matching the predicate, not just the page.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::attachment::{Attachment, ItemImage};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::document::{Document, DocumentAggregate, NewDocument, UpdateDocument};
use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::domain::types::{CommentId, DocumentId, ItemId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::search::predicate::Predicate;

pub mod comment;
pub mod document;
pub mod errors;
pub mod filter;
pub mod item;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Maximum number of parent ids bound into a single child `IN (...)` query.
pub const DEFAULT_BATCH_SIZE: usize = 20;

#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    batch_size: usize,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Overrides the child batch size; zero falls back to the default.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = if batch_size == 0 {
            DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Splits parent ids into the id lists of consecutive child queries.
pub fn plan_batches(ids: &[i32], batch_size: usize) -> Vec<Vec<i32>> {
    ids.chunks(batch_size.max(1))
        .map(<[i32]>::to_vec)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// SQL `(offset, limit)` for a 1-based page.
    pub fn offset_limit(&self) -> RepositoryResult<(i64, i64)> {
        if self.page == 0 || self.per_page == 0 {
            return Err(RepositoryError::InvalidPagination(format!(
                "page {} with size {}",
                self.page, self.per_page
            )));
        }
        let offset = (self.page - 1)
            .checked_mul(self.per_page)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or_else(|| {
                RepositoryError::InvalidPagination(format!(
                    "offset overflow for page {} with size {}",
                    self.page, self.per_page
                ))
            })?;
        let limit = i64::try_from(self.per_page)
            .map_err(|_| RepositoryError::InvalidPagination("page size too large".to_string()))?;
        Ok((offset, limit))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    IdDesc,
    IdAsc,
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub predicate: Predicate,
    pub pagination: Option<Pagination>,
    pub sort: SortOrder,
}

impl SearchQuery {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            pagination: None,
            sort: SortOrder::default(),
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// `(offset, limit)` to apply; an unpaginated query reads every row.
    pub fn window(&self) -> RepositoryResult<(i64, i64)> {
        match &self.pagination {
            Some(pagination) => pagination.offset_limit(),
            None => Ok((0, i64::MAX)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommentListQuery {
    pub document_id: DocumentId,
    pub pagination: Option<Pagination>,
}

impl CommentListQuery {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait DocumentReader {
    fn search_documents(&self, query: &SearchQuery)
    -> RepositoryResult<(usize, Vec<(Document, Vec<Attachment>)>)>;
    fn search_documents_with_comment_count(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<(Document, i64)>)>;
    fn search_documents_with_all(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<DocumentAggregate>)>;
    fn get_document_with_attachments(
        &self,
        id: DocumentId,
    ) -> RepositoryResult<Option<(Document, Vec<Attachment>)>>;
}

pub trait DocumentWriter {
    fn create_document(&self, new_document: &NewDocument) -> RepositoryResult<Document>;
    fn update_document(
        &self,
        id: DocumentId,
        updates: &UpdateDocument,
    ) -> RepositoryResult<Document>;
    fn delete_document(&self, id: DocumentId) -> RepositoryResult<()>;
}

pub trait CommentReader {
    fn list_comments(&self, query: &CommentListQuery) -> RepositoryResult<(usize, Vec<Comment>)>;
    fn get_comment(&self, id: CommentId) -> RepositoryResult<Option<Comment>>;
}

pub trait CommentWriter {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
    fn update_comment(&self, id: CommentId, text: &str) -> RepositoryResult<Comment>;
    fn delete_comment(&self, id: CommentId) -> RepositoryResult<()>;
}

pub trait ItemReader {
    fn search_items(&self, query: &SearchQuery)
    -> RepositoryResult<(usize, Vec<(Item, Vec<ItemImage>)>)>;
    fn get_item_with_images(&self, id: ItemId)
    -> RepositoryResult<Option<(Item, Vec<ItemImage>)>>;
}

pub trait ItemWriter {
    fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
    fn update_item(&self, id: ItemId, updates: &UpdateItem) -> RepositoryResult<Item>;
    fn delete_item(&self, id: ItemId) -> RepositoryResult<()>;
}
