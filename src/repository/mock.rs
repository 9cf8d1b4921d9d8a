//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::attachment::{Attachment, ItemImage};
use crate::domain::comment::{Comment, NewComment};
use crate::domain::document::{Document, DocumentAggregate, NewDocument, UpdateDocument};
use crate::domain::item::{Item, NewItem, UpdateItem};
use crate::domain::types::{CommentId, DocumentId, ItemId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CommentListQuery, CommentReader, CommentWriter, DocumentReader, DocumentWriter, ItemReader,
    ItemWriter, SearchQuery,
};

mock! {
    pub Repository {}

    impl DocumentReader for Repository {
        fn search_documents(
            &self,
            query: &SearchQuery,
        ) -> RepositoryResult<(usize, Vec<(Document, Vec<Attachment>)>)>;
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

    impl DocumentWriter for Repository {
        fn create_document(&self, new_document: &NewDocument) -> RepositoryResult<Document>;
        fn update_document(
            &self,
            id: DocumentId,
            updates: &UpdateDocument,
        ) -> RepositoryResult<Document>;
        fn delete_document(&self, id: DocumentId) -> RepositoryResult<()>;
    }

    impl CommentReader for Repository {
        fn list_comments(&self, query: &CommentListQuery) -> RepositoryResult<(usize, Vec<Comment>)>;
        fn get_comment(&self, id: CommentId) -> RepositoryResult<Option<Comment>>;
    }

    impl CommentWriter for Repository {
        fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment>;
        fn update_comment(&self, id: CommentId, text: &str) -> RepositoryResult<Comment>;
        fn delete_comment(&self, id: CommentId) -> RepositoryResult<()>;
    }

    impl ItemReader for Repository {
        fn search_items(
            &self,
            query: &SearchQuery,
        ) -> RepositoryResult<(usize, Vec<(Item, Vec<ItemImage>)>)>;
        fn get_item_with_images(
            &self,
            id: ItemId,
        ) -> RepositoryResult<Option<(Item, Vec<ItemImage>)>>;
    }

    impl ItemWriter for Repository {
        fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
        fn update_item(&self, id: ItemId, updates: &UpdateItem) -> RepositoryResult<Item>;
        fn delete_item(&self, id: ItemId) -> RepositoryResult<()>;
    }
}
