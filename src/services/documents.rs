//! Board document listings and CRUD.

use crate::domain::types::DocumentId;
use crate::dto::document::{DocumentCommentCountDto, DocumentDto, DocumentListAllDto};
use crate::forms::document::{DocumentForm, DocumentPayload};
use crate::repository::{DocumentReader, DocumentWriter};
use crate::search::fields::DOCUMENT_FIELDS;
use crate::search::page::PageResult;
use crate::search::projector::{
    project_document, project_document_with_all, project_document_with_count,
};
use crate::search::request::SearchRequest;
use crate::services::{ServiceError, ServiceResult, log_write_failure, search_query};

/// Page of documents with their attachments in wire form.
pub fn list_documents<R>(
    repo: &R,
    request: SearchRequest,
    default_page_size: usize,
) -> ServiceResult<PageResult<DocumentDto>>
where
    R: DocumentReader + ?Sized,
{
    let (request, query) = search_query(request, &DOCUMENT_FIELDS, default_page_size);

    let (total, rows) = repo.search_documents(&query).map_err(|err| {
        log::error!("Failed to list documents: {err}");
        err
    })?;

    let items = rows
        .into_iter()
        .map(|(document, attachments)| project_document(document, attachments))
        .collect();

    Ok(PageResult::assemble(&request, items, total)?)
}

/// Page of documents with their comment counts.
pub fn list_documents_with_comment_count<R>(
    repo: &R,
    request: SearchRequest,
    default_page_size: usize,
) -> ServiceResult<PageResult<DocumentCommentCountDto>>
where
    R: DocumentReader + ?Sized,
{
    let (request, query) = search_query(request, &DOCUMENT_FIELDS, default_page_size);

    let (total, rows) = repo
        .search_documents_with_comment_count(&query)
        .map_err(|err| {
            log::error!("Failed to list documents with comment count: {err}");
            err
        })?;

    let items = rows
        .into_iter()
        .map(|(document, comment_count)| project_document_with_count(document, comment_count))
        .collect();

    Ok(PageResult::assemble(&request, items, total)?)
}

/// Page of documents with comment counts and ordered attachments.
pub fn list_documents_with_all<R>(
    repo: &R,
    request: SearchRequest,
    default_page_size: usize,
) -> ServiceResult<PageResult<DocumentListAllDto>>
where
    R: DocumentReader + ?Sized,
{
    let (request, query) = search_query(request, &DOCUMENT_FIELDS, default_page_size);

    let (total, rows) = repo.search_documents_with_all(&query).map_err(|err| {
        log::error!("Failed to list documents with comments and attachments: {err}");
        err
    })?;

    let items = rows.into_iter().map(project_document_with_all).collect();

    Ok(PageResult::assemble(&request, items, total)?)
}

pub fn read_document<R>(repo: &R, id: i32) -> ServiceResult<DocumentDto>
where
    R: DocumentReader + ?Sized,
{
    let id = DocumentId::new(id)?;

    match repo.get_document_with_attachments(id)? {
        Some((document, attachments)) => Ok(project_document(document, attachments)),
        None => Err(ServiceError::NotFound),
    }
}

/// Stores a new document and returns its id.
pub fn register_document<R>(repo: &R, form: DocumentForm) -> ServiceResult<i32>
where
    R: DocumentWriter + ?Sized,
{
    let payload = DocumentPayload::try_from(form)?;

    let document = repo
        .create_document(&payload.into_new())
        .inspect_err(|err| log_write_failure("register document", err))?;

    Ok(document.id.get())
}

/// Replaces title, content and the attachment list of a document.
pub fn modify_document<R>(repo: &R, id: i32, form: DocumentForm) -> ServiceResult<DocumentDto>
where
    R: DocumentReader + DocumentWriter + ?Sized,
{
    let id = DocumentId::new(id)?;
    let payload = DocumentPayload::try_from(form)?;

    repo.update_document(id, &payload.into_update())
        .inspect_err(|err| log_write_failure(&format!("modify document {id}"), err))?;

    read_document(repo, id.get())
}

/// Deletes a document together with its comments and attachments.
pub fn remove_document<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: DocumentWriter + ?Sized,
{
    let id = DocumentId::new(id)?;

    repo.delete_document(id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::attachment::Attachment;
    use crate::domain::document::{Document, DocumentAggregate};
    use crate::domain::types::{AttachmentToken, FileName, Title, WriterName};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn document(id: i32) -> Document {
        let now = Utc::now().naive_utc();
        Document {
            id: DocumentId::new(id).expect("valid id"),
            title: Title::new(format!("Post {id}")).expect("valid title"),
            content: "Body".to_string(),
            writer: WriterName::new("alice").expect("valid writer"),
            created_at: now,
            updated_at: now,
        }
    }

    fn attachment(token: &str, ord: i32) -> Attachment {
        Attachment {
            token: AttachmentToken::new(token).expect("valid token"),
            file_name: FileName::new(format!("{token}.png")).expect("valid file"),
            ord,
        }
    }

    #[test]
    fn empty_match_returns_zeroed_page() {
        let mut repo = MockRepository::new();
        repo.expect_search_documents()
            .times(1)
            .returning(|_| Ok((0, Vec::new())));

        let page = list_documents(&repo, SearchRequest::new(3, 10), 10).expect("lists");

        assert_eq!(page, PageResult::empty());
    }

    #[test]
    fn zero_page_and_size_are_normalized() {
        let mut repo = MockRepository::new();
        repo.expect_search_documents()
            .withf(|query| {
                query.pagination.is_some_and(|p| p.page == 1 && p.per_page == 15)
            })
            .times(1)
            .returning(|_| Ok((1, vec![(document(1), Vec::new())])));

        let page = list_documents(&repo, SearchRequest::new(0, 0), 15).expect("lists");

        assert_eq!((page.page, page.size, page.total), (1, 15, 1));
        assert_eq!((page.start, page.end), (1, 1));
    }

    #[test]
    fn keyword_flags_reach_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_search_documents_with_comment_count()
            .withf(|query| query.predicate.conditions().len() == 2)
            .times(1)
            .returning(|_| Ok((25, vec![(document(9), 4)])));

        let request = SearchRequest::new(2, 10).search("tcz", "rust");
        let page = list_documents_with_comment_count(&repo, request, 10).expect("lists");

        assert_eq!((page.start, page.end, page.prev, page.next), (1, 3, false, false));
        assert_eq!(page.items[0].comment_count, 4);
    }

    #[test]
    fn list_with_all_orders_attachments() {
        let mut repo = MockRepository::new();
        repo.expect_search_documents_with_all()
            .times(1)
            .returning(|_| {
                Ok((
                    1,
                    vec![DocumentAggregate {
                        document: document(1),
                        comment_count: 2,
                        attachments: vec![
                            attachment("c", 2),
                            attachment("a", 0),
                            attachment("b", 1),
                        ],
                    }],
                ))
            });

        let page = list_documents_with_all(&repo, SearchRequest::default(), 10).expect("lists");

        let ords: Vec<i32> = page.items[0].attachments.iter().map(|a| a.ord).collect();
        assert_eq!(ords, vec![0, 1, 2]);
        assert_eq!(page.items[0].comment_count, 2);
    }

    #[test]
    fn missing_document_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_document_with_attachments()
            .times(1)
            .returning(|_| Ok(None));

        assert!(matches!(
            read_document(&repo, 42),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn non_positive_id_never_reaches_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_get_document_with_attachments().times(0);

        assert!(matches!(
            read_document(&repo, 0),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn register_passes_attachments_in_order() {
        let mut repo = MockRepository::new();
        repo.expect_create_document()
            .withf(|new_document| {
                new_document
                    .attachments
                    .iter()
                    .map(|a| a.token.as_str())
                    .eq(["z", "a"])
            })
            .times(1)
            .returning(|_| Ok(document(7)));

        let form = DocumentForm {
            title: "Weekly notes".to_string(),
            content: "Agenda".to_string(),
            writer: "alice".to_string(),
            file_names: vec!["z_last.txt".to_string(), "a_first.txt".to_string()],
        };

        assert_eq!(register_document(&repo, form).expect("registers"), 7);
    }

    #[test]
    fn remove_maps_missing_row_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_document()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            remove_document(&repo, 5),
            Err(ServiceError::NotFound)
        ));
    }
}
