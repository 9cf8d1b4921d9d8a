//! Replies attached to board documents.

use crate::domain::comment::NewComment;
use crate::domain::types::{CommentId, DocumentId};
use crate::dto::comment::CommentDto;
use crate::forms::comment::{CommentForm, CommentTextForm};
use crate::repository::{CommentListQuery, CommentReader, CommentWriter};
use crate::search::page::PageResult;
use crate::search::projector::project_comment;
use crate::search::request::SearchRequest;
use crate::services::{ServiceError, ServiceResult, log_write_failure};

/// Comments of a document, oldest first. Keyword and flags are ignored.
pub fn list_comments<R>(
    repo: &R,
    document_id: i32,
    request: SearchRequest,
    default_page_size: usize,
) -> ServiceResult<PageResult<CommentDto>>
where
    R: CommentReader + ?Sized,
{
    let document_id = DocumentId::new(document_id)?;
    let request = request.normalized(default_page_size);
    let query = CommentListQuery::new(document_id).paginate(request.page, request.size);

    let (total, comments) = repo.list_comments(&query).map_err(|err| {
        log::error!("Failed to list comments of document {document_id}: {err}");
        err
    })?;

    let items = comments.into_iter().map(project_comment).collect();

    Ok(PageResult::assemble(&request, items, total)?)
}

pub fn read_comment<R>(repo: &R, id: i32) -> ServiceResult<CommentDto>
where
    R: CommentReader + ?Sized,
{
    let id = CommentId::new(id)?;

    repo.get_comment(id)?
        .map(project_comment)
        .ok_or(ServiceError::NotFound)
}

pub fn register_comment<R>(repo: &R, form: CommentForm) -> ServiceResult<i32>
where
    R: CommentWriter + ?Sized,
{
    let new_comment = NewComment::try_from(form)?;

    let comment = repo
        .create_comment(&new_comment)
        .inspect_err(|err| log_write_failure("register comment", err))?;

    Ok(comment.id.get())
}

pub fn modify_comment<R>(repo: &R, id: i32, form: CommentTextForm) -> ServiceResult<CommentDto>
where
    R: CommentWriter + ?Sized,
{
    let id = CommentId::new(id)?;
    let text = form.into_text()?;

    let comment = repo.update_comment(id, &text)?;
    Ok(project_comment(comment))
}

pub fn remove_comment<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CommentWriter + ?Sized,
{
    let id = CommentId::new(id)?;

    repo.delete_comment(id)?;
    Ok(())
}
