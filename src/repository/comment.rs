use chrono::Utc;
use diesel::prelude::*;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::CommentId;
use crate::models::comment::{Comment as DbComment, NewComment as DbNewComment};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CommentListQuery, CommentReader, CommentWriter, DieselRepository};
use crate::schema::comments;

impl CommentReader for DieselRepository {
    fn list_comments(&self, query: &CommentListQuery) -> RepositoryResult<(usize, Vec<Comment>)> {
        let mut conn = self.conn()?;

        let query_builder = || {
            comments::table
                .filter(comments::document_id.eq(query.document_id.get()))
                .into_boxed::<diesel::sqlite::Sqlite>()
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(comments::id.asc());
        if let Some(pagination) = &query.pagination {
            let (offset, limit) = pagination.offset_limit()?;
            items = items.offset(offset).limit(limit);
        }

        let comments = items
            .load::<DbComment>(&mut conn)?
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, comments))
    }

    fn get_comment(&self, id: CommentId) -> RepositoryResult<Option<Comment>> {
        let mut conn = self.conn()?;

        let row = comments::table
            .find(id.get())
            .first::<DbComment>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(Comment::try_from(row)?)),
            None => Ok(None),
        }
    }
}

impl CommentWriter for DieselRepository {
    fn create_comment(&self, new_comment: &NewComment) -> RepositoryResult<Comment> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = diesel::insert_into(comments::table)
            .values(&DbNewComment::from_domain(new_comment, now))
            .get_result::<DbComment>(&mut conn)?;

        Ok(Comment::try_from(row)?)
    }

    fn update_comment(&self, id: CommentId, text: &str) -> RepositoryResult<Comment> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = diesel::update(comments::table.find(id.get()))
            .set((comments::text.eq(text), comments::updated_at.eq(now)))
            .get_result::<DbComment>(&mut conn)?;

        Ok(Comment::try_from(row)?)
    }

    fn delete_comment(&self, id: CommentId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(comments::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
