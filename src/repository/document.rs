//! Document listings and persistence.
//!
//! Every listing runs one count query, one page query and then loads
//! attachments for the page in `IN (...)` batches of at most
//! `batch_size` ids, so the query count never depends on the page size.

use std::collections::HashMap;

use chrono::Utc;
use diesel::dsl::{count, count_distinct};
use diesel::helper_types::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::attachment::Attachment;
use crate::domain::document::{Document, DocumentAggregate, NewDocument, UpdateDocument};
use crate::domain::types::DocumentId;
use crate::models::attachment::{
    DocumentAttachment as DbDocumentAttachment, document_attachment_rows,
};
use crate::models::document::{
    Document as DbDocument, NewDocument as DbNewDocument, UpdateDocument as DbUpdateDocument,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::filter::document_filter;
use crate::repository::{
    DieselRepository, DocumentReader, DocumentWriter, SearchQuery, SortOrder, plan_batches,
};
use crate::schema::{comments, document_attachments, documents};

type DocumentsWithComments = LeftJoinQuerySource<documents::table, comments::table>;

impl DieselRepository {
    fn count_documents(
        &self,
        conn: &mut SqliteConnection,
        query: &SearchQuery,
    ) -> RepositoryResult<usize> {
        let total = documents::table
            .filter(document_filter::<documents::table>(&query.predicate))
            .count()
            .get_result::<i64>(conn)?;
        Ok(total as usize)
    }

    /// Attachments of `document_ids`, grouped by owner and ordered by `ord`.
    fn load_attachments(
        &self,
        conn: &mut SqliteConnection,
        document_ids: &[i32],
    ) -> RepositoryResult<HashMap<i32, Vec<Attachment>>> {
        let mut grouped: HashMap<i32, Vec<Attachment>> = HashMap::new();

        for batch in plan_batches(document_ids, self.batch_size()) {
            let rows = document_attachments::table
                .filter(document_attachments::document_id.eq_any(batch))
                .order((document_attachments::document_id, document_attachments::ord))
                .load::<DbDocumentAttachment>(conn)?;

            for row in rows {
                let Some(document_id) = row.document_id else {
                    continue;
                };
                grouped
                    .entry(document_id)
                    .or_default()
                    .push(Attachment::try_from(row)?);
            }
        }

        Ok(grouped)
    }
}

impl DocumentReader for DieselRepository {
    fn search_documents(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<(Document, Vec<Attachment>)>)> {
        let (offset, limit) = query.window()?;
        let mut conn = self.conn()?;

        let total = self.count_documents(&mut conn, query)?;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let mut rows = documents::table
            .filter(document_filter::<documents::table>(&query.predicate))
            .into_boxed::<Sqlite>();
        rows = match query.sort {
            SortOrder::IdDesc => rows.order(documents::id.desc()),
            SortOrder::IdAsc => rows.order(documents::id.asc()),
        };
        let rows = rows
            .offset(offset)
            .limit(limit)
            .load::<DbDocument>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let mut attachments = self.load_attachments(&mut conn, &ids)?;

        let documents = rows
            .into_iter()
            .map(|row| {
                let children = attachments.remove(&row.id).unwrap_or_default();
                Ok((Document::try_from(row)?, children))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, documents))
    }

    fn search_documents_with_comment_count(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<(Document, i64)>)> {
        let (offset, limit) = query.window()?;
        let mut conn = self.conn()?;

        let total = self.count_documents(&mut conn, query)?;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let grouped = documents::table
            .left_join(comments::table)
            .filter(document_filter::<DocumentsWithComments>(&query.predicate))
            .group_by(documents::id)
            .select((documents::all_columns, count(comments::id.nullable())));
        let rows = match query.sort {
            SortOrder::IdDesc => grouped
                .order(documents::id.desc())
                .offset(offset)
                .limit(limit)
                .load::<(DbDocument, i64)>(&mut conn)?,
            SortOrder::IdAsc => grouped
                .order(documents::id.asc())
                .offset(offset)
                .limit(limit)
                .load::<(DbDocument, i64)>(&mut conn)?,
        };

        let documents = rows
            .into_iter()
            .map(|(row, comment_count)| Ok((Document::try_from(row)?, comment_count)))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, documents))
    }

    fn search_documents_with_all(
        &self,
        query: &SearchQuery,
    ) -> RepositoryResult<(usize, Vec<DocumentAggregate>)> {
        let (offset, limit) = query.window()?;
        let mut conn = self.conn()?;

        let total = self.count_documents(&mut conn, query)?;
        if total == 0 {
            return Ok((0, Vec::new()));
        }

        let grouped = documents::table
            .left_join(comments::table)
            .filter(document_filter::<DocumentsWithComments>(&query.predicate))
            .group_by(documents::id)
            .select((
                documents::all_columns,
                count_distinct(comments::id.nullable()),
            ));
        let rows = match query.sort {
            SortOrder::IdDesc => grouped
                .order(documents::id.desc())
                .offset(offset)
                .limit(limit)
                .load::<(DbDocument, i64)>(&mut conn)?,
            SortOrder::IdAsc => grouped
                .order(documents::id.asc())
                .offset(offset)
                .limit(limit)
                .load::<(DbDocument, i64)>(&mut conn)?,
        };

        let ids: Vec<i32> = rows.iter().map(|(row, _)| row.id).collect();
        let mut attachments = self.load_attachments(&mut conn, &ids)?;

        let aggregates = rows
            .into_iter()
            .map(|(row, comment_count)| {
                let children = attachments.remove(&row.id).unwrap_or_default();
                Ok(DocumentAggregate {
                    document: Document::try_from(row)?,
                    comment_count,
                    attachments: children,
                })
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, aggregates))
    }

    fn get_document_with_attachments(
        &self,
        id: DocumentId,
    ) -> RepositoryResult<Option<(Document, Vec<Attachment>)>> {
        let mut conn = self.conn()?;

        let Some(row) = documents::table
            .find(id.get())
            .first::<DbDocument>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let mut attachments = self.load_attachments(&mut conn, &[row.id])?;
        let children = attachments.remove(&row.id).unwrap_or_default();

        Ok(Some((Document::try_from(row)?, children)))
    }
}

impl DocumentWriter for DieselRepository {
    fn create_document(&self, new_document: &NewDocument) -> RepositoryResult<Document> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = conn.transaction::<DbDocument, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(documents::table)
                .values(&DbNewDocument::from_domain(new_document, now))
                .get_result::<DbDocument>(conn)?;

            let attachments = document_attachment_rows(row.id, &new_document.attachments);
            if !attachments.is_empty() {
                diesel::insert_into(document_attachments::table)
                    .values(&attachments)
                    .execute(conn)?;
            }

            Ok(row)
        })?;

        Ok(Document::try_from(row)?)
    }

    fn update_document(
        &self,
        id: DocumentId,
        updates: &UpdateDocument,
    ) -> RepositoryResult<Document> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let row = conn.transaction::<DbDocument, RepositoryError, _>(|conn| {
            let row = diesel::update(documents::table.find(id.get()))
                .set(&DbUpdateDocument::from_domain(updates, now))
                .get_result::<DbDocument>(conn)?;

            // Detach the current set, then drop every orphan before the
            // replacement list is inserted.
            diesel::update(
                document_attachments::table.filter(document_attachments::document_id.eq(row.id)),
            )
            .set(document_attachments::document_id.eq(None::<i32>))
            .execute(conn)?;
            diesel::delete(
                document_attachments::table.filter(document_attachments::document_id.is_null()),
            )
            .execute(conn)?;

            let attachments = document_attachment_rows(row.id, &updates.attachments);
            if !attachments.is_empty() {
                diesel::insert_into(document_attachments::table)
                    .values(&attachments)
                    .execute(conn)?;
            }

            Ok(row)
        })?;

        Ok(Document::try_from(row)?)
    }

    fn delete_document(&self, id: DocumentId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(comments::table.filter(comments::document_id.eq(id.get())))
                .execute(conn)?;
            diesel::delete(
                document_attachments::table.filter(document_attachments::document_id.eq(id.get())),
            )
            .execute(conn)?;

            let deleted = diesel::delete(documents::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
