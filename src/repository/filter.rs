//! Diesel rendering of a [`Predicate`].
//!
//! Filters are generic over the query source so the same predicate applies
//! to a bare table and to its left join with a child table.

use diesel::expression::BoxableExpression;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Integer, Text};
use diesel::sqlite::Sqlite;

use crate::schema::{documents, items};
use crate::search::fields::SearchField;
use crate::search::predicate::{Condition, Predicate};

diesel::define_sql_function! {
    /// 1-based position of `needle` in `haystack`, 0 when absent. Unlike
    /// SQLite `LIKE` this is case-sensitive.
    fn instr(haystack: Text, needle: Text) -> Integer;
}

pub type BoxedFilter<QS> = Box<dyn BoxableExpression<QS, Sqlite, SqlType = Bool>>;

/// `guard AND (c1 OR c2 ...)`, or the guard alone without conditions.
fn combine<QS: 'static>(
    guard: BoxedFilter<QS>,
    conditions: impl Iterator<Item = BoxedFilter<QS>>,
) -> BoxedFilter<QS> {
    match conditions.reduce(|any, next| Box::new(any.or(next))) {
        Some(any) => Box::new(guard.and(any)),
        None => guard,
    }
}

pub fn document_filter<QS: 'static>(predicate: &Predicate) -> BoxedFilter<QS>
where
    documents::id: SelectableExpression<QS>,
    documents::title: SelectableExpression<QS>,
    documents::content: SelectableExpression<QS>,
    documents::writer: SelectableExpression<QS>,
{
    let conditions = predicate
        .conditions()
        .iter()
        .filter_map(|condition| -> Option<BoxedFilter<QS>> {
            match condition {
                Condition::Contains(SearchField::Title, keyword) => {
                    Some(Box::new(instr(documents::title, keyword.clone()).gt(0)))
                }
                Condition::Contains(SearchField::Content, keyword) => {
                    Some(Box::new(instr(documents::content, keyword.clone()).gt(0)))
                }
                Condition::Contains(SearchField::Writer, keyword) => {
                    Some(Box::new(instr(documents::writer, keyword.clone()).gt(0)))
                }
                other => {
                    log::debug!("condition {other:?} does not apply to documents");
                    None
                }
            }
        });

    combine(Box::new(documents::id.gt(0)), conditions)
}

pub fn item_filter<QS: 'static>(predicate: &Predicate) -> BoxedFilter<QS>
where
    items::id: SelectableExpression<QS>,
    items::name: SelectableExpression<QS>,
    items::detail: SelectableExpression<QS>,
    items::sell_status: SelectableExpression<QS>,
{
    let conditions = predicate
        .conditions()
        .iter()
        .filter_map(|condition| -> Option<BoxedFilter<QS>> {
            match condition {
                Condition::Contains(SearchField::Name, keyword) => {
                    Some(Box::new(instr(items::name, keyword.clone()).gt(0)))
                }
                Condition::Contains(SearchField::Detail, keyword) => {
                    Some(Box::new(instr(items::detail, keyword.clone()).gt(0)))
                }
                Condition::StatusIs(status) => Some(Box::new(items::sell_status.eq(status.as_str()))),
                other => {
                    log::debug!("condition {other:?} does not apply to items");
                    None
                }
            }
        });

    combine(Box::new(items::id.gt(0)), conditions)
}
