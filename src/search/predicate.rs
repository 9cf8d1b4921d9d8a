//! Store-agnostic filter built from field flags and a keyword.
//!
//! A [`Predicate`] is always `id > 0 AND (c1 OR c2 OR ...)`; with no
//! conditions it degenerates to the guard alone. The repository translates it
//! into SQL, [`Predicate::matches`] evaluates it in memory.

use crate::domain::document::Document;
use crate::domain::item::{Item, SellStatus};
use crate::search::fields::{FieldTable, SearchField};

/// Single OR-ed condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Case-sensitive substring match on a text field.
    Contains(SearchField, String),
    /// Exact match on the sell status.
    StatusIs(SellStatus),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Predicate {
    any_of: Vec<Condition>,
}

impl Predicate {
    /// Guard only: every row with a positive id.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Builds the predicate for `flags` and `keyword` against the entity's
    /// field table.
    ///
    /// Unknown flags are ignored. A status flag only contributes when the
    /// keyword is exactly one of the [`SellStatus`] literals.
    pub fn build<I>(table: &FieldTable, flags: I, keyword: Option<&str>) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let Some(keyword) = keyword else {
            return Self::unfiltered();
        };

        let any_of = table
            .resolve_all(flags)
            .into_iter()
            .filter_map(|field| condition_for(field, keyword))
            .collect();

        Self { any_of }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.any_of
    }

    pub fn is_unfiltered(&self) -> bool {
        self.any_of.is_empty()
    }

    /// Evaluates the predicate against an in-memory row.
    pub fn matches<S: Searchable + ?Sized>(&self, row: &S) -> bool {
        if row.row_id() <= 0 {
            return false;
        }
        if self.any_of.is_empty() {
            return true;
        }
        self.any_of.iter().any(|condition| match condition {
            Condition::Contains(field, keyword) => row
                .text(*field)
                .is_some_and(|value| value.contains(keyword.as_str())),
            Condition::StatusIs(status) => row.sell_status() == Some(*status),
        })
    }
}

fn condition_for(field: SearchField, keyword: &str) -> Option<Condition> {
    if field.is_enumerated() {
        // Only the literal values of the enum activate a status condition.
        return match keyword.parse::<SellStatus>() {
            Ok(status) => Some(Condition::StatusIs(status)),
            Err(_) => {
                log::debug!("Keyword '{keyword}' is not a sell status, skipping status flag");
                None
            }
        };
    }
    Some(Condition::Contains(field, keyword.to_string()))
}

/// Rows the predicate can be evaluated against in memory.
pub trait Searchable {
    fn row_id(&self) -> i32;
    fn text(&self, field: SearchField) -> Option<&str>;
    fn sell_status(&self) -> Option<SellStatus> {
        None
    }
}

impl Searchable for Document {
    fn row_id(&self) -> i32 {
        self.id.get()
    }

    fn text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Title => Some(self.title.as_str()),
            SearchField::Content => Some(self.content.as_str()),
            SearchField::Writer => Some(self.writer.as_str()),
            _ => None,
        }
    }
}

impl Searchable for Item {
    fn row_id(&self) -> i32 {
        self.id.get()
    }

    fn text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(self.name.as_str()),
            SearchField::Detail => Some(self.detail.as_str()),
            _ => None,
        }
    }

    fn sell_status(&self) -> Option<SellStatus> {
        Some(self.sell_status)
    }
}
