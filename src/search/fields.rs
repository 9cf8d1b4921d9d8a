//! Static mapping from single-character field flags to searchable fields.

use std::collections::BTreeSet;

use crate::search::SearchError;

/// Searchable field of a listed entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchField {
    Title,
    Content,
    Writer,
    Name,
    Detail,
    /// Enumerated sell status; matched by exact literal instead of substring.
    Status,
}

impl SearchField {
    /// Whether the field holds an enum literal rather than free text.
    pub const fn is_enumerated(self) -> bool {
        matches!(self, SearchField::Status)
    }
}

/// Per-entity vocabulary of field flags.
#[derive(Debug)]
pub struct FieldTable {
    entity: &'static str,
    entries: &'static [(char, SearchField)],
}

/// Documents: `t` title, `c` content, `w` writer.
pub static DOCUMENT_FIELDS: FieldTable = FieldTable {
    entity: "document",
    entries: &[
        ('t', SearchField::Title),
        ('c', SearchField::Content),
        ('w', SearchField::Writer),
    ],
};

/// Catalog items: `n` name, `d` detail, `s` sell status.
pub static ITEM_FIELDS: FieldTable = FieldTable {
    entity: "item",
    entries: &[
        ('n', SearchField::Name),
        ('d', SearchField::Detail),
        ('s', SearchField::Status),
    ],
};

impl FieldTable {
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Looks up a single flag.
    pub fn resolve(&self, flag: char) -> Result<SearchField, SearchError> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == flag)
            .map(|(_, field)| *field)
            .ok_or(SearchError::InvalidSearchField {
                entity: self.entity,
                flag,
            })
    }

    /// Resolves every flag, collapsing duplicates. Unknown flags are dropped.
    pub fn resolve_all<I>(&self, flags: I) -> BTreeSet<SearchField>
    where
        I: IntoIterator<Item = char>,
    {
        flags
            .into_iter()
            .filter_map(|flag| match self.resolve(flag) {
                Ok(field) => Some(field),
                Err(err) => {
                    log::debug!("Ignoring search flag: {err}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_document_flags() {
        assert_eq!(DOCUMENT_FIELDS.resolve('t'), Ok(SearchField::Title));
        assert_eq!(DOCUMENT_FIELDS.resolve('c'), Ok(SearchField::Content));
        assert_eq!(DOCUMENT_FIELDS.resolve('w'), Ok(SearchField::Writer));
    }

    #[test]
    fn item_flags_are_not_document_flags() {
        assert_eq!(
            DOCUMENT_FIELDS.resolve('n'),
            Err(SearchError::InvalidSearchField {
                entity: "document",
                flag: 'n'
            })
        );
        assert_eq!(ITEM_FIELDS.resolve('s'), Ok(SearchField::Status));
    }

    #[test]
    fn resolve_all_drops_unknown_and_duplicates() {
        let fields = DOCUMENT_FIELDS.resolve_all("twxtq".chars());
        assert_eq!(
            fields.into_iter().collect::<Vec<_>>(),
            vec![SearchField::Title, SearchField::Writer]
        );
    }
}
