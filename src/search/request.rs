//! Search request carried by listing endpoints.

use serde::{Deserialize, Serialize};

use crate::search::fields::FieldTable;
use crate::search::predicate::Predicate;
use crate::search::{SearchError, SearchResult};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Requested page plus optional keyword filter.
///
/// `kind` holds the concatenated field flags (e.g. `"tc"`), serialized as
/// `type` to match the query string used by the web layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(rename = "type", default, skip_serializing_if = "is_blank")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            kind: None,
            keyword: None,
        }
    }
}

impl SearchRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn search(mut self, kind: impl Into<String>, keyword: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self.keyword = Some(keyword.into());
        self
    }

    /// Field flags in request order, duplicates included.
    pub fn types(&self) -> Vec<char> {
        self.kind
            .as_deref()
            .map(|kind| kind.chars().collect())
            .unwrap_or_default()
    }

    /// Replaces a zero page with the first page and a zero size with
    /// `default_size`.
    pub fn normalized(mut self, default_size: usize) -> Self {
        if self.page == 0 {
            self.page = DEFAULT_PAGE;
        }
        if self.size == 0 {
            self.size = if default_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                default_size
            };
        }
        self
    }

    /// Builds the filter for this request against an entity's field table.
    pub fn predicate(&self, table: &FieldTable) -> Predicate {
        Predicate::build(table, self.types(), self.keyword.as_deref())
    }

    /// Query-string form used for navigation links, e.g.
    /// `page=2&size=10&type=tc&keyword=rust+book`.
    pub fn link(&self) -> SearchResult<String> {
        serde_html_form::to_string(self).map_err(|e| SearchError::LinkEncoding(e.to_string()))
    }
}
