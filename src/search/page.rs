use serde::Serialize;

use crate::search::SearchResult;
use crate::search::request::SearchRequest;
use crate::search::window::PageWindow;

/// One page of projected rows plus the pagination window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub page: usize,
    pub size: usize,
    pub total: usize,
    pub start: usize,
    pub end: usize,
    pub prev: bool,
    pub next: bool,
    #[serde(rename = "dtoList")]
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    /// Result for an empty match: every field zeroed.
    pub fn empty() -> Self {
        Self {
            page: 0,
            size: 0,
            total: 0,
            start: 0,
            end: 0,
            prev: false,
            next: false,
            items: Vec::new(),
        }
    }

    /// Combines the request, the projected rows and the total row count.
    pub fn assemble(request: &SearchRequest, items: Vec<T>, total: usize) -> SearchResult<Self> {
        if total == 0 {
            return Ok(Self::empty());
        }

        let window = PageWindow::compute(request.page, request.size, total)?;

        Ok(Self {
            page: request.page,
            size: request.size,
            total,
            start: window.start,
            end: window.end,
            prev: window.prev,
            next: window.next,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::search::SearchError;

    #[test]
    fn zero_total_yields_empty_page() {
        let result = PageResult::assemble(&SearchRequest::new(3, 10), vec!["ignored"], 0)
            .expect("assembles");
        assert_eq!(result, PageResult::empty());
        assert!(result.items.is_empty());
    }

    #[test]
    fn copies_request_and_window() {
        let items: Vec<u32> = (1..=10).collect();
        let result = PageResult::assemble(&SearchRequest::new(11, 10), items.clone(), 250)
            .expect("assembles");
        assert_eq!(result.page, 11);
        assert_eq!(result.size, 10);
        assert_eq!(result.total, 250);
        assert_eq!(result.start, 11);
        assert_eq!(result.end, 20);
        assert!(result.prev);
        assert!(result.next);
        assert_eq!(result.items, items);
    }

    #[test]
    fn rejects_zero_size_when_rows_exist() {
        let result = PageResult::assemble(&SearchRequest::new(1, 0), vec![1], 5);
        assert!(matches!(result, Err(SearchError::InvalidPagination(_))));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let result = PageResult::assemble(&SearchRequest::new(1, 10), vec![7], 1)
            .expect("assembles");
        let value = serde_json::to_value(&result).expect("serializes");
        assert_eq!(
            value,
            json!({
                "page": 1,
                "size": 10,
                "total": 1,
                "start": 1,
                "end": 1,
                "prev": false,
                "next": false,
                "dtoList": [7],
            })
        );
    }
}
