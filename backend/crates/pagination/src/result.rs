//! Paginated search results and the outward-facing envelope.

use serde::Serialize;

use crate::params::{SearchParams, SortDirection};

/// Number of pages needed for `total` items, never less than one.
///
/// # Examples
///
/// ```
/// use pagination::last_page;
///
/// assert_eq!(last_page(0, 15), 1);
/// assert_eq!(last_page(31, 15), 3);
/// ```
#[must_use]
pub const fn last_page(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(per_page);
    if pages == 0 { 1 } else { pages }
}

/// One page of search results with metadata.
///
/// Read model only: constructed once from the filtered count, the page of
/// items and the request that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T, F> {
    items: Vec<T>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<T, F: Clone> SearchResult<T, F> {
    /// Package a page of items, echoing the request metadata.
    #[must_use]
    pub fn new(items: Vec<T>, total: usize, params: &SearchParams<F>) -> Self {
        Self {
            items,
            total,
            current_page: params.page(),
            per_page: params.per_page(),
            last_page: last_page(total, params.per_page()),
            sort: params.sort().map(ToOwned::to_owned),
            sort_dir: params.sort_dir(),
            filter: params.filter().cloned(),
        }
    }
}

impl<T, F> SearchResult<T, F> {
    /// Items on the current page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Count of matching items before pagination.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Page these items belong to.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size used for this result.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Final page number, at least one.
    #[must_use]
    pub const fn last_page(&self) -> usize {
        self.last_page
    }

    /// Echoed sort field.
    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Echoed sort direction.
    #[must_use]
    pub const fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    /// Echoed filter.
    #[must_use]
    pub const fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Transform every item while keeping the metadata.
    #[must_use]
    pub fn map_items<U>(self, transform: impl FnMut(T) -> U) -> SearchResult<U, F> {
        SearchResult {
            items: self.items.into_iter().map(transform).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }

    /// Project into the client-facing envelope, dropping the echoed request.
    #[must_use]
    pub fn into_pagination<U>(self, transform: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            items: self.items.into_iter().map(transform).collect(),
            total: self.total,
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
        }
    }
}

/// Client-facing pagination envelope.
///
/// Serialises as `{ items, total, current_page, last_page, per_page }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// Count of matching items before pagination.
    pub total: usize,
    /// Page these items belong to.
    pub current_page: usize,
    /// Final page number, at least one.
    pub last_page: usize,
    /// Page size used for this result.
    pub per_page: usize,
}

#[cfg(test)]
mod tests {
    //! Pagination metadata arithmetic and envelope shape.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(0, 15, 1)]
    #[case(1, 15, 1)]
    #[case(15, 15, 1)]
    #[case(16, 15, 2)]
    #[case(3, 2, 2)]
    #[case(4, 20, 1)]
    #[case(100, 1, 100)]
    fn last_page_rounds_up(#[case] total: usize, #[case] per_page: usize, #[case] expected: usize) {
        assert_eq!(last_page(total, per_page), expected);
    }

    #[rstest]
    fn result_echoes_request() {
        let params = SearchParams::new()
            .with_page(2)
            .with_per_page(2)
            .with_sort("name")
            .with_sort_dir("desc")
            .with_filter("a".to_owned());
        let result = SearchResult::new(vec![1, 2], 5, &params);

        assert_eq!(result.items(), &[1, 2]);
        assert_eq!(result.total(), 5);
        assert_eq!(result.current_page(), 2);
        assert_eq!(result.per_page(), 2);
        assert_eq!(result.last_page(), 3);
        assert_eq!(result.sort(), Some("name"));
        assert_eq!(result.sort_dir(), Some(SortDirection::Desc));
        assert_eq!(result.filter().map(String::as_str), Some("a"));
    }

    #[rstest]
    fn map_items_keeps_metadata() {
        let params = SearchParams::<String>::new().with_per_page(1);
        let result = SearchResult::new(vec![3], 2, &params).map_items(|item| item * 10);

        assert_eq!(result.items(), &[30]);
        assert_eq!(result.last_page(), 2);
    }

    #[rstest]
    fn envelope_omits_echoed_request() {
        let params = SearchParams::new()
            .with_sort("name")
            .with_filter("x".to_owned());
        let envelope = SearchResult::new(vec!["a"], 1, &params).into_pagination(str::to_uppercase);

        assert_eq!(
            serde_json::to_value(&envelope).unwrap_or_default(),
            json!({
                "items": ["A"],
                "total": 1,
                "current_page": 1,
                "last_page": 1,
                "per_page": 15,
            })
        );
    }
}
