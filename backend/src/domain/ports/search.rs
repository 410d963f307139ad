//! Shared search template used by every searchable repository.
//!
//! Adapters supply only the entity-specific pieces through
//! [`SearchHooks`]; [`apply_search`] always runs filter, then sort, then
//! paginate, and wraps the page into a [`SearchResult`].

use std::cmp::Ordering;

use pagination::{SearchFilter, SearchParams, SearchResult, SortDirection};

use crate::domain::Entity;

/// Entity-specific filter predicate and sort support.
pub trait SearchHooks<E: Entity>: Send + Sync + 'static {
    /// Filter shape accepted by searches over `E`.
    type Filter: SearchFilter + Clone + Send + Sync;

    /// Fields a caller may sort by.
    const SORTABLE_FIELDS: &'static [&'static str];

    /// Whether `entity` satisfies every populated part of `filter`.
    fn matches(entity: &E, filter: &Self::Filter) -> bool;

    /// Ascending comparison of `left` and `right` on an allow-listed field.
    fn compare_field(field: &str, left: &E, right: &E) -> Ordering;
}

/// Run the filter, sort and paginate steps over `entities`.
///
/// Unknown or missing sort fields order by `created_at` descending. Both
/// orders are stable. Pages past the end yield no items.
pub fn apply_search<E, H>(
    entities: Vec<E>,
    params: &SearchParams<H::Filter>,
) -> SearchResult<E, H::Filter>
where
    E: Entity,
    H: SearchHooks<E>,
{
    let mut matching: Vec<E> = match params.filter() {
        Some(filter) => entities
            .into_iter()
            .filter(|entity| H::matches(entity, filter))
            .collect(),
        None => entities,
    };

    match params.sort().filter(|field| H::SORTABLE_FIELDS.contains(field)) {
        Some(field) => {
            let descending = params.sort_dir() == Some(SortDirection::Desc);
            matching.sort_by(|left, right| {
                let ordering = H::compare_field(field, left, right);
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        None => matching.sort_by(|left, right| right.created_at().cmp(&left.created_at())),
    }

    let total = matching.len();
    let items = matching
        .into_iter()
        .skip(params.offset())
        .take(params.limit())
        .collect();
    SearchResult::new(items, total, params)
}

/// Case-insensitive substring test used by text filters.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
