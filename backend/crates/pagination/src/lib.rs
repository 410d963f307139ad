//! Search parameter normalisation and pagination envelopes.
//!
//! Repositories across the catalogue accept the same untrusted search
//! request shape (`page`, `per_page`, `sort`, `sort_dir`, `filter`) and
//! answer with the same paginated result shape. This crate owns both ends
//! of that contract so every adapter produces identical paging metadata:
//!
//! - [`SearchInput`] captures raw request values exactly as received.
//! - [`SearchParams`] is the normalised request. Invalid paging values are
//!   clamped to their defaults rather than rejected.
//! - [`SearchFilter`] lets each entity type describe how its filter shape is
//!   parsed out of the raw request.
//! - [`SearchResult`] packages one page of items together with the echoed
//!   request and the computed `last_page`.
//! - [`Pagination`] is the outward-facing envelope serialised to clients.
//!
//! # Examples
//!
//! ```
//! use pagination::{SearchParams, SearchResult, SortDirection};
//!
//! let params = SearchParams::<String>::new()
//!     .with_page(2)
//!     .with_per_page(2)
//!     .with_sort("name");
//! assert_eq!(params.sort_dir(), Some(SortDirection::Asc));
//!
//! let result = SearchResult::new(vec!["a"], 3, &params);
//! assert_eq!(result.last_page(), 2);
//! ```

mod filter;
mod input;
mod params;
mod result;

pub use filter::SearchFilter;
pub use input::{SearchInput, coerce_text};
pub use params::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, ParseSortDirectionError, SearchDefaults, SearchParams,
    SortDirection,
};
pub use result::{Pagination, SearchResult, last_page};
