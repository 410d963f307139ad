//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod category_existence;
mod repository;
mod search;

#[cfg(test)]
pub use category_existence::MockCategoryExistence;
pub use category_existence::CategoryExistence;
pub use repository::{ExistsById, Repository, RepositoryError, SearchableRepository, StoreError};
pub use search::{SearchHooks, apply_search, contains_ignore_case};
